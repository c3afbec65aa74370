use std::collections::BTreeMap;

use insta::assert_snapshot;
use linesmith_engine::{Css, FieldSpec, FormatOptions, Formatter, Value, clean_line, is_present};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn customer() -> BTreeMap<String, Value> {
    BTreeMap::from([
        ("name".to_string(), Value::from("Ada")),
        ("mobile".to_string(), Value::from("0123")),
        ("pan".to_string(), Value::Null),
        ("city".to_string(), Value::from("London")),
        ("tags".to_string(), Value::from(vec!["", "vip", "  ", "new"])),
        ("balance".to_string(), Value::Int(0)),
    ])
}

#[rstest]
#[case(Value::Int(0), "0")]
#[case(Value::from("0"), "0")]
fn zero_values_reach_output(#[case] value: Value, #[case] expected: &str) {
    assert!(is_present(&value));
    let mut f = Formatter::new();
    f.add_raw(value);
    assert_eq!(f.render(), expected);
}

#[rstest]
#[case(Value::Null)]
#[case(Value::from(""))]
#[case(Value::from(" \t "))]
#[case(Value::List(vec![]))]
fn absent_values_produce_no_parts(#[case] value: Value) {
    assert!(!is_present(&value));
    let mut f = Formatter::new();
    f.add(value.clone(), "Label").add_line(value, "Other");
    assert!(f.is_empty());
    assert_eq!(f.render(), "");
}

#[test]
fn cleaner_reaches_fixpoint() {
    assert_eq!(clean_line("  , A: 5 , "), "A: 5");
    assert_eq!(clean_line(", "), "");
    let once = clean_line(" | ; x: y ; | ");
    assert_eq!(clean_line(&once), once);
}

#[test]
fn plain_and_markup_line_grouping() {
    let mut plain = Formatter::new();
    plain.push_inline("A").push_break().push_inline("B");
    assert_eq!(plain.render(), "A\nB");

    let mut markup = Formatter::markup();
    markup
        .auto_clean(false)
        .push_inline("A")
        .push_break()
        .push_inline("B");
    assert_snapshot!(markup.render(), @"A<br>B");
}

#[test]
fn container_splits_preceding_line() {
    let mut f = Formatter::markup();
    f.push_inline("A")
        .open_container(Css::class("box"))
        .push_inline("B")
        .close_container();
    assert_snapshot!(f.render(), @r#"A<div class="box">B</div>"#);
}

#[test]
fn pending_class_applies_to_first_tag_only() {
    let mut f = Formatter::markup();
    f.with_class("x")
        .add_span("one", Css::none())
        .add_span("two", Css::none())
        .add_span("three", Css::class("y"));
    assert_snapshot!(
        f.render(),
        @r#"<span class="x">one</span><span>two</span><span class="y">three</span>"#
    );
}

#[test]
fn plain_mode_bold_does_not_consume_pending_class() {
    let mut f = Formatter::new();
    f.with_class("x")
        .add_bold("b", Css::none())
        .markup_mode(true)
        .add_span("s", Css::none());
    assert_snapshot!(f.render(), @r#"B<span class="x">s</span>"#);
}

#[test]
fn explicit_class_still_takes_pending_style() {
    let mut f = Formatter::markup();
    f.with_class("pending")
        .with_style("color: red")
        .add_div("note", Css::class("explicit"));
    assert_snapshot!(f.render(), @r#"<div class="explicit" style="color: red">note</div>"#);
}

#[test]
fn sections_are_independent() {
    let mut f = Formatter::new();
    f.add_raw("A").split();
    let frozen = f.collect_fragments();

    f.add_raw("B");
    assert_eq!(f.collect_fragments()[0], frozen[0]);
    assert_eq!(f.combine("|"), "A|B");
}

#[test]
fn empty_section_is_left_out_of_combine() {
    let mut f = Formatter::new();
    f.add_raw("A").split();
    f.add(Value::Null, "Missing").add_raw(", ").split();
    f.add_raw("B");
    assert_eq!(f.section_count(), 2);
    assert_eq!(f.combine(" / "), "A / B");
}

#[test]
fn grouped_inline_has_no_stray_delimiter() {
    let mut f = Formatter::new();
    f.add_inline(
        &customer(),
        &[
            FieldSpec::prefixed("mobile", "M"),
            FieldSpec::prefixed("pan", "PAN"),
            FieldSpec::prefixed("city", "City"),
        ],
        None,
    );
    assert_eq!(f.render(), "M: 0123, City: London");
}

#[test]
fn render_twice_is_identical() {
    let mut f = Formatter::markup();
    f.with_class("h")
        .add_title("Customer", Css::none())
        .add_inline_line(
            &customer(),
            &[FieldSpec::key("name"), FieldSpec::prefixed("tags", "Tags")],
            None,
        )
        .add("", "Empty")
        .add_with_suffix("0", "Balance", " GBP");
    let first = f.render();
    assert_eq!(f.render(), first);
    assert_snapshot!(
        first,
        @r#"<strong class="h">Customer</strong><br>Ada, Tags: vip, new<br>Balance: 0 GBP"#
    );
}

#[test]
fn plain_report_with_sections() {
    let data = customer();
    let mut f = Formatter::with_options(FormatOptions {
        item_delimiter: " | ".to_string(),
        ..FormatOptions::default()
    });
    f.add_title("customer", Css::none())
        .add_inline_line(
            &data,
            &[FieldSpec::key("name"), FieldSpec::key("pan"), FieldSpec::key("city")],
            None,
        )
        .split()
        .add_line_from(&data, "balance", "Balance")
        .add_bold("vip", Css::none());

    assert_eq!(
        f.collect_fragments(),
        vec!["CUSTOMER\nAda | London".to_string(), "Balance: 0\nVIP".to_string()]
    );
    assert_eq!(f.render(), "CUSTOMER\nAda | London\nBalance: 0\nVIP");
}

#[test]
fn auto_clean_repairs_optimistic_lines() {
    let mut f = Formatter::new();
    f.add(Value::Null, "Phone")
        .add_raw(" | ")
        .add("ada@example.com", "Email")
        .add_raw(" | ")
        .add(Value::Null, "Fax")
        .add_break()
        .add_raw("; ")
        .add_break()
        .add("London", "City")
        .add_raw(" - ");

    assert_eq!(f.render(), "Email: ada@example.com\nCity: London");
}

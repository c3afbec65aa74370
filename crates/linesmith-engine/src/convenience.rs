//! Presence-gated append operations built on the formatter primitives.
//!
//! Every operation here checks its value with [`Value::is_present`] first and
//! appends nothing when the value is absent.

use crate::{
    attrs::Css,
    fields::{FieldSource, FieldSpec},
    formatter::Formatter,
    value::Value,
};

fn labeled(prefix: &str, separator: &str, value: &str) -> String {
    if prefix.is_empty() {
        value.to_string()
    } else {
        format!("{prefix}{separator}{value}")
    }
}

impl Formatter {
    /// Appends `prefix: value` (or the bare value when `prefix` is empty).
    pub fn add(&mut self, value: impl Into<Value>, prefix: &str) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            let text = labeled(prefix, &self.options.prefix_separator, &value.normalize());
            self.push_inline(text);
        }
        self
    }

    /// Like [`add`](Self::add) with an explicit prefix separator.
    pub fn add_with_separator(
        &mut self,
        value: impl Into<Value>,
        prefix: &str,
        separator: &str,
    ) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            self.push_inline(labeled(prefix, separator, &value.normalize()));
        }
        self
    }

    /// Appends `prefix: value` followed by `suffix`, e.g. `Weight: 5kg`.
    pub fn add_with_suffix(
        &mut self,
        value: impl Into<Value>,
        prefix: &str,
        suffix: &str,
    ) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            let mut text = labeled(prefix, &self.options.prefix_separator, &value.normalize());
            text.push_str(suffix);
            self.push_inline(text);
        }
        self
    }

    pub fn add_raw(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            self.push_inline(value.normalize());
        }
        self
    }

    pub fn add_if(&mut self, condition: bool, value: impl Into<Value>, prefix: &str) -> &mut Self {
        if condition {
            self.add(value, prefix);
        }
        self
    }

    pub fn add_break(&mut self) -> &mut Self {
        self.push_break()
    }

    pub fn add_break_if(&mut self, condition: bool) -> &mut Self {
        if condition {
            self.push_break();
        }
        self
    }

    /// [`add`](Self::add) then a break, only when the value is present.
    pub fn add_line(&mut self, value: impl Into<Value>, prefix: &str) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            self.add(value, prefix).push_break();
        }
        self
    }

    pub fn add_raw_line(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            self.add_raw(value).push_break();
        }
        self
    }

    /// Each present value on its own line.
    pub fn add_lines<I>(&mut self, values: I, prefix: &str) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for value in values {
            self.add_line(value, prefix);
        }
        self
    }

    /// Appends the present `fields` of `data` as a single inline part.
    ///
    /// Values are joined with `delimiter`, or the item delimiter when `None`.
    /// Absent fields are skipped entirely so no stray delimiter is left.
    pub fn add_inline<S>(
        &mut self,
        data: &S,
        fields: &[FieldSpec],
        delimiter: Option<&str>,
    ) -> &mut Self
    where
        S: FieldSource + ?Sized,
    {
        let values = fields
            .iter()
            .filter_map(|spec| {
                let value = data.field(spec.name())?;
                value.is_present().then(|| {
                    labeled(spec.prefix(), &self.options.prefix_separator, &value.normalize())
                })
            })
            .collect::<Vec<_>>();
        self.push_joined(values, delimiter)
    }

    /// [`add_inline`](Self::add_inline) then a break, if anything was appended.
    pub fn add_inline_line<S>(
        &mut self,
        data: &S,
        fields: &[FieldSpec],
        delimiter: Option<&str>,
    ) -> &mut Self
    where
        S: FieldSource + ?Sized,
    {
        let before = self.len();
        self.add_inline(data, fields, delimiter);
        if self.len() > before {
            self.push_break();
        }
        self
    }

    /// Joins the present `values` into a single inline part.
    pub fn add_inline_values<I>(&mut self, values: I, delimiter: Option<&str>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = values
            .into_iter()
            .map(Into::into)
            .filter(Value::is_present)
            .map(|value| value.normalize())
            .collect::<Vec<_>>();
        self.push_joined(values, delimiter)
    }

    /// Each present keyed value on its own line, all behind the same prefix.
    pub fn add_multiple<S>(&mut self, data: &S, keys: &[&str], prefix: &str) -> &mut Self
    where
        S: FieldSource + ?Sized,
    {
        for key in keys {
            self.add_line_from(data, key, prefix);
        }
        self
    }

    pub fn add_from<S>(&mut self, data: &S, key: &str, prefix: &str) -> &mut Self
    where
        S: FieldSource + ?Sized,
    {
        if let Some(value) = data.field(key) {
            self.add(value, prefix);
        }
        self
    }

    pub fn add_line_from<S>(&mut self, data: &S, key: &str, prefix: &str) -> &mut Self
    where
        S: FieldSource + ?Sized,
    {
        if let Some(value) = data.field(key) {
            self.add_line(value, prefix);
        }
        self
    }

    fn push_joined(&mut self, values: Vec<String>, delimiter: Option<&str>) -> &mut Self {
        if !values.is_empty() {
            let joined = values.join(delimiter.unwrap_or(self.options.item_delimiter.as_str()));
            self.push_inline(joined);
        }
        self
    }

    // Styled and tagged content

    /// Title line: `<strong>` in markup mode, upper-cased in plain text.
    pub fn add_title(&mut self, title: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let title = title.into();
        if !title.is_present() {
            return self;
        }
        let title = title.normalize();
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_inline(format!("<strong{attrs}>{title}</strong>"));
        } else {
            self.push_inline(title.to_uppercase());
        }
        self.push_break()
    }

    /// [`add_title`](Self::add_title) followed by raw body content.
    pub fn add_title_with_content(
        &mut self,
        title: impl Into<Value>,
        content: impl Into<Value>,
        css: Css<'_>,
    ) -> &mut Self {
        let title = title.into();
        if title.is_present() {
            self.add_title(title, css).add_raw(content);
        }
        self
    }

    pub fn add_bold(&mut self, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let value = value.into();
        if !value.is_present() {
            return self;
        }
        let value = value.normalize();
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_inline(format!("<strong{attrs}>{value}</strong>"))
        } else {
            self.push_inline(value.to_uppercase())
        }
    }

    pub fn add_bold_line(&mut self, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let value = value.into();
        if value.is_present() {
            self.add_bold(value, css).push_break();
        }
        self
    }

    pub fn add_span(&mut self, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        self.add_tag("span", value, css)
    }

    /// Arbitrary `<tag>` around the value in markup mode; the bare value otherwise.
    pub fn add_tag(&mut self, tag: &str, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let value = value.into();
        if !value.is_present() {
            return self;
        }
        let value = value.normalize();
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_inline(format!("<{tag}{attrs}>{value}</{tag}>"))
        } else {
            self.push_inline(value)
        }
    }

    /// A `<div>` block in markup mode; inline text in plain mode.
    pub fn add_div(&mut self, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let value = value.into();
        if !value.is_present() {
            return self;
        }
        let value = value.normalize();
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_block(format!("<div{attrs}>{value}</div>"))
        } else {
            self.push_inline(value)
        }
    }

    /// A `<div>` block in markup mode; a full text line in plain mode.
    pub fn add_styled_line(&mut self, value: impl Into<Value>, css: Css<'_>) -> &mut Self {
        let value = value.into();
        if !value.is_present() {
            return self;
        }
        let value = value.normalize();
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_block(format!("<div{attrs}>{value}</div>"))
        } else {
            self.push_inline(value).push_break()
        }
    }

    /// Opens a styled `<div>` container (markup mode only).
    pub fn open_container(&mut self, css: Css<'_>) -> &mut Self {
        if self.options.markup_mode {
            let attrs = self.build_attributes(css);
            self.push_container_open(&attrs);
        }
        self
    }

    pub fn close_container(&mut self) -> &mut Self {
        self.push_container_close()
    }
}

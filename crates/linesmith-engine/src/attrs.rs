use html_escape::encode_quoted_attribute;

/// Explicit class/style for a single tag-emitting call.
///
/// Each property left as `None` falls back to the formatter's pending style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Css<'a> {
    pub class: Option<&'a str>,
    pub style: Option<&'a str>,
}

impl<'a> Css<'a> {
    /// No explicit attributes; pending style (if any) applies.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn class(class: &'a str) -> Self {
        Self {
            class: Some(class),
            style: None,
        }
    }

    pub fn style(style: &'a str) -> Self {
        Self {
            class: None,
            style: Some(style),
        }
    }

    pub fn with_style(mut self, style: &'a str) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Class/style stored for the next tag-emitting call. Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingStyle {
    pub class: Option<String>,
    pub style: Option<String>,
}

impl PendingStyle {
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.style.is_none()
    }
}

/// Resolves explicit attributes against `pending`, clearing `pending`.
///
/// Returns `""` or a leading-space fragment such as ` class="a" style="b"`.
/// Values are escaped for a quoted attribute; empty values are omitted.
pub fn build_attributes(pending: &mut PendingStyle, css: Css<'_>) -> String {
    let pending = std::mem::take(pending);

    let class = css.class.or(pending.class.as_deref());
    let style = css.style.or(pending.style.as_deref());

    let mut out = String::new();
    for (name, value) in [("class", class), ("style", style)] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_quoted_attribute(value));
            out.push('"');
        }
    }
    out
}

use serde::{Deserialize, Serialize};

/// Line-break token used in markup mode.
pub const MARKUP_BREAK: &str = "<br>";
/// Line-break token used in plain-text mode.
pub const TEXT_BREAK: &str = "\n";

/// Mode flags and default separators for a [`Formatter`](crate::Formatter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Emit literal markup (`<br>`, tags, containers) instead of plain text.
    pub markup_mode: bool,
    /// Strip dangling delimiters from the edges of each rendered line.
    pub auto_clean: bool,
    /// Joins the values of a grouped inline append.
    pub item_delimiter: String,
    /// Sits between a prefix and its value, as in `Name: Bob`.
    pub prefix_separator: String,
}

impl FormatOptions {
    pub fn line_break(&self) -> &'static str {
        if self.markup_mode {
            MARKUP_BREAK
        } else {
            TEXT_BREAK
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            markup_mode: false,
            auto_clean: true,
            item_delimiter: ", ".to_string(),
            prefix_separator: ": ".to_string(),
        }
    }
}

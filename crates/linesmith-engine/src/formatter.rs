use std::fmt;

use crate::{
    attrs::{Css, PendingStyle, build_attributes},
    options::FormatOptions,
    part::{Part, PartKind},
    render::render,
};

/// Accumulates parts and renders them as plain text or markup.
///
/// Every mutating call returns `&mut Self` so calls chain:
///
/// ```
/// use linesmith_engine::Formatter;
///
/// let out = Formatter::new()
///     .add("Bob", "Name")
///     .add_break()
///     .add("", "Phone")
///     .render();
/// assert_eq!(out, "Name: Bob");
/// ```
///
/// A formatter is a single-owner builder. It holds no locks; share it across
/// threads only behind external synchronization.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    pub(crate) parts: Vec<Part>,
    pub(crate) pending: PendingStyle,
    pub(crate) options: FormatOptions,
    pub(crate) sections: Vec<String>,
}

impl Formatter {
    /// A plain-text formatter with auto-clean on.
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter in markup mode.
    pub fn markup() -> Self {
        Self::with_options(FormatOptions {
            markup_mode: true,
            ..FormatOptions::default()
        })
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn markup_mode(&mut self, enabled: bool) -> &mut Self {
        self.options.markup_mode = enabled;
        self
    }

    pub fn auto_clean(&mut self, enabled: bool) -> &mut Self {
        self.options.auto_clean = enabled;
        self
    }

    /// Sets the delimiter used between grouped inline values.
    pub fn with_delimiter(&mut self, delimiter: impl Into<String>) -> &mut Self {
        self.options.item_delimiter = delimiter.into();
        self
    }

    /// Sets the separator placed between a prefix and its value.
    pub fn with_prefix_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.options.prefix_separator = separator.into();
        self
    }

    /// Uses the mode's line break as the grouped inline delimiter.
    pub fn with_line_delimiter(&mut self) -> &mut Self {
        self.options.item_delimiter = self.line_break().to_string();
        self
    }

    /// `<br>` in markup mode, `\n` otherwise.
    pub fn line_break(&self) -> &'static str {
        self.options.line_break()
    }

    // Pending style

    /// Class for the next tag-emitting call only.
    pub fn with_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.pending.class = Some(class.into());
        self
    }

    /// Inline CSS for the next tag-emitting call only.
    pub fn with_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.pending.style = Some(style.into());
        self
    }

    /// Sets whichever of class and style is given; the other is left as is.
    pub fn with_css(&mut self, class: Option<&str>, style: Option<&str>) -> &mut Self {
        if let Some(class) = class {
            self.pending.class = Some(class.to_string());
        }
        if let Some(style) = style {
            self.pending.style = Some(style.to_string());
        }
        self
    }

    /// Resolves `css` against the pending style and consumes the pending style.
    pub fn build_attributes(&mut self, css: Css<'_>) -> String {
        build_attributes(&mut self.pending, css)
    }

    // Primitives

    pub fn push_inline(&mut self, text: impl Into<String>) -> &mut Self {
        self.parts.push(Part::new(PartKind::Inline, text));
        self
    }

    pub fn push_break(&mut self) -> &mut Self {
        let token = self.line_break();
        self.parts.push(Part::new(PartKind::Break, token));
        self
    }

    pub fn push_block(&mut self, content: impl Into<String>) -> &mut Self {
        self.parts.push(Part::new(PartKind::Block, content));
        self
    }

    /// Opens a `<div>` container with a pre-built attribute fragment.
    /// Containers have no plain-text form; this is a no-op outside markup mode.
    pub fn push_container_open(&mut self, attrs: &str) -> &mut Self {
        if self.options.markup_mode {
            self.parts
                .push(Part::new(PartKind::ContainerOpen, format!("<div{attrs}>")));
        }
        self
    }

    pub fn push_container_close(&mut self) -> &mut Self {
        if self.options.markup_mode {
            self.parts.push(Part::new(PartKind::ContainerClose, "</div>"));
        }
        self
    }

    // Introspection

    /// Number of parts in the current (unsplit) unit.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Drops all parts and finalized sections.
    pub fn clear(&mut self) -> &mut Self {
        self.parts.clear();
        self.reset_sections()
    }

    /// Renders the accumulated output.
    ///
    /// Once [`split`](Self::split) has been called the sections are combined
    /// with the mode line break; otherwise the current parts are rendered.
    pub fn render(&self) -> String {
        if self.sections.is_empty() {
            self.render_current()
        } else {
            self.combine(self.line_break())
        }
    }

    pub(crate) fn render_current(&self) -> String {
        render(&self.parts, &self.options)
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

//! Splitting one formatter's output into independently rendered fragments.

use crate::{formatter::Formatter, value::Value};

impl Formatter {
    /// Freezes the current parts into a finalized section and starts afresh.
    ///
    /// The section is rendered immediately, so later appends or mode changes
    /// never affect it. Does nothing when there are no current parts.
    pub fn split(&mut self) -> &mut Self {
        if !self.parts.is_empty() {
            let rendered = self.render_current();
            log::debug!(
                "finalized section {} from {} parts",
                self.sections.len(),
                self.parts.len()
            );
            self.sections.push(rendered);
            self.parts.clear();
        }
        self
    }

    /// Finalized sections oldest first, then the open section if it has parts.
    pub fn collect_fragments(&self) -> Vec<String> {
        let mut fragments = self.sections.clone();
        if !self.parts.is_empty() {
            fragments.push(self.render_current());
        }
        fragments
    }

    /// Joins the non-blank fragments with `separator`.
    pub fn combine(&self, separator: &str) -> String {
        self.collect_fragments()
            .into_iter()
            .filter(|fragment| Value::from(fragment.as_str()).is_present())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Number of finalized sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Forgets finalized sections. Current parts are kept.
    pub fn reset_sections(&mut self) -> &mut Self {
        if !self.sections.is_empty() {
            log::debug!("discarding {} finalized sections", self.sections.len());
        }
        self.sections.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::Formatter;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_on_empty_is_noop() {
        let mut f = Formatter::new();
        f.split().split();
        assert_eq!(f.section_count(), 0);
        assert!(f.collect_fragments().is_empty());
    }

    #[test]
    fn finalized_sections_are_frozen() {
        let mut f = Formatter::new();
        f.push_inline("A").split();
        f.markup_mode(true).push_inline("B").push_break().push_inline("C");
        assert_eq!(f.collect_fragments(), vec!["A", "B<br>C"]);
    }

    #[test]
    fn combine_skips_blank_sections() {
        let mut f = Formatter::new();
        f.push_inline("A").split();
        f.push_inline(" , ").split();
        f.push_inline("B");
        assert_eq!(f.collect_fragments(), vec!["A", "", "B"]);
        assert_eq!(f.combine("|"), "A|B");
    }

    #[test]
    fn render_after_split_combines_with_line_break() {
        let mut f = Formatter::new();
        f.push_inline("A").split().push_inline("B");
        assert_eq!(f.render(), "A\nB");

        f.split();
        assert!(f.is_empty());
        assert_eq!(f.render(), "A\nB");
    }

    #[test]
    fn reset_keeps_current_parts() {
        let mut f = Formatter::new();
        f.push_inline("A").split().push_inline("B");
        f.reset_sections();
        assert_eq!(f.section_count(), 0);
        assert_eq!(f.render(), "B");
    }
}

//! Two-phase rendering of a part list into a single string.
//!
//! Phase 1 groups parts into lines and container entries. Phase 2 cleans the
//! lines, drops blank ones and joins runs of lines with the mode line break,
//! splicing container tags in verbatim.

use crate::{
    clean::clean_line,
    options::FormatOptions,
    part::{Part, PartKind},
};

/// Output of line grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A logical line of content.
    Line {
        text: String,
        /// Came from a single [`PartKind::Block`] part rather than inline runs.
        block: bool,
    },
    /// A container tag, never cleaned or joined with neighbouring lines.
    Container(String),
}

/// Accumulates parts into [`Entry`] values (phase 1).
#[derive(Debug, Default)]
pub struct LineGrouper {
    current: String,
    out: Vec<Entry>,
}

impl LineGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: &Part) {
        match part.kind() {
            PartKind::Inline => self.current.push_str(part.content()),
            PartKind::Break => self.flush_line(),
            PartKind::Block => {
                self.flush_line();
                self.out.push(Entry::Line {
                    text: part.content().to_string(),
                    block: true,
                });
            }
            PartKind::ContainerOpen | PartKind::ContainerClose => {
                self.flush_line();
                self.out.push(Entry::Container(part.content().to_string()));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Entry> {
        self.flush_line();
        self.out
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let text = std::mem::take(&mut self.current);
            self.out.push(Entry::Line { text, block: false });
        }
    }
}

/// Groups `parts` into lines and container entries.
pub fn group_lines(parts: &[Part]) -> Vec<Entry> {
    let mut grouper = LineGrouper::new();
    for part in parts {
        grouper.push(part);
    }
    grouper.finish()
}

/// Joins grouped entries into the final string (phase 2).
pub fn assemble(entries: Vec<Entry>, options: &FormatOptions) -> String {
    let line_break = options.line_break();
    let mut result = String::new();
    let mut pending: Vec<String> = vec![];

    for entry in entries {
        match entry {
            Entry::Container(tag) => {
                if !pending.is_empty() {
                    result.push_str(&pending.join(line_break));
                    pending.clear();
                }
                result.push_str(&tag);
            }
            Entry::Line { text, block } => {
                let text = if options.auto_clean && !is_own_block_tag(&text, block, options) {
                    clean_line(&text)
                } else {
                    text
                };
                if !text.trim().is_empty() {
                    pending.push(text);
                }
            }
        }
    }

    if !pending.is_empty() {
        result.push_str(&pending.join(line_break));
    }
    result
}

/// Renders `parts` under `options`. Pure; the part list is only read.
pub fn render(parts: &[Part], options: &FormatOptions) -> String {
    let entries = group_lines(parts);
    log::trace!("rendering {} parts as {} entries", parts.len(), entries.len());
    assemble(entries, options)
}

/// Block lines holding a `<div>` emitted by the formatter are left uncleaned,
/// since their edges are tags rather than content.
fn is_own_block_tag(text: &str, block: bool, options: &FormatOptions) -> bool {
    block && options.markup_mode && (text.starts_with("<div") || text.starts_with("</div>"))
}

/// The role a [`Part`] plays when lines are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Concatenated onto the current line.
    Inline,
    /// Ends the current line.
    Break,
    /// Occupies a line of its own.
    Block,
    /// Opening tag of a structural container (markup mode only).
    ContainerOpen,
    /// Closing tag of a structural container (markup mode only).
    ContainerClose,
}

/// One appended unit of content. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    content: String,
    kind: PartKind,
}

impl Part {
    pub fn new(kind: PartKind, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, PartKind::ContainerOpen | PartKind::ContainerClose)
    }
}

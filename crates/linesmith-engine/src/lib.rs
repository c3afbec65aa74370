//! Fluent assembly of labeled text and markup lines.
//!
//! A [`Formatter`] accumulates [`Part`]s and renders them as plain text or
//! markup, skipping absent values and repairing dangling delimiters left at
//! the edges of lines.

pub mod attrs;
pub mod clean;
mod convenience;
pub mod fields;
mod formatter;
pub mod options;
pub mod part;
pub mod render;
mod sections;
pub mod value;

// Re-export key types for easier usage
pub use attrs::{Css, PendingStyle};
pub use clean::clean_line;
pub use fields::{FieldSource, FieldSpec};
pub use formatter::Formatter;
pub use options::FormatOptions;
pub use part::{Part, PartKind};
pub use value::{Value, is_present, normalize};

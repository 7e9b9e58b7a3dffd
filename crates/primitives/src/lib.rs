//! Core types for sticky notes: records, colors, and identifiers.

/// Note color palette and random color assignment.
pub mod color;
/// Identifier types for notes in a live view.
pub mod ids;
/// Persisted note records.
pub mod record;

pub use color::{ColorSource, CycleColors, NoteColor, RandomColors};
pub use ids::NoteId;
pub use record::NoteRecord;

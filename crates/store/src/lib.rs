//! Persistence for the notes board.
//!
//! The board keeps two entries in a flat key-value layer:
//!
//! - [`NOTES_KEY`]: the full note list as one JSON blob, rewritten wholesale on
//!   every mutation.
//! - [`DARK_MODE_KEY`]: the theme flag, stored as `"true"` / `"false"`.
//!
//! The layer itself is the [`KeyValueStore`] port. [`MemoryStore`] keeps
//! entries in process; [`FileStore`] keeps them in a single JSON file that is
//! rewritten atomically on each change. [`Storage`] wraps either one with the
//! typed load/save operations the view uses.
//!
//! Loading never fails: a missing entry is an empty board, and a malformed
//! notes blob is logged, cleared, and treated as empty.

pub mod error;
pub mod file;
pub mod kv;
pub mod notes;
pub mod storage;
pub mod theme;

pub use error::{BlobError, Result, StoreError};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use notes::NOTES_KEY;
pub use storage::Storage;
pub use theme::DARK_MODE_KEY;

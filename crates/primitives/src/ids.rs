/// Stable identifier for a note within one session.
///
/// Ids are allocated in increasing order by the view and never persisted; a
/// reload assigns fresh ids in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub u64);

impl NoteId {
	/// Returns the id following this one.
	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

impl std::fmt::Display for NoteId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// A single alternative answer.
///
/// An `AnswerRow` holds an opaque identifier and the raw text typed into each
/// blank. Blank indices are 1-based: `blanks[0]` is blank 1.
///
/// # Invariants
/// - The identifier is never changed after construction
/// - Looking up a blank that was never set yields `None`, never an error
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnswerRow {
	/// Identifier, unique within the owning collection.
	id: String,

	/// Raw (untrimmed) blank values, blank `i` stored at `i - 1`.
	#[serde(default)]
	blanks: Vec<String>,
}

impl AnswerRow {
	/// Creates a row without any blank values.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into(), blanks: Vec::new() }
	}

	/// Creates a row from values given in blank order (blank 1 first).
	pub fn with_blanks<I, S>(id: impl Into<String>, blanks: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			id: id.into(),
			blanks: blanks.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates a row holding `count` empty blanks.
	pub fn empty(id: impl Into<String>, count: usize) -> Self {
		Self { id: id.into(), blanks: vec![String::new(); count] }
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Number of blanks stored in this row.
	pub fn len(&self) -> usize {
		self.blanks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.blanks.is_empty()
	}

	/// Returns the raw value of blank `index` (1-based).
	///
	/// Index 0 and indices past the stored blanks are absent.
	pub fn blank(&self, index: usize) -> Option<&str> {
		let slot = index.checked_sub(1)?;
		self.blanks.get(slot).map(String::as_str)
	}

	/// Iterates over the raw values in blank order.
	pub fn blanks(&self) -> impl Iterator<Item = &str> {
		self.blanks.iter().map(String::as_str)
	}

	/// Stores the raw value of blank `index` (1-based).
	///
	/// Missing blanks below `index` are filled with empty strings.
	///
	/// # Errors
	/// Returns `InvalidBlankIndex` for index 0.
	pub fn set_blank(&mut self, index: usize, value: impl Into<String>) -> Result<(), SheetError> {
		let slot = index
			.checked_sub(1)
			.ok_or(SheetError::InvalidBlankIndex { index, max: self.blanks.len().max(1) })?;
		if self.blanks.len() <= slot {
			self.blanks.resize(slot + 1, String::new());
		}
		self.blanks[slot] = value.into();
		Ok(())
	}

	/// Pads with empty blanks or drops trailing blanks so exactly `count` remain.
	pub fn resize(&mut self, count: usize) {
		self.blanks.resize(count, String::new());
	}

	/// Empties every blank, keeping their number.
	pub fn clear(&mut self) {
		self.blanks.iter_mut().for_each(String::clear);
	}
}

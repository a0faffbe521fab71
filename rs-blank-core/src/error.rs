use std::fmt;

/// Errors raised when mutating an `AnswerSheet` or an `AnswerRow`.
///
/// Expression generation never fails; only host-side edits can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
	/// No row with this identifier exists in the sheet.
	RowNotFound {
		/// The identifier that was looked up
		id: String,
	},
	/// Removing the row would leave the sheet empty.
	LastRow,
	/// A blank index outside `1..=max` was addressed.
	InvalidBlankIndex {
		/// The requested (1-based) index
		index: usize,
		/// The highest valid index
		max: usize,
	},
	/// A sheet was built without any row.
	EmptySheet,
	/// Two rows of a sheet share an identifier.
	DuplicateRow {
		/// The repeated identifier
		id: String,
	},
	/// A blank count could not be parsed as an integer.
	InvalidBlankCount {
		/// The raw input
		input: String,
	},
}

impl fmt::Display for SheetError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SheetError::RowNotFound { id } => write!(f, "Row '{}' not found", id),
			SheetError::LastRow => write!(f, "At least one answer row must remain"),
			SheetError::InvalidBlankIndex { index, max } => write!(
				f,
				"Blank index {} out of range (valid range: 1..={})",
				index, max
			),
			SheetError::EmptySheet => write!(f, "A sheet needs at least one answer row"),
			SheetError::DuplicateRow { id } => write!(f, "Row '{}' appears more than once", id),
			SheetError::InvalidBlankCount { input } => {
				write!(f, "Blank count '{}' is not an integer", input)
			}
		}
	}
}

impl std::error::Error for SheetError {}

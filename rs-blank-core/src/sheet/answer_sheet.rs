use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::blank_count::{clamp_blank_count, DEFAULT_BLANKS};
use super::row_id::random_row_id;
use crate::error::SheetError;
use crate::expression::answer_row::AnswerRow;
use crate::expression::generator::generate_expression;

/// Mutable answer sheet owned by a host (server, UI, ...).
///
/// # Responsibilities
/// - Track the blank count shared by every row
/// - Keep the ordered list of answer rows (order = disjunction order)
/// - Apply user edits and re-derive the expression on demand
///
/// # Invariants
/// - `MIN_BLANKS <= blank_count <= MAX_BLANKS`
/// - `rows` is never empty
/// - Every row holds exactly `blank_count` blanks
/// - Row identifiers are unique
///
/// Deserialization goes through `RawSheet`, so the invariants also hold for
/// sheets read back from JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawSheet")]
pub struct AnswerSheet {
	blank_count: usize,
	rows: Vec<AnswerRow>,
}

/// Unchecked wire form of an `AnswerSheet`.
#[derive(Deserialize)]
struct RawSheet {
	blank_count: i64,
	rows: Vec<AnswerRow>,
}

impl TryFrom<RawSheet> for AnswerSheet {
	type Error = SheetError;

	/// Clamps the blank count and resizes every row to it.
	///
	/// # Errors
	/// - `EmptySheet` if there are no rows
	/// - `DuplicateRow` if two rows share an identifier
	fn try_from(raw: RawSheet) -> Result<Self, Self::Error> {
		if raw.rows.is_empty() {
			return Err(SheetError::EmptySheet);
		}

		let mut seen = HashSet::new();
		for row in &raw.rows {
			if !seen.insert(row.id()) {
				return Err(SheetError::DuplicateRow { id: row.id().to_owned() });
			}
		}

		let blank_count = clamp_blank_count(raw.blank_count);
		let mut rows = raw.rows;
		for row in &mut rows {
			row.resize(blank_count);
		}
		Ok(Self { blank_count, rows })
	}
}

/// Read-only snapshot of a sheet together with its expression.
///
/// This is what hosts hand to their presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SheetView {
	pub blank_count: usize,
	pub rows: Vec<AnswerRow>,
	pub expression: String,
}

impl SheetView {
	/// The expression if there is anything worth copying, see `is_copyable`.
	pub fn copyable_expression(&self) -> Option<&str> {
		Some(self.expression.as_str()).filter(|e| is_copyable(e))
	}
}

/// An expression is worth copying unless it is empty or a bare `()`.
pub fn is_copyable(expression: &str) -> bool {
	!expression.is_empty() && expression != "()"
}

impl Default for AnswerSheet {
	/// Two blanks and a single empty row with id `"1"`.
	fn default() -> Self {
		Self::new(DEFAULT_BLANKS as i64)
	}
}

impl AnswerSheet {
	/// Creates a sheet with one empty row and a (clamped) blank count.
	pub fn new(blank_count: i64) -> Self {
		let blank_count = clamp_blank_count(blank_count);
		Self {
			blank_count,
			rows: vec![AnswerRow::empty("1", blank_count)],
		}
	}

	pub fn blank_count(&self) -> usize {
		self.blank_count
	}

	/// Rows in disjunction order.
	pub fn rows(&self) -> &[AnswerRow] {
		&self.rows
	}

	/// Looks a row up by identifier.
	pub fn row(&self, id: &str) -> Option<&AnswerRow> {
		self.rows.iter().find(|row| row.id() == id)
	}

	/// Changes the blank count and resizes every row to match.
	///
	/// Missing blanks are added empty, extra blanks are dropped.
	/// Returns the count actually applied after clamping.
	pub fn set_blank_count(&mut self, requested: i64) -> usize {
		let count = clamp_blank_count(requested);
		debug!("blank count {} -> {} (requested {})", self.blank_count, count, requested);

		self.blank_count = count;
		for row in &mut self.rows {
			row.resize(count);
		}
		count
	}

	/// Appends an empty row with a fresh random identifier.
	pub fn add_row(&mut self) -> &AnswerRow {
		let id = loop {
			let candidate = random_row_id();
			if self.row(&candidate).is_none() {
				break candidate;
			}
		};
		debug!("adding row '{}'", id);

		self.rows.push(AnswerRow::empty(id, self.blank_count));
		&self.rows[self.rows.len() - 1]
	}

	/// Removes a row and returns it.
	///
	/// # Errors
	/// - `LastRow` if it is the only remaining row
	/// - `RowNotFound` if no row has this identifier
	pub fn remove_row(&mut self, id: &str) -> Result<AnswerRow, SheetError> {
		if self.rows.len() <= 1 {
			warn!("refusing to remove row '{}': last row", id);
			return Err(SheetError::LastRow);
		}

		let position = self
			.rows
			.iter()
			.position(|row| row.id() == id)
			.ok_or_else(|| SheetError::RowNotFound { id: id.to_owned() })?;
		debug!("removing row '{}'", id);
		Ok(self.rows.remove(position))
	}

	/// Stores the raw value of blank `index` (1-based) in row `id`.
	///
	/// # Errors
	/// - `InvalidBlankIndex` if `index` is outside `1..=blank_count`
	/// - `RowNotFound` if no row has this identifier
	pub fn set_value(&mut self, id: &str, index: usize, value: impl Into<String>) -> Result<(), SheetError> {
		if index == 0 || index > self.blank_count {
			return Err(SheetError::InvalidBlankIndex { index, max: self.blank_count });
		}

		let row = self
			.rows
			.iter_mut()
			.find(|row| row.id() == id)
			.ok_or_else(|| SheetError::RowNotFound { id: id.to_owned() })?;
		row.set_blank(index, value)
	}

	/// Empties every blank of every row. Identifiers and order are kept.
	pub fn clear_values(&mut self) {
		debug!("clearing {} rows", self.rows.len());
		for row in &mut self.rows {
			row.clear();
		}
	}

	/// The current expression, see `generate_expression`.
	pub fn expression(&self) -> String {
		generate_expression(&self.rows, self.blank_count)
	}

	/// The expression if there is anything worth copying.
	///
	/// Returns `None` for an empty expression or a bare `()`.
	pub fn copyable_expression(&self) -> Option<String> {
		Some(self.expression()).filter(|e| is_copyable(e))
	}

	/// Snapshot of the rows, blank count and expression.
	pub fn view(&self) -> SheetView {
		SheetView {
			blank_count: self.blank_count,
			rows: self.rows.clone(),
			expression: self.expression(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sheet::blank_count::MAX_BLANKS;

	#[test]
	fn test_default_sheet() {
		let sheet = AnswerSheet::default();
		assert_eq!(sheet.blank_count(), 2);
		assert_eq!(sheet.rows().len(), 1);
		assert_eq!(sheet.rows()[0].id(), "1");
		assert_eq!(sheet.expression(), "((空1)=\"\"且(空2)=\"\")");
	}

	#[test]
	fn test_new_clamps() {
		assert_eq!(AnswerSheet::new(0).blank_count(), 1);
		assert_eq!(AnswerSheet::new(99).blank_count(), MAX_BLANKS);
	}

	#[test]
	fn test_set_blank_count_resizes_rows() {
		let mut sheet = AnswerSheet::default();
		sheet.set_value("1", 2, "b").unwrap();

		assert_eq!(sheet.set_blank_count(4), 4);
		assert_eq!(sheet.rows()[0].len(), 4);
		assert_eq!(sheet.rows()[0].blank(2), Some("b"));

		assert_eq!(sheet.set_blank_count(1), 1);
		assert_eq!(sheet.rows()[0].len(), 1);

		// Growing again does not bring dropped values back.
		sheet.set_blank_count(2);
		assert_eq!(sheet.rows()[0].blank(2), Some(""));

		assert_eq!(sheet.set_blank_count(-3), 1);
		assert_eq!(sheet.set_blank_count(50), MAX_BLANKS);
	}

	#[test]
	fn test_add_row_appends_unique_empty_rows() {
		let mut sheet = AnswerSheet::new(3);
		let first = sheet.add_row().id().to_owned();
		let second = sheet.add_row().id().to_owned();

		assert_eq!(sheet.rows().len(), 3);
		assert_ne!(first, second);
		assert_eq!(sheet.rows()[1].id(), first);
		assert_eq!(sheet.rows()[2].id(), second);
		assert!(sheet.rows()[2].blanks().all(str::is_empty));
		assert_eq!(sheet.rows()[2].len(), 3);
	}

	#[test]
	fn test_remove_row() {
		let mut sheet = AnswerSheet::default();
		assert_eq!(sheet.remove_row("1"), Err(SheetError::LastRow));

		let id = sheet.add_row().id().to_owned();
		assert_eq!(
			sheet.remove_row("missing"),
			Err(SheetError::RowNotFound { id: "missing".to_owned() })
		);

		let removed = sheet.remove_row("1").unwrap();
		assert_eq!(removed.id(), "1");
		assert_eq!(sheet.rows().len(), 1);
		assert_eq!(sheet.rows()[0].id(), id);
	}

	#[test]
	fn test_set_value_checks_index_and_row() {
		let mut sheet = AnswerSheet::default();
		assert_eq!(
			sheet.set_value("1", 0, "x"),
			Err(SheetError::InvalidBlankIndex { index: 0, max: 2 })
		);
		assert_eq!(
			sheet.set_value("1", 3, "x"),
			Err(SheetError::InvalidBlankIndex { index: 3, max: 2 })
		);
		assert_eq!(
			sheet.set_value("nope", 1, "x"),
			Err(SheetError::RowNotFound { id: "nope".to_owned() })
		);

		sheet.set_value("1", 1, " 5 ").unwrap();
		assert_eq!(sheet.rows()[0].blank(1), Some(" 5 "));
		assert_eq!(sheet.expression(), "((空1)=5且(空2)=\"\")");
	}

	#[test]
	fn test_clear_values_keeps_rows() {
		let mut sheet = AnswerSheet::default();
		let id = sheet.add_row().id().to_owned();
		sheet.set_value("1", 1, "a").unwrap();
		sheet.set_value(&id, 2, "b").unwrap();

		sheet.clear_values();
		assert_eq!(sheet.rows().len(), 2);
		assert_eq!(sheet.rows()[1].id(), id);
		assert!(sheet.rows().iter().all(|row| row.blanks().all(str::is_empty)));
	}

	#[test]
	fn test_copyable_expression() {
		let mut sheet = AnswerSheet::new(1);
		assert_eq!(sheet.copyable_expression(), Some("((空1)=\"\")".to_owned()));
		sheet.set_value("1", 1, "3").unwrap();
		assert_eq!(sheet.copyable_expression(), Some("((空1)=3)".to_owned()));
	}

	#[test]
	fn test_view_matches_sheet() {
		let mut sheet = AnswerSheet::new(1);
		sheet.set_value("1", 1, "x").unwrap();
		let view = sheet.view();
		assert_eq!(view.blank_count, 1);
		assert_eq!(view.rows, sheet.rows());
		assert_eq!(view.expression, "((空1)=\"x\")");
		assert_eq!(view.copyable_expression(), Some("((空1)=\"x\")"));
	}

	#[test]
	fn test_deserialize_normalizes_counts_and_rows() {
		let sheet: AnswerSheet = serde_json::from_str(
			r#"{"blank_count":99,"rows":[{"id":"a","blanks":["1"]},{"id":"b","blanks":["1","2","3"]}]}"#,
		)
		.unwrap();
		assert_eq!(sheet.blank_count(), MAX_BLANKS);
		assert!(sheet.rows().iter().all(|row| row.len() == MAX_BLANKS));

		let sheet: AnswerSheet =
			serde_json::from_str(r#"{"blank_count":-2,"rows":[{"id":"a","blanks":["1","2"]}]}"#).unwrap();
		assert_eq!(sheet.blank_count(), 1);
		assert_eq!(sheet.rows()[0].blanks().collect::<Vec<_>>(), vec!["1"]);
	}

	#[test]
	fn test_deserialize_rejects_broken_sheets() {
		let empty = serde_json::from_str::<AnswerSheet>(r#"{"blank_count":99,"rows":[]}"#);
		assert!(empty.unwrap_err().to_string().contains("at least one answer row"));

		let duplicate =
			serde_json::from_str::<AnswerSheet>(r#"{"blank_count":2,"rows":[{"id":"a"},{"id":"a"}]}"#);
		assert!(duplicate.unwrap_err().to_string().contains("Row 'a' appears more than once"));
	}

	#[test]
	fn test_is_copyable() {
		assert!(!is_copyable(""));
		assert!(!is_copyable("()"));
		assert!(is_copyable("(或)"));
		assert!(is_copyable("((空1)=1)"));
	}
}

use super::answer_row::AnswerRow;
use super::literal::format_value;

/// Token joining the conditions of one row (logical AND).
pub const CONJUNCTION: &str = "且";

/// Token joining row expressions (logical OR).
pub const DISJUNCTION: &str = "或";

/// Label of blank `index`, e.g. `空1`.
pub fn blank_label(index: usize) -> String {
	format!("空{}", index)
}

/// Builds a single condition token `(空i)=<value>`.
pub fn condition(index: usize, raw: &str) -> String {
	format!("({})={}", blank_label(index), format_value(raw))
}

/// Builds the expression of one row.
///
/// Blanks `1..=total_blanks` are read in ascending order; absent blanks
/// count as empty. With `total_blanks == 0` the result is empty.
pub fn row_expression(row: &AnswerRow, total_blanks: usize) -> String {
	(1..=total_blanks)
		.map(|i| condition(i, row.blank(i).unwrap_or("")))
		.collect::<Vec<_>>()
		.join(CONJUNCTION)
}

/// Generates the logic expression for a set of answer rows.
///
/// # Behavior
/// - No rows → empty string.
/// - Otherwise each row becomes `cond1且cond2且...`, the rows are joined
///   with `或` in their given order, and the whole is wrapped in one pair of
///   parentheses.
///
/// # Notes
/// - Pure: identical inputs always produce identical output.
/// - Runs in O(rows × total_blanks).
pub fn generate_expression(rows: &[AnswerRow], total_blanks: usize) -> String {
	if rows.is_empty() {
		return String::new();
	}

	let groups: Vec<String> = rows
		.iter()
		.map(|row| row_expression(row, total_blanks))
		.collect();

	format!("({})", groups.join(DISJUNCTION))
}

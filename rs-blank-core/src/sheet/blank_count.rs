use crate::error::SheetError;

/// Smallest accepted blank count.
pub const MIN_BLANKS: usize = 1;

/// Largest accepted blank count.
pub const MAX_BLANKS: usize = 10;

/// Blank count of a fresh sheet.
pub const DEFAULT_BLANKS: usize = 2;

/// Clamps a requested blank count into `MIN_BLANKS..=MAX_BLANKS`.
pub fn clamp_blank_count(requested: i64) -> usize {
	// Both bounds fit in i64, the cast back is lossless.
	requested.clamp(MIN_BLANKS as i64, MAX_BLANKS as i64) as usize
}

/// Parses user input as a blank count and clamps it.
///
/// # Errors
/// Returns `InvalidBlankCount` if the trimmed input is not an integer.
pub fn parse_blank_count(input: &str) -> Result<usize, SheetError> {
	input
		.trim()
		.parse::<i64>()
		.map(clamp_blank_count)
		.map_err(|_| SheetError::InvalidBlankCount { input: input.to_owned() })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clamp_bounds() {
		assert_eq!(clamp_blank_count(-5), 1);
		assert_eq!(clamp_blank_count(0), 1);
		assert_eq!(clamp_blank_count(4), 4);
		assert_eq!(clamp_blank_count(11), 10);
		assert_eq!(clamp_blank_count(i64::MAX), 10);
	}

	#[test]
	fn test_parse_blank_count() {
		assert_eq!(parse_blank_count(" 3 "), Ok(3));
		assert_eq!(parse_blank_count("42"), Ok(10));
		assert_eq!(parse_blank_count("-1"), Ok(1));
		assert_eq!(
			parse_blank_count("two"),
			Err(SheetError::InvalidBlankCount { input: "two".to_owned() })
		);
		assert!(parse_blank_count("").is_err());
		assert!(parse_blank_count("2.5").is_err());
	}
}

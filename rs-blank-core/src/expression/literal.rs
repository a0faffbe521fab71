/// Characters stripped by `trim_value`.
///
/// Unicode whitespace except NEL (U+0085), plus the zero-width no-break
/// space (BOM): the same set an ECMAScript `trim()` removes.
fn is_trimmed(c: char) -> bool {
	(c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims leading and trailing whitespace, see `is_trimmed`.
pub fn trim_value(raw: &str) -> &str {
	raw.trim_matches(is_trimmed)
}

/// Returns `true` when `s` is one or more ASCII decimal digits.
fn is_digits(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Tells whether a raw value is a numeric literal.
///
/// After trimming, the value must read `-?[0-9]+(\.[0-9]+)?`:
/// - an optional single leading minus sign
/// - one or more decimal digits
/// - an optional dot followed by one or more decimal digits
///
/// Empty text, `+` signs, exponents and digit separators are not numeric.
pub fn is_numeric(raw: &str) -> bool {
	let trimmed = trim_value(raw);
	let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);

	match unsigned.split_once('.') {
		Some((integer, fraction)) => is_digits(integer) && is_digits(fraction),
		None => is_digits(unsigned),
	}
}

/// Renders a raw value as an expression literal.
///
/// - empty (after trimming) → `""`
/// - numeric → the trimmed text, unquoted
/// - anything else → the trimmed text wrapped in double quotes
///
/// Embedded double quotes are not escaped.
pub fn format_value(raw: &str) -> String {
	let trimmed = trim_value(raw);
	if trimmed.is_empty() {
		return "\"\"".to_owned();
	}
	if is_numeric(trimmed) {
		trimmed.to_owned()
	} else {
		format!("\"{}\"", trimmed)
	}
}

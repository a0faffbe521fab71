use rand::Rng;

/// Length of generated row identifiers.
pub(crate) const ROW_ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random lowercase base-36 identifier of `ROW_ID_LEN` characters.
///
/// Uniqueness is not guaranteed here; the caller checks against its rows.
pub(crate) fn random_row_id() -> String {
	let mut rng = rand::rng();
	(0..ROW_ID_LEN)
		.map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
		.collect()
}

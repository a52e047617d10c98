//! Display-weighted text length used by text ceilings.
//!
//! Code points below 128 count as one unit and everything else counts as two, a coarse
//! half-width/full-width approximation rather than true Unicode display width.

/// Weight of a single character.
pub const fn char_weight(ch: char) -> usize {
	if (ch as u32) < 0x80 { 1 } else { 2 }
}

/// Returns the weighted length of `text`.
pub fn weighted_length(text: &str) -> usize {
	text.chars().map(char_weight).sum()
}

/// Returns true once the running weighted total of `text` passes `limit`.
///
/// Scanning stops at the first character that crosses the limit.
pub fn exceeds_weighted_length(text: &str, limit: usize) -> bool {
	let mut total = 0;

	for ch in text.chars() {
		total += char_weight(ch);

		if total > limit {
			return true;
		}
	}

	false
}

//! Character-to-slot mapping for the alphanumeric alphabet.
//!
//! Lowercase ASCII letters occupy slots `0..=25` and ASCII digits occupy
//! slots `26..=35`. Every other character is unsupported. The mapping never
//! folds case; callers that want case-insensitive behaviour fold first.

use once_cell::sync::Lazy;

/// Number of symbols in the alphabet (`a..z` followed by `0..9`).
pub const ALPHABET_SIZE: usize = 36;

const LETTER_COUNT: usize = 26;

/// Slot for every ASCII code point, `None` for the unsupported ones.
static SLOT_TABLE: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (slot, byte) in (b'a'..=b'z').enumerate() {
        table[byte as usize] = Some(slot as u8);
    }
    for (offset, byte) in (b'0'..=b'9').enumerate() {
        table[byte as usize] = Some((LETTER_COUNT + offset) as u8);
    }
    table
});

/// Returns the slot index for `c`, or `None` if `c` is not in `[a-z0-9]`.
///
/// # Examples
///
/// ```
/// use alphanumeric_trie::alphabet::slot_index;
///
/// assert_eq!(slot_index('a'), Some(0));
/// assert_eq!(slot_index('z'), Some(25));
/// assert_eq!(slot_index('0'), Some(26));
/// assert_eq!(slot_index('9'), Some(35));
/// assert_eq!(slot_index('A'), None);
/// assert_eq!(slot_index('$'), None);
/// ```
#[inline]
pub fn slot_index(c: char) -> Option<usize> {
    if c.is_ascii() {
        SLOT_TABLE[c as usize].map(usize::from)
    } else {
        None
    }
}

/// Inverse of [`slot_index`]: the symbol stored in `slot`, if any.
pub fn symbol_for_slot(slot: usize) -> Option<char> {
    if slot < LETTER_COUNT {
        Some((b'a' + slot as u8) as char)
    } else if slot < ALPHABET_SIZE {
        Some((b'0' + (slot - LETTER_COUNT) as u8) as char)
    } else {
        None
    }
}

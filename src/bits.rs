//! Low-level bit extraction from 32-bit word arrays.
//!
//! Bits are addressed LSB-first within a word: bit 0 is the least
//! significant bit, matching the VDIF specification's numbering.

/// Mask covering the low `bit_width` bits. Computed in 64-bit so a width
/// of 32 does not overflow the shift.
pub fn low_mask(bit_width: u32) -> u32 {
    ((1u64 << bit_width) - 1) as u32
}

/// Extracts `bit_width` bits starting at `bit_offset` from
/// `words[word_index]` as an unsigned value.
///
/// Returns `None` if `word_index` is out of bounds for `words`. The
/// result is `(words[word_index] >> bit_offset) & ((1 << bit_width) - 1)`:
/// no sign extension, bits outside the requested width are zero.
///
/// Callers are expected to have validated `bit_offset + bit_width <= 32`
/// (see [`crate::field::FieldSpec::validate`]); the invariant is only
/// debug-asserted here.
pub fn extract_bits(
    words: &[u32],
    word_index: usize,
    bit_offset: u32,
    bit_width: u32,
) -> Option<u32> {
    debug_assert!(
        bit_width >= 1
            && bit_offset
                .checked_add(bit_width)
                .is_some_and(|end| end <= 32)
    );

    let word = *words.get(word_index)?;
    Some((word >> bit_offset) & low_mask(bit_width))
}

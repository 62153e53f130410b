//! Definition of a single bit-field inside a header word.

use crate::bits;

/// Location of one named field: a contiguous bit range inside one
/// 32-bit word of the header.
///
/// Const-constructible so layout tables can be plain `const` data (see
/// [`crate::header`]). Validity (`0 < bit_offset + bit_width <= 32`) is
/// checked when a [`crate::schema::Schema`] is built, not on
/// construction, so an invalid table entry is reported together with its
/// field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Index of the word holding this field.
    pub word_index: usize,
    /// Position of the least significant bit, `0..=31`.
    pub bit_offset: u32,
    /// Number of bits, `1..=32`. A field never spans a word boundary.
    pub bit_width: u32,
}

impl FieldSpec {
    pub const fn new(word_index: usize, bit_offset: u32, bit_width: u32) -> Self {
        FieldSpec {
            word_index,
            bit_offset,
            bit_width,
        }
    }

    /// Checks that the bit range fits inside a 32-bit word and is at
    /// least one bit wide.
    pub fn validate(&self) -> bool {
        self.bit_width >= 1
            && self.bit_offset < 32
            && self
                .bit_offset
                .checked_add(self.bit_width)
                .is_some_and(|end| end <= 32)
    }

    /// Extracts this field's value from `words`. `None` iff
    /// `word_index` is out of bounds.
    pub fn extract(&self, words: &[u32]) -> Option<u32> {
        bits::extract_bits(words, self.word_index, self.bit_offset, self.bit_width)
    }

    /// Smallest word-array length this field can be decoded from.
    pub fn min_words(&self) -> usize {
        self.word_index + 1
    }
}

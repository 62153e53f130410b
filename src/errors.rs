//! Error types for schema construction and header decoding.

use thiserror::Error;

/// Errors produced when building a [`crate::schema::Schema`] from a
/// field table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field's bit range does not fit inside a 32-bit word
    /// (`bit_offset + bit_width` outside `1..=32`). Reported for the
    /// first offending entry, at construction time.
    #[error(
        "field `{field}`: bit range {bit_offset}+{bit_width} does not fit in a 32-bit word"
    )]
    InvalidFieldSpec {
        field: String,
        bit_offset: u32,
        bit_width: u32,
    },
}

/// Errors produced when decoding a word array (see
/// [`crate::schema::Schema::decode`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A field's word lies beyond the supplied word array. Decoding is
    /// all-or-nothing, so the whole decode fails.
    #[error(
        "field `{field}` needs word {word_index} but only {words_available} \
         words were supplied (minimum {})",
        .word_index + 1
    )]
    OutOfRange {
        field: String,
        word_index: usize,
        words_available: usize,
    },
}

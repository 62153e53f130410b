//! The two VDIF header layouts, as declarative field tables.
//!
//! Word and bit positions follow the VDIF specification: every header
//! starts with the four common words (seconds/epoch, frame number,
//! frame geometry, station/thread identity); non-legacy headers carry
//! four extension words whose layout is selected by the `edv` field.
//! This module ships the common layout and the EDV3 extension layout.

use crate::{field::FieldSpec, schema::Schema};

/// Words read for the base (common) header.
pub const BASE_HEADER_WORDS: usize = 8;
/// Words read for the extended header: four additional words follow the
/// base layout. Decoding itself only requires each field's word to be
/// present (see [`Schema::min_words`]).
pub const EXTENDED_HEADER_WORDS: usize = 12;

/// Bytes holding the base header at the start of a frame.
pub const BASE_HEADER_BYTES: usize = BASE_HEADER_WORDS * 4;
/// Bytes holding the extended header at the start of a frame.
pub const EXTENDED_HEADER_BYTES: usize = EXTENDED_HEADER_WORDS * 4;

/// Field table of the base header: `(name, (word, low bit, width))`.
pub const BASE_FIELDS: [(&str, FieldSpec); 13] = [
    ("seconds", FieldSpec::new(0, 0, 30)),
    ("legacy", FieldSpec::new(0, 30, 1)),
    ("invalid", FieldSpec::new(0, 31, 1)),
    ("data_frame", FieldSpec::new(1, 0, 24)),
    ("ref_epoch", FieldSpec::new(1, 24, 6)),
    ("unassigned", FieldSpec::new(1, 30, 2)),
    ("data_frame_length", FieldSpec::new(2, 0, 24)),
    ("log_2_channels", FieldSpec::new(2, 24, 5)),
    ("vdif_version", FieldSpec::new(2, 29, 3)),
    ("station", FieldSpec::new(3, 0, 16)),
    ("thread", FieldSpec::new(3, 16, 10)),
    ("bit_sample", FieldSpec::new(3, 26, 5)),
    ("data_type", FieldSpec::new(3, 31, 1)),
];

/// Fields the extended header adds on top of [`BASE_FIELDS`].
pub const EXTENDED_FIELDS: [(&str, FieldSpec); 13] = [
    ("sampling_rate", FieldSpec::new(4, 0, 23)),
    ("unit", FieldSpec::new(4, 23, 1)),
    ("edv", FieldSpec::new(4, 24, 8)),
    ("sync_pattern", FieldSpec::new(5, 0, 32)),
    ("loif_freq", FieldSpec::new(6, 0, 32)),
    ("personality_type", FieldSpec::new(7, 0, 8)),
    ("minor_rev", FieldSpec::new(7, 8, 4)),
    ("major_rev", FieldSpec::new(7, 12, 4)),
    ("esb", FieldSpec::new(7, 16, 1)),
    ("sub_band", FieldSpec::new(7, 17, 3)),
    ("if", FieldSpec::new(7, 20, 4)),
    ("dbe_unit", FieldSpec::new(7, 24, 4)),
    ("ua", FieldSpec::new(7, 28, 4)),
];

/// Schema for the 8-word base header.
pub fn base_schema() -> Schema {
    // The table is const and in range; build cannot fail on it.
    Schema::build(&BASE_FIELDS).unwrap()
}

/// Schema for the 12-word extended header: all base fields plus the
/// extension fields of words 4–7.
pub fn extended_schema() -> Schema {
    base_schema().extend(&EXTENDED_FIELDS).unwrap()
}

/// Reinterprets raw header bytes as little-endian 32-bit words in file
/// order, per the VDIF on-disk layout.
///
/// A trailing partial word is discarded; a too-short result surfaces
/// through [`Schema::decode`]'s word-count check, which names the field
/// that did not fit.
pub fn words_from_le_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

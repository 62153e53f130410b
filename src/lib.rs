//! # vdif-header
//!
//! A library for decoding VDIF (VLBI Data Interchange Format) data frame
//! headers using declarative bit-field schemas.
//!
//! A header is a fixed-length array of little-endian 32-bit words. Each
//! field occupies a contiguous bit range inside one word, described by a
//! [`field::FieldSpec`]. A [`schema::Schema`] is a validated, immutable
//! table of named specs; decoding applies every spec to a word array and
//! returns a map of field names to unsigned values.
//!
//! The two layouts defined by the format ship as data: the 8-word base
//! header ([`header::base_schema`]) and the 12-word extended header
//! ([`header::extended_schema`]), which is the base layout plus the
//! extension words 4–7.
//!
//! ## Example
//!
//! ```
//! use vdif_header::header;
//!
//! let schema = header::base_schema();
//! let mut words = [0u32; header::BASE_HEADER_WORDS];
//! words[0] = 42;          // seconds in bits 0..30 of word 0
//! words[3] = 0x1A << 16;  // thread id in bits 16..26 of word 3
//!
//! let decoded = schema.decode(&words).unwrap();
//! assert_eq!(decoded["seconds"], 42);
//! assert_eq!(decoded["thread"], 0x1A);
//! assert_eq!(decoded["legacy"], 0);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod header;
pub mod schema;

#[cfg(feature = "serde")]
pub mod serde;

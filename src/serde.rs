//! JSON-deserializable schema description.
//!
//! These types describe a header layout as plain data, intended to be
//! loaded from JSON (for example a layout file shipped with your
//! application) and then built into a [`crate::schema::Schema`].

use ::serde::{Deserialize, Serialize};

use crate::{errors::SchemaError, field::FieldSpec, schema::Schema};

/// Top-level layout definition consisting of a list of fields.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    /// All fields of the header, in definition order.
    pub fields: Vec<FieldDef>,
}

/// Description of a single named field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Human-readable field name; becomes the key in the decoded map.
    pub name: String,
    /// Index of the 32-bit word holding this field.
    pub word_index: usize,
    /// Position of the field's least significant bit within the word.
    pub bit_offset: u32,
    /// Number of bits.
    pub bit_width: u32,
}

impl From<&FieldDef> for FieldSpec {
    fn from(def: &FieldDef) -> Self {
        FieldSpec::new(def.word_index, def.bit_offset, def.bit_width)
    }
}

impl SchemaDef {
    /// Validates and builds the described schema.
    pub fn build(&self) -> Result<Schema, SchemaError> {
        let entries: Vec<(&str, FieldSpec)> = self
            .fields
            .iter()
            .map(|def| (def.name.as_str(), FieldSpec::from(def)))
            .collect();

        Schema::build(&entries)
    }
}

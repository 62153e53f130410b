//! Schema: validated table of named field specs used to decode word
//! arrays into named values.

use std::collections::BTreeMap;

use crate::{
    errors::{DecodeError, SchemaError},
    field::FieldSpec,
};

/// An immutable, validated table of named [`FieldSpec`]s.
///
/// Build one with [`Schema::build`], derive a variant with
/// [`Schema::extend`], then call [`Schema::decode`] on word arrays.
/// Entries keep their definition order; names are unique, a colliding
/// entry replaces the earlier spec in place. Schemas are never mutated
/// after construction and can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// Builds a schema from `(name, spec)` entries. Fails with
    /// [`SchemaError::InvalidFieldSpec`] on the first entry whose bit
    /// range does not fit in a 32-bit word.
    pub fn build(entries: &[(&str, FieldSpec)]) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(entries.len());
        insert_validated(&mut fields, entries)?;
        Ok(Self { fields })
    }

    /// Returns a new schema holding all of `self`'s entries plus
    /// `additions`, with additions winning on name collision. `self` is
    /// untouched. Additions are validated like [`Schema::build`] input.
    pub fn extend(&self, additions: &[(&str, FieldSpec)]) -> Result<Self, SchemaError> {
        let mut fields = self.fields.clone();
        fields.reserve(additions.len());
        insert_validated(&mut fields, additions)?;
        Ok(Self { fields })
    }

    /// Decodes `words` according to this schema. Returns a map of field
    /// names to unsigned values.
    ///
    /// Fails with [`DecodeError::OutOfRange`] on the first field (in
    /// definition order) whose word lies beyond `words`; no partial
    /// result is produced.
    pub fn decode(&self, words: &[u32]) -> Result<BTreeMap<String, u32>, DecodeError> {
        let mut decoded = BTreeMap::new();

        for (name, spec) in &self.fields {
            let value = spec.extract(words).ok_or_else(|| DecodeError::OutOfRange {
                field: name.clone(),
                word_index: spec.word_index,
                words_available: words.len(),
            })?;

            decoded.insert(name.clone(), value);
        }

        Ok(decoded)
    }

    /// Spec for `name`, if the schema defines it.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, spec)| spec)
    }

    /// Iterates over `(name, spec)` entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Smallest word-array length every field of this schema can be
    /// decoded from.
    pub fn min_words(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, spec)| spec.min_words())
            .max()
            .unwrap_or(0)
    }
}

fn insert_validated(
    fields: &mut Vec<(String, FieldSpec)>,
    entries: &[(&str, FieldSpec)],
) -> Result<(), SchemaError> {
    for (name, spec) in entries {
        if !spec.validate() {
            return Err(SchemaError::InvalidFieldSpec {
                field: name.to_string(),
                bit_offset: spec.bit_offset,
                bit_width: spec.bit_width,
            });
        }

        match fields.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, existing)) => *existing = *spec,
            None => fields.push((name.to_string(), *spec)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        let schema = Schema::build(&[]).unwrap();
        assert_eq!(schema.decode(&[1, 2, 3]), Ok(BTreeMap::new()));
        assert_eq!(schema.min_words(), 0);
    }

    #[test]
    fn test_decode_one_field() {
        let schema = Schema::build(&[("flag", FieldSpec::new(0, 4, 1))]).unwrap();
        let decoded = schema.decode(&[0b10000]).unwrap();
        assert_eq!(decoded, BTreeMap::from([("flag".to_string(), 1)]));
    }

    #[test]
    fn test_decode_multiple_fields() {
        let schema = Schema::build(&[
            ("low", FieldSpec::new(0, 0, 16)),
            ("high", FieldSpec::new(0, 16, 16)),
            ("next", FieldSpec::new(1, 0, 32)),
        ])
        .unwrap();

        let decoded = schema.decode(&[0xABCD_1234, 7]).unwrap();
        assert_eq!(
            decoded,
            BTreeMap::from([
                ("low".to_string(), 0x1234),
                ("high".to_string(), 0xABCD),
                ("next".to_string(), 7),
            ])
        );
    }

    #[test]
    fn test_build_rejects_invalid_spec() {
        let result = Schema::build(&[
            ("ok", FieldSpec::new(0, 0, 8)),
            ("bad", FieldSpec::new(0, 30, 4)),
        ]);
        assert_eq!(
            result,
            Err(SchemaError::InvalidFieldSpec {
                field: "bad".to_string(),
                bit_offset: 30,
                bit_width: 4,
            })
        );
    }

    #[test]
    fn test_build_rejects_zero_width() {
        let result = Schema::build(&[("empty", FieldSpec::new(0, 3, 0))]);
        assert_eq!(
            result,
            Err(SchemaError::InvalidFieldSpec {
                field: "empty".to_string(),
                bit_offset: 3,
                bit_width: 0,
            })
        );
    }

    #[test]
    fn test_build_rejects_width_wrapping_u32() {
        let result = Schema::build(&[("huge", FieldSpec::new(0, 31, u32::MAX))]);
        assert_eq!(
            result,
            Err(SchemaError::InvalidFieldSpec {
                field: "huge".to_string(),
                bit_offset: 31,
                bit_width: u32::MAX,
            })
        );
    }

    #[test]
    fn test_decode_out_of_range_is_all_or_nothing() {
        let schema = Schema::build(&[
            ("present", FieldSpec::new(0, 0, 8)),
            ("beyond", FieldSpec::new(3, 0, 8)),
        ])
        .unwrap();

        assert_eq!(
            schema.decode(&[0xFF, 0, 0]),
            Err(DecodeError::OutOfRange {
                field: "beyond".to_string(),
                word_index: 3,
                words_available: 3,
            })
        );
    }

    #[test]
    fn test_decode_fails_on_first_field_in_definition_order() {
        let schema = Schema::build(&[
            ("zz_far", FieldSpec::new(5, 0, 8)),
            ("aa_farther", FieldSpec::new(6, 0, 8)),
        ])
        .unwrap();

        assert_eq!(
            schema.decode(&[0]),
            Err(DecodeError::OutOfRange {
                field: "zz_far".to_string(),
                word_index: 5,
                words_available: 1,
            })
        );
    }

    #[test]
    fn test_extend_preserves_base_and_overrides_by_name() {
        let base = Schema::build(&[
            ("a", FieldSpec::new(0, 0, 8)),
            ("b", FieldSpec::new(0, 8, 8)),
        ])
        .unwrap();

        let derived = base
            .extend(&[
                ("b", FieldSpec::new(1, 0, 16)),
                ("c", FieldSpec::new(1, 16, 16)),
            ])
            .unwrap();

        // base is untouched
        assert_eq!(base.len(), 2);
        assert_eq!(base.get("b"), Some(&FieldSpec::new(0, 8, 8)));

        assert_eq!(derived.len(), 3);
        assert_eq!(derived.get("a"), Some(&FieldSpec::new(0, 0, 8)));
        assert_eq!(derived.get("b"), Some(&FieldSpec::new(1, 0, 16)));
        assert_eq!(derived.get("c"), Some(&FieldSpec::new(1, 16, 16)));
    }

    #[test]
    fn test_extend_validates_additions() {
        let base = Schema::build(&[("a", FieldSpec::new(0, 0, 8))]).unwrap();
        let result = base.extend(&[("bad", FieldSpec::new(0, 20, 20))]);
        assert_eq!(
            result,
            Err(SchemaError::InvalidFieldSpec {
                field: "bad".to_string(),
                bit_offset: 20,
                bit_width: 20,
            })
        );
    }

    #[test]
    fn test_build_duplicate_name_keeps_last() {
        let schema = Schema::build(&[
            ("x", FieldSpec::new(0, 0, 8)),
            ("x", FieldSpec::new(1, 0, 8)),
        ])
        .unwrap();

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("x"), Some(&FieldSpec::new(1, 0, 8)));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let schema = Schema::build(&[
            ("x", FieldSpec::new(0, 0, 12)),
            ("y", FieldSpec::new(1, 4, 20)),
        ])
        .unwrap();

        let words = [0x0000_0ABC, 0x00FF_FFF0];
        let first = schema.decode(&words).unwrap();
        let second = schema.decode(&words).unwrap();
        assert_eq!(first, second);
    }
}

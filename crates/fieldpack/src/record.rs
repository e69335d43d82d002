//! Record: a layout bound to an owned byte buffer, with checked field access.

use std::collections::BTreeMap;

use crate::{
    bits,
    decl::Repr,
    errors::AccessError,
    layout::{Layout, PackedField},
    value::Value,
};

/// An instance of a [Layout] backed by little-endian bytes.
///
/// Fields are written with [Record::set] and read back with [Record::get];
/// [Record::matches] is the round-trip predicate a test driver calls with the
/// expected literal values.
#[derive(Debug, Clone)]
pub struct Record {
    layout: Layout,
    bytes: Vec<u8>,
}

impl Record {
    /// A zeroed record of the given layout.
    pub fn new(layout: Layout) -> Self {
        let size = layout.size_bytes();
        Record {
            layout,
            bytes: vec![0; size],
        }
    }

    /// A record over the given bytes. The buffer must cover the layout;
    /// excess bytes are ignored.
    pub fn from_bytes(layout: Layout, data: &[u8]) -> Result<Self, AccessError> {
        if data.len() < layout.size_bytes() {
            return Err(AccessError::BufferTooShort);
        }

        let bytes = data[..layout.size_bytes()].to_vec();
        Ok(Record { layout, bytes })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Raw little-endian bytes of the record.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Reads a named field, extending it per its declared representation.
    pub fn get(&self, name: &str) -> Result<Value, AccessError> {
        let field = self
            .layout
            .field(name)
            .ok_or_else(|| AccessError::UnknownField(name.to_string()))?;

        let raw = bits::read_bits_at(&self.bytes, field.offset_bits, field.width_bits)?;

        Ok(match field.repr {
            Repr::Unsigned => Value::Unsigned(raw),
            Repr::Signed => Value::Signed(bits::sign_extend(raw, field.width_bits)),
            Repr::Bool => Value::Bool(raw != 0),
        })
    }

    /// Writes a named field. The value's representation must match the
    /// declaration and fit its width; out-of-range values are rejected, never
    /// truncated.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), AccessError> {
        let field = self
            .layout
            .field(name)
            .ok_or_else(|| AccessError::UnknownField(name.to_string()))?;

        let raw = encode(field, value)?;
        bits::write_bits_at(&mut self.bytes, field.offset_bits, field.width_bits, raw)
    }

    /// Snapshots every named field into a map.
    pub fn values(&self) -> Result<BTreeMap<String, Value>, AccessError> {
        let mut map = BTreeMap::new();

        for field in self.layout.fields() {
            map.insert(field.name.clone(), self.get(&field.name)?);
        }

        Ok(map)
    }

    /// Returns true if the expected values, one per named field in declaration
    /// order, all equal the current field values. Arity or representation
    /// mismatches are simply `false`; the predicate has no error channel.
    pub fn matches(&self, expected: &[Value]) -> bool {
        if expected.len() != self.layout.fields().len() {
            return false;
        }

        for (field, want) in self.layout.fields().iter().zip(expected) {
            match self.get(&field.name) {
                Ok(got) if got == *want => {}
                _ => return false,
            }
        }

        true
    }
}

fn encode(field: &PackedField, value: Value) -> Result<u64, AccessError> {
    match (field.repr, value) {
        (Repr::Unsigned, Value::Unsigned(v)) => {
            if v > bits::mask(field.width_bits) {
                return Err(AccessError::OutOfRange {
                    field: field.name.clone(),
                    width_bits: field.width_bits,
                });
            }
            Ok(v)
        }
        (Repr::Signed, Value::Signed(v)) => {
            if field.width_bits < 64 {
                let min = -(1i64 << (field.width_bits - 1));
                let max = (1i64 << (field.width_bits - 1)) - 1;
                if v < min || v > max {
                    return Err(AccessError::OutOfRange {
                        field: field.name.clone(),
                        width_bits: field.width_bits,
                    });
                }
            }
            Ok((v as u64) & bits::mask(field.width_bits))
        }
        (Repr::Bool, Value::Bool(v)) => Ok(v as u64),
        _ => Err(AccessError::ReprMismatch(field.name.clone())),
    }
}

//! Layout: bitfield declarations resolved to absolute bit offsets.
//!
//! Packing follows the little-endian C++ allocation rule: fields are placed at
//! the current bit cursor from the LSB upward, a field that would straddle a
//! boundary of its own storage-unit width moves up to the next such boundary,
//! and a zero-width declaration forces alignment to the next unit boundary.
//! The resulting offsets are part of the crate's contract; generated bindings
//! are expected to reproduce them bit for bit.

use crate::{
    decl::{Bitfield, Repr, Storage},
    errors::PackError,
};

/// A named field with its position resolved.
#[derive(Debug, Clone)]
pub struct PackedField {
    pub name: String,
    /// Absolute offset of the field's low bit within the record.
    pub offset_bits: usize,
    pub width_bits: usize,
    pub repr: Repr,
    pub storage: Storage,
}

/// A packed record layout: named fields in declaration order plus the total
/// size. Use [Layout::pack] to build one from [Bitfield]s.
#[derive(Debug, Clone)]
pub struct Layout {
    size_bits: usize,
    align_bits: usize,
    fields: Vec<PackedField>,
}

impl Layout {
    /// Packs a slice of declarations into a layout. Fails if any declaration
    /// is invalid; padding and separators are consumed but produce no field.
    pub fn pack(decls: &[Bitfield]) -> Result<Self, PackError> {
        let mut fields: Vec<PackedField> = Vec::with_capacity(decls.len());
        let mut cursor = 0;
        let mut align_bits = 8;

        for decl in decls {
            let unit = decl.storage.bits();

            if decl.width_bits == 0 {
                if let Some(name) = &decl.name {
                    return Err(PackError::ZeroWidthNamed(name.clone()));
                }
                cursor = round_up(cursor, unit);
                continue;
            }

            if decl.width_bits > unit {
                return Err(PackError::WidthExceedsStorage {
                    width_bits: decl.width_bits,
                    storage_bits: unit,
                });
            }

            if let Some(name) = &decl.name {
                if name.is_empty() {
                    return Err(PackError::EmptyName);
                }
                if decl.repr == Repr::Bool && decl.width_bits != 1 {
                    return Err(PackError::InvalidFlagWidth(name.clone()));
                }
                if fields.iter().any(|f| f.name == *name) {
                    return Err(PackError::DuplicateName(name.clone()));
                }
            }

            align_bits = align_bits.max(unit);

            let mut start = cursor;
            if start / unit != (start + decl.width_bits - 1) / unit {
                start = round_up(start, unit);
            }

            if let Some(name) = &decl.name {
                fields.push(PackedField {
                    name: name.clone(),
                    offset_bits: start,
                    width_bits: decl.width_bits,
                    repr: decl.repr,
                    storage: decl.storage,
                });
            }

            cursor = start + decl.width_bits;
        }

        Ok(Layout {
            size_bits: round_up(cursor, align_bits),
            align_bits,
            fields,
        })
    }

    /// Total packed size in bits, rounded up to the record alignment.
    pub fn size_bits(&self) -> usize {
        self.size_bits
    }

    /// Total packed size in whole bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bits / 8
    }

    /// Record alignment in bits: the widest declared storage unit, at least a
    /// byte.
    pub fn align_bits(&self) -> usize {
        self.align_bits
    }

    /// Named fields in declaration order.
    pub fn fields(&self) -> &[PackedField] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&PackedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Absolute bit offset of a field's low bit.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset_bits)
    }

    /// Index of the byte holding a field's low bit.
    pub fn byte_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset_bits / 8)
    }
}

fn round_up(value: usize, to: usize) -> usize {
    value.div_ceil(to) * to
}

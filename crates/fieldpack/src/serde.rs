//! JSON-deserializable record layout description.
//!
//! These types describe the *shape* of a bitfield record. They are intended
//! to be constructed from JSON (for example a layout file emitted alongside
//! generated bindings) and then packed into core `fieldpack` types via
//! `Layout::try_from`.

use serde::{Deserialize, Serialize};

use crate::{
    decl::{Bitfield, Repr, Storage},
    errors::PackError,
    layout::Layout,
};

/// Top-level record definition consisting of a list of bitfields.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecordDef {
    /// All declarations, in layout order; padding and separators included.
    pub fields: Vec<BitfieldDef>,
}

/// Description of a single bitfield declaration.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BitfieldDef {
    /// Field name; omit for padding and separators.
    #[serde(default)]
    pub name: Option<String>,
    /// Width in bits; zero marks a separator.
    pub width_bits: usize,
    /// Interpretation of the raw bits; defaults to unsigned.
    #[serde(default)]
    pub repr: ReprDef,
    /// Storage unit the field packs into; defaults to a 32-bit unit.
    #[serde(default)]
    pub storage: StorageDef,
}

/// Interpretation of a field's raw bits.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub enum ReprDef {
    #[default]
    Unsigned,
    Signed,
    Bool,
}

/// Storage unit width class.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub enum StorageDef {
    Byte,
    Word,
    #[default]
    Dword,
    Qword,
}

impl From<ReprDef> for Repr {
    fn from(value: ReprDef) -> Self {
        match value {
            ReprDef::Unsigned => Repr::Unsigned,
            ReprDef::Signed => Repr::Signed,
            ReprDef::Bool => Repr::Bool,
        }
    }
}

impl From<StorageDef> for Storage {
    fn from(value: StorageDef) -> Self {
        match value {
            StorageDef::Byte => Storage::Byte,
            StorageDef::Word => Storage::Word,
            StorageDef::Dword => Storage::Dword,
            StorageDef::Qword => Storage::Qword,
        }
    }
}

impl From<BitfieldDef> for Bitfield {
    fn from(value: BitfieldDef) -> Self {
        Bitfield {
            name: value.name,
            width_bits: value.width_bits,
            repr: value.repr.into(),
            storage: value.storage.into(),
        }
    }
}

impl TryFrom<RecordDef> for Layout {
    type Error = PackError;

    fn try_from(value: RecordDef) -> Result<Self, Self::Error> {
        let decls: Vec<Bitfield> = value.fields.into_iter().map(Into::into).collect();
        Layout::pack(&decls)
    }
}

//! Error types for layout packing and field access.

use thiserror::Error;

/// Errors produced when packing [crate::decl::Bitfield]s into a [crate::layout::Layout].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A zero-width declaration carried a name; separators must be unnamed.
    #[error("zero-width bitfield `{0}` must be unnamed")]
    ZeroWidthNamed(String),
    /// Field width exceeds its declared storage unit.
    #[error("bitfield is {width_bits} bits wide but its storage unit holds {storage_bits}")]
    WidthExceedsStorage { width_bits: usize, storage_bits: usize },
    /// Flag fields occupy exactly one bit.
    #[error("flag `{0}` must be exactly one bit wide")]
    InvalidFlagWidth(String),
    /// Field name is empty.
    #[error("bitfield name is empty")]
    EmptyName,
    /// Two fields share a name.
    #[error("duplicate bitfield name `{0}`")]
    DuplicateName(String),
}

/// Errors produced when reading or writing bits of a [crate::record::Record]
/// (or a raw buffer, via [crate::bits]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Requested bit range is beyond the end of the buffer.
    #[error("bit range is out of bounds")]
    OutOfBounds,
    /// More than 64 bits were requested in a single access.
    #[error("more than 64 bits requested in a single access")]
    TooManyBits,
    /// Input buffer is shorter than the layout's packed size.
    #[error("buffer is shorter than the record layout")]
    BufferTooShort,
    /// No field with the given name.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// Value representation does not match the field's declaration.
    #[error("value representation does not match field `{0}`")]
    ReprMismatch(String),
    /// Value does not fit the field's declared width; writes reject rather
    /// than truncate.
    #[error("value does not fit the {width_bits}-bit field `{field}`")]
    OutOfRange { field: String, width_bits: usize },
}

/// Errors produced by the typed records in [crate::reference].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Value does not fit the field's declared width.
    #[error("value {value} does not fit the {width_bits}-bit field `{field}`")]
    OutOfRange {
        field: &'static str,
        width_bits: usize,
        value: i64,
    },
    /// Bit pattern with no declared tag.
    #[error("bit pattern {0} is not a declared item kind")]
    UnknownKind(u8),
}

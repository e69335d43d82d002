//! Values read from and written into record fields.

/// A single field value.
///
/// Unsigned fields zero-extend to `u64`, signed fields sign-extend to `i64`,
/// and one-bit flag fields map to `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
}

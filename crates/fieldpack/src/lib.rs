//! # fieldpack
//!
//! Bit-exact C-style bitfield record layouts, for validating generated
//! bindings round-trip.
//!
//! Declare fields as bitfields over explicit storage units (including the
//! zero-width separators C compilers honor), pack them into a
//! [layout::Layout] under the little-endian LSB-first allocation rule, then
//! instantiate [record::Record]s to populate, read back, and cross-check
//! field values bit for bit. The [reference] module ships canned records with
//! documented offsets for exercising a binding generator end to end.
//!
//! ## Example
//!
//! ```
//! use fieldpack::decl::{Bitfield, Storage};
//! use fieldpack::layout::Layout;
//! use fieldpack::record::Record;
//! use fieldpack::value::Value;
//!
//! let layout = Layout::pack(&[
//!     Bitfield::unsigned("three_bits_byte_one", Storage::Byte, 3),
//!     Bitfield::separator(Storage::Byte),
//!     Bitfield::unsigned("six_bits_byte_two", Storage::Byte, 6),
//!     Bitfield::unsigned("two_bits_byte_two", Storage::Byte, 2),
//! ]).unwrap();
//! assert_eq!(layout.offset_of("six_bits_byte_two"), Some(8));
//!
//! let mut record = Record::new(layout);
//! record.set("three_bits_byte_one", Value::Unsigned(5)).unwrap();
//! assert!(record.matches(&[
//!     Value::Unsigned(5),
//!     Value::Unsigned(0),
//!     Value::Unsigned(0),
//! ]));
//! ```

pub mod bits;
pub mod decl;
pub mod errors;
pub mod layout;
pub mod record;
pub mod reference;
pub mod sample;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;

/// Crate-root alias of [sample::compat::SampleAlias]; both paths name
/// [sample::Sample].
pub type SampleAlias = sample::compat::SampleAlias;

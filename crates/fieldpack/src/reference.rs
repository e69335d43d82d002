//! Reference records exercising the layouts generated bindings most often get
//! wrong: a field run split across bytes by a zero-width separator, a signed
//! field sharing its storage unit with a flag, and a narrow enumeration tag.
//!
//! Each record stores its storage units raw and exposes shift/mask accessors
//! at documented bit offsets. `bitfields()` returns the equivalent
//! declarations so the hardcoded offsets can be pinned to
//! [crate::layout::Layout::pack]. The `matches` predicates take one expected
//! value per named field, in declaration order, and are what a test driver
//! calls after pushing a value through generated bindings and back.

use arbitrary_int::{u2, u3, u6};

use crate::{
    decl::{Bitfield, Storage},
    errors::ValueError,
};

/// Two single-byte storage units: a 3-bit field in byte 0, a zero-width
/// separator leaving the remaining 5 bits unused, then a 6-bit and a 2-bit
/// field packed together into byte 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct First {
    raw: [u8; 2],
}

impl First {
    /// Bit offset of `three_bits_byte_one`.
    pub const THREE_BITS_BYTE_ONE_OFFSET: usize = 0;
    /// Bit offset of `six_bits_byte_two`; the separator pushes it into byte 1.
    pub const SIX_BITS_BYTE_TWO_OFFSET: usize = 8;
    /// Bit offset of `two_bits_byte_two`.
    pub const TWO_BITS_BYTE_TWO_OFFSET: usize = 14;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn three_bits_byte_one(&self) -> u3 {
        u3::new(self.raw[0] & 0x07)
    }

    pub fn set_three_bits_byte_one(&mut self, value: u3) {
        self.raw[0] = (self.raw[0] & !0x07) | value.value();
    }

    pub fn six_bits_byte_two(&self) -> u6 {
        u6::new(self.raw[1] & 0x3F)
    }

    pub fn set_six_bits_byte_two(&mut self, value: u6) {
        self.raw[1] = (self.raw[1] & !0x3F) | value.value();
    }

    pub fn two_bits_byte_two(&self) -> u2 {
        u2::new(self.raw[1] >> 6)
    }

    pub fn set_two_bits_byte_two(&mut self, value: u2) {
        self.raw[1] = (self.raw[1] & 0x3F) | (value.value() << 6);
    }

    /// Returns true if the fields match the given values, in declaration
    /// order.
    pub fn matches(
        &self,
        three_bits_byte_one: u3,
        six_bits_byte_two: u6,
        two_bits_byte_two: u2,
    ) -> bool {
        self.three_bits_byte_one() == three_bits_byte_one
            && self.six_bits_byte_two() == six_bits_byte_two
            && self.two_bits_byte_two() == two_bits_byte_two
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.raw
    }

    pub fn from_bytes(raw: [u8; 2]) -> Self {
        First { raw }
    }

    /// Declarations equivalent to this record's layout.
    pub fn bitfields() -> Vec<Bitfield> {
        vec![
            Bitfield::unsigned("three_bits_byte_one", Storage::Byte, 3),
            Bitfield::separator(Storage::Byte),
            Bitfield::unsigned("six_bits_byte_two", Storage::Byte, 6),
            Bitfield::unsigned("two_bits_byte_two", Storage::Byte, 2),
        ]
    }
}

/// One 32-bit storage unit: a 31-bit signed field with a flag in the top bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Second {
    raw: u32,
}

impl Second {
    /// Bit offset of `thirty_one_bits`.
    pub const THIRTY_ONE_BITS_OFFSET: usize = 0;
    /// Bit offset of `one_bit`.
    pub const ONE_BIT_OFFSET: usize = 31;
    /// Smallest value `thirty_one_bits` holds.
    pub const THIRTY_ONE_BITS_MIN: i32 = -(1 << 30);
    /// Largest value `thirty_one_bits` holds.
    pub const THIRTY_ONE_BITS_MAX: i32 = (1 << 30) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn thirty_one_bits(&self) -> i32 {
        ((self.raw << 1) as i32) >> 1
    }

    /// Rejects values outside the 31-bit signed range; never truncates.
    pub fn set_thirty_one_bits(&mut self, value: i32) -> Result<(), ValueError> {
        if !(Self::THIRTY_ONE_BITS_MIN..=Self::THIRTY_ONE_BITS_MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "thirty_one_bits",
                width_bits: 31,
                value: value as i64,
            });
        }

        self.raw = (self.raw & 0x8000_0000) | (value as u32 & 0x7FFF_FFFF);
        Ok(())
    }

    pub fn one_bit(&self) -> bool {
        self.raw >> 31 != 0
    }

    pub fn set_one_bit(&mut self, value: bool) {
        self.raw = (self.raw & 0x7FFF_FFFF) | ((value as u32) << 31);
    }

    /// Returns true if the fields match the given values, in declaration
    /// order.
    pub fn matches(&self, thirty_one_bits: i32, one_bit: bool) -> bool {
        self.thirty_one_bits() == thirty_one_bits && self.one_bit() == one_bit
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.raw.to_le_bytes()
    }

    pub fn from_bytes(raw: [u8; 4]) -> Self {
        Second {
            raw: u32::from_le_bytes(raw),
        }
    }

    /// Declarations equivalent to this record's layout.
    pub fn bitfields() -> Vec<Bitfield> {
        vec![
            Bitfield::signed("thirty_one_bits", Storage::Dword, 31),
            Bitfield::flag("one_bit"),
        ]
    }
}

/// Tag stored in the 3-bit `kind` field of [Third].
///
/// Conversion from raw bits is range-checked: the three declared tags are the
/// only valid patterns, anything else is a [ValueError::UnknownKind].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ItemKind {
    Uno = 0,
    Dos = 1,
    Tres = 2,
}

impl TryFrom<u8> for ItemKind {
    type Error = ValueError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ItemKind::Uno),
            1 => Ok(ItemKind::Dos),
            2 => Ok(ItemKind::Tres),
            other => Err(ValueError::UnknownKind(other)),
        }
    }
}

impl From<ItemKind> for u8 {
    fn from(kind: ItemKind) -> Self {
        kind as u8
    }
}

/// One 32-bit storage unit: a 28-bit signed field, a flag, and a 3-bit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Third {
    raw: u32,
}

impl Third {
    /// Bit offset of `flags`.
    pub const FLAGS_OFFSET: usize = 0;
    /// Bit offset of `is_whatever`.
    pub const IS_WHATEVER_OFFSET: usize = 28;
    /// Bit offset of `kind`.
    pub const KIND_OFFSET: usize = 29;
    /// Smallest value `flags` holds.
    pub const FLAGS_MIN: i32 = -(1 << 27);
    /// Largest value `flags` holds.
    pub const FLAGS_MAX: i32 = (1 << 27) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> i32 {
        ((self.raw << 4) as i32) >> 4
    }

    /// Rejects values outside the 28-bit signed range; never truncates.
    pub fn set_flags(&mut self, value: i32) -> Result<(), ValueError> {
        if !(Self::FLAGS_MIN..=Self::FLAGS_MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "flags",
                width_bits: 28,
                value: value as i64,
            });
        }

        self.raw = (self.raw & 0xF000_0000) | (value as u32 & 0x0FFF_FFFF);
        Ok(())
    }

    pub fn is_whatever(&self) -> bool {
        (self.raw >> 28) & 1 != 0
    }

    pub fn set_is_whatever(&mut self, value: bool) {
        self.raw = (self.raw & !(1 << 28)) | ((value as u32) << 28);
    }

    /// Fails on a bit pattern with no declared tag, which can only arise from
    /// [Third::from_bytes].
    pub fn kind(&self) -> Result<ItemKind, ValueError> {
        ItemKind::try_from((self.raw >> 29) as u8)
    }

    pub fn set_kind(&mut self, kind: ItemKind) {
        self.raw = (self.raw & !(0b111 << 29)) | ((u8::from(kind) as u32) << 29);
    }

    /// Returns true if the fields match the given values, in declaration
    /// order. A record holding an undeclared `kind` pattern matches nothing.
    pub fn matches(&self, flags: i32, is_whatever: bool, kind: ItemKind) -> bool {
        self.flags() == flags && self.is_whatever() == is_whatever && self.kind() == Ok(kind)
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.raw.to_le_bytes()
    }

    pub fn from_bytes(raw: [u8; 4]) -> Self {
        Third {
            raw: u32::from_le_bytes(raw),
        }
    }

    /// Declarations equivalent to this record's layout.
    pub fn bitfields() -> Vec<Bitfield> {
        vec![
            Bitfield::signed("flags", Storage::Dword, 28),
            Bitfield::flag("is_whatever"),
            Bitfield::unsigned("kind", Storage::Dword, 3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_first_round_trip_and_matches() {
        let mut first = First::new();
        first.set_three_bits_byte_one(u3::new(0b101));
        first.set_six_bits_byte_two(u6::new(0b110011));
        first.set_two_bits_byte_two(u2::new(0b10));

        assert!(first.matches(u3::new(0b101), u6::new(0b110011), u2::new(0b10)));
        // Any single differing value fails the predicate.
        assert!(!first.matches(u3::new(0b100), u6::new(0b110011), u2::new(0b10)));
        assert!(!first.matches(u3::new(0b101), u6::new(0b110010), u2::new(0b10)));
        assert!(!first.matches(u3::new(0b101), u6::new(0b110011), u2::new(0b11)));
    }

    #[test]
    fn test_first_bytes() {
        let mut first = First::new();
        first.set_three_bits_byte_one(u3::new(0b101));
        first.set_six_bits_byte_two(u6::new(0b110011));
        first.set_two_bits_byte_two(u2::new(0b10));

        assert_eq!(first.to_bytes(), [0b0000_0101, 0b1011_0011]);
        assert_eq!(First::from_bytes([0b0000_0101, 0b1011_0011]), first);
    }

    #[test]
    fn test_first_fields_occupy_separate_bytes() {
        // Structural check: the packer agrees with the documented offsets,
        // and the separator puts the 6-bit field in a different byte.
        let layout = Layout::pack(&First::bitfields()).unwrap();

        assert_eq!(
            layout.offset_of("three_bits_byte_one"),
            Some(First::THREE_BITS_BYTE_ONE_OFFSET)
        );
        assert_eq!(
            layout.offset_of("six_bits_byte_two"),
            Some(First::SIX_BITS_BYTE_TWO_OFFSET)
        );
        assert_eq!(
            layout.offset_of("two_bits_byte_two"),
            Some(First::TWO_BITS_BYTE_TWO_OFFSET)
        );
        assert_eq!(layout.byte_of("three_bits_byte_one"), Some(0));
        assert_eq!(layout.byte_of("six_bits_byte_two"), Some(1));
        assert_eq!(layout.size_bytes(), 2);
    }

    #[test]
    fn test_second_signed_extremes() {
        let mut second = Second::new();

        second.set_thirty_one_bits(Second::THIRTY_ONE_BITS_MIN).unwrap();
        assert_eq!(second.thirty_one_bits(), Second::THIRTY_ONE_BITS_MIN);

        second.set_thirty_one_bits(Second::THIRTY_ONE_BITS_MAX).unwrap();
        assert_eq!(second.thirty_one_bits(), Second::THIRTY_ONE_BITS_MAX);

        second.set_thirty_one_bits(-1).unwrap();
        assert_eq!(second.thirty_one_bits(), -1);
    }

    #[test]
    fn test_second_out_of_range_rejected() {
        let mut second = Second::new();
        assert_eq!(
            second.set_thirty_one_bits(Second::THIRTY_ONE_BITS_MAX + 1),
            Err(ValueError::OutOfRange {
                field: "thirty_one_bits",
                width_bits: 31,
                value: (Second::THIRTY_ONE_BITS_MAX as i64) + 1,
            })
        );
        assert!(second.set_thirty_one_bits(Second::THIRTY_ONE_BITS_MIN - 1).is_err());
    }

    #[test]
    fn test_second_flag_independent_of_value() {
        let mut second = Second::new();
        second.set_thirty_one_bits(-1).unwrap();

        second.set_one_bit(true);
        assert_eq!(second.thirty_one_bits(), -1);
        assert!(second.one_bit());

        second.set_one_bit(false);
        assert_eq!(second.thirty_one_bits(), -1);
        assert!(!second.one_bit());

        assert!(second.matches(-1, false));
        assert!(!second.matches(-1, true));
        assert!(!second.matches(0, false));
    }

    #[test]
    fn test_second_layout_offsets() {
        let layout = Layout::pack(&Second::bitfields()).unwrap();

        assert_eq!(
            layout.offset_of("thirty_one_bits"),
            Some(Second::THIRTY_ONE_BITS_OFFSET)
        );
        assert_eq!(layout.offset_of("one_bit"), Some(Second::ONE_BIT_OFFSET));
        assert_eq!(layout.size_bytes(), 4);
    }

    #[test]
    fn test_item_kind_round_trip() {
        for kind in [ItemKind::Uno, ItemKind::Dos, ItemKind::Tres] {
            assert_eq!(ItemKind::try_from(u8::from(kind)), Ok(kind));
        }
    }

    #[test]
    fn test_item_kind_rejects_undeclared_patterns() {
        for raw in 3..8u8 {
            assert_eq!(ItemKind::try_from(raw), Err(ValueError::UnknownKind(raw)));
        }
    }

    #[test]
    fn test_third_round_trip() {
        let mut third = Third::new();
        third.set_flags(-12345).unwrap();
        third.set_is_whatever(true);
        third.set_kind(ItemKind::Tres);

        assert_eq!(third.flags(), -12345);
        assert!(third.is_whatever());
        assert_eq!(third.kind(), Ok(ItemKind::Tres));
        assert!(third.matches(-12345, true, ItemKind::Tres));
        assert!(!third.matches(-12345, true, ItemKind::Dos));
    }

    #[test]
    fn test_third_no_cross_field_interference() {
        let mut third = Third::new();
        third.set_is_whatever(true);
        third.set_kind(ItemKind::Dos);

        // Flags swing across their full range without disturbing neighbors.
        third.set_flags(Third::FLAGS_MIN).unwrap();
        assert!(third.is_whatever());
        assert_eq!(third.kind(), Ok(ItemKind::Dos));

        third.set_flags(Third::FLAGS_MAX).unwrap();
        assert!(third.is_whatever());
        assert_eq!(third.kind(), Ok(ItemKind::Dos));
        assert_eq!(third.flags(), Third::FLAGS_MAX);

        third.set_kind(ItemKind::Uno);
        assert_eq!(third.flags(), Third::FLAGS_MAX);
        assert!(third.is_whatever());
    }

    #[test]
    fn test_third_flags_out_of_range_rejected() {
        let mut third = Third::new();
        assert!(third.set_flags(Third::FLAGS_MAX + 1).is_err());
        assert!(third.set_flags(Third::FLAGS_MIN - 1).is_err());
    }

    #[test]
    fn test_third_undeclared_kind_from_raw_bytes() {
        // Bits 29..32 = 0b101: no declared tag.
        let third = Third::from_bytes((0b101u32 << 29).to_le_bytes());
        assert_eq!(third.kind(), Err(ValueError::UnknownKind(0b101)));
        assert!(!third.matches(0, false, ItemKind::Uno));
    }

    #[test]
    fn test_third_layout_offsets() {
        let layout = Layout::pack(&Third::bitfields()).unwrap();

        assert_eq!(layout.offset_of("flags"), Some(Third::FLAGS_OFFSET));
        assert_eq!(
            layout.offset_of("is_whatever"),
            Some(Third::IS_WHATEVER_OFFSET)
        );
        assert_eq!(layout.offset_of("kind"), Some(Third::KIND_OFFSET));
        assert_eq!(layout.size_bytes(), 4);
    }

    #[test]
    fn test_third_bytes_little_endian() {
        let mut third = Third::new();
        third.set_flags(1).unwrap();
        third.set_kind(ItemKind::Dos);

        let raw = u32::from_le_bytes(third.to_bytes());
        assert_eq!(raw, 1 | (1 << 29));
    }
}

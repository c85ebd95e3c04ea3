//! Low-level mask arithmetic over 32-bit words.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit of the word.

/// Width of every word handled by this crate.
pub const WORD_BITS: u32 = u32::BITS;

/// Returns a mask of the low `len` bits. `len` may be anywhere in `0..=32`;
/// a 32-bit length yields `u32::MAX` rather than overflowing the shift.
pub const fn value_mask(len: u32) -> u32 {
    match 1u32.checked_shl(len) {
        Some(x) => x,
        None => 0,
    }
    .wrapping_sub(1)
}

/// Returns the mask with ones exactly at bits `lsb..lsb + len`.
pub const fn field_mask(lsb: u32, len: u32) -> u32 {
    value_mask(len) << lsb
}

/// Reads the bits selected by `mask` and moves them down to bit 0.
pub const fn extract(raw: u32, mask: u32, lsb: u32) -> u32 {
    (raw & mask) >> lsb
}

/// Replaces the bits selected by `mask` with the low `len` bits of `value`.
/// Higher bits of `value` are discarded.
pub const fn insert(raw: u32, mask: u32, lsb: u32, len: u32, value: u32) -> u32 {
    (raw & !mask) | ((value & value_mask(len)) << lsb)
}

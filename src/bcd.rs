//! Binary-coded decimal helpers.
//!
//! The PCF85063A stores every time and alarm field as packed BCD, one
//! decimal digit per nibble.

/// Packs a decimal value (0-99) into BCD.
///
/// Values above 99 produce an undefined pattern; callers clamp first.
#[must_use]
pub const fn dec_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Unpacks a BCD byte into its decimal value.
#[must_use]
pub const fn bcd_to_dec(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

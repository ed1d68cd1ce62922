//! Counter frame decoding utilities.
//!
//! The chip clocks its counter out most-significant byte first. Sign recovery
//! always compares the first counter byte against `0xFF` and subtracts a fixed
//! `2^32` ceiling, whatever the configured width. For widths below four bytes
//! a frame whose top byte is `0xFF` therefore decodes to a value far below the
//! narrower range of that width; callers reading 1-3 byte counters should keep
//! magnitudes below that top byte.

/// Largest unsigned value of the chip's 32-bit counter.
pub const MAX_UNSIGNED_32: u64 = 4_294_967_295;

// Top byte that marks a negative count in the received frame.
const NEGATIVE_MARKER: u8 = 0xFF;

/// Decodes the counter bytes of a `RD_CNTR` reply (opcode echo excluded).
///
/// Returns `0` for an empty frame. Values are `i64` because the sign rule can
/// produce results outside the `i32` range for some frames.
pub fn decode_counter(bytes: &[u8]) -> i64 {
    let unsigned = bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

    match bytes.first() {
        Some(&NEGATIVE_MARKER) => unsigned as i64 - (MAX_UNSIGNED_32 as i64 + 1),
        _ => unsigned as i64,
    }
}

/// Converts a raw count into rotations.
pub fn rotation_rate(count: i64, pulses_per_rotation: u32) -> f64 {
    count as f64 / f64::from(pulses_per_rotation)
}

#[cfg(test)]
mod tests {
    use super::{decode_counter, rotation_rate};

    #[test]
    fn positive_four_byte_frame() {
        assert_eq!(decode_counter(&[0x00, 0x00, 0x08, 0x00]), 2048);
    }

    /// Two's complement values across the full 32-bit frame.
    #[test]
    fn negative_four_byte_frame() {
        assert_eq!(decode_counter(&[0xFF, 0xFF, 0xFF, 0xFE]), -2);
        assert_eq!(decode_counter(&[0xFF, 0xFF, 0xFF, 0xFF]), -1);
        assert_eq!(decode_counter(&[0xFF, 0x00, 0x00, 0x00]), -16_777_216);
    }

    #[test]
    fn top_byte_below_marker_stays_unsigned() {
        assert_eq!(decode_counter(&[0x80, 0x00, 0x00, 0x00]), 2_147_483_648);
        assert_eq!(decode_counter(&[0xFE, 0xFF, 0xFF, 0xFF]), 4_278_190_079);
    }

    #[test]
    fn narrow_frames_fold_most_significant_first() {
        assert_eq!(decode_counter(&[0x7F]), 127);
        assert_eq!(decode_counter(&[0x01, 0x02]), 0x0102);
        assert_eq!(decode_counter(&[0x12, 0x34, 0x56]), 0x12_3456);
    }

    /// A leading `0xFF` is negative against `2^32` even in narrow frames.
    #[test]
    fn narrow_frames_use_fixed_32_bit_ceiling() {
        assert_eq!(decode_counter(&[0xFF]), 255 - 4_294_967_296);
        assert_eq!(decode_counter(&[0xFF, 0xFE]), 0xFFFE - 4_294_967_296);
        assert_eq!(decode_counter(&[0xFF, 0xFF, 0xFF]), 0xFF_FFFF - 4_294_967_296);
    }

    #[test]
    fn zero_frames_decode_to_zero() {
        assert_eq!(decode_counter(&[]), 0);
        for width in 1..=4 {
            assert_eq!(decode_counter(&[0u8; 4][..width]), 0);
        }
    }

    #[test]
    fn rotation_rate_is_real_division() {
        assert_eq!(rotation_rate(2048, 2048), 1.0);
        assert_eq!(rotation_rate(-1024, 2048), -0.5);
        assert_eq!(rotation_rate(1, 256), 0.00390625);
    }
}

//! Strongly typed parameter enumerations for the LS7366R driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use ls7366r::params::{CounterWidth, QuadratureMode};
//!
//! let width = CounterWidth::FourByte;
//! assert_eq!(width.bytes(), 4);
//! assert_eq!(width.pulses_per_rotation(), 2048);
//! let _ = QuadratureMode::X4;
//! ```

use modular_bitfield::prelude::Specifier;

use crate::config::ConfigError;

/// Counter byte-width selections encoded in `MDR1[1:0]`.
///
/// The on-chip encoding runs opposite to the natural width ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum CounterWidth {
    /// 4-byte (32-bit) counter.
    FourByte = 0b00,
    /// 3-byte (24-bit) counter.
    ThreeByte = 0b01,
    /// 2-byte (16-bit) counter.
    TwoByte = 0b10,
    /// 1-byte (8-bit) counter.
    OneByte = 0b11,
}

impl CounterWidth {
    /// Number of counter bytes clocked out on every read.
    pub const fn bytes(self) -> usize {
        match self {
            Self::OneByte => 1,
            Self::TwoByte => 2,
            Self::ThreeByte => 3,
            Self::FourByte => 4,
        }
    }

    /// Counter increments per mechanical rotation for this width.
    pub const fn pulses_per_rotation(self) -> u32 {
        match self {
            Self::OneByte => 256,
            Self::TwoByte => 512,
            Self::ThreeByte => 1_024,
            Self::FourByte => 2_048,
        }
    }

    /// Raw `MDR1` byte-width selector.
    pub const fn selector(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CounterWidth {
    type Error = ConfigError;

    fn try_from(bytes: u8) -> core::result::Result<Self, Self::Error> {
        match bytes {
            1 => Ok(Self::OneByte),
            2 => Ok(Self::TwoByte),
            3 => Ok(Self::ThreeByte),
            4 => Ok(Self::FourByte),
            _ => Err(ConfigError::InvalidCounterWidth(bytes)),
        }
    }
}

/// Count mode selections encoded in `MDR0[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum QuadratureMode {
    /// Non-quadrature count mode (A = clock, B = direction).
    NonQuadrature = 0b00,
    /// One count per quadrature cycle.
    X1 = 0b01,
    /// Two counts per quadrature cycle.
    X2 = 0b10,
    /// Four counts per quadrature cycle.
    X4 = 0b11,
}

#[cfg(test)]
mod tests {
    use super::{CounterWidth, QuadratureMode};
    use crate::config::ConfigError;

    /// MDR1 selectors run opposite to the byte count.
    #[test]
    fn selector_table_is_inverted_relative_to_width() {
        let table = [
            (1u8, 0x03u8),
            (2, 0x02),
            (3, 0x01),
            (4, 0x00),
        ];

        for (bytes, selector) in table {
            let width = CounterWidth::try_from(bytes).unwrap();
            assert_eq!(width.selector(), selector, "width {bytes}");
            assert_eq!(width.bytes(), bytes as usize);
        }
    }

    #[test]
    fn pulses_per_rotation_follow_width() {
        assert_eq!(CounterWidth::OneByte.pulses_per_rotation(), 256);
        assert_eq!(CounterWidth::TwoByte.pulses_per_rotation(), 512);
        assert_eq!(CounterWidth::ThreeByte.pulses_per_rotation(), 1024);
        assert_eq!(CounterWidth::FourByte.pulses_per_rotation(), 2048);
    }

    #[test]
    fn out_of_range_widths_are_rejected() {
        for bytes in [0u8, 5, 8, 255] {
            assert_eq!(
                CounterWidth::try_from(bytes),
                Err(ConfigError::InvalidCounterWidth(bytes))
            );
        }
    }

    #[test]
    fn quadrature_mode_encodings() {
        assert_eq!(QuadratureMode::NonQuadrature as u8, 0x00);
        assert_eq!(QuadratureMode::X1 as u8, 0x01);
        assert_eq!(QuadratureMode::X2 as u8, 0x02);
        assert_eq!(QuadratureMode::X4 as u8, 0x03);
    }
}

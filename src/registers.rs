//! Instruction and register map definitions for the LS7366R counter.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{CounterWidth, QuadratureMode};

/// Byte clocked out after `RD_STR` to receive the status reply.
pub const STATUS_FILLER: u8 = 0xFF;
/// Byte clocked out after `RD_CNTR` for each counter byte received.
pub const COUNTER_PADDING: u8 = 0x00;
/// Widest counter frame the chip exposes, in bytes.
pub const MAX_COUNTER_BYTES: usize = 4;

/// Instruction register opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// `CLR CNTR`: resets the counter to zero.
    ClearCounter = 0x20,
    /// `CLR STR`: resets the status register.
    ClearStatus = 0x30,
    /// `RD CNTR`: transfers the counter through `OTR` and clocks it out.
    ReadCounter = 0x60,
    /// `RD STR`: clocks out the status register.
    ReadStatus = 0x70,
    /// `WR MDR0`: writes the count mode register.
    WriteMode0 = 0x88,
    /// `WR MDR1`: writes the counter width register.
    WriteMode1 = 0x90,
}

impl Command {
    /// Returns the opcode byte sent first in every transaction.
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl From<Command> for u8 {
    fn from(value: Command) -> Self {
        value.opcode()
    }
}

/// Bitfield representation of the write-only `MDR0` register.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode0 {
    // Count mode selection (bits 1:0).
    pub quadrature_mode: QuadratureMode,
    // Free-running, index and filter settings are left at zero.
    #[skip]
    __: B6,
}

impl From<Mode0> for u8 {
    fn from(value: Mode0) -> Self {
        value.into_bytes()[0]
    }
}

impl From<QuadratureMode> for Mode0 {
    fn from(mode: QuadratureMode) -> Self {
        Self::new().with_quadrature_mode(mode)
    }
}

/// Bitfield representation of the write-only `MDR1` register.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode1 {
    // Counter byte width (bits 1:0).
    pub counter_width: CounterWidth,
    // Counting enabled and all flag outputs masked.
    #[skip]
    __: B6,
}

impl From<Mode1> for u8 {
    fn from(value: Mode1) -> Self {
        value.into_bytes()[0]
    }
}

impl From<CounterWidth> for Mode1 {
    fn from(width: CounterWidth) -> Self {
        Self::new().with_counter_width(width)
    }
}

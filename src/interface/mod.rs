//! Bus interface abstraction for the LS7366R driver.

pub mod spi;

use crate::registers::Command;

/// Abstraction over the full-duplex bus access required by the driver.
pub trait Ls7366rInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Clocks `frame` out while replacing it, byte for byte, with the reply.
    fn transfer(&mut self, frame: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Issues a single-byte instruction.
    fn send_command(&mut self, command: Command) -> core::result::Result<(), Self::Error> {
        self.transfer(&mut [command.opcode()])
    }

    /// Writes one payload byte after the instruction.
    fn write_register(
        &mut self,
        command: Command,
        value: u8,
    ) -> core::result::Result<(), Self::Error> {
        self.transfer(&mut [command.opcode(), value])
    }
}

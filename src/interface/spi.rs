//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::SpiDevice;

use super::Ls7366rInterface;

/// SPI-based interface implementation for the LS7366R driver.
///
/// The `SpiDevice` is expected to already be bound to the chip's select line
/// and clocked at the desired rate.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Ls7366rInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn transfer(&mut self, frame: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if frame.is_empty() {
            return Ok(());
        }

        self.spi.transfer_in_place(frame)
    }
}

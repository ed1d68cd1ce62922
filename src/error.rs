//! Error handling primitives for the LS7366R driver.

use embedded_hal::digital::ErrorKind as PinErrorKind;

use crate::interface::spi::SpiInterface;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// Driving the reset or intervene line failed.
    Pin(PinErrorKind),
    /// The provided configuration parameters are invalid.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

/// Failed construction, handing back the hardware the driver was given.
pub struct InitError<E, IFACE, RST, INT> {
    error: Error<E>,
    interface: IFACE,
    reset: RST,
    intervene: INT,
}

impl<E, IFACE, RST, INT> InitError<E, IFACE, RST, INT> {
    pub(crate) fn new(error: Error<E>, interface: IFACE, reset: RST, intervene: INT) -> Self {
        Self {
            error,
            interface,
            reset,
            intervene,
        }
    }

    /// Returns the error that aborted construction.
    pub fn error(&self) -> &Error<E> {
        &self.error
    }

    /// Drops the hardware and keeps only the error.
    pub fn into_error(self) -> Error<E> {
        self.error
    }

    /// Returns the bus interface and both lines, e.g. to retry construction.
    pub fn release(self) -> (IFACE, RST, INT) {
        (self.interface, self.reset, self.intervene)
    }
}

impl<E, SPI, RST, INT> InitError<E, SpiInterface<SPI>, RST, INT> {
    /// Returns the SPI device and both lines.
    pub fn release_spi(self) -> (SPI, RST, INT) {
        let (iface, reset, intervene) = self.release();
        (iface.release(), reset, intervene)
    }
}

impl<E, IFACE, RST, INT> core::fmt::Debug for InitError<E, IFACE, RST, INT>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InitError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

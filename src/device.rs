//! High-level LS7366R device driver implementation.

use crate::config::Config;
use crate::counter::{decode_counter, rotation_rate};
use crate::error::{Error, InitError, Result};
use crate::interface::spi::SpiInterface;
use crate::interface::Ls7366rInterface;
use crate::params::CounterWidth;
use crate::registers::{
    Command,
    Mode0,
    Mode1,
    COUNTER_PADDING,
    MAX_COUNTER_BYTES,
    STATUS_FILLER,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin};
use embedded_hal::spi::SpiDevice;

/// Wait between the `MDR0` and `MDR1` writes during initialization (milliseconds).
pub const MODE_SETTLE_DELAY_MS: u32 = 100;

/// High-level synchronous driver for the LS7366R quadrature counter.
///
/// Owns the bus interface together with the reset (`RST`) and intervene (`INT`)
/// output lines. Each instance drives exactly one chip.
pub struct Ls7366r<IFACE, RST, INT> {
    interface: IFACE,
    reset: RST,
    intervene: INT,
    config: Config,
}

impl<IFACE, RST, INT> Ls7366r<IFACE, RST, INT> {
    // ==================================================================
    // == Ownership & Accessors =========================================
    // ==================================================================
    /// Consumes the driver and returns the owned bus interface and lines.
    ///
    /// The chip keeps counting with its current configuration.
    pub fn release(self) -> (IFACE, RST, INT) {
        info!("releasing LS7366R");
        (self.interface, self.reset, self.intervene)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the configuration written during initialization.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the configured counter width.
    pub fn counter_width(&self) -> CounterWidth {
        self.config.counter_width
    }

    /// Returns the counter increments per rotation for the configured width.
    pub fn pulses_per_rotation(&self) -> u32 {
        self.config.pulses_per_rotation()
    }
}

impl<SPI, RST, INT> Ls7366r<SpiInterface<SPI>, RST, INT>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(
        spi: SPI,
        reset: RST,
        intervene: INT,
        config: Config,
        delay: &mut impl DelayNs,
    ) -> core::result::Result<Self, InitError<SPI::Error, SpiInterface<SPI>, RST, INT>>
    where
        RST: OutputPin,
        INT: OutputPin,
    {
        Self::new(SpiInterface::new(spi), reset, intervene, config, delay)
    }

    /// Releases the driver, returning the SPI device and both lines.
    pub fn release_spi(self) -> (SPI, RST, INT) {
        let (iface, reset, intervene) = self.release();
        (iface.release(), reset, intervene)
    }
}

impl<IFACE, RST, INT, CommE> Ls7366r<IFACE, RST, INT>
where
    IFACE: Ls7366rInterface<Error = CommE>,
    RST: OutputPin,
    INT: OutputPin,
{
    // ==================================================================
    // == Construction & Initialization =================================
    // ==================================================================
    /// Creates a driver and brings the chip into a known counting state.
    ///
    /// Drives reset high and intervene low, clears the counter and status,
    /// writes `MDR0`, waits [`MODE_SETTLE_DELAY_MS`] and writes `MDR1`. On
    /// failure the returned [`InitError`] carries the hardware back.
    pub fn new(
        interface: IFACE,
        reset: RST,
        intervene: INT,
        config: Config,
        delay: &mut impl DelayNs,
    ) -> core::result::Result<Self, InitError<CommE, IFACE, RST, INT>> {
        let mut device = Self {
            interface,
            reset,
            intervene,
            config,
        };

        match device.init(delay) {
            Ok(()) => Ok(device),
            Err(error) => Err(InitError::new(
                error,
                device.interface,
                device.reset,
                device.intervene,
            )),
        }
    }

    /// Like [`Ls7366r::new`] with the default configuration and a width given in bytes.
    ///
    /// Widths outside 1..=4 are rejected before touching the bus or the lines.
    pub fn with_width_bytes(
        interface: IFACE,
        reset: RST,
        intervene: INT,
        width_bytes: u8,
        delay: &mut impl DelayNs,
    ) -> core::result::Result<Self, InitError<CommE, IFACE, RST, INT>> {
        match Config::from_width_bytes(width_bytes) {
            Ok(config) => Self::new(interface, reset, intervene, config, delay),
            Err(_) => Err(InitError::new(
                Error::InvalidConfig,
                interface,
                reset,
                intervene,
            )),
        }
    }

    fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        // Reset is active low; intervene stays deasserted.
        self.reset.set_high().map_err(|e| Error::Pin(e.kind()))?;
        self.intervene.set_low().map_err(|e| Error::Pin(e.kind()))?;

        debug!("clearing counter");
        self.clear_counter()?;
        debug!("clearing status");
        self.clear_status()?;

        let mode0 = Mode0::from(self.config.quadrature_mode);
        debug!("writing MDR0 {=u8:#x}", u8::from(mode0));
        self
            .interface
            .write_register(Command::WriteMode0, u8::from(mode0))
            .map_err(Error::from)?;

        delay.delay_ms(MODE_SETTLE_DELAY_MS);

        let mode1 = Mode1::from(self.config.counter_width);
        debug!("writing MDR1 {=u8:#x}", u8::from(mode1));
        self
            .interface
            .write_register(Command::WriteMode1, u8::from(mode1))
            .map_err(Error::from)?;

        debug!("configured {} counter", self.config.counter_width);
        Ok(())
    }

    // ==================================================================
    // == Counter & Status ==============================================
    // ==================================================================
    /// Resets the counter to zero.
    pub fn clear_counter(&mut self) -> Result<(), CommE> {
        self
            .interface
            .send_command(Command::ClearCounter)
            .map_err(Error::from)
    }

    /// Resets the status register.
    pub fn clear_status(&mut self) -> Result<(), CommE> {
        self
            .interface
            .send_command(Command::ClearStatus)
            .map_err(Error::from)
    }

    /// Reads the signed counter value.
    ///
    /// See [`decode_counter`] for how the sign is recovered.
    pub fn read_counter(&mut self) -> Result<i64, CommE> {
        let width = self.config.counter_width.bytes();
        let mut raw = [COUNTER_PADDING; MAX_COUNTER_BYTES + 1];
        raw[0] = Command::ReadCounter.opcode();

        let frame = &mut raw[..=width];
        self.interface.transfer(frame).map_err(Error::from)?;

        // frame[0] is clocked out while the opcode is shifted in.
        Ok(decode_counter(&frame[1..]))
    }

    /// Reads the counter and converts it into rotations.
    pub fn read_rotation_rate(&mut self) -> Result<f64, CommE> {
        let count = self.read_counter()?;
        Ok(rotation_rate(count, self.pulses_per_rotation()))
    }

    /// Reads the raw `STR` status byte.
    pub fn read_status(&mut self) -> Result<u8, CommE> {
        let mut frame = [Command::ReadStatus.opcode(), STATUS_FILLER];
        self.interface.transfer(&mut frame).map_err(Error::from)?;
        Ok(frame[1])
    }
}

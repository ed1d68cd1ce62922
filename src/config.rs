//! Configuration primitives for the LS7366R driver.

use crate::params::{CounterWidth, QuadratureMode};

/// User-facing configuration for the LS7366R counter.
///
/// Fixed for the lifetime of a driver: the counter width decides the length of
/// every counter read frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Counter byte width written to `MDR1`.
    pub counter_width: CounterWidth,
    /// Count mode written to `MDR0`.
    pub quadrature_mode: QuadratureMode,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Builds the default configuration with a counter width given in bytes.
    pub fn from_width_bytes(bytes: u8) -> core::result::Result<Self, ConfigError> {
        let counter_width = CounterWidth::try_from(bytes)?;
        Ok(Self::new().counter_width(counter_width).build())
    }

    /// Counter increments per rotation implied by the configured width.
    pub const fn pulses_per_rotation(&self) -> u32 {
        self.counter_width.pulses_per_rotation()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the counter byte width.
    pub fn counter_width(mut self, counter_width: CounterWidth) -> Self {
        self.config.counter_width = counter_width;
        self
    }

    /// Overrides the count mode.
    pub fn quadrature_mode(mut self, quadrature_mode: QuadratureMode) -> Self {
        self.config.quadrature_mode = quadrature_mode;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter_width: CounterWidth::FourByte,
            // MDR0 = 0x00 on the wire.
            quadrature_mode: QuadratureMode::NonQuadrature,
        }
    }
}

/// Validation errors generated while building a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Counter width outside of 1..=4 bytes.
    InvalidCounterWidth(u8),
}

#![no_std]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod counter;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::config::{Config, ConfigError};
pub use crate::device::Ls7366r;
pub use crate::error::{Error, InitError, Result};
pub use crate::params::{CounterWidth, QuadratureMode};

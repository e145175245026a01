//! Bit-banged driver for the MAX6675 thermocouple-to-digital converter
//!
//! The MAX6675 is read-only: pulling chip-select low latches a conversion,
//! and sixteen clock pulses shift it out on the data line. This crate
//! drives those three lines through a [`Gpio`] collaborator, decodes the
//! [`Frame`] and converts the temperature into the configured [`Unit`].
//!
//! ```no_run
//! # fn demo<G: max6675_bitbang::Gpio>(gpio: G) -> Result<(), max6675_bitbang::Error<G::Error>> {
//! use max6675_bitbang::{Config, Max6675, Unit};
//!
//! let mut sensor = Max6675::new(gpio, Config::new(4, 23, 22).unit(Unit::Fahrenheit))?;
//! let temperature = sensor.get()?;
//! let _gpio = sensor.cleanup()?;
//! # let _ = temperature;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "rppal"), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod config;
mod driver;
mod error;
mod frame;
mod gpio;
#[cfg(feature = "rppal")]
mod rpi;
pub mod unit;

pub use config::Config;
pub use driver::Max6675;
pub use error::Error;
pub use frame::{FRAME_BITS, Frame, RESOLUTION, Status};
pub use gpio::{BCM_MAX, Direction, Gpio, Numbering, Pin, PinState};
#[cfg(feature = "rppal")]
pub use rpi::{RpiError, RppalGpio};
pub use unit::{ParseUnitError, Unit};

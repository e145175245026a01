//! GPIO collaborator interface
//!
//! The driver never touches hardware directly. Every pin operation goes
//! through a [`Gpio`] implementation, which makes the protocol testable
//! against mock pins and portable across platforms.

use core::cell::RefCell;

pub use embedded_hal::digital::PinState;

/// Physical 40-pin Raspberry Pi header position to BCM number
///
/// Index 0 is unused so positions can index directly. Power and ground
/// positions map to `None`.
const BOARD_TO_BCM: [Option<u8>; 41] = [
    None,
    None,     // 1: 3V3
    None,     // 2: 5V
    Some(2),  // 3
    None,     // 4: 5V
    Some(3),  // 5
    None,     // 6: GND
    Some(4),  // 7
    Some(14), // 8
    None,     // 9: GND
    Some(15), // 10
    Some(17), // 11
    Some(18), // 12
    Some(27), // 13
    None,     // 14: GND
    Some(22), // 15
    Some(23), // 16
    None,     // 17: 3V3
    Some(24), // 18
    Some(10), // 19
    None,     // 20: GND
    Some(9),  // 21
    Some(25), // 22
    Some(11), // 23
    Some(8),  // 24
    None,     // 25: GND
    Some(7),  // 26
    Some(0),  // 27
    Some(1),  // 28
    Some(5),  // 29
    None,     // 30: GND
    Some(6),  // 31
    Some(12), // 32
    Some(13), // 33
    None,     // 34: GND
    Some(19), // 35
    Some(16), // 36
    Some(26), // 37
    Some(20), // 38
    None,     // 39: GND
    Some(21), // 40
];

/// Highest BCM line exposed on the 40-pin header
pub const BCM_MAX: u8 = 27;

/// How pin numbers are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Numbering {
    /// Broadcom SoC channel numbers
    #[default]
    Bcm,
    /// Physical positions on the 40-pin header
    Board,
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// A GPIO line identifier together with the numbering scheme it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    number: u8,
    numbering: Numbering,
}

impl Pin {
    #[must_use]
    pub const fn new(number: u8, numbering: Numbering) -> Self {
        Self { number, numbering }
    }

    /// Pin identified by its BCM channel
    #[must_use]
    pub const fn bcm(number: u8) -> Self {
        Self::new(number, Numbering::Bcm)
    }

    /// Pin identified by its physical header position
    #[must_use]
    pub const fn board(number: u8) -> Self {
        Self::new(number, Numbering::Board)
    }

    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn numbering(&self) -> Numbering {
        self.numbering
    }

    /// Resolve this pin to a BCM channel
    ///
    /// Returns `None` for header positions that carry power or ground, and
    /// for numbers outside the 40-pin header.
    #[must_use]
    pub const fn to_bcm(&self) -> Option<u8> {
        match self.numbering {
            Numbering::Bcm if self.number <= BCM_MAX => Some(self.number),
            Numbering::Bcm => None,
            Numbering::Board => {
                if (self.number as usize) < BOARD_TO_BCM.len() {
                    BOARD_TO_BCM[self.number as usize]
                } else {
                    None
                }
            }
        }
    }
}

/// Platform GPIO access used by the driver
///
/// Implementations own whatever global state the platform needs. The
/// numbering scheme is announced once through [`Gpio::select_numbering`]
/// and is also carried on every [`Pin`], so an implementation never has to
/// guess how a number was meant.
pub trait Gpio {
    type Error;

    /// Announce the numbering scheme subsequent pins are expressed in
    fn select_numbering(&mut self, numbering: Numbering) -> Result<(), Self::Error>;

    /// Set a pin's direction
    fn configure(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error>;

    /// Drive an output pin
    fn write(&mut self, pin: Pin, level: PinState) -> Result<(), Self::Error>;

    /// Sample an input pin
    fn read(&mut self, pin: Pin) -> Result<PinState, Self::Error>;
}

impl<G: Gpio + ?Sized> Gpio for &mut G {
    type Error = G::Error;

    fn select_numbering(&mut self, numbering: Numbering) -> Result<(), Self::Error> {
        (**self).select_numbering(numbering)
    }

    fn configure(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error> {
        (**self).configure(pin, direction)
    }

    fn write(&mut self, pin: Pin, level: PinState) -> Result<(), Self::Error> {
        (**self).write(pin, level)
    }

    fn read(&mut self, pin: Pin) -> Result<PinState, Self::Error> {
        (**self).read(pin)
    }
}

/// Shares one collaborator between several readers, e.g. chips on a common
/// clock and data line with separate chip-selects
///
/// Each primitive borrows the cell for its own duration only. Reads are
/// synchronous, so readers on one thread never interleave mid-frame.
impl<G: Gpio> Gpio for &RefCell<G> {
    type Error = G::Error;

    fn select_numbering(&mut self, numbering: Numbering) -> Result<(), Self::Error> {
        self.borrow_mut().select_numbering(numbering)
    }

    fn configure(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error> {
        self.borrow_mut().configure(pin, direction)
    }

    fn write(&mut self, pin: Pin, level: PinState) -> Result<(), Self::Error> {
        self.borrow_mut().write(pin, level)
    }

    fn read(&mut self, pin: Pin) -> Result<PinState, Self::Error> {
        self.borrow_mut().read(pin)
    }
}

//! Construction options for [`crate::Max6675`]

use crate::gpio::{Numbering, Pin};
use crate::unit::Unit;

/// Pin assignment and output unit for one MAX6675
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    chip_select: u8,
    clock: u8,
    data_in: u8,
    power: Option<u8>,
    unit: Unit,
    numbering: Numbering,
}

impl Config {
    /// Pins are numbered according to [`Config::numbering`], BCM unless
    /// changed
    #[must_use]
    pub const fn new(chip_select: u8, clock: u8, data_in: u8) -> Self {
        Self {
            chip_select,
            clock,
            data_in,
            power: None,
            unit: Unit::Celsius,
            numbering: Numbering::Bcm,
        }
    }

    /// Unit returned by [`crate::Max6675::get`]
    #[must_use]
    pub const fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Power the chip from a GPIO line, driven high at construction
    #[must_use]
    pub const fn power(mut self, pin: u8) -> Self {
        self.power = Some(pin);
        self
    }

    #[must_use]
    pub const fn numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    #[must_use]
    pub const fn chip_select_pin(&self) -> Pin {
        Pin::new(self.chip_select, self.numbering)
    }

    #[must_use]
    pub const fn clock_pin(&self) -> Pin {
        Pin::new(self.clock, self.numbering)
    }

    #[must_use]
    pub const fn data_in_pin(&self) -> Pin {
        Pin::new(self.data_in, self.numbering)
    }

    #[must_use]
    pub const fn power_pin(&self) -> Option<Pin> {
        match self.power {
            Some(number) => Some(Pin::new(number, self.numbering)),
            None => None,
        }
    }

    #[must_use]
    pub const fn output_unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub const fn pin_numbering(&self) -> Numbering {
        self.numbering
    }

    /// Check that no pin is assigned to more than one line
    ///
    /// # Errors
    ///
    /// Returns the first pin found assigned twice
    pub fn validate(&self) -> Result<(), Pin> {
        let pins = [
            Some(self.chip_select),
            Some(self.clock),
            Some(self.data_in),
            self.power,
        ];

        for (i, a) in pins.iter().enumerate() {
            let Some(a) = a else { continue };
            if pins[i + 1..].contains(&Some(*a)) {
                return Err(Pin::new(*a, self.numbering));
            }
        }

        Ok(())
    }
}

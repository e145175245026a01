//! Bit-banged driver for the MAX6675 thermocouple converter

use crate::{
    config::Config,
    error::Error,
    frame::{FRAME_BITS, Frame, Status},
    gpio::{Direction, Gpio, Pin, PinState},
    unit::Unit,
};

/// MAX6675 driver instance
///
/// Owns its GPIO collaborator until [`Max6675::cleanup`] hands it back.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Max6675<G> {
    gpio: G,
    chip_select: Pin,
    clock: Pin,
    data_in: Pin,
    power: Option<Pin>,
    unit: Unit,
    frame: Option<Frame>,
    status: Status,
}

impl<G, E> Max6675<G>
where
    G: Gpio<Error = E>,
{
    /// Claim and configure the pins described by `config`
    ///
    /// The power pin, if any, is driven high first. Chip-select and clock
    /// become outputs, data-in an input, and chip-select is left high so
    /// the bus starts deselected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinConflict`] before touching any pin if two lines
    /// share a pin, or [`Error::Gpio`] if the collaborator fails. A power
    /// pin already driven high is driven low again when claiming the bus
    /// fails; pins configured up to that point keep their direction.
    pub fn new(mut gpio: G, config: Config) -> Result<Self, Error<E>> {
        config.validate().map_err(Error::PinConflict)?;

        gpio.select_numbering(config.pin_numbering())
            .map_err(Error::Gpio)?;

        let power = config.power_pin();
        if let Some(pin) = power {
            gpio.configure(pin, Direction::Output).map_err(Error::Gpio)?;
            gpio.write(pin, PinState::High).map_err(Error::Gpio)?;
        }

        let chip_select = config.chip_select_pin();
        let clock = config.clock_pin();
        let data_in = config.data_in_pin();

        if let Err(e) = Self::claim_bus(&mut gpio, chip_select, clock, data_in) {
            if let Some(pin) = power {
                // Best effort; the claim error is the one reported.
                let _ = gpio.write(pin, PinState::Low);
            }
            return Err(Error::Gpio(e));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("MAX6675 initialized: {}", config);

        Ok(Self {
            gpio,
            chip_select,
            clock,
            data_in,
            power,
            unit: config.output_unit(),
            frame: None,
            status: Status::Ok,
        })
    }

    fn claim_bus(gpio: &mut G, chip_select: Pin, clock: Pin, data_in: Pin) -> Result<(), E> {
        gpio.configure(chip_select, Direction::Output)?;
        gpio.configure(clock, Direction::Output)?;
        gpio.configure(data_in, Direction::Input)?;
        gpio.write(chip_select, PinState::High)
    }

    /// Release the pins, consuming the driver
    ///
    /// Chip-select and clock are switched back to inputs. Data-in is
    /// already an input and the power pin is left driven.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator fails to reconfigure a pin
    pub fn cleanup(mut self) -> Result<G, Error<E>> {
        self.gpio
            .configure(self.chip_select, Direction::Input)
            .map_err(Error::Gpio)?;
        self.gpio
            .configure(self.clock, Direction::Input)
            .map_err(Error::Gpio)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("MAX6675 pins released");

        Ok(self.gpio)
    }

    /// Clock one 16-bit frame out of the chip
    ///
    /// Selecting the chip latches the current conversion. Each bit is
    /// sampled while the clock is low, then the clock is raised to shift
    /// the next one out. The frame is stored as [`Max6675::last_frame`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator fails; the stored frame is
    /// left untouched and chip-select is still driven high
    pub fn read(&mut self) -> Result<Frame, Error<E>> {
        self.gpio
            .write(self.chip_select, PinState::Low)
            .map_err(Error::Gpio)?;

        // Deselect even if shifting failed, so a shared bus is released.
        let shifted = self.shift_in();
        let deselected = self.gpio.write(self.chip_select, PinState::High);
        let word = shifted?;
        deselected.map_err(Error::Gpio)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Received frame: 0x{:04X}", word);

        let frame = Frame::new(word);
        self.frame = Some(frame);
        Ok(frame)
    }

    fn shift_in(&mut self) -> Result<u16, Error<E>> {
        let mut word: u16 = 0;
        for _ in 0..FRAME_BITS {
            self.gpio
                .write(self.clock, PinState::Low)
                .map_err(Error::Gpio)?;
            word <<= 1;
            if self.gpio.read(self.data_in).map_err(Error::Gpio)? == PinState::High {
                word |= 1;
            }
            self.gpio
                .write(self.clock, PinState::High)
                .map_err(Error::Gpio)?;
        }
        Ok(word)
    }

    /// Evaluate the fault bit of `frame` and record the result
    pub fn check_errors(&mut self, frame: Frame) -> Status {
        self.status = frame.status();

        #[cfg(feature = "defmt")]
        if self.status.is_fault() {
            defmt::warn!("Thermocouple input open in frame 0x{:04X}", frame.raw());
        }

        self.status
    }

    /// [`Max6675::check_errors`] on the last frame read
    ///
    /// Returns `None` if nothing has been read yet
    pub fn check_last_errors(&mut self) -> Option<Status> {
        let frame = self.frame?;
        Some(self.check_errors(frame))
    }

    /// Read the thermocouple temperature in the configured unit
    ///
    /// # Errors
    ///
    /// Returns [`Error::OpenCircuit`] if the chip flags an open
    /// thermocouple, or [`Error::Gpio`] if the collaborator fails
    pub fn get(&mut self) -> Result<f32, Error<E>> {
        let frame = self.read()?;

        if self.check_errors(frame).is_fault() {
            return Err(Error::OpenCircuit);
        }

        Ok(self.unit.convert(frame.celsius()))
    }

    /// Last frame read, if any
    #[must_use]
    pub fn last_frame(&self) -> Option<Frame> {
        self.frame
    }

    /// Decoded Celsius temperature of the last frame, without a fault check
    #[must_use]
    pub fn last_celsius(&self) -> Option<f32> {
        self.frame.map(|frame| frame.celsius())
    }

    /// Fault state recorded by the last [`Max6675::check_errors`]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn power_pin(&self) -> Option<Pin> {
        self.power
    }
}

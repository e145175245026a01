//! Raspberry Pi GPIO collaborator backed by `rppal`

use core::fmt;

use rppal::gpio::{IoPin, Level, Mode};

use crate::gpio::{BCM_MAX, Direction, Gpio, Numbering, Pin, PinState};

/// Errors from [`RppalGpio`]
#[derive(Debug)]
pub enum RpiError {
    /// `rppal` failed to claim or access a line
    Gpio(rppal::gpio::Error),
    /// The pin does not resolve to a GPIO line on the 40-pin header
    UnknownPin(Pin),
    /// The pin was written or read before it was configured
    Unclaimed(Pin),
}

impl fmt::Display for RpiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpiError::Gpio(e) => write!(f, "rppal: {e}"),
            RpiError::UnknownPin(pin) => {
                write!(f, "{:?} pin {} is not a GPIO line", pin.numbering(), pin.number())
            }
            RpiError::Unclaimed(pin) => {
                write!(f, "pin {} used before it was configured", pin.number())
            }
        }
    }
}

impl std::error::Error for RpiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpiError::Gpio(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rppal::gpio::Error> for RpiError {
    fn from(err: rppal::gpio::Error) -> Self {
        RpiError::Gpio(err)
    }
}

const LINES: usize = BCM_MAX as usize + 1;

/// GPIO collaborator for the Raspberry Pi header
///
/// Lines are claimed on their first [`Gpio::configure`] and kept for the
/// life of this value. Dropping it restores every claimed line to the mode
/// it had before.
pub struct RppalGpio {
    gpio: rppal::gpio::Gpio,
    lines: [Option<IoPin>; LINES],
    numbering: Numbering,
}

impl RppalGpio {
    /// # Errors
    ///
    /// Returns an error if the GPIO peripheral cannot be opened
    pub fn new() -> Result<Self, RpiError> {
        Ok(Self {
            gpio: rppal::gpio::Gpio::new()?,
            lines: core::array::from_fn(|_| None),
            numbering: Numbering::Bcm,
        })
    }

    /// Scheme last announced through [`Gpio::select_numbering`]
    #[must_use]
    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    fn line(&mut self, pin: Pin) -> Result<&mut IoPin, RpiError> {
        let bcm = pin.to_bcm().ok_or(RpiError::UnknownPin(pin))?;
        self.lines[usize::from(bcm)]
            .as_mut()
            .ok_or(RpiError::Unclaimed(pin))
    }
}

impl fmt::Debug for RppalGpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let claimed = self.lines.iter().filter(|line| line.is_some()).count();
        f.debug_struct("RppalGpio")
            .field("claimed", &claimed)
            .field("numbering", &self.numbering)
            .finish()
    }
}

impl Gpio for RppalGpio {
    type Error = RpiError;

    fn select_numbering(&mut self, numbering: Numbering) -> Result<(), Self::Error> {
        self.numbering = numbering;
        Ok(())
    }

    fn configure(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error> {
        let bcm = pin.to_bcm().ok_or(RpiError::UnknownPin(pin))?;
        let mode = match direction {
            Direction::Input => Mode::Input,
            Direction::Output => Mode::Output,
        };

        let index = usize::from(bcm);
        match self.lines[index].as_mut() {
            Some(line) => line.set_mode(mode),
            None => self.lines[index] = Some(self.gpio.get(bcm)?.into_io(mode)),
        }

        Ok(())
    }

    fn write(&mut self, pin: Pin, level: PinState) -> Result<(), Self::Error> {
        let level = match level {
            PinState::High => Level::High,
            PinState::Low => Level::Low,
        };
        self.line(pin)?.write(level);
        Ok(())
    }

    fn read(&mut self, pin: Pin) -> Result<PinState, Self::Error> {
        Ok(match self.line(pin)?.read() {
            Level::High => PinState::High,
            Level::Low => PinState::Low,
        })
    }
}

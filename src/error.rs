use core::fmt;

use crate::gpio::Pin;

/// Error type for MAX6675 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The GPIO collaborator failed to configure, drive or sample a pin
    Gpio(E),
    /// Thermocouple input is open (bit D2 of the frame was set)
    OpenCircuit,
    /// The same pin was assigned to more than one line
    PinConflict(Pin),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gpio(e) => write!(f, "GPIO error: {e:?}"),
            Error::OpenCircuit => f.write_str(
                "the MAX6675 detected an open circuit (bit D2 was high), check the thermocouple connection",
            ),
            Error::PinConflict(pin) => {
                write!(f, "pin {} is assigned to more than one line", pin.number())
            }
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Gpio(e) => Some(e),
            _ => None,
        }
    }
}

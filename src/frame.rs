//! The 16-bit MAX6675 output word

/// Temperature resolution in °C per count
pub const RESOLUTION: f32 = 0.25;

/// Bit D2: thermocouple input open
pub(crate) const OPEN_CIRCUIT_MASK: u16 = 0x0004;

/// Number of clock cycles in one conversion readout
pub const FRAME_BITS: u32 = 16;

bitfield::bitfield! {
    /// Raw conversion word, most significant bit clocked out first
    ///
    /// | bits  | meaning                         |
    /// |-------|---------------------------------|
    /// | 15..3 | temperature count, 0.25 °C/LSB  |
    /// | 2     | thermocouple input open         |
    /// | 1     | device ID, reads low            |
    /// | 0     | three-state                     |
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Frame(u16);
    impl Debug;
    u16;
    /// Temperature count
    ///
    /// The whole word above D2 is taken, which matches shifting the frame
    /// right by three. Bit 15 is a dummy sign bit that always reads low.
    pub count, _: 15, 3;
    /// Thermocouple input is open
    pub open_circuit, _: 2;
    /// Device ID
    pub device_id, _: 1;
    /// Three-state output bit
    pub tristate, _: 0;
}

impl Frame {
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The verbatim 16-bit word
    #[must_use]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Fault state carried by this frame
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.0 & OPEN_CIRCUIT_MASK != 0 {
            Status::OpenCircuit
        } else {
            Status::Ok
        }
    }

    /// Decoded thermocouple temperature in °C
    ///
    /// Defined for every frame, but meaningless when [`Frame::status`] is
    /// not [`Status::Ok`].
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.count()) * RESOLUTION
    }
}

impl From<u16> for Frame {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl From<Frame> for u16 {
    fn from(frame: Frame) -> u16 {
        frame.0
    }
}

/// Fault state reported by the MAX6675
///
/// Open thermocouple is the only condition this chip can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    #[default]
    Ok,
    /// Thermocouple input is open or disconnected
    OpenCircuit,
}

impl Status {
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Status::OpenCircuit)
    }
}

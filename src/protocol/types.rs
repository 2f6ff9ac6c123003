//! Hyperion frame types and header flags

use std::fmt;

use super::registry::{FrameSpec, REGISTRY};

/// Frame type discriminants carried in the high nibble of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FrameType {
    /// Reserved, never transmitted
    Null = 0,
    /// 9-axis IMU: accelerometer, gyroscope, magnetometer (LSM9DS1)
    Motion = 1,
    /// Temperature, pressure, humidity, altitude (BME280)
    Environmental = 2,
    /// CO2 and TVOC (CCS811)
    AirQuality = 3,
    /// High-g accelerometer (LIS331)
    SecondaryAccel = 4,
    /// Altitude-only reading (PFSL)
    Altitude = 5,
    /// Pitch, roll, yaw
    Orientation = 6,
    /// Header-only command / phase-status marker
    Command = 7,
    /// Free-text informational message
    Info = 8,
}

impl FrameType {
    /// Every assigned frame type, in discriminant order
    pub const ALL: [Self; 9] = [
        Self::Null,
        Self::Motion,
        Self::Environmental,
        Self::AirQuality,
        Self::SecondaryAccel,
        Self::Altitude,
        Self::Orientation,
        Self::Command,
        Self::Info,
    ];

    /// Convert from a raw 4-bit discriminant
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Null),
            1 => Some(Self::Motion),
            2 => Some(Self::Environmental),
            3 => Some(Self::AirQuality),
            4 => Some(Self::SecondaryAccel),
            5 => Some(Self::Altitude),
            6 => Some(Self::Orientation),
            7 => Some(Self::Command),
            8 => Some(Self::Info),
            _ => None,
        }
    }

    /// Convert to the raw discriminant
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Registry entry describing this frame's payload
    #[must_use]
    pub fn spec(self) -> &'static FrameSpec {
        &REGISTRY[self as usize]
    }

    /// Payload size in bytes, excluding the header
    #[must_use]
    pub fn payload_size(self) -> usize {
        self.spec().payload_size()
    }

    /// Total wire size: header plus payload
    #[must_use]
    pub fn wire_size(self) -> usize {
        self.spec().wire_size()
    }

    /// Name of the on-board sensor that produces this frame
    #[must_use]
    pub fn sensor(self) -> &'static str {
        self.spec().sensor
    }

    /// Check if this frame carries no payload
    #[must_use]
    pub const fn is_header_only(self) -> bool {
        matches!(self, Self::Null | Self::Command)
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "NULL",
            Self::Motion => "MOTION",
            Self::Environmental => "ENVIRONMENTAL",
            Self::AirQuality => "AIR_QUALITY",
            Self::SecondaryAccel => "SECONDARY_ACCEL",
            Self::Altitude => "ALTITUDE",
            Self::Orientation => "ORIENTATION",
            Self::Command => "COMMAND",
            Self::Info => "INFO",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u8> for FrameType {
    type Error = super::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(super::Error::UnknownFrameType { type_bits: value })
    }
}

/// Header flags: a 4-bit mask stored in the low nibble of byte 0
///
/// On command frames the nibble carries the command or phase code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Flags(u8);

impl Flags {
    /// Valid flag bits mask
    pub const MASK: u8 = 0x0F;
    /// Number of flag bits
    pub const BITS: usize = 4;

    /// Create empty flags
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create from byte, keeping only the low nibble
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Create from individual bits, index 0 being the least significant
    #[must_use]
    pub const fn from_bits(bits: [bool; 4]) -> Self {
        let mut value = 0;
        let mut i = 0;
        while i < Self::BITS {
            if bits[i] {
                value |= 1 << i;
            }
            i += 1;
        }
        Self(value)
    }

    /// Convert to byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Split into individual bits, index 0 being the least significant
    #[must_use]
    pub const fn to_bits(self) -> [bool; 4] {
        [self.bit(0), self.bit(1), self.bit(2), self.bit(3)]
    }

    /// Check if bit `index` is set; indices past 3 are never set
    #[must_use]
    pub const fn bit(self, index: usize) -> bool {
        index < Self::BITS && (self.0 >> index) & 1 == 1
    }

    /// Set bit `index`
    #[must_use]
    pub const fn with_bit(mut self, index: usize) -> Self {
        debug_assert!(index < Self::BITS, "flag bit out of range");
        self.0 |= (1 << index) & Self::MASK;
        self
    }
}

impl From<u8> for Flags {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.as_u8()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_type_roundtrip() {
        for frame_type in FrameType::ALL {
            let byte = frame_type.as_u8();
            assert_eq!(FrameType::from_u8(byte), Some(frame_type));
        }
    }

    #[test]
    fn test_unassigned_types_rejected() {
        for value in 9..=15 {
            assert_eq!(FrameType::from_u8(value), None);
            assert!(matches!(
                FrameType::try_from(value),
                Err(super::super::Error::UnknownFrameType { type_bits }) if type_bits == value
            ));
        }
    }

    #[test]
    fn test_flags_mask_high_nibble() {
        assert_eq!(Flags::from_u8(0xF5).as_u8(), 0x05);
        assert_eq!(Flags::from(0x10).as_u8(), 0);
    }

    #[test]
    fn test_flags_bits() {
        let flags = Flags::new().with_bit(0).with_bit(2);

        assert_eq!(flags.as_u8(), 0b0101);
        assert_eq!(flags.to_bits(), [true, false, true, false]);
        assert_eq!(Flags::from_bits([true, false, true, false]), flags);
        assert!(!flags.bit(7));
        assert_eq!(flags.to_string(), "0b0101");
    }

    #[test]
    fn test_sensor_names() {
        assert_eq!(FrameType::Motion.sensor(), "lsm9ds1");
        assert_eq!(FrameType::SecondaryAccel.sensor(), "lis331");
        assert_eq!(FrameType::Info.sensor(), "info");
    }
}

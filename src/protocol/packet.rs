//! Decoded packets: a header plus the payload for its frame type

use std::fmt;

use bytes::Bytes;

use super::frames::{
    AirQuality, Altitude, Command, Environmental, Frame, Motion, Null, Orientation,
    SecondaryAccel, pack,
};
use super::{FrameType, Header, InfoMessage};

/// A packet of any frame type
///
/// Packets own their data and never borrow the buffer they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Packet {
    /// Reserved null frame
    Null(Header),
    /// 9-axis IMU frame
    Motion(Header, Motion),
    /// Environmental frame
    Environmental(Header, Environmental),
    /// Air quality frame
    AirQuality(Header, AirQuality),
    /// Secondary accelerometer frame
    SecondaryAccel(Header, SecondaryAccel),
    /// Altitude frame
    Altitude(Header, Altitude),
    /// Orientation frame
    Orientation(Header, Orientation),
    /// Command / phase-status marker
    Command(Header),
    /// Info message
    Info(Header, InfoMessage),
}

/// A named numeric field of a decoded packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading {
    /// Field name from the frame registry
    pub name: &'static str,
    /// Field value
    pub value: i32,
}

impl Packet {
    /// Get header
    #[must_use]
    pub const fn header(&self) -> &Header {
        match self {
            Self::Null(header)
            | Self::Command(header)
            | Self::Motion(header, _)
            | Self::Environmental(header, _)
            | Self::AirQuality(header, _)
            | Self::SecondaryAccel(header, _)
            | Self::Altitude(header, _)
            | Self::Orientation(header, _)
            | Self::Info(header, _) => header,
        }
    }

    /// Get frame type
    #[must_use]
    pub const fn frame_type(&self) -> FrameType {
        match self {
            Self::Null(_) => FrameType::Null,
            Self::Motion(..) => FrameType::Motion,
            Self::Environmental(..) => FrameType::Environmental,
            Self::AirQuality(..) => FrameType::AirQuality,
            Self::SecondaryAccel(..) => FrameType::SecondaryAccel,
            Self::Altitude(..) => FrameType::Altitude,
            Self::Orientation(..) => FrameType::Orientation,
            Self::Command(_) => FrameType::Command,
            Self::Info(..) => FrameType::Info,
        }
    }

    /// Numeric fields paired with their registry names
    ///
    /// Header-only and info packets have no numeric fields.
    #[must_use]
    pub fn readings(&self) -> Vec<Reading> {
        let values = match self {
            Self::Motion(_, data) => data.values(),
            Self::Environmental(_, data) => data.values(),
            Self::AirQuality(_, data) => data.values(),
            Self::SecondaryAccel(_, data) => data.values(),
            Self::Altitude(_, data) => data.values(),
            Self::Orientation(_, data) => data.values(),
            Self::Null(_) | Self::Command(_) | Self::Info(..) => Vec::new(),
        };

        self.frame_type()
            .spec()
            .fields
            .iter()
            .zip(values)
            .map(|(field, value)| Reading {
                name: field.name,
                value,
            })
            .collect()
    }

    /// Encode to bytes
    ///
    /// The header flags and time are kept; the type nibble is always the
    /// one matching the variant.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        fn repack<F: Frame>(header: &Header, frame: &F) -> Bytes {
            pack(header.flags(), header.time(), frame)
        }

        match self {
            Self::Null(header) => repack(header, &Null),
            Self::Motion(header, data) => repack(header, data),
            Self::Environmental(header, data) => repack(header, data),
            Self::AirQuality(header, data) => repack(header, data),
            Self::SecondaryAccel(header, data) => repack(header, data),
            Self::Altitude(header, data) => repack(header, data),
            Self::Orientation(header, data) => repack(header, data),
            Self::Command(header) => repack(header, &Command),
            Self::Info(header, message) => repack(header, message),
        }
    }

    /// Decode from bytes
    pub fn decode(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        write!(
            f,
            "{} t={} flags={}",
            self.frame_type(),
            header.time(),
            header.flags()
        )?;

        if let Self::Info(_, message) = self {
            write!(f, " text={message:?}")?;
        }
        for reading in self.readings() {
            write!(f, " {}={}", reading.name, reading.value)?;
        }
        Ok(())
    }
}

//! Frame registry: payload layout of every frame type
//!
//! Payload sizes are derived from the field layouts, so a frame's size and
//! its fields cannot disagree.

use super::{FrameType, HEADER_SIZE, INFO_PAYLOAD_SIZE};

/// Encoded width of a single payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// Fixed-capacity NUL-padded text buffer
    Text(usize),
}

impl FieldWidth {
    /// Width in bytes
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::I16 => 2,
            Self::I32 => 4,
            Self::Text(len) => len,
        }
    }
}

/// A named payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as used in ground-station records
    pub name: &'static str,
    /// Encoded width
    pub width: FieldWidth,
}

impl FieldSpec {
    const fn i16(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::I16,
        }
    }

    const fn i32(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::I32,
        }
    }
}

/// Registry entry for one frame type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpec {
    /// Frame type this entry describes
    pub frame_type: FrameType,
    /// On-board sensor producing the frame
    pub sensor: &'static str,
    /// Payload fields in wire order
    pub fields: &'static [FieldSpec],
}

impl FrameSpec {
    /// Payload size in bytes: the sum of the field widths
    #[must_use]
    pub const fn payload_size(&self) -> usize {
        let mut size = 0;
        let mut i = 0;
        while i < self.fields.len() {
            size += self.fields[i].width.bytes();
            i += 1;
        }
        size
    }

    /// Total wire size including the header
    #[must_use]
    pub const fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload_size()
    }
}

const MOTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::i32("accel_x"),
    FieldSpec::i32("accel_y"),
    FieldSpec::i32("accel_z"),
    FieldSpec::i32("gyro_x"),
    FieldSpec::i32("gyro_y"),
    FieldSpec::i32("gyro_z"),
    FieldSpec::i32("mag_x"),
    FieldSpec::i32("mag_y"),
    FieldSpec::i32("mag_z"),
];

const ENVIRONMENTAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::i32("temperature"),
    FieldSpec::i32("pressure"),
    FieldSpec::i32("humidity"),
    FieldSpec::i32("altitude"),
];

const AIR_QUALITY_FIELDS: &[FieldSpec] = &[FieldSpec::i16("co2"), FieldSpec::i16("tvoc")];

const SECONDARY_ACCEL_FIELDS: &[FieldSpec] = &[
    FieldSpec::i32("accel_x"),
    FieldSpec::i32("accel_y"),
    FieldSpec::i32("accel_z"),
];

const ALTITUDE_FIELDS: &[FieldSpec] = &[FieldSpec::i32("altitude")];

// Older payload firmware declared a 4-byte orientation frame; the three
// 16-bit angles below are what both ends actually exchange.
const ORIENTATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::i16("pitch"),
    FieldSpec::i16("roll"),
    FieldSpec::i16("yaw"),
];

const INFO_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "text",
    width: FieldWidth::Text(INFO_PAYLOAD_SIZE),
}];

/// Registry of every assigned frame type, indexed by discriminant
pub static REGISTRY: [FrameSpec; 9] = [
    FrameSpec {
        frame_type: FrameType::Null,
        sensor: "null",
        fields: &[],
    },
    FrameSpec {
        frame_type: FrameType::Motion,
        sensor: "lsm9ds1",
        fields: MOTION_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::Environmental,
        sensor: "bme280",
        fields: ENVIRONMENTAL_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::AirQuality,
        sensor: "ccs811",
        fields: AIR_QUALITY_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::SecondaryAccel,
        sensor: "lis331",
        fields: SECONDARY_ACCEL_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::Altitude,
        sensor: "pfsl",
        fields: ALTITUDE_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::Orientation,
        sensor: "oren",
        fields: ORIENTATION_FIELDS,
    },
    FrameSpec {
        frame_type: FrameType::Command,
        sensor: "cmmnd",
        fields: &[],
    },
    FrameSpec {
        frame_type: FrameType::Info,
        sensor: "info",
        fields: INFO_FIELDS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_indexed_by_discriminant() {
        for (index, spec) in REGISTRY.iter().enumerate() {
            assert_eq!(spec.frame_type.as_u8() as usize, index);
        }
    }

    #[test]
    fn test_payload_sizes() {
        let expected = [
            (FrameType::Null, 0),
            (FrameType::Motion, 36),
            (FrameType::Environmental, 16),
            (FrameType::AirQuality, 4),
            (FrameType::SecondaryAccel, 12),
            (FrameType::Altitude, 4),
            (FrameType::Orientation, 6),
            (FrameType::Command, 0),
            (FrameType::Info, 300),
        ];

        for (frame_type, size) in expected {
            assert_eq!(frame_type.payload_size(), size, "{frame_type}");
            assert_eq!(frame_type.wire_size(), HEADER_SIZE + size, "{frame_type}");
        }
    }

    #[test]
    fn test_header_only_frames_have_no_fields() {
        for frame_type in FrameType::ALL {
            assert_eq!(
                frame_type.is_header_only(),
                frame_type.spec().fields.is_empty(),
                "{frame_type}"
            );
        }
    }
}

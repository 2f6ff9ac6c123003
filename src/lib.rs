//! Hyperion telemetry protocol - compact frames between payload and ground station
//!
//! Every packet is a 3-byte header followed by a fixed-size payload whose
//! layout is chosen by the header's 4-bit frame type. There is no framing,
//! checksum, or version negotiation: each call works on one already-delimited
//! buffer handed over by the radio or serial transport.
//!
//! # Quick Start
//!
//! ```rust
//! use hyperion::{Environmental, FrameType, Packet, decode, pack_environmental};
//!
//! // Payload side: pack a reading
//! let reading = Environmental { temperature: 2500, pressure: 101_325, humidity: 45, altitude: 150 };
//! let bytes = pack_environmental(0b0101, 120, &reading);
//! assert_eq!(bytes.len(), FrameType::Environmental.wire_size());
//!
//! // Ground station side: decode whatever arrives
//! let packet = decode(&bytes)?;
//! assert!(matches!(packet, Packet::Environmental(_, data) if data == reading));
//! # Ok::<(), hyperion::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! [0]       type (high nibble) | flags (low nibble)
//! [1..3]    time, seconds mod 65536 (u16, big-endian)
//! [3..]     payload, FrameType::payload_size() bytes, fields big-endian
//! ```
//!
//! | Type | Frame            | Payload |
//! |------|------------------|---------|
//! | 0    | NULL             | 0       |
//! | 1    | MOTION           | 36      |
//! | 2    | ENVIRONMENTAL    | 16      |
//! | 3    | AIR_QUALITY      | 4       |
//! | 4    | SECONDARY_ACCEL  | 12      |
//! | 5    | ALTITUDE         | 4       |
//! | 6    | ORIENTATION      | 6       |
//! | 7    | COMMAND          | 0       |
//! | 8    | INFO             | 300     |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    AirQuality, Altitude, Axes, Command, DecodeConfig, Decoder, Environmental, Error, Flags,
    Frame, FrameType, HEADER_SIZE, Header, INFO_PAYLOAD_SIZE, INFO_TEXT_CAPACITY, InfoMessage,
    MAX_PACKET_SIZE, Motion, Orientation, Packet, PackedInfo, Reading, Result, SecondaryAccel,
    TrailingBytes, decode, decode_header, encode, encode_header, pack_air_quality, pack_altitude,
    pack_command, pack_environmental, pack_info, pack_motion, pack_orientation,
    pack_secondary_accel, type_of, unpack_air_quality, unpack_altitude, unpack_command,
    unpack_environmental, unpack_info, unpack_motion, unpack_orientation, unpack_secondary_accel,
};

/// Hyperion protocol version
pub const VERSION: &str = "1.0.0";

//! Hyperion protocol core implementation
//!
//! This module provides the wire format, the frame registry, the per-kind
//! frame codecs, and the dispatcher that routes raw buffers to them.
//!
//! # Byte order
//!
//! Every multi-byte value on the wire (the header timestamp and all payload
//! fields) is big-endian. Payload and ground station must agree on this.

mod codec;
mod error;
mod frames;
mod header;
mod info;
mod packet;
mod registry;
mod types;
mod wire;

pub use codec::{DecodeConfig, Decoder, TrailingBytes, decode, encode};
pub use error::{Error, Result};
pub use frames::{
    AirQuality, Altitude, Axes, Command, Environmental, Frame, Motion, Null, Orientation,
    SecondaryAccel, pack, pack_air_quality, pack_altitude, pack_command, pack_environmental,
    pack_motion, pack_orientation, pack_secondary_accel, unpack, unpack_air_quality,
    unpack_altitude, unpack_command, unpack_environmental, unpack_motion, unpack_orientation,
    unpack_secondary_accel,
};
pub use header::{Header, decode_header, encode_header, truncate_time, type_of};
pub use info::{InfoMessage, PackedInfo, pack_info, unpack_info};
pub use packet::{Packet, Reading};
pub use registry::{FieldSpec, FieldWidth, FrameSpec, REGISTRY};
pub use types::{Flags, FrameType};

/// Header size in bytes
pub const HEADER_SIZE: usize = 3;

/// Fixed payload size of an info frame in bytes
pub const INFO_PAYLOAD_SIZE: usize = 300;

/// Longest info message that still leaves room for the NUL terminator
pub const INFO_TEXT_CAPACITY: usize = INFO_PAYLOAD_SIZE - 1;

/// Largest packet on the wire (an info frame)
pub const MAX_PACKET_SIZE: usize = HEADER_SIZE + INFO_PAYLOAD_SIZE;

//! Fixed-size sensor frames and their codecs
//!
//! Every frame implements [`Frame`], which ties the data struct to its
//! registry entry. The `pack_*` / `unpack_*` functions are thin named
//! wrappers around [`pack`] and [`unpack`].

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::wire::{frame_buffer, split_frame};
use super::{Flags, FrameType, Header, Result};

/// A typed frame payload with a fixed wire layout
pub trait Frame: Sized {
    /// Discriminant written into the header
    const TYPE: FrameType;

    /// Append the payload fields in registry order
    fn encode_payload(&self, dst: &mut BytesMut);

    /// Read the payload back
    ///
    /// [`unpack`] checks the length before calling this; prefer it over
    /// calling `decode_payload` directly.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `payload` is shorter than
    /// `Self::TYPE.payload_size()` bytes.
    fn decode_payload(payload: &[u8]) -> Self;

    /// Numeric field values in registry order
    fn values(&self) -> Vec<i32> {
        Vec::new()
    }
}

/// Pack a frame behind its header
pub fn pack<F: Frame>(flags: impl Into<Flags>, time: u16, frame: &F) -> Bytes {
    let mut buf = frame_buffer(F::TYPE, flags.into(), time);
    frame.encode_payload(&mut buf);
    debug_assert_eq!(buf.len(), F::TYPE.wire_size(), "{} layout drifted", F::TYPE);
    buf.freeze()
}

/// Unpack a frame, requiring `buf` to be exactly one packet of type `F`
pub fn unpack<F: Frame>(buf: &[u8]) -> Result<(Header, F)> {
    let (header, payload) = split_frame(buf, F::TYPE)?;
    Ok((header, F::decode_payload(payload)))
}

/// Three-axis reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes {
    /// X axis
    pub x: i32,
    /// Y axis
    pub y: i32,
    /// Z axis
    pub z: i32,
}

impl Axes {
    /// Create a new reading
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    fn put(&self, dst: &mut BytesMut) {
        dst.put_i32(self.x);
        dst.put_i32(self.y);
        dst.put_i32(self.z);
    }

    fn get(src: &mut &[u8]) -> Self {
        Self {
            x: src.get_i32(),
            y: src.get_i32(),
            z: src.get_i32(),
        }
    }

    fn values(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

/// 9-axis IMU frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    /// Acceleration
    pub accel: Axes,
    /// Angular rate
    pub gyro: Axes,
    /// Magnetic field
    pub mag: Axes,
}

impl Frame for Motion {
    const TYPE: FrameType = FrameType::Motion;

    fn encode_payload(&self, dst: &mut BytesMut) {
        self.accel.put(dst);
        self.gyro.put(dst);
        self.mag.put(dst);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            accel: Axes::get(&mut payload),
            gyro: Axes::get(&mut payload),
            mag: Axes::get(&mut payload),
        }
    }

    fn values(&self) -> Vec<i32> {
        [self.accel.values(), self.gyro.values(), self.mag.values()].concat()
    }
}

/// Environmental frame
///
/// Note the wire order: temperature, pressure, humidity, altitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environmental {
    /// Temperature
    pub temperature: i32,
    /// Pressure
    pub pressure: i32,
    /// Relative humidity
    pub humidity: i32,
    /// Altitude
    pub altitude: i32,
}

impl Frame for Environmental {
    const TYPE: FrameType = FrameType::Environmental;

    fn encode_payload(&self, dst: &mut BytesMut) {
        dst.put_i32(self.temperature);
        dst.put_i32(self.pressure);
        dst.put_i32(self.humidity);
        dst.put_i32(self.altitude);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            temperature: payload.get_i32(),
            pressure: payload.get_i32(),
            humidity: payload.get_i32(),
            altitude: payload.get_i32(),
        }
    }

    fn values(&self) -> Vec<i32> {
        vec![self.temperature, self.pressure, self.humidity, self.altitude]
    }
}

/// Air quality frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirQuality {
    /// CO2 (ppm)
    pub co2: i16,
    /// Total volatile organic compounds (ppb)
    pub tvoc: i16,
}

impl Frame for AirQuality {
    const TYPE: FrameType = FrameType::AirQuality;

    fn encode_payload(&self, dst: &mut BytesMut) {
        dst.put_i16(self.co2);
        dst.put_i16(self.tvoc);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            co2: payload.get_i16(),
            tvoc: payload.get_i16(),
        }
    }

    fn values(&self) -> Vec<i32> {
        vec![i32::from(self.co2), i32::from(self.tvoc)]
    }
}

/// Secondary (high-g) accelerometer frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryAccel {
    /// Acceleration
    pub accel: Axes,
}

impl Frame for SecondaryAccel {
    const TYPE: FrameType = FrameType::SecondaryAccel;

    fn encode_payload(&self, dst: &mut BytesMut) {
        self.accel.put(dst);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            accel: Axes::get(&mut payload),
        }
    }

    fn values(&self) -> Vec<i32> {
        self.accel.values().to_vec()
    }
}

/// Altitude-only frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Altitude {
    /// Altitude
    pub altitude: i32,
}

impl Frame for Altitude {
    const TYPE: FrameType = FrameType::Altitude;

    fn encode_payload(&self, dst: &mut BytesMut) {
        dst.put_i32(self.altitude);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            altitude: payload.get_i32(),
        }
    }

    fn values(&self) -> Vec<i32> {
        vec![self.altitude]
    }
}

/// Orientation frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    /// Pitch
    pub pitch: i16,
    /// Roll
    pub roll: i16,
    /// Yaw
    pub yaw: i16,
}

impl Frame for Orientation {
    const TYPE: FrameType = FrameType::Orientation;

    fn encode_payload(&self, dst: &mut BytesMut) {
        dst.put_i16(self.pitch);
        dst.put_i16(self.roll);
        dst.put_i16(self.yaw);
    }

    fn decode_payload(mut payload: &[u8]) -> Self {
        Self {
            pitch: payload.get_i16(),
            roll: payload.get_i16(),
            yaw: payload.get_i16(),
        }
    }

    fn values(&self) -> Vec<i32> {
        vec![
            i32::from(self.pitch),
            i32::from(self.roll),
            i32::from(self.yaw),
        ]
    }
}

/// Command / phase-status marker; the header flags carry the code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command;

impl Frame for Command {
    const TYPE: FrameType = FrameType::Command;

    fn encode_payload(&self, _dst: &mut BytesMut) {}

    fn decode_payload(_payload: &[u8]) -> Self {
        Self
    }
}

/// Reserved null frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Null;

impl Frame for Null {
    const TYPE: FrameType = FrameType::Null;

    fn encode_payload(&self, _dst: &mut BytesMut) {}

    fn decode_payload(_payload: &[u8]) -> Self {
        Self
    }
}

/// Pack a motion frame
pub fn pack_motion(flags: impl Into<Flags>, time: u16, data: &Motion) -> Bytes {
    pack(flags, time, data)
}

/// Unpack a motion frame
pub fn unpack_motion(buf: &[u8]) -> Result<(Header, Motion)> {
    unpack(buf)
}

/// Pack an environmental frame
pub fn pack_environmental(flags: impl Into<Flags>, time: u16, data: &Environmental) -> Bytes {
    pack(flags, time, data)
}

/// Unpack an environmental frame
pub fn unpack_environmental(buf: &[u8]) -> Result<(Header, Environmental)> {
    unpack(buf)
}

/// Pack an air quality frame
pub fn pack_air_quality(flags: impl Into<Flags>, time: u16, data: &AirQuality) -> Bytes {
    pack(flags, time, data)
}

/// Unpack an air quality frame
pub fn unpack_air_quality(buf: &[u8]) -> Result<(Header, AirQuality)> {
    unpack(buf)
}

/// Pack a secondary accelerometer frame
pub fn pack_secondary_accel(flags: impl Into<Flags>, time: u16, data: &SecondaryAccel) -> Bytes {
    pack(flags, time, data)
}

/// Unpack a secondary accelerometer frame
pub fn unpack_secondary_accel(buf: &[u8]) -> Result<(Header, SecondaryAccel)> {
    unpack(buf)
}

/// Pack an altitude frame
pub fn pack_altitude(flags: impl Into<Flags>, time: u16, data: &Altitude) -> Bytes {
    pack(flags, time, data)
}

/// Unpack an altitude frame
pub fn unpack_altitude(buf: &[u8]) -> Result<(Header, Altitude)> {
    unpack(buf)
}

/// Pack an orientation frame
pub fn pack_orientation(flags: impl Into<Flags>, time: u16, data: &Orientation) -> Bytes {
    pack(flags, time, data)
}

/// Unpack an orientation frame
pub fn unpack_orientation(buf: &[u8]) -> Result<(Header, Orientation)> {
    unpack(buf)
}

/// Pack a header-only command frame
pub fn pack_command(flags: impl Into<Flags>, time: u16) -> Bytes {
    pack(flags, time, &Command)
}

/// Unpack a command frame
pub fn unpack_command(buf: &[u8]) -> Result<Header> {
    unpack::<Command>(buf).map(|(header, Command)| header)
}

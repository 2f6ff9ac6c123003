//! Hyperion packet dispatcher (encode/decode)
//!
//! [`decode`] is the single entry point for receive paths: it reads the type
//! nibble once and routes the buffer to the matching frame codec.

use bytes::Bytes;
use tracing::{debug, trace};

use super::frames::{Command, Frame, Null, unpack};
use super::{Error, FrameType, Header, Packet, Result, type_of};

/// How the decoder treats bytes past the end of a packet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBytes {
    /// The buffer must be exactly one packet long
    #[default]
    Reject,
    /// Decode the leading packet and ignore the rest (padded transport slots)
    Ignore,
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Handling of bytes after the packet
    pub trailing: TrailingBytes,
}

/// Packet decoder with explicit configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    /// Create a decoder
    #[must_use]
    pub const fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decode one packet
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The buffer is empty or shorter than the frame it announces
    /// - The type nibble is not in the registry
    /// - The buffer is longer than the frame and trailing bytes are rejected
    pub fn decode(&self, buf: &[u8]) -> Result<Packet> {
        let result = self.dispatch(buf);
        match &result {
            Ok(packet) => trace!(
                frame_type = %packet.frame_type(),
                time = packet.header().time(),
                "decoded packet"
            ),
            Err(err) => debug!(error = %err, len = buf.len(), "rejected packet"),
        }
        result
    }

    fn dispatch(&self, buf: &[u8]) -> Result<Packet> {
        let type_bits = type_of(buf)?;
        let frame_type = FrameType::try_from(type_bits)?;

        let needed = frame_type.wire_size();
        if buf.len() < needed {
            return Err(Error::TruncatedBuffer {
                needed,
                got: buf.len(),
            });
        }

        let buf = match self.config.trailing {
            TrailingBytes::Reject => buf,
            TrailingBytes::Ignore => &buf[..needed],
        };

        Ok(match frame_type {
            FrameType::Null => Packet::Null(header_of::<Null>(buf)?),
            FrameType::Motion => with_header(buf, Packet::Motion)?,
            FrameType::Environmental => with_header(buf, Packet::Environmental)?,
            FrameType::AirQuality => with_header(buf, Packet::AirQuality)?,
            FrameType::SecondaryAccel => with_header(buf, Packet::SecondaryAccel)?,
            FrameType::Altitude => with_header(buf, Packet::Altitude)?,
            FrameType::Orientation => with_header(buf, Packet::Orientation)?,
            FrameType::Command => Packet::Command(header_of::<Command>(buf)?),
            FrameType::Info => with_header(buf, Packet::Info)?,
        })
    }
}

fn with_header<F: Frame>(
    buf: &[u8],
    variant: impl FnOnce(Header, F) -> Packet,
) -> Result<Packet> {
    let (header, frame) = unpack::<F>(buf)?;
    Ok(variant(header, frame))
}

fn header_of<F: Frame>(buf: &[u8]) -> Result<Header> {
    unpack::<F>(buf).map(|(header, _)| header)
}

/// Encode a packet to bytes
#[must_use]
pub fn encode(packet: &Packet) -> Bytes {
    packet.encode()
}

/// Decode a packet with the default (strict) configuration
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(buf: &[u8]) -> Result<Packet> {
    Decoder::default().decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Altitude, Environmental, pack_altitude, pack_environmental, pack_info};

    #[test]
    fn test_decode_command_marker() {
        let packet = decode(&[0x70, 0x00, 0x3C]).unwrap();

        assert_eq!(packet.frame_type(), FrameType::Command);
        assert_eq!(packet.header().flags().as_u8(), 0);
        assert_eq!(packet.header().time(), 60);
        assert!(packet.readings().is_empty());
    }

    #[test]
    fn test_decode_environmental_scenario() {
        let data = Environmental {
            temperature: 2500,
            pressure: 101_325,
            humidity: 45,
            altitude: 150,
        };
        let packet = decode(&pack_environmental(0b0101, 120, &data)).unwrap();

        assert_eq!(
            packet,
            Packet::Environmental(Header::new(FrameType::Environmental, 0b0101, 120), data)
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        for type_bits in 9u8..=15 {
            let mut buf = vec![type_bits << 4, 0, 0];
            buf.extend_from_slice(&[0xAA; 40]);

            assert_eq!(
                decode(&buf),
                Err(Error::UnknownFrameType { type_bits })
            );
        }
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            decode(&[]),
            Err(Error::TruncatedBuffer { got: 0, .. })
        ));

        let packed = pack_altitude(0, 0, &Altitude { altitude: 5 });
        assert_eq!(
            decode(&packed[..5]),
            Err(Error::TruncatedBuffer { needed: 7, got: 5 })
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let mut buf = pack_altitude(1, 2, &Altitude { altitude: -3 }).to_vec();
        buf.extend_from_slice(&[0, 0]);

        assert!(matches!(
            decode(&buf),
            Err(Error::SizeMismatch { expected: 7, got: 9, .. })
        ));

        let decoder = Decoder::new(DecodeConfig {
            trailing: TrailingBytes::Ignore,
        });
        let packet = decoder.decode(&buf).unwrap();
        assert_eq!(
            packet,
            Packet::Altitude(
                Header::new(FrameType::Altitude, 1, 2),
                Altitude { altitude: -3 }
            )
        );
    }

    #[test]
    fn test_decode_info_and_null() {
        let packed = pack_info(0, 10, "armed").into_bytes();
        let packet = decode(&packed).unwrap();
        assert!(matches!(&packet, Packet::Info(_, message) if message.as_str() == "armed"));

        let packet = decode(&[0x03, 0x00, 0x01]).unwrap();
        assert_eq!(packet, Packet::Null(Header::new(FrameType::Null, 3, 1)));
    }
}

//! Hyperion packet header
//!
//! The header is 3 bytes and prefixes every packet.

use super::{Error, Flags, FrameType, HEADER_SIZE, Result};

/// Hyperion packet header (3 bytes on the wire)
///
/// # Wire Format
///
/// ```text
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Type |  Flags|       Time (u16, big-endian)  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The type nibble is kept raw so that unassigned discriminants can be
/// reported; [`Header::frame_type`] resolves it against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHeader"))]
pub struct Header {
    type_bits: u8,
    flags: Flags,
    time: u16,
}

impl Header {
    /// Create a new header
    #[must_use]
    pub fn new(frame_type: FrameType, flags: impl Into<Flags>, time: u16) -> Self {
        Self {
            type_bits: frame_type.as_u8(),
            flags: flags.into(),
            time,
        }
    }

    /// Get raw type nibble
    #[must_use]
    pub const fn type_bits(&self) -> u8 {
        self.type_bits
    }

    /// Get frame type, if the nibble is assigned
    #[must_use]
    pub const fn frame_type(&self) -> Option<FrameType> {
        FrameType::from_u8(self.type_bits)
    }

    /// Get flags
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Get timestamp in seconds (mod 65536)
    #[must_use]
    pub const fn time(&self) -> u16 {
        self.time
    }

    /// Convert to bytes
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        encode_header(self.type_bits, self.flags.as_u8(), self.time)
    }

    /// Parse from bytes
    ///
    /// Only the first 3 bytes are read; the type nibble is not validated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_header(bytes)
    }
}

/// Unchecked header fields as they arrive from a serde source
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHeader {
    type_bits: u8,
    flags: u8,
    time: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHeader> for Header {
    type Error = Error;

    fn try_from(raw: RawHeader) -> Result<Self> {
        if raw.type_bits > 0x0F {
            return Err(Error::UnknownFrameType {
                type_bits: raw.type_bits,
            });
        }
        Ok(Self {
            type_bits: raw.type_bits,
            flags: Flags::from_u8(raw.flags),
            time: raw.time,
        })
    }
}

/// Pack a header into its 3-byte wire form
///
/// `flags` is masked to its low nibble.
///
/// # Panics
///
/// Panics if `type_bits` does not fit in 4 bits. Frame types come from the
/// registry, so an out-of-range value is a caller bug.
#[must_use]
pub fn encode_header(type_bits: u8, flags: u8, time: u16) -> [u8; HEADER_SIZE] {
    assert!(
        type_bits <= 0x0F,
        "frame type {type_bits} does not fit in the 4-bit header nibble"
    );

    let time = time.to_be_bytes();
    [(type_bits << 4) | (flags & Flags::MASK), time[0], time[1]]
}

/// Unpack the 3-byte header at the start of `buf`
pub fn decode_header(buf: &[u8]) -> Result<Header> {
    let Some(&[byte0, time_hi, time_lo]) = buf.first_chunk::<HEADER_SIZE>() else {
        return Err(Error::TruncatedBuffer {
            needed: HEADER_SIZE,
            got: buf.len(),
        });
    };

    Ok(Header {
        type_bits: byte0 >> 4,
        flags: Flags::from_u8(byte0),
        time: u16::from_be_bytes([time_hi, time_lo]),
    })
}

/// Peek at the type nibble without decoding the rest of the header
pub fn type_of(buf: &[u8]) -> Result<u8> {
    buf.first()
        .map(|byte0| byte0 >> 4)
        .ok_or(Error::TruncatedBuffer { needed: 1, got: 0 })
}

/// Truncate a seconds counter to the 16-bit header timestamp
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn truncate_time(seconds: u64) -> u16 {
    seconds as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = Header::new(FrameType::Environmental, 0b0101, 120);
        let bytes = header.to_bytes();
        let decoded = Header::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, header);
        assert_eq!(decoded.frame_type(), Some(FrameType::Environmental));
        assert_eq!(decoded.flags().as_u8(), 0b0101);
        assert_eq!(decoded.time(), 120);
    }

    #[test]
    fn test_header_byte_layout() {
        assert_eq!(encode_header(7, 0, 60), [0x70, 0x00, 0x3C]);
        assert_eq!(encode_header(2, 0b0101, 0x1234), [0x25, 0x12, 0x34]);
    }

    #[test]
    fn test_flags_masked_silently() {
        assert_eq!(encode_header(1, 0xFF, 0)[0], 0x1F);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_oversized_type_panics() {
        let _ = encode_header(16, 0, 0);
    }

    #[test]
    fn test_truncated_header() {
        let result = decode_header(&[0x70, 0x00]);
        assert_eq!(
            result,
            Err(Error::TruncatedBuffer { needed: 3, got: 2 })
        );
        assert!(matches!(
            type_of(&[]),
            Err(Error::TruncatedBuffer { got: 0, .. })
        ));
    }

    #[test]
    fn test_unassigned_type_decodes_raw() {
        let header = decode_header(&[0xC3, 0x00, 0x01]).unwrap();
        assert_eq!(header.type_bits(), 12);
        assert_eq!(header.frame_type(), None);
        assert_eq!(header.flags().as_u8(), 3);
    }

    #[test]
    fn test_time_wraps() {
        assert_eq!(truncate_time(65_536 + 60), 60);
        assert_eq!(truncate_time(65_535), u16::MAX);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: both nibbles and the timestamp survive packing
            #[test]
            fn prop_header_nibbles_roundtrip(
                type_bits in 0u8..=15,
                flags in 0u8..=15,
                time in any::<u16>(),
            ) {
                let bytes = encode_header(type_bits, flags, time);
                let header = decode_header(&bytes).unwrap();

                prop_assert_eq!(header.type_bits(), type_bits & 0x0F);
                prop_assert_eq!(header.flags().as_u8(), flags);
                prop_assert_eq!(header.time(), time);
                prop_assert_eq!(type_of(&bytes).unwrap(), type_bits);
            }
        }
    }
}

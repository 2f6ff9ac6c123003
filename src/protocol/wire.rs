//! Shared helpers for building and splitting fixed-size frames

use bytes::{BufMut, BytesMut};

use super::{Error, Flags, FrameType, HEADER_SIZE, Header, Result, decode_header, type_of};

/// Allocate a buffer sized for `frame_type` and write its header
pub(crate) fn frame_buffer(frame_type: FrameType, flags: Flags, time: u16) -> BytesMut {
    let mut buf = BytesMut::with_capacity(frame_type.wire_size());
    buf.put_slice(&Header::new(frame_type, flags, time).to_bytes());
    buf
}

/// Validate `buf` as a complete `frame_type` packet and split off its payload
///
/// The type check runs before the size check so that handing a buffer to
/// the wrong codec is reported as a type mismatch.
pub(crate) fn split_frame(buf: &[u8], frame_type: FrameType) -> Result<(Header, &[u8])> {
    let found = type_of(buf)?;
    if found != frame_type.as_u8() {
        return Err(Error::TypeMismatch {
            expected: frame_type,
            found,
        });
    }

    let expected = frame_type.wire_size();
    if buf.len() != expected {
        return Err(Error::SizeMismatch {
            frame_type,
            expected,
            got: buf.len(),
        });
    }

    let header = decode_header(buf)?;
    Ok((header, &buf[HEADER_SIZE..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_reserves_wire_size() {
        let buf = frame_buffer(FrameType::Motion, Flags::from_u8(1), 7);

        assert_eq!(&buf[..], &[0x11, 0x00, 0x07]);
        assert!(buf.capacity() >= FrameType::Motion.wire_size());
    }

    #[test]
    fn test_split_frame_checks_type_first() {
        // Wrong type and wrong length: the type error wins.
        let result = split_frame(&[0x20, 0x00, 0x00], FrameType::Motion);
        assert_eq!(
            result,
            Err(Error::TypeMismatch {
                expected: FrameType::Motion,
                found: 2,
            })
        );
    }

    #[test]
    fn test_split_frame_exact_length() {
        let mut buf = vec![0x50, 0x00, 0x01];
        buf.extend_from_slice(&[0, 0, 0, 42]);

        let (header, payload) = split_frame(&buf, FrameType::Altitude).unwrap();
        assert_eq!(header.time(), 1);
        assert_eq!(payload, &[0, 0, 0, 42]);

        buf.push(0);
        assert!(matches!(
            split_frame(&buf, FrameType::Altitude),
            Err(Error::SizeMismatch { expected: 7, got: 8, .. })
        ));
    }
}

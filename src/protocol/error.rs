//! Hyperion error types

use thiserror::Error;

use super::FrameType;

/// Hyperion protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes available than the format requires
    #[error("truncated buffer: need {needed} bytes, got {got}")]
    TruncatedBuffer {
        /// Minimum number of bytes required
        needed: usize,
        /// Bytes actually supplied
        got: usize,
    },

    /// Buffer length differs from the exact size of the targeted frame
    #[error("size mismatch for {frame_type} frame: expected {expected} bytes, got {got}")]
    SizeMismatch {
        /// Frame being unpacked
        frame_type: FrameType,
        /// Exact wire size of that frame
        expected: usize,
        /// Length of the supplied buffer
        got: usize,
    },

    /// Type nibble is not assigned in the frame registry
    #[error("unknown frame type: {type_bits}")]
    UnknownFrameType {
        /// Raw 4-bit discriminant
        type_bits: u8,
    },

    /// Buffer carries a different frame type than the codec invoked
    #[error("type mismatch: expected {expected} frame, found type {found}")]
    TypeMismatch {
        /// Frame the codec handles
        expected: FrameType,
        /// Raw discriminant found in the buffer
        found: u8,
    },

    /// Info message exceeded the frame capacity and was cut down
    #[error("info message truncated: {len} bytes exceeds capacity of {capacity}")]
    MessageTruncated {
        /// Length of the message handed to the packer
        len: usize,
        /// Bytes of message text that fit in the frame
        capacity: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = Error::SizeMismatch {
            frame_type: FrameType::Motion,
            expected: 39,
            got: 38,
        };
        assert_eq!(
            err.to_string(),
            "size mismatch for MOTION frame: expected 39 bytes, got 38"
        );

        let err = Error::UnknownFrameType { type_bits: 12 };
        assert_eq!(err.to_string(), "unknown frame type: 12");
    }
}

//! Free-text info frames
//!
//! The payload is a fixed 300-byte buffer holding the message followed by
//! NUL padding. At most [`INFO_TEXT_CAPACITY`] bytes of text are carried so
//! that a terminator always fits.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::warn;

use super::frames::{Frame, pack, unpack};
use super::{Error, Flags, FrameType, Header, INFO_PAYLOAD_SIZE, INFO_TEXT_CAPACITY, Result};

/// Info message text, guaranteed to fit in one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct InfoMessage {
    text: String,
}

impl InfoMessage {
    /// Create a message, failing if it does not fit
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.len() > INFO_TEXT_CAPACITY {
            return Err(Error::MessageTruncated {
                len: text.len(),
                capacity: INFO_TEXT_CAPACITY,
            });
        }
        Ok(Self { text })
    }

    /// Create a message, cutting it down to the frame capacity
    ///
    /// The cut never splits a UTF-8 character.
    #[must_use]
    pub fn truncated(text: &str) -> Self {
        let mut end = text.len().min(INFO_TEXT_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            text: text[..end].to_owned(),
        }
    }

    /// Get message text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get message length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the message is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TryFrom<String> for InfoMessage {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<InfoMessage> for String {
    fn from(message: InfoMessage) -> Self {
        message.text
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Frame for InfoMessage {
    const TYPE: FrameType = FrameType::Info;

    fn encode_payload(&self, dst: &mut BytesMut) {
        dst.put_slice(self.text.as_bytes());
        dst.put_bytes(0, INFO_PAYLOAD_SIZE - self.text.len());
    }

    fn decode_payload(payload: &[u8]) -> Self {
        let end = payload.iter().position(|&b| b == 0).unwrap_or_else(|| {
            warn!(
                len = payload.len(),
                capacity = INFO_TEXT_CAPACITY,
                "info payload has no NUL terminator; text cut to capacity"
            );
            payload.len()
        });
        let text = String::from_utf8_lossy(&payload[..end]);
        if let std::borrow::Cow::Owned(_) = text {
            warn!(len = end, "info message is not valid UTF-8; replaced invalid bytes");
        }

        // A lossy replacement can grow the text; keep it within capacity.
        Self::truncated(&text)
    }
}

/// A packed info frame plus whether the message had to be cut down
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PackedInfo {
    bytes: Bytes,
    original_len: usize,
    kept_len: usize,
}

impl PackedInfo {
    /// Get the packed frame
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Take the packed frame, ignoring any truncation
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Check if the message was cut down
    pub fn is_truncated(&self) -> bool {
        self.kept_len < self.original_len
    }

    /// Truncation report, if the message was cut down
    pub fn warning(&self) -> Option<Error> {
        self.is_truncated().then_some(Error::MessageTruncated {
            len: self.original_len,
            capacity: INFO_TEXT_CAPACITY,
        })
    }

    /// Take the packed frame, treating truncation as an error
    pub fn into_result(self) -> Result<Bytes> {
        match self.warning() {
            Some(err) => Err(err),
            None => Ok(self.bytes),
        }
    }
}

/// Pack an info frame
///
/// Messages longer than [`INFO_TEXT_CAPACITY`] bytes are cut down; the
/// returned [`PackedInfo`] reports it.
pub fn pack_info(flags: impl Into<Flags>, time: u16, message: &str) -> PackedInfo {
    let info = InfoMessage::truncated(message);
    if info.len() < message.len() {
        warn!(
            len = message.len(),
            kept = info.len(),
            capacity = INFO_TEXT_CAPACITY,
            "info message truncated"
        );
    }

    PackedInfo {
        bytes: pack(flags, time, &info),
        original_len: message.len(),
        kept_len: info.len(),
    }
}

/// Unpack an info frame; the text ends at the first NUL
pub fn unpack_info(buf: &[u8]) -> Result<(Header, InfoMessage)> {
    unpack(buf)
}

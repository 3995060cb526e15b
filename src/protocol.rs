//! Wire messages exchanged over the datagram link.
//!
//! Every message is a fixed-size binary record; the receiver and the
//! controller must agree byte for byte. Incoming payloads are dispatched
//! on their exact length, so a truncated or padded datagram can never be
//! mistaken for a different message type.

use core::fmt;

use heapless::Vec;

use crate::command::{COMMAND_WIRE_SIZE, LightCommand};

/// Size of an encoded [`ColorRequest`] in bytes
pub const REQUEST_WIRE_SIZE: usize = 2;

/// Capacity of the passthrough text buffer
pub const PASSTHROUGH_CAPACITY: usize = 32;

/// Size of an encoded [`PassthroughText`] in bytes (tag + length + buffer)
pub const PASSTHROUGH_WIRE_SIZE: usize = 2 + PASSTHROUGH_CAPACITY;

/// Largest payload the link ever carries
pub const MAX_PAYLOAD: usize = PASSTHROUGH_WIRE_SIZE;

const REQUEST_TYPE_COLOR: u8 = 1;
const ORIGIN_RECEIVER: u8 = 1;
const PASSTHROUGH_TAG: u8 = 0x74;

/// 6-byte hardware address of a link peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

/// Request for the controller to re-send its current command.
///
/// This is the receiver's only recovery path after rebooting with stale
/// or default state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRequest {
    pub request_type: u8,
    pub from_receiver: u8,
}

impl ColorRequest {
    /// The canonical color request sent by the receiver
    pub const fn color() -> Self {
        Self {
            request_type: REQUEST_TYPE_COLOR,
            from_receiver: ORIGIN_RECEIVER,
        }
    }

    /// Check whether this carries the expected color request marker
    pub const fn is_color_request(self) -> bool {
        self.request_type == REQUEST_TYPE_COLOR && self.from_receiver == ORIGIN_RECEIVER
    }

    pub const fn encode(self) -> [u8; REQUEST_WIRE_SIZE] {
        [self.request_type, self.from_receiver]
    }
}

/// Free-text diagnostic record, bounded by [`PASSTHROUGH_CAPACITY`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassthroughText {
    text: Vec<u8, PASSTHROUGH_CAPACITY>,
}

impl PassthroughText {
    /// Build a passthrough record, truncating text beyond capacity
    pub fn new(text: &[u8]) -> Self {
        let take = text.len().min(PASSTHROUGH_CAPACITY);
        let mut buf = Vec::new();
        // take is bounded by the capacity, extend cannot fail
        let _ = buf.extend_from_slice(&text[..take]);
        Self { text: buf }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn encode(&self) -> [u8; PASSTHROUGH_WIRE_SIZE] {
        let mut out = [0u8; PASSTHROUGH_WIRE_SIZE];
        out[0] = PASSTHROUGH_TAG;
        #[allow(clippy::cast_possible_truncation)]
        {
            out[1] = self.text.len() as u8;
        }
        out[2..2 + self.text.len()].copy_from_slice(&self.text);
        out
    }
}

/// Reasons a datagram fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload length matches no known record
    UnknownLength(usize),
    /// Passthrough record with an unknown tag byte
    UnknownTag(u8),
    /// Passthrough length field exceeds the buffer capacity
    LengthOutOfBounds(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLength(len) => write!(f, "unrecognized payload length {len}"),
            Self::UnknownTag(tag) => write!(f, "unknown passthrough tag {tag:#04x}"),
            Self::LengthOutOfBounds(len) => {
                write!(f, "passthrough length {len} exceeds capacity")
            }
        }
    }
}

/// A decoded link message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Command(LightCommand),
    Request(ColorRequest),
    Passthrough(PassthroughText),
}

impl Message {
    /// Decode a raw datagram payload, dispatching on its exact length
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        match bytes.len() {
            COMMAND_WIRE_SIZE => {
                // length already checked, decode cannot fail
                let command = LightCommand::decode(bytes)
                    .ok_or(DecodeError::UnknownLength(bytes.len()))?;
                Ok(Self::Command(command))
            }
            REQUEST_WIRE_SIZE => Ok(Self::Request(ColorRequest {
                request_type: bytes[0],
                from_receiver: bytes[1],
            })),
            PASSTHROUGH_WIRE_SIZE => {
                if bytes[0] != PASSTHROUGH_TAG {
                    return Err(DecodeError::UnknownTag(bytes[0]));
                }
                let len = bytes[1];
                if usize::from(len) > PASSTHROUGH_CAPACITY {
                    return Err(DecodeError::LengthOutOfBounds(len));
                }
                Ok(Self::Passthrough(PassthroughText::new(
                    &bytes[2..2 + usize::from(len)],
                )))
            }
            other => Err(DecodeError::UnknownLength(other)),
        }
    }
}

//! Link sessions: liveness, request/response and state replication on top
//! of an unreliable, unordered datagram transport.

mod controller;
mod receiver;

pub use controller::{ControllerConfig, ControllerSession, ControllerStats};
pub use receiver::{ReceiverConfig, ReceiverEvent, ReceiverSession, ReceiverStats};

use crate::protocol::MacAddress;

/// Error returned when the transport reports a failed send.
///
/// Never retried inline; the next heartbeat or local state change is the
/// retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendError;

/// Abstract datagram transport.
///
/// No ordering, no retries, bounded payload. `send` queues one datagram
/// toward `peer` and reports whether the transport accepted it.
pub trait Transport {
    fn send(&mut self, peer: MacAddress, payload: &[u8]) -> Result<(), SendError>;
}

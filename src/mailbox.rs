//! Single-slot datagram mailbox for the receive-callback handoff.
//!
//! The radio's receive callback may run in an interrupt-like context, so
//! it does exactly one constant-time thing: bulk-copy the payload into
//! this slot. Decoding, validation and state transitions all happen later
//! on the cooperative tick loop via [`DatagramMailbox::take`].
//!
//! The slot holds at most one datagram and newer posts supersede older
//! ones: state replication is idempotent, so the latest command is always
//! the only one that matters. Whole-`Datagram` copies under a critical
//! section mean the consumer can never observe a torn write.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::protocol::{MAX_PAYLOAD, MacAddress};

/// Error returned when a payload exceeds [`MAX_PAYLOAD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostError;

/// A raw datagram as delivered by the transport
#[derive(Debug, Clone, Copy)]
pub struct Datagram {
    sender: MacAddress,
    len: u8,
    buf: [u8; MAX_PAYLOAD],
}

impl Datagram {
    /// Copy a payload into a new datagram.
    ///
    /// Returns `None` if the payload does not fit; the link never carries
    /// anything larger than [`MAX_PAYLOAD`], so an oversize payload is
    /// garbage by definition.
    pub fn new(sender: MacAddress, payload: &[u8]) -> Option<Self> {
        if payload.len() > MAX_PAYLOAD {
            return None;
        }
        let mut buf = [0u8; MAX_PAYLOAD];
        buf[..payload.len()].copy_from_slice(payload);
        #[allow(clippy::cast_possible_truncation)]
        Some(Self {
            sender,
            len: payload.len() as u8,
            buf,
        })
    }

    pub const fn sender(&self) -> MacAddress {
        self.sender
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }
}

/// A single-slot, interrupt-safe, latest-wins mailbox.
pub struct DatagramMailbox {
    inner: Mutex<RefCell<Option<Datagram>>>,
}

impl Default for DatagramMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl DatagramMailbox {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Post a datagram from the receive callback.
    ///
    /// Constant-time: copies the bytes and sets the slot. A still-pending
    /// datagram is silently replaced.
    pub fn post(&self, sender: MacAddress, payload: &[u8]) -> Result<(), PostError> {
        let datagram = Datagram::new(sender, payload).ok_or(PostError)?;
        critical_section::with(|cs| {
            self.inner.borrow(cs).replace(Some(datagram));
        });
        Ok(())
    }

    /// Drain the slot on the tick loop
    pub fn take(&self) -> Option<Datagram> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

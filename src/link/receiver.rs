//! Receiver-side link session.
//!
//! Tracks connectivity, issues color requests with a response deadline,
//! and hands validated commands upward. Poll it from the tick loop; the
//! radio callback only ever touches the mailbox.

use embassy_time::{Duration, Instant};

use super::{SendError, Transport};
use crate::command::LightCommand;
use crate::mailbox::DatagramMailbox;
use crate::protocol::{ColorRequest, MacAddress, Message, PassthroughText};

/// Default deadline for a response to a color request
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(3);

/// Default interval between liveness heartbeats
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// Receiver session configuration
#[derive(Debug, Clone, Copy)]
pub struct ReceiverConfig {
    /// The single allow-listed controller address
    pub peer: MacAddress,
    pub response_timeout: Duration,
    pub heartbeat_interval: Duration,
}

impl ReceiverConfig {
    pub const fn new(peer: MacAddress) -> Self {
        Self {
            peer,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
        }
    }
}

/// What a poll produced for the layers above
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverEvent {
    /// A validated command was accepted; apply it to the renderer
    Command(LightCommand),
    /// A diagnostic text record arrived
    Passthrough(PassthroughText),
}

/// Read-only diagnostic snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiverStats {
    pub connected: bool,
    pub commands_received: u32,
    pub requests_sent: u32,
    pub current_command: LightCommand,
}

/// Receiver-side session state machine.
///
/// States: `Idle` and `AwaitingResponse`. A color request moves to
/// `AwaitingResponse` with a deadline; any accepted command moves back to
/// `Idle`; a missed deadline moves back to `Idle` and drops `connected`.
pub struct ReceiverSession<'a> {
    config: ReceiverConfig,
    mailbox: &'a DatagramMailbox,
    latest: LightCommand,
    connected: bool,
    awaiting_response: bool,
    response_deadline: Instant,
    next_heartbeat: Instant,
    commands_received: u32,
    requests_sent: u32,
}

impl<'a> ReceiverSession<'a> {
    /// Create a session starting disconnected, rendering `initial` until
    /// the controller replicates its state.
    pub fn new(config: ReceiverConfig, mailbox: &'a DatagramMailbox, initial: LightCommand) -> Self {
        Self {
            config,
            mailbox,
            latest: initial,
            connected: false,
            awaiting_response: false,
            response_deadline: Instant::from_millis(0),
            next_heartbeat: Instant::from_millis(0),
            commands_received: 0,
            requests_sent: 0,
        }
    }

    /// Run one protocol step: drain the mailbox, enforce the response
    /// deadline, and issue a heartbeat when one is due.
    ///
    /// Returns an event when a validated message should be handled above.
    pub fn poll<T: Transport>(&mut self, transport: &mut T, now: Instant) -> Option<ReceiverEvent> {
        let event = self.drain_mailbox();

        // Liveness: an unanswered request downgrades connectivity once.
        if self.awaiting_response && now.as_millis() >= self.response_deadline.as_millis() {
            self.awaiting_response = false;
            self.connected = false;
            log::info!("color request timed out, marking link disconnected");
        }

        // Heartbeat, suppressed while a request is already in flight.
        if !self.awaiting_response && now.as_millis() >= self.next_heartbeat.as_millis() {
            let _ = self.send_color_request(transport, now);
        }

        event
    }

    /// Ask the controller to re-send its current command.
    ///
    /// On success the session enters `AwaitingResponse`. On failure the
    /// next heartbeat is the retry path; nothing is retried inline.
    pub fn send_color_request<T: Transport>(
        &mut self,
        transport: &mut T,
        now: Instant,
    ) -> Result<(), SendError> {
        self.next_heartbeat = now + self.config.heartbeat_interval;

        let request = ColorRequest::color().encode();
        match transport.send(self.config.peer, &request) {
            Ok(()) => {
                self.awaiting_response = true;
                self.response_deadline = now + self.config.response_timeout;
                self.requests_sent += 1;
                Ok(())
            }
            Err(err) => {
                log::warn!("color request send failed");
                Err(err)
            }
        }
    }

    /// The latest validated command
    pub const fn current_command(&self) -> &LightCommand {
        &self.latest
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    pub const fn stats(&self) -> ReceiverStats {
        ReceiverStats {
            connected: self.connected,
            commands_received: self.commands_received,
            requests_sent: self.requests_sent,
            current_command: self.latest,
        }
    }

    fn drain_mailbox(&mut self) -> Option<ReceiverEvent> {
        let datagram = self.mailbox.take()?;

        // Allow-list check comes before any decoding; a foreign sender
        // must not change any state.
        if datagram.sender() != self.config.peer {
            log::warn!("dropping datagram from unauthorized sender {}", datagram.sender());
            return None;
        }

        match Message::decode(datagram.bytes()) {
            Ok(Message::Command(command)) => {
                self.latest = command;
                self.connected = true;
                self.awaiting_response = false;
                self.commands_received += 1;
                Some(ReceiverEvent::Command(command))
            }
            Ok(Message::Passthrough(text)) => Some(ReceiverEvent::Passthrough(text)),
            Ok(Message::Request(_)) => {
                // Only controllers answer requests.
                log::debug!("ignoring color request addressed to a receiver");
                None
            }
            Err(err) => {
                log::warn!("dropping malformed datagram: {}", err);
                None
            }
        }
    }
}

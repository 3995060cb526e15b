//! Controller-side link session.
//!
//! Owns the authoritative command, replicates it to the receiver on every
//! local change, and answers the receiver's color requests. Replication is
//! idempotent: a dropped datagram is corrected by the next local change,
//! the next heartbeat, or the receiver's own request.

use embassy_time::{Duration, Instant};

use super::{SendError, Transport};
use crate::command::LightCommand;
use crate::mailbox::DatagramMailbox;
use crate::protocol::{MacAddress, Message};

/// Default interval for re-sending the current command as a heartbeat
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// Window within which repeated color requests are answered only once
pub const DEFAULT_REQUEST_DEBOUNCE: Duration = Duration::from_millis(200);

/// Controller session configuration
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// The single allow-listed receiver address
    pub peer: MacAddress,
    pub heartbeat_interval: Duration,
    pub request_debounce: Duration,
}

impl ControllerConfig {
    pub const fn new(peer: MacAddress) -> Self {
        Self {
            peer,
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
            request_debounce: DEFAULT_REQUEST_DEBOUNCE,
        }
    }
}

/// Read-only diagnostic snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerStats {
    /// Whether the last send was accepted by the transport
    pub connected: bool,
    pub commands_sent: u32,
    pub requests_received: u32,
    pub current_command: LightCommand,
}

/// Controller-side session.
pub struct ControllerSession<'a> {
    config: ControllerConfig,
    mailbox: &'a DatagramMailbox,
    command: LightCommand,
    /// Last command value the transport actually accepted
    last_sent: Option<LightCommand>,
    /// Brightness to restore when powering back on
    stored_brightness: u8,
    last_request: Option<Instant>,
    next_heartbeat: Instant,
    last_send_failed: bool,
    commands_sent: u32,
    requests_received: u32,
}

impl<'a> ControllerSession<'a> {
    pub fn new(
        config: ControllerConfig,
        mailbox: &'a DatagramMailbox,
        initial: LightCommand,
    ) -> Self {
        Self {
            config,
            mailbox,
            command: initial,
            last_sent: None,
            stored_brightness: initial.brightness,
            last_request: None,
            next_heartbeat: Instant::from_millis(0),
            last_send_failed: false,
            commands_sent: 0,
            requests_received: 0,
        }
    }

    /// Edit the command and replicate it if the value changed.
    ///
    /// The full command is recomputed on every local mutation and sent
    /// only when it differs from the last value actually sent, so
    /// redundant edits produce no traffic.
    pub fn update<T: Transport>(
        &mut self,
        transport: &mut T,
        edit: impl FnOnce(&mut LightCommand),
    ) -> Result<(), SendError> {
        edit(&mut self.command);
        if self.command.brightness > 0 {
            self.stored_brightness = self.command.brightness;
        }
        self.send_command(transport, false)
    }

    /// Convenience power toggle: off forces brightness 0, on restores the
    /// previous brightness.
    pub fn set_power<T: Transport>(
        &mut self,
        transport: &mut T,
        on: bool,
    ) -> Result<(), SendError> {
        let restore = self.stored_brightness;
        self.update(transport, |command| {
            command.brightness = if on { restore } else { 0 };
        })
    }

    /// Run one protocol step: answer pending color requests and re-send
    /// the current command as the periodic heartbeat.
    pub fn poll<T: Transport>(&mut self, transport: &mut T, now: Instant) {
        if self.drain_mailbox(now) {
            // Answer with the full current state, bypassing deduplication:
            // the requester may have rebooted with defaults that happen to
            // equal our last send.
            let _ = self.send_command(transport, true);
        }

        if now.as_millis() >= self.next_heartbeat.as_millis() {
            self.next_heartbeat = now + self.config.heartbeat_interval;
            let _ = self.send_command(transport, true);
        }
    }

    /// The authoritative command
    pub const fn current_command(&self) -> &LightCommand {
        &self.command
    }

    pub const fn stats(&self) -> ControllerStats {
        ControllerStats {
            connected: !self.last_send_failed,
            commands_sent: self.commands_sent,
            requests_received: self.requests_received,
            current_command: self.command,
        }
    }

    /// Returns true when a debounced color request should be answered
    fn drain_mailbox(&mut self, now: Instant) -> bool {
        let Some(datagram) = self.mailbox.take() else {
            return false;
        };

        if datagram.sender() != self.config.peer {
            log::warn!("dropping datagram from unauthorized sender {}", datagram.sender());
            return false;
        }

        match Message::decode(datagram.bytes()) {
            Ok(Message::Request(request)) if request.is_color_request() => {
                // Debounce: answer at most once per window no matter how
                // often the request is re-delivered.
                if let Some(last) = self.last_request {
                    if now.duration_since(last) < self.config.request_debounce {
                        return false;
                    }
                }
                self.last_request = Some(now);
                self.requests_received += 1;
                true
            }
            Ok(Message::Request(_)) => {
                log::debug!("ignoring request without the color marker");
                false
            }
            Ok(Message::Command(_) | Message::Passthrough(_)) => {
                // Controllers originate commands, they never consume them.
                log::debug!("ignoring non-request message on controller side");
                false
            }
            Err(err) => {
                log::warn!("dropping malformed datagram: {}", err);
                false
            }
        }
    }

    fn send_command<T: Transport>(
        &mut self,
        transport: &mut T,
        force: bool,
    ) -> Result<(), SendError> {
        if !force && self.last_sent == Some(self.command) {
            return Ok(());
        }

        match transport.send(self.config.peer, &self.command.encode()) {
            Ok(()) => {
                self.last_sent = Some(self.command);
                self.last_send_failed = false;
                self.commands_sent += 1;
                Ok(())
            }
            Err(err) => {
                // Surfaced as a status flag only; the next heartbeat or
                // local change is the retry path.
                self.last_send_failed = true;
                log::warn!("command send failed");
                Err(err)
            }
        }
    }
}

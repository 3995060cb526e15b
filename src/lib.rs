#![no_std]

pub mod color;
pub mod command;
pub mod effect;
pub mod frame_scheduler;
pub mod grid;
pub mod link;
pub mod mailbox;
pub mod math8;
pub mod protocol;
pub mod random;
pub mod renderer;

pub use color::{Hsv, Rgb};
pub use command::{EffectKind, LightCommand};
pub use effect::{EffectSlot, EffectTimings, SpeedRange};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use grid::SerpentineGrid;
pub use link::{
    ControllerConfig, ControllerSession, ControllerStats, ReceiverConfig, ReceiverEvent,
    ReceiverSession, ReceiverStats, SendError, Transport,
};
pub use mailbox::{Datagram, DatagramMailbox};
pub use protocol::{ColorRequest, DecodeError, MacAddress, Message, PassthroughText};
pub use random::{RandomSource, SplitMix64};
pub use renderer::Renderer;

pub use embassy_time::{Duration, Instant};

/// Abstract LED panel driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait PixelSink {
    /// Set the overall output brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Write a full frame to the panel
    fn write(&mut self, pixels: &[Rgb]);

    /// Turn every pixel off
    fn clear(&mut self);
}

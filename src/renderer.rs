//! The effect engine: (command, runtime state, time) -> pixel buffer.

use embassy_time::Instant;

use crate::color::Rgb;
use crate::command::LightCommand;
use crate::effect::{EffectSlot, EffectTimings};
use crate::grid::SerpentineGrid;
use crate::random::RandomSource;

/// Renders the current command into a fixed-length pixel buffer.
///
/// `MAX_PIXELS` bounds the buffer at compile time; the active pixel count
/// is `grid.len()`. The buffer survives between frames because sparkle
/// decays the previous contents instead of redrawing from scratch.
pub struct Renderer<const MAX_PIXELS: usize> {
    grid: SerpentineGrid,
    timings: EffectTimings,
    command: LightCommand,
    slot: EffectSlot,
    frame: [Rgb; MAX_PIXELS],
}

impl<const MAX_PIXELS: usize> Renderer<MAX_PIXELS> {
    /// Create a renderer showing `initial` from `now`.
    ///
    /// `grid.len()` must not exceed `MAX_PIXELS`.
    pub fn new(
        grid: SerpentineGrid,
        timings: EffectTimings,
        initial: LightCommand,
        now: Instant,
    ) -> Self {
        debug_assert!(grid.len() <= MAX_PIXELS);
        Self {
            grid,
            timings,
            slot: EffectSlot::for_command(&initial, &timings, grid, now),
            command: initial,
            frame: [Rgb::default(); MAX_PIXELS],
        }
    }

    /// Replace the current command wholesale.
    ///
    /// The effect runtime state is rebuilt from scratch so the animation
    /// restarts cleanly at `now` instead of jumping mid-cycle.
    pub fn apply_command(&mut self, command: LightCommand, now: Instant) {
        self.command = command;
        self.slot = EffectSlot::for_command(&command, &self.timings, self.grid, now);
    }

    /// Render one frame and return the active pixel slice
    pub fn render(&mut self, now: Instant, rng: &mut dyn RandomSource) -> &[Rgb] {
        let count = self.grid.len().min(MAX_PIXELS);
        let leds = &mut self.frame[..count];
        self.slot.render(now, leds, rng);
        &self.frame[..count]
    }

    /// The command currently being rendered
    pub const fn command(&self) -> &LightCommand {
        &self.command
    }

    pub const fn grid(&self) -> SerpentineGrid {
        self.grid
    }

    /// Output brightness scalar for the pixel sink (0-255)
    pub fn brightness_scale(&self) -> u8 {
        self.command.brightness_scale()
    }
}

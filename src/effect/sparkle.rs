//! Random pixels flashing and decaying.
//!
//! The one effect with cross-tick memory: it decays whatever the frame
//! buffer already holds instead of overwriting it, so the renderer must
//! keep the buffer alive between frames.

use embassy_time::Instant;

use super::Effect;
use crate::color::{Rgb, scale_color};
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct SparkleEffect {
    color: Rgb,
    /// Upper bound of pixels lit per frame
    spawn_budget: u8,
    /// Multiplicative fade applied to the previous frame (x/255)
    decay: u8,
}

impl SparkleEffect {
    pub fn new(command: &LightCommand, timings: &EffectTimings) -> Self {
        Self {
            color: command.blended_color(),
            spawn_budget: timings.sparkle_spawn(command.speed),
            decay: timings.sparkle_decay,
        }
    }
}

impl Effect for SparkleEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb], rng: &mut dyn RandomSource) {
        if leds.is_empty() {
            return;
        }

        // Fade out the previous frame.
        for led in leds.iter_mut() {
            *led = scale_color(*led, self.decay);
        }

        // Light up to `spawn_budget` random pixels, each with a coin flip
        // so the density varies frame to frame.
        let count = leds.len() as u32;
        for _ in 0..self.spawn_budget {
            if rng.next_u32() & 1 == 0 {
                continue;
            }
            let pos = (rng.next_u32() % count) as usize;
            leds[pos] = self.color;
        }
    }
}

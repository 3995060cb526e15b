//! Continuously rotating hue gradient.
//!
//! The hue offset is recomputed from absolute time, not incremented per
//! tick, so the rotation speed is independent of the render cadence.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::{Hsv, Rgb, hsv2rgb, white_blend};
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Time per single hue step
    step: Duration,
    white: u8,
    warm_white: u8,
}

impl RainbowEffect {
    pub fn new(command: &LightCommand, timings: &EffectTimings) -> Self {
        Self {
            step: timings.rainbow_step.duration_for(command.speed),
            white: command.white,
            warm_white: command.warm_white,
        }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        let count = leds.len();
        if count == 0 {
            return;
        }

        let step_ms = self.step.as_millis().max(1);
        let offset = ((now.as_millis() / step_ms) % 256) as u8;

        for (i, led) in leds.iter_mut().enumerate() {
            let hue = offset.wrapping_add(((i * 256) / count) as u8);
            let color = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 255,
            });
            *led = white_blend(color, self.white, self.warm_white);
        }
    }
}

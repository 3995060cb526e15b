//! Hard on/off blinking.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::Rgb;
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::random::RandomSource;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

#[derive(Debug, Clone)]
pub struct StrobeEffect {
    interval: Duration,
    on: bool,
    last_toggle: Instant,
    color: Rgb,
}

impl StrobeEffect {
    pub fn new(command: &LightCommand, timings: &EffectTimings, now: Instant) -> Self {
        Self {
            interval: timings.strobe_interval.duration_for(command.speed),
            on: true,
            last_toggle: now,
            color: command.blended_color(),
        }
    }
}

impl Effect for StrobeEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        if now.duration_since(self.last_toggle) >= self.interval {
            self.on = !self.on;
            self.last_toggle = now;
        }

        let color = if self.on { self.color } else { BLACK };
        for led in leds {
            *led = color;
        }
    }
}

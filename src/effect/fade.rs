//! Ping-pong fade between black and the command color.
//!
//! A two-state machine: FadingIn runs black -> color over one half-cycle,
//! then the endpoints swap and FadingOut runs back. A new command always
//! starts FadingIn from black.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::{Rgb, blend_colors};
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::math8::{ease_sine, factor_to_u8};
use crate::random::RandomSource;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    FadingIn,
    FadingOut,
}

#[derive(Debug, Clone)]
pub struct FadeEffect {
    half_cycle: Duration,
    direction: FadeDirection,
    start: Instant,
    from: Rgb,
    to: Rgb,
}

impl FadeEffect {
    pub fn new(command: &LightCommand, timings: &EffectTimings, now: Instant) -> Self {
        Self {
            half_cycle: timings.fade_half_cycle.duration_for(command.speed),
            direction: FadeDirection::FadingIn,
            start: now,
            from: BLACK,
            to: command.blended_color(),
        }
    }

    /// Flip into the opposite half-cycle, starting at `now`
    fn flip(&mut self, now: Instant) {
        core::mem::swap(&mut self.from, &mut self.to);
        self.direction = match self.direction {
            FadeDirection::FadingIn => FadeDirection::FadingOut,
            FadeDirection::FadingOut => FadeDirection::FadingIn,
        };
        self.start = now;
    }
}

impl Effect for FadeEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        let elapsed = now.duration_since(self.start);

        let color = if elapsed >= self.half_cycle {
            // Half-cycle complete: show the endpoint and begin the return
            // leg. A second render at the same `now` lands at progress 0 of
            // the new leg, which is the same color.
            let endpoint = self.to;
            self.flip(now);
            endpoint
        } else {
            let t = elapsed.as_millis() as f32 / self.half_cycle.as_millis().max(1) as f32;
            blend_colors(self.from, self.to, factor_to_u8(ease_sine(t)))
        };

        for led in leds {
            *led = color;
        }
    }
}

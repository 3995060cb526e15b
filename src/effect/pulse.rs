//! Sine-shaped brightness breathing.

use core::f32::consts::PI;

use embassy_time::{Duration, Instant};
use libm::sinf;

use super::Effect;
use crate::color::{Rgb, scale_color};
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::math8::{factor_to_u8, smoothstep};
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    period: Duration,
    color: Rgb,
}

impl PulseEffect {
    pub fn new(command: &LightCommand, timings: &EffectTimings) -> Self {
        Self {
            period: timings.pulse_period.duration_for(command.speed),
            color: command.blended_color(),
        }
    }
}

impl Effect for PulseEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        let period_ms = self.period.as_millis().max(1);
        let phase_ms = now.as_millis() % period_ms;
        let phase = 2.0 * PI * (phase_ms as f32 / period_ms as f32);

        // Raw sine lifted to 0-1, then smoothed for softer turning points.
        let factor = smoothstep((sinf(phase) + 1.0) / 2.0);
        let color = scale_color(self.color, factor_to_u8(factor));

        for led in leds {
            *led = color;
        }
    }
}

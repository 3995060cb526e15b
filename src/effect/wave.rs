//! 2D interference pattern over the matrix.
//!
//! Two independent sine terms, one driven by x and one by y with
//! different phase rates, summed and normalized to a 0-1 brightness per
//! pixel. The serpentine map places each (x, y) result into the linear
//! buffer.

use embassy_time::Instant;
use libm::sinf;

use super::Effect;
use crate::color::{Rgb, scale_color};
use crate::command::LightCommand;
use crate::effect::EffectTimings;
use crate::grid::SerpentineGrid;
use crate::math8::factor_to_u8;
use crate::random::RandomSource;

const X_SPATIAL_STEP: f32 = 0.5;
const Y_SPATIAL_STEP: f32 = 0.7;
/// Phase rate ratio between the y term and the x term
const Y_RATE_RATIO: f32 = 1.6;

#[derive(Debug, Clone)]
pub struct WaveEffect {
    grid: SerpentineGrid,
    /// Time divisor: larger means slower motion
    divisor: f32,
    color: Rgb,
}

impl WaveEffect {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(command: &LightCommand, timings: &EffectTimings, grid: SerpentineGrid) -> Self {
        Self {
            grid,
            divisor: timings.wave_divisor_milli(command.speed) as f32 / 1000.0,
            color: command.blended_color(),
        }
    }
}

impl Effect for WaveEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        let t = now.as_millis() as f32;

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let Some(index) = self.grid.index(x, y) else {
                    continue;
                };
                if index >= leds.len() {
                    continue;
                }

                let sx = sinf(x as f32 * X_SPATIAL_STEP + t / self.divisor);
                let sy = sinf(y as f32 * Y_SPATIAL_STEP + t / (self.divisor * Y_RATE_RATIO));
                let factor = (sx + sy + 2.0) / 4.0;

                leds[index] = scale_color(self.color, factor_to_u8(factor));
            }
        }
    }
}

//! Static fill with the command color.

use embassy_time::Instant;

use super::Effect;
use crate::color::Rgb;
use crate::command::LightCommand;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct SolidEffect {
    color: Rgb,
}

impl SolidEffect {
    pub fn new(command: &LightCommand) -> Self {
        Self {
            color: command.blended_color(),
        }
    }
}

impl Effect for SolidEffect {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb], _rng: &mut dyn RandomSource) {
        for led in leds {
            *led = self.color;
        }
    }
}

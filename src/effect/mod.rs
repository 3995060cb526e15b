//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations. Each
//! effect implements the `Effect` trait and owns its own timing state,
//! which is rebuilt from the command whenever a new command is accepted
//! so animations restart cleanly instead of jumping.

mod fade;
mod pulse;
mod rainbow;
mod solid;
mod sparkle;
mod strobe;
mod timing;
mod wave;

use embassy_time::Instant;

pub use fade::FadeEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use solid::SolidEffect;
pub use sparkle::SparkleEffect;
pub use strobe::StrobeEffect;
pub use timing::{EffectTimings, SpeedRange, map_speed};
pub use wave::WaveEffect;

use crate::color::Rgb;
use crate::command::{EffectKind, LightCommand};
use crate::grid::SerpentineGrid;
use crate::random::RandomSource;

pub(crate) trait Effect {
    /// Render a single frame
    ///
    /// Must be safe to call at any cadence: animation progress is derived
    /// from `now`, not from the number of calls.
    fn render(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut dyn RandomSource);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Every pixel shows the command color
    Solid(SolidEffect),
    /// Rotating hue gradient across the strip
    Rainbow(RainbowEffect),
    /// Ping-pong between black and the command color
    Fade(FadeEffect),
    /// Hard on/off blinking
    Strobe(StrobeEffect),
    /// Sine-shaped brightness breathing
    Pulse(PulseEffect),
    /// Random pixels flashing and decaying
    Sparkle(SparkleEffect),
    /// 2D interference pattern over the matrix
    Wave(WaveEffect),
}

impl EffectSlot {
    /// Build the runtime state for a freshly accepted command.
    ///
    /// All timing state starts from `now`; nothing is carried over from a
    /// previous command.
    pub fn for_command(
        command: &LightCommand,
        timings: &EffectTimings,
        grid: SerpentineGrid,
        now: Instant,
    ) -> Self {
        match command.effect {
            EffectKind::Solid => Self::Solid(SolidEffect::new(command)),
            EffectKind::Rainbow => Self::Rainbow(RainbowEffect::new(command, timings)),
            EffectKind::Fade => Self::Fade(FadeEffect::new(command, timings, now)),
            EffectKind::Strobe => Self::Strobe(StrobeEffect::new(command, timings, now)),
            EffectKind::Pulse => Self::Pulse(PulseEffect::new(command, timings)),
            EffectKind::Sparkle => Self::Sparkle(SparkleEffect::new(command, timings)),
            EffectKind::Wave => Self::Wave(WaveEffect::new(command, timings, grid)),
        }
    }

    /// Render the current effect
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut dyn RandomSource) {
        match self {
            Self::Solid(effect) => effect.render(now, leds, rng),
            Self::Rainbow(effect) => effect.render(now, leds, rng),
            Self::Fade(effect) => effect.render(now, leds, rng),
            Self::Strobe(effect) => effect.render(now, leds, rng),
            Self::Pulse(effect) => effect.render(now, leds, rng),
            Self::Sparkle(effect) => effect.render(now, leds, rng),
            Self::Wave(effect) => effect.render(now, leds, rng),
        }
    }

    /// Get the effect kind for external observation
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Solid(_) => EffectKind::Solid,
            Self::Rainbow(_) => EffectKind::Rainbow,
            Self::Fade(_) => EffectKind::Fade,
            Self::Strobe(_) => EffectKind::Strobe,
            Self::Pulse(_) => EffectKind::Pulse,
            Self::Sparkle(_) => EffectKind::Sparkle,
            Self::Wave(_) => EffectKind::Wave,
        }
    }
}

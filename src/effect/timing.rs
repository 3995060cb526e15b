//! Speed-to-timing mapping.
//!
//! Every effect defines its own range for "how long is one cycle"; the
//! command's `speed` field (1-100) maps linearly and inverted onto that
//! range. Speed 1 hits the slowest extreme exactly, speed 100 the
//! fastest, and the mapped duration is strictly monotonic in between.

use embassy_time::Duration;

const fn clamp_speed(speed: u8) -> u8 {
    if speed < 1 {
        1
    } else if speed > 100 {
        100
    } else {
        speed
    }
}

/// Map a 1-100 speed value onto an inverted linear range.
///
/// `speed` is clamped to 1-100 first. Requires `slowest >= fastest`.
pub const fn map_speed(speed: u8, slowest: u64, fastest: u64) -> u64 {
    let s = clamp_speed(speed) as u64;
    slowest - ((slowest - fastest) * (s - 1)) / 99
}

/// Duration range an effect's speed maps onto
#[derive(Debug, Clone, Copy)]
pub struct SpeedRange {
    /// Duration at speed 1
    pub slowest: Duration,
    /// Duration at speed 100
    pub fastest: Duration,
}

impl SpeedRange {
    pub const fn new(slowest_ms: u64, fastest_ms: u64) -> Self {
        Self {
            slowest: Duration::from_millis(slowest_ms),
            fastest: Duration::from_millis(fastest_ms),
        }
    }

    /// Duration for a 1-100 speed value
    pub const fn duration_for(self, speed: u8) -> Duration {
        Duration::from_millis(map_speed(
            speed,
            self.slowest.as_millis(),
            self.fastest.as_millis(),
        ))
    }
}

/// Per-effect timing configuration.
///
/// The numeric bounds are tunable; the defaults below are the canonical
/// mapping table. Invariants that must hold for any override: each range
/// is inverted-linear (slowest at speed 1) and `slowest >= fastest`.
#[derive(Debug, Clone, Copy)]
pub struct EffectTimings {
    /// One fade half-cycle (black to color or back)
    pub fade_half_cycle: SpeedRange,
    /// Strobe on/off toggle interval
    pub strobe_interval: SpeedRange,
    /// Time per rainbow hue step
    pub rainbow_step: SpeedRange,
    /// Full pulse breathing period
    pub pulse_period: SpeedRange,
    /// Wave time divisor at speed 1 (dimensionless)
    pub wave_divisor_slowest: u64,
    /// Wave time divisor at speed 100
    pub wave_divisor_fastest: u64,
    /// Sparkle pixels spawned per frame at speed 1
    pub sparkle_min_spawn: u8,
    /// Sparkle pixels spawned per frame at speed 100
    pub sparkle_max_spawn: u8,
    /// Multiplicative sparkle decay per frame (x/255)
    pub sparkle_decay: u8,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            fade_half_cycle: SpeedRange::new(5_000, 300),
            strobe_interval: SpeedRange::new(1_000, 30),
            rainbow_step: SpeedRange::new(300, 20),
            pulse_period: SpeedRange::new(10_000, 400),
            wave_divisor_slowest: 100,
            wave_divisor_fastest: 10,
            sparkle_min_spawn: 1,
            sparkle_max_spawn: 8,
            sparkle_decay: 240,
        }
    }
}

impl EffectTimings {
    /// Wave time divisor for a 1-100 speed value, in thousandths.
    ///
    /// Mapped at millis resolution so every speed step lands on a
    /// distinct value even for a narrow divisor range.
    pub const fn wave_divisor_milli(&self, speed: u8) -> u64 {
        map_speed(
            speed,
            self.wave_divisor_slowest * 1000,
            self.wave_divisor_fastest * 1000,
        )
    }

    /// Sparkle spawn budget per frame for a 1-100 speed value.
    ///
    /// Unlike the duration ranges this grows with speed.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn sparkle_spawn(&self, speed: u8) -> u8 {
        let s = clamp_speed(speed) as u16;
        let min = self.sparkle_min_spawn as u16;
        let max = self.sparkle_max_spawn as u16;
        (min + ((max - min) * (s - 1)) / 99) as u8
    }
}

mod tests {
    use glowlink::effect::{EffectTimings, SpeedRange, map_speed};

    fn assert_strictly_decreasing(label: &str, f: impl Fn(u8) -> u64) {
        for speed in 2..=100u8 {
            assert!(
                f(speed) < f(speed - 1),
                "{label}: f({speed}) = {} not below f({}) = {}",
                f(speed),
                speed - 1,
                f(speed - 1),
            );
        }
    }

    #[test]
    fn test_map_speed_hits_extremes() {
        assert_eq!(map_speed(1, 5_000, 300), 5_000);
        assert_eq!(map_speed(100, 5_000, 300), 300);
    }

    #[test]
    fn test_map_speed_clamps_out_of_range_input() {
        assert_eq!(map_speed(0, 5_000, 300), 5_000);
        assert_eq!(map_speed(255, 5_000, 300), 300);
    }

    #[test]
    fn test_speed_range_endpoints() {
        let range = SpeedRange::new(1_000, 30);
        assert_eq!(range.duration_for(1), range.slowest);
        assert_eq!(range.duration_for(100), range.fastest);
    }

    #[test]
    fn test_default_ranges_strictly_monotonic() {
        let timings = EffectTimings::default();
        assert_strictly_decreasing("fade", |s| {
            timings.fade_half_cycle.duration_for(s).as_millis()
        });
        assert_strictly_decreasing("strobe", |s| {
            timings.strobe_interval.duration_for(s).as_millis()
        });
        assert_strictly_decreasing("rainbow", |s| {
            timings.rainbow_step.duration_for(s).as_millis()
        });
        assert_strictly_decreasing("pulse", |s| {
            timings.pulse_period.duration_for(s).as_millis()
        });
        assert_strictly_decreasing("wave", |s| timings.wave_divisor_milli(s));
    }

    #[test]
    fn test_default_ranges_hit_documented_extremes() {
        let timings = EffectTimings::default();
        assert_eq!(timings.fade_half_cycle.duration_for(1).as_millis(), 5_000);
        assert_eq!(timings.fade_half_cycle.duration_for(100).as_millis(), 300);
        assert_eq!(timings.strobe_interval.duration_for(1).as_millis(), 1_000);
        assert_eq!(timings.strobe_interval.duration_for(100).as_millis(), 30);
        assert_eq!(timings.rainbow_step.duration_for(1).as_millis(), 300);
        assert_eq!(timings.rainbow_step.duration_for(100).as_millis(), 20);
        assert_eq!(timings.pulse_period.duration_for(1).as_millis(), 10_000);
        assert_eq!(timings.pulse_period.duration_for(100).as_millis(), 400);
        assert_eq!(timings.wave_divisor_milli(1), 100_000);
        assert_eq!(timings.wave_divisor_milli(100), 10_000);
    }

    #[test]
    fn test_sparkle_spawn_grows_with_speed() {
        let timings = EffectTimings::default();
        assert_eq!(timings.sparkle_spawn(1), 1);
        assert_eq!(timings.sparkle_spawn(100), 8);
        for speed in 2..=100u8 {
            assert!(timings.sparkle_spawn(speed) >= timings.sparkle_spawn(speed - 1));
        }
    }
}

mod tests {
    use glowlink::color::{WARM_WHITE_REFERENCE, hsv2rgb, scale_color, white_blend};
    use glowlink::effect::EffectTimings;
    use glowlink::{
        EffectKind, EffectSlot, Hsv, Instant, LightCommand, Renderer, Rgb, SerpentineGrid,
        SplitMix64,
    };

    const WIDTH: usize = 8;
    const HEIGHT: usize = 4;
    const MAX_PIXELS: usize = WIDTH * HEIGHT;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn renderer(initial: LightCommand) -> Renderer<MAX_PIXELS> {
        Renderer::new(
            SerpentineGrid::new(WIDTH, HEIGHT),
            EffectTimings::default(),
            initial,
            Instant::from_millis(0),
        )
    }

    fn command(effect: EffectKind, speed: u8) -> LightCommand {
        LightCommand {
            red: 255,
            green: 0,
            blue: 0,
            white: 0,
            warm_white: 0,
            brightness: 50,
            effect,
            speed,
        }
    }

    #[test]
    fn test_solid_fills_with_command_color() {
        let cmd = LightCommand {
            red: 200,
            green: 100,
            blue: 50,
            ..command(EffectKind::Solid, 50)
        };
        let mut renderer = renderer(cmd);
        let mut rng = SplitMix64::new(1);

        let frame = renderer.render(Instant::from_millis(0), &mut rng);
        assert_eq!(frame.len(), MAX_PIXELS);
        assert!(frame.iter().all(|&led| led == Rgb {
            r: 200,
            g: 100,
            b: 50
        }));
    }

    #[test]
    fn test_white_channel_desaturates() {
        let base = Rgb {
            r: 200,
            g: 100,
            b: 50,
        };
        assert_eq!(white_blend(base, 0, 0), base);
        // Fully desaturated: a gray at the base color's value.
        assert_eq!(
            white_blend(base, 255, 0),
            Rgb {
                r: 200,
                g: 200,
                b: 200
            }
        );
    }

    #[test]
    fn test_warm_white_blends_toward_amber() {
        let base = Rgb {
            r: 10,
            g: 200,
            b: 30,
        };
        assert_eq!(white_blend(base, 0, 255), WARM_WHITE_REFERENCE);
    }

    #[test]
    fn test_fade_starts_from_black() {
        let mut renderer = renderer(command(EffectKind::Solid, 50));
        let mut rng = SplitMix64::new(1);
        renderer.apply_command(command(EffectKind::Fade, 50), Instant::from_millis(0));

        let frame = renderer.render(Instant::from_millis(0), &mut rng);
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_fade_in_is_strictly_monotonic() {
        let timings = EffectTimings::default();
        let half_cycle = timings.fade_half_cycle.duration_for(50).as_millis();

        let mut renderer = renderer(command(EffectKind::Fade, 50));
        renderer.apply_command(command(EffectKind::Fade, 50), Instant::from_millis(0));
        let mut rng = SplitMix64::new(1);

        let samples = [
            half_cycle / 8,
            half_cycle / 3,
            half_cycle / 2,
            half_cycle * 7 / 8,
        ];
        let mut last_red = 0u8;
        for at in samples {
            let frame = renderer.render(Instant::from_millis(at), &mut rng);
            let led = frame[0];
            assert!(led.r > last_red, "red must keep rising during fade-in");
            assert_eq!(led.g, 0);
            assert_eq!(led.b, 0);
            assert!(led.r < 255, "must stay below full red before the half-cycle ends");
            last_red = led.r;
        }

        // Endpoint of the fade-in leg is the full command color.
        let frame = renderer.render(Instant::from_millis(half_cycle), &mut rng);
        assert!(frame.iter().all(|&led| led == RED));
    }

    #[test]
    fn test_fade_render_is_idempotent_at_fixed_time() {
        let mut renderer = renderer(command(EffectKind::Fade, 50));
        renderer.apply_command(command(EffectKind::Fade, 50), Instant::from_millis(0));
        let mut rng = SplitMix64::new(1);

        for at in [0u64, 700, 1_300, 2_674, 5_000] {
            let first = renderer.render(Instant::from_millis(at), &mut rng).to_vec();
            let second = renderer.render(Instant::from_millis(at), &mut rng).to_vec();
            assert_eq!(first, second, "render at t={at} must be repeatable");
        }
    }

    #[test]
    fn test_strobe_toggles_on_interval() {
        let timings = EffectTimings::default();
        // Speed 100 maps to the fastest (shortest) interval.
        let interval = timings.strobe_interval.duration_for(100).as_millis();
        assert_eq!(interval, 30);

        let mut renderer = renderer(command(EffectKind::Solid, 50));
        renderer.apply_command(command(EffectKind::Strobe, 100), Instant::from_millis(0));
        let mut rng = SplitMix64::new(1);

        assert_eq!(renderer.render(Instant::from_millis(0), &mut rng)[0], RED);
        assert_eq!(renderer.render(Instant::from_millis(30), &mut rng)[0], BLACK);
        assert_eq!(renderer.render(Instant::from_millis(59), &mut rng)[0], BLACK);
        assert_eq!(renderer.render(Instant::from_millis(60), &mut rng)[0], RED);
    }

    #[test]
    fn test_pulse_peaks_and_dips() {
        let timings = EffectTimings::default();
        let period = timings.pulse_period.duration_for(100).as_millis();
        assert_eq!(period, 400);

        let mut renderer = renderer(command(EffectKind::Pulse, 100));
        let mut rng = SplitMix64::new(1);

        // Quarter period: sine peak, full command color.
        let frame = renderer.render(Instant::from_millis(100), &mut rng);
        assert_eq!(frame[0], RED);

        // Three-quarter period: sine trough, black.
        let frame = renderer.render(Instant::from_millis(300), &mut rng);
        assert_eq!(frame[0], BLACK);

        // Only the red channel is ever modulated.
        for at in (0..400).step_by(17) {
            let frame = renderer.render(Instant::from_millis(at), &mut rng);
            assert!(frame.iter().all(|led| led.g == 0 && led.b == 0));
        }
    }

    #[test]
    fn test_rainbow_is_cadence_independent() {
        let timings = EffectTimings::default();
        let step = timings.rainbow_step.duration_for(100).as_millis();
        assert_eq!(step, 20);

        let mut renderer = renderer(command(EffectKind::Rainbow, 100));
        let mut rng = SplitMix64::new(1);

        let first = renderer.render(Instant::from_millis(0), &mut rng).to_vec();
        for (i, led) in first.iter().enumerate() {
            let expected = hsv2rgb(Hsv {
                hue: ((i * 256) / MAX_PIXELS) as u8,
                sat: 255,
                val: 255,
            });
            assert_eq!(*led, expected);
        }

        // One full 256-step rotation later the gradient repeats exactly,
        // no matter how many frames were (not) rendered in between.
        let wrapped = renderer
            .render(Instant::from_millis(step * 256), &mut rng)
            .to_vec();
        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_sparkle_decays_and_spawns_within_budget() {
        let timings = EffectTimings::default();
        let budget = usize::from(timings.sparkle_spawn(50));

        let mut renderer = renderer(command(EffectKind::Solid, 50));
        let mut rng = SplitMix64::new(42);

        // Fill the buffer with red, then switch to sparkle; the buffer
        // contents must survive the switch and decay from there.
        renderer.render(Instant::from_millis(0), &mut rng);
        renderer.apply_command(command(EffectKind::Sparkle, 50), Instant::from_millis(0));

        let mut previous: Vec<Rgb> = vec![RED; MAX_PIXELS];
        for tick in 1..=20u64 {
            let frame = renderer
                .render(Instant::from_millis(tick * 33), &mut rng)
                .to_vec();
            let mut spawned = 0;
            for (led, prev) in frame.iter().zip(&previous) {
                if *led == RED && scale_color(*prev, 240) != RED {
                    spawned += 1;
                } else {
                    assert_eq!(*led, scale_color(*prev, 240), "non-spawned pixels must decay");
                }
            }
            assert!(spawned <= budget, "spawned {spawned} above budget {budget}");
            previous = frame;
        }
    }

    #[test]
    fn test_wave_modulates_through_the_serpentine_map() {
        let cmd = LightCommand {
            red: 0,
            green: 0,
            blue: 255,
            ..command(EffectKind::Wave, 50)
        };
        let mut renderer = renderer(cmd);
        let mut rng = SplitMix64::new(1);

        let frame = renderer.render(Instant::from_millis(0), &mut rng).to_vec();
        assert!(frame.iter().all(|led| led.r == 0 && led.g == 0));

        // At t=0 both sine terms vanish at the origin, leaving the
        // midpoint brightness factor of 0.5.
        assert_eq!(frame[0], Rgb { r: 0, g: 0, b: 127 });

        // Deterministic: same instant, same frame.
        let again = renderer.render(Instant::from_millis(0), &mut rng).to_vec();
        assert_eq!(frame, again);
    }

    #[test]
    fn test_slot_kind_matches_command_effect() {
        let timings = EffectTimings::default();
        let grid = SerpentineGrid::new(WIDTH, HEIGHT);
        for effect in [
            EffectKind::Solid,
            EffectKind::Rainbow,
            EffectKind::Fade,
            EffectKind::Strobe,
            EffectKind::Pulse,
            EffectKind::Sparkle,
            EffectKind::Wave,
        ] {
            let slot =
                EffectSlot::for_command(&command(effect, 50), &timings, grid, Instant::from_millis(0));
            assert_eq!(slot.kind(), effect);
        }
    }

    #[test]
    fn test_renderer_built_late_starts_timing_from_now() {
        // Construction long after boot must not leave the fade with a huge
        // stale elapsed time for the initial command.
        let start = Instant::from_millis(3_600_000);
        let mut renderer: Renderer<MAX_PIXELS> = Renderer::new(
            SerpentineGrid::new(WIDTH, HEIGHT),
            EffectTimings::default(),
            command(EffectKind::Fade, 50),
            start,
        );
        let mut rng = SplitMix64::new(1);

        let frame = renderer.render(start, &mut rng);
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_command_replacement_is_whole_record() {
        let mut renderer = renderer(command(EffectKind::Fade, 10));
        let replacement = LightCommand {
            red: 1,
            green: 2,
            blue: 3,
            white: 4,
            warm_white: 5,
            brightness: 6,
            effect: EffectKind::Wave,
            speed: 7,
        };
        renderer.apply_command(replacement, Instant::from_millis(500));
        assert_eq!(*renderer.command(), replacement);
    }

    #[test]
    fn test_brightness_scale_policy() {
        let mut cmd = command(EffectKind::Solid, 50);
        cmd.brightness = 0;
        assert_eq!(cmd.brightness_scale(), 0);
        cmd.brightness = 100;
        assert_eq!(cmd.brightness_scale(), 255);
        cmd.brightness = 200;
        assert_eq!(cmd.brightness_scale(), 255);
        cmd.brightness = 50;
        assert_eq!(cmd.brightness_scale(), 127);
    }
}

//! Frame scheduling and timing.
//!
//! Decouples "a new command arrived" from "time to re-render a running
//! animation": the scheduler enforces a minimum inter-render interval and
//! is the only thing that talks to the pixel sink. The caller is
//! responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};

use crate::PixelSink;
use crate::random::RandomSource;
use crate::renderer::Renderer;

/// Default minimum interval between rendered frames (~30 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether a frame was actually rendered this tick
    pub rendered: bool,
    /// The deadline for the next frame
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if already due)
    pub sleep_duration: Duration,
}

/// Paces rendering and pushes frames to the pixel sink.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, sink);
///
/// loop {
///     let now = Instant::now();
///     if let Some(event) = session.poll(&mut transport, now) {
///         if let ReceiverEvent::Command(cmd) = event {
///             scheduler.renderer_mut().apply_command(cmd, now);
///         }
///     }
///     let result = scheduler.tick(now, &mut rng);
///     // Platform-specific sleep, bounded by the idle tick interval.
///     sleep(result.sleep_duration.min(Duration::from_millis(10)));
/// }
/// ```
pub struct FrameScheduler<S: PixelSink, const MAX_PIXELS: usize> {
    sink: S,
    renderer: Renderer<MAX_PIXELS>,
    next_frame: Instant,
    frame_interval: Duration,
}

impl<S: PixelSink, const MAX_PIXELS: usize> FrameScheduler<S, MAX_PIXELS> {
    /// Create a scheduler with the default ~30 Hz frame interval
    pub fn new(renderer: Renderer<MAX_PIXELS>, sink: S) -> Self {
        Self::with_frame_interval(renderer, sink, DEFAULT_FRAME_INTERVAL)
    }

    /// Create a scheduler with a custom minimum frame interval
    pub fn with_frame_interval(
        renderer: Renderer<MAX_PIXELS>,
        sink: S,
        frame_interval: Duration,
    ) -> Self {
        Self {
            sink,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_interval,
        }
    }

    /// Process one tick.
    ///
    /// Renders only when the frame deadline has passed, so callers may
    /// tick as often as they like without exceeding the sink's update
    /// rate. If the loop stalled for more than two frames the backlog is
    /// skipped instead of bursting to catch up.
    pub fn tick(&mut self, now: Instant, rng: &mut dyn RandomSource) -> FrameResult {
        // Not due yet: report how long the caller may sleep.
        if now.as_millis() < self.next_frame.as_millis() {
            return FrameResult {
                rendered: false,
                next_deadline: self.next_frame,
                sleep_duration: Duration::from_millis(
                    self.next_frame.as_millis() - now.as_millis(),
                ),
            };
        }

        // Drift correction: if we've fallen too far behind, reset to now.
        let max_drift = self.frame_interval.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        self.sink.set_brightness(self.renderer.brightness_scale());
        let frame = self.renderer.render(now, rng);
        self.sink.write(frame);

        self.next_frame += self.frame_interval;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            rendered: true,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Blank the panel immediately
    pub fn blank(&mut self) {
        self.sink.clear();
    }

    /// Get a reference to the renderer
    pub fn renderer(&self) -> &Renderer<MAX_PIXELS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer
    pub fn renderer_mut(&mut self) -> &mut Renderer<MAX_PIXELS> {
        &mut self.renderer
    }
}

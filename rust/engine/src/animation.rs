//! Timed visual steps driven by the turn sequencer.
//!
//! Nothing here touches game state. Each step awaits its own delays, so a
//! caller that awaits a step in turn gets strictly ordered animations.

use std::time::Duration;

use crate::board::Slot;
use crate::presenter::Presenter;

/// Pixel position on the playing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of the playing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub card_width: f64,
    pub card_height: f64,
    pub spacing: f64,
    /// Where the next card waits before it flies to the board.
    pub flight_origin: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card_width: 78.0,
            card_height: 97.0,
            spacing: 10.0,
            flight_origin: Point::new(458.0, 150.0),
        }
    }
}

impl Layout {
    pub fn slot_origin(&self, slot: Slot) -> Point {
        Point::new(
            slot.col() as f64 * (self.card_width + self.spacing),
            slot.row() as f64 * (self.card_height + self.spacing),
        )
    }
}

/// Delays and step sizes for every animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Timing {
    /// Pixels the flying card advances per tick.
    pub fly_step: f64,
    pub fly_tick: Duration,
    /// Number of highlight toggles when a hand scores.
    pub blink_times: u32,
    pub blink_delay: Duration,
    /// Pause between the end of a turn and the next draw.
    pub draw_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fly_step: 50.0,
            fly_tick: Duration::from_millis(5),
            blink_times: 12,
            blink_delay: Duration::from_millis(100),
            draw_delay: Duration::from_millis(200),
        }
    }
}

impl Timing {
    /// Same steps with every delay removed.
    pub fn instant() -> Self {
        Self {
            fly_tick: Duration::ZERO,
            blink_delay: Duration::ZERO,
            draw_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Total wall time of one blink sequence.
    pub fn blink_duration(&self) -> Duration {
        self.blink_delay * self.blink_times
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Positions of a card flying in a straight line at constant speed.
///
/// Yields the origin first, then one position per tick, and finally the
/// destination once less than one step remains along the dominant axis.
/// A zero-length flight yields nothing.
#[derive(Debug, Clone)]
pub struct FlightPath {
    pos: Point,
    dest: Point,
    delta: Point,
    axis: Axis,
    finished: bool,
}

impl FlightPath {
    pub fn new(from: Point, to: Point, step: f64) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let h = dx.hypot(dy);
        let axis = if dx.abs() >= dy.abs() { Axis::X } else { Axis::Y };
        let mut path = Self {
            pos: from,
            dest: to,
            delta: Point::new(0.0, 0.0),
            axis,
            finished: h == 0.0,
        };
        if path.finished {
            return path;
        }
        if !(step.is_finite() && step > 0.0) {
            // no usable speed: arrive immediately
            path.pos = to;
            return path;
        }
        let (cos, sin) = (dx / h, dy / h);
        path.delta = Point::new(cos * step, sin * step);
        path
    }

    fn along(&self, p: Point) -> f64 {
        match self.axis {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    fn remaining(&self) -> f64 {
        let d = self.along(self.delta);
        if d == 0.0 {
            return 0.0;
        }
        (self.along(self.dest) - self.along(self.pos)) * d.signum()
    }
}

impl Iterator for FlightPath {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.finished {
            return None;
        }
        if self.remaining() < self.along(self.delta).abs() || self.along(self.delta) == 0.0 {
            self.finished = true;
            return Some(self.dest);
        }
        let current = self.pos;
        self.pos = Point::new(current.x + self.delta.x, current.y + self.delta.y);
        Some(current)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Animates the card from `from` to `to`, one frame per tick.
pub async fn fly<P>(presenter: &mut P, from: Point, to: Point, timing: &Timing)
where
    P: Presenter + ?Sized,
{
    let mut frames = 0usize;
    for position in FlightPath::new(from, to, timing.fly_step) {
        presenter.flight_frame(position);
        frames += 1;
        pause(timing.fly_tick).await;
    }
    presenter.flight_done();
    tracing::trace!(frames, "flight finished");
}

/// Toggles the highlight on `slots` `blink_times` times and leaves it off.
pub async fn blink<P>(presenter: &mut P, slots: &[Slot], timing: &Timing)
where
    P: Presenter + ?Sized,
{
    let mut on = false;
    for _ in 0..timing.blink_times {
        on = !on;
        presenter.set_highlight(slots, on);
        pause(timing.blink_delay).await;
    }
    if on {
        presenter.set_highlight(slots, false);
    }
}

/// Waits out the pause before the next card is drawn.
pub async fn draw_delay(timing: &Timing) {
    pause(timing.draw_delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{PresenterEvent, RecordingPresenter};

    #[test]
    fn zero_length_flight_has_no_frames() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(FlightPath::new(p, p, 50.0).count(), 0);
    }

    #[test]
    fn flight_starts_at_origin_and_snaps_to_destination() {
        let layout = Layout::default();
        let dest = layout.slot_origin(Slot::new(0).unwrap());
        let frames: Vec<Point> = FlightPath::new(layout.flight_origin, dest, 50.0).collect();
        assert_eq!(frames.first(), Some(&layout.flight_origin));
        assert_eq!(frames.last(), Some(&dest));
        // 458px along x at ~47.5px per tick
        assert_eq!(frames.len(), 10);
    }

    #[test]
    fn vertical_flight_uses_y_as_dominant_axis() {
        let frames: Vec<Point> =
            FlightPath::new(Point::new(0.0, 0.0), Point::new(0.0, 120.0), 50.0).collect();
        assert_eq!(
            frames,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 50.0),
                Point::new(0.0, 120.0)
            ]
        );
    }

    #[test]
    fn non_positive_step_arrives_immediately() {
        let frames: Vec<Point> =
            FlightPath::new(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 0.0).collect();
        assert_eq!(frames, vec![Point::new(30.0, 40.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn blink_toggles_and_ends_dark() {
        let mut presenter = RecordingPresenter::new();
        let slots = [Slot::new(3).unwrap(), Slot::new(8).unwrap()];
        let timing = Timing::default();
        let start = tokio::time::Instant::now();
        blink(&mut presenter, &slots, &timing).await;

        assert_eq!(start.elapsed(), timing.blink_duration());
        let toggles: Vec<bool> = presenter
            .events
            .iter()
            .map(|e| match e {
                PresenterEvent::Highlight(s, on) => {
                    assert_eq!(s.as_slice(), &slots);
                    *on
                }
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(toggles.len(), 12);
        assert!(toggles[0]);
        assert!(!toggles[11]);
    }

    #[tokio::test(start_paused = true)]
    async fn odd_blink_count_still_ends_dark() {
        let mut presenter = RecordingPresenter::new();
        let timing = Timing {
            blink_times: 3,
            ..Timing::instant()
        };
        blink(&mut presenter, &[Slot::new(0).unwrap()], &timing).await;
        assert_eq!(
            presenter.events.last(),
            Some(&PresenterEvent::Highlight(vec![Slot::new(0).unwrap()], false))
        );
        assert_eq!(presenter.events.len(), 4);
    }
}

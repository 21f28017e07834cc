//! Contract between the turn sequencer and whatever draws the game.
//!
//! The engine never renders anything itself. Every visible change goes
//! through a [`Presenter`], which keeps the game logic testable without a
//! terminal or a browser.

use crate::animation::Point;
use crate::board::Slot;
use crate::cards::Card;

/// Where a card image is shown.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderTarget {
    /// The preview spot holding the card to be placed next.
    Next,
    /// A board cell.
    Slot(Slot),
}

pub trait Presenter {
    /// Shows `card` face up at `target`; `None` shows the card back.
    fn render_card(&mut self, target: RenderTarget, card: Option<Card>);

    fn set_score(&mut self, score: u32);

    fn set_high_score(&mut self, high_score: u32);

    /// Hand label, game-over notice, or an empty string to clear.
    fn set_status(&mut self, text: &str);

    /// Whether empty slots currently accept a placement.
    fn set_interactive(&mut self, enabled: bool);

    fn set_highlight(&mut self, slots: &[Slot], on: bool);

    /// Moves the in-flight card to `position`.
    fn flight_frame(&mut self, position: Point);

    /// Hides the in-flight card once it has arrived.
    fn flight_done(&mut self);
}

/// Presenter that discards everything. Used for unattended games.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_card(&mut self, _target: RenderTarget, _card: Option<Card>) {}
    fn set_score(&mut self, _score: u32) {}
    fn set_high_score(&mut self, _high_score: u32) {}
    fn set_status(&mut self, _text: &str) {}
    fn set_interactive(&mut self, _enabled: bool) {}
    fn set_highlight(&mut self, _slots: &[Slot], _on: bool) {}
    fn flight_frame(&mut self, _position: Point) {}
    fn flight_done(&mut self) {}
}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Render(RenderTarget, Option<Card>),
    Score(u32),
    HighScore(u32),
    Status(String),
    Interactive(bool),
    Highlight(Vec<Slot>, bool),
    FlightFrame(Point),
    FlightDone,
}

/// Presenter that keeps every call in order, for assertions on sequencing.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Status(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn flight_frames(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PresenterEvent::FlightFrame(_)))
            .count()
    }
}

impl Presenter for RecordingPresenter {
    fn render_card(&mut self, target: RenderTarget, card: Option<Card>) {
        self.events.push(PresenterEvent::Render(target, card));
    }

    fn set_score(&mut self, score: u32) {
        self.events.push(PresenterEvent::Score(score));
    }

    fn set_high_score(&mut self, high_score: u32) {
        self.events.push(PresenterEvent::HighScore(high_score));
    }

    fn set_status(&mut self, text: &str) {
        self.events.push(PresenterEvent::Status(text.to_string()));
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.events.push(PresenterEvent::Interactive(enabled));
    }

    fn set_highlight(&mut self, slots: &[Slot], on: bool) {
        self.events
            .push(PresenterEvent::Highlight(slots.to_vec(), on));
    }

    fn flight_frame(&mut self, position: Point) {
        self.events.push(PresenterEvent::FlightFrame(position));
    }

    fn flight_done(&mut self) {
        self.events.push(PresenterEvent::FlightDone);
    }
}

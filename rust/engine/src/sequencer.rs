//! One-turn-at-a-time game controller.
//!
//! A turn is a single linear `async` task:
//!
//! ```text
//! Drawn -> Flying -> Placed -> RowCheck -> [RowBlink] -> ColumnCheck -> [ColumnBlink]
//!       -> NextDraw | GameOver
//! ```
//!
//! [`TurnSequencer::place`] borrows the sequencer mutably for the whole
//! turn, so a second placement cannot start while one is in flight. Input
//! that arrives while the session is not interactive is ignored.

use crate::animation::{self, Layout, Timing};
use crate::board::Slot;
use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate_line, Evaluation};
use crate::presenter::{Presenter, RenderTarget};
use crate::session::{GameOverSummary, GameSession, Phase};
use crate::store::HighScoreStore;

/// Status text shown once the board is full.
pub const GAME_OVER_STATUS: &str = "Game Over";

/// What happened during one completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub slot: Slot,
    pub card: Card,
    pub row: Evaluation,
    pub column: Evaluation,
    /// Running score after the turn.
    pub score: u32,
    pub game_over: Option<GameOverSummary>,
}

impl TurnReport {
    pub fn score_delta(&self) -> u32 {
        self.row.score() + self.column.score()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The placement was not accepted; nothing changed.
    Ignored,
    Played(TurnReport),
}

impl TurnOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnOutcome::Ignored)
    }

    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            TurnOutcome::Played(r) => Some(r),
            TurnOutcome::Ignored => None,
        }
    }
}

#[derive(Debug)]
pub struct TurnSequencer<P, S> {
    session: GameSession,
    presenter: P,
    store: S,
    timing: Timing,
    layout: Layout,
}

impl<P: Presenter, S: HighScoreStore> TurnSequencer<P, S> {
    pub fn new(presenter: P, store: S, timing: Timing) -> Self {
        Self {
            session: GameSession::new(0, 0),
            presenter,
            store,
            timing,
            layout: Layout::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Discards any current session and starts a fresh game seeded with
    /// `seed`. Returns the first card to place.
    pub async fn start_game(&mut self, seed: u64) -> Result<Card, GameError> {
        let high_score = self.store.high_score()?;
        self.session = GameSession::new(seed, high_score);
        tracing::info!(seed, high_score, "new game");

        self.presenter.set_interactive(false);
        for slot in Slot::all() {
            self.presenter.render_card(RenderTarget::Slot(slot), None);
        }
        self.presenter.set_score(0);
        self.presenter.set_high_score(high_score);
        self.presenter.set_status("");

        Ok(self.deal())
    }

    /// Alias of [`start_game`](Self::start_game) for the game-over screen.
    pub async fn new_game(&mut self, seed: u64) -> Result<Card, GameError> {
        self.start_game(seed).await
    }

    /// Runs one full turn placing the current card on `slot`.
    pub async fn place(&mut self, slot: Slot) -> TurnOutcome {
        let Some(card) = self.session.begin_turn(slot) else {
            tracing::debug!(%slot, phase = ?self.session.phase(), "placement ignored");
            return TurnOutcome::Ignored;
        };
        self.presenter.set_interactive(false);
        self.presenter.render_card(RenderTarget::Next, None);

        let from = self.layout.flight_origin;
        let to = self.layout.slot_origin(slot);
        animation::fly(&mut self.presenter, from, to, &self.timing).await;

        let landed = self.session.land(slot);
        debug_assert_eq!(landed, Some(card), "in-flight card must land on its slot");
        self.presenter
            .render_card(RenderTarget::Slot(slot), Some(card));

        self.session.set_phase(Phase::RowCheck);
        let row = evaluate_line(&self.session.board().row(slot.row()));
        self.resolve(&row, Phase::RowBlink).await;

        self.session.set_phase(Phase::ColumnCheck);
        let column = evaluate_line(&self.session.board().column(slot.col()));
        self.resolve(&column, Phase::ColumnBlink).await;

        let game_over = if self.session.is_board_complete() {
            Some(self.finish())
        } else {
            self.session.set_phase(Phase::NextDraw);
            animation::draw_delay(&self.timing).await;
            self.deal();
            None
        };

        TurnOutcome::Played(TurnReport {
            slot,
            card,
            row,
            column,
            score: self.session.score(),
            game_over,
        })
    }

    fn deal(&mut self) -> Card {
        let card = self.session.draw_next();
        self.presenter.render_card(RenderTarget::Next, Some(card));
        self.presenter.set_status("");
        self.presenter.set_interactive(true);
        card
    }

    async fn resolve(&mut self, evaluation: &Evaluation, blink_phase: Phase) {
        let Some(rank) = evaluation.rank else {
            return;
        };
        let delta = self.session.apply(evaluation);
        tracing::debug!(hand = %rank, delta, score = self.session.score(), "hand scored");
        self.presenter.set_status(rank.label());

        self.session.set_phase(blink_phase);
        let slots = evaluation.highlighted_slots();
        animation::blink(&mut self.presenter, &slots, &self.timing).await;
        self.presenter.set_score(self.session.score());
    }

    fn finish(&mut self) -> GameOverSummary {
        let summary = self.session.finish();
        if summary.new_high_score {
            if let Err(e) = self.store.set_high_score(summary.high_score) {
                tracing::warn!(error = %e, high_score = summary.high_score, "failed to persist high score");
            }
            self.presenter.set_high_score(summary.high_score);
        }
        self.presenter.set_status(GAME_OVER_STATUS);
        tracing::info!(
            score = summary.score,
            high_score = summary.high_score,
            new_high_score = summary.new_high_score,
            "game over"
        );
        summary
    }
}

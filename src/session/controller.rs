//! A running game session: input gating, AI scheduling and new games.

use std::time::Duration;

use tracing::{debug, info};

use super::layout::BoardLayout;
use crate::ai::{AiAgent, AiPhase};
use crate::core::{GameConfig, GameRng, GameState, Move, PitId, Side};
use crate::rules::{GameResult, MoveResult, RulesEngine, TurnEngine};
use crate::stones::StoneTracker;

/// Owns the single `GameState` of a game and everything that may change it.
///
/// Every mutation goes through `&mut self`, so `apply_move` calls from
/// clicks and from the AI timer are serialized.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    engine: TurnEngine,
    state: GameState,
    stones: StoneTracker,
    layout: BoardLayout,
    ai: AiAgent,
    ai_enabled: bool,
    rng: GameRng,
}

impl Session {
    /// Start a session with a fresh game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config.first_turn);
        Self::from_state(config, state)
    }

    /// Start a session from an arbitrary position.
    ///
    /// A position with an empty row is finished immediately.
    #[must_use]
    pub fn from_state(config: GameConfig, mut state: GameState) -> Self {
        let engine = TurnEngine::new();
        if let Some(harvest) = engine.finish_if_exhausted(&mut state) {
            debug!(?harvest, "starting position was already finished");
        }

        let mut rng = GameRng::new(config.seed).for_context("ai");
        let ai = AiAgent::new(config.ai.side, config.ai.delay(), rng.fork());

        Self {
            ai_enabled: config.ai.enabled,
            stones: StoneTracker::from_board(&state.board),
            layout: BoardLayout::default(),
            config,
            engine,
            state,
            ai,
            rng,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Per-stone locations for animation.
    #[must_use]
    pub fn stones(&self) -> &StoneTracker {
        &self.stones
    }

    /// Board geometry used by `click_at`.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Replace the board geometry.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// The AI's state machine phase.
    #[must_use]
    pub fn ai_phase(&self) -> AiPhase {
        self.ai.phase()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.engine.is_terminal(&self.state)
    }

    /// Throw the current game away and start over.
    pub fn new_game(&mut self) {
        self.state.reset(self.config.first_turn);
        self.stones.reset();
        self.ai = AiAgent::new(self.config.ai.side, self.config.ai.delay(), self.rng.fork());
        info!(first = %self.config.first_turn, ai = self.ai_enabled, "new game");
    }

    /// Turn the AI opponent on or off.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.ai.reset();
        }
        self.ai_enabled = enabled;
        info!(enabled, side = %self.ai.side(), "ai toggled");
    }

    /// Whether the AI is enabled.
    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// Whether `side` is played by the AI.
    #[must_use]
    pub fn is_ai_controlled(&self, side: Side) -> bool {
        self.ai_enabled && self.ai.side() == side
    }

    /// Handle a selection from a human player.
    ///
    /// Returns `None` without calling the engine if the pit does not belong
    /// to the side to move, or that side is played by the AI.
    pub fn click(&mut self, pit: PitId) -> Option<MoveResult> {
        let side = self.state.side_to_move()?;
        if pit.owner() != side || self.is_ai_controlled(side) {
            return None;
        }
        Some(self.play(Move::new(side, pit)))
    }

    /// Handle a pointer click at canvas coordinates.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<MoveResult> {
        let pit = self.layout.pit_at(x, y)?;
        self.click(pit)
    }

    /// Advance the AI's timer to `now` and play its move if one comes due.
    pub fn tick(&mut self, now: Duration) -> Option<MoveResult> {
        if !self.ai_enabled {
            return None;
        }
        let mv = self.ai.poll(&self.engine, &self.state, now)?;
        Some(self.play(mv))
    }

    fn play(&mut self, mv: Move) -> MoveResult {
        let result = self.engine.apply_move(&mut self.state, mv.pit, mv.side);
        self.stones.apply(&result);

        if result.harvest.is_some() {
            info!(
                result = ?self.result(),
                left = result.scores[Side::Left],
                right = result.scores[Side::Right],
                "game finished"
            );
        }
        result
    }
}

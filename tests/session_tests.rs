//! Session behaviour: input gating, the AI timer and new games.

use std::time::Duration;

use pebble_mancala::ai::AiPhase;
use pebble_mancala::core::{Board, GameConfig, GameState, PitId, Row, Side, Turn};
use pebble_mancala::rules::{GameResult, RulesEngine, TurnEngine};
use pebble_mancala::session::{BoardLayout, Session};
use pebble_mancala::stones::StoneTracker;

const DELAY: Duration = Duration::from_millis(1000);

fn top(col: usize) -> PitId {
    PitId::new(Row::Top, col)
}

fn bottom(col: usize) -> PitId {
    PitId::new(Row::Bottom, col)
}

fn ai_session() -> Session {
    Session::new(GameConfig::default().with_ai_enabled(true).with_ai_delay(DELAY))
}

/// Right moves twice (extra turn, then an ordinary move) to hand the turn to left.
fn pass_to_left(session: &mut Session) {
    assert!(session.click(bottom(2)).is_some());
    assert!(session.click(bottom(0)).is_some());
    assert_eq!(session.state().turn, Turn::Side(Side::Left));
}

#[test]
fn test_click_only_accepts_side_to_move() {
    let mut session = Session::new(GameConfig::default());

    assert!(session.click(top(0)).is_none());
    assert_eq!(session.state(), &GameState::new(Side::Right));

    let result = session.click(bottom(2)).expect("right may move");
    assert!(result.extra_turn);
    assert!(session.stones().matches(&session.state().board));
}

#[test]
fn test_click_on_empty_pit_is_rejected() {
    let mut session = Session::new(GameConfig::default());
    session.click(bottom(2));
    let before = session.state().clone();

    let result = session.click(bottom(2)).expect("reaches the engine");

    assert!(result.is_noop());
    assert_eq!(session.state(), &before);
}

#[test]
fn test_click_at_uses_layout() {
    let mut session = Session::new(GameConfig::default());
    let (x, y) = session.layout().pit_center(bottom(2));

    let result = session.click_at(x, y).expect("hit bottom[2]");
    assert_eq!(result.pit, bottom(2));

    assert!(session.click_at(0.0, 0.0).is_none());
}

#[test]
fn test_click_at_follows_replaced_layout() {
    let mut session = Session::new(GameConfig::default());
    let layout = BoardLayout {
        pit_radius: 20.0,
        x_margin: 5.0,
        y_margin: 10.0,
        y_offset: 0.0,
    };
    let (x, y) = layout.pit_center(bottom(2));

    // The default geometry puts nothing at this point.
    assert!(session.layout().pit_at(x, y).is_none());

    session.set_layout(layout);
    assert_eq!(session.layout(), &layout);

    let result = session.click_at(x, y).expect("hit bottom[2]");
    assert_eq!(result.pit, bottom(2));
}

#[test]
fn test_ai_side_ignores_clicks() {
    let mut session = ai_session();
    pass_to_left(&mut session);

    assert!(session.is_ai_controlled(Side::Left));
    assert!(session.click(top(0)).is_none());
    assert_eq!(session.state().move_count(), 2);
}

#[test]
fn test_ai_waits_for_delay() {
    let mut session = ai_session();
    let start = Duration::from_secs(5);

    // Not the AI's turn yet.
    assert!(session.tick(start).is_none());
    assert_eq!(session.ai_phase(), AiPhase::Idle);

    pass_to_left(&mut session);

    assert!(session.tick(start).is_none());
    assert_eq!(session.ai_phase(), AiPhase::Deciding { due: start + DELAY });

    assert!(session.tick(start + DELAY - Duration::from_millis(1)).is_none());

    let result = session.tick(start + DELAY).expect("ai moves");
    assert_eq!(result.side, Side::Left);
    assert!(!result.is_noop());
    assert_eq!(session.ai_phase(), AiPhase::Idle);
    assert!(session.stones().matches(&session.state().board));
}

#[test]
fn test_disabling_ai_cancels_decision() {
    let mut session = ai_session();
    pass_to_left(&mut session);
    session.tick(Duration::ZERO);

    session.set_ai_enabled(false);

    assert_eq!(session.ai_phase(), AiPhase::Idle);
    assert!(session.tick(DELAY * 10).is_none());
    assert!(!session.is_ai_controlled(Side::Left));
    assert!(session.click(top(0)).is_some());
}

#[test]
fn test_new_game_resets_everything() {
    let mut session = ai_session();
    pass_to_left(&mut session);
    session.tick(Duration::ZERO);

    session.new_game();

    assert_eq!(session.state(), &GameState::new(Side::Right));
    assert_eq!(session.stones(), &StoneTracker::new());
    assert_eq!(session.ai_phase(), AiPhase::Idle);
    assert!(session.ai_enabled());
}

#[test]
fn test_from_state_finishes_exhausted_position() {
    let board = Board::from_parts([1, 1, 1, 1, 1, 1], [0; 6], 20, 22);
    let session = Session::from_state(GameConfig::default(), GameState::from_board(board, Side::Right));

    assert!(session.state().game_over);
    assert_eq!(session.result(), Some(GameResult::Winner(Side::Left)));
    assert_eq!(session.state().board.score(Side::Left), 26);
    assert!(session.stones().matches(&session.state().board));
}

#[test]
fn test_full_game_against_ai() {
    let engine = TurnEngine::new();
    let mut session = ai_session();
    let mut now = Duration::ZERO;
    let mut moves = 0;

    while let Some(side) = session.state().side_to_move() {
        if session.is_ai_controlled(side) {
            assert!(session.tick(now).is_none());
            now += DELAY;
            assert!(session.tick(now).is_some());
        } else {
            let pit = engine.legal_moves(session.state(), side)[0];
            assert!(session.click(pit).is_some());
        }
        assert!(session.stones().matches(&session.state().board));
        moves += 1;
        assert!(moves < 500, "game did not terminate");
    }

    assert!(session.result().is_some());
    assert!(session.click(bottom(0)).is_none());
    assert!(session.tick(now + DELAY).is_none());
}

#[test]
fn test_sessions_with_same_seed_agree() {
    let play = || {
        let mut session = ai_session();
        pass_to_left(&mut session);
        session.tick(Duration::ZERO);
        session.tick(DELAY).map(|r| r.pit)
    };

    assert_eq!(play(), play());
}

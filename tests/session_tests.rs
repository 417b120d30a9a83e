//! Session flow tests.
//!
//! The session owns the ordering guarantees: cards recompose before marks
//! are interpreted, and marks never survive a regeneration.

use bingo_engine::core::{CardOptions, GridSize, WinPattern};
use bingo_engine::pool::PhrasePool;
use bingo_engine::session::{BingoCall, GameSession};

fn small_options(seed: &str) -> CardOptions {
    CardOptions {
        size: GridSize::Three,
        free: true,
        pattern: WinPattern::Line,
        seed: seed.to_string(),
    }
}

#[test]
fn test_same_seed_and_options_reproduce_the_card() {
    let a = GameSession::new(PhrasePool::default(), small_options("episode-42"));
    let b = GameSession::with_link_seed(
        PhrasePool::default(),
        small_options(""),
        Some("episode-42"),
    );

    assert_eq!(a.seed(), b.seed());
    assert_eq!(a.card(), b.card());
}

#[test]
fn test_regenerate_clears_marks() {
    let mut session = GameSession::new(PhrasePool::default(), small_options(""));
    session.toggle_mark(0);
    session.toggle_mark(1);
    assert_eq!(session.marks().len(), 2);

    session.regenerate();
    assert!(session.marks().is_empty());
    assert_eq!(session.card().len(), 9);
}

#[test]
fn test_set_options_recomposes_and_clears() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    session.toggle_mark(0);

    let mut options = small_options("123456");
    options.size = GridSize::Five;
    session.set_options(options);

    assert!(session.marks().is_empty());
    assert_eq!(session.card().len(), 25);
    assert_eq!(session.free_index(), Some(12));
}

#[test]
fn test_pool_edits_recompose() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    session.toggle_mark(3);

    session.set_pool(PhrasePool::new((0..20).map(|i| format!("fresh {i}"))));

    assert!(session.marks().is_empty());
    assert!(session
        .card()
        .iter()
        .filter_map(|c| c.phrase())
        .all(|p| p.starts_with("fresh")));
}

#[test]
fn test_free_cell_cannot_be_toggled() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    let free = session.free_index().unwrap();

    session.toggle_mark(free);
    assert!(session.marks().is_empty());
}

#[test]
fn test_out_of_range_toggle_ignored() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    session.toggle_mark(9);
    session.toggle_mark(500);
    assert!(session.marks().is_empty());
}

#[test]
fn test_valid_call_credits_the_caller() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    for i in [0, 1, 2] {
        session.toggle_mark(i);
    }
    assert!(session.has_bingo());

    assert_eq!(session.call_bingo("  Dana  "), BingoCall::Valid);
    assert_eq!(session.leaderboard().wins("Dana"), Some(1));

    // Calling again keeps crediting; the host decides when to re-deal.
    assert_eq!(session.call_bingo("dana"), BingoCall::Valid);
    assert_eq!(session.leaderboard().wins("Dana"), Some(2));
}

#[test]
fn test_invalid_call_changes_nothing() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    session.toggle_mark(0);

    assert_eq!(session.call_bingo("Dana"), BingoCall::Invalid);
    assert!(session.leaderboard().is_empty());
}

#[test]
fn test_valid_call_without_name_skips_the_board() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));
    for i in [0, 1, 2] {
        session.toggle_mark(i);
    }

    assert_eq!(session.call_bingo("   "), BingoCall::Valid);
    assert!(session.leaderboard().is_empty());
}

#[test]
fn test_free_cell_completes_center_line() {
    let mut session = GameSession::new(PhrasePool::default(), small_options("123456"));

    // Middle row is 3,4,5 with FREE at 4; marking the two ends suffices.
    session.toggle_mark(3);
    session.toggle_mark(5);
    assert!(session.has_bingo());
}

#[test]
fn test_short_pool_session_still_runs() {
    let pool = PhrasePool::new(["a", "b", "c"]);
    let mut session = GameSession::new(pool, small_options("123456"));

    assert!(session.card().is_short());
    assert_eq!(session.card().len(), 4);

    // Marks live in the geometric domain [0, size²), not the short card's
    // cell list, so blackout stays reachable.
    let mut options = small_options("123456");
    options.pattern = WinPattern::Blackout;
    session.set_options(options);
    for i in 0..9 {
        session.toggle_mark(i);
    }
    assert!(session.has_bingo());
}

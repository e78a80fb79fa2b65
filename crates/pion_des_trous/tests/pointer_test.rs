//! Tests for pointer hit-testing and hover tracking against a live game.

use pion_des_trous::{
    Game, HoverState, HoverTracker, Location, PointerMapper, PointerTarget, classify,
};

#[test]
fn test_grid_line_is_a_miss() {
    let game = Game::default();
    // ceil(25 / 10) = 3, an odd grid line
    assert_eq!(classify(game.board(), 25.0, 25.0, 10.0), PointerTarget::Miss);
}

#[test]
fn test_first_hole() {
    let game = Game::default();
    assert_eq!(
        classify(game.board(), 20.0, 20.0, 10.0),
        PointerTarget::Hole(Location::new(0, 0))
    );
}

#[test]
fn test_played_hole_becomes_pawn() {
    let mut game = Game::default();
    let mapper = PointerMapper::new(20.0);

    let target = game.locate(&mapper, 75.0, 39.0);
    assert_eq!(target, PointerTarget::Hole(Location::new(1, 0)));

    let loc = target.hole().unwrap();
    game.play(loc.col, loc.row).unwrap();
    assert_eq!(
        game.locate(&mapper, 75.0, 39.0),
        PointerTarget::Pawn(Location::new(1, 0))
    );
    assert_eq!(game.locate(&mapper, 75.0, 39.0).hole(), None);
}

#[test]
fn test_last_hole_and_beyond() {
    let game = Game::default();
    let unit = 10.0;
    // Hole 13 sits on grid line 28
    assert_eq!(
        classify(game.board(), 280.0, 280.0, unit),
        PointerTarget::Hole(Location::new(13, 13))
    );
    // Grid line 29 is the border
    assert_eq!(classify(game.board(), 285.0, 280.0, unit), PointerTarget::Miss);
    assert_eq!(classify(game.board(), 300.0, 280.0, unit), PointerTarget::Miss);
}

#[test]
fn test_hover_session() {
    let mut game = Game::default();
    let mapper = PointerMapper::new(10.0);
    let mut hover = HoverTracker::new();

    // Two motion events inside the same hole produce one event
    let first = hover.track(game.locate(&mapper, 18.0, 18.0));
    let second = hover.track(game.locate(&mapper, 19.5, 12.0));
    assert_eq!(first, Some(PointerTarget::Hole(Location::new(0, 0))));
    assert_eq!(second, None);

    // Clicking plays the hovered hole; the next motion sees a pawn
    let loc = hover.hovered().unwrap();
    game.play(loc.col, loc.row).unwrap();
    let next = hover.track(game.locate(&mapper, 19.0, 19.0));
    assert_eq!(next, Some(PointerTarget::Pawn(Location::new(0, 0))));
    assert_eq!(hover.state(), HoverState::Idle);
}

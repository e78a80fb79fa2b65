//! Tests for the game façade.

use pion_des_trous::{Board, Game, GameConfig, GameError, Location, Move, Side, TurnEngine};

fn snapshot(game: &Game) -> (Board, u32, u32, Side) {
    (
        game.board().clone(),
        game.pawns_remaining(Side::Light),
        game.pawns_remaining(Side::Dark),
        game.current_side(),
    )
}

#[test]
fn test_fresh_game_is_empty() {
    let game = Game::default();
    assert_eq!(game.board_size(), 14);
    assert_eq!(game.current_side(), Side::Light);
    assert!(!game.started());
    for row in 0..14 {
        for col in 0..14 {
            assert_eq!(game.is_empty(col, row), Ok(true));
            assert_eq!(game.opponent_at(col, row), Ok(Side::None));
        }
    }
}

#[test]
fn test_new_rejects_zero_size() {
    assert_eq!(
        Game::new(0),
        Err(GameError::InvalidDimension { columns: 0, rows: 0 })
    );
}

#[test]
fn test_play_updates_exactly_one_hole() {
    let mut game = Game::default();
    let before = game.board().clone();

    let played = game.play(3, 7).expect("Valid play");
    assert_eq!(played, Move::new(Side::Light, Location::new(3, 7)));

    assert_eq!(game.is_empty(3, 7), Ok(false));
    assert_eq!(game.opponent_at(3, 7), Ok(Side::Light));
    assert_eq!(game.current_side(), Side::Dark);
    assert_eq!(game.pawns_remaining(Side::Light), 41);
    assert_eq!(game.pawns_remaining(Side::Dark), 42);
    assert!(game.started());

    let changed: Vec<Location> = before
        .locations()
        .filter(|l| before.piece_at(l.col, l.row) != game.piece_at(l.col, l.row))
        .collect();
    assert_eq!(changed, vec![Location::new(3, 7)]);
}

#[test]
fn test_occupied_hole_rejected_atomically() {
    let mut game = Game::default();
    game.play(5, 5).unwrap();
    let before = snapshot(&game);

    assert_eq!(
        game.play(5, 5),
        Err(GameError::CellOccupied { col: 5, row: 5 })
    );
    assert_eq!(snapshot(&game), before);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_out_of_bounds_rejected_atomically() {
    let mut game = Game::new(4).unwrap();
    let before = snapshot(&game);

    assert_eq!(
        game.play(4, 0),
        Err(GameError::OutOfBounds { col: 4, row: 0 })
    );
    assert_eq!(
        game.play(0, 100),
        Err(GameError::OutOfBounds { col: 0, row: 100 })
    );
    assert_eq!(snapshot(&game), before);
    assert!(game.is_empty(4, 0).is_err());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(6).unwrap();
    let mut plays = 0;
    for row in 0..6 {
        for col in 0..6 {
            game.play(col, row).unwrap();
            plays += 1;
            let expected = if plays % 2 == 0 { Side::Light } else { Side::Dark };
            assert_eq!(game.current_side(), expected);
        }
    }
    assert_eq!(game.history().len(), 36);
    assert_eq!(game.opponent_at(0, 0), Ok(Side::Light));
    assert_eq!(game.opponent_at(1, 0), Ok(Side::Dark));
}

#[test]
fn test_exhausted_side_cannot_play() {
    let turns = TurnEngine::with_supply(2, Side::Light).unwrap();
    let mut game = Game::with_turns(5, turns).unwrap();
    for col in 0..4 {
        game.play(col, 0).unwrap();
    }
    assert!(game.is_exhausted());
    assert_eq!(game.pawns_remaining(Side::Light), 0);
    assert_eq!(game.pawns_remaining(Side::Dark), 0);

    let before = snapshot(&game);
    for (col, row) in [(4, 4), (0, 3), (2, 2)] {
        assert_eq!(
            game.play(col, row),
            Err(GameError::NoPawnsLeft { side: Side::Light })
        );
    }
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_full_default_supply() {
    let mut game = Game::default();
    let holes: Vec<Location> = game.board().locations().take(84).collect();
    for loc in &holes {
        game.play(loc.col, loc.row).unwrap();
    }
    assert!(game.is_exhausted());
    assert_eq!(game.board().occupied(), 84);

    let spare = game.board().locations().nth(84).unwrap();
    assert_eq!(
        game.play(spare.col, spare.row),
        Err(GameError::NoPawnsLeft { side: Side::Light })
    );
}

#[test]
fn test_from_config() {
    let config = GameConfig::new(7, 3, Side::Dark).unwrap();
    let mut game = Game::from_config(&config).unwrap();
    assert_eq!(game.board_size(), 7);
    assert_eq!(game.current_side(), Side::Dark);
    assert_eq!(game.pawns_remaining(Side::Light), 3);

    game.play(6, 6).unwrap();
    assert_eq!(game.opponent_at(6, 6), Ok(Side::Dark));
    assert_eq!(game.current_side(), Side::Light);
}

#[test]
fn test_move_serializes_to_json() {
    let mut game = Game::new(3).unwrap();
    let played = game.play(2, 1).unwrap();
    let json = serde_json::to_value(played).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "side": "Light", "to": { "col": 2, "row": 1 } })
    );
}

use games::{GameResult, GameState, Go, GoMove, Grid, PlayError, Player, Pos};

fn place(game: &mut Go, row: usize, col: usize) {
    game.play(GoMove::Place(Pos::new(row, col))).unwrap();
}

fn pass(game: &mut Go) {
    game.play(GoMove::Pass).unwrap();
}

#[test]
fn exactly_one_pass_action() {
    let game = Go::new(3, 3);
    let actions = game.legal_actions();
    let passes = actions
        .iter()
        .filter(|a| matches!(a, GoMove::Pass))
        .count();
    assert_eq!(passes, 1);

    // A fresh board offers every cell plus the pass.
    assert_eq!(actions.len(), 10);
    for (i, a) in actions.iter().enumerate() {
        assert!(!actions[i + 1..].contains(a));
    }
}

#[test]
fn clone_is_a_deep_copy() {
    let original = Go::new(3, 3);
    let mut copy = original.clone();
    place(&mut copy, 0, 0);

    assert_eq!(original.grid()[Pos::new(0, 0)], None);
    assert_eq!(original, Go::new(3, 3));

    // Replaying the same actions on both sides converges again.
    let mut replay = original.clone();
    place(&mut replay, 0, 0);
    assert_eq!(replay, copy);
}

#[test]
fn action_codec_is_a_bijection() {
    let game = Go::new(3, 4);
    for index in 0..game.action_size() {
        assert_eq!(game.encode(game.decode(index)), index);
    }
    for action in game.legal_actions() {
        assert_eq!(game.decode(game.encode(action)), action);
    }
    assert_eq!(game.encode(GoMove::Pass), 12);
}

#[test]
fn two_consecutive_passes_end_the_game() {
    let mut game = Go::new(3, 3);
    pass(&mut game);
    assert_eq!(game.result(), GameResult::Ongoing);
    pass(&mut game);
    // Komi decides the empty board.
    assert_eq!(game.result(), GameResult::Winner(Player::Two));
    assert_eq!(game.play(GoMove::Pass), Err(PlayError::GameOver));
}

#[test]
fn a_move_between_passes_keeps_the_game_going() {
    let mut game = Go::new(3, 3);
    pass(&mut game);
    place(&mut game, 1, 1);
    pass(&mut game);
    assert_eq!(game.result(), GameResult::Ongoing);
    pass(&mut game);
    assert_eq!(game.result(), GameResult::Winner(Player::Two));
}

#[test]
fn capture_removes_only_the_first_surrounded_group() {
    let mut game = Go::with_komi(3, 3, 0.0);
    place(&mut game, 0, 1); // player 1
    place(&mut game, 1, 1); // player 2
    place(&mut game, 1, 0);
    place(&mut game, 2, 2);
    place(&mut game, 1, 2);
    place(&mut game, 2, 0);
    // Surrounds (1,1), (2,0) and (2,2) at once; the scan removes only the
    // first dead group it meets.
    place(&mut game, 2, 1);

    assert_eq!(game.grid()[Pos::new(1, 1)], None);
    assert_eq!(game.grid()[Pos::new(2, 1)], Some(Player::One));
    assert_eq!(game.grid()[Pos::new(2, 0)], Some(Player::Two));
    assert_eq!(game.grid()[Pos::new(2, 2)], Some(Player::Two));
}

#[test]
fn recapturing_the_ko_cell_is_rejected() {
    let mut game = Go::with_komi(3, 3, 0.0);
    place(&mut game, 0, 1);
    place(&mut game, 1, 1);
    place(&mut game, 1, 0);
    place(&mut game, 2, 2);
    place(&mut game, 1, 2);
    place(&mut game, 2, 0);
    place(&mut game, 2, 1); // captures (1,1)

    // Taking straight back would recreate the position before the capture.
    let before = game.clone();
    assert!(!game
        .legal_actions()
        .contains(&GoMove::Place(Pos::new(1, 1))));
    assert_eq!(
        game.play(GoMove::Place(Pos::new(1, 1))),
        Err(PlayError::RepeatsPosition)
    );
    assert_eq!(game, before);
}

#[test]
fn own_previous_move_cell_is_guarded() {
    let mut grid = Grid::new(3, 3);
    grid[Pos::new(0, 1)] = Some(Player::Two);
    grid[Pos::new(1, 0)] = Some(Player::Two);
    grid[Pos::new(1, 2)] = Some(Player::Two);
    let mut game = Go::from_position(grid, Player::One, 0.0);

    place(&mut game, 1, 1);
    place(&mut game, 2, 1); // captures the lone stone at (1,1)

    assert_eq!(game.grid()[Pos::new(1, 1)], None);
    assert_eq!(
        game.play(GoMove::Place(Pos::new(1, 1))),
        Err(PlayError::RepeatsPosition)
    );
}

#[test]
fn suicide_without_capture_is_illegal() {
    let mut game = Go::new(3, 3);
    place(&mut game, 0, 1); // player 1
    place(&mut game, 2, 2); // player 2
    place(&mut game, 1, 0); // player 1

    // (0,0) now has no liberties for player 2 and captures nothing.
    let before = game.clone();
    assert!(!game
        .legal_actions()
        .contains(&GoMove::Place(Pos::new(0, 0))));
    assert_eq!(
        game.play(GoMove::Place(Pos::new(0, 0))),
        Err(PlayError::Suicide)
    );
    assert_eq!(game, before);
}

#[test]
fn illegal_requests_leave_the_state_untouched() {
    let mut game = Go::new(3, 3);
    place(&mut game, 1, 1);
    let before = game.clone();

    assert_eq!(
        game.play(GoMove::Place(Pos::new(1, 1))),
        Err(PlayError::Occupied)
    );
    assert_eq!(
        game.play(GoMove::Place(Pos::new(9, 9))),
        Err(PlayError::OutOfBounds)
    );
    assert_eq!(game, before);
}

#[test]
fn influence_scoring_and_komi() {
    let mut grid = Grid::new(3, 3);
    grid[Pos::new(0, 0)] = Some(Player::One);
    grid[Pos::new(0, 1)] = Some(Player::One);

    // Two stones plus three influenced empty points.
    let game = Go::from_position(grid.clone(), Player::One, 4.5);
    assert_eq!(game.score(Player::One), 5.0);
    assert_eq!(game.score(Player::Two), 4.5);

    let mut game = Go::from_position(grid.clone(), Player::One, 4.5);
    pass(&mut game);
    pass(&mut game);
    assert_eq!(game.result(), GameResult::Winner(Player::One));

    // An exact tie is a draw.
    let mut tied = Go::from_position(grid, Player::One, 5.0);
    pass(&mut tied);
    pass(&mut tied);
    assert_eq!(tied.result(), GameResult::Draw);
}

#[test]
fn encoded_board_channels() {
    let mut game = Go::with_komi(2, 2, 0.0);
    place(&mut game, 0, 0); // player 1
    place(&mut game, 1, 1); // player 2

    let board = game.encoded_board();
    assert_eq!(board.len(), 12);
    // Channel 0: player 2, channel 1: empty, channel 2: player 1.
    assert_eq!(&board[0..4], &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(&board[4..8], &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(&board[8..12], &[1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn legality_mask_matches_legal_actions() {
    let mut game = Go::new(3, 3);
    place(&mut game, 1, 1);

    let mask = game.encoded_actions();
    let actions = game.legal_actions();
    assert_eq!(mask.len(), game.action_size());
    assert_eq!(
        mask.iter().filter(|&&m| m == 1.0).count(),
        actions.len()
    );
    for action in actions {
        assert_eq!(mask[game.encode(action)], 1.0);
    }
}

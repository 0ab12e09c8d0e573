use games::{chebyshev, Grid, Player, Pos};

#[test]
fn neighbourhoods_respect_the_edges() {
    let grid = Grid::new(4, 4);
    assert_eq!(grid.neighbors4(Pos::new(0, 0)).len(), 2);
    assert_eq!(grid.neighbors4(Pos::new(1, 1)).len(), 4);
    assert_eq!(grid.neighbors8(Pos::new(0, 0)).len(), 3);
    assert_eq!(grid.neighbors8(Pos::new(1, 1)).len(), 8);
    assert_eq!(grid.jump_targets(Pos::new(0, 0)).len(), 5);
    assert_eq!(grid.jump_targets(Pos::new(2, 2)).len(), 7);
}

#[test]
fn jump_targets_sit_exactly_two_away() {
    let grid = Grid::new(5, 5);
    let center = Pos::new(2, 2);
    let targets = grid.jump_targets(center);
    assert_eq!(targets.len(), 16);
    for target in targets {
        assert_eq!(chebyshev(center, target), 2);
    }
}

#[test]
fn canonical_flip_swaps_the_colours() {
    let mut grid = Grid::new(2, 2);
    grid[Pos::new(0, 0)] = Some(Player::One);
    grid[Pos::new(1, 1)] = Some(Player::Two);

    assert_eq!(grid.canonical(Player::One), grid);

    let flipped = grid.canonical(Player::Two);
    assert_eq!(flipped[Pos::new(0, 0)], Some(Player::Two));
    assert_eq!(flipped[Pos::new(1, 1)], Some(Player::One));
    assert_eq!(flipped[Pos::new(0, 1)], None);

    // Flipping twice restores the original encoding.
    assert_eq!(grid.encoded(), flipped.canonical(Player::Two).encoded());
}

#[test]
fn indices_round_trip() {
    let grid = Grid::new(3, 4);
    for index in 0..12 {
        assert_eq!(grid.index_of(grid.pos_of(index)), index);
    }
}

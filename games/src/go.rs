use crate::{
    error::PlayError,
    game::{GameResult, GameState},
    grid::{Grid, Pos},
    player::Player,
};

/// Fixed compensation added to the second player's score.
pub const DEFAULT_KOMI: f32 = 5.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoMove {
    Place(Pos),
    Pass,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Go {
    grid: Grid,
    to_move: Player,
    score: [f32; 2],
    result: GameResult,
    /// Board as it stood right after the most recent placement, before the
    /// capture was lifted. Consulted by the positional-ko check.
    prior_grid: Option<Grid>,
    last_move: [Option<Pos>; 2],
    passes: [bool; 2],
    komi: f32,
}

impl Go {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_komi(rows, cols, DEFAULT_KOMI)
    }

    pub fn with_komi(rows: usize, cols: usize, komi: f32) -> Self {
        let mut game = Go {
            grid: Grid::new(rows, cols),
            to_move: Player::One,
            score: [0.0; 2],
            result: GameResult::Ongoing,
            prior_grid: None,
            last_move: [None, None],
            passes: [false, false],
            komi,
        };
        game.update_score();
        game
    }

    /// Build a state from an externally supplied position. Scores are
    /// recomputed; pass and ko bookkeeping start clean.
    pub fn from_position(grid: Grid, to_move: Player, komi: f32) -> Self {
        let mut game = Go {
            grid,
            to_move,
            score: [0.0; 2],
            result: GameResult::Ongoing,
            prior_grid: None,
            last_move: [None, None],
            passes: [false, false],
            komi,
        };
        game.update_score();
        game
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    fn execute_pass(&mut self) {
        self.passes[self.to_move.index()] = true;
        self.to_move = self.to_move.opponent();
        // Passing lifts the incoming mover's own-repeat guard.
        self.last_move[self.to_move.index()] = None;
        self.update_score();
        if self.passes[0] && self.passes[1] {
            self.result = self.final_result();
        }
    }

    fn execute_place(&mut self, pos: Pos) -> Result<(), PlayError> {
        self.check_placement(pos)?;
        let mover = self.to_move;
        self.passes = [false, false];
        self.grid[pos] = Some(mover);
        self.prior_grid = Some(self.grid.clone());
        self.last_move[mover.index()] = Some(pos);
        remove_first_dead_group(&mut self.grid, mover.opponent());
        self.to_move = mover.opponent();
        self.update_score();
        Ok(())
    }

    fn check_placement(&self, pos: Pos) -> Result<(), PlayError> {
        match self.grid.get(pos) {
            None => return Err(PlayError::OutOfBounds),
            Some(Some(_)) => return Err(PlayError::Occupied),
            Some(None) => {}
        }
        if self.last_move[self.to_move.index()] == Some(pos) {
            return Err(PlayError::RepeatsPosition);
        }
        if self.group_has_liberties(pos) {
            return Ok(());
        }
        if !self.placement_captures(pos) {
            return Err(PlayError::Suicide);
        }
        if self.recreates_prior(pos) {
            return Err(PlayError::RepeatsPosition);
        }
        Ok(())
    }

    /// Would the mover's group still breathe after placing at `pos`,
    /// captures not considered?
    fn group_has_liberties(&self, pos: Pos) -> bool {
        let mut grid = self.grid.clone();
        grid[pos] = Some(self.to_move);
        let group = group_at(&grid, pos);
        has_liberties(&grid, &group)
    }

    /// Does placing at `pos` kill an opposing group?
    fn placement_captures(&self, pos: Pos) -> bool {
        let mut grid = self.grid.clone();
        grid[pos] = Some(self.to_move);
        remove_first_dead_group(&mut grid, self.to_move.opponent())
    }

    fn recreates_prior(&self, pos: Pos) -> bool {
        self.prior_grid
            .as_ref()
            .map_or(false, |prior| prior[pos] == Some(self.to_move))
    }

    /// Stone count plus influence territory; komi goes to the second
    /// player. An empty point scores for the colour whose signed
    /// 4-neighbour sum is strictly positive or negative.
    fn update_score(&mut self) {
        let mut score = [0.0, self.komi];
        for pos in self.grid.positions() {
            match self.grid[pos] {
                Some(player) => score[player.index()] += 1.0,
                None => {
                    let influence: i32 = self
                        .grid
                        .neighbors4(pos)
                        .into_iter()
                        .map(|n| self.grid[n].map_or(0, |p| i32::from(p.sign())))
                        .sum();
                    if influence > 0 {
                        score[Player::One.index()] += 1.0;
                    } else if influence < 0 {
                        score[Player::Two.index()] += 1.0;
                    }
                }
            }
        }
        self.score = score;
    }

    fn final_result(&self) -> GameResult {
        if self.score[0] > self.score[1] {
            GameResult::Winner(Player::One)
        } else if self.score[0] < self.score[1] {
            GameResult::Winner(Player::Two)
        } else {
            GameResult::Draw
        }
    }
}

impl GameState for Go {
    type Action = GoMove;

    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn action_size(&self) -> usize {
        self.grid.rows() * self.grid.cols() + 1
    }

    fn encode(&self, action: GoMove) -> usize {
        match action {
            GoMove::Place(pos) => self.grid.index_of(pos),
            GoMove::Pass => self.grid.rows() * self.grid.cols(),
        }
    }

    fn decode(&self, index: usize) -> GoMove {
        if index == self.grid.rows() * self.grid.cols() {
            GoMove::Pass
        } else {
            GoMove::Place(self.grid.pos_of(index))
        }
    }

    fn legal_actions(&self) -> Vec<GoMove> {
        let mut actions: Vec<GoMove> = self
            .grid
            .positions()
            .filter(|&pos| self.check_placement(pos).is_ok())
            .map(GoMove::Place)
            .collect();
        actions.push(GoMove::Pass);
        actions
    }

    fn play(&mut self, action: GoMove) -> Result<(), PlayError> {
        if self.result.is_over() {
            return Err(PlayError::GameOver);
        }
        match action {
            GoMove::Pass => {
                self.execute_pass();
                Ok(())
            }
            GoMove::Place(pos) => self.execute_place(pos),
        }
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn score(&self, player: Player) -> f32 {
        self.score[player.index()]
    }
}

/// Flood fill of the same-coloured group containing `pos` (4-adjacency).
fn group_at(grid: &Grid, pos: Pos) -> Vec<Pos> {
    let color = grid[pos];
    let mut seen = vec![false; grid.rows() * grid.cols()];
    let mut group = Vec::new();
    let mut stack = vec![pos];
    while let Some(p) = stack.pop() {
        let i = grid.index_of(p);
        if seen[i] {
            continue;
        }
        seen[i] = true;
        group.push(p);
        for n in grid.neighbors4(p) {
            if grid[n] == color && !seen[grid.index_of(n)] {
                stack.push(n);
            }
        }
    }
    group
}

fn has_liberties(grid: &Grid, group: &[Pos]) -> bool {
    group
        .iter()
        .any(|&p| grid.neighbors4(p).into_iter().any(|n| grid[n].is_none()))
}

/// Remove the first zero-liberty `color` group in row-major scan order.
/// A second group that also ran out of liberties stays on the board.
fn remove_first_dead_group(grid: &mut Grid, color: Player) -> bool {
    for i in 0..grid.rows() * grid.cols() {
        let pos = grid.pos_of(i);
        if grid[pos] != Some(color) {
            continue;
        }
        let group = group_at(grid, pos);
        if !has_liberties(grid, &group) {
            for p in group {
                grid[p] = None;
            }
            return true;
        }
    }
    false
}

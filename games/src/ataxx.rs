use arrayvec::ArrayVec;

use crate::{
    error::PlayError,
    game::{GameResult, GameState},
    grid::{chebyshev, Grid, Pos},
    player::Player,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtaxxMove {
    pub from: Pos,
    pub to: Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ataxx {
    grid: Grid,
    to_move: Player,
    score: [f32; 2],
    result: GameResult,
}

impl Ataxx {
    /// Starting position: each player holds one pair of opposite corners.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Grid::new(rows, cols);
        grid[Pos::new(0, 0)] = Some(Player::Two);
        grid[Pos::new(rows - 1, cols - 1)] = Some(Player::Two);
        grid[Pos::new(rows - 1, 0)] = Some(Player::One);
        grid[Pos::new(0, cols - 1)] = Some(Player::One);
        let mut game = Ataxx {
            grid,
            to_move: Player::One,
            score: [0.0; 2],
            result: GameResult::Ongoing,
        };
        game.update_score();
        game
    }

    /// Build a state from an externally supplied position. The score is
    /// recomputed and the terminal rules are evaluated immediately, so a
    /// moveless or decided position arrives already settled.
    pub fn from_position(grid: Grid, to_move: Player) -> Self {
        let mut game = Ataxx {
            grid,
            to_move,
            score: [0.0; 2],
            result: GameResult::Ongoing,
        };
        game.update_score();
        game.check_terminal();
        game
    }

    /// Empty walk destinations of a piece: the free 8-neighbourhood.
    pub fn walks_from(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        self.grid
            .neighbors8(pos)
            .into_iter()
            .filter(|&n| self.grid[n].is_none())
            .collect()
    }

    /// Empty jump destinations of a piece: free cells at Chebyshev
    /// distance exactly 2.
    pub fn jumps_from(&self, pos: Pos) -> ArrayVec<Pos, 16> {
        self.grid
            .jump_targets(pos)
            .into_iter()
            .filter(|&n| self.grid[n].is_none())
            .collect()
    }

    pub fn pieces(&self, player: Player) -> Vec<Pos> {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos] == Some(player))
            .collect()
    }

    fn has_moves(&self, player: Player) -> bool {
        self.pieces(player)
            .into_iter()
            .any(|pos| !self.walks_from(pos).is_empty() || !self.jumps_from(pos).is_empty())
    }

    fn execute_move(&mut self, mv: AtaxxMove) -> Result<(), PlayError> {
        let AtaxxMove { from, to } = mv;
        let mover = self.to_move;
        if !self.grid.contains(from) || !self.grid.contains(to) {
            return Err(PlayError::OutOfBounds);
        }
        if self.grid[from] != Some(mover) {
            return Err(PlayError::NotYourPiece);
        }
        if self.grid[to].is_some() {
            return Err(PlayError::Occupied);
        }
        match chebyshev(from, to) {
            1 => self.grid[to] = Some(mover),
            2 => {
                self.grid[to] = Some(mover);
                self.grid[from] = None;
            }
            _ => return Err(PlayError::BadDistance),
        }
        self.convert_neighbors(to);
        self.update_score();
        self.check_terminal();
        self.to_move = mover.opponent();
        Ok(())
    }

    /// The placed piece converts every 8-adjacent opposing piece.
    fn convert_neighbors(&mut self, pos: Pos) {
        let mover = self.to_move;
        for n in self.grid.neighbors8(pos) {
            if self.grid[n] == Some(mover.opponent()) {
                self.grid[n] = Some(mover);
            }
        }
    }

    fn update_score(&mut self) {
        self.score = [
            self.grid.count(Player::One) as f32,
            self.grid.count(Player::Two) as f32,
        ];
    }

    fn check_terminal(&mut self) {
        if self.grid.count(Player::One) == 0 {
            self.result = GameResult::Winner(Player::Two);
        } else if self.grid.count(Player::Two) == 0 {
            self.result = GameResult::Winner(Player::One);
        } else if self.grid.full() {
            self.result = self.leader();
        } else if !self.has_moves(Player::One) {
            self.fill_empty(Player::Two);
            self.update_score();
            self.result = self.leader();
        } else if !self.has_moves(Player::Two) {
            self.fill_empty(Player::One);
            self.update_score();
            self.result = self.leader();
        }
    }

    /// A tied final count goes to the second player.
    fn leader(&self) -> GameResult {
        if self.score[0] > self.score[1] {
            GameResult::Winner(Player::One)
        } else {
            GameResult::Winner(Player::Two)
        }
    }

    fn fill_empty(&mut self, color: Player) {
        for i in 0..self.grid.rows() * self.grid.cols() {
            let pos = self.grid.pos_of(i);
            if self.grid[pos].is_none() {
                self.grid[pos] = Some(color);
            }
        }
    }
}

impl GameState for Ataxx {
    type Action = AtaxxMove;

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
        let cells = self.grid.rows() * self.grid.cols();
        cells * cells
    }

    fn encode(&self, action: AtaxxMove) -> usize {
        let cells = self.grid.rows() * self.grid.cols();
        self.grid.index_of(action.from) * cells + self.grid.index_of(action.to)
    }

    fn decode(&self, index: usize) -> AtaxxMove {
        let cells = self.grid.rows() * self.grid.cols();
        AtaxxMove {
            from: self.grid.pos_of(index / cells),
            to: self.grid.pos_of(index % cells),
        }
    }

    fn legal_actions(&self) -> Vec<AtaxxMove> {
        let mut jumps = Vec::new();
        let mut walks = Vec::new();
        for from in self.pieces(self.to_move) {
            jumps.extend(self.jumps_from(from).into_iter().map(|to| AtaxxMove { from, to }));
            walks.extend(self.walks_from(from).into_iter().map(|to| AtaxxMove { from, to }));
        }
        jumps.append(&mut walks);
        jumps
    }

    fn play(&mut self, action: AtaxxMove) -> Result<(), PlayError> {
        if self.result.is_over() {
            return Err(PlayError::GameOver);
        }
        self.execute_move(action)
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn score(&self, player: Player) -> f32 {
        self.score[player.index()]
    }
}

use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

/// Chebyshev (king-move) distance between two positions.
pub fn chebyshev(a: Pos, b: Pos) -> usize {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr.max(dc)
}

/// A rectangular board of cells, each empty or owned by one player.
/// Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Player>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major cell index of a position.
    pub fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.cols, index % self.cols)
    }

    pub fn get(&self, pos: Pos) -> Option<Option<Player>> {
        self.contains(pos).then(|| self[pos])
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows * self.cols).map(|i| self.pos_of(i))
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    pub fn full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Orthogonal neighbours inside the board.
    pub fn neighbors4(&self, pos: Pos) -> ArrayVec<Pos, 4> {
        let Pos { row, col } = pos;
        let mut neighbors = ArrayVec::new();
        if row > 0 {
            neighbors.push(Pos::new(row - 1, col));
        }
        if col > 0 {
            neighbors.push(Pos::new(row, col - 1));
        }
        if row < self.rows - 1 {
            neighbors.push(Pos::new(row + 1, col));
        }
        if col < self.cols - 1 {
            neighbors.push(Pos::new(row, col + 1));
        }
        neighbors
    }

    /// All cells in the 8-neighbourhood inside the board.
    pub fn neighbors8(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        let mut neighbors = ArrayVec::new();
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = self.offset(pos, dr, dc) {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }

    /// All cells at Chebyshev distance exactly 2 inside the board.
    pub fn jump_targets(&self, pos: Pos) -> ArrayVec<Pos, 16> {
        let mut targets = ArrayVec::new();
        for dr in -2isize..=2 {
            for dc in -2isize..=2 {
                if dr.abs().max(dc.abs()) != 2 {
                    continue;
                }
                if let Some(n) = self.offset(pos, dr, dc) {
                    targets.push(n);
                }
            }
        }
        targets
    }

    fn offset(&self, pos: Pos, dr: isize, dc: isize) -> Option<Pos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let n = Pos::new(row, col);
        self.contains(n).then_some(n)
    }

    /// 3-channel 0/1 encoding: channel 0 marks the second player's cells,
    /// channel 1 the empty cells, channel 2 the first player's cells.
    pub fn encoded(&self) -> Vec<f32> {
        let mut channels = vec![0.0; 3 * self.cells.len()];
        let size = self.cells.len();
        for (i, cell) in self.cells.iter().enumerate() {
            let channel = match cell {
                Some(Player::Two) => 0,
                None => 1,
                Some(Player::One) => 2,
            };
            channels[channel * size + i] = 1.0;
        }
        channels
    }

    /// The same position with colours flipped so that `perspective` becomes
    /// the first player. Used by callers that need the mover expressed on a
    /// fixed channel.
    #[must_use]
    pub fn canonical(&self, perspective: Player) -> Grid {
        match perspective {
            Player::One => self.clone(),
            Player::Two => Grid {
                rows: self.rows,
                cols: self.cols,
                cells: self.cells.iter().map(|c| c.map(Player::opponent)).collect(),
            },
        }
    }
}

impl Index<Pos> for Grid {
    type Output = Option<Player>;

    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(self.contains(pos), "position off the board");
        &self.cells[pos.row * self.cols + pos.col]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        assert!(self.contains(pos), "position off the board");
        &mut self.cells[pos.row * self.cols + pos.col]
    }
}

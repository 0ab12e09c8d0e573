use std::fmt::Debug;

use crate::{error::PlayError, grid::Grid, player::Player};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameResult {
    #[default]
    Ongoing,
    Winner(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// Winner indicator: +1 for a first-player win, -1 for a second-player
    /// win, 0 otherwise.
    pub fn value(self) -> f32 {
        match self {
            GameResult::Winner(Player::One) => 1.0,
            GameResult::Winner(Player::Two) => -1.0,
            GameResult::Ongoing | GameResult::Draw => 0.0,
        }
    }
}

/// Capability set shared by the game-rule state machines.
///
/// A state is a pure value: `play` is the only mutator, and a clone is a
/// fully independent copy. Actions travel as typed moves at the API
/// boundary and as indices in `[0, action_size)` inside the search.
pub trait GameState: Clone {
    type Action: Copy + Eq + Debug;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn grid(&self) -> &Grid;
    fn to_move(&self) -> Player;

    /// Size of the (fixed) action space the policy is defined over.
    fn action_size(&self) -> usize;

    fn encode(&self, action: Self::Action) -> usize;
    fn decode(&self, index: usize) -> Self::Action;

    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action for the current player. Rejects illegal requests
    /// without touching the state; applying to a finished game is a caller
    /// bug surfaced as `PlayError::GameOver`.
    fn play(&mut self, action: Self::Action) -> Result<(), PlayError>;

    fn result(&self) -> GameResult;

    fn is_terminal(&self) -> bool {
        self.result().is_over()
    }

    fn score(&self, player: Player) -> f32;

    /// 0/1 legality mask over the full action space.
    fn encoded_actions(&self) -> Vec<f32> {
        let mut mask = vec![0.0; self.action_size()];
        for action in self.legal_actions() {
            mask[self.encode(action)] = 1.0;
        }
        mask
    }

    /// 3-channel 0/1 board tensor. The channel layout is fixed (second
    /// player, empty, first player); flipping colours so the mover sits on
    /// the last channel is the caller's job, via [`Grid::canonical`].
    fn encoded_board(&self) -> Vec<f32> {
        self.grid().encoded()
    }
}

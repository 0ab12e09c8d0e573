mod ataxx;
mod error;
mod game;
mod go;
mod grid;
mod player;

pub use ataxx::{Ataxx, AtaxxMove};
pub use error::PlayError;
pub use game::{GameResult, GameState};
pub use go::{Go, GoMove, DEFAULT_KOMI};
pub use grid::{chebyshev, Grid, Pos};
pub use player::Player;

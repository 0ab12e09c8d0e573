use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("given cell is not on the board")]
    OutOfBounds,
    #[error("cannot place a piece on an occupied cell")]
    Occupied,
    #[error("cannot replay the previous move")]
    RepeatsPosition,
    #[error("placement would leave the group without liberties")]
    Suicide,
    #[error("cannot move a piece that is not yours")]
    NotYourPiece,
    #[error("destination is not a walk or jump away from the source")]
    BadDistance,
}

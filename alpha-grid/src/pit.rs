use games::{GameResult, GameState, Player};
use log::info;

use crate::bot::Bot;

/// Guard against two bots shuffling pieces forever.
const PLY_LIMIT: usize = 10_000;

/// Drive a full game between two bots. The returned result is `Ongoing`
/// only if the ply limit was hit.
pub fn play_game<G: GameState>(mut game: G, one: &dyn Bot<G>, two: &dyn Bot<G>) -> GameResult {
    let mut plies = 0;
    while !game.is_terminal() && plies < PLY_LIMIT {
        let bot = match game.to_move() {
            Player::One => one,
            Player::Two => two,
        };
        let action = bot.choose_action(&game);
        game.play(action).expect("bot chose an illegal action");
        plies += 1;
    }
    game.result()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PitResult {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl PitResult {
    pub fn win_rate(&self) -> f64 {
        f64::from(self.wins) / f64::from(self.wins + self.losses)
    }
}

/// Play a match between a challenger and an incumbent, alternating
/// colours between games. Wins and losses count from the challenger's
/// side.
pub fn pit<G: GameState>(
    start: &G,
    challenger: &dyn Bot<G>,
    incumbent: &dyn Bot<G>,
    games: u32,
) -> PitResult {
    let mut result = PitResult::default();
    for i in 0..games {
        let my_color = if i % 2 == 0 { Player::One } else { Player::Two };
        let outcome = match my_color {
            Player::One => play_game(start.clone(), challenger, incumbent),
            Player::Two => play_game(start.clone(), incumbent, challenger),
        };
        match outcome {
            GameResult::Winner(winner) if winner == my_color => result.wins += 1,
            GameResult::Winner(_) => result.losses += 1,
            GameResult::Draw | GameResult::Ongoing => result.draws += 1,
        }
        info!(
            "pit game {}/{games}: {outcome:?} as {my_color:?} [{}/{}/{}]",
            i + 1,
            result.wins,
            result.draws,
            result.losses
        );
    }
    result
}

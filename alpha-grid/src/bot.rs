use games::GameState;
use rand::{seq::SliceRandom, thread_rng};

use crate::{agent::Agent, config::SearchConfig, search::search};

/// A move-picking actor, however the move is chosen.
pub trait Bot<G: GameState> {
    fn choose_action(&self, game: &G) -> G::Action;
}

/// Uniform choice among the legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl<G: GameState> Bot<G> for RandomBot {
    fn choose_action(&self, game: &G) -> G::Action {
        *game
            .legal_actions()
            .choose(&mut thread_rng())
            .expect("no legal actions to choose from")
    }
}

/// One-ply lookahead maximizing the mover's own score after the move.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBot;

impl<G: GameState> Bot<G> for GreedyBot {
    fn choose_action(&self, game: &G) -> G::Action {
        let mover = game.to_move();
        let mut best = None;
        let mut best_score = f32::NEG_INFINITY;
        for action in game.legal_actions() {
            let mut next = game.clone();
            next.play(action).expect("legal action was rejected");
            let score = next.score(mover);
            if score > best_score {
                best_score = score;
                best = Some(action);
            }
        }
        best.expect("no legal actions to choose from")
    }
}

/// Full search, then the most-visited move. Exploitation play for humans,
/// pit matches, and networked opponents.
pub struct AlphaBot<'a, A> {
    agent: &'a A,
    config: SearchConfig,
}

impl<'a, A> AlphaBot<'a, A> {
    pub fn new(agent: &'a A, config: SearchConfig) -> Self {
        AlphaBot { agent, config }
    }
}

impl<G: GameState, A: Agent<G>> Bot<G> for AlphaBot<'_, A> {
    fn choose_action(&self, game: &G) -> G::Action {
        let probs = search(game, self.agent, &self.config);
        let mut best = 0;
        let mut best_prob = f32::NEG_INFINITY;
        for (index, &prob) in probs.iter().enumerate() {
            if prob > best_prob {
                best_prob = prob;
                best = index;
            }
        }
        game.decode(best)
    }
}

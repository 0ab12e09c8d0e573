use games::GameState;

/// Policy/value evaluator guiding the search.
///
/// Implementations see one position at a time and answer synchronously.
/// The policy is a probability distribution over the full action space;
/// masking it against legality and any perspective flipping happen on the
/// caller's side.
pub trait Agent<G: GameState> {
    fn policy_and_eval(&self, game: &G) -> (Vec<f32>, f32);
}

/// Flat prior with a neutral value. Turns the search into plain
/// visit-count MCTS; also the stand-in evaluator in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformAgent;

impl<G: GameState> Agent<G> for UniformAgent {
    fn policy_and_eval(&self, game: &G) -> (Vec<f32>, f32) {
        let size = game.action_size();
        (vec![1.0 / size as f32; size], 0.0)
    }
}

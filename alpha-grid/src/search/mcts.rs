use games::{GameResult, GameState};
use rand_distr::{Dirichlet, Distribution};

use super::{node::Node, tree::Tree};
use crate::{agent::Agent, config::SearchConfig};

/// Run a full search from `root_state` and return the distribution over
/// the action space induced by root-child visit counts. Entries sum to 1
/// and are nonzero only at actions expanded under the root.
pub fn search<G, A>(root_state: &G, agent: &A, config: &SearchConfig) -> Vec<f32>
where
    G: GameState,
    A: Agent<G>,
{
    let action_size = root_state.action_size();
    let mut tree = Tree::new(Node::new_root(root_state.clone()));

    // Root policy: noise is blended over the full action space first,
    // masking and renormalization come second. The order is fixed.
    let (raw_policy, _) = evaluate(agent, root_state, action_size);
    let noise = root_noise(config, action_size);
    let mut policy: Vec<f32> = raw_policy
        .iter()
        .zip(noise)
        .map(|(p, n)| (1.0 - config.dirichlet_epsilon) * p + config.dirichlet_epsilon * n)
        .collect();
    mask_and_renormalize(&mut policy, &root_state.encoded_actions());
    tree.expand(tree.root(), &policy);

    for _ in 0..config.simulations {
        // Selection: descend until a node without children.
        let mut id = tree.root();
        while tree.get(id).is_expanded() {
            id = tree
                .select_child(id, config.exploration_weight)
                .expect("expanded node has no children");
        }

        // Evaluation and expansion at the leaf.
        let value = match tree.get(id).state.result() {
            GameResult::Ongoing => {
                let (mut policy, value) = evaluate(agent, &tree.get(id).state, action_size);
                mask_and_renormalize(&mut policy, &tree.get(id).state.encoded_actions());
                tree.expand(id, &policy);
                value
            }
            result => result.value(),
        };

        tree.backpropagate(id, value);
    }

    let mut probs = vec![0.0; action_size];
    let root = tree.get(tree.root());
    for &child_id in &root.children {
        let child = tree.get(child_id);
        probs[child.action.expect("non-root node without an action")] = child.visits as f32;
    }
    let total: f32 = probs.iter().sum();
    assert!(total > 0.0, "search finished without any simulations");
    for p in &mut probs {
        *p /= total;
    }
    probs
}

fn root_noise(config: &SearchConfig, action_size: usize) -> Vec<f32> {
    let dirichlet = Dirichlet::new(&vec![config.dirichlet_alpha; action_size])
        .expect("invalid dirichlet parameters");
    dirichlet.sample(&mut rand::thread_rng())
}

/// Evaluate one position, checking the output shape. A wrong-sized or
/// unnormalized policy is fatal.
fn evaluate<G: GameState, A: Agent<G>>(agent: &A, state: &G, action_size: usize) -> (Vec<f32>, f32) {
    let (policy, value) = agent.policy_and_eval(state);
    assert_eq!(
        policy.len(),
        action_size,
        "evaluator policy has the wrong length"
    );
    let sum: f32 = policy.iter().sum();
    assert!(
        (sum - 1.0).abs() < 1e-3,
        "evaluator policy must sum to 1, got {sum}"
    );
    (policy, value)
}

/// Zero out illegal actions and rescale the rest back to a distribution.
fn mask_and_renormalize(policy: &mut [f32], mask: &[f32]) {
    for (p, m) in policy.iter_mut().zip(mask) {
        *p *= m;
    }
    let total: f32 = policy.iter().sum();
    assert!(total > 0.0, "policy has no mass on any legal action");
    for p in policy.iter_mut() {
        *p /= total;
    }
}

use std::{sync::mpsc::channel, thread};

use games::{GameResult, GameState};
use log::{debug, info};
use rand_distr::{Distribution, WeightedIndex};

use crate::{
    agent::Agent,
    config::SearchConfig,
    example::{Example, IncompleteExample},
    search::search,
};

/// Play one game against self, driving the live state and recording a
/// training example per move. Actions are sampled in proportion to the
/// searched distribution, not taken greedily.
pub fn play_episode<G, A>(mut game: G, agent: &A, config: &SearchConfig) -> Vec<Example>
where
    G: GameState,
    A: Agent<G>,
{
    let mut incomplete = Vec::new();
    while !game.is_terminal() {
        let probs = search(&game, agent, config);
        incomplete.push(IncompleteExample {
            board: game.grid().canonical(game.to_move()).encoded(),
            policy: probs.clone(),
            player: game.to_move(),
        });
        let distr = WeightedIndex::new(&probs).expect("search returned an empty distribution");
        let index = distr.sample(&mut rand::thread_rng());
        let action = game.decode(index);
        game.play(action).expect("search proposed an illegal action");
    }

    let winner = match game.result() {
        GameResult::Winner(player) => Some(player),
        GameResult::Draw => None,
        GameResult::Ongoing => unreachable!("episode ended on a live game"),
    };
    debug!(
        "episode finished after {} moves: {:?}",
        incomplete.len(),
        game.result()
    );
    incomplete
        .into_iter()
        .map(|example| example.complete(winner))
        .collect()
}

/// Run independent episodes across worker threads. Each worker owns its
/// private game and tree; nothing is shared between episodes except the
/// read-only evaluator.
pub fn play_episodes<G, A>(
    start: &G,
    agent: &A,
    config: &SearchConfig,
    episodes: usize,
    workers: usize,
) -> Vec<Example>
where
    G: GameState + Sync,
    A: Agent<G> + Sync,
{
    let workers = workers.clamp(1, episodes.max(1));
    let (tx, rx) = channel();
    thread::scope(|scope| {
        for worker in 0..workers {
            let tx = tx.clone();
            let share = episodes / workers + usize::from(worker < episodes % workers);
            scope.spawn(move || {
                for _ in 0..share {
                    tx.send(play_episode(start.clone(), agent, config))
                        .expect("example channel closed");
                }
            });
        }
        drop(tx);

        let mut examples = Vec::new();
        let mut finished = 0;
        for batch in rx {
            finished += 1;
            info!("self-play game {finished}/{episodes}");
            examples.extend(batch);
        }
        examples
    })
}

use alpha_grid::{
    load_examples, pit, play_episode, play_episodes, save_examples, GreedyBot, RandomBot,
    SearchConfig, UniformAgent,
};
use games::{Ataxx, GameState};

fn quick_config() -> SearchConfig {
    SearchConfig {
        simulations: 16,
        ..SearchConfig::default()
    }
}

#[test]
fn episode_produces_relabeled_examples() {
    let game = Ataxx::new(4, 4);
    let examples = play_episode(game.clone(), &UniformAgent, &quick_config());

    assert!(!examples.is_empty());
    for example in &examples {
        assert_eq!(example.board.len(), 3 * game.rows() * game.cols());
        assert!(example.board.iter().all(|&b| b == 0.0 || b == 1.0));

        assert_eq!(example.policy.len(), game.action_size());
        let sum: f32 = example.policy.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);

        // No draws in this game, so every outcome is decisive.
        assert!(example.value == 1.0 || example.value == -1.0);
    }
}

#[test]
fn parallel_episodes_collect_every_game() {
    let game = Ataxx::new(4, 4);
    let examples = play_episodes(&game, &UniformAgent, &quick_config(), 2, 2);
    assert!(!examples.is_empty());
}

#[test]
fn examples_survive_a_save_and_load() {
    let game = Ataxx::new(4, 4);
    let examples = play_episode(game, &UniformAgent, &quick_config());

    let mut path = std::env::temp_dir();
    path.push(format!("alpha-grid-examples-{}.data", std::process::id()));
    save_examples(&path, &examples).unwrap();
    let loaded = load_examples(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(examples, loaded);
}

#[test]
fn random_against_greedy_match_completes() {
    let result = pit(&Ataxx::new(4, 4), &RandomBot, &GreedyBot, 4);
    assert_eq!(result.wins + result.draws + result.losses, 4);
}

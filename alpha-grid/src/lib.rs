pub mod agent;
pub mod bot;
pub mod config;
pub mod example;
pub mod pit;
pub mod search;
pub mod self_play;

pub use agent::{Agent, UniformAgent};
pub use bot::{AlphaBot, Bot, GreedyBot, RandomBot};
pub use config::SearchConfig;
pub use example::{load_examples, save_examples, Example, ExampleError, IncompleteExample};
pub use pit::{pit, play_game, PitResult};
pub use search::search;
pub use self_play::{play_episode, play_episodes};

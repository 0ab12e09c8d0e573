use std::{fs::create_dir_all, time::SystemTime};

use alpha_grid::{
    pit, play_episodes, save_examples, AlphaBot, GreedyBot, RandomBot, SearchConfig, UniformAgent,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use games::{Ataxx, GameState, Go};
use log::info;

use crate::cli::{Args, Command};

mod cli;

enum GameKind {
    Go,
    Ataxx,
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let args = Args::parse();
    let (kind, rows, cols) = parse_selector(&args.game)?;
    match kind {
        GameKind::Ataxx => run(Ataxx::new(rows, cols), args.command),
        GameKind::Go => run(Go::new(rows, cols), args.command),
    }
}

/// Selector grammar: a game letter followed by the board size,
/// e.g. "A4x4" or "G9x9".
fn parse_selector(selector: &str) -> Result<(GameKind, usize, usize)> {
    let kind = match selector.chars().next() {
        Some('A' | 'a') => GameKind::Ataxx,
        Some('G' | 'g') => GameKind::Go,
        _ => bail!("unknown game in selector {selector:?}"),
    };
    let (rows, cols) = selector[1..]
        .split_once(['x', 'X'])
        .with_context(|| format!("selector {selector:?} must look like A4x4 or G9x9"))?;
    let rows: usize = rows.parse().context("bad row count")?;
    let cols: usize = cols.parse().context("bad column count")?;
    if rows < 2 || cols < 2 {
        bail!("board must be at least 2x2");
    }
    Ok((kind, rows, cols))
}

fn run<G>(game: G, command: Command) -> Result<()>
where
    G: GameState + Sync,
{
    match command {
        Command::SelfPlay {
            episodes,
            simulations,
            workers,
            out_dir,
        } => {
            let config = SearchConfig {
                simulations,
                ..SearchConfig::default()
            };
            info!("starting self-play: {episodes} episodes on {workers} workers");
            let examples = play_episodes(&game, &UniformAgent, &config, episodes, workers);

            create_dir_all(&out_dir)?;
            let path = out_dir.join(format!("{}.data", sys_time()));
            save_examples(&path, &examples)?;
            info!("saved {} examples to {}", examples.len(), path.display());
            Ok(())
        }
        Command::Pit {
            baseline,
            games,
            simulations,
        } => {
            let config = SearchConfig {
                simulations,
                ..SearchConfig::default()
            };
            let agent = UniformAgent;
            let challenger = AlphaBot::new(&agent, config);
            let result = match baseline.as_str() {
                "random" => pit(&game, &challenger, &RandomBot, games),
                "greedy" => pit(&game, &challenger, &GreedyBot, games),
                other => bail!("unknown baseline {other:?}"),
            };
            info!("match finished: {result:?}, win rate {:.2}", result.win_rate());
            Ok(())
        }
    }
}

/// UNIX time in seconds, used to stamp example files.
fn sys_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("system clock before the epoch")
        .as_secs()
}

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use games::Player;
use thiserror::Error;

/// One training record: canonical board tensor, policy target taken from
/// the search visit counts, and the outcome from the acting player's point
/// of view.
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    pub board: Vec<f32>,
    pub policy: Vec<f32>,
    pub value: f32,
}

/// Position recorded mid-episode, before the outcome is known.
#[derive(Clone, Debug)]
pub struct IncompleteExample {
    pub board: Vec<f32>,
    pub policy: Vec<f32>,
    pub player: Player,
}

impl IncompleteExample {
    /// Fill in the final outcome: +1 when the recorded player won, -1 when
    /// the opponent did, 0 for a draw.
    #[must_use]
    pub fn complete(self, winner: Option<Player>) -> Example {
        let value = match winner {
            Some(w) if w == self.player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        };
        Example {
            board: self.board,
            policy: self.policy,
            value,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExampleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed example on line {line}")]
    Malformed { line: usize },
}

/// Write examples as text, one `board;policy;value` record per line.
pub fn save_examples(path: impl AsRef<Path>, examples: &[Example]) -> Result<(), ExampleError> {
    let mut file = File::create(path)?;
    for example in examples {
        writeln!(
            file,
            "{};{};{}",
            join(&example.board),
            join(&example.policy),
            example.value
        )?;
    }
    Ok(())
}

pub fn load_examples(path: impl AsRef<Path>) -> Result<Vec<Example>, ExampleError> {
    BufReader::new(File::open(path)?)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line?;
            parse_example(&line).ok_or(ExampleError::Malformed { line: i + 1 })
        })
        .collect()
}

fn join(values: &[f32]) -> String {
    values
        .iter()
        .map(f32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_example(line: &str) -> Option<Example> {
    let mut chunks = line.split(';');
    let board = parse_floats(chunks.next()?)?;
    let policy = parse_floats(chunks.next()?)?;
    let value = chunks.next()?.trim().parse().ok()?;
    Some(Example {
        board,
        policy,
        value,
    })
}

fn parse_floats(chunk: &str) -> Option<Vec<f32>> {
    chunk
        .split_whitespace()
        .map(|value| value.parse().ok())
        .collect()
}

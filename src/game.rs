//! Top-level game orchestration
//!
//! Wires the pipeline together: validate and dedup the raw roster, gate on
//! the minimum population, shuffle, partition into per-worker chunks, match
//! chunks in parallel, then aggregate into the final name pairs.

use crate::aggregate;
use crate::config::GameConfig;
use crate::error::{PairingError, Result};
use crate::executor;
use crate::partition::partition;
use crate::record::{validate_records, Record};
use rand::seq::SliceRandom;
use serde_json::Value;
use tracing::{debug, info};

/// Fewest distinct valid records the game will run with.
pub const MIN_PLAYERS: usize = 3;

/// A configured pairing game. Construct once, run per roster.
#[derive(Debug, Clone, Default)]
pub struct PairingGame {
    config: GameConfig,
}

impl PairingGame {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over a raw roster and return the (dwarf name,
    /// giant name) pairs.
    ///
    /// Malformed records are dropped silently; fewer than [`MIN_PLAYERS`]
    /// distinct valid records is fatal before any matching starts.
    pub async fn run(&self, raw_records: &[Value]) -> Result<Vec<(String, String)>> {
        let pairs = self.run_records(raw_records).await?;
        Ok(aggregate::to_name_pairs(&pairs))
    }

    /// Like [`run`](Self::run), but returns the full record pairs instead of
    /// the name projection.
    pub async fn run_records(&self, raw_records: &[Value]) -> Result<Vec<(Record, Record)>> {
        let mut players = validate_records(raw_records);
        debug!(
            "{} raw records -> {} distinct valid players",
            raw_records.len(),
            players.len()
        );
        if players.len() < MIN_PLAYERS {
            return Err(PairingError::InsufficientPopulation {
                found: players.len(),
                minimum: MIN_PLAYERS,
            });
        }

        // Shuffle before partitioning so chunk membership changes run to run.
        players.shuffle(&mut rand::rng());

        let chunks = partition(players, self.config.workers);
        info!(
            "pairing {} players across {} chunks",
            chunks.iter().map(Vec::len).sum::<usize>(),
            chunks.len()
        );

        let assignments =
            executor::run_matchers(chunks, self.config.workers, self.config.max_attempts).await?;
        Ok(aggregate::flatten(assignments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Value> {
        (0..n)
            .map(|i| json!({"department": "R&D", "name": format!("Person {i}"), "age": 20 + i}))
            .collect()
    }

    #[tokio::test]
    async fn test_too_few_players_is_fatal() {
        let game = PairingGame::new(GameConfig::new(1));
        let err = game.run(&roster(2)).await.unwrap_err();
        match err {
            PairingError::InsufficientPopulation { found, minimum } => {
                assert_eq!(found, 2);
                assert_eq!(minimum, MIN_PLAYERS);
            }
            other => panic!("expected InsufficientPopulation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_duplicates_do_not_count_toward_minimum() {
        let mut raw = roster(2);
        raw.push(raw[0].clone());
        let game = PairingGame::new(GameConfig::new(1));
        let err = game.run(&raw).await.unwrap_err();
        assert!(matches!(
            err,
            PairingError::InsufficientPopulation { found: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_every_player_paired_exactly_once() {
        let game = PairingGame::new(GameConfig::new(2));
        let pairs = game.run_records(&roster(10)).await.unwrap();
        assert_eq!(pairs.len(), 10);
        let dwarfs: HashSet<&Record> = pairs.iter().map(|(d, _)| d).collect();
        assert_eq!(dwarfs.len(), 10);
        for (dwarf, giant) in &pairs {
            assert_ne!(dwarf, giant);
        }
    }

    #[tokio::test]
    async fn test_name_pairs_are_lowercased() {
        let game = PairingGame::new(GameConfig::new(1));
        let names = game.run(&roster(4)).await.unwrap();
        for (dwarf, giant) in names {
            assert_eq!(dwarf, dwarf.to_lowercase());
            assert_eq!(giant, giant.to_lowercase());
        }
    }
}

//! # Pairup
//!
//! Randomized dwarf/giant pairing: every member of a roster is assigned one
//! other member as its "giant", with no self-pairs, no mutual pairs within a
//! chunk, and no giant handed out twice within a chunk.
//!
//! ## Modules
//!
//! - `record` - Raw record validation, normalization and deduplication
//! - `partition` - Round-robin chunking of the working set
//! - `matcher` - Constrained random matching within one chunk
//! - `executor` - Parallel per-chunk execution with ordered collection
//! - `aggregate` - Flattening chunk results into the final pair sequence
//! - `game` - Top-level orchestration of the pipeline
//! - `config` - Run configuration (workers, retry budget)
//! - `input` - Loading raw rosters from JSON files
//! - `error` - Typed errors for fatal conditions
pub mod aggregate;
pub mod config;
pub mod error;
pub mod executor;
pub mod game;
pub mod input;
pub mod matcher;
pub mod partition;
pub mod record;

pub use config::GameConfig;
pub use error::PairingError;
pub use game::{PairingGame, MIN_PLAYERS};
pub use record::Record;

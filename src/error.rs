//! Structured error types for pairing runs
//!
//! Malformed input records are not represented here: the validator drops them
//! silently per the game rules. Errors cover the fatal conditions only.

use crate::record::Record;
use thiserror::Error;

/// Main error type for pairing operations
#[derive(Debug, Error)]
pub enum PairingError {
    /// Fewer than the minimum number of distinct valid records remained after
    /// validation and deduplication. Raised before any matching is attempted.
    #[error("not enough players to run the game: {found} distinct valid records, need at least {minimum}")]
    InsufficientPopulation { found: usize, minimum: usize },

    /// The matcher exhausted its draw budget for one dwarf. Happens when a
    /// chunk is too small or too constrained for a valid giant to exist
    /// (e.g. a chunk of size 1 or 2).
    #[error("chunk {chunk_index} too constrained: no valid giant for dwarf '{dwarf_name}' after {attempts} draws")]
    ChunkTooConstrained {
        chunk_index: usize,
        dwarf_name: String,
        attempts: usize,
    },

    /// The input boundary handed us something that is not a sequence of
    /// records at all.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A matcher task panicked or was cancelled before producing a result.
    #[error("matcher task for chunk {chunk_index} failed to complete")]
    TaskJoin {
        chunk_index: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl PairingError {
    pub(crate) fn chunk_too_constrained(
        chunk_index: usize,
        dwarf: &Record,
        attempts: usize,
    ) -> Self {
        Self::ChunkTooConstrained {
            chunk_index,
            dwarf_name: dwarf.name.clone(),
            attempts,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PairingError>;

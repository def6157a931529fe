//! Constrained random matcher
//!
//! For one chunk of records, assigns every record (as a "dwarf") a random
//! "giant" from the same chunk by rejection sampling. A candidate giant is
//! rejected when it is the dwarf itself, when it was already handed out as a
//! giant, or when taking it would create a mutual pair (the candidate already
//! received this dwarf as its own giant).
//!
//! Reciprocity is only ever checked within a chunk: assignments never cross
//! chunk boundaries, so two records in different chunks can legally point at
//! each other. That boundary is inherited from the game rules, not an
//! oversight of this module.
//!
//! The sampling loop is bounded. A chunk of size 1 or 2 has positions with no
//! valid candidate at all, and even larger chunks can paint themselves into a
//! corner (the last dwarf may find every remaining giant excluded). Rather
//! than spin forever, the matcher caps the draws per dwarf, abandons a
//! dead-ended attempt and restarts the chunk from scratch; only when a
//! bounded number of restarts all dead-end is the chunk reported as too
//! constrained. A solvable chunk survives a restart with independent
//! randomness, so spurious failures vanish; an unsolvable one fails fast.

use crate::error::{PairingError, Result};
use crate::record::Record;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// One chunk's dwarf → giant assignment, in dwarf-processing order.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    pairs: Vec<(Record, Record)>,
}

impl Assignment {
    /// Pairs in the order dwarfs were processed.
    pub fn pairs(&self) -> &[(Record, Record)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(Record, Record)> {
        self.pairs
    }

    /// Giant assigned to `dwarf`, if any.
    pub fn giant_for(&self, dwarf: &Record) -> Option<&Record> {
        self.pairs.iter().find(|(d, _)| d == dwarf).map(|(_, g)| g)
    }
}

/// Minimum draw budget per dwarf, regardless of chunk size.
const MIN_ATTEMPTS: usize = 64;

/// Whole-chunk restarts tolerated before giving up. Dead ends on a solvable
/// chunk are independent across restarts, so this many failures in a row
/// means the chunk has no valid assignment in practice.
const MAX_RESTARTS: usize = 32;

/// Draws allowed per dwarf for a chunk of `chunk_len` records.
pub fn default_attempt_budget(chunk_len: usize) -> usize {
    (chunk_len * 32).max(MIN_ATTEMPTS)
}

/// The three game rules, checked against the assignment built so far.
fn giant_is_valid(
    dwarf: &Record,
    giant: &Record,
    chosen_giants: &HashSet<Record>,
    by_dwarf: &HashMap<Record, Record>,
) -> bool {
    if giant == dwarf {
        return false;
    }
    if chosen_giants.contains(giant) {
        return false;
    }
    // Mutual pair: the candidate was already processed as a dwarf and drew us.
    if by_dwarf.get(giant) == Some(dwarf) {
        return false;
    }
    true
}

/// One pass over the chunk. Fails when some dwarf exhausts its draw budget.
fn attempt_chunk(
    chunk: &[Record],
    chunk_index: usize,
    budget: usize,
) -> Result<Assignment> {
    let mut rng = rand::rng();
    let mut pairs = Vec::with_capacity(chunk.len());
    let mut chosen_giants: HashSet<Record> = HashSet::with_capacity(chunk.len());
    let mut by_dwarf: HashMap<Record, Record> = HashMap::with_capacity(chunk.len());

    for dwarf in chunk {
        let mut attempts = 0;
        let giant = loop {
            if chunk.len() < 2 || attempts >= budget {
                return Err(PairingError::chunk_too_constrained(
                    chunk_index,
                    dwarf,
                    attempts,
                ));
            }
            attempts += 1;
            let candidate = &chunk[rng.random_range(0..chunk.len())];
            if giant_is_valid(dwarf, candidate, &chosen_giants, &by_dwarf) {
                break candidate.clone();
            }
        };
        trace!(
            "chunk {}: '{}' -> '{}' after {} draws",
            chunk_index,
            dwarf.name,
            giant.name,
            attempts
        );
        chosen_giants.insert(giant.clone());
        by_dwarf.insert(dwarf.clone(), giant.clone());
        pairs.push((dwarf.clone(), giant));
    }

    Ok(Assignment { pairs })
}

/// Assign a giant to every record in `chunk`, honoring the game rules.
///
/// `chunk_index` is only used for error reporting; `max_attempts` caps the
/// draws tolerated per dwarf within one pass (`None` uses the default
/// budget). A pass that dead-ends is retried with fresh randomness; the
/// error from the final pass is returned once the restart budget is spent.
pub fn match_chunk(
    chunk: &[Record],
    chunk_index: usize,
    max_attempts: Option<usize>,
) -> Result<Assignment> {
    let budget = max_attempts.unwrap_or_else(|| default_attempt_budget(chunk.len()));
    let mut restarts = 0;
    loop {
        match attempt_chunk(chunk, chunk_index, budget) {
            Ok(assignment) => return Ok(assignment),
            Err(err) => {
                restarts += 1;
                if restarts >= MAX_RESTARTS {
                    return Err(err);
                }
                trace!(
                    "chunk {}: attempt {} dead-ended, restarting: {}",
                    chunk_index,
                    restarts,
                    err
                );
            }
        }
    }
}

//! Result aggregation
//!
//! Flattens per-chunk assignments into one global pair sequence (chunk order,
//! then per-chunk assignment order) and projects it down to the name pairs
//! handed to the output boundary. Per-chunk invariants are trusted here; no
//! re-validation happens.

use crate::matcher::Assignment;
use crate::record::Record;

/// Flatten assignments into a single ordered (dwarf, giant) sequence.
pub fn flatten(assignments: Vec<Assignment>) -> Vec<(Record, Record)> {
    assignments
        .into_iter()
        .flat_map(Assignment::into_pairs)
        .collect()
}

/// Project record pairs down to (dwarf name, giant name).
pub fn to_name_pairs(pairs: &[(Record, Record)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(dwarf, giant)| (dwarf.name.clone(), giant.name.clone()))
        .collect()
}

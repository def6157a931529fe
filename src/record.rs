//! Record validation and normalization
//!
//! Raw input records arrive as arbitrary JSON values. A record is well-formed
//! iff it is an object with exactly three fields: `department` (string),
//! `name` (string) and `age` (integer, or a string containing only digits).
//! Malformed records are dropped silently; well-formed ones are normalized
//! (strings lowercased, age parsed) and deduplicated by value identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// A normalized, immutable population member. Value equality is the matching
/// identity: two records with the same department, name and age are the same
/// player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub department: String,
    pub name: String,
    pub age: u32,
}

impl Record {
    pub fn new(department: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            department: department.into().to_lowercase(),
            name: name.into().to_lowercase(),
            age,
        }
    }
}

/// Parse the `age` field: accepts an integer or a string of digits only.
fn parse_age(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => {
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Try to build a normalized [`Record`] from one raw JSON value. Returns
/// `None` for anything malformed.
fn parse_record(raw: &Value) -> Option<Record> {
    let obj = raw.as_object()?;
    if obj.len() != 3 {
        return None;
    }
    let department = obj.get("department")?.as_str()?;
    let name = obj.get("name")?.as_str()?;
    let age = parse_age(obj.get("age")?)?;
    Some(Record::new(department, name, age))
}

/// Validate a sequence of raw records, dropping malformed entries and
/// collapsing exact duplicates. Output ordering follows first occurrence in
/// the input; applying this to already-valid records yields the same set.
pub fn validate_records(raw: &[Value]) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (index, value) in raw.iter().enumerate() {
        match parse_record(value) {
            Some(record) => {
                if seen.insert(record.clone()) {
                    records.push(record);
                }
            }
            None => {
                debug!("dropping malformed record at index {}", index);
            }
        }
    }
    records
}

//! Round-robin chunk partitioning
//!
//! Splits the working set into roughly even chunks for independent matching.
//! Item `i` lands in chunk `i % effective_count`, so relative order within a
//! chunk follows input order and sizes differ by at most one.

use crate::record::Record;

/// Split `items` into at most `chunk_count` round-robin chunks. The count is
/// clamped to the number of items; an empty input yields no chunks.
pub fn partition(items: Vec<Record>, chunk_count: usize) -> Vec<Vec<Record>> {
    let effective = chunk_count.min(items.len());
    if effective == 0 {
        return Vec::new();
    }
    let mut chunks: Vec<Vec<Record>> = vec![Vec::new(); effective];
    for (i, item) in items.into_iter().enumerate() {
        chunks[i % effective].push(item);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new("dept", format!("person {i}"), 20 + i as u32))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(partition(Vec::new(), 4).is_empty());
    }

    #[test]
    fn test_chunk_count_clamped_to_items() {
        let chunks = partition(records(3), 10);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_zero_chunks_requested() {
        assert!(partition(records(5), 0).is_empty());
    }

    #[test]
    fn test_round_robin_order_preserved() {
        let items = records(7);
        let chunks = partition(items.clone(), 3);
        assert_eq!(chunks.len(), 3);
        // item i goes to chunk i % 3
        assert_eq!(chunks[0], vec![items[0].clone(), items[3].clone(), items[6].clone()]);
        assert_eq!(chunks[1], vec![items[1].clone(), items[4].clone()]);
        assert_eq!(chunks[2], vec![items[2].clone(), items[5].clone()]);
    }

    #[test]
    fn test_sizes_differ_by_at_most_one() {
        for n in 1..20 {
            for k in 1..8 {
                let chunks = partition(records(n), k);
                let max = chunks.iter().map(Vec::len).max().unwrap();
                let min = chunks.iter().map(Vec::len).min().unwrap();
                assert!(max - min <= 1, "n={n} k={k} max={max} min={min}");
            }
        }
    }

    #[test]
    fn test_union_of_chunks_equals_input() {
        let items = records(11);
        let chunks = partition(items.clone(), 4);
        let flattened: HashSet<Record> = chunks.into_iter().flatten().collect();
        let expected: HashSet<Record> = items.into_iter().collect();
        assert_eq!(flattened, expected);
    }
}

//! Parallel executor for per-chunk matching
//!
//! Runs one matcher per chunk across a bounded number of concurrent workers.
//! Chunks are fully independent: each task owns its chunk, no state is shared
//! and no locks are needed. Results come back in chunk order, not completion
//! order.

use crate::error::{PairingError, Result};
use crate::matcher::{self, Assignment};
use crate::record::Record;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Run the matcher over every chunk with at most `workers` running at once.
///
/// Matching is CPU-bound, so each chunk runs on the blocking pool. The first
/// failing chunk's error is returned after all tasks have finished; there is
/// no cancellation of in-flight chunks.
pub async fn run_matchers(
    chunks: Vec<Vec<Record>>,
    workers: usize,
    max_attempts: Option<usize>,
) -> Result<Vec<Assignment>> {
    let workers = workers.max(1);
    debug!(
        "matching {} chunks across up to {} workers",
        chunks.len(),
        workers
    );

    let semaphore = Arc::new(Semaphore::new(workers));
    let mut futures = Vec::with_capacity(chunks.len());
    for (chunk_index, chunk) in chunks.into_iter().enumerate() {
        let semaphore = semaphore.clone();
        futures.push(async move {
            let _permit = semaphore
                .acquire()
                .await
                .expect("semaphore closed while matching");
            let handle = tokio::task::spawn_blocking(move || {
                matcher::match_chunk(&chunk, chunk_index, max_attempts)
            });
            match handle.await {
                Ok(result) => result,
                Err(source) => Err(PairingError::TaskJoin {
                    chunk_index,
                    source,
                }),
            }
        });
    }

    // join_all preserves input order, giving results in chunk order.
    let results = join_all(futures).await;
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new("dept", format!("person {i}"), 20 + i as u32))
            .collect()
    }

    #[tokio::test]
    async fn test_results_come_back_in_chunk_order() {
        let chunks = partition(records(12), 3);
        let expected_dwarfs: Vec<Vec<Record>> = chunks.clone();
        let assignments = run_matchers(chunks, 3, None).await.unwrap();
        assert_eq!(assignments.len(), 3);
        for (assignment, chunk) in assignments.iter().zip(&expected_dwarfs) {
            let dwarfs: Vec<&Record> = assignment.pairs().iter().map(|(d, _)| d).collect();
            let expected: Vec<&Record> = chunk.iter().collect();
            assert_eq!(dwarfs, expected);
        }
    }

    #[tokio::test]
    async fn test_single_worker_still_processes_all_chunks() {
        let chunks = partition(records(9), 3);
        let assignments = run_matchers(chunks, 1, None).await.unwrap();
        assert_eq!(assignments.len(), 3);
        assert_eq!(assignments.iter().map(Assignment::len).sum::<usize>(), 9);
    }

    #[tokio::test]
    async fn test_constrained_chunk_error_propagates() {
        // 4 records over 3 chunks leaves two singleton chunks.
        let chunks = partition(records(4), 3);
        let err = run_matchers(chunks, 3, None).await.unwrap_err();
        assert!(matches!(err, PairingError::ChunkTooConstrained { .. }));
    }

    #[tokio::test]
    async fn test_no_chunks_is_fine() {
        let assignments = run_matchers(Vec::new(), 4, None).await.unwrap();
        assert!(assignments.is_empty());
    }

    #[tokio::test]
    async fn test_zero_workers_clamped_to_one() {
        let chunks = partition(records(6), 2);
        let assignments = run_matchers(chunks, 0, None).await.unwrap();
        assert_eq!(assignments.len(), 2);
    }
}

//! Parallel batch evaluation using Rayon.
//!
//! Enabled with the `parallel` feature flag. [`BatchProcessor::process`]
//! dispatches here once a batch reaches
//! [`BatchConfig::parallel_threshold`](crate::BatchConfig::parallel_threshold)
//! requests. Requests share no state, so each one is evaluated on whichever
//! worker picks it up; the indexed iterator's `collect` keeps outcomes in
//! input order.
//!
//! For small batches the sequential path is faster due to scheduling overhead.

use rayon::prelude::*;
use tracing::debug;

use crate::batch::{BatchProcessor, OperationOutcome, OperationRequest};

impl BatchProcessor {
    pub(crate) fn process_parallel(&self, requests: &[OperationRequest]) -> Vec<OperationOutcome> {
        let outcomes: Vec<_> = requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| self.process_one(index, request))
            .collect();

        debug!(
            failed = outcomes.iter().filter(|o| !o.ok).count(),
            threads = rayon::current_num_threads(),
            "batch processed in parallel"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use crate::batch::{BatchProcessor, OperationRequest};

    fn requests(len: i64) -> Vec<OperationRequest> {
        (0..len)
            .map(|i| match i % 3 {
                0 => OperationRequest::prime("*", i, i + 1, 101),
                1 => OperationRequest::prime("/", i, 0, 101),
                _ => OperationRequest::extension("^", i, 3, 2, 3, vec![1, 1, 0, 1]),
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let batch = requests(500);

        let sequential = BatchProcessor::builder()
            .parallel_threshold(usize::MAX)
            .build()
            .process(&batch);
        let parallel = BatchProcessor::builder()
            .parallel_threshold(0)
            .build()
            .process(&batch);

        assert_eq!(parallel.len(), batch.len());
        assert_eq!(parallel, sequential);
        assert!(parallel.iter().skip(1).step_by(3).all(|o| !o.ok));
    }

    #[test]
    fn test_parallel_empty_batch() {
        let processor = BatchProcessor::builder().parallel_threshold(0).build();
        assert!(processor.process(&[]).is_empty());
    }
}

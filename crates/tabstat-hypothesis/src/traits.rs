//! Shared driver for tests that run over pairs of columns

use tabstat_core::{ColumnPartition, Dataset, SkipReason};
use tracing::{debug, warn};

/// A test applied independently to each pair of columns
///
/// Implementors decide which pairs apply and how one pair is tested;
/// [`analyze_all`](Self::analyze_all) runs every pair, keeps the results in
/// pair order and logs the skipped ones.
pub trait PairwiseAnalyzer: Sync {
    /// Record produced for a pair that could be tested
    type Output: Send;

    /// Short label used in log records
    fn name(&self) -> &'static str;

    /// Pairs to test, in deterministic order
    fn pairs<'a>(&self, partition: &'a ColumnPartition) -> Vec<(&'a str, &'a str)>;

    /// Test one pair
    fn analyze_pair(
        &self,
        dataset: &Dataset,
        left: &str,
        right: &str,
    ) -> Result<Self::Output, SkipReason>;

    /// Test every pair from `partition`
    ///
    /// With the `parallel` feature and `parallel = true`, pairs run on the
    /// rayon pool. Output order is the pair order either way.
    fn analyze_all(
        &self,
        dataset: &Dataset,
        partition: &ColumnPartition,
        parallel: bool,
    ) -> Vec<Self::Output> {
        let pairs = self.pairs(partition);
        let attempts = execute_pairs(&pairs, parallel, |left, right| {
            self.analyze_pair(dataset, left, right)
        });

        let mut results = Vec::with_capacity(attempts.len());
        for (&(left, right), attempt) in pairs.iter().zip(attempts) {
            match attempt {
                Ok(result) => results.push(result),
                Err(reason) if reason.is_unexpected() => {
                    warn!(analysis = self.name(), left, right, %reason, "pair omitted");
                }
                Err(reason) => {
                    debug!(analysis = self.name(), left, right, %reason, "pair skipped");
                }
            }
        }

        debug!(
            analysis = self.name(),
            pairs = pairs.len(),
            emitted = results.len(),
            "pairwise analysis finished"
        );
        results
    }
}

#[cfg(feature = "parallel")]
fn execute_pairs<'a, F, R>(pairs: &[(&'a str, &'a str)], parallel: bool, f: F) -> Vec<R>
where
    F: Fn(&'a str, &'a str) -> R + Sync + Send,
    R: Send,
{
    use rayon::prelude::*;

    if parallel {
        pairs.par_iter().map(|&(left, right)| f(left, right)).collect()
    } else {
        pairs.iter().map(|&(left, right)| f(left, right)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn execute_pairs<'a, F, R>(pairs: &[(&'a str, &'a str)], _parallel: bool, f: F) -> Vec<R>
where
    F: Fn(&'a str, &'a str) -> R + Sync + Send,
    R: Send,
{
    pairs.iter().map(|&(left, right)| f(left, right)).collect()
}

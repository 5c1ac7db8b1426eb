use futures::{StreamExt, stream};

use crate::core::Result;
use crate::core::constants::defaults;
use crate::ui::ProgressReporter;
use crate::validation::verifier::VerifyUrl;

/// Outcome of probing one generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Source number the URL was generated from
    pub range_number: u64,
    pub url: String,
    pub reachable: bool,
}

impl VerificationResult {
    fn pending() -> Self {
        Self {
            range_number: 0,
            url: String::new(),
            reachable: false,
        }
    }
}

/// Runs probes with a fixed number in flight and returns results in input
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationScheduler {
    workers: usize,
}

impl VerificationScheduler {
    /// A worker count of 0 is treated as 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(defaults::MIN_THREADS),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Allocate the results table for `count` items, all unreachable.
    ///
    /// # Errors
    /// Returns [`PlaygenError::Allocation`](crate::core::PlaygenError::Allocation)
    /// when the table does not fit in memory.
    pub fn reserve_slots(count: usize) -> Result<Vec<VerificationResult>> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(count)?;
        slots.resize_with(count, VerificationResult::pending);
        Ok(slots)
    }

    /// Verify every `(range_number, url)` pair into the preallocated `slots`.
    ///
    /// `items` is consumed lazily; only the first `slots.len()` pairs are
    /// probed. Result `i` belongs to item `i`, no matter in which order the
    /// probes complete.
    pub async fn schedule_all<I>(
        &self,
        mut slots: Vec<VerificationResult>,
        items: I,
        verifier: &dyn VerifyUrl,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Vec<VerificationResult>
    where
        I: IntoIterator<Item = (u64, String)>,
    {
        let total = slots.len();
        if let Some(prog) = progress.as_deref_mut() {
            prog.start_verification(total);
        }

        let mut probes = stream::iter(items.into_iter().take(total).enumerate())
            .map(|(slot, (range_number, url))| async move {
                let reachable = verifier.verify(&url).await;
                let result = VerificationResult {
                    range_number,
                    url,
                    reachable,
                };
                (slot, result)
            })
            .buffer_unordered(self.workers);

        let mut completed = 0;
        let mut reachable_count = 0;
        while let Some((slot, result)) = probes.next().await {
            if result.reachable {
                reachable_count += 1;
            }
            // Each slot is written by exactly one probe
            slots[slot] = result;
            completed += 1;

            if let Some(prog) = progress.as_deref()
                && (completed % defaults::PROGRESS_INTERVAL == 0 || completed == 1)
            {
                prog.update_verification_progress(completed);
            }
        }

        if let Some(prog) = progress.as_deref() {
            prog.update_verification_progress(completed);
            prog.finish_verification(reachable_count, total);
        }

        slots
    }
}

impl Default for VerificationScheduler {
    fn default() -> Self {
        Self::new(defaults::THREADS)
    }
}

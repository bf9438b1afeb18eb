//! First-improvement local search over pairwise position swaps.
//!
//! Each sweep visits every ordered position pair `(i, j)`, `i` ascending in
//! the outer loop and `j` ascending in the inner loop, skipping `i == j`.
//! An improving swap is committed on the spot, so later pairs in the same
//! sweep see the updated sequence. The search ends after a sweep that
//! accepts nothing.

use super::{NoProgress, ProgressCallback, SearchResult};
use crate::config::SearchParams;
use crate::scorer::Scorer;
use crate::sequence::Item;
use std::ops::RangeInclusive;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct RefineOptions {
    pub max_sweeps: Option<usize>,
    pub min_improvement: f64,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            max_sweeps: None,
            min_improvement: 1e-9,
        }
    }
}

impl From<&SearchParams> for RefineOptions {
    fn from(p: &SearchParams) -> Self {
        Self {
            max_sweeps: p.max_sweeps,
            min_improvement: p.min_improvement,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefineStats {
    pub sweeps: usize,
    pub accepted: usize,
    /// Authoritative score after each sweep.
    pub history: Vec<f64>,
    /// Stopped by the callback rather than by convergence.
    pub aborted: bool,
    /// Swaps accepted by the most recent sweep. `None` before the first one.
    pub last_accepted: Option<usize>,
}

impl RefineStats {
    /// The last completed sweep found no improving swap.
    pub fn converged(&self) -> bool {
        !self.aborted && self.last_accepted == Some(0)
    }
}

/// Refines `result` to a swap-local optimum with default options.
pub fn refine(scorer: &Scorer, result: SearchResult) -> SearchResult {
    refine_with(scorer, result, &RefineOptions::default(), &NoProgress).0
}

pub fn refine_with<CB: ProgressCallback>(
    scorer: &Scorer,
    result: SearchResult,
    opts: &RefineOptions,
    callback: &CB,
) -> (SearchResult, RefineStats) {
    let mut working = result.sequence;
    let mut score = scorer.score_fast(&working);
    let mut stats = RefineStats::default();

    info!("🔁 Refining from {:.2}", score);

    loop {
        if opts.max_sweeps.is_some_and(|max| stats.sweeps >= max) {
            break;
        }

        let accepted = sweep(scorer, &mut working, &mut score, opts, callback, &mut stats);
        stats.sweeps += 1;
        stats.last_accepted = Some(accepted);
        stats.history.push(score);

        if stats.aborted || !callback.on_sweep(stats.sweeps, score, accepted) {
            stats.aborted = true;
            break;
        }
        if accepted == 0 {
            break;
        }
        debug!(
            "Sweep {}: {} swaps, score {:.2}",
            stats.sweeps, accepted, score
        );
    }

    let final_result = SearchResult::evaluate(scorer, working);
    info!(
        "Refined to {:.2} after {} sweeps ({} swaps)",
        final_result.score, stats.sweeps, stats.accepted
    );
    (final_result, stats)
}

/// One pass over all ordered position pairs. Returns the number of accepted swaps.
pub fn sweep<CB: ProgressCallback>(
    scorer: &Scorer,
    working: &mut [Item],
    score: &mut f64,
    opts: &RefineOptions,
    callback: &CB,
    stats: &mut RefineStats,
) -> usize {
    let len = working.len();
    let mut accepted = 0;

    for i in 0..len {
        for j in 0..len {
            if i == j {
                continue;
            }
            if swap_gain(scorer, working, i, j) <= opts.min_improvement {
                continue;
            }

            working.swap(i, j);
            let new_score = scorer.score_fast(working);
            debug!(
                "Improve score from {:.4} to {:.4} by swapping positions {} and {}",
                score, new_score, i, j
            );
            let keep_going = callback.on_swap(i, j, *score, new_score);
            *score = new_score;
            accepted += 1;
            stats.accepted += 1;

            if !keep_going {
                stats.aborted = true;
                return accepted;
            }
        }
    }
    accepted
}

/// Change in the objective if positions `i` and `j` were swapped.
///
/// Only the windows around `i` and `j` hold pairs that can change. Windows
/// that overlap are scored as their union so no pair is counted twice.
/// The sequence is left exactly as it was.
pub fn swap_gain(scorer: &Scorer, working: &mut [Item], i: usize, j: usize) -> f64 {
    let windows = affected_windows(working.len(), scorer.window, i, j);
    let before = windows_score(scorer, working, &windows);
    working.swap(i, j);
    let after = windows_score(scorer, working, &windows);
    working.swap(i, j);
    after - before
}

fn windows_score(scorer: &Scorer, seq: &[Item], windows: &[RangeInclusive<usize>]) -> f64 {
    windows
        .iter()
        .map(|w| scorer.score_fast(&seq[w.clone()]))
        .sum()
}

/// `[max(0, p - W), min(len - 1, p + W)]` for `p = i, j`, merged when they overlap.
pub fn affected_windows(
    len: usize,
    window: usize,
    i: usize,
    j: usize,
) -> Vec<RangeInclusive<usize>> {
    let around = |p: usize| p.saturating_sub(window)..=(p + window).min(len - 1);
    let (a, b) = (around(i.min(j)), around(i.max(j)));
    if b.start() <= a.end() {
        vec![*a.start()..=*b.end()]
    } else {
        vec![a, b]
    }
}

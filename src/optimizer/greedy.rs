//! Greedy sequence construction: grow from a single item, always appending
//! the candidate that maximizes the objective of the sequence so far.

use super::{ProgressCallback, SearchResult};
use crate::error::{SeqForgeError, SfResult};
use crate::scorer::Scorer;
use crate::sequence::Item;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct GreedyOutcome {
    pub start: Item,
    pub result: SearchResult,
}

/// Builds a full permutation starting from `start`.
///
/// Candidates are tried in ascending item order and only a strictly higher
/// score displaces the current leader, so ties go to the smallest item.
pub fn greedy_from(scorer: &Scorer, start: Item) -> SfResult<SearchResult> {
    let n = scorer.universe_size();
    if start >= n {
        return Err(SeqForgeError::InvalidSequence(format!(
            "start item {} is outside 0..{}",
            start, n
        )));
    }
    Ok(construct(scorer, start))
}

fn construct(scorer: &Scorer, start: Item) -> SearchResult {
    let n = scorer.universe_size();
    let mut remaining: Vec<Item> = (0..n).filter(|&x| x != start).collect();
    let mut seq = Vec::with_capacity(n);
    seq.push(start);

    while !remaining.is_empty() {
        let mut top_idx = 0;
        let mut top_score = f64::NEG_INFINITY;

        for (k, &candidate) in remaining.iter().enumerate() {
            seq.push(candidate);
            let score = scorer.score_fast(&seq);
            seq.pop();
            if score > top_score {
                top_idx = k;
                top_score = score;
            }
        }

        // `remove` keeps the ascending order the tie-break relies on.
        seq.push(remaining.remove(top_idx));
    }

    SearchResult::evaluate(scorer, seq)
}

/// Higher score wins; equal scores go to the lower start. Order-independent,
/// so the parallel and sequential reductions agree.
fn better(a: GreedyOutcome, b: GreedyOutcome) -> GreedyOutcome {
    let b_wins = b.result.score > a.result.score
        || (b.result.score == a.result.score && b.start < a.start);
    if b_wins {
        b
    } else {
        a
    }
}

/// Runs the greedy construction from every start and keeps the best.
pub fn greedy_all<CB: ProgressCallback>(
    scorer: &Scorer,
    parallel: bool,
    callback: &CB,
) -> SfResult<GreedyOutcome> {
    let n = scorer.universe_size();
    info!(
        "🧱 Greedy construction from {} starts ({})",
        n,
        if parallel { "parallel" } else { "sequential" }
    );

    let run_start = |start: Item| {
        let result = construct(scorer, start);
        debug!("Greedy from {:3}: {:.2}", start, result.score);
        callback.on_greedy_start(start, result.score);
        GreedyOutcome { start, result }
    };

    let best = if parallel {
        (0..n).into_par_iter().map(run_start).reduce_with(better)
    } else {
        (0..n).map(run_start).reduce(better)
    };

    let best = best.ok_or_else(|| SeqForgeError::Config("universe is empty".to_string()))?;
    info!(
        "Greedy best: {:.2} (start {})",
        best.result.score, best.start
    );
    Ok(best)
}

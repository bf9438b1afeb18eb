pub mod greedy;
pub mod refine;
pub mod runner;

use crate::scorer::Scorer;
use crate::sequence::Item;
use serde::{Deserialize, Serialize};

/// A sequence together with the score it evaluates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub sequence: Vec<Item>,
}

impl SearchResult {
    pub fn evaluate(scorer: &Scorer, sequence: Vec<Item>) -> Self {
        Self {
            score: scorer.score_fast(&sequence),
            sequence,
        }
    }
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_greedy_start(&self, _start: Item, _score: f64) {}

    fn on_swap(&self, _i: usize, _j: usize, _old_score: f64, _new_score: f64) -> bool {
        true
    }

    fn on_sweep(&self, _sweep: usize, _score: f64, _accepted: usize) -> bool {
        true
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {}

use super::greedy::{greedy_all, GreedyOutcome};
use super::refine::{refine_with, RefineOptions, RefineStats};
use super::{ProgressCallback, SearchResult};
use crate::config::Config;
use crate::error::SfResult;
use crate::scorer::Scorer;
use crate::sequence::Item;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct OptimizationOptions {
    pub parallel: bool,
    pub refine: RefineOptions,
    pub max_time: Option<Duration>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            parallel: cfg.search.parallel,
            refine: RefineOptions::from(&cfg.search),
            max_time: None, // Set manually if needed
        }
    }
}

pub struct OptimizationResult {
    pub greedy: GreedyOutcome,
    pub refined: SearchResult,
    pub stats: RefineStats,
    pub elapsed: Duration,
}

/// Stops the refiner once the time budget is spent.
struct Deadline<'a, CB> {
    inner: &'a CB,
    start: Instant,
    limit: Option<Duration>,
}

impl<CB> Deadline<'_, CB> {
    fn expired(&self) -> bool {
        self.limit.is_some_and(|l| self.start.elapsed() >= l)
    }
}

impl<CB: ProgressCallback> ProgressCallback for Deadline<'_, CB> {
    fn on_greedy_start(&self, start: Item, score: f64) {
        self.inner.on_greedy_start(start, score)
    }

    fn on_swap(&self, i: usize, j: usize, old_score: f64, new_score: f64) -> bool {
        self.inner.on_swap(i, j, old_score, new_score) && !self.expired()
    }

    fn on_sweep(&self, sweep: usize, score: f64, accepted: usize) -> bool {
        self.inner.on_sweep(sweep, score, accepted) && !self.expired()
    }
}

/// Greedy construction over every start, then swap refinement of the winner.
pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run<CB: ProgressCallback>(&self, callback: CB) -> SfResult<OptimizationResult> {
        let opts = &self.options;
        let start = Instant::now();
        let guarded = Deadline {
            inner: &callback,
            start,
            limit: opts.max_time,
        };

        let greedy = greedy_all(&self.scorer, opts.parallel, &guarded)?;
        let (refined, stats) =
            refine_with(&self.scorer, greedy.result.clone(), &opts.refine, &guarded);

        Ok(OptimizationResult {
            greedy,
            refined,
            stats,
            elapsed: start.elapsed(),
        })
    }
}

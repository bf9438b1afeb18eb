pub mod affinity;
pub mod distance;
pub mod engine;
pub mod trace;
pub mod types;

use self::affinity::AffinityTable;
pub use self::types::ScoreDetails;
use crate::config::SearchParams;
use crate::error::SfResult;
use crate::sequence::Item;
use tracing::info;

/// Objective evaluator for one universe and window, backed by a memoized
/// affinity table.
pub struct Scorer {
    pub window: usize,
    pub table: AffinityTable,
}

impl Scorer {
    pub fn new(params: &SearchParams) -> SfResult<Self> {
        params.validate()?;
        info!(
            "🧮 Building affinity table for {} items (window {})",
            params.universe_size, params.window
        );
        Ok(Self::with_size(params.universe_size, params.window))
    }

    pub fn with_size(universe_size: usize, window: usize) -> Self {
        Self {
            window,
            table: AffinityTable::build(universe_size),
        }
    }

    #[inline(always)]
    pub fn universe_size(&self) -> usize {
        self.table.size()
    }

    #[inline(always)]
    pub fn affinity(&self, n: Item, m: Item) -> u32 {
        self.table.get(n, m)
    }

    pub fn posdist(&self, n: Item, m: Item, sequence: &[Item]) -> SfResult<usize> {
        crate::sequence::posdist(n, m, sequence)
    }

    pub fn pair_score(&self, n: Item, m: Item, sequence: &[Item]) -> SfResult<f64> {
        engine::pair_score(self, n, m, sequence)
    }

    /// Windowed objective for the search loops (Fast). Accepts any slice.
    #[inline]
    pub fn score_fast(&self, sequence: &[Item]) -> f64 {
        engine::score_fast(self, sequence)
    }

    /// Pairwise definition of the objective. Requires a full permutation.
    pub fn score_reference(&self, sequence: &[Item]) -> SfResult<f64> {
        engine::score_reference(self, sequence)
    }

    /// Detailed scoring for the validation report (Rich Data)
    pub fn score_debug(&self, sequence: &[Item]) -> SfResult<ScoreDetails> {
        engine::score_debug(self, sequence)
    }
}

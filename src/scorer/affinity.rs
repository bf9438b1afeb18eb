use super::distance::levenshtein;
use super::trace::trace;
use crate::sequence::Item;
use rayon::prelude::*;
use tracing::debug;

/// Edit distance between the fingerprints of two integers. Uncached.
pub fn affinity(n: i64, m: i64) -> u32 {
    levenshtein(&trace(n), &trace(m))
}

/// Memoized affinities for every unordered pair of the universe.
///
/// Built in one pass before anything reads it; read-only afterwards, so it is
/// shared freely across the rayon pool.
pub struct AffinityTable {
    size: usize,
    fingerprints: Vec<String>,
    values: Vec<u32>,
}

impl AffinityTable {
    pub fn build(size: usize) -> Self {
        let fingerprints: Vec<String> = (0..size)
            .into_par_iter()
            .map(|n| trace(n as i64))
            .collect();

        // Upper triangle only, then mirror.
        let mut values = vec![0u32; size * size];
        values
            .par_chunks_mut(size.max(1))
            .enumerate()
            .for_each(|(n, row)| {
                for (m, cell) in row.iter_mut().enumerate().skip(n + 1) {
                    *cell = levenshtein(&fingerprints[n], &fingerprints[m]);
                }
            });
        for n in 0..size {
            for m in (n + 1)..size {
                values[m * size + n] = values[n * size + m];
            }
        }

        let empty = fingerprints.iter().filter(|f| f.is_empty()).count();
        debug!(
            "Affinity table: {} items, {} pairs, {} empty fingerprints",
            size,
            size * size.saturating_sub(1) / 2,
            empty
        );

        Self {
            size,
            fingerprints,
            values,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Falls back to a direct computation for items outside the universe.
    #[inline(always)]
    pub fn get(&self, n: Item, m: Item) -> u32 {
        if n < self.size && m < self.size {
            self.values[n * self.size + m]
        } else {
            affinity(n as i64, m as i64)
        }
    }

    pub fn fingerprint(&self, n: Item) -> Option<&str> {
        self.fingerprints.get(n).map(String::as_str)
    }
}

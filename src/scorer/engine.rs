use super::{ScoreDetails, Scorer};
use crate::error::{SeqForgeError, SfResult};
use crate::sequence::{build_pos_map, Item};

/// Every position pair `(i, j)` with `0 < j - i <= window`, ordered by `j` then `i`.
///
/// Each unordered in-window pair appears once, at the larger of its two indices.
pub fn window_pairs(len: usize, window: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |j| (j.saturating_sub(window)..j).map(move |i| (i, j)))
}

/// Fast Path: O(len * W). Valid on any slice, not only full permutations.
pub fn score_fast(scorer: &Scorer, sequence: &[Item]) -> f64 {
    window_pairs(sequence.len(), scorer.window)
        .map(|(i, j)| scorer.table.get(sequence[i], sequence[j]) as f64 / (j - i) as f64)
        .sum()
}

/// Reference Path: every unordered pair of distinct universe items, kept when
/// their positions are within the window.
pub fn score_reference(scorer: &Scorer, sequence: &[Item]) -> SfResult<f64> {
    let pos_map = build_pos_map(sequence, scorer.universe_size())?;
    let mut total = 0.0;
    for m in 0..pos_map.len() {
        for n in 0..m {
            let dist = pos_map[n].abs_diff(pos_map[m]);
            if dist <= scorer.window {
                total += scorer.table.get(n, m) as f64 / dist as f64;
            }
        }
    }
    Ok(total)
}

/// Detailed Path: used by validation reports.
pub fn score_debug(scorer: &Scorer, sequence: &[Item]) -> SfResult<ScoreDetails> {
    build_pos_map(sequence, scorer.universe_size())?;

    let mut d = ScoreDetails {
        by_distance: vec![0.0; scorer.window],
        ..Default::default()
    };
    let mut affinity_sum = 0u64;

    for (i, j) in window_pairs(sequence.len(), scorer.window) {
        let dist = j - i;
        let aff = scorer.table.get(sequence[i], sequence[j]);
        let contribution = aff as f64 / dist as f64;
        d.score += contribution;
        d.by_distance[dist - 1] += contribution;
        d.pairs += 1;
        affinity_sum += aff as u64;
    }

    if d.pairs > 0 {
        d.mean_affinity = affinity_sum as f64 / d.pairs as f64;
    }
    d.empty_fingerprints = sequence
        .iter()
        .filter(|&&n| scorer.table.fingerprint(n).is_some_and(str::is_empty))
        .count();
    Ok(d)
}

/// Affinity over position distance for one pair of items of `sequence`.
pub fn pair_score(scorer: &Scorer, n: Item, m: Item, sequence: &[Item]) -> SfResult<f64> {
    if n == m {
        return Err(SeqForgeError::InvalidSequence(format!(
            "pair score of item {} with itself",
            n
        )));
    }
    let dist = crate::sequence::posdist(n, m, sequence)?;
    if dist == 0 {
        return Err(SeqForgeError::InvalidSequence(format!(
            "items {} and {} share a position",
            n, m
        )));
    }
    Ok(scorer.table.get(n, m) as f64 / dist as f64)
}

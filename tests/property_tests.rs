use proptest::prelude::*;
use seqforge::greedy_from;
use seqforge::scorer::engine::window_pairs;
use seqforge::scorer::Scorer;
use seqforge::sequence::is_permutation;
use std::sync::OnceLock;

const N: usize = 24;

fn scorer() -> &'static Scorer {
    static SCORER: OnceLock<Scorer> = OnceLock::new();
    SCORER.get_or_init(|| Scorer::with_size(N, 3))
}

// --- STRATEGIES ---

prop_compose! {
    fn arb_permutation()(seq in Just((0..N).collect::<Vec<usize>>()).prop_shuffle()) -> Vec<usize> {
        seq
    }
}

prop_compose! {
    fn arb_slice()(seq in arb_permutation(), a in 0..N, b in 0..N) -> (Vec<usize>, usize, usize) {
        (seq, a.min(b), a.max(b))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_reference_equals_fast(seq in arb_permutation()) {
        let s = scorer();
        let reference = s.score_reference(&seq).unwrap();
        let fast = s.score_fast(&seq);
        prop_assert!((reference - fast).abs() < 1e-6, "{} vs {}", reference, fast);
    }

    #[test]
    fn test_posdist_symmetric(seq in arb_permutation(), n in 0..N, m in 0..N) {
        let s = scorer();
        prop_assert_eq!(s.posdist(n, m, &seq).unwrap(), s.posdist(m, n, &seq).unwrap());
    }

    #[test]
    fn test_slice_score_is_internal_contribution((seq, lo, hi) in arb_slice()) {
        let s = scorer();
        let standalone = s.score_fast(&seq[lo..=hi]);

        let mut internal = 0.0;
        for (i, j) in window_pairs(seq.len(), s.window) {
            if i >= lo && j <= hi {
                internal += s.affinity(seq[i], seq[j]) as f64 / (j - i) as f64;
            }
        }
        prop_assert!((standalone - internal).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_yields_permutation(start in 0..N) {
        let r = greedy_from(scorer(), start).unwrap();
        prop_assert!(is_permutation(&r.sequence, N));
        prop_assert_eq!(r.sequence[0], start);
    }

    #[test]
    fn test_any_window_size_agrees(seq in arb_permutation(), window in 1usize..8) {
        let s = Scorer::with_size(N, window);
        let reference = s.score_reference(&seq).unwrap();
        prop_assert!((reference - s.score_fast(&seq)).abs() < 1e-6);
    }
}

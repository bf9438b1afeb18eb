use rstest::rstest;
use seqforge::scorer::Scorer;
use seqforge::sequences::KnownSequence;
use seqforge::{affinity, levenshtein, trace};
use std::sync::OnceLock;

fn scorer_100() -> &'static Scorer {
    static SCORER: OnceLock<Scorer> = OnceLock::new();
    SCORER.get_or_init(|| Scorer::with_size(100, 3))
}

#[test]
fn test_trace_fixture_and_determinism() {
    assert_eq!(trace(12), "bbfdaaedab");
    for n in [-5, 0, 7, 12, 99, 1_000_000] {
        assert_eq!(trace(n), trace(n));
    }
}

#[test]
fn test_levenshtein_fixture() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_affinity_uses_fingerprints() {
    assert_eq!(affinity(3, 40), levenshtein(&trace(3), &trace(40)));
    assert_eq!(affinity(3, 40), affinity(40, 3));
}

#[rstest]
#[case(KnownSequence::Reference)]
#[case(KnownSequence::GreedyBest)]
#[case(KnownSequence::SwapImproved)]
fn test_known_sequence_scores(#[case] known: KnownSequence) {
    let scorer = scorer_100();
    let fast = scorer.score_fast(known.items());
    let reference = scorer.score_reference(known.items()).unwrap();

    assert!(
        (fast - known.expected_score()).abs() < 0.001,
        "{}: fast {} vs {}",
        known,
        fast,
        known.expected_score()
    );
    assert!((reference - known.expected_score()).abs() < 0.001);
    assert!((fast - reference).abs() < 1e-6);
}

#[test]
fn test_reference_fixture_exact() {
    let scorer = scorer_100();
    let seq = KnownSequence::Reference.items();
    assert!((scorer.score_reference(seq).unwrap() - 2121.5).abs() < 0.001);
    assert!((scorer.score_fast(seq) - 2121.5).abs() < 0.001);
}

#[test]
fn test_score_details_breakdown() {
    let scorer = scorer_100();
    let d = scorer.score_debug(KnownSequence::Reference.items()).unwrap();
    assert_eq!(d.pairs, 3 + 97 * 3);
    assert_eq!(d.by_distance.len(), 3);
    assert!((d.score - 2121.5).abs() < 0.001);
    assert!(d.mean_affinity > 0.0);
}

#[test]
fn test_invalid_sequences_fail_fast() {
    let scorer = scorer_100();
    let mut seq = KnownSequence::Reference.items().to_vec();
    seq.pop();
    assert!(scorer.score_reference(&seq).is_err());
    assert!(scorer.score_debug(&seq).is_err());

    seq.push(seq[0]);
    assert!(scorer.score_reference(&seq).is_err());
}

#[test]
fn test_pair_score_never_self() {
    let scorer = scorer_100();
    let seq = KnownSequence::Reference.items();
    assert!(scorer.pair_score(56, 56, seq).is_err());
    let expected = scorer.affinity(56, 7) as f64 / 2.0;
    assert_eq!(scorer.pair_score(56, 7, seq).unwrap(), expected);
}

#[test]
fn test_fast_matches_pair_scores_on_window_pairs() {
    let scorer = scorer_100();
    let seq = KnownSequence::GreedyBest.items();
    let mut total = 0.0;
    for (i, j) in seqforge::scorer::engine::window_pairs(seq.len(), scorer.window) {
        assert_ne!(seq[i], seq[j]);
        total += scorer.pair_score(seq[i], seq[j], seq).unwrap();
    }
    assert!((total - scorer.score_fast(seq)).abs() < 1e-9);
}

use crate::error::{SeqForgeError, SfResult};
use fastrand::Rng;

pub type Item = usize;

pub const NOT_PRESENT: usize = usize::MAX;

/// Item -> position index for a permutation of `0..universe_size`.
///
/// Fails on wrong length, out-of-range items and duplicates.
pub fn build_pos_map(sequence: &[Item], universe_size: usize) -> SfResult<Vec<usize>> {
    if sequence.len() != universe_size {
        return Err(SeqForgeError::InvalidSequence(format!(
            "expected {} items, got {}",
            universe_size,
            sequence.len()
        )));
    }

    let mut map = vec![NOT_PRESENT; universe_size];
    for (i, &item) in sequence.iter().enumerate() {
        if item >= universe_size {
            return Err(SeqForgeError::InvalidSequence(format!(
                "item {} at position {} is outside 0..{}",
                item, i, universe_size
            )));
        }
        if map[item] != NOT_PRESENT {
            return Err(SeqForgeError::InvalidSequence(format!(
                "item {} appears at positions {} and {}",
                item, map[item], i
            )));
        }
        map[item] = i;
    }
    Ok(map)
}

pub fn is_permutation(sequence: &[Item], universe_size: usize) -> bool {
    build_pos_map(sequence, universe_size).is_ok()
}

/// Position of `item`. Fails when it is absent or occurs more than once.
pub fn index_of(item: Item, sequence: &[Item]) -> SfResult<usize> {
    let mut hits = sequence
        .iter()
        .enumerate()
        .filter(|&(_, &x)| x == item)
        .map(|(i, _)| i);
    let first = hits
        .next()
        .ok_or_else(|| SeqForgeError::InvalidSequence(format!("item {} is not present", item)))?;
    if let Some(second) = hits.next() {
        return Err(SeqForgeError::InvalidSequence(format!(
            "item {} appears at positions {} and {}",
            item, first, second
        )));
    }
    Ok(first)
}

/// Absolute difference of the positions of `n` and `m`.
pub fn posdist(n: Item, m: Item, sequence: &[Item]) -> SfResult<usize> {
    Ok(index_of(n, sequence)?.abs_diff(index_of(m, sequence)?))
}

/// Uniformly shuffled permutation of `0..universe_size`.
pub fn random_sequence(rng: &mut Rng, universe_size: usize) -> Vec<Item> {
    let mut seq: Vec<Item> = (0..universe_size).collect();
    rng.shuffle(&mut seq);
    seq
}

/// Parses "3, 1, 2" into a sequence.
pub fn parse_sequence(s: &str) -> SfResult<Vec<Item>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<Item>().map_err(|_| {
                SeqForgeError::InvalidSequence(format!("'{}' is not a non-negative integer", p))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posdist_on_sparse_items() {
        let seq = vec![1111, 12, 54, 89, 91, 1112];
        assert_eq!(posdist(12, 54, &seq).unwrap(), 1);
        assert_eq!(posdist(12, 89, &seq).unwrap(), 2);
        assert_eq!(posdist(89, 12, &seq).unwrap(), 2);
        assert_eq!(posdist(1111, 1112, &seq).unwrap(), 5);
    }

    #[test]
    fn test_posdist_missing_item() {
        let seq = vec![0, 1, 2];
        assert!(matches!(
            posdist(0, 7, &seq),
            Err(SeqForgeError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_posdist_duplicate_item() {
        assert!(matches!(
            posdist(1, 2, &[1, 2, 1]),
            Err(SeqForgeError::InvalidSequence(_))
        ));
        assert!(matches!(
            posdist(2, 1, &[1, 2, 1]),
            Err(SeqForgeError::InvalidSequence(_))
        ));
        // Duplicates of other items are not this call's concern.
        assert_eq!(posdist(0, 2, &[0, 1, 1, 2]).unwrap(), 3);
    }

    #[test]
    fn test_pos_map_rejects_bad_sequences() {
        assert!(build_pos_map(&[2, 0, 1], 3).is_ok());
        assert!(build_pos_map(&[0, 1], 3).is_err());
        assert!(build_pos_map(&[0, 1, 1], 3).is_err());
        assert!(build_pos_map(&[0, 1, 3], 3).is_err());
    }

    #[test]
    fn test_pos_map_inverts_sequence() {
        let seq = vec![3, 0, 2, 1];
        let map = build_pos_map(&seq, 4).unwrap();
        for (i, &item) in seq.iter().enumerate() {
            assert_eq!(map[item], i);
        }
    }

    #[test]
    fn test_random_sequence_is_permutation() {
        let mut rng = Rng::with_seed(7);
        for n in 1..20 {
            assert!(is_permutation(&random_sequence(&mut rng, n), n));
        }
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("3, 1,2 ,").unwrap(), vec![3, 1, 2]);
        assert!(parse_sequence("1,-2").is_err());
        assert!(parse_sequence("1,x").is_err());
    }
}

use crate::sequence::Item;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Published sequences for the 100-item universe, used as regression anchors.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownSequence {
    /// Scores 2121.5.
    Reference,
    /// Best greedy construction (start 34), scores 2286.5.
    GreedyBest,
    /// Earlier swap-refined result, scores 2365.33.
    SwapImproved,
}

impl KnownSequence {
    pub fn items(&self) -> &'static [Item] {
        match self {
            Self::Reference => &[
                56, 44, 7, 18, 6, 61, 98, 4, 21, 64, 58, 81, 78, 22, 93, 55, 79, 24, 86, 13, 51,
                57, 90, 54, 92, 67, 8, 88, 3, 36, 84, 99, 77, 1, 37, 38, 14, 29, 50, 60, 35, 42,
                70, 73, 27, 53, 46, 83, 23, 52, 94, 63, 96, 33, 12, 31, 91, 69, 0, 28, 80, 30,
                40, 41, 34, 75, 71, 89, 87, 65, 9, 62, 82, 11, 48, 17, 49, 39, 16, 5, 74, 25, 95,
                2, 85, 10, 76, 32, 59, 66, 43, 45, 47, 20, 15, 72, 68, 97, 19, 26,
            ],
            Self::GreedyBest => &[
                34, 59, 17, 8, 14, 67, 92, 80, 78, 75, 84, 19, 35, 3, 26, 91, 27, 69, 38, 23, 90,
                86, 1, 37, 13, 2, 49, 70, 95, 33, 81, 94, 25, 39, 20, 42, 62, 6, 88, 73, 24, 97,
                44, 52, 51, 96, 61, 43, 9, 68, 65, 98, 22, 50, 66, 30, 0, 56, 77, 31, 60, 40, 29,
                71, 55, 28, 82, 57, 87, 21, 76, 32, 79, 54, 36, 53, 83, 47, 74, 99, 5, 11, 72, 18,
                64, 10, 93, 85, 15, 16, 7, 46, 89, 48, 41, 63, 45, 58, 12, 4,
            ],
            Self::SwapImproved => &[
                72, 78, 17, 84, 41, 0, 92, 38, 45, 63, 93, 19, 79, 3, 48, 91, 27, 69, 58, 23, 90,
                86, 1, 60, 15, 77, 56, 70, 95, 33, 81, 94, 25, 39, 20, 42, 62, 6, 12, 73, 24, 97,
                74, 52, 51, 96, 61, 43, 9, 44, 85, 80, 49, 37, 65, 89, 35, 34, 2, 31, 98, 8, 29,
                71, 55, 28, 82, 57, 87, 21, 76, 32, 13, 54, 36, 53, 59, 47, 26, 18, 5, 11, 88,
                99, 64, 10, 22, 75, 50, 40, 7, 46, 30, 67, 68, 66, 14, 16, 83, 4,
            ],
        }
    }

    pub fn expected_score(&self) -> f64 {
        match self {
            Self::Reference => 2121.5,
            Self::GreedyBest => 2286.5,
            Self::SwapImproved => 2365.333_333_333_333_5,
        }
    }
}

pub fn get_all_sequences() -> HashMap<KnownSequence, Vec<Item>> {
    KnownSequence::iter()
        .map(|s| (s, s.items().to_vec()))
        .collect()
}

//! Generic edit distance with pluggable per-character costs.

use strum_macros::{Display, EnumIter, EnumString};

pub type CharCost = Box<dyn Fn(char) -> f32 + Send + Sync>;
pub type PairCost = Box<dyn Fn(char, char) -> f32 + Send + Sync>;

/// Edit distance parameterised by insertion, deletion and substitution costs.
pub struct EditDistanceMetric {
    insertion: CharCost,
    deletion: CharCost,
    substitution: PairCost,
}

impl EditDistanceMetric {
    pub fn new(insertion: CharCost, deletion: CharCost, substitution: PairCost) -> Self {
        Self {
            insertion,
            deletion,
            substitution,
        }
    }

    /// Unit costs everywhere: classic Levenshtein.
    pub fn levenshtein() -> Self {
        Self::new(Box::new(|_| 1.0), Box::new(|_| 1.0), Box::new(|_, _| 1.0))
    }

    /// Edits touching a vowel cost half.
    pub fn vowel_discounted() -> Self {
        Self::new(
            Box::new(|c| if is_vowel(c) { 0.5 } else { 1.0 }),
            Box::new(|c| if is_vowel(c) { 0.5 } else { 1.0 }),
            Box::new(|a, b| {
                if is_vowel(a) || is_vowel(b) {
                    0.5
                } else {
                    1.0
                }
            }),
        )
    }

    /// Rows walk `b`, columns walk `a`. The border rows are plain indices, so
    /// the cost of an all-insert or all-delete prefix is its length whatever
    /// the cost closures say.
    ///
    /// Matching characters are free; the substitution closure is only asked
    /// about characters that differ.
    pub fn distance(&self, a: &str, b: &str) -> f32 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let width = a.len() + 1;

        let mut prev: Vec<f32> = (0..width).map(|x| x as f32).collect();
        let mut curr = vec![0.0f32; width];

        for y in 1..=b.len() {
            curr[0] = y as f32;
            for x in 1..=a.len() {
                let subst = prev[x - 1] + self.cost_substitution(a[x - 1], b[y - 1]);
                let insert = prev[x] + (self.insertion)(b[y - 1]);
                let delete = curr[x - 1] + (self.deletion)(a[x - 1]);
                curr[x] = subst.min(insert).min(delete);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[a.len()]
    }

    #[inline(always)]
    fn cost_substitution(&self, a: char, b: char) -> f32 {
        if a == b {
            0.0
        } else {
            (self.substitution)(a, b)
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Named presets selectable from the command line.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum Metric {
    Levenshtein,
    VowelDiscounted,
}

impl Metric {
    pub fn build(&self) -> EditDistanceMetric {
        match self {
            Self::Levenshtein => EditDistanceMetric::levenshtein(),
            Self::VowelDiscounted => EditDistanceMetric::vowel_discounted(),
        }
    }
}

/// Unit-cost edit distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> u32 {
    // Chars and rows are tiny; an integer DP avoids going through f32.
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<u32> = (0..=a.len() as u32).collect();
    let mut curr = vec![0u32; a.len() + 1];

    for y in 1..=b.len() {
        curr[0] = y as u32;
        for x in 1..=a.len() {
            let subst = prev[x - 1] + u32::from(a[x - 1] != b[y - 1]);
            curr[x] = subst.min(prev[x] + 1).min(curr[x - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[a.len()]
}

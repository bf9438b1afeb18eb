pub mod config;
pub mod error;
pub mod optimizer;
pub mod scorer;
pub mod sequence;
pub mod sequences;

pub use optimizer::greedy::{greedy_all, greedy_from};
pub use optimizer::refine::refine;
pub use optimizer::SearchResult;
pub use scorer::affinity::affinity;
pub use scorer::distance::levenshtein;
pub use scorer::trace::trace;
pub use scorer::Scorer;

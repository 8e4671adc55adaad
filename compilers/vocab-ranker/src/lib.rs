//! Frequency aggregation and weighted ranking of vocabulary units.

pub mod aggregate;
pub mod score;

pub use aggregate::{TagPolicy, VocabularyTable};
pub use score::{Scorer, ScoringConfig};

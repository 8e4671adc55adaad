pub mod ids;
pub mod tags;

// Re-export core types for convenience
pub use ids::{SentenceId, UnitId};
pub use tags::*;

pub mod model;
pub use model::*;

pub mod variations;
pub use variations::AnswerVariations;

pub mod vocab;
pub use vocab::*;

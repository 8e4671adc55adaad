pub mod token;
pub mod error;
pub mod lexicon;
pub mod tagger;
pub mod chunker;
pub mod ner;
pub mod annotator;
pub mod english;
pub mod extract;
pub mod answers;

pub use annotator::{assemble, Annotator, Doc};
pub use answers::parse_answer_variations;
pub use english::EnglishAnnotator;
pub use error::ModelError;
pub use extract::extract_candidates;
pub use lexicon::{load_lexicon, LexiconIndex};
pub use tagger::{RawToken, Reading};

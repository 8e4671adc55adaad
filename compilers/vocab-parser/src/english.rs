//! The shipped annotator: nlprule's English tokenizer supplies sentences,
//! tokens, readings and chunks; the lexicon adds stopwords and entities.

use std::path::Path;

use nlprule::Tokenizer;
use tracing::info;
use vocab_protocol::Lexicon;

use crate::annotator::{assemble, Annotator, Doc};
use crate::error::ModelError;
use crate::lexicon::{load_lexicon, LexiconIndex};
use crate::tagger::{RawToken, Reading};

pub struct EnglishAnnotator {
    tokenizer: Tokenizer,
    index: LexiconIndex,
}

impl EnglishAnnotator {
    pub fn new(tokenizer: Tokenizer, lexicon: &Lexicon) -> Self {
        Self { tokenizer, index: LexiconIndex::new(lexicon) }
    }

    /// Load the tagger model (an nlprule `en_tokenizer.bin`) and the
    /// lexicon. Either file missing is an error the caller should treat as
    /// fatal.
    pub fn load(model: &Path, lexicon: &Path) -> Result<Self, ModelError> {
        if !model.is_file() {
            return Err(ModelError::NotFound(model.to_path_buf()));
        }
        let tokenizer =
            Tokenizer::new(model).map_err(|source| ModelError::Tagger { path: model.to_path_buf(), source })?;
        info!(path = %model.display(), "tagger model loaded");

        Ok(Self::new(tokenizer, &load_lexicon(lexicon)?))
    }
}

fn raw_token(token: &nlprule::types::Token, offset: usize) -> RawToken {
    let span = token.span().byte();
    RawToken {
        start: offset + span.start,
        end: offset + span.end,
        readings: token
            .word()
            .tags()
            .iter()
            .map(|data| Reading::new(data.lemma().as_str(), data.pos().as_str()))
            .collect(),
        chunks: token.chunks().to_vec(),
    }
}

impl Annotator for EnglishAnnotator {
    #[tracing::instrument(skip_all, fields(bytes = text.len()))]
    fn annotate<'a>(&self, text: &'a str) -> Doc<'a> {
        // Line breaks always end a sentence
        let mut sentences = Vec::new();
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            if !line.trim().is_empty() {
                for sentence in self.tokenizer.pipe(line) {
                    sentences.push(sentence.tokens().iter().map(|t| raw_token(t, offset)).collect());
                }
            }
            offset += line.len();
        }
        assemble(text, sentences, &self.index)
    }
}

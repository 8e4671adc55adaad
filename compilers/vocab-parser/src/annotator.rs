use tracing::debug;
use vocab_protocol::{PartOfSpeech, SentenceId, TokenFlags};

use crate::chunker::{noun_chunks, Chunk};
use crate::lexicon::LexiconIndex;
use crate::ner::{Entity, EntityRecognizer};
use crate::tagger::{self, RawToken};
use crate::token::{Span, Token};

/// An annotated document. Tokens, chunks and entities all borrow `text`.
#[derive(Debug, Clone)]
pub struct Doc<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
    pub chunks: Vec<Chunk>,
    pub entities: Vec<Entity>,
}

impl<'a> Doc<'a> {
    fn slice(&self, start: usize, end: usize) -> &'a str {
        let text: &'a str = self.text;
        match (self.tokens.get(start), end.checked_sub(1).and_then(|last| self.tokens.get(last))) {
            (Some(first), Some(last)) if start < end => &text[first.span.start..last.span.end],
            _ => "",
        }
    }

    /// Original text covered by a chunk, inner whitespace included.
    pub fn chunk_text(&self, chunk: &Chunk) -> &'a str {
        self.slice(chunk.start, chunk.end)
    }

    /// Lowercase lemmas of a chunk joined by single spaces.
    pub fn chunk_lemma(&self, chunk: &Chunk) -> String {
        self.tokens[chunk.start..chunk.end]
            .iter()
            .map(|t| t.lemma.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn entity_text(&self, entity: &Entity) -> &'a str {
        self.slice(entity.start, entity.end)
    }
}

/// Anything that turns raw text into a tagged `Doc`.
pub trait Annotator {
    fn annotate<'a>(&self, text: &'a str) -> Doc<'a>;
}

fn shape_flags(text: &str) -> TokenFlags {
    let mut flags = TokenFlags::empty();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return flags;
    };
    if text.chars().all(char::is_alphabetic) {
        flags |= TokenFlags::IS_ALPHA;
    }
    let has_cased = text.chars().any(char::is_alphabetic);
    if has_cased && !text.chars().any(char::is_lowercase) {
        flags |= TokenFlags::IS_UPPER;
    }
    if first.is_uppercase() && chars.all(|c| !c.is_uppercase()) {
        flags |= TokenFlags::IS_TITLE;
    }
    flags
}

/// Build a `Doc` from tagger output, one token list per sentence: settle
/// each token's reading, then mark entities and collect noun chunks.
///
/// Tokens whose byte range falls outside `text` or covers only whitespace
/// are dropped.
pub fn assemble<'a, S>(text: &'a str, sentences: S, index: &LexiconIndex) -> Doc<'a>
where
    S: IntoIterator<Item = Vec<RawToken>>,
{
    let mut tokens = Vec::new();
    for (n, sentence) in sentences.into_iter().enumerate() {
        let mut first = true;
        for raw in sentence {
            let Some(piece) = text.get(raw.start..raw.end) else {
                continue;
            };
            if piece.trim().is_empty() {
                continue;
            }

            let (lemma, pos) = tagger::resolve(&raw, piece);
            let lower = piece.to_lowercase();
            let mut flags = shape_flags(piece) | tagger::chunk_flags(&raw.chunks);
            if pos == PartOfSpeech::Punct {
                flags |= TokenFlags::IS_PUNCT;
            }
            if index.is_stopword(&lower) {
                flags |= TokenFlags::IS_STOP;
            }
            if first {
                flags |= TokenFlags::SENT_START;
                first = false;
            }

            tokens.push(Token {
                span: Span::new(raw.start, raw.end),
                text: piece,
                lower,
                lemma,
                pos,
                flags,
                sentence: SentenceId(n as u32),
                entity: None,
            });
        }
    }

    let entities = EntityRecognizer::new().recognize(index, &mut tokens);
    // Entity members are proper nouns whatever the tagger read
    for token in tokens.iter_mut().filter(|t| t.entity.is_some()) {
        token.pos = PartOfSpeech::Propn;
    }
    let chunks = noun_chunks(&tokens);

    debug!(
        tokens = tokens.len(),
        chunks = chunks.len(),
        entities = entities.len(),
        "document annotated"
    );
    Doc { text, tokens, chunks, entities }
}

use vocab_protocol::{PartOfSpeech, SentenceId, TokenFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token after tagging. `text` borrows from the annotated document.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub lower: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub flags: TokenFlags,
    pub sentence: SentenceId,
    /// Index into `Doc::entities` when the token sits inside an entity span.
    pub entity: Option<usize>,
}

impl<'a> Token<'a> {
    /// Contains a letter and is not punctuation.
    pub fn is_word(&self) -> bool {
        !self.is_punct() && self.text.chars().any(char::is_alphabetic)
    }

    pub fn is_stop(&self) -> bool {
        self.flags.contains(TokenFlags::IS_STOP)
    }

    pub fn is_punct(&self) -> bool {
        self.flags.contains(TokenFlags::IS_PUNCT)
    }

    pub fn is_alpha(&self) -> bool {
        self.flags.contains(TokenFlags::IS_ALPHA)
    }

    /// Starts with a capital letter ("London", "UN").
    pub fn is_capitalized(&self) -> bool {
        self.flags.intersects(TokenFlags::IS_TITLE | TokenFlags::IS_UPPER)
    }

    pub fn is_sentence_start(&self) -> bool {
        self.flags.contains(TokenFlags::SENT_START)
    }
}

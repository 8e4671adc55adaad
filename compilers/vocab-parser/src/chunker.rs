//! Noun chunks from the tagger's chunk marks.
//!
//! A chunk opens on `NP_BEGIN`, grows over `NP_INSIDE`/`NP_END` tokens and
//! closes after `NP_END`, at the next non-chunk token or at a sentence
//! boundary. Chunks without a noun or proper noun are dropped.

use vocab_protocol::{SentenceId, TokenFlags};

use crate::token::Token;

/// Token range `[start, end)` of one noun chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub sentence: SentenceId,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

const CONTINUES: TokenFlags = TokenFlags::NP_INSIDE.union(TokenFlags::NP_END);

pub fn noun_chunks(tokens: &[Token]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut open: Option<usize> = None;

    let close = |start: usize, end: usize, chunks: &mut Vec<Chunk>| {
        if tokens[start..end].iter().any(|t| t.pos.is_nominal()) {
            chunks.push(Chunk { start, end, sentence: tokens[start].sentence });
        }
    };

    for (i, token) in tokens.iter().enumerate() {
        if let Some(start) = open {
            let continues = token.flags.intersects(CONTINUES)
                && !token.flags.contains(TokenFlags::NP_BEGIN)
                && token.sentence == tokens[start].sentence;
            if !continues {
                close(start, i, &mut chunks);
                open = None;
            }
        }
        if open.is_none() && token.flags.intersects(TokenFlags::NP_BEGIN | CONTINUES) {
            open = Some(i);
        }
        if token.flags.contains(TokenFlags::NP_END) {
            if let Some(start) = open.take() {
                close(start, i + 1, &mut chunks);
            }
        }
    }
    if let Some(start) = open {
        close(start, tokens.len(), &mut chunks);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;
    use vocab_protocol::PartOfSpeech;

    fn tok(text: &'static str, pos: PartOfSpeech, np: TokenFlags, sentence: u32) -> Token<'static> {
        Token {
            span: Span::new(0, text.len()),
            text,
            lower: text.to_lowercase(),
            lemma: text.to_lowercase(),
            pos,
            flags: np,
            sentence: SentenceId(sentence),
            entity: None,
        }
    }

    const B: TokenFlags = TokenFlags::NP_BEGIN;
    const I: TokenFlags = TokenFlags::NP_INSIDE;
    const E: TokenFlags = TokenFlags::NP_END;
    const O: TokenFlags = TokenFlags::empty();

    fn spans(chunks: &[Chunk]) -> Vec<(usize, usize)> {
        chunks.iter().map(|c| (c.start, c.end)).collect()
    }

    #[test]
    fn test_marked_chunks() {
        // "The quick brown fox jumps over the lazy dog"
        let tokens = vec![
            tok("The", PartOfSpeech::Det, B, 0),
            tok("quick", PartOfSpeech::Adj, I, 0),
            tok("brown", PartOfSpeech::Adj, I, 0),
            tok("fox", PartOfSpeech::Noun, E, 0),
            tok("jumps", PartOfSpeech::Verb, O, 0),
            tok("over", PartOfSpeech::Adp, O, 0),
            tok("the", PartOfSpeech::Det, B, 0),
            tok("lazy", PartOfSpeech::Adj, I, 0),
            tok("dog", PartOfSpeech::Noun, E, 0),
        ];
        assert_eq!(spans(&noun_chunks(&tokens)), vec![(0, 4), (6, 9)]);
    }

    #[test]
    fn test_adjacent_chunks_split_on_begin() {
        let tokens = vec![
            tok("residents", PartOfSpeech::Noun, B, 0),
            tok("plastic", PartOfSpeech::Adj, B, 0),
            tok("waste", PartOfSpeech::Noun, E, 0),
        ];
        assert_eq!(spans(&noun_chunks(&tokens)), vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn test_single_token_chunk() {
        let tokens = vec![tok("Recycling", PartOfSpeech::Noun, B | E, 0), tok("helps", PartOfSpeech::Verb, O, 0)];
        assert_eq!(spans(&noun_chunks(&tokens)), vec![(0, 1)]);
    }

    #[test]
    fn test_chunk_needs_a_noun() {
        let tokens = vec![tok("we", PartOfSpeech::Pron, B | E, 0), tok("all", PartOfSpeech::Det, B | E, 0)];
        assert!(noun_chunks(&tokens).is_empty());
    }

    #[test]
    fn test_chunks_stop_at_sentence_boundary() {
        let tokens = vec![
            tok("machine", PartOfSpeech::Noun, B, 0),
            tok("learning", PartOfSpeech::Noun, I, 1),
        ];
        assert_eq!(spans(&noun_chunks(&tokens)), vec![(0, 1), (1, 2)]);
    }
}

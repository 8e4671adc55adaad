use std::collections::BTreeSet;

use vocab_protocol::{AnswerVariations, CandidateUnit, FileCategory, PartOfSpeech, UnitKind};

use crate::annotator::Doc;
use crate::token::Token;

const MIN_WORD_CHARS: usize = 3;
const PHRASE_WORDS: std::ops::RangeInclusive<usize> = 2..=4;

fn variations_for(variations: Option<&AnswerVariations>, lemma: &str, surface: &str) -> BTreeSet<String> {
    match variations {
        Some(map) => map.lookup([lemma, surface.to_lowercase().as_str()]),
        None => BTreeSet::new(),
    }
}

fn is_vocabulary_word(token: &Token) -> bool {
    token.is_alpha()
        && !token.is_stop()
        && !token.is_punct()
        && token.entity.is_none()
        && token.text.chars().count() >= MIN_WORD_CHARS
}

/// Turn an annotated document into candidate units, in document order:
/// words first, then noun phrases, then named entities.
pub fn extract_candidates(
    doc: &Doc,
    category: FileCategory,
    variations: Option<&AnswerVariations>,
) -> Vec<CandidateUnit> {
    let mut candidates = Vec::new();

    // 1. Content words outside entity spans
    for token in doc.tokens.iter().filter(|t| is_vocabulary_word(t)) {
        let lemma = token.lemma.to_lowercase();
        candidates.push(CandidateUnit {
            surface: token.lower.clone(),
            variations: variations_for(variations, &lemma, token.text),
            lemma,
            pos: token.pos,
            kind: UnitKind::Word,
            category,
        });
    }

    // 2. Noun phrases of two to four words
    for chunk in &doc.chunks {
        let text = doc.chunk_text(chunk);
        if !PHRASE_WORDS.contains(&text.split_whitespace().count()) {
            continue;
        }
        let lemma = doc.chunk_lemma(chunk);
        candidates.push(CandidateUnit {
            surface: text.to_string(),
            variations: variations_for(variations, &lemma, text),
            lemma,
            pos: PartOfSpeech::NounPhrase,
            kind: UnitKind::Phrase,
            category,
        });
    }

    // 3. People, organisations and places
    for entity in doc.entities.iter().filter(|e| e.label.is_vocabulary()) {
        let text = doc.entity_text(entity);
        let lemma = text.to_lowercase();
        candidates.push(CandidateUnit {
            surface: text.to_string(),
            variations: variations_for(variations, &lemma, text),
            lemma,
            pos: PartOfSpeech::Propn,
            kind: UnitKind::ProperNoun,
            category,
        });
    }

    candidates
}

//! Named-entity recognition over tagged tokens.
//!
//! Three passes, each only looking at tokens no earlier pass claimed:
//! gazetteer matches (longest first), titled person names, and capitalized
//! runs closed by an organisation or location marker.

use vocab_protocol::EntityLabel;

use crate::lexicon::LexiconIndex;
use crate::token::Token;

/// Token range `[start, end)` recognised as a named entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

fn same_sentence_words(tokens: &[Token], start: usize, len: usize) -> bool {
    let Some(window) = tokens.get(start..start + len) else {
        return false;
    };
    window.iter().all(|t| t.is_word() && t.sentence == window[0].sentence)
}

fn joined_lower(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.lower.as_str()).collect::<Vec<_>>().join(" ")
}

/// Length of the run of capitalized words starting at `start`.
fn capitalized_run(tokens: &[Token], start: usize, claimed: &[bool]) -> usize {
    let Some(first) = tokens.get(start) else {
        return 0;
    };
    tokens[start..]
        .iter()
        .zip(&claimed[start..])
        .take_while(|(t, taken)| {
            !**taken && t.is_word() && t.is_capitalized() && t.sentence == first.sentence
        })
        .count()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntityRecognizer;

impl EntityRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// Find entities and mark every covered token with its entity index.
    pub fn recognize(&self, index: &LexiconIndex, tokens: &mut [Token]) -> Vec<Entity> {
        let mut claimed = vec![false; tokens.len()];
        let mut entities = Vec::new();

        // 1. Gazetteer, longest match first
        let mut i = 0;
        while i < tokens.len() {
            let longest = index.longest_entity().min(tokens.len() - i);
            let found = (1..=longest).rev().find_map(|len| {
                if !same_sentence_words(tokens, i, len) {
                    return None;
                }
                index
                    .entity(&joined_lower(&tokens[i..i + len]))
                    .map(|label| (len, label))
            });
            match found {
                Some((len, label)) => {
                    claimed[i..i + len].fill(true);
                    entities.push(Entity { start: i, end: i + len, label });
                    i += len;
                }
                None => i += 1,
            }
        }

        // 2. Titles followed by capitalized names ("Mr. Chan Tai Man")
        let mut i = 0;
        while i < tokens.len() {
            if claimed[i] || !tokens[i].is_word() || !index.is_title(&tokens[i].lower) {
                i += 1;
                continue;
            }
            let mut name_start = i + 1;
            if tokens.get(name_start).is_some_and(|t| t.text == ".") {
                name_start += 1;
            }
            let len = capitalized_run(tokens, name_start, &claimed);
            if len == 0 {
                i += 1;
                continue;
            }
            claimed[name_start..name_start + len].fill(true);
            entities.push(Entity { start: name_start, end: name_start + len, label: EntityLabel::Person });
            i = name_start + len;
        }

        // 3. Capitalized runs closed by a marker word
        let mut i = 0;
        while i < tokens.len() {
            let mut len = capitalized_run(tokens, i, &claimed);
            let mut start = i;
            // "The Hong Kong Science Park": the article is not part of the name
            if len > 0 && tokens[start].is_sentence_start() && index.is_stopword(&tokens[start].lower) {
                start += 1;
                len -= 1;
            }
            if len < 2 {
                i = start + len.max(1);
                continue;
            }
            let last = &tokens[start + len - 1].lower;
            let label = if index.is_organization_marker(last) {
                Some(EntityLabel::Org)
            } else if index.is_location_marker(last) {
                Some(EntityLabel::Loc)
            } else {
                None
            };
            if let Some(label) = label {
                claimed[start..start + len].fill(true);
                entities.push(Entity { start, end: start + len, label });
            }
            i = start + len;
        }

        entities.sort_by_key(|e| e.start);
        for (n, entity) in entities.iter().enumerate() {
            for token in &mut tokens[entity.start..entity.end] {
                token.entity = Some(n);
            }
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{assemble, testing::tagged, Doc};
    use vocab_protocol::{GazetteerEntry, Lexicon};

    fn index() -> LexiconIndex {
        LexiconIndex::new(&Lexicon {
            version: 1,
            stopwords: vec!["the".into()],
            entities: vec![
                GazetteerEntry { text: "Hong Kong".into(), label: EntityLabel::Gpe },
                GazetteerEntry { text: "Kong".into(), label: EntityLabel::Misc },
            ],
            person_titles: vec!["Mr".into(), "Dr".into()],
            organization_markers: vec!["University".into()],
            location_markers: vec!["Park".into()],
            ..Default::default()
        })
    }

    fn labelled(lines: &[&str]) -> Vec<(String, EntityLabel)> {
        let (text, sentences) = tagged(lines);
        let doc: Doc = assemble(&text, sentences, &index());
        doc.entities
            .iter()
            .map(|e| (joined_lower(&doc.tokens[e.start..e.end]), e.label))
            .collect()
    }

    #[test]
    fn test_gazetteer_prefers_longest_match() {
        assert_eq!(
            labelled(&["I|PRP live|VBP in|IN Hong|NNP Kong|NNP now|RB"]),
            vec![("hong kong".to_string(), EntityLabel::Gpe)]
        );
    }

    #[test]
    fn test_titled_person() {
        assert_eq!(
            labelled(&["We|PRP met|VBD Mr|NNP .|PCT Chan|NNP Tai|NNP Man|NNP today|NN"]),
            vec![("chan tai man".to_string(), EntityLabel::Person)]
        );
    }

    #[test]
    fn test_marker_runs() {
        assert_eq!(
            labelled(&[
                "The|DT Science|NNP Park|NNP is|VBZ|be new|JJ",
                "She|PRP studies|VBZ|study at|IN Lingnan|NNP University|NNP",
            ]),
            vec![
                ("science park".to_string(), EntityLabel::Loc),
                ("lingnan university".to_string(), EntityLabel::Org),
            ]
        );
    }

    #[test]
    fn test_tokens_are_marked() {
        let (text, sentences) = tagged(&["Hong|NNP Kong|NNP is|VBZ|be busy|JJ"]);
        let doc = assemble(&text, sentences, &index());
        let marks: Vec<Option<usize>> = doc.tokens.iter().map(|t| t.entity).collect();
        assert_eq!(marks, vec![Some(0), Some(0), None, None]);
    }

    #[test]
    fn test_single_capitalized_word_is_not_an_entity() {
        assert!(labelled(&["Yesterday|NN it|PRP rained|VBD|rain"]).is_empty());
    }
}

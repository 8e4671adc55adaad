//! Readings from the statistical tagger, reduced to one universal tag and
//! lemma per token.
//!
//! The tagger keeps every reading disambiguation could not rule out. The
//! chunk a token sits in breaks the tie: the last word of a noun phrase
//! takes its nominal reading, a verb phrase its verbal one.

use vocab_protocol::{PartOfSpeech, TokenFlags};

/// One tagger reading: lemma plus Penn Treebank tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lemma: String,
    pub tag: String,
}

impl Reading {
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { lemma: lemma.into(), tag: tag.into() }
    }
}

/// A token as the tagger produced it, before flags and entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawToken {
    /// Byte range in the annotated text.
    pub start: usize,
    pub end: usize,
    /// Readings left after disambiguation, in tagger order.
    pub readings: Vec<Reading>,
    /// Chunk labels such as "B-NP-singular", "E-NP-plural" or "B-VP".
    pub chunks: Vec<String>,
}

/// Penn tag to universal tag. Sentence markers and unknown tags give `None`.
pub fn universal_tag(tag: &str, lemma: &str) -> Option<PartOfSpeech> {
    let pos = match tag {
        "NNP" | "NNPS" => PartOfSpeech::Propn,
        t if t.starts_with("NN") => PartOfSpeech::Noun,
        "MD" => PartOfSpeech::Aux,
        t if t.starts_with("VB") && lemma.eq_ignore_ascii_case("be") => PartOfSpeech::Aux,
        t if t.starts_with("VB") => PartOfSpeech::Verb,
        t if t.starts_with("JJ") => PartOfSpeech::Adj,
        t if t.starts_with("RB") || t == "WRB" => PartOfSpeech::Adv,
        "DT" | "PDT" | "WDT" => PartOfSpeech::Det,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PartOfSpeech::Pron,
        "IN" | "RP" => PartOfSpeech::Adp,
        "TO" | "POS" => PartOfSpeech::Part,
        "CC" => PartOfSpeech::Cconj,
        "CD" => PartOfSpeech::Num,
        "UH" => PartOfSpeech::Intj,
        "PCT" | "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" => PartOfSpeech::Punct,
        "SYM" | "$" | "#" => PartOfSpeech::Sym,
        "FW" | "LS" => PartOfSpeech::X,
        _ => return None,
    };
    Some(pos)
}

/// (position, phrase type) of a chunk label: "B-NP-singular" -> ("B", "NP").
fn split_label(label: &str) -> Option<(&str, &str)> {
    let mut parts = label.split('-');
    match (parts.next(), parts.next()) {
        (Some(position @ ("B" | "I" | "E")), Some(phrase)) => Some((position, phrase)),
        _ => None,
    }
}

/// Noun-phrase marks carried by a token's chunk labels.
pub fn chunk_flags(chunks: &[String]) -> TokenFlags {
    chunks
        .iter()
        .filter_map(|label| split_label(label))
        .fold(TokenFlags::empty(), |flags, (position, phrase)| match (position, phrase) {
            ("B", "NP") => flags | TokenFlags::NP_BEGIN,
            ("I", "NP") => flags | TokenFlags::NP_INSIDE,
            ("E", "NP") => flags | TokenFlags::NP_END,
            _ => flags,
        })
}

fn phrase_type(chunks: &[String]) -> Option<&str> {
    chunks.iter().find_map(|label| split_label(label)).map(|(_, phrase)| phrase)
}

fn fits(pos: PartOfSpeech, phrase: Option<&str>, head: bool) -> bool {
    use PartOfSpeech::*;
    match phrase {
        Some("NP") if head => pos.is_nominal(),
        Some("NP") => matches!(pos, Noun | Propn | Adj | Num | Det | Pron | Part),
        Some("VP") => matches!(pos, Verb | Aux | Part | Adv),
        Some("ADJP") => matches!(pos, Adj | Adv),
        Some("ADVP") => pos == Adv,
        Some("PP") => pos == Adp,
        _ => false,
    }
}

/// Tag for a token no reading covers: punctuation and numbers by shape,
/// everything else by the phrase it sits in.
fn untagged(text: &str, phrase: Option<&str>) -> PartOfSpeech {
    if text.chars().all(|c| !c.is_alphanumeric()) {
        return PartOfSpeech::Punct;
    }
    if text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return PartOfSpeech::Num;
    }
    match phrase {
        Some("NP") => PartOfSpeech::Noun,
        Some("VP") => PartOfSpeech::Verb,
        Some("ADJP") => PartOfSpeech::Adj,
        Some("ADVP") => PartOfSpeech::Adv,
        _ => PartOfSpeech::X,
    }
}

/// Lowercase lemma and universal tag for `token`, whose surface is `text`.
pub fn resolve(token: &RawToken, text: &str) -> (String, PartOfSpeech) {
    let phrase = phrase_type(&token.chunks);
    let head = chunk_flags(&token.chunks).contains(TokenFlags::NP_END);

    let known: Vec<(&Reading, PartOfSpeech)> = token
        .readings
        .iter()
        .filter_map(|r| universal_tag(&r.tag, &r.lemma).map(|pos| (r, pos)))
        .collect();
    let chosen = known
        .iter()
        .find(|(_, pos)| fits(*pos, phrase, head))
        .or_else(|| known.iter().find(|(_, pos)| fits(*pos, phrase, false)))
        .or(known.first());

    match chosen {
        Some((reading, pos)) if !reading.lemma.trim().is_empty() => (reading.lemma.trim().to_lowercase(), *pos),
        Some((_, pos)) => (text.to_lowercase(), *pos),
        None => (text.to_lowercase(), untagged(text, phrase)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(readings: &[(&str, &str)], chunks: &[&str]) -> RawToken {
        RawToken {
            start: 0,
            end: 0,
            readings: readings.iter().map(|(lemma, tag)| Reading::new(*lemma, *tag)).collect(),
            chunks: chunks.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_universal_tags() {
        assert_eq!(universal_tag("NNS", "bag"), Some(PartOfSpeech::Noun));
        assert_eq!(universal_tag("NNP", "Chan"), Some(PartOfSpeech::Propn));
        assert_eq!(universal_tag("VBZ", "be"), Some(PartOfSpeech::Aux));
        assert_eq!(universal_tag("VBD", "go"), Some(PartOfSpeech::Verb));
        assert_eq!(universal_tag("JJR", "big"), Some(PartOfSpeech::Adj));
        assert_eq!(universal_tag("PRP$", "our"), Some(PartOfSpeech::Pron));
        assert_eq!(universal_tag("PCT", "."), Some(PartOfSpeech::Punct));
        assert_eq!(universal_tag("SENT_END", ""), None);
    }

    #[test]
    fn test_chunk_flags() {
        assert_eq!(chunk_flags(&["B-NP-singular".into()]), TokenFlags::NP_BEGIN);
        assert_eq!(chunk_flags(&["E-NP-plural".into()]), TokenFlags::NP_END);
        assert_eq!(
            chunk_flags(&["B-NP-singular".into(), "E-NP-singular".into()]),
            TokenFlags::NP_BEGIN | TokenFlags::NP_END
        );
        assert!(chunk_flags(&["B-VP".into(), "O".into()]).is_empty());
    }

    #[test]
    fn test_noun_phrase_head_takes_nominal_reading() {
        // "plastic waste": every verbal reading survives disambiguation
        let waste = raw(&[("waste", "VB"), ("waste", "VBP"), ("waste", "NN")], &["E-NP-singular"]);
        assert_eq!(resolve(&waste, "waste"), ("waste".to_string(), PartOfSpeech::Noun));

        let plastic = raw(&[("plastic", "JJ"), ("plastic", "NN")], &["B-NP-singular"]);
        assert_eq!(resolve(&plastic, "plastic").1, PartOfSpeech::Adj);
    }

    #[test]
    fn test_verb_phrase_takes_verbal_reading() {
        let waste = raw(&[("waste", "NN"), ("waste", "VB")], &["B-VP"]);
        assert_eq!(resolve(&waste, "waste").1, PartOfSpeech::Verb);
    }

    #[test]
    fn test_lemma_comes_from_reading() {
        let bags = raw(&[("bag", "NNS")], &["E-NP-plural"]);
        assert_eq!(resolve(&bags, "Bags"), ("bag".to_string(), PartOfSpeech::Noun));
    }

    #[test]
    fn test_untagged_tokens() {
        assert_eq!(resolve(&raw(&[], &["E-NP-singular"]), "Zorb"), ("zorb".to_string(), PartOfSpeech::Noun));
        assert_eq!(resolve(&raw(&[("", "SENT_END")], &["O"]), "!").1, PartOfSpeech::Punct);
        assert_eq!(resolve(&raw(&[], &["O"]), "2019").1, PartOfSpeech::Num);
        // a reading without a lemma keeps the surface
        assert_eq!(resolve(&raw(&[("", "NN")], &[]), "Tofu").0, "tofu");
    }
}

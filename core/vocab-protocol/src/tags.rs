use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Universal part-of-speech tags, plus the synthetic `NounPhrase` used for
/// multi-word chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Verb = 1,
    Adj = 2,
    Adv = 3,
    Propn = 4,
    Pron = 5,
    Det = 6,
    Adp = 7,
    Aux = 8,
    Cconj = 9,
    Sconj = 10,
    Part = 11,
    Num = 12,
    Intj = 13,
    Punct = 14,
    Sym = 15,
    X = 16,
    NounPhrase = 17,
}

impl PartOfSpeech {
    pub const fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::X => "X",
            PartOfSpeech::NounPhrase => "NOUN_PHRASE",
        }
    }

    /// Heads of noun chunks.
    pub const fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag: '{value}'")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for PartOfSpeech {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [PartOfSpeech; 18] = [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adj,
            PartOfSpeech::Adv,
            PartOfSpeech::Propn,
            PartOfSpeech::Pron,
            PartOfSpeech::Det,
            PartOfSpeech::Adp,
            PartOfSpeech::Aux,
            PartOfSpeech::Cconj,
            PartOfSpeech::Sconj,
            PartOfSpeech::Part,
            PartOfSpeech::Num,
            PartOfSpeech::Intj,
            PartOfSpeech::Punct,
            PartOfSpeech::Sym,
            PartOfSpeech::X,
            PartOfSpeech::NounPhrase,
        ];
        let upper = s.trim().to_ascii_uppercase();
        ALL.into_iter()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| ParseTagError { kind: "part-of-speech", value: s.to_string() })
    }
}

/// Named-entity categories produced by the entity recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum EntityLabel {
    Person = 0,
    Org = 1,
    Gpe = 2,
    Loc = 3,
    Norp = 4,
    Misc = 5,
}

impl EntityLabel {
    /// Only people, organisations, geopolitical entities and locations count
    /// as proper-noun vocabulary.
    pub const fn is_vocabulary(self) -> bool {
        matches!(
            self,
            EntityLabel::Person | EntityLabel::Org | EntityLabel::Gpe | EntityLabel::Loc
        )
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Norp => "NORP",
            EntityLabel::Misc => "MISC",
        })
    }
}

/// The three kinds of vocabulary unit that get ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum UnitKind {
    Word,
    Phrase,
    ProperNoun,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            UnitKind::Word => "Word",
            UnitKind::Phrase => "Phrase",
            UnitKind::ProperNoun => "Proper Noun",
        })
    }
}

/// Which half of the corpus a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FileCategory {
    Script,
    Answer,
    /// Neither marker: contributes sources and forms, never counts.
    Other,
}

impl FileCategory {
    /// Classify a file by name.
    ///
    /// `_answer` / `_script` markers win. Without a marker the second
    /// `_`-separated segment of the stem decides, and a stem with no `_`
    /// at all is treated as a script.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("_answer") {
            return FileCategory::Answer;
        }
        if lower.contains("_script") {
            return FileCategory::Script;
        }

        let stem = lower.strip_suffix(".txt").unwrap_or(&lower);
        let mut parts = stem.split('_');
        parts.next();
        match parts.next() {
            None => FileCategory::Script,
            Some(segment) => segment.parse().unwrap_or(FileCategory::Other),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FileCategory::Script => "script",
            FileCategory::Answer => "answer",
            FileCategory::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "script" => Ok(FileCategory::Script),
            "answer" => Ok(FileCategory::Answer),
            "other" => Ok(FileCategory::Other),
            _ => Err(ParseTagError { kind: "file category", value: s.to_string() }),
        }
    }
}

bitflags! {
    /// Lexical attributes attached to every token by the annotator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct TokenFlags: u16 {
        const IS_STOP = 1;
        const IS_PUNCT = 2;
        const IS_ALPHA = 4;
        const IS_TITLE = 8;
        const IS_UPPER = 16;
        const SENT_START = 32;
        /// Noun-phrase chunk marks from the tagger: first, inner and last
        /// token of a chunk.
        const NP_BEGIN = 64;
        const NP_INSIDE = 128;
        const NP_END = 256;
    }
}

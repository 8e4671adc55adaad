use std::collections::BTreeSet;
use std::fmt;

use crate::ids::UnitId;
use crate::tags::{FileCategory, PartOfSpeech, UnitKind};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Where a candidate came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SourceRef {
    pub file_name: String,
    /// Year prefix when the name has one, otherwise the file stem.
    pub label: String,
    pub category: FileCategory,
}

impl SourceRef {
    pub fn from_file_name(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            label: source_label(file_name),
            category: FileCategory::from_file_name(file_name),
        }
    }
}

/// The first four characters of a file name when they are all digits
/// ("2019_script.txt" -> "2019"); the extension-less stem otherwise.
pub fn source_label(file_name: &str) -> String {
    let prefix: String = file_name.chars().take(4).collect();
    if prefix.chars().count() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        return prefix;
    }
    file_name
        .strip_suffix(".txt")
        .unwrap_or(file_name)
        .to_string()
}

/// One vocabulary unit as emitted by the annotator for a single occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct CandidateUnit {
    pub surface: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub kind: UnitKind,
    pub category: FileCategory,
    pub variations: BTreeSet<String>,
}

/// A lemma and everything accumulated about it over a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct VocabularyUnit {
    pub id: UnitId,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub kind: UnitKind,
    pub script_count: u32,
    pub answer_count: u32,
    pub forms: BTreeSet<String>,
    pub variations: BTreeSet<String>,
    pub sources: BTreeSet<String>,
}

impl VocabularyUnit {
    pub fn new(id: UnitId, lemma: impl Into<String>, pos: PartOfSpeech, kind: UnitKind) -> Self {
        Self {
            id,
            lemma: lemma.into(),
            pos,
            kind,
            script_count: 0,
            answer_count: 0,
            forms: BTreeSet::new(),
            variations: BTreeSet::new(),
            sources: BTreeSet::new(),
        }
    }

    /// Text shown in reports. Proper nouns prefer an observed form that
    /// starts with a capital letter; everything else shows the lemma.
    pub fn display_unit(&self) -> &str {
        if self.kind == UnitKind::ProperNoun {
            if let Some(form) = self
                .forms
                .iter()
                .find(|f| f.chars().next().is_some_and(char::is_uppercase))
            {
                return form;
            }
        }
        &self.lemma
    }
}

/// One row of the raw frequency log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct FrequencyRecord {
    pub unit: String,
    pub source: String,
    pub category: FileCategory,
    pub count: u32,
}

/// Generated inflections for one lemma.
///
/// `Some("")` is meaningful: an uncountable noun has an empty plural.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Inflections {
    pub plural: Option<String>,
    pub past_tense: Option<String>,
    pub comparative: Option<String>,
    pub superlative: Option<String>,
}

impl Inflections {
    pub fn is_empty(&self) -> bool {
        self.plural.is_none()
            && self.past_tense.is_none()
            && self.comparative.is_none()
            && self.superlative.is_none()
    }

    /// Present entries as (name, form) pairs in a fixed order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("plural", &self.plural),
            ("past_tense", &self.past_tense),
            ("comparative", &self.comparative),
            ("superlative", &self.superlative),
        ]
        .into_iter()
        .filter_map(|(name, form)| form.as_deref().map(|f| (name, f)))
        .collect()
    }
}

impl fmt::Display for Inflections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, form)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if form.is_empty() {
                write!(f, "{name}: (none)")?;
            } else {
                write!(f, "{name}: {form}")?;
            }
        }
        Ok(())
    }
}

/// A retained, ranked unit. Built once by the scorer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RankedResult {
    pub rank: usize,
    pub score: u32,
    pub unit: VocabularyUnit,
    pub inflections: Inflections,
}

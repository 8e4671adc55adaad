use rkyv::{Archive, Deserialize, Serialize};

use crate::tags::EntityLabel;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: EntityLabel,
}

/// Word lists layered over the tagger: stopwords and the named-entity
/// gazetteer with its title and marker words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub language: String,
    /// Replaces the built-in stopword list when non-empty.
    pub stopwords: Vec<String>,
    pub entities: Vec<GazetteerEntry>,
    /// "Mr", "Dr", ...: a following capitalized run is a PERSON.
    pub person_titles: Vec<String>,
    /// Final words that turn a capitalized run into an ORG.
    pub organization_markers: Vec<String>,
    /// Final words that turn a capitalized run into a LOC.
    pub location_markers: Vec<String>,
}

impl Lexicon {
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
            && self.entities.is_empty()
            && self.person_titles.is_empty()
            && self.organization_markers.is_empty()
            && self.location_markers.is_empty()
    }
}

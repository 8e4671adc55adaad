use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use rkyv::Deserialize;
use stop_words::{get, LANGUAGE};
use tracing::info;
use vocab_protocol::{EntityLabel, Lexicon};

use crate::error::ModelError;

/// Load the stopword and entity lexicon. `.json` files are parsed with
/// serde_json; anything else must be an rkyv archive produced by
/// `lexicon-compiler`.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, ModelError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ModelError::NotFound(path.to_path_buf()),
        _ => ModelError::Io { path: path.to_path_buf(), source },
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let lexicon = if is_json {
        serde_json::from_slice(&bytes)
            .map_err(|source| ModelError::Json { path: path.to_path_buf(), source })?
    } else {
        decode_archive(&bytes)?
    };

    if lexicon.is_empty() {
        return Err(ModelError::Empty(path.to_path_buf()));
    }

    info!(
        path = %path.display(),
        version = lexicon.version,
        stopwords = lexicon.stopwords.len(),
        entities = lexicon.entities.len(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

/// Validate and deserialize a compiled lexicon.
pub fn decode_archive(bytes: &[u8]) -> Result<Lexicon, ModelError> {
    // Archives must be read from aligned memory
    let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::check_archived_root::<Lexicon>(&aligned)
        .map_err(|e| ModelError::Archive(format!("{e:?}")))?;

    let lexicon: Lexicon = archived
        .deserialize(&mut rkyv::Infallible)
        .unwrap_or_else(|never| match never {});
    Ok(lexicon)
}

/// Lookup structures built once from a `Lexicon`.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    stopwords: HashSet<String>,
    gazetteer: HashMap<String, EntityLabel>,
    longest_entity: usize,
    titles: HashSet<String>,
    organization_markers: HashSet<String>,
    location_markers: HashSet<String>,
}

fn lowered(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.trim().to_lowercase()).collect()
}

/// English list shipped with the `stop-words` crate.
fn default_stopwords() -> HashSet<String> {
    get(LANGUAGE::English).iter().map(|s| s.to_string()).collect()
}

impl LexiconIndex {
    pub fn new(lexicon: &Lexicon) -> Self {
        let stopwords = if lexicon.stopwords.is_empty() {
            default_stopwords()
        } else {
            lowered(&lexicon.stopwords)
        };

        let mut gazetteer = HashMap::new();
        let mut longest_entity = 0;
        for entity in &lexicon.entities {
            let words: Vec<String> = entity.text.split_whitespace().map(str::to_lowercase).collect();
            if words.is_empty() {
                continue;
            }
            longest_entity = longest_entity.max(words.len());
            gazetteer.entry(words.join(" ")).or_insert(entity.label);
        }

        Self {
            stopwords,
            gazetteer,
            longest_entity,
            titles: lexicon
                .person_titles
                .iter()
                .map(|t| t.trim().trim_end_matches('.').to_lowercase())
                .collect(),
            organization_markers: lowered(&lexicon.organization_markers),
            location_markers: lowered(&lexicon.location_markers),
        }
    }

    pub fn is_stopword(&self, lower: &str) -> bool {
        self.stopwords.contains(lower)
    }

    /// Entity label for a space-joined lowercase word sequence.
    pub fn entity(&self, words: &str) -> Option<EntityLabel> {
        self.gazetteer.get(words).copied()
    }

    pub fn longest_entity(&self) -> usize {
        self.longest_entity
    }

    pub fn is_title(&self, lower: &str) -> bool {
        self.titles.contains(lower)
    }

    pub fn is_organization_marker(&self, lower: &str) -> bool {
        self.organization_markers.contains(lower)
    }

    pub fn is_location_marker(&self, lower: &str) -> bool {
        self.location_markers.contains(lower)
    }
}

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vocab_protocol::{
    CandidateUnit, FileCategory, FrequencyRecord, ParseTagError, PartOfSpeech, SourceRef, UnitId, UnitKind,
    VocabularyUnit,
};

/// How a lemma seen with several tags settles on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// The most recent record wins.
    #[default]
    LastSeen,
    /// The first record wins.
    FirstSeen,
    /// The most frequent (POS, type) pair wins; ties go to the most recent.
    Majority,
}

impl fmt::Display for TagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagPolicy::LastSeen => "last",
            TagPolicy::FirstSeen => "first",
            TagPolicy::Majority => "majority",
        })
    }
}

impl FromStr for TagPolicy {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" | "last-seen" => Ok(TagPolicy::LastSeen),
            "first" | "first-seen" => Ok(TagPolicy::FirstSeen),
            "majority" => Ok(TagPolicy::Majority),
            _ => Err(ParseTagError { kind: "tag policy", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Vote {
    count: u32,
    last_seen: u64,
}

/// Everything accumulated over one run, keyed by lemma.
///
/// Units keep their first-encounter order, which is also the tie-break
/// order for ranking.
#[derive(Debug, Clone, Default)]
pub struct VocabularyTable {
    policy: TagPolicy,
    index: HashMap<String, UnitId>,
    units: Vec<VocabularyUnit>,
    votes: Vec<BTreeMap<(PartOfSpeech, UnitKind), Vote>>,
    log: Vec<FrequencyRecord>,
    sequence: u64,
    rejected: usize,
}

fn is_valid(candidate: &CandidateUnit) -> bool {
    if candidate.lemma.trim().is_empty() {
        return false;
    }
    candidate.kind != UnitKind::Word || candidate.lemma.chars().all(char::is_alphabetic)
}

impl VocabularyTable {
    pub fn new(policy: TagPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    /// Fold every candidate of one file into the table and append that
    /// file's rows to the frequency log.
    pub fn ingest_file(&mut self, source: &SourceRef, candidates: impl IntoIterator<Item = CandidateUnit>) {
        let mut order: Vec<UnitId> = Vec::new();
        let mut per_file: HashMap<UnitId, u32> = HashMap::new();

        for candidate in candidates {
            if let Some(id) = self.record(source, candidate) {
                let count = per_file.entry(id).or_insert_with(|| {
                    order.push(id);
                    0
                });
                *count += 1;
            }
        }

        for id in order {
            self.log.push(FrequencyRecord {
                unit: self.units[id.index()].lemma.clone(),
                source: source.label.clone(),
                category: source.category,
                count: per_file[&id],
            });
        }
        debug!(file = %source.file_name, units = self.units.len(), "file aggregated");
    }

    fn record(&mut self, source: &SourceRef, candidate: CandidateUnit) -> Option<UnitId> {
        if !is_valid(&candidate) {
            debug!(lemma = %candidate.lemma, kind = %candidate.kind, "candidate rejected");
            self.rejected += 1;
            return None;
        }
        self.sequence += 1;

        let CandidateUnit { surface, lemma, pos, kind, category, variations } = candidate;
        let id = match self.index.get(&lemma) {
            Some(id) => *id,
            None => {
                let id = UnitId(self.units.len() as u32);
                self.index.insert(lemma.clone(), id);
                self.units.push(VocabularyUnit::new(id, lemma, pos, kind));
                self.votes.push(BTreeMap::new());
                id
            }
        };

        let vote = self.votes[id.index()].entry((pos, kind)).or_default();
        vote.count += 1;
        vote.last_seen = self.sequence;
        let (pos, kind) = match self.policy {
            TagPolicy::LastSeen => (pos, kind),
            TagPolicy::FirstSeen => {
                let unit = &self.units[id.index()];
                (unit.pos, unit.kind)
            }
            TagPolicy::Majority => self.votes[id.index()]
                .iter()
                .max_by_key(|(_, vote)| (vote.count, vote.last_seen))
                .map(|(tags, _)| *tags)
                .unwrap_or((pos, kind)),
        };

        let unit = &mut self.units[id.index()];
        match category {
            FileCategory::Script => unit.script_count += 1,
            FileCategory::Answer => unit.answer_count += 1,
            FileCategory::Other => {}
        }
        unit.pos = pos;
        unit.kind = kind;
        unit.forms.insert(surface);
        unit.variations.extend(variations);
        unit.sources.insert(source.file_name.clone());
        Some(id)
    }

    /// Units in first-encounter order.
    pub fn units(&self) -> &[VocabularyUnit] {
        &self.units
    }

    pub fn get(&self, lemma: &str) -> Option<&VocabularyUnit> {
        self.index.get(lemma).map(|id| &self.units[id.index()])
    }

    /// One row per (unit, file), in the order files and units were seen.
    pub fn frequency_log(&self) -> &[FrequencyRecord] {
        &self.log
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn candidate(lemma: &str, pos: PartOfSpeech, kind: UnitKind, category: FileCategory) -> CandidateUnit {
        CandidateUnit {
            surface: lemma.to_string(),
            lemma: lemma.to_string(),
            pos,
            kind,
            category,
            variations: BTreeSet::new(),
        }
    }

    fn word(lemma: &str, category: FileCategory) -> CandidateUnit {
        candidate(lemma, PartOfSpeech::Noun, UnitKind::Word, category)
    }

    #[test]
    fn test_counts_split_by_category() {
        let mut table = VocabularyTable::default();
        let script = SourceRef::from_file_name("2019_script.txt");
        let answer = SourceRef::from_file_name("2019_answer.txt");
        let other = SourceRef::from_file_name("2019_notes.txt");

        table.ingest_file(&script, vec![word("city", FileCategory::Script), word("city", FileCategory::Script)]);
        table.ingest_file(&answer, vec![word("city", FileCategory::Answer)]);
        table.ingest_file(&other, vec![word("city", FileCategory::Other)]);

        let city = table.get("city").unwrap();
        assert_eq!((city.script_count, city.answer_count), (2, 1));
        assert_eq!(city.sources.len(), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_merges_forms_and_variations() {
        let mut table = VocabularyTable::default();
        let source = SourceRef::from_file_name("2020_answer.txt");
        let mut first = word("cat", FileCategory::Answer);
        first.surface = "cats".to_string();
        first.variations.insert("cats".to_string());
        let mut second = word("cat", FileCategory::Answer);
        second.variations.insert("kitten".to_string());

        table.ingest_file(&source, vec![first, second]);
        let cat = table.get("cat").unwrap();
        assert_eq!(cat.forms.iter().collect::<Vec<_>>(), vec!["cat", "cats"]);
        assert_eq!(cat.variations.len(), 2);
    }

    #[test]
    fn test_rejects_invalid_lemmas() {
        let mut table = VocabularyTable::default();
        let source = SourceRef::from_file_name("a_script.txt");
        table.ingest_file(
            &source,
            vec![
                word("", FileCategory::Script),
                word("covid19", FileCategory::Script),
                candidate("the 1990s", PartOfSpeech::NounPhrase, UnitKind::Phrase, FileCategory::Script),
            ],
        );
        assert_eq!(table.rejected(), 2);
        assert_eq!(table.units().len(), 1);
        assert!(table.get("the 1990s").is_some());
    }

    #[test]
    fn test_tag_policies() {
        let source = SourceRef::from_file_name("x_script.txt");
        let records = || {
            vec![
                candidate("run", PartOfSpeech::Noun, UnitKind::Word, FileCategory::Script),
                candidate("run", PartOfSpeech::Noun, UnitKind::Word, FileCategory::Script),
                candidate("run", PartOfSpeech::Verb, UnitKind::Word, FileCategory::Script),
            ]
        };
        let settled = |policy| {
            let mut table = VocabularyTable::new(policy);
            table.ingest_file(&source, records());
            table.get("run").unwrap().pos
        };

        assert_eq!(settled(TagPolicy::LastSeen), PartOfSpeech::Verb);
        assert_eq!(settled(TagPolicy::FirstSeen), PartOfSpeech::Noun);
        assert_eq!(settled(TagPolicy::Majority), PartOfSpeech::Noun);
    }

    #[test]
    fn test_majority_tie_goes_to_most_recent() {
        let source = SourceRef::from_file_name("x_script.txt");
        let mut table = VocabularyTable::new(TagPolicy::Majority);
        table.ingest_file(
            &source,
            vec![
                candidate("run", PartOfSpeech::Verb, UnitKind::Word, FileCategory::Script),
                candidate("run", PartOfSpeech::Noun, UnitKind::Word, FileCategory::Script),
            ],
        );
        assert_eq!(table.get("run").unwrap().pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_frequency_log_rows() {
        let mut table = VocabularyTable::default();
        let first = SourceRef::from_file_name("2018_script.txt");
        let second = SourceRef::from_file_name("mock_answer.txt");
        table.ingest_file(
            &first,
            vec![word("tree", FileCategory::Script), word("park", FileCategory::Script), word("tree", FileCategory::Script)],
        );
        table.ingest_file(&second, vec![word("park", FileCategory::Answer)]);

        let rows: Vec<(&str, &str, FileCategory, u32)> = table
            .frequency_log()
            .iter()
            .map(|r| (r.unit.as_str(), r.source.as_str(), r.category, r.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("tree", "2018", FileCategory::Script, 2),
                ("park", "2018", FileCategory::Script, 1),
                ("park", "mock_answer", FileCategory::Answer, 1),
            ]
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("majority".parse::<TagPolicy>().unwrap(), TagPolicy::Majority);
        assert_eq!("LAST".parse::<TagPolicy>().unwrap(), TagPolicy::LastSeen);
        assert!("vote".parse::<TagPolicy>().is_err());
        assert_eq!(TagPolicy::FirstSeen.to_string(), "first");
    }
}

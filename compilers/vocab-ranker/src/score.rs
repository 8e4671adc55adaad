use tracing::info;
use vocab_morph::MorphologyGenerator;
use vocab_protocol::{RankedResult, VocabularyUnit};

use crate::aggregate::VocabularyTable;

/// Weights and cut-offs for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub script_weight: u32,
    pub answer_weight: u32,
    /// Units scoring below this are dropped.
    pub min_score: u32,
    /// Maximum number of ranked results.
    pub limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { script_weight: 2, answer_weight: 3, min_score: 4, limit: 500 }
    }
}

impl ScoringConfig {
    pub fn weighted_score(&self, unit: &VocabularyUnit) -> u32 {
        unit.script_count
            .saturating_mul(self.script_weight)
            .saturating_add(unit.answer_count.saturating_mul(self.answer_weight))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score, filter, sort and rank the table. Inflections are generated
    /// only for the units that make the cut.
    #[tracing::instrument(skip_all, fields(units = table.len()))]
    pub fn rank(&self, table: &VocabularyTable, morphology: &MorphologyGenerator) -> Vec<RankedResult> {
        // 1. Score and filter, keeping encounter order
        let mut scored: Vec<(u32, &VocabularyUnit)> = table
            .units()
            .iter()
            .map(|unit| (self.config.weighted_score(unit), unit))
            .filter(|(score, _)| *score >= self.config.min_score)
            .collect();
        let qualifying = scored.len();

        // 2. Stable sort, so equal scores stay in encounter order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.config.limit);

        // 3. Dense ranks from 1
        let results: Vec<RankedResult> = scored
            .into_iter()
            .enumerate()
            .map(|(i, (score, unit))| RankedResult {
                rank: i + 1,
                score,
                inflections: morphology.generate(&unit.lemma, unit.pos),
                unit: unit.clone(),
            })
            .collect();

        info!(qualifying, kept = results.len(), "vocabulary ranked");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use vocab_protocol::{CandidateUnit, FileCategory, PartOfSpeech, SourceRef, UnitKind};

    fn table_from(counts: &[(&str, u32, u32)]) -> VocabularyTable {
        let mut table = VocabularyTable::default();
        let script = SourceRef::from_file_name("2019_script.txt");
        let answer = SourceRef::from_file_name("2019_answer.txt");
        let make = |lemma: &str, category| CandidateUnit {
            surface: lemma.to_string(),
            lemma: lemma.to_string(),
            pos: PartOfSpeech::Adj,
            kind: UnitKind::Word,
            category,
            variations: BTreeSet::new(),
        };
        for &(lemma, s, a) in counts {
            table.ingest_file(&script, (0..s).map(|_| make(lemma, FileCategory::Script)));
            table.ingest_file(&answer, (0..a).map(|_| make(lemma, FileCategory::Answer)));
        }
        table
    }

    #[test]
    fn test_weighted_score() {
        let table = table_from(&[("big", 1, 2)]);
        let unit = table.get("big").unwrap();
        assert_eq!(ScoringConfig::default().weighted_score(unit), 8);
    }

    #[test]
    fn test_threshold_order_and_ties() {
        // scores: alpha 4, beta 3, gamma 6, delta 4
        let table = table_from(&[("alpha", 2, 0), ("beta", 0, 1), ("gamma", 0, 2), ("delta", 2, 0)]);
        let ranked = Scorer::default().rank(&table, &MorphologyGenerator::disabled());

        let order: Vec<(&str, u32, usize)> =
            ranked.iter().map(|r| (r.unit.lemma.as_str(), r.score, r.rank)).collect();
        assert_eq!(order, vec![("gamma", 6, 1), ("alpha", 4, 2), ("delta", 4, 3)]);
    }

    #[test]
    fn test_inflections_for_retained_units() {
        let table = table_from(&[("big", 2, 0)]);
        let ranked = Scorer::default().rank(&table, &MorphologyGenerator::standard());
        assert_eq!(ranked[0].inflections.comparative.as_deref(), Some("bigger"));
    }

    #[test]
    fn test_empty_table() {
        let ranked = Scorer::default().rank(&VocabularyTable::default(), &MorphologyGenerator::disabled());
        assert!(ranked.is_empty());
    }

    proptest! {
        #[test]
        fn test_ranking_invariants(counts in proptest::collection::vec((0u32..4, 0u32..4), 0..40), limit in 1usize..20) {
            let names: Vec<String> = (0..counts.len()).map(|i| format!("w{}", "x".repeat(i))).collect();
            let rows: Vec<(&str, u32, u32)> =
                names.iter().zip(&counts).map(|(n, (s, a))| (n.as_str(), *s, *a)).collect();
            let table = table_from(&rows);
            let scorer = Scorer::new(ScoringConfig { limit, ..Default::default() });
            let ranked = scorer.rank(&table, &MorphologyGenerator::disabled());

            prop_assert!(ranked.len() <= limit);
            for (i, result) in ranked.iter().enumerate() {
                prop_assert_eq!(result.rank, i + 1);
                prop_assert!(result.score >= 4);
                prop_assert_eq!(result.score, result.unit.script_count * 2 + result.unit.answer_count * 3);
            }
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].unit.id < pair[1].unit.id);
                }
            }
        }
    }
}

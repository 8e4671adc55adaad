use tracing::{info, warn};
use vocab_morph::MorphologyGenerator;
use vocab_parser::{extract_candidates, parse_answer_variations, Annotator, EnglishAnnotator};
use vocab_protocol::{AnswerVariations, FileCategory, FrequencyRecord, RankedResult};
use vocab_ranker::{Scorer, ScoringConfig, TagPolicy, VocabularyTable};

use crate::config::AnalyzerConfig;
use crate::error::RunError;
use crate::reader::{discover, read_text, InputFile};

/// A file that was read successfully.
#[derive(Debug, Clone)]
pub struct Document {
    pub file: InputFile,
    pub text: String,
}

/// Result of analysing a set of documents.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub results: Vec<RankedResult>,
    pub frequency_log: Vec<FrequencyRecord>,
    /// Distinct units before scoring.
    pub units_seen: usize,
    pub variation_keys: usize,
}

/// What a full run did, for the console summary.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub analysis: Analysis,
}

/// Union of the variation maps of every answer file, marking rules
/// included.
pub fn collect_variations(documents: &[Document]) -> AnswerVariations {
    let mut variations = AnswerVariations::new();
    for doc in documents.iter().filter(|d| d.file.source.category == FileCategory::Answer) {
        variations.merge(parse_answer_variations(&doc.text));
    }
    variations
}

/// Annotate, aggregate and rank already loaded documents.
#[tracing::instrument(skip_all, fields(documents = documents.len()))]
pub fn analyze<A: Annotator + ?Sized>(
    documents: &[Document],
    annotator: &A,
    morphology: &MorphologyGenerator,
    scoring: ScoringConfig,
    policy: TagPolicy,
) -> Analysis {
    // 1. Marking schemes first, so every file can see all variations
    let variations = collect_variations(documents);

    // 2. Vocabulary from everything except marking rules
    let mut table = VocabularyTable::new(policy);
    for doc in documents.iter().filter(|d| !d.file.is_marking_rules()) {
        let annotated = annotator.annotate(&doc.text);
        let candidates = extract_candidates(&annotated, doc.file.source.category, Some(&variations));
        info!(file = %doc.file.source.file_name, candidates = candidates.len(), "processed");
        table.ingest_file(&doc.file.source, candidates);
    }

    // 3. Score and rank
    let results = Scorer::new(scoring).rank(&table, morphology);

    Analysis {
        results,
        frequency_log: table.frequency_log().to_vec(),
        units_seen: table.len(),
        variation_keys: variations.len(),
    }
}

fn check_data_dir(config: &AnalyzerConfig) -> Result<(), RunError> {
    if config.data_dir.is_dir() {
        Ok(())
    } else {
        Err(RunError::InputDirMissing(config.data_dir.clone()))
    }
}

/// Load the tagger model and lexicon, read the input directory and analyse
/// it.
pub fn run(config: &AnalyzerConfig) -> Result<RunSummary, RunError> {
    check_data_dir(config)?;
    let annotator = EnglishAnnotator::load(&config.model, &config.lexicon)?;
    run_with(config, &annotator)
}

/// Read the input directory and analyse it with an already loaded
/// annotator.
pub fn run_with<A: Annotator + ?Sized>(config: &AnalyzerConfig, annotator: &A) -> Result<RunSummary, RunError> {
    check_data_dir(config)?;
    let files = discover(&config.data_dir)?;
    if files.is_empty() {
        return Err(RunError::NoInputFiles(config.data_dir.clone()));
    }
    info!(count = files.len(), dir = %config.data_dir.display(), "input files found");

    let files_found = files.len();
    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        match read_text(&file.path) {
            Some(text) if text.trim().is_empty() => {
                warn!(file = %file.source.file_name, "skipping empty file");
            }
            Some(text) => documents.push(Document { file, text }),
            None => {}
        }
    }

    let morphology = if config.morphology {
        MorphologyGenerator::standard()
    } else {
        MorphologyGenerator::disabled()
    };
    let analysis = analyze(&documents, annotator, &morphology, config.scoring, config.tag_policy);

    Ok(RunSummary {
        files_found,
        files_processed: documents.len(),
        files_skipped: files_found - documents.len(),
        analysis,
    })
}

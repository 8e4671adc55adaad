use std::path::PathBuf;

use clap::Parser;
use vocab_ranker::{ScoringConfig, TagPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ranks exam vocabulary from script and answer files")]
pub struct Cli {
    /// Directory holding the `.txt` scripts and answer keys
    #[arg(long, env = "VOCAB_DATA_DIR", default_value = "sample_data", value_name = "DIR")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = "output", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Annotation model: an nlprule English tokenizer binary
    #[arg(long, env = "VOCAB_MODEL", default_value = "data/en_tokenizer.bin", value_name = "FILE")]
    pub model: PathBuf,

    /// Stopwords and gazetteer: a JSON lexicon or a compiled archive
    #[arg(long, env = "VOCAB_LEXICON", default_value = "data/en_lexicon.json", value_name = "FILE")]
    pub lexicon: PathBuf,

    /// Rows shown in the console summary
    #[arg(long, default_value_t = 30)]
    pub top: usize,

    /// Maximum number of ranked units
    #[arg(long, default_value_t = 500)]
    pub limit: usize,

    #[arg(long, default_value_t = 4)]
    pub min_score: u32,

    #[arg(long, default_value_t = 2)]
    pub script_weight: u32,

    #[arg(long, default_value_t = 3)]
    pub answer_weight: u32,

    /// How a lemma seen with several tags keeps one: last, first or majority
    #[arg(long, default_value = "last")]
    pub tag_policy: TagPolicy,

    /// File name stem of the reports
    #[arg(long, default_value = "vocab_top500")]
    pub stem: String,

    /// Skip inflection generation
    #[arg(long)]
    pub no_morphology: bool,

    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where and how reports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub stem: String,
    pub top: usize,
    /// Character limit for the variation and form columns.
    pub column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            stem: "vocab_top500".to_string(),
            top: 30,
            column_width: 100,
        }
    }
}

impl ReportConfig {
    pub fn xlsx_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.xlsx", self.stem))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.stem))
    }

    pub fn log_csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_frequency_log.csv", self.stem))
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub data_dir: PathBuf,
    pub model: PathBuf,
    pub lexicon: PathBuf,
    pub scoring: ScoringConfig,
    pub tag_policy: TagPolicy,
    pub morphology: bool,
    pub report: ReportConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("sample_data"),
            model: PathBuf::from("data/en_tokenizer.bin"),
            lexicon: PathBuf::from("data/en_lexicon.json"),
            scoring: ScoringConfig::default(),
            tag_policy: TagPolicy::default(),
            morphology: true,
            report: ReportConfig::default(),
        }
    }
}

impl From<Cli> for AnalyzerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            model: cli.model,
            lexicon: cli.lexicon,
            scoring: ScoringConfig {
                script_weight: cli.script_weight,
                answer_weight: cli.answer_weight,
                min_score: cli.min_score,
                limit: cli.limit,
            },
            tag_policy: cli.tag_policy,
            morphology: !cli.no_morphology,
            report: ReportConfig {
                output_dir: cli.output_dir,
                stem: cli.stem,
                top: cli.top,
                ..ReportConfig::default()
            },
        }
    }
}

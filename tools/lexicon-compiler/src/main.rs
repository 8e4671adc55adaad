use anyhow::{bail, Context};
use clap::Parser;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use vocab_protocol::Lexicon;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to an rkyv archive")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

/// Trim and lowercase word lists, drop blank entries and sort the
/// stopwords so identical sources always compile to identical bytes.
fn normalize(mut lexicon: Lexicon) -> Lexicon {
    let clean = |words: &mut Vec<String>| {
        for word in words.iter_mut() {
            *word = word.trim().to_lowercase();
        }
        words.retain(|w| !w.is_empty());
        words.sort();
        words.dedup();
    };
    clean(&mut lexicon.stopwords);
    clean(&mut lexicon.person_titles);
    clean(&mut lexicon.organization_markers);
    clean(&mut lexicon.location_markers);

    let before = lexicon.entities.len();
    lexicon.entities.retain(|e| !e.text.trim().is_empty());
    if lexicon.entities.len() != before {
        warn!(dropped = before - lexicon.entities.len(), "blank gazetteer entries dropped");
    }
    lexicon
}

fn compile(lexicon: &Lexicon) -> anyhow::Result<Vec<u8>> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner().to_vec();

    // Read the archive back through the same path the analyzer uses
    let decoded = vocab_parser::lexicon::decode_archive(&bytes)?;
    if &decoded != lexicon {
        bail!("compiled archive does not round-trip");
    }
    Ok(bytes)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("📖 Reading JSON from {:?}...", cli.input);
    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    // 2. Deserialize JSON to Rust Structs
    let lexicon: Lexicon = serde_json::from_str(&input_data)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    let lexicon = normalize(lexicon);
    if lexicon.is_empty() {
        bail!("{} has no stopwords, entities or marker words", cli.input.display());
    }

    println!(
        "⚙️  Compiling lexicon version {} ({} entities, {} stopwords)...",
        lexicon.version,
        lexicon.entities.len(),
        lexicon.stopwords.len()
    );

    // 3. Serialize to RKYV
    let bytes = compile(&lexicon)?;

    // 4. Write Binary
    fs::write(&cli.output, &bytes).with_context(|| format!("writing {}", cli.output.display()))?;
    info!(bytes = bytes.len(), output = %cli.output.display(), "lexicon archive written");

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}

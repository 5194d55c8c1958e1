//! Similarity Calculator - OCR vs STT transcript comparison
//!
//! Prints one JSON document on stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use transcript_similarity::core::NormalizedText;
use transcript_similarity::config::config_path;
use transcript_similarity::metrics::BackendChoice;
use transcript_similarity::{Config, SimError, SimilarityCalculator, SimilarityResult};

const USAGE: &str = "Usage: similarity-calculator <ocr_text> <stt_text>";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OCR text, then STT text; anything after the second text is ignored
    ///
    /// Everything after the OCR text is taken literally, flags included.
    /// Put `--` first when the OCR text itself starts with `-`.
    #[arg(value_name = "TEXT", num_args = 0.., trailing_var_arg = true)]
    texts: Vec<OsString>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Cosine backend, overrides the config file
    #[arg(long, value_enum)]
    backend: Option<BackendChoice>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut texts = args.texts.into_iter();
    let (ocr_text, stt_text) = match (texts.next(), texts.next()) {
        (Some(ocr), Some(stt)) => (ocr, stt),
        _ => exit_with_error(&SimError::Usage(USAGE.to_string())),
    };
    let ignored = texts.count();

    // Errors are reported once logging is up
    let loaded = Config::load(args.config.as_deref());

    let default_level = loaded
        .as_ref()
        .map(|c| c.log_level.to_lowercase())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let path = args.config.clone().unwrap_or_else(config_path);
            warn!(
                "⚠️ Config file invalid, using defaults: {}: {}",
                path.display(),
                e
            );
            Config::default()
        }
    };
    if let Some(backend) = args.backend {
        config.cosine_backend = backend;
    }
    debug!("Config: {:?}", config);
    if ignored > 0 {
        debug!("Ignoring {} extra argument(s)", ignored);
    }

    let calculator = SimilarityCalculator::new(&config);
    info!(
        "Comparing transcripts with cosine backend '{}'",
        calculator.backend_name()
    );

    let ocr = NormalizedText::from_os(&ocr_text);
    let stt = NormalizedText::from_os(&stt_text);
    let result = SimilarityResult::from(calculator.measure(&ocr, &stt));

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

/// Print a structured error on stdout and exit with status 1
fn exit_with_error(err: &SimError) -> ! {
    let message = match err {
        SimError::Usage(usage) => usage.clone(),
        other => other.to_string(),
    };
    println!("{}", serde_json::json!({ "error": message }));
    std::process::exit(1);
}

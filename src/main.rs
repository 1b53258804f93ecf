//! `stockdeck` command line: build a stock analysis deck from a JSON file.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stockdeck::deck::{DeckInput, SLIDE_COUNT, StockAnalysisDeck, Theme};
use stockdeck::ooxml::pptx::Package;
use stockdeck::{Error, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stockdeck")]
#[command(version)]
#[command(about = "Generate stock analysis slides", long_about = None)]
struct Args {
    /// Path to JSON data file
    #[arg(long)]
    data: PathBuf,

    /// Output .pptx path
    #[arg(long)]
    output: PathBuf,

    /// JSON file overriding palette, font or canvas size
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Re-open the written deck and check its slide count
    #[arg(long)]
    verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "stockdeck=debug,info" } else { "info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let theme = match &args.theme {
        Some(path) => {
            debug!(path = %path.display(), "loading theme");
            Theme::from_path(path)?
        },
        None => Theme::default(),
    };

    let input = DeckInput::from_path(&args.data)?;
    info!(ticker = %input.ticker, company = %input.company, "building deck");

    let mut deck = StockAnalysisDeck::with_theme(theme);
    deck.build(&input)?;
    let written = deck.save(&args.output)?;

    if args.verify {
        let summary = Package::open(&args.output)
            .and_then(|mut pkg| pkg.summary())
            .map_err(Error::from)?;
        if summary.slide_count() != written || written != SLIDE_COUNT {
            return Err(Error::Verification {
                written,
                read: summary.slide_count(),
            });
        }
        info!(slides = summary.slide_count(), "verified");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdeck::InputError;

    fn args(data: PathBuf, output: PathBuf) -> Args {
        Args {
            data,
            output,
            theme: None,
            verify: true,
            verbose: false,
        }
    }

    fn sample_json() -> String {
        std::fs::read_to_string(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sample_deck.json"),
        )
        .unwrap()
    }

    #[test]
    fn test_run_writes_verified_deck() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.json");
        std::fs::write(&data, sample_json()).unwrap();
        let output = dir.path().join("out/deck.pptx");

        run(&args(data, output.clone())).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_run_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deck.pptx");

        let err = run(&args(dir.path().join("absent.json"), output.clone())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.json");
        std::fs::write(&data, "{ \"ticker\": ").unwrap();
        let output = dir.path().join("deck.pptx");

        let err = run(&args(data, output.clone())).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::Json(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_missing_key() {
        let mut value: serde_json::Value = serde_json::from_str(&sample_json()).unwrap();
        value.as_object_mut().unwrap().remove("risk");

        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.json");
        std::fs::write(&data, value.to_string()).unwrap();
        let output = dir.path().join("deck.pptx");

        let err = run(&args(data, output.clone())).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::MissingKey("risk"))));
        assert!(!output.exists());
    }
}

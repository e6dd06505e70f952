use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use classifier_core::corpus::CorpusReader;
use classifier_core::report::Report;
use classifier_core::{Classifier, ClassifierConfig, Document, Result};
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: classifier TRAIN_FILE TEST_FILE [--debug]";
const FAILURE_EXIT_CODE: i32 = 10086;

#[derive(Parser, Debug)]
#[command(name = "classifier", version, about = "Naive Bayes post classifier")]
struct Cli {
    /// Training corpus (CSV with `tag` and `content` columns)
    train_file: PathBuf,
    /// Test corpus, same layout as the training corpus
    test_file: PathBuf,
    /// Print training rows, priors and per-word likelihoods
    #[arg(long)]
    debug: bool,
    /// Train on partitions and score test posts concurrently
    #[arg(long)]
    parallel: bool,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Saved model to resume from and write back after training
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!(error = %e, "rejected arguments");
            println!("{}", USAGE);
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    // Both corpora must be readable before any training happens.
    let train = open_or_exit(&cli.train_file);
    let test = open_or_exit(&cli.test_file);

    if let Err(e) = run(&cli, train, test) {
        eprintln!("[ERROR] {:#}", e);
        process::exit(1);
    }
}

fn open_or_exit(path: &Path) -> CorpusReader {
    match CorpusReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            println!("{}", e);
            process::exit(FAILURE_EXIT_CODE);
        }
    }
}

fn run(cli: &Cli, train: CorpusReader, test: CorpusReader) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ClassifierConfig::default(),
    };
    config.debug |= cli.debug;
    config.parallel |= cli.parallel;

    let mut classifier = match &cli.model {
        Some(path) => Classifier::from_file_or_new(path, config)
            .with_context(|| format!("loading model {}", path.display()))?,
        None => Classifier::new(config),
    };

    let stdout = io::stdout();
    let report = Report::new(classifier.config(), stdout.is_tty());
    let mut out = stdout.lock();

    let train_path = train.path().to_path_buf();
    let training: Vec<Document> = train
        .collect::<Result<Vec<Document>>>()
        .with_context(|| format!("reading {}", train_path.display()))?;
    report.training_data(&mut out, &training)?;

    classifier.train(&training);
    report.training_summary(&mut out, classifier.statistics())?;

    let scorer = classifier.scorer()?;
    report.model_parameters(&mut out, &scorer)?;

    let test_path = test.path().to_path_buf();
    let testing: Vec<Document> = test
        .collect::<Result<Vec<Document>>>()
        .with_context(|| format!("reading {}", test_path.display()))?;
    let evaluation = classifier.evaluate(testing)?;
    report.test_results(&mut out, &evaluation)?;
    out.flush()?;

    classifier.save_model().context("saving model")?;
    Ok(())
}

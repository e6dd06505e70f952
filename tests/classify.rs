use approx::assert_relative_eq;
use classifier_core::corpus::CorpusReader;
use classifier_core::report::Report;
use classifier_core::{Classifier, ClassifierConfig, Document, Result, StatisticsStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

// 10086 as seen by the parent: unix keeps only the low 8 bits of the status.
#[cfg(unix)]
const FAILURE_EXIT_STATUS: i32 = 10086 & 0xff;

const TRAIN: &str = "\
tag,content
spam,buy now
ham,hello friend
spam,buy cheap
";

const TEST: &str = "\
tag,content
spam,buy
ham,hello there
ham,unseenword
";

fn write_corpora(dir: &TempDir) -> (PathBuf, PathBuf) {
    let train = dir.path().join("train.csv");
    let test = dir.path().join("test.csv");
    fs::write(&train, TRAIN).unwrap();
    fs::write(&test, TEST).unwrap();
    (train, test)
}

fn read(path: &Path) -> Vec<Document> {
    CorpusReader::open(path)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn trains_and_scores_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);

    let mut classifier = Classifier::new(ClassifierConfig::default());
    classifier.train(&read(&train));

    let stats = classifier.statistics();
    assert_eq!(stats.total_posts(), 3);
    assert_eq!(stats.labels().collect::<Vec<_>>(), vec![("ham", 1), ("spam", 2)]);
    assert_eq!(stats.word_post_count("buy"), 2);
    assert_eq!(stats.joint_post_count("buy", "spam"), 2);

    let buy = classifier.predict("buy").unwrap();
    assert_eq!(buy.label, "spam");
    assert_relative_eq!(buy.log_score, (2.0f64 / 3.0).ln() + (2.0f64 / 2.0).ln());

    let unseen = classifier.predict("unseenword").unwrap();
    assert_eq!(unseen.label, "spam");
    assert_relative_eq!(unseen.log_score, (2.0f64 / 3.0).ln() + (1.0f64 / 3.0).ln());

    let evaluation = classifier.evaluate(read(&test)).unwrap();
    assert_eq!(evaluation.total(), 3);
    assert_eq!(evaluation.correct(), 2);
}

#[test]
fn split_training_matches_one_pass() {
    let docs = vec![
        Document::new("a", "x y"),
        Document::new("b", "y z"),
        Document::new("c", "z"),
    ];

    let mut one_pass = StatisticsStore::new();
    for doc in &docs {
        one_pass.ingest(&doc.label, &doc.content);
    }

    let mut split = StatisticsStore::new();
    split.ingest(&docs[2].label, &docs[2].content);
    split.ingest(&docs[0].label, &docs[0].content);
    split.ingest(&docs[1].label, &docs[1].content);

    assert_eq!(one_pass, split);
}

#[test]
fn full_report_matches_expected_output() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);
    let config = ClassifierConfig {
        debug: true,
        ..ClassifierConfig::default()
    };

    let mut classifier = Classifier::new(config);
    let report = Report::new(classifier.config(), false);
    let mut out = Vec::new();

    let training = read(&train);
    report.training_data(&mut out, &training).unwrap();
    classifier.train(&training);
    report.training_summary(&mut out, classifier.statistics()).unwrap();
    report
        .model_parameters(&mut out, &classifier.scorer().unwrap())
        .unwrap();
    let evaluation = classifier.evaluate(read(&test)).unwrap();
    report.test_results(&mut out, &evaluation).unwrap();

    let expected = "\
training data:
  label = spam, content = buy now
  label = ham, content = hello friend
  label = spam, content = buy cheap
trained on 3 examples
vocabulary size = 5

classes:
  ham, 1 examples, log-prior = -1.1
  spam, 2 examples, log-prior = -0.405
classifier parameters:
  ham:friend, count = 1, log-likelihood = 0
  ham:hello, count = 1, log-likelihood = 0
  spam:buy, count = 2, log-likelihood = 0
  spam:cheap, count = 1, log-likelihood = -0.693
  spam:now, count = 1, log-likelihood = -0.693

test data:
  correct = spam, predicted = spam, log-probability score = -0.405
  content = buy

  correct = ham, predicted = ham, log-probability score = -2.2
  content = hello there

  correct = ham, predicted = spam, log-probability score = -1.5
  content = unseenword

performance: 2 / 3 posts predicted correctly
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn binary_prints_summary_and_performance() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
        .arg(&train)
        .arg(&test)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("trained on 3 examples\n\ntest data:\n"));
    assert!(stdout.ends_with("performance: 2 / 3 posts predicted correctly\n"));
    assert!(!stdout.contains("classes:"));
}

#[test]
fn binary_rejects_wrong_argument_count() {
    let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
        .arg("only-one.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Usage: classifier TRAIN_FILE TEST_FILE [--debug]\n"
    );
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(FAILURE_EXIT_STATUS));
}

#[test]
fn binary_rejects_unknown_flag() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
        .arg(&train)
        .arg(&test)
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(FAILURE_EXIT_STATUS));
}

#[test]
fn binary_rejects_unreadable_input_before_training() {
    let dir = tempfile::tempdir().unwrap();
    let (train, _) = write_corpora(&dir);
    let missing = dir.path().join("missing.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
        .arg(&train)
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("Error opening file: {}\n", missing.display()));
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(FAILURE_EXIT_STATUS));
}

#[test]
fn binary_debug_flag_prints_model_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
        .arg(&train)
        .arg(&test)
        .arg("--debug")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("training data:\n  label = spam, content = buy now\n"));
    assert!(stdout.contains("trained on 3 examples\nvocabulary size = 5\n\nclasses:\n"));
    assert!(stdout.contains("  spam, 2 examples, log-prior = -0.405\n"));
    assert!(stdout.contains("  spam:cheap, count = 1, log-likelihood = -0.693\n"));
    assert!(stdout.ends_with("performance: 2 / 3 posts predicted correctly\n"));
}

#[test]
fn binary_resumes_from_a_saved_model() {
    let dir = tempfile::tempdir().unwrap();
    let (train, test) = write_corpora(&dir);
    let model = dir.path().join("model.bin");

    for expected_posts in [3, 6] {
        let output = Command::new(env!("CARGO_BIN_EXE_classifier"))
            .arg(&train)
            .arg(&test)
            .arg("--model")
            .arg(&model)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with(&format!("trained on {} examples\n", expected_posts)));
    }
}

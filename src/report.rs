// File: src/report.rs
use crate::config::ClassifierConfig;
use crate::core::scorer::Scorer;
use crate::core::statistics::StatisticsStore;
use crate::core::types::Document;
use crate::evaluation::{Evaluation, Outcome};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Human-readable training and test summary.
///
/// Debug sections (training rows, priors, likelihoods) only appear when the
/// config asks for them. Styling is for terminals only, so piped output stays
/// plain.
pub struct Report {
    debug: bool,
    precision: usize,
    styled: bool,
}

impl Report {
    pub fn new(config: &ClassifierConfig, styled: bool) -> Self {
        Self {
            debug: config.debug,
            precision: config.score_precision,
            styled,
        }
    }

    pub fn training_data(&self, out: &mut impl Write, documents: &[Document]) -> io::Result<()> {
        if !self.debug {
            return Ok(());
        }
        writeln!(out, "training data:")?;
        for document in documents {
            writeln!(
                out,
                "  label = {}, content = {}",
                document.label, document.content
            )?;
        }
        Ok(())
    }

    pub fn training_summary(&self, out: &mut impl Write, statistics: &StatisticsStore) -> io::Result<()> {
        writeln!(out, "trained on {} examples", statistics.total_posts())?;
        if self.debug {
            writeln!(out, "vocabulary size = {}", statistics.vocabulary_size())?;
        }
        writeln!(out)
    }

    /// Per-label priors and the likelihood of every word seen with each label.
    pub fn model_parameters(&self, out: &mut impl Write, scorer: &Scorer<'_>) -> io::Result<()> {
        if !self.debug {
            return Ok(());
        }
        let statistics = scorer.statistics();

        writeln!(out, "classes:")?;
        for (label, posts) in statistics.labels() {
            let prior = scorer.log_prior(label).unwrap_or(f64::NEG_INFINITY);
            writeln!(
                out,
                "  {}, {} examples, log-prior = {}",
                label,
                posts,
                self.number(prior)
            )?;
        }

        writeln!(out, "classifier parameters:")?;
        for (label, _) in statistics.labels() {
            for (word, count) in statistics.joint_counts_for(label) {
                let likelihood = scorer.log_likelihood(word, label).unwrap_or(f64::NEG_INFINITY);
                writeln!(
                    out,
                    "  {}:{}, count = {}, log-likelihood = {}",
                    label,
                    word,
                    count,
                    self.number(likelihood)
                )?;
            }
        }
        writeln!(out)
    }

    pub fn test_results(&self, out: &mut impl Write, evaluation: &Evaluation) -> io::Result<()> {
        writeln!(out, "test data:")?;
        for outcome in evaluation.outcomes() {
            self.outcome(out, outcome)?;
        }
        writeln!(
            out,
            "performance: {} / {} posts predicted correctly",
            evaluation.correct(),
            evaluation.total()
        )
    }

    fn outcome(&self, out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
        let label = outcome.prediction.label.as_str();
        let predicted = match (self.styled, outcome.is_correct()) {
            (false, _) => label.to_string(),
            (true, true) => label.green().to_string(),
            (true, false) => label.red().to_string(),
        };
        writeln!(
            out,
            "  correct = {}, predicted = {}, log-probability score = {}",
            outcome.expected,
            predicted,
            self.number(outcome.prediction.log_score)
        )?;
        writeln!(out, "  content = {}", outcome.content)?;
        writeln!(out)
    }

    fn number(&self, value: f64) -> String {
        format_significant(value, self.precision)
    }
}

/// Formats `value` with `precision` significant digits the way C's `%g`
/// does: trailing zeros dropped, and scientific notation when the decimal
/// exponent is below -4 or at least `precision`.
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits can bump the exponent (9.996 -> 1.00e1),
    // so take the exponent from the rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

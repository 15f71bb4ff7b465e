//! Categorical Naive Bayes over string-valued tabular data.
//!
//! `train` builds a [`Model`] from labelled rows, `predict` scores a feature
//! vector against it and `evaluate` / `explain` apply the predictor to test
//! data. Loading CSV files and rendering reports live in [`loader`] and
//! [`report`]; the core modules do no I/O.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use config::{Config, RunMode};

pub mod bayes;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod loader;
pub mod model;
pub mod report;

pub use bayes::{
    predict, smoothed_probability, train, ClassScore, FeatureProbability, Prediction, ALPHA,
};
pub use error::BayesError;
pub use evaluate::{evaluate, explain, Evaluation, Explanation, RowResult};
pub use model::{Dataset, Header, Model, Row};

/// Trains on `config.train` and runs the selected mode, writing the report
/// to `out`.
pub fn run<W: Write>(config: &Config, mut out: W) -> Result<()> {
    let training = loader::load(&config.train)?;
    let model = train(&training.rows)
        .with_context(|| format!("could not train on {}", config.train.display()))?;
    info!(
        rows = model.row_count(),
        features = model.feature_count(),
        classes = model.labels().len(),
        "trained model"
    );

    match &config.mode {
        RunMode::Predict { input } => {
            let explanation = explain(&model, training.feature_header(), input);
            info!(label = %explanation.prediction.label, "classified input");
            writeln!(out, "{explanation}")?;
        }
        RunMode::Evaluate { test, output } => {
            let testing = loader::load(test)?;
            let evaluation = evaluate(&model, training.feature_header(), &testing.rows)
                .with_context(|| format!("could not evaluate {}", test.display()))?;
            for row in &evaluation.rows {
                debug!(
                    row = row.index + 1,
                    predicted = %row.predicted,
                    actual = %row.actual,
                    matched = row.matched,
                    "scored test row"
                );
            }
            info!(
                accuracy = evaluation.accuracy,
                correct = evaluation.correct,
                total = evaluation.total(),
                "evaluated test set"
            );
            writeln!(out, "{evaluation}")?;

            if let Some(path) = output {
                report::save_predictions(&evaluation, path)?;
                info!(path = %path.display(), "wrote predictions");
            }
        }
    }

    Ok(())
}

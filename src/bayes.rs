use std::collections::{hash_map::Entry, BTreeSet, HashMap};

use crate::error::{BayesError, Result};
use crate::model::{Model, Row};

/// Pseudo-count added to every value count (Laplace smoothing).
pub const ALPHA: f64 = 1.0;

/// Probability of one observed feature value under one class.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureProbability {
    pub index: usize,
    pub value: String,
    /// Occurrences of `value` in the class, 0 when outside the vocabulary.
    pub count: usize,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassScore {
    pub label: String,
    pub prior: f64,
    /// ln(prior) plus the ln of every feature probability.
    pub log_score: f64,
    pub features: Vec<FeatureProbability>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// One entry per class, in training label order.
    pub scores: Vec<ClassScore>,
}

impl Prediction {
    pub fn score(&self, label: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|score| score.label == label)
            .map(|score| score.log_score)
    }
}

/// Trains a model from rows whose last value is the class label.
pub fn train(dataset: &[Row]) -> Result<Model> {
    let first = dataset
        .first()
        .ok_or(BayesError::EmptyDataset { stage: "training" })?;

    let width = first.len();
    if width == 0 {
        return Err(BayesError::MalformedRow {
            row: 0,
            expected: 1,
            found: 0,
        });
    }
    if let Some((row, record)) = dataset
        .iter()
        .enumerate()
        .find(|(_, record)| record.len() != width)
    {
        return Err(BayesError::MalformedRow {
            row,
            expected: width,
            found: record.len(),
        });
    }
    let num_features = width - 1;

    // Separate the rows by label, keeping the order labels first show up in:
    let mut labels = Vec::new();
    let mut partition: HashMap<String, Vec<Row>> = HashMap::new();
    for record in dataset {
        let label = &record[num_features];
        match partition.entry(label.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                labels.push(label.clone());
                entry.insert(Vec::new())
            }
        }
        .push(record.clone());
    }

    let total = dataset.len() as f64;
    let priors = labels
        .iter()
        .map(|label| (label.clone(), partition[label].len() as f64 / total))
        .collect();

    // The vocabulary is global, not per class:
    let vocabulary: Vec<BTreeSet<String>> = (0..num_features)
        .map(|i| dataset.iter().map(|record| record[i].clone()).collect())
        .collect();

    let mut likelihoods = HashMap::with_capacity(labels.len());
    for label in &labels {
        let rows = &partition[label];
        let per_feature = vocabulary
            .iter()
            .enumerate()
            .map(|(i, values)| {
                let mut counts: HashMap<String, usize> =
                    values.iter().map(|value| (value.clone(), 0)).collect();
                for record in rows {
                    if let Some(count) = counts.get_mut(&record[i]) {
                        *count += 1;
                    }
                }
                counts
            })
            .collect::<Vec<_>>();
        likelihoods.insert(label.clone(), per_feature);
    }

    Ok(Model {
        labels,
        priors,
        partition,
        vocabulary,
        likelihoods,
        row_count: dataset.len(),
    })
}

fn smooth(count: usize, class_rows: usize, vocabulary_size: usize) -> f64 {
    (count as f64 + ALPHA) / (class_rows as f64 + ALPHA * vocabulary_size as f64)
}

/// Smoothed P(feature = value | label). `None` for an unknown label or a
/// feature index past the trained columns.
pub fn smoothed_probability(
    model: &Model,
    label: &str,
    feature: usize,
    value: &str,
) -> Option<f64> {
    let counts = model.likelihood(label, feature)?;
    let class_rows = model.class_row_count(label)?;
    let count = counts.get(value).copied().unwrap_or(0);
    Some(smooth(count, class_rows, model.vocabulary[feature].len()))
}

/// Scores `input` against every class and picks the best one.
///
/// Values past the trained feature count are ignored and a shorter input only
/// contributes the features it has. Unseen values count as zero occurrences.
pub fn predict<S: AsRef<str>>(model: &Model, input: &[S]) -> Prediction {
    let used = input.len().min(model.feature_count());

    let scores: Vec<ClassScore> = model
        .labels
        .iter()
        .map(|label| {
            let prior = model.priors[label];
            let class_rows = model.partition[label].len();
            let counts = &model.likelihoods[label];

            let features: Vec<FeatureProbability> = input[..used]
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let value = value.as_ref();
                    let count = counts[i].get(value).copied().unwrap_or(0);
                    FeatureProbability {
                        index: i,
                        value: value.to_string(),
                        count,
                        probability: smooth(count, class_rows, model.vocabulary[i].len()),
                    }
                })
                .collect();

            let log_score = features
                .iter()
                .fold(prior.ln(), |acc, feature| acc + feature.probability.ln());

            ClassScore {
                label: label.clone(),
                prior,
                log_score,
                features,
            }
        })
        .collect();

    // Strict comparison keeps the earliest label on a tie:
    let best = scores.iter().fold(None::<&ClassScore>, |best, score| match best {
        Some(best) if score.log_score <= best.log_score => Some(best),
        _ => Some(score),
    });

    Prediction {
        label: best.map(|score| score.label.clone()).unwrap_or_default(),
        scores,
    }
}

use crate::bayes::{predict, Prediction};
use crate::error::{BayesError, Result};
use crate::model::{Model, Row};

/// Outcome for one labelled test row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub index: usize,
    pub predicted: String,
    pub actual: String,
    pub matched: bool,
    pub prediction: Prediction,
}

/// Batch evaluation over a labelled test set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub feature_names: Vec<String>,
    pub rows: Vec<RowResult>,
    pub correct: usize,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

/// Detailed scoring of a single input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub feature_names: Vec<String>,
    pub input: Vec<String>,
    /// Known label, when the input carried one.
    pub actual: Option<String>,
    pub prediction: Prediction,
}

impl Explanation {
    pub fn matched(&self) -> Option<bool> {
        self.actual
            .as_ref()
            .map(|actual| *actual == self.prediction.label)
    }
}

/// Names for the first `count` features, falling back to positional names
/// where the header is missing or too short.
pub fn feature_names(header: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            header
                .get(i)
                .filter(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("feature {i}"))
        })
        .collect()
}

/// Predicts every row of `test` and compares against its trailing label.
pub fn evaluate(model: &Model, header: &[String], test: &[Row]) -> Result<Evaluation> {
    if test.is_empty() {
        return Err(BayesError::EmptyDataset { stage: "evaluation" });
    }

    let width = model.feature_count() + 1;
    if let Some((row, record)) = test
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

    let rows: Vec<RowResult> = test
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (features, actual) = record.split_at(width - 1);
            let actual = actual[0].clone();
            let prediction = predict(model, features);
            RowResult {
                index,
                predicted: prediction.label.clone(),
                matched: prediction.label == actual,
                actual,
                prediction,
            }
        })
        .collect();

    let correct = rows.iter().filter(|row| row.matched).count();
    let accuracy = 100.0 * correct as f64 / rows.len() as f64;

    Ok(Evaluation {
        feature_names: feature_names(header, model.feature_count()),
        rows,
        correct,
        accuracy,
    })
}

/// Scores a single row in detail. An input holding one value more than the
/// trained feature count is taken to end in its known label.
pub fn explain<S: AsRef<str>>(model: &Model, header: &[String], input: &[S]) -> Explanation {
    let mut input: Vec<String> = input.iter().map(|value| value.as_ref().to_string()).collect();
    let actual = if input.len() == model.feature_count() + 1 {
        input.pop()
    } else {
        None
    };

    let prediction = predict(model, &input);
    Explanation {
        feature_names: feature_names(header, model.feature_count()),
        input,
        actual,
        prediction,
    }
}

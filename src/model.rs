use std::collections::{BTreeSet, HashMap};

/// Feature values followed by the class label.
pub type Row = Vec<String>;
pub type Dataset = Vec<Row>;
/// Column names parallel to the feature positions.
pub type Header = Vec<String>;

/// A trained categorical Naive Bayes model.
///
/// Built once by [`crate::train`] and never mutated afterwards, so a `&Model`
/// can be shared freely between predictors.
#[derive(Debug, Clone)]
pub struct Model {
    /// Labels in the order they first appear in the training data. Ties
    /// between equal scores resolve to the earlier label.
    pub(crate) labels: Vec<String>,
    pub(crate) priors: HashMap<String, f64>,
    pub(crate) partition: HashMap<String, Vec<Row>>,
    /// Distinct values per feature column across every class.
    pub(crate) vocabulary: Vec<BTreeSet<String>>,
    /// label -> feature index -> value -> occurrences within that class.
    pub(crate) likelihoods: HashMap<String, Vec<HashMap<String, usize>>>,
    pub(crate) row_count: usize,
}

impl Model {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn feature_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of rows the model was trained on.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn prior(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    /// Priors in label order.
    pub fn priors(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(move |label| (label.as_str(), self.priors[label]))
    }

    pub fn partition(&self, label: &str) -> Option<&[Row]> {
        self.partition.get(label).map(Vec::as_slice)
    }

    pub fn class_row_count(&self, label: &str) -> Option<usize> {
        self.partition.get(label).map(Vec::len)
    }

    pub fn vocabulary(&self, feature: usize) -> Option<&BTreeSet<String>> {
        self.vocabulary.get(feature)
    }

    /// Raw value counts for one class and feature column.
    pub fn likelihood(&self, label: &str, feature: usize) -> Option<&HashMap<String, usize>> {
        self.likelihoods
            .get(label)
            .and_then(|features| features.get(feature))
    }
}

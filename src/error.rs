use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BayesError {
    /// Training or evaluation was handed zero rows.
    #[error("{stage} dataset is empty")]
    EmptyDataset { stage: &'static str },

    /// A row does not have the length every other row has.
    #[error("row {row} has {found} values, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, BayesError>;

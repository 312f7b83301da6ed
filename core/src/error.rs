use thiserror::Error;

/// Why a dataset could not be turned into projects.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("project dataset is not a sequence (found {found})")]
    NotASequence { found: &'static str },

    #[error("project dataset is empty")]
    Empty,

    #[error("project #{index} is malformed: {reason}")]
    InvalidProject { index: usize, reason: String },
}

/// An unmet precondition that kept the filter from activating.
///
/// None of these touch the input or the cards.
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("no project dataset was provided")]
    MissingDataset,

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("no fuzzy matcher was provided")]
    MissingMatcher,
}

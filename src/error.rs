use thiserror::Error;

/// Error types for the kcluster2d library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The number of clusters is invalid (k must be > 0, max_k must be >= 2)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The data set holds no points
    #[error("Data set is empty")]
    EmptyDataset,

    /// Array input that is not shaped (n, 2)
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// A line of textual point data could not be read as two integers
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Restart count or iteration ceiling out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

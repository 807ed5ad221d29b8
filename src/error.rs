use thiserror::Error;

#[derive(Error, Debug)]
pub enum MsError {
    /// The value is neither a non-empty string nor a finite number.
    /// Carries the JSON serialization of the offending value.
    #[error("val is not a non-empty string or a valid number. val={0}")]
    InvalidInput(String),

    #[error("Invalid options document")]
    InvalidOptions(#[source] serde_json::Error),
}

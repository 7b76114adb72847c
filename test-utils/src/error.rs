use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing a seed file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A seed document or data file could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// Configuration errors that abort widget initialization.
///
/// These are the only errors that cross the public boundary; every runtime
/// failure (bad input, failed commit, malformed payload) degrades to a
/// visual error state or a logged diagnostic instead.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("data service URL to send queries to was not given")]
    MissingEndpoint,

    #[error("input element \"{0}\" was not found")]
    InputNotFound(String),

    #[error("results element \"{0}\" was not found")]
    ResultsNotFound(String),
}

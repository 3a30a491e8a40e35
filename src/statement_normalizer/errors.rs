use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NormalizeError {
    #[error("Malformed path token `{token}` (expected at least two dot-separated segments)")]
    MalformedPathToken { token: String },

    #[error("Normalization did not converge after {limit} rewrites (statement may be malformed)")]
    IterationLimit { limit: usize },
}

use thiserror::Error;

/// A signature that could not be parsed, carrying the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedSignature {
    #[error("invalid argument description: `{0}`")]
    Argument(String),

    #[error("invalid method signature: `{0}`")]
    Header(String),
}

impl MalformedSignature {
    /// The part of the input that was rejected.
    pub fn text(&self) -> &str {
        match self {
            Self::Argument(text) | Self::Header(text) => text,
        }
    }
}

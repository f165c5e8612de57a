use thiserror::Error;

/// Invalid size limits, caught before any compression happens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    #[error("per-line display length must be greater than zero")]
    ZeroLineLength,

    #[error("per-file character budget must be greater than zero")]
    ZeroFileBudget,
}

/// The model reply could not be turned into a commit message.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("no JSON object found in model reply: {0:?}")]
    NoJson(String),

    #[error("model reply is not a valid message object: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("model reply contained an empty commit message")]
    EmptyMessage,
}

//! Errors that end a run.

use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {0}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean(String),

    // surf::Error does not implement std::error::Error, so no #[from] here.
    #[error("{0}")]
    Http(surf::Error),

    #[error("GitHub API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unexpected input: {what} should not contain the delimiter \"{delimiter}\"")]
    Delimiter {
        what: &'static str,
        delimiter: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Message reported as the failure reason of a run.
pub fn failure_message(e: &Error) -> String {
    let msg = e.to_string();
    if msg.trim().is_empty() {
        UNKNOWN_ERROR.to_owned()
    } else {
        msg
    }
}

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HighlightError>;

/// Failures reaching or talking to the Shiki engine. Rendering itself
/// cannot fail.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("Unable to find the node executable")]
    NodeNotFound,

    #[error("Working directory not usable: {}", .0.display())]
    WorkingDirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shiki process failed ({status})\n{stderr}{stdout}")]
    ProcessFailed {
        status: ExitStatus,
        stderr: String,
        stdout: String,
    },

    #[error("Unable to decode Shiki output: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tinytemplate::error::Error),
}

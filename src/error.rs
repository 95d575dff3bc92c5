//! Error type shared by the formatters.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the reader on the other end of the sink went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

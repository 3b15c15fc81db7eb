use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurateError {
    /// The source wordlist does not exist.
    #[error("source wordlist not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the user's answer failed, including end of input.
    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// The directory of the running executable could not be determined.
    #[error("cannot locate program directory: {0}")]
    BaseDir(#[source] io::Error),
}

//! Error types shared by the library and the binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading settings or driving the page.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or filesystem I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A config file could not be parsed or holds an invalid value.
    #[error("config error in {}: {message}", path.display())]
    Config {
        /// Path to the offending config file.
        path: PathBuf,
        /// Parser or validation message.
        message: String,
    },

    /// A content file is not valid portfolio JSON.
    #[error("content error in {}: {source}", path.display())]
    Content {
        /// Path to the offending content file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A navigation target outside the fixed section set.
    #[error("unknown section '{0}' (expected one of: hero, about, projects, skills, contact)")]
    UnknownSection(String),

    /// A command-bar entry that is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

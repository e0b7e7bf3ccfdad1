//! Errors raised while loading or persisting `config.ron`.

use std::path::PathBuf;

/// Failure to read, parse, or write the Strata config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read strata config at {}: {source}", .path.display())]
    Read {
        /// The `config.ron` that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("cannot write strata config at {}: {source}", .path.display())]
    Write {
        /// The config directory or file being written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config). Unknown
    /// sections and fields are tolerated; type mismatches are not.
    #[error("invalid strata config in {}: {source}", .path.display())]
    Parse {
        /// The `config.ron` with the bad content.
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be encoded as RON.
    #[error("cannot encode strata config: {0}")]
    Serialize(#[source] ron::Error),
}

impl ConfigError {
    /// Path of the file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Parse { path, .. } => {
                Some(path)
            }
            Self::Serialize(_) => None,
        }
    }
}

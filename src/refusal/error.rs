use super::codes::RefusalCode;
use crate::cli::Algorithm;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrefetchError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write prefetch statement: {0}")]
    Output(#[source] io::Error),
    #[error("Algorithm {0} is not supported in davis downloads")]
    UnsupportedDavisAlgorithm(Algorithm),
    #[error("You must specify a hash algorithm to use")]
    MissingValueAlgorithm,
    #[error("the following required argument was not provided: <file>")]
    MissingFile,
}

impl PrefetchError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> RefusalCode {
        match self {
            Self::Io { .. } | Self::Output(_) => RefusalCode::Io,
            Self::UnsupportedDavisAlgorithm(_) | Self::MissingValueAlgorithm => {
                RefusalCode::Unsupported
            }
            Self::MissingFile => RefusalCode::Usage,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.code().outcome().exit_code()
    }
}

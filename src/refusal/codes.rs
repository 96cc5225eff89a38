use crate::cli::Outcome;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusalCode {
    Usage,
    Unsupported,
    Io,
}

impl RefusalCode {
    pub const ALL: [RefusalCode; 3] = [Self::Usage, Self::Unsupported, Self::Io];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usage => "E_USAGE",
            Self::Unsupported => "E_UNSUPPORTED",
            Self::Io => "E_IO",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::Usage => "Missing or invalid command line argument",
            Self::Unsupported => "Algorithm is not supported by the requested output format",
            Self::Io => "Cannot read the input file or write the statement",
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            Self::Usage | Self::Unsupported => Outcome::Refusal,
            Self::Io => Outcome::IoFailure,
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

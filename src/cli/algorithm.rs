use std::fmt;
use std::str::FromStr;

/// Which digests a prefetch statement should carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    All,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub const NAMES: [&'static str; 3] = ["all", "sha1", "sha256"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(format!(
                "invalid choice '{s}' (choose from {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

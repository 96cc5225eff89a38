use std::fmt;
use std::str::FromStr;

/// The shape of the emitted statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single-line `prefetch` statement.
    #[default]
    Prefetch,
    /// Legacy four-line prefetch block.
    Davis,
    /// A bare hex digest.
    Value,
}

impl OutputStyle {
    pub const NAMES: [&'static str; 3] = ["prefetch", "davis", "value"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefetch => "prefetch",
            Self::Davis => "davis",
            Self::Value => "value",
        }
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefetch" => Ok(Self::Prefetch),
            "davis" => Ok(Self::Davis),
            "value" => Ok(Self::Value),
            _ => Err(format!(
                "invalid choice '{s}' (choose from {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

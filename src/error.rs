/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A duration argument could not be interpreted as a finite number.
    ///
    /// Carries a printable rendering of the raw input.
    InvalidInput(String),

    /// A unit code did not match any of `ns`, `us`, `ms`, `s`, `min`, `h`, `d`.
    UnknownUnit(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(raw) => {
                write!(f, "Failed to interpret {raw} as a number")
            }
            Self::UnknownUnit(code) => {
                write!(f, "Unknown time unit {code:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;

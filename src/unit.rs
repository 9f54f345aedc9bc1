use crate::{Error, Scale};

/// A time granularity, from nanoseconds up to days.
///
/// Variants are ordered from finest to coarsest, so `Unit::Nano < Unit::Day`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Debug)]
pub enum Unit {
    /// Nanoseconds (`ns`)
    Nano,

    /// Microseconds (`us`)
    Micro,

    /// Milliseconds (`ms`)
    Milli,

    /// Seconds (`s`)
    Second,

    /// Minutes (`min`)
    Minute,

    /// Hours (`h`)
    Hour,

    /// Days (`d`)
    Day,
}

impl Unit {
    /// All units, finest first.
    pub const ALL: [Self; 7] = [
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
    ];

    /// Number of nanoseconds one unit represents.
    #[must_use]
    pub const fn nanos(self) -> u64 {
        match self {
            Self::Nano => 1,
            Self::Micro => 1_000,
            Self::Milli => 1_000_000,
            Self::Second => 1_000_000_000,
            Self::Minute => 60 * Self::Second.nanos(),
            Self::Hour => 60 * Self::Minute.nanos(),
            Self::Day => 24 * Self::Hour.nanos(),
        }
    }

    /// The short code of the unit, e.g. `ms` or `min`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Nano => "ns",
            Self::Micro => "us",
            Self::Milli => "ms",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Day => "d",
        }
    }

    /// Returns the cached scale of this unit.
    #[must_use]
    pub fn scale(self) -> &'static Scale {
        Scale::of(self)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_owned()))
    }
}

impl TryFrom<&str> for Unit {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

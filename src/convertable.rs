use crate::{
    convert::{self, converter},
    Scale, Unit,
};

/// A duration in a fixed source unit, ready to be expressed in any other unit.
///
/// Returned by the unit constructors ([`crate::ns`], [`crate::ms`], ...).
/// No conversion happens until one of the accessors is called.
///
/// ```
/// let day = unitime::d(1)?;
///
/// assert_eq!(24.0, day.hours());
/// assert_eq!(86_400_000.0, day.millis());
/// # Ok::<(), unitime::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convertable {
    source: &'static Scale,
    duration: f64,
}

impl Convertable {
    pub(crate) fn new(source: Unit, duration: f64) -> Self {
        Self {
            source: source.scale(),
            duration,
        }
    }

    /// The unit the duration is expressed in.
    #[must_use]
    pub fn source(&self) -> Unit {
        self.source.unit()
    }

    /// The duration in its source unit.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Expresses the duration in the given unit.
    #[must_use]
    pub fn to(&self, unit: Unit) -> f64 {
        converter(unit)(self.source, self.duration)
    }

    /// Expresses the duration in nanoseconds.
    #[must_use]
    pub fn nanos(&self) -> f64 {
        convert::to_nanos(self.source, self.duration)
    }

    /// Expresses the duration in microseconds.
    #[must_use]
    pub fn micros(&self) -> f64 {
        convert::to_micros(self.source, self.duration)
    }

    /// Expresses the duration in milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        convert::to_millis(self.source, self.duration)
    }

    /// Expresses the duration in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        convert::to_seconds(self.source, self.duration)
    }

    /// Expresses the duration in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        convert::to_minutes(self.source, self.duration)
    }

    /// Expresses the duration in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        convert::to_hours(self.source, self.duration)
    }

    /// Expresses the duration in days.
    #[must_use]
    pub fn days(&self) -> f64 {
        convert::to_days(self.source, self.duration)
    }
}

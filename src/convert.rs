//! Conversion of a duration from a source [`Scale`] into a destination unit.
//!
//! Every converter follows the same policy:
//!
//! - same unit: the duration is returned untouched
//! - finer source: the duration is divided by the ratio
//! - coarser source: the duration is multiplied by the ratio, saturating to
//!   `f64::MAX` / `-f64::MAX` when the product would leave the finite range
//!
//! Fine to coarse conversions are not rounded.

use crate::{Scale, Unit};

/// A conversion into one fixed destination unit.
pub type Converter = fn(&Scale, f64) -> f64;

/// Returns the converter into the given destination unit.
#[must_use]
pub fn converter(unit: Unit) -> Converter {
    match unit {
        Unit::Nano => to_nanos,
        Unit::Micro => to_micros,
        Unit::Milli => to_millis,
        Unit::Second => to_seconds,
        Unit::Minute => to_minutes,
        Unit::Hour => to_hours,
        Unit::Day => to_days,
    }
}

/// Returns the converter for a unit code (`ns`, `us`, `ms`, `s`, `min`, `h`, `d`).
///
/// # Errors
///
/// Returns [`crate::Error::UnknownUnit`] if the code is not recognized.
pub fn converter_for(code: &str) -> crate::Result<Converter> {
    code.parse().map(converter)
}

fn saturating_mul(source: &Scale, to: Unit, duration: f64, ratio: f64, max: f64) -> f64 {
    if duration > max {
        log::trace!(
            "{duration}{} does not fit into {to}, saturating to +MAX",
            source.unit()
        );
        f64::MAX
    } else if duration < -max {
        log::trace!(
            "{duration}{} does not fit into {to}, saturating to -MAX",
            source.unit()
        );
        -f64::MAX
    } else {
        (duration * ratio).clamp(-f64::MAX, f64::MAX)
    }
}

fn to_fixed(source: &Scale, to: Unit, duration: f64, ratio: f64, max: f64) -> f64 {
    let target = to.scale().magnitude();

    if source.magnitude() == target {
        duration
    } else if source.magnitude() < target {
        duration / ratio
    } else {
        saturating_mul(source, to, duration, ratio, max)
    }
}

fn to_unit(source: &Scale, to: Unit, duration: f64) -> f64 {
    let target = to.scale().magnitude();

    if source.magnitude() == target {
        duration
    } else if source.magnitude() < target {
        duration / (target / source.magnitude())
    } else {
        let ratio = source.magnitude() / target;
        saturating_mul(source, to, duration, ratio, f64::MAX / ratio)
    }
}

/// Expresses `duration` (in `source` units) in nanoseconds.
#[must_use]
pub fn to_nanos(source: &Scale, duration: f64) -> f64 {
    to_fixed(
        source,
        Unit::Nano,
        duration,
        source.magnitude(),
        source.max_nanos(),
    )
}

/// Expresses `duration` (in `source` units) in microseconds.
#[must_use]
pub fn to_micros(source: &Scale, duration: f64) -> f64 {
    to_fixed(
        source,
        Unit::Micro,
        duration,
        source.micro_ratio(),
        source.max_micros(),
    )
}

/// Expresses `duration` (in `source` units) in milliseconds.
#[must_use]
pub fn to_millis(source: &Scale, duration: f64) -> f64 {
    to_fixed(
        source,
        Unit::Milli,
        duration,
        source.milli_ratio(),
        source.max_millis(),
    )
}

/// Expresses `duration` (in `source` units) in seconds.
#[must_use]
pub fn to_seconds(source: &Scale, duration: f64) -> f64 {
    to_fixed(
        source,
        Unit::Second,
        duration,
        source.sec_ratio(),
        source.max_secs(),
    )
}

/// Expresses `duration` (in `source` units) in minutes.
#[must_use]
pub fn to_minutes(source: &Scale, duration: f64) -> f64 {
    to_unit(source, Unit::Minute, duration)
}

/// Expresses `duration` (in `source` units) in hours.
#[must_use]
pub fn to_hours(source: &Scale, duration: f64) -> f64 {
    to_unit(source, Unit::Hour, duration)
}

/// Expresses `duration` (in `source` units) in days.
#[must_use]
pub fn to_days(source: &Scale, duration: f64) -> f64 {
    to_unit(source, Unit::Day, duration)
}

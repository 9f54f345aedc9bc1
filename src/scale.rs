use crate::Unit;
use once_cell::sync::Lazy;

static SCALES: Lazy<[Scale; 7]> = Lazy::new(|| Unit::ALL.map(Scale::new));

/// Precomputed ratios and overflow thresholds of a [`Unit`].
///
/// Exactly one scale exists per unit for the lifetime of the process,
/// see [`Scale::of`].
///
/// Ratios are always >= 1. Whether a conversion multiplies or divides
/// by a ratio is decided by comparing magnitudes.
#[derive(Debug, PartialEq)]
pub struct Scale {
    unit: Unit,
    magnitude: f64,
    max_nanos: f64,
    max_micros: f64,
    max_millis: f64,
    max_secs: f64,
    micro_ratio: f64,
    milli_ratio: f64,
    sec_ratio: f64,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(magnitude: f64, reference: Unit) -> f64 {
    let reference = reference.nanos() as f64;

    if magnitude >= reference {
        magnitude / reference
    } else {
        reference / magnitude
    }
}

impl Scale {
    #[allow(clippy::cast_precision_loss)]
    fn new(unit: Unit) -> Self {
        let magnitude = unit.nanos() as f64;

        let micro_ratio = ratio(magnitude, Unit::Micro);
        let milli_ratio = ratio(magnitude, Unit::Milli);
        let sec_ratio = ratio(magnitude, Unit::Second);

        Self {
            unit,
            magnitude,
            max_nanos: f64::MAX / magnitude,
            max_micros: f64::MAX / micro_ratio,
            max_millis: f64::MAX / milli_ratio,
            max_secs: f64::MAX / sec_ratio,
            micro_ratio,
            milli_ratio,
            sec_ratio,
        }
    }

    /// Returns the scale of the given unit.
    ///
    /// Repeated calls return the same reference.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn of(unit: Unit) -> &'static Self {
        // NOTE: SCALES follows the order of Unit::ALL
        &SCALES[unit.index()]
    }

    /// The unit this scale describes.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Nanoseconds per unit.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Largest duration (in this scale) that can be expressed in nanoseconds.
    #[must_use]
    pub fn max_nanos(&self) -> f64 {
        self.max_nanos
    }

    /// Largest duration (in this scale) that can be expressed in microseconds.
    #[must_use]
    pub fn max_micros(&self) -> f64 {
        self.max_micros
    }

    /// Largest duration (in this scale) that can be expressed in milliseconds.
    #[must_use]
    pub fn max_millis(&self) -> f64 {
        self.max_millis
    }

    /// Largest duration (in this scale) that can be expressed in seconds.
    #[must_use]
    pub fn max_secs(&self) -> f64 {
        self.max_secs
    }

    /// Factor between this scale and microseconds.
    #[must_use]
    pub fn micro_ratio(&self) -> f64 {
        self.micro_ratio
    }

    /// Factor between this scale and milliseconds.
    #[must_use]
    pub fn milli_ratio(&self) -> f64 {
        self.milli_ratio
    }

    /// Factor between this scale and seconds.
    #[must_use]
    pub fn sec_ratio(&self) -> f64 {
        self.sec_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn scale_is_cached() {
        for unit in Unit::ALL {
            assert!(std::ptr::eq(Scale::of(unit), Scale::of(unit)));
            assert!(std::ptr::eq(Scale::of(unit), unit.scale()));
            assert_eq!(unit, Scale::of(unit).unit());
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn scale_ratios() {
        let nano = Scale::of(Unit::Nano);
        assert_eq!(1.0, nano.magnitude());
        assert_eq!(1_000.0, nano.micro_ratio());
        assert_eq!(1_000_000.0, nano.milli_ratio());
        assert_eq!(1_000_000_000.0, nano.sec_ratio());
        assert_eq!(f64::MAX, nano.max_nanos());

        let milli = Scale::of(Unit::Milli);
        assert_eq!(1_000.0, milli.micro_ratio());
        assert_eq!(1.0, milli.milli_ratio());
        assert_eq!(1_000.0, milli.sec_ratio());
        assert_eq!(f64::MAX, milli.max_millis());

        let day = Scale::of(Unit::Day);
        assert_eq!(86_400_000_000.0, day.micro_ratio());
        assert_eq!(86_400_000.0, day.milli_ratio());
        assert_eq!(86_400.0, day.sec_ratio());
        assert_eq!(f64::MAX / 86_400.0, day.max_secs());
        assert_eq!(f64::MAX / 86_400_000_000_000.0, day.max_nanos());
    }

    #[test]
    fn scale_ratios_at_least_one() {
        for unit in Unit::ALL {
            let scale = Scale::of(unit);
            assert!(scale.micro_ratio() >= 1.0);
            assert!(scale.milli_ratio() >= 1.0);
            assert!(scale.sec_ratio() >= 1.0);
            assert!(scale.max_nanos().is_finite());
            assert!(scale.max_micros() > 0.0);
            assert!(scale.max_millis() > 0.0);
            assert!(scale.max_secs() > 0.0);
        }
    }
}

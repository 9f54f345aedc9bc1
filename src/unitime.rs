use crate::{
    convert::{converter, Converter},
    input::normalize,
    Convertable, Input, Unit,
};

macro_rules! unit_constructors {
    ($($name:ident => $unit:expr, $label:literal;)*) => {
        $(
            #[doc = concat!("Interprets `input` as ", $label, ".")]
            ///
            /// # Errors
            ///
            /// Returns [`crate::Error::InvalidInput`] if `input` is not a finite number.
            pub fn $name<'a>(input: impl Into<Input<'a>>) -> crate::Result<Convertable> {
                let duration = normalize(input)?;
                Ok(Convertable::new($unit, duration))
            }
        )*
    };
}

unit_constructors! {
    ns => Unit::Nano, "nanoseconds";
    us => Unit::Micro, "microseconds";
    ms => Unit::Milli, "milliseconds";
    s => Unit::Second, "seconds";
    min => Unit::Minute, "minutes";
    h => Unit::Hour, "hours";
    d => Unit::Day, "days";
}

/// Binds a converter to the destination unit with the given code.
///
/// # Errors
///
/// Returns [`crate::Error::UnknownUnit`] if `code` is not one of
/// `ns`, `us`, `ms`, `s`, `min`, `h`, `d`.
pub fn to(code: &str) -> crate::Result<Unitime> {
    Unitime::to(code)
}

/// A converter bound to a single destination unit.
///
/// Each method takes a duration in the unit it is named after and returns
/// it expressed in the destination unit.
///
/// ```
/// let unitime = unitime::to("ms")?;
///
/// assert_eq!(86_400_000.0, unitime.d(1)?);
/// assert_eq!(43_200_000.0, unitime.h(12)?);
/// # Ok::<(), unitime::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Unitime {
    target: Unit,
    converter: Converter,
}

impl std::fmt::Debug for Unitime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unitime")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

macro_rules! bound_conversions {
    ($($name:ident => $unit:expr, $label:literal;)*) => {
        $(
            #[doc = concat!("Expresses `input` ", $label, " in the destination unit.")]
            ///
            /// # Errors
            ///
            /// Returns [`crate::Error::InvalidInput`] if `input` is not a finite number.
            pub fn $name<'a>(&self, input: impl Into<Input<'a>>) -> crate::Result<f64> {
                self.convert($unit, input)
            }
        )*
    };
}

impl Unitime {
    /// Binds a converter to the given destination unit.
    #[must_use]
    pub fn new(target: Unit) -> Self {
        Self {
            target,
            converter: converter(target),
        }
    }

    /// Binds a converter to the destination unit with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownUnit`] if `code` is not one of
    /// `ns`, `us`, `ms`, `s`, `min`, `h`, `d`.
    pub fn to(code: &str) -> crate::Result<Self> {
        let target = code.parse()?;
        log::debug!("binding converter to {target}");
        Ok(Self::new(target))
    }

    /// The destination unit.
    #[must_use]
    pub fn target(&self) -> Unit {
        self.target
    }

    /// Expresses `input`, given in `source` units, in the destination unit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `input` is not a finite number.
    pub fn convert<'a>(&self, source: Unit, input: impl Into<Input<'a>>) -> crate::Result<f64> {
        let duration = normalize(input)?;
        Ok((self.converter)(source.scale(), duration))
    }

    bound_conversions! {
        ns => Unit::Nano, "nanoseconds";
        us => Unit::Micro, "microseconds";
        ms => Unit::Milli, "milliseconds";
        s => Unit::Second, "seconds";
        min => Unit::Minute, "minutes";
        h => Unit::Hour, "hours";
        d => Unit::Day, "days";
    }
}

impl From<Unit> for Unitime {
    fn from(target: Unit) -> Self {
        Self::new(target)
    }
}

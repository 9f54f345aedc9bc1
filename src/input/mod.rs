mod lexer;

use crate::Error;
use lexer::tokenize_number;
use std::borrow::Cow;

/// A user-supplied duration, before validation.
///
/// Created through the `From` impls, e.g. `Input::from(100)`,
/// `Input::from("100e2")` or `Input::from(None::<f64>)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Input<'a> {
    /// A numeric value
    Number(f64),

    /// A numeric literal, e.g. `"-1.5"`, `"100e2"` or `"0xff"`
    Text(Cow<'a, str>),

    /// No value was given
    Missing,
}

impl std::fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Missing => write!(f, "null"),
        }
    }
}

impl Input<'_> {
    /// Interprets the input as a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the input is missing, `NaN`, infinite,
    /// empty or whitespace-only, or not a numeric literal.
    pub fn as_number(&self) -> crate::Result<f64> {
        let number = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_literal(s),
            Self::Missing => None,
        };

        match number {
            Some(n) if n.is_finite() => Ok(n),
            _ => {
                log::trace!("rejecting duration {self}");
                Err(Error::InvalidInput(self.to_string()))
            }
        }
    }
}

/// Parses a string holding exactly one numeric literal.
fn parse_literal(s: &str) -> Option<f64> {
    let mut tokens = tokenize_number(s);

    let number = tokens.next()?.ok()?.value();

    if tokens.next().is_some() {
        return None;
    }

    Some(number)
}

/// Validates and coerces a user-supplied value into a finite duration.
///
/// # Errors
///
/// See [`Input::as_number`].
pub fn normalize<'a>(input: impl Into<Input<'a>>) -> crate::Result<f64> {
    input.into().as_number()
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input<'_> {
                fn from(value: $t) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_number!(f32, i8, i16, i32, u8, u16, u32);

macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input<'_> {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $t) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_wide_integer!(i64, u64, isize, usize);

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

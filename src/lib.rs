//! Human-readable conversion between time units, from nanoseconds to days.
//!
//! Replaces magic constants like `86400000` or `24 * 60 * 60 * 1000` with
//! expressions that say what they mean.
//!
//! Each unit has a constructor named after its short code (`ns`, `us`, `ms`,
//! `s`, `min`, `h`, `d`) that returns a [`Convertable`], which can be expressed
//! in any other unit:
//!
//! ```
//! use unitime::{d, h};
//!
//! assert_eq!(1_440.0, d(1)?.minutes());
//! assert_eq!(0.5, h(12)?.days());
//! # Ok::<(), unitime::Error>(())
//! ```
//!
//! If you always need the same unit, bind a [`Unitime`] to it. Its methods
//! return the converted number right away:
//!
//! ```
//! let ms = unitime::to("ms")?;
//!
//! assert_eq!(86_400_000.0, ms.d(1)?);
//! assert_eq!(43_200_000.0, ms.h("12")?);
//! # Ok::<(), unitime::Error>(())
//! ```
//!
//! Durations are `f64`s. Numeric strings like `"100e2"` or `"0xff"` are
//! accepted too, anything else (including `NaN` and infinities) is rejected.
//!
//! Converting to a finer unit saturates to `f64::MAX` (or `-f64::MAX`) instead of
//! overflowing, e.g. when converting `2e295` days to nanoseconds.
//! Converting to a coarser unit is not rounded.
//!
//! Inspired by Java's `TimeUnit`, without any of its threading utilities.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::result_unit_err)]

pub mod convert;
mod convertable;
mod error;
mod input;
mod scale;
mod unit;
mod unitime;

pub use convertable::Convertable;
pub use error::{Error, Result};
pub use input::{normalize, Input};
pub use scale::Scale;
pub use unit::Unit;
pub use unitime::{d, h, min, ms, ns, s, to, us, Unitime};

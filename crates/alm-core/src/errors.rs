//! Error types for almanac.
//!
//! All failures are synchronous validation errors raised before or during a
//! single call. None of them are transient, so none are worth retrying: they
//! mean the caller passed something the engine cannot interpret.

use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The calendar identity is not one of the known named profiles.
    #[error("unknown calendar name, '{0}'")]
    UnknownCalendar(String),

    /// The business-day convention identifier is not recognised.
    #[error("unknown `convention`, {0}")]
    UnknownConvention(String),

    /// The time-unit identifier is not recognised.
    #[error("unknown `unit`, {0}")]
    UnknownUnit(String),

    /// A weekend weekday code outside `1..=7`.
    #[error("unknown weekday code {0}, expected 1 (Sunday) to 7 (Saturday)")]
    UnknownWeekday(i32),

    /// A date range whose bounds are absent or out of order.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A date that must be present was missing.
    #[error("missing required date: {0}")]
    MissingRequiredDate(String),

    /// Date construction or arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns early with an error if `$cond` is false.
///
/// The plain form raises [`Error::Precondition`]; naming a variant first
/// raises that variant instead.
///
/// # Example
/// ```
/// use alm_core::{ensure, errors::Error};
/// fn positive(x: i32) -> alm_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// fn ordered(a: i32, b: i32) -> alm_core::errors::Result<()> {
///     ensure!(a <= b, InvalidRange, "{a} is after {b}");
///     Ok(())
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// assert_eq!(ordered(2, 1), Err(Error::InvalidRange("2 is after 1".into())));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if !$cond {
            $crate::fail!($variant, $fmt $(, $arg)*);
        }
    };
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns the given error variant immediately.
///
/// # Example
/// ```
/// use alm_core::{fail, errors::Error};
/// fn always_err() -> alm_core::errors::Result<()> {
///     fail!(InvalidRange, "start {} is after stop {}", 2, 1);
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::InvalidRange("start 2 is after stop 1".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}

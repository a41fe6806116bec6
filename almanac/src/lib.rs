//! # almanac
//!
//! Business-day calendars: named and custom holiday profiles, date
//! adjustment, shifting, business-day counting and regular schedules.
//!
//! This crate is a **façade** over the workspace crates. It re-exports them
//! and adds the caller-facing layer: serializable calendar descriptions
//! ([`CalendarSpec`]), vectorised operations over `Option<Date>` slices
//! ([`ops`]), and logging setup.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::time::Date;
//! use almanac::{ops, CalendarSpec};
//!
//! let spec = CalendarSpec::named("united_states");
//! let saturday = Date::from_ymd(2016, 4, 30).unwrap();
//! let out = ops::adjust(&[Some(saturday), None], "following", &spec).unwrap();
//! assert_eq!(out, vec![Some(Date::from_ymd(2016, 5, 2).unwrap()), None]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use alm_core as core;

/// Dates, conventions, calendars and schedules.
pub use alm_time as time;

/// Serializable calendar descriptions.
pub mod config;

/// Structured logging setup.
pub mod logging;

/// Vectorised operations.
pub mod ops;

pub use config::CalendarSpec;
pub use logging::init_logging;

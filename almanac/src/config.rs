//! Serializable calendar descriptions.
//!
//! A [`CalendarSpec`] is the external form of a calendar profile: what a
//! caller passes in, or what is stored in a JSON document.
//!
//! ```json
//! { "name": "united_states", "holidays": ["2023-07-05"], "removed": [] }
//! { "name": "custom", "weekends": [6, 7] }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::time::{BusinessCalendar, CalendarProfile, Date};

/// A calendar profile description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpec {
    /// Identity: a registered calendar, `"custom"` or `"empty"`.
    pub name: String,
    /// Extra holidays. A `null` entry is rejected when compiling.
    #[serde(default)]
    pub holidays: Vec<Option<Date>>,
    /// Dates that are never holidays. A `null` entry is rejected when
    /// compiling.
    #[serde(default)]
    pub removed: Vec<Option<Date>>,
    /// Weekend codes (1 = Sunday … 7 = Saturday); only read for custom
    /// identities.
    #[serde(default)]
    pub weekends: Vec<i32>,
}

impl CalendarSpec {
    /// Spec for a named calendar with no adjustments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
            removed: Vec::new(),
            weekends: Vec::new(),
        }
    }

    /// Spec for a custom calendar with the given weekend codes.
    pub fn custom(weekends: impl Into<Vec<i32>>) -> Self {
        Self {
            weekends: weekends.into(),
            ..Self::named("custom")
        }
    }

    /// Add holidays.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.holidays.extend(dates.into_iter().map(Some));
        self
    }

    /// Remove holidays.
    pub fn with_removed(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.removed.extend(dates.into_iter().map(Some));
        self
    }

    /// Parse a spec from JSON.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("invalid calendar spec: {e}")))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::InvalidArgument(format!("cannot serialize calendar spec: {e}")))
    }

    /// Build the profile described by this spec.
    ///
    /// # Errors
    /// [`Error::UnknownCalendar`], [`Error::UnknownWeekday`], or
    /// [`Error::MissingRequiredDate`] if a holiday list has a missing entry.
    pub fn profile(&self) -> Result<CalendarProfile> {
        let added = required_dates(&self.holidays, "holidays")?;
        let removed = required_dates(&self.removed, "removed")?;
        Ok(CalendarProfile::from_identity(&self.name, &self.weekends)?
            .with_added(added)
            .with_removed(removed))
    }

    /// Build and compile the profile.
    pub fn compile(&self) -> Result<BusinessCalendar> {
        self.profile()?.compile()
    }
}

fn required_dates(dates: &[Option<Date>], field: &str) -> Result<Vec<Date>> {
    dates
        .iter()
        .enumerate()
        .map(|(i, d)| {
            d.ok_or_else(|| {
                Error::MissingRequiredDate(format!("`{field}` has a missing date at position {}", i + 1))
            })
        })
        .collect()
}

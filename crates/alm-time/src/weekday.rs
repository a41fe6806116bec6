//! `Weekday` — day-of-week enum, and `WeekdaySet` — the weekend mask of a
//! calendar.

use alm_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7) internally; the
/// external weekday *code* used by callers is 1 = Sunday … 7 = Saturday, see
/// [`Weekday::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from an external weekday code (1 = Sunday … 7 = Saturday).
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Weekday::Sunday),
            2..=7 => Ok(Self::ALL[code as usize - 2]),
            _ => Err(Error::UnknownWeekday(code)),
        }
    }

    /// Return the external weekday code (1 = Sunday … 7 = Saturday).
    pub fn code(&self) -> i32 {
        (self.ordinal() % 7) as i32 + 1
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// Used as the weekend definition of a calendar: every weekday in the set is
/// a non-business day regardless of holidays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set: no weekend at all.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekdaySet =
        WeekdaySet(bit(Weekday::Saturday) | bit(Weekday::Sunday));

    /// Build a set from external weekday codes (1 = Sunday … 7 = Saturday).
    pub fn from_codes(codes: &[i32]) -> Result<Self> {
        codes
            .iter()
            .map(|&c| Weekday::from_code(c))
            .collect::<Result<Vec<_>>>()
            .map(|days| days.into_iter().collect())
    }

    /// Return a copy of the set with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        WeekdaySet(self.0 | bit(day))
    }

    /// Return `true` if `day` is in the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of weekdays in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every day of the week is in the set.
    pub fn is_full(&self) -> bool {
        self.len() == 7
    }

    /// Iterate the members, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

const fn bit(day: Weekday) -> u8 {
    1 << (day as u8 - 1)
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(WeekdaySet::EMPTY, WeekdaySet::with)
    }
}

impl std::fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

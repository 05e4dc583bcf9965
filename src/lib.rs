mod consts;
mod format;
mod jdn;
mod locale;
mod prelude;
mod rules;

pub use consts::{DAYS_IN_MONTH, ESFAND, FARVARDIN, MAX_MONTH, MIN_DAY};
pub use format::{
    LAYOUT_DOT, LAYOUT_ISO, LAYOUT_LONG, LAYOUT_LONG_ENGLISH, LAYOUT_SHORT, LAYOUT_SLASH,
    ParseError, parse,
};
pub use jdn::{gregorian_to_jdn, jalali_to_jdn, jdn_to_gregorian, jdn_to_jalali};
pub use locale::{
    MONTH_NAMES, MonthName, month_from_english_name, month_from_persian_name, month_name_english,
    month_name_persian, to_latin_digits, to_persian_digits,
};
pub use rules::{days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;

/// A date in the Jalali (Persian/Shamsi) calendar.
///
/// Immutable value type: every arithmetic operation returns a new instance.
/// Fields are private and only reachable through the validated constructor
/// [`JalaliDate::new`] or one of the conversion entry points, so every value
/// in circulation satisfies `1 <= month <= 12` and
/// `1 <= day <= days_in_month(year, month)`. Any `i32` year is accepted; the
/// underlying day-number formulas are proleptic.
///
/// The derived ordering compares `(year, month, day)` lexicographically,
/// which agrees with Julian-day ordering for all valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}/{month:02}/{day:02}")]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Validation failures for Jalali date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl std::error::Error for DateError {}

/// Day of the week, ordered Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl JalaliDate {
    /// Creates a new date, validating month then day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside `1..=12`, then
    /// `DateError::InvalidDay` for a day outside the month's length.
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month < 1 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < 1 || day > rules::days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian calendar date to its Jalali equivalent.
    ///
    /// Total function: a real Gregorian date always maps to a valid Jalali
    /// date. Calendrically meaningless input (month 13, day 40) is not
    /// rejected and yields an equally meaningless result.
    pub const fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        let jdn = jdn::gregorian_to_jdn(year as i64, month as i64, day as i64);
        Self::from_jdn(jdn)
    }

    /// Converts the date to the Gregorian calendar as `(year, month, day)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn to_gregorian(self) -> (i32, u8, u8) {
        let (y, m, d) = jdn::jdn_to_gregorian(self.jdn());
        (y as i32, m as u8, d as u8)
    }

    /// Returns the Julian day number of the date.
    pub const fn jdn(self) -> i64 {
        jdn::jalali_to_jdn(self.year as i64, self.month as i64, self.day as i64)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const fn from_jdn(jdn: i64) -> Self {
        let (y, m, d) = jdn::jdn_to_jalali(jdn);
        Self {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    /// Returns the year component.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day component (1-31).
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the date's year is a Jalali leap year.
    pub const fn is_leap(self) -> bool {
        rules::is_leap_year(self.year)
    }

    /// Returns the Persian name of the date's month.
    pub fn month_name(self) -> &'static str {
        locale::month_name_persian(self.month).unwrap_or_default()
    }

    /// Returns the English transliteration of the date's month name.
    pub fn month_name_english(self) -> &'static str {
        locale::month_name_english(self.month).unwrap_or_default()
    }

    /// Adds `n` days (negative `n` subtracts) through the Julian day number.
    ///
    /// This is the only day-granularity arithmetic path: one day means one
    /// calendar day, never 24 hours of anything.
    pub const fn add_days(self, n: i64) -> Self {
        Self::from_jdn(self.jdn() + n)
    }

    /// Adds `n` months (negative `n` subtracts), carrying into the year.
    ///
    /// Computed by arithmetic on the total month count, not by iteration.
    /// The day is clamped to the target month's length, so the operation is
    /// lossy when it lands past the end of a shorter month (adding a month
    /// to 31 Shahrivar yields 30 Mehr).
    pub fn add_months(self, n: i32) -> Self {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(n);
        #[allow(clippy::cast_possible_truncation)]
        let year = months.div_euclid(12) as i32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = (months.rem_euclid(12) + 1) as u8;
        let day = self.day.min(rules::days_in_month(year, month));
        Self { year, month, day }
    }

    /// Adds `n` years (negative `n` subtracts), keeping the month.
    ///
    /// 30 Esfand is clamped to 29 when the target year is not leap.
    pub fn add_years(self, n: i32) -> Self {
        let year = self.year + n;
        let day = self.day.min(rules::days_in_month(year, self.month));
        Self {
            year,
            month: self.month,
            day,
        }
    }

    /// Returns the signed number of whole days `self - other`; positive when
    /// `self` is later.
    pub const fn days_between(self, other: Self) -> i64 {
        self.jdn() - other.jdn()
    }

    /// Returns the day of the week.
    ///
    /// Derived from the Julian day number; JDN 0 fell on a Monday.
    pub const fn day_of_week(self) -> Weekday {
        match (self.jdn() + 1).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Returns the ISO 8601 week number (1-53) of the date's Gregorian image.
    ///
    /// The week containing the date belongs to the ISO year of its Thursday.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn week_number(self) -> u8 {
        let jdn = self.jdn();
        // ISO weekday: Monday = 1 .. Sunday = 7
        let iso_dow = jdn.rem_euclid(7) + 1;
        let thursday = jdn + 4 - iso_dow;
        let (iso_year, _, _) = jdn::jdn_to_gregorian(thursday);
        ((thursday - jdn::gregorian_to_jdn(iso_year, 1, 1)) / 7 + 1) as u8
    }

    /// Returns the day of the year (1-365, or 1-366 in leap years).
    pub fn day_of_year(self) -> u16 {
        let mut days = u16::from(self.day);
        for m in 1..self.month {
            days += u16::from(rules::days_in_month(self.year, m));
        }
        days
    }

    /// Returns the first day of the date's month.
    pub const fn start_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: MIN_DAY,
        }
    }

    /// Returns the last day of the date's month.
    pub const fn end_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: rules::days_in_month(self.year, self.month),
        }
    }

    /// Returns 1 Farvardin of the date's year.
    pub const fn start_of_year(self) -> Self {
        Self {
            year: self.year,
            month: FARVARDIN,
            day: MIN_DAY,
        }
    }

    /// Returns the last day of the date's year (29 or 30 Esfand).
    pub const fn end_of_year(self) -> Self {
        Self {
            year: self.year,
            month: ESFAND,
            day: rules::days_in_month(self.year, ESFAND),
        }
    }
}

/// Returns the number of completed calendar months from `from` to `to`.
///
/// The raw month-count difference is decremented by one when `to`'s day of
/// month precedes `from`'s, i.e. the last month has not fully elapsed.
pub const fn months_between(from: JalaliDate, to: JalaliDate) -> i32 {
    let mut months = (to.year - from.year) * 12 + to.month as i32 - from.month as i32;
    if to.day < from.day {
        months -= 1;
    }
    months
}

/// Returns the number of completed years from `from` to `to` (age semantics:
/// the count is decremented when `to`'s month/day precede `from`'s).
pub const fn years_between(from: JalaliDate, to: JalaliDate) -> i32 {
    let mut years = to.year - from.year;
    if to.month < from.month || (to.month == from.month && to.day < from.day) {
        years -= 1;
    }
    years
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

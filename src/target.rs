use bounded_integer::bounded_integer;
use chrono::{Datelike, Days, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt;

use crate::cursor::CalendarCursor;
use crate::error::{Error, ErrorKind, Result};
use crate::locale::MonthNames;

bounded_integer! {
    #[repr(u8)]
    pub struct DayOfMonth { 1..=31 }
}

/// The date a relative offset lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    day: DayOfMonth,
    month: Month,
    year: i32,
}

impl TargetDate {
    pub fn from_offset(today: NaiveDate, offset_days: i64) -> Result<Self> {
        let magnitude = Days::new(offset_days.unsigned_abs());
        let date = if offset_days >= 0 {
            today.checked_add_days(magnitude)
        } else {
            today.checked_sub_days(magnitude)
        }
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOffset,
                &format!("{} {:+} days", today, offset_days),
            )
        })?;

        Ok(TargetDate::from(date))
    }

    pub fn day(&self) -> u32 {
        self.day.get() as u32
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn cursor(&self) -> CalendarCursor {
        CalendarCursor::new(self.month, self.year)
    }

    pub fn naive_date(&self) -> NaiveDate {
        // Every TargetDate originates from a valid NaiveDate.
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), self.day())
            .unwrap_or(NaiveDate::MIN)
    }

    /// The value a datepicker writes into its input once the day is picked,
    /// e.g. `Jan 3, 2025`.
    pub fn display_value(&self, names: &MonthNames) -> String {
        format!("{} {}, {}", names.short(self.month), self.day(), self.year)
    }
}

/// Parses a `YYYY-MM-DD` reference date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

impl From<NaiveDate> for TargetDate {
    fn from(date: NaiveDate) -> Self {
        TargetDate {
            day: DayOfMonth::new(date.day() as u8).unwrap_or(DayOfMonth::MIN),
            month: Month::from_u32(date.month()).unwrap_or(Month::January),
            year: date.year(),
        }
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_date())
    }
}

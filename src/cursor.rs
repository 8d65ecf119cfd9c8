use chrono::{Datelike, Local, Month, NaiveDate};
use derive_more::Constructor;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit1, none_of},
    combinator::{all_consuming, map, value},
    multi::many0,
    IResult,
};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::locale::MonthNames;

/// The month page a calendar widget currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct CalendarCursor {
    month: Month,
    year: i32,
}

impl CalendarCursor {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn next(&self) -> Self {
        let next_month = self.month.succ();

        CalendarCursor {
            month: next_month,
            year: if next_month == Month::January {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn prev(&self) -> Self {
        let prev_month = self.month.pred();

        CalendarCursor {
            month: prev_month,
            year: if prev_month == Month::December {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    /// Months elapsed since January of year 0.
    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month.number_from_month() as i64 - 1
    }

    fn from_ordinal(ordinal: i64) -> Self {
        CalendarCursor {
            month: Month::from_i64(ordinal.rem_euclid(12) + 1).unwrap_or(Month::January),
            year: ordinal.div_euclid(12) as i32,
        }
    }

    /// Number of forward page advances needed to get from `self` to `other`.
    /// Negative when `other` lies before `self`.
    pub fn months_until(&self, other: &CalendarCursor) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Reads the first month name and the first four digit number out of a
    /// navigation label such as `Sun Jan 05 2025 00:00:00 GMT+0100`.
    pub fn from_label(label: &str, names: &MonthNames) -> Option<Self> {
        let tokens = tokenize(label);

        let month = tokens.iter().find_map(|token| match token {
            Token::Word(word) => names.lookup(word),
            _ => None,
        })?;
        let year = tokens.iter().find_map(|token| match token {
            Token::Number(num) => year_of(num),
            _ => None,
        })?;

        Some(CalendarCursor::new(month, year))
    }

    /// True if the label names both this cursor's month and its year.
    ///
    /// Every token is considered, so a label with the right month but another
    /// year does not match.
    pub fn matches_label(&self, label: &str, names: &MonthNames) -> bool {
        let tokens = tokenize(label);

        let has_month = tokens.iter().any(|token| match token {
            Token::Word(word) => names.lookup(word) == Some(self.month),
            _ => false,
        });
        let has_year = tokens.iter().any(|token| match token {
            Token::Number(num) => year_of(num) == Some(self.year),
            _ => false,
        });

        has_month && has_year
    }

    pub fn format(&self, names: &MonthNames) -> String {
        format!("{} {}", names.short(self.month), self.year)
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        CalendarCursor::from(Local::now().date_naive())
    }
}

impl<T: Datelike> From<T> for CalendarCursor {
    fn from(m: T) -> Self {
        CalendarCursor::new(
            Month::from_u32(m.month()).unwrap_or(Month::January),
            m.year(),
        )
    }
}

/// Parses `YYYY-MM`.
impl FromStr for CalendarCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|err| Error::from(err).with_msg(&format!("'{}' is not YYYY-MM", s)))?;
        Ok(CalendarCursor::from(first))
    }
}

impl Add<u32> for CalendarCursor {
    type Output = CalendarCursor;
    fn add(self, rhs: u32) -> Self::Output {
        CalendarCursor::from_ordinal(self.ordinal() + rhs as i64)
    }
}

impl Sub<u32> for CalendarCursor {
    type Output = CalendarCursor;
    fn sub(self, rhs: u32) -> Self::Output {
        CalendarCursor::from_ordinal(self.ordinal() - rhs as i64)
    }
}

impl PartialOrd for CalendarCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
}

fn token(input: &str) -> IResult<&str, Option<Token<'_>>> {
    alt((
        map(take_while1(char::is_alphabetic), |w| Some(Token::Word(w))),
        map(digit1, |n| Some(Token::Number(n))),
        value(None, none_of("")),
    ))(input)
}

/// Years are written with exactly four digits; day numbers and clock times
/// never qualify.
fn year_of(num: &str) -> Option<i32> {
    if num.len() == 4 {
        num.parse().ok()
    } else {
        None
    }
}

fn tokenize(label: &str) -> Vec<Token<'_>> {
    all_consuming(many0(token))(label)
        .map(|(_, tokens)| tokens.into_iter().flatten().collect())
        .unwrap_or_default()
}

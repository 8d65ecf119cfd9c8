//! An in-memory datepicker.
//!
//! Mirrors the demo application's widget: one month laid out as six full
//! weeks, where the cells before the 1st and after the last day belong to the
//! neighbouring months and cannot be picked as days of the shown month. The
//! navigation label reflects the first of the shown month the way the widget
//! renders its date attribute, e.g. `Wed Jan 01 2025`.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use std::error;
use std::fmt;

use crate::cursor::CalendarCursor;
use crate::locale::MonthNames;
use crate::target::TargetDate;
use crate::widget::CalendarWidget;

pub fn days_of_month(month: Month, year: i32) -> u32 {
    let first = CalendarCursor::new(month, year);
    let next = first.next();

    match (
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1),
        NaiveDate::from_ymd_opt(next.year(), next.month().number_from_month(), 1),
    ) {
        (Some(begin), Some(end)) => end.signed_duration_since(begin).num_days() as u32,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub bounding_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedError {
    DayNotFound { day: u32, shown: CalendarCursor },
    Closed,
}

impl fmt::Display for SimulatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatedError::DayNotFound { day, shown } => {
                write!(f, "no selectable day {} in {}", day, shown)
            }
            SimulatedError::Closed => write!(f, "datepicker is closed"),
        }
    }
}

impl error::Error for SimulatedError {}

pub struct SimulatedCalendar {
    shown: CalendarCursor,
    week_start: Weekday,
    names: MonthNames,
    visible: bool,
    input: Option<String>,
    advances: u32,
}

impl SimulatedCalendar {
    const ROWS: usize = 6;
    const COLUMNS: usize = 7;

    /// Opens the picker on `shown`.
    pub fn new(shown: CalendarCursor, week_start: Weekday, names: MonthNames) -> Self {
        SimulatedCalendar {
            shown,
            week_start,
            names,
            visible: true,
            input: None,
            advances: 0,
        }
    }

    pub fn shown(&self) -> CalendarCursor {
        self.shown
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn input_value(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Number of forward page advances since construction.
    pub fn advances(&self) -> u32 {
        self.advances
    }

    /// Clicking the input shows the picker again.
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn retreat_month(&mut self) -> Result<(), SimulatedError> {
        self.ensure_visible()?;
        self.shown = self.shown.prev();
        Ok(())
    }

    fn ensure_visible(&self) -> Result<(), SimulatedError> {
        if self.visible {
            Ok(())
        } else {
            Err(SimulatedError::Closed)
        }
    }

    fn first_of_month(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.shown.year(), self.shown.month().number_from_month(), 1)
    }

    /// The full grid, row by row.
    pub fn cells(&self) -> Vec<DayCell> {
        let first = match self.first_of_month() {
            Some(first) => first,
            None => return vec![],
        };

        let offset = (first.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday())
            % 7;
        let prev = self.shown.prev();
        let prev_len = days_of_month(prev.month(), prev.year());
        let len = days_of_month(self.shown.month(), self.shown.year());

        let leading = (prev_len - offset + 1..=prev_len).map(|day| DayCell {
            day,
            bounding_month: true,
        });
        let own = (1..=len).map(|day| DayCell {
            day,
            bounding_month: false,
        });
        let trailing = (1..).map(|day| DayCell {
            day,
            bounding_month: true,
        });

        leading
            .chain(own)
            .chain(trailing)
            .take(Self::ROWS * Self::COLUMNS)
            .collect()
    }
}

impl CalendarWidget for SimulatedCalendar {
    type Error = SimulatedError;

    fn current_label(&mut self) -> Result<String, SimulatedError> {
        self.ensure_visible()?;
        let first = self.first_of_month().ok_or(SimulatedError::Closed)?;

        Ok(format!(
            "{} {} {:02} {}",
            first.format("%a"),
            self.names.short(self.shown.month()),
            first.day(),
            first.year()
        ))
    }

    fn advance_month(&mut self) -> Result<(), SimulatedError> {
        self.ensure_visible()?;
        self.shown = self.shown.next();
        self.advances += 1;
        Ok(())
    }

    fn select_day(&mut self, day: u32) -> Result<(), SimulatedError> {
        self.ensure_visible()?;

        let date = self
            .cells()
            .into_iter()
            .find(|cell| !cell.bounding_month && cell.day == day)
            .and_then(|cell| {
                NaiveDate::from_ymd_opt(
                    self.shown.year(),
                    self.shown.month().number_from_month(),
                    cell.day,
                )
            })
            .ok_or(SimulatedError::DayNotFound {
                day,
                shown: self.shown,
            })?;

        self.input = Some(TargetDate::from(date).display_value(&self.names));
        self.visible = false;
        Ok(())
    }
}

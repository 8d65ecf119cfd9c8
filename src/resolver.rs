use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::locale::MonthNames;
use crate::target::TargetDate;
use crate::widget::CalendarWidget;

enum Search {
    Searching { advances: u32 },
    Found { advances: u32 },
    Exhausted { advances: u32, label: String },
}

/// Pages a calendar widget forward until it shows the month a day offset
/// lands in, then picks that day.
#[derive(Debug, Clone)]
pub struct RelativeDateResolver {
    max_advances: u32,
    names: MonthNames,
}

impl RelativeDateResolver {
    pub const DEFAULT_MAX_ADVANCES: u32 = 24;

    pub fn new(max_advances: u32, names: MonthNames) -> Self {
        RelativeDateResolver {
            max_advances,
            names,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_advances, config.month_names.clone())
    }

    pub fn with_max_advances(mut self, max_advances: u32) -> Self {
        self.max_advances = max_advances;
        self
    }

    pub fn max_advances(&self) -> u32 {
        self.max_advances
    }

    pub fn names(&self) -> &MonthNames {
        &self.names
    }

    pub fn resolve_from_today<W>(&self, offset_days: i64, calendar: &mut W) -> Result<TargetDate>
    where
        W: CalendarWidget + ?Sized,
    {
        self.resolve(Local::now().date_naive(), offset_days, calendar)
    }

    pub fn resolve<W>(
        &self,
        today: NaiveDate,
        offset_days: i64,
        calendar: &mut W,
    ) -> Result<TargetDate>
    where
        W: CalendarWidget + ?Sized,
    {
        let target = TargetDate::from_offset(today, offset_days)?;
        let wanted = target.cursor();

        log::debug!(
            "Target day={} month={} year={} ({:+} days from {})",
            target.day(),
            self.names.short(target.month()),
            target.year(),
            offset_days,
            today
        );

        let mut state = Search::Searching { advances: 0 };

        loop {
            state = match state {
                Search::Searching { advances } => {
                    let label = calendar.current_label().map_err(Error::widget)?;

                    if wanted.matches_label(&label, &self.names) {
                        Search::Found { advances }
                    } else if advances >= self.max_advances {
                        Search::Exhausted { advances, label }
                    } else {
                        log::trace!("'{}' is not {}, paging forward", label, wanted);
                        calendar.advance_month().map_err(Error::widget)?;
                        Search::Searching {
                            advances: advances + 1,
                        }
                    }
                }
                Search::Found { advances } => {
                    calendar.select_day(target.day()).map_err(Error::widget)?;
                    log::info!(
                        "Selected {} after {} page advance(s)",
                        target.display_value(&self.names),
                        advances
                    );
                    return Ok(target);
                }
                Search::Exhausted { advances, label } => {
                    log::warn!(
                        "Calendar still shows '{}' after {} page advance(s), wanted {}",
                        label,
                        advances,
                        wanted
                    );
                    return Err(Error::new(
                        ErrorKind::NavigationExhausted,
                        &format!(
                            "wanted {}, calendar shows '{}' after {} of at most {} page advances",
                            wanted.format(&self.names),
                            label,
                            advances,
                            self.max_advances
                        ),
                    ));
                }
            }
        }
    }
}

impl Default for RelativeDateResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ADVANCES, MonthNames::default())
    }
}

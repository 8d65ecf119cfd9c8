use std::error;

/// A datepicker that renders one month at a time.
///
/// Every call is expected to have settled, rendering included, before it
/// returns.
pub trait CalendarWidget {
    type Error: error::Error + Send + Sync + 'static;

    /// Text of the navigation label, naming the visible month and year.
    fn current_label(&mut self) -> Result<String, Self::Error>;

    /// Pages forward by exactly one month.
    fn advance_month(&mut self) -> Result<(), Self::Error>;

    /// Activates `day` of the visible month. Cells of the adjacent months
    /// that fill the first and last week are never candidates.
    fn select_day(&mut self, day: u32) -> Result<(), Self::Error>;
}

impl<W: CalendarWidget + ?Sized> CalendarWidget for &mut W {
    type Error = W::Error;

    fn current_label(&mut self) -> Result<String, Self::Error> {
        (**self).current_label()
    }

    fn advance_month(&mut self) -> Result<(), Self::Error> {
        (**self).advance_month()
    }

    fn select_day(&mut self, day: u32) -> Result<(), Self::Error> {
        (**self).select_day(day)
    }
}

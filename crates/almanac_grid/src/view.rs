//! Month view state
//!
//! [`MonthView`] is the state machine behind a date-selector widget: it
//! owns the selected [`Date`], steps months and years with the day
//! clamped as part of each transition, and notifies a registered
//! callback after every successful change. The presentation layer
//! re-reads the view inside the callback and applies the returned
//! highlight transitions; it never mutates the date directly.

use std::sync::Arc;

use almanac_core::{Date, DateFormat, InvalidField, MonthStep, Weekday};

use crate::grid::MonthGrid;
use crate::selection::{HighlightChange, SelectionTracker};

/// Zero-argument change notification; the callback re-reads the view.
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Typed configuration for a month view.
///
/// Named fields instead of a dynamic key/value bag: unknown options are
/// a compile error rather than a runtime one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// First column of the week grid.
    pub week_start: Weekday,
    /// Display-order tag applied to the selected date.
    pub format: DateFormat,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            format: DateFormat::Dmy,
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the week-start day.
    pub fn week_start(mut self, weekday: Weekday) -> Self {
        self.week_start = weekday;
        self
    }

    /// Set the display-order tag.
    pub fn format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }
}

/// State machine for one month-calendar widget.
pub struct MonthView {
    date: Date,
    config: ViewConfig,
    selection: SelectionTracker,
    on_change: Option<ChangeCallback>,
}

impl MonthView {
    /// View showing today's month with today selected.
    pub fn new(config: ViewConfig) -> Self {
        Self::with_date(Date::today(), config)
    }

    /// View showing the month of `date` with `date`'s day selected.
    pub fn with_date(date: Date, config: ViewConfig) -> Self {
        Self {
            date: date.with_format(config.format),
            config,
            selection: SelectionTracker::with_selected(date.day()),
            on_change: None,
        }
    }

    /// Register the change callback, invoked once after every
    /// successful month navigation, year edit, or day selection.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// The currently selected date.
    pub fn date(&self) -> Date {
        self.date
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Lowercase name of the displayed month, for the caption label.
    pub fn month_label(&self) -> &'static str {
        self.date.month_name()
    }

    /// Fresh grid for the displayed month. Pure view; recomputed on
    /// every call.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_month(&self.date, self.config.week_start)
    }

    /// Navigate one month back, rolling the year at January.
    pub fn back(&mut self) {
        self.date = self.date.advance_month(MonthStep::Backward);
        tracing::debug!(
            year = self.date.year(),
            month = self.date.month(),
            "month view navigated back"
        );
        self.notify();
    }

    /// Navigate one month forward, rolling the year at December.
    pub fn forward(&mut self) {
        self.date = self.date.advance_month(MonthStep::Forward);
        tracing::debug!(
            year = self.date.year(),
            month = self.date.month(),
            "month view navigated forward"
        );
        self.notify();
    }

    /// Jump to another year, keeping the month and clamping the day.
    pub fn set_year(&mut self, year: i32) {
        self.date = self.date.with_year(year);
        tracing::debug!(year, "month view year edited");
        self.notify();
    }

    /// Select a day in the displayed month. On success, returns the
    /// highlight transition for the host to apply; on failure nothing
    /// changes and nobody is notified.
    pub fn select_day(&mut self, day: u8) -> Result<HighlightChange, InvalidField> {
        self.date = self.date.with_day(day)?;
        let change = self.selection.select(day);
        self.notify();
        Ok(change)
    }

    /// Change the week-start day; takes effect on the next `grid()`.
    pub fn set_week_start(&mut self, weekday: Weekday) {
        self.config.week_start = weekday;
    }

    /// Change the display-order tag of the selected date.
    pub fn set_format(&mut self, format: DateFormat) {
        self.config.format = format;
        self.date = self.date.with_format(format);
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_change {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn view(day: u8, month: u8, year: i32) -> MonthView {
        MonthView::with_date(Date::new(day, month, year).unwrap(), ViewConfig::default())
    }

    #[test]
    fn forward_rolls_year_at_december() {
        let mut v = view(15, 12, 2023);
        v.forward();
        assert_eq!((v.date().month(), v.date().year()), (1, 2024));
    }

    #[test]
    fn back_rolls_year_at_january() {
        let mut v = view(15, 1, 2024);
        v.back();
        assert_eq!((v.date().month(), v.date().year()), (12, 2023));
    }

    #[test]
    fn navigation_clamps_day() {
        let mut v = view(31, 1, 2023);
        v.forward();
        assert_eq!((v.date().month(), v.date().day()), (2, 28));
    }

    #[test]
    fn year_edit_clamps_leap_day() {
        let mut v = view(29, 2, 2024);
        v.set_year(2023);
        assert_eq!((v.date().year(), v.date().day()), (2023, 28));
    }

    #[test]
    fn select_day_returns_highlight_transition() {
        let mut v = view(10, 6, 2024);
        let change = v.select_day(20).unwrap();
        assert_eq!(change, HighlightChange { clear: Some(10), set: 20 });
        assert_eq!(v.date().day(), 20);
    }

    #[test]
    fn select_day_out_of_month_changes_nothing() {
        let mut v = view(10, 6, 2024);
        let err = v.select_day(31).unwrap_err();
        assert_eq!(err.field, "day");
        assert_eq!(v.date().day(), 10);
    }

    #[test]
    fn callback_fires_once_per_successful_change() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut v = view(10, 6, 2024).on_change(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        v.forward();
        v.back();
        v.set_year(2025);
        v.select_day(5).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 4);

        // A failed selection notifies nobody.
        let _ = v.select_day(0);
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn grid_follows_week_start_changes() {
        let mut v = view(1, 2, 2024);
        assert_eq!(v.grid().cell(1).map(|c| c.col), Some(3));
        v.set_week_start(Weekday::Thu);
        assert_eq!(v.grid().cell(1).map(|c| c.col), Some(0));
        assert_eq!(v.grid().headers()[0], Weekday::Thu);
    }

    #[test]
    fn month_label_matches_displayed_month() {
        let mut v = view(1, 12, 2023);
        assert_eq!(v.month_label(), "december");
        v.forward();
        assert_eq!(v.month_label(), "january");
    }

    #[test]
    fn set_format_changes_rendering() {
        let mut v = view(3, 11, 2024);
        v.set_format(DateFormat::Ymd);
        assert_eq!(v.date().to_string(), "2024/11/3");
    }
}

//! Month grid layout
//!
//! Lays a month's days into a 7-column week grid: day 1 goes in the
//! column of its real weekday under the configured week start, and the
//! remaining days fill left to right, wrapping past column 6 into the
//! next row. Row 0 is reserved for the weekday header labels; day rows
//! start at 1.

use almanac_core::{Date, InvalidField, Weekday};
use serde::{Deserialize, Serialize};

/// The canonical week order rotated so `start` comes first.
pub fn ordered_weekdays(start: Weekday) -> [Weekday; 7] {
    let mut out = [start; 7];
    for (offset, slot) in out.iter_mut().enumerate() {
        *slot = Weekday::ALL[(start.index() + offset) % 7];
    }
    out
}

/// Position of a day in the grid. Row 1 is the first week row; columns
/// run 0..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
}

/// Cell positions for every day of one month.
///
/// A pure view over (year, month, week start); recompute it after any
/// navigation instead of patching it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u8,
    headers: [Weekday; 7],
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lay out `month` of `year` with the week starting on `start`.
    /// Fails with [`InvalidField`] when `month` is outside `1..=12`.
    pub fn compute(year: i32, month: u8, start: Weekday) -> Result<Self, InvalidField> {
        let first = Date::new(1, month, year)?;
        Ok(Self::for_month(&first, start))
    }

    /// Lay out the month containing `date`. Infallible: a `Date` is
    /// always a valid (year, month) source.
    pub fn for_month(date: &Date, start: Weekday) -> Self {
        let first = date.first_of_month();
        let headers = ordered_weekdays(start);
        let mut col = ((first.weekday().index() + 7 - start.index()) % 7) as u8;
        let mut row = 1u8;
        let len = date.length_of_month();
        let mut cells = Vec::with_capacity(usize::from(len));
        for _ in 1..=len {
            cells.push(GridCell { row, col });
            if col == 6 {
                col = 0;
                row += 1;
            } else {
                col += 1;
            }
        }
        Self {
            year: date.year(),
            month: date.month(),
            headers,
            cells,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Weekday labels for the header row, week-start first.
    pub fn headers(&self) -> [Weekday; 7] {
        self.headers
    }

    /// Number of days laid out.
    pub fn day_count(&self) -> u8 {
        self.cells.len() as u8
    }

    /// Number of week rows used, header row excluded.
    pub fn row_count(&self) -> u8 {
        self.cells.last().map(|cell| cell.row).unwrap_or(0)
    }

    /// Cell of a 1-based day number, `None` when the day is not in the
    /// month.
    pub fn cell(&self, day: u8) -> Option<GridCell> {
        self.cells.get(usize::from(day.checked_sub(1)?)).copied()
    }

    /// All `(day, cell)` pairs in day order.
    pub fn days(&self) -> impl Iterator<Item = (u8, GridCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i as u8 + 1, *cell))
    }
}

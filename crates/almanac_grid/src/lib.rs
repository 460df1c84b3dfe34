//! Almanac Month Grid
//!
//! The presentation-facing half of the almanac date picker core:
//!
//! - **Grid layout**: day-to-cell mapping for a 7-column week grid under
//!   a configurable week start
//! - **Month view**: the Viewing(year, month) state machine with
//!   back/forward navigation, year edits, day selection, and change
//!   notification
//! - **Selection tracking**: the off-then-on highlight transition hosts
//!   apply instead of redrawing the whole grid
//! - **Popup placement**: pure geometry for where a picker popup opens
//!
//! # Example
//!
//! ```rust
//! use almanac_core::Weekday;
//! use almanac_grid::MonthGrid;
//!
//! // Feb 1 2024 is a Thursday: column 3 under a Monday start.
//! let grid = MonthGrid::compute(2024, 2, Weekday::Mon)?;
//! assert_eq!(grid.cell(1).map(|c| (c.row, c.col)), Some((1, 3)));
//! assert_eq!(grid.row_count(), 5);
//! # Ok::<(), almanac_core::InvalidField>(())
//! ```

pub mod grid;
pub mod placement;
pub mod selection;
pub mod view;

pub use grid::{ordered_weekdays, GridCell, MonthGrid};
pub use placement::{popup_origin, Point, Rect, Size};
pub use selection::{HighlightChange, SelectionTracker};
pub use view::{ChangeCallback, MonthView, ViewConfig};

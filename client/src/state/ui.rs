//! Local UI chrome state (theme, grid density).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of `JobsState` so list data and view
//! options change independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use listings::GridColumns;

use crate::util::dark_mode::Theme;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub grid_columns: GridColumns,
}

impl UiState {
    /// Options offered by the column picker, narrowest first.
    pub const COLUMN_CHOICES: [GridColumns; 3] = [GridColumns::One, GridColumns::Two, GridColumns::Three];
}

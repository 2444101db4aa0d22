//! Telemetry cells
//!
//! A [`ValueCell`] ties a reading to a fixed panel position and only
//! touches the display when the value actually changed, keeping the
//! redraw cost of a tight polling loop near zero. The last-shown value
//! lives on the cell instance, so any number of cells can share a panel.

use crate::backend::{CharacterDisplay, DisplayError};
use crate::format::format_fixed;

/// A fixed-width numeric readout at a fixed panel position
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueCell {
    row: u8,
    col: u8,
    digits: u8,
    signed: bool,
    /// Last value actually drawn; `None` forces the next write through
    last: Option<i16>,
}

impl ValueCell {
    /// Create a cell at the given position
    ///
    /// - `row`, `col`: panel position of the first character
    /// - `digits`: readout width in digits
    /// - `signed`: prefix a sign character (widens the cell by one)
    pub const fn new(row: u8, col: u8, digits: u8, signed: bool) -> Self {
        Self {
            row,
            col,
            digits,
            signed,
            last: None,
        }
    }

    /// The last value drawn, if any
    pub fn last(&self) -> Option<i16> {
        self.last
    }

    /// Force the next [`ValueCell::write`] to redraw
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `value` if it differs from the last drawn value
    ///
    /// Returns whether the display was touched. A failed draw does not
    /// latch the value, so the next call retries.
    pub fn write<D: CharacterDisplay>(
        &mut self,
        display: &mut D,
        value: i16,
    ) -> Result<bool, DisplayError> {
        if self.last == Some(value) {
            return Ok(false);
        }
        let text = format_fixed(value, self.digits, self.signed);
        display.draw_text(self.row, self.col, &text)?;
        self.last = Some(value);
        Ok(true)
    }
}

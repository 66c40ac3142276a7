//! Time-step navigation.

use std::fmt;

use crate::{Result, ViewerError};

/// A position in a series: `index` is 0-based, `len ≥ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for Position {
    /// Displays as `"3 / 9"` (1-based).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.len)
    }
}

/// Cursor over a non-empty series of rasters.
///
/// [`Navigator::next`] and [`Navigator::previous`] wrap around;
/// [`Navigator::go_to`] rejects indices out of range.
#[derive(Debug, Clone)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// A navigator on the first of `len` rasters.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 { return Err(ViewerError::EmptySeries) }
        Ok(Navigator { index: 0, len })
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position { index: self.index, len: self.len }
    }

    #[inline]
    pub fn index(&self) -> usize { self.index }

    #[inline]
    pub fn len(&self) -> usize { self.len }

    /// Move forward, from the last raster back to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Position {
        self.index = (self.index + 1) % self.len;
        self.position()
    }

    /// Move backward, from the first raster to the last.
    pub fn previous(&mut self) -> Position {
        self.index = (self.index + self.len - 1) % self.len;
        self.position()
    }

    /// Jump to `index`.  The position is left unchanged on error.
    pub fn go_to(&mut self, index: usize) -> Result<Position> {
        if index >= self.len {
            return Err(ViewerError::IndexOutOfRange { index, len: self.len });
        }
        self.index = index;
        Ok(self.position())
    }
}

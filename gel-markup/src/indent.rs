//! Indentation state for pretty rendering
//!
//! An [`Indentation`] is an immutable value: stepping in or out returns a new
//! value. A fully disabled indentation (increment 0, empty tab) is what the
//! compact renderer uses, so compact and pretty output share one algorithm.

use crate::error::MarkupError;
use std::fmt;
use std::io::Write;

/// Starts at column 0
pub const DEFAULT_LEVEL: usize = 0;

/// Each nesting step adds one tab
pub const DEFAULT_INCREMENT: usize = 1;

/// Two spaces per tab
pub const DEFAULT_TAB: &str = "  ";

/// Indentation at a given nesting level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    pub level: usize,
    pub increment: usize,
    pub tab: String,
}

impl Indentation {
    /// Level 0, an increment of 1 and a tab of two spaces
    pub fn new() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            increment: DEFAULT_INCREMENT,
            tab: DEFAULT_TAB.to_string(),
        }
    }

    /// Disabled indentation, used for single-line output
    pub fn none() -> Self {
        Self {
            level: 0,
            increment: 0,
            tab: String::new(),
        }
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    pub fn with_increment(mut self, increment: usize) -> Self {
        self.increment = increment;
        self
    }

    /// False only when both the increment is 0 and the tab is empty.
    pub fn has_indent(&self) -> bool {
        !(self.increment == 0 && self.tab.is_empty())
    }

    /// One level deeper
    pub fn increment(&self) -> Self {
        Self {
            level: self.level + self.increment,
            increment: self.increment,
            tab: self.tab.clone(),
        }
    }

    /// One level shallower, or [`MarkupError::Underflow`] below level 0.
    pub fn try_decrement(&self) -> Result<Self, MarkupError> {
        let level = self
            .level
            .checked_sub(self.increment)
            .ok_or(MarkupError::Underflow {
                level: self.level,
                increment: self.increment,
            })?;
        Ok(Self {
            level,
            increment: self.increment,
            tab: self.tab.clone(),
        })
    }

    /// One level shallower.
    ///
    /// # Panics
    ///
    /// Panics if the level would drop below 0. Unbalanced decrements are a
    /// programming error; use [`Indentation::try_decrement`] to check instead.
    pub fn decrement(&self) -> Self {
        match self.try_decrement() {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    /// Writes `level` copies of the tab.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), MarkupError> {
        for _ in 0..self.level {
            w.write_all(self.tab.as_bytes())?;
        }
        Ok(())
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            f.write_str(&self.tab)?;
        }
        Ok(())
    }
}

//! Command line buffer

use core::fmt;

use crate::config::LINE_CAPACITY;

/// Line accumulation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// Capacity - 1 characters stored without a line terminator
    TooLong,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::TooLong => f.write_str("command line too long"),
        }
    }
}

/// Fixed-capacity line with a reserved terminator slot.
///
/// # Invariants
/// - `len <= LINE_CAPACITY - 1`, so `bytes[len]` always exists
/// - After [`LineBuffer::terminate`], `bytes[len] == 0`
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Start a new line. Old contents are dropped.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes[0] = 0;
    }

    /// True when only the terminator slot is left.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == LINE_CAPACITY - 1
    }

    /// Append one character.
    pub fn push(&mut self, byte: u8) -> Result<(), LineError> {
        if self.is_full() {
            return Err(LineError::TooLong);
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Write the terminator at the current index.
    pub fn terminate(&mut self) {
        self.bytes[self.len] = 0;
    }

    /// Stored characters, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

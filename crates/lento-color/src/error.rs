// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Why a string could not be read as a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Wrong number of digits after the optional `#`.
    #[error("invalid hex color {input:?}: expected 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A character in the digit run is not `0-9`, `a-f` or `A-F`.
    #[error("invalid hex color {input:?}: {found:?} at position {position} is not a hex digit")]
    InvalidDigit {
        input: String,
        position: usize,
        found: char,
    },
}

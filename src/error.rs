use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Hard failures. Only raised when the overflow policy is [`Overflow::Fail`].
///
/// [`Overflow::Fail`]: crate::config::Overflow::Fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error(
        "output exceeds capacity of {capacity} bytes ({consumed}/{input_len} input bytes consumed)"
    )]
    CapacityExceeded {
        capacity: usize,
        consumed: usize,
        input_len: usize,
    },
}

/// Non-fatal anomalies found while normalizing.
///
/// The output is still usable as a sort key, but its ordering relative to other keys
/// is no longer guaranteed to be numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A digit run has exactly `width` digits. It is emitted unchanged, but no longer
    /// orders reliably against longer runs.
    RunFillsWidth {
        /// Input offset of the first digit of the run.
        offset: usize,
        width: usize,
    },
    /// A digit run longer than the width was split into several width-sized runs.
    RunExceedsWidth {
        /// Input offset of the first digit of the run.
        offset: usize,
        /// Length of the whole run in the input.
        len: usize,
        width: usize,
    },
    /// Output reached capacity before the input was exhausted; the rest was dropped.
    Truncated {
        capacity: usize,
        /// Input bytes fully represented in the output.
        consumed: usize,
        input_len: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Warning::RunFillsWidth { offset, width } => write!(
                f,
                "numeric run at offset {offset} fills width {width}; longer runs may misorder"
            ),
            Warning::RunExceedsWidth { offset, len, width } => write!(
                f,
                "numeric run of {len} digits at offset {offset} exceeds width {width}"
            ),
            Warning::Truncated {
                capacity,
                consumed,
                input_len,
            } => write!(
                f,
                "output truncated at {capacity} bytes ({consumed}/{input_len} input bytes consumed)"
            ),
        }
    }
}

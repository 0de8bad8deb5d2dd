//! Numeric run normalization.
//!
//! Every maximal run of ASCII digits is rewritten to exactly `width` bytes by
//! prepending `'0'`s, so that plain byte comparison of two normalized strings orders
//! their embedded numbers by value. Everything else is copied through untouched.
//!
//! The scan is a single pass over the input:
//! - digits are collected into a run accumulator holding at most `width` digits;
//! - the first byte that cannot join the run (a non-digit, or a digit arriving when the
//!   accumulator is already full) flushes the padded run to the output;
//! - a digit that arrives at a full accumulator starts the next run, so a run longer
//!   than `width` comes out as consecutive `width`-sized chunks.
//!
//! A run that fills the accumulator no longer orders reliably against other runs of
//! that size or longer. It is reported once per input run, as
//! [`Warning::RunFillsWidth`] when it has exactly `width` digits and as
//! [`Warning::RunExceedsWidth`] when it was split.
//!
//! Output goes through a fixed-capacity buffer. Whatever does not fit is dropped and
//! reported, or fails the call when the overflow policy is [`Overflow::Fail`].

use crate::buffer::{BoundedBuf, Full};
use crate::config::{MAX_WIDTH, NormalizerConfig, Overflow};
use crate::error::{NormalizeError, Result, Warning};
use cuneiform::cuneiform;
use tracing::warn;

/// Digits of the run currently being read.
// Cache-aligned so the whole run sits in as few lines as possible while padding.
#[cuneiform]
struct RunAccumulator {
    digits: [u8; MAX_WIDTH],
    len: usize,
    /// Input offset of the first digit held.
    start: usize,
}

impl RunAccumulator {
    fn new() -> Self {
        Self {
            digits: [b'0'; MAX_WIDTH],
            len: 0,
            start: 0,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn push(&mut self, offset: usize, digit: u8) {
        if self.len == 0 {
            self.start = offset;
        }
        self.digits[self.len] = digit;
        self.len += 1;
    }

    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    #[inline]
    fn clear(&mut self) {
        self.len = 0;
    }
}

/// Result of a normalization: the output bytes plus anything worth warning about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    bytes: Vec<u8>,
    warnings: Vec<Warning>,
}

impl Normalized {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if part of the input was dropped at the capacity boundary.
    pub fn is_truncated(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::Truncated { .. }))
    }

    /// Converts the output of a UTF-8 input back into a `String`.
    ///
    /// Normalization only inserts and copies ASCII around whole bytes, so valid UTF-8
    /// stays valid, except that truncation may cut the last character short. That
    /// partial character is dropped. Any other invalid sequence is replaced with
    /// `U+FFFD`.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(s) => s,
            Err(err) => {
                let utf8 = err.utf8_error();
                let mut bytes = err.into_bytes();
                if utf8.error_len().is_none() {
                    bytes.truncate(utf8.valid_up_to());
                }
                String::from_utf8_lossy(&bytes).into_owned()
            }
        }
    }
}

impl AsRef<[u8]> for Normalized {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Rewrites numeric runs into fixed-width, zero-padded form.
///
/// A `Normalizer` is a small immutable value; share it freely across threads.
///
/// # Examples
///
/// ```
/// use natorder::Normalizer;
///
/// let normalizer = Normalizer::with_width(5);
/// let out = normalizer.normalize(b"abc123def").unwrap();
/// assert_eq!(out.as_bytes(), b"abc00123def");
/// assert!(!out.has_warnings());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Default limits with the given width (clamped, see [`clamp_width`]).
    ///
    /// [`clamp_width`]: crate::config::clamp_width
    pub fn with_width(width: i64) -> Self {
        Self::new(NormalizerConfig::default().with_width(width))
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width()
    }

    /// Normalizes `input` under this normalizer's overflow policy.
    ///
    /// With [`Overflow::Truncate`] (the default) this never fails; with
    /// [`Overflow::Fail`] an input whose output would not fit the capacity is an error.
    pub fn normalize(&self, input: &[u8]) -> Result<Normalized> {
        let normalized = self.normalize_lossy(input);
        if self.config.overflow() == Overflow::Fail {
            if let Some(&Warning::Truncated {
                capacity,
                consumed,
                input_len,
            }) = normalized
                .warnings
                .iter()
                .find(|w| matches!(w, Warning::Truncated { .. }))
            {
                return Err(NormalizeError::CapacityExceeded {
                    capacity,
                    consumed,
                    input_len,
                });
            }
        }
        Ok(normalized)
    }

    /// Like [`normalize`](Self::normalize), passing an absent input straight through.
    pub fn normalize_opt(&self, input: Option<&[u8]>) -> Result<Option<Normalized>> {
        input.map(|bytes| self.normalize(bytes)).transpose()
    }

    /// Normalizes `input`, truncating at capacity whatever the overflow policy says.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(input_len = input.len() as u64, width = self.config.width() as u64)
    )]
    pub fn normalize_lossy(&self, input: &[u8]) -> Normalized {
        let width = self.config.width();
        let capacity = self.config.capacity();

        // A digit grows to at most `width` bytes, anything else stays one byte.
        let mut out = BoundedBuf::new(capacity, input.len().saturating_mul(width));
        let mut run = RunAccumulator::new();
        let mut warnings = Vec::new();

        // Start of the maximal digit run the current byte belongs to.
        let mut digits_start = 0;
        let mut prev_digit = false;
        let mut reported = false;
        // Input offset at which output stopped, if it did.
        let mut stopped_at = None;

        for (i, &byte) in input.iter().enumerate() {
            let digit = byte.is_ascii_digit();
            if digit && !prev_digit {
                digits_start = i;
                reported = false;
            }
            prev_digit = digit;

            if digit && run.len < width {
                run.push(i, byte);
                if run.len == width && !reported {
                    reported = true;
                    warnings.push(wide_run(input, digits_start, width));
                }
                continue;
            }

            if !run.is_empty() {
                if flush(&mut out, &run, width).is_err() {
                    stopped_at = Some(run.start);
                    break;
                }
                run.clear();
                if digit {
                    run.push(i, byte);
                    continue;
                }
            }

            if out.push(byte).is_err() {
                stopped_at = Some(i);
                break;
            }
        }

        // Input ended inside a run.
        if stopped_at.is_none() && !run.is_empty() && flush(&mut out, &run, width).is_err() {
            stopped_at = Some(run.start);
        }

        if let Some(consumed) = stopped_at {
            warn!(
                capacity = capacity as u64,
                consumed = consumed as u64,
                input_len = input.len() as u64,
                "normalized output truncated at capacity"
            );
            warnings.push(Warning::Truncated {
                capacity,
                consumed,
                input_len: input.len(),
            });
        }

        Normalized {
            bytes: out.into_vec(),
            warnings,
        }
    }
}

/// Writes one padded run: `width - len` zeros, then the digits.
#[inline]
fn flush(
    out: &mut BoundedBuf,
    run: &RunAccumulator,
    width: usize,
) -> std::result::Result<(), Full> {
    let digits = run.as_slice();
    out.fill(b'0', width.saturating_sub(digits.len()))?;
    out.extend(digits)
}

/// Builds the warning for the digit run starting at `offset`, which has at least
/// `width` digits.
fn wide_run(input: &[u8], offset: usize, width: usize) -> Warning {
    let len = input[offset..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    warn!(
        offset = offset as u64,
        len = len as u64,
        width = width as u64,
        "numeric run reaches normalization width"
    );
    if len == width {
        Warning::RunFillsWidth { offset, width }
    } else {
        Warning::RunExceedsWidth { offset, len, width }
    }
}

/// Normalizes `input` with the default limits and the given width.
///
/// Widths outside `1..=150` fall back to 75. Output beyond the default capacity is
/// truncated and reported in the returned warnings.
///
/// ```
/// use natorder::normalize;
///
/// assert_eq!(normalize(b"track7", 3).as_bytes(), b"track007");
/// assert_eq!(normalize(b"v1.2.10", 2).as_bytes(), b"v01.02.10");
/// assert!(normalize(b"item2", 75).as_bytes() < normalize(b"item10", 75).as_bytes());
/// ```
pub fn normalize(input: &[u8], width: i64) -> Normalized {
    Normalizer::with_width(width).normalize_lossy(input)
}

/// [`normalize`] with absent-in, absent-out semantics.
pub fn normalize_opt(input: Option<&[u8]>, width: i64) -> Option<Normalized> {
    input.map(|bytes| normalize(bytes, width))
}

/// Text-in, text-out entry point for hosts that bind a nullable string column and an
/// integer width, e.g. an `ORDER BY natural_sort_order(name, 75)` style function.
///
/// ```
/// use natorder::natural_sort_order;
///
/// assert_eq!(natural_sort_order(Some("file9.txt"), 3).as_deref(), Some("file009.txt"));
/// assert_eq!(natural_sort_order(None, 3), None);
/// ```
pub fn natural_sort_order(input: Option<&str>, width: i64) -> Option<String> {
    input.map(|text| normalize(text.as_bytes(), width).into_string())
}

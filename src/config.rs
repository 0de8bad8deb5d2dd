//! Tunable limits for the normalizer.
//!
//! All limits live on a [`NormalizerConfig`] value instead of being compiled in, so
//! callers (and tests) can pick a narrow width or a tiny output capacity per instance.

/// Width used when the requested width is zero, negative or above [`MAX_WIDTH`].
pub const DEFAULT_WIDTH: usize = 75;

/// Largest accepted normalization width.
pub const MAX_WIDTH: usize = 150;

/// Default maximum number of bytes a single normalized value may occupy.
pub const OUTPUT_CAPACITY: usize = 10_000;

/// What to do when the output would grow past the configured capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Stop writing at the capacity boundary and report a [`Warning::Truncated`].
    ///
    /// [`Warning::Truncated`]: crate::error::Warning::Truncated
    #[default]
    Truncate,
    /// Fail the call with [`NormalizeError::CapacityExceeded`].
    ///
    /// [`NormalizeError::CapacityExceeded`]: crate::error::NormalizeError::CapacityExceeded
    Fail,
}

/// Limits applied by a [`Normalizer`](crate::Normalizer).
///
/// # Examples
///
/// ```
/// use natorder::config::{NormalizerConfig, DEFAULT_WIDTH};
///
/// let config = NormalizerConfig::default().with_width(999);
/// assert_eq!(config.width(), DEFAULT_WIDTH);
///
/// let config = NormalizerConfig::default().with_width(12).with_capacity(64).strict();
/// assert_eq!(config.width(), 12);
/// assert_eq!(config.capacity(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NormalizerConfig {
    width: usize,
    capacity: usize,
    overflow: Overflow,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            capacity: OUTPUT_CAPACITY,
            overflow: Overflow::Truncate,
        }
    }
}

impl NormalizerConfig {
    /// Sets the normalization width. Values outside `1..=MAX_WIDTH` fall back to
    /// [`DEFAULT_WIDTH`].
    pub fn with_width(mut self, width: i64) -> Self {
        self.width = clamp_width(width);
        self
    }

    /// Sets the output capacity in bytes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Shorthand for `with_overflow(Overflow::Fail)`.
    pub fn strict(self) -> Self {
        self.with_overflow(Overflow::Fail)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }
}

/// Maps a requested width onto the accepted range.
///
/// ```
/// use natorder::config::clamp_width;
///
/// assert_eq!(clamp_width(5), 5);
/// assert_eq!(clamp_width(150), 150);
/// assert_eq!(clamp_width(0), 75);
/// assert_eq!(clamp_width(-3), 75);
/// assert_eq!(clamp_width(151), 75);
/// ```
pub fn clamp_width(width: i64) -> usize {
    match usize::try_from(width) {
        Ok(w) if (1..=MAX_WIDTH).contains(&w) => w,
        _ => DEFAULT_WIDTH,
    }
}

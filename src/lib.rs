//! # Natorder
//!
//! `natorder` builds [natural sort order](https://en.wikipedia.org/wiki/Natural_sort_order)
//! keys: strings whose plain byte order matches the order a human expects, so that
//! `"item2"` sorts before `"item10"`.
//!
//! Every maximal run of ASCII digits is left-padded with `'0'` to a fixed width
//! (75 by default). Once every number has the same number of places, comparing the
//! padded strings byte by byte compares the numbers by value. The keys can be stored
//! in an index column or fed to any byte-wise sort.
//!
//! ## Key Features
//!
//! - **No integer parsing**: digit runs are only padded, so numbers far beyond `u128`
//!   still order correctly as long as they fit the width.
//! - **Bounded output**: the output buffer has a fixed capacity (10000 bytes by default).
//!   Overflow is truncated and reported, or rejected in strict mode; it is never written
//!   out of bounds.
//! - **Observable anomalies**: runs that reach the width and truncation are returned as
//!   [`Warning`]s and logged through `tracing`.
//! - **Sorting helpers**: [`natural_sort`], [`natural_order`] and the [`KeySource`] trait
//!   put whole collections in natural order.
//!
//! ## Usage
//!
//! ```rust
//! use natorder::normalize;
//!
//! let key = normalize(b"abc123def", 5);
//! assert_eq!(key.as_bytes(), b"abc00123def");
//! ```
//!
//! Limits are configured per [`Normalizer`]:
//!
//! ```rust
//! use natorder::{Normalizer, NormalizerConfig, NormalizeError};
//!
//! let config = NormalizerConfig::default().with_width(4).with_capacity(8).strict();
//! let strict = Normalizer::new(config);
//! assert_eq!(strict.normalize(b"a1").unwrap().as_bytes(), b"a0001");
//! assert!(matches!(
//!     strict.normalize(b"a1b2"),
//!     Err(NormalizeError::CapacityExceeded { .. })
//! ));
//! ```
//!
//! Sorting a collection:
//!
//! ```rust
//! use natorder::natural_sort;
//!
//! let mut files = vec!["img12.png", "img10.png", "img2.png", "img1.png"];
//! natural_sort(&mut files);
//! assert_eq!(files, vec!["img1.png", "img2.png", "img10.png", "img12.png"]);
//! ```
//!
//! ## Limits
//!
//! A run longer than the width is emitted as consecutive width-sized chunks, so it
//! still yields a key but may order wrongly against other long runs. Any run that
//! reaches the width is reported as a [`Warning::RunFillsWidth`] or
//! [`Warning::RunExceedsWidth`]. Only ASCII digits form numbers: signs, decimal points
//! and exponents are ordinary bytes.

mod buffer;
pub mod config;
pub mod error;
pub mod keys;
pub mod normalize;
pub mod sort;

pub use config::{DEFAULT_WIDTH, MAX_WIDTH, NormalizerConfig, OUTPUT_CAPACITY, Overflow};
pub use error::{NormalizeError, Result, Warning};
pub use keys::KeySource;
pub use normalize::{Normalized, Normalizer, natural_sort_order, normalize, normalize_opt};
pub use sort::{natural_cmp, natural_order, natural_sort};

pub mod prelude {
    pub use crate::keys::KeySource;
    pub use crate::normalize::{Normalized, Normalizer, normalize};
    pub use crate::sort::{natural_cmp, natural_order, natural_sort};
}

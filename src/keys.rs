//! Collections that can be put in natural order.
//!
//! [`KeySource`] abstracts "an indexable collection of byte strings", so columnar
//! containers (e.g. Arrow string arrays) can be ordered without first being copied
//! into a `Vec<String>`.

use std::collections::VecDeque;

/// Indexed access to the byte keys of a collection.
///
/// # Examples
///
/// ```
/// use natorder::keys::KeySource;
/// use natorder::Normalizer;
///
/// struct Files {
///     names: Vec<String>,
/// }
///
/// impl KeySource for Files {
///     fn key(&self, index: usize) -> &[u8] {
///         self.names[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.names.len()
///     }
/// }
///
/// let files = Files { names: vec!["img12.png".into(), "img2.png".into()] };
/// assert_eq!(Normalizer::default().order(&files), vec![1, 0]);
/// ```
pub trait KeySource {
    /// Returns the key at `index`.
    fn key(&self, index: usize) -> &[u8];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Any random-access container of byte-like items is a key source.
macro_rules! indexed_key_source {
    ($($container:ty),* $(,)?) => {
        $(
            impl<T: AsRef<[u8]>> KeySource for $container {
                fn key(&self, index: usize) -> &[u8] {
                    self[index].as_ref()
                }

                fn len(&self) -> usize {
                    <$container>::len(self)
                }
            }
        )*
    };
}

// `Vec` is listed next to `[T]` so `&Vec<T>` works without `.as_slice()`.
indexed_key_source!([T], Vec<T>, VecDeque<T>);

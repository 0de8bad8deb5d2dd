//! Natural sorting built on normalized keys.
//!
//! Each key is normalized exactly once, then the normalized keys are compared as plain
//! bytes. Keys that normalize identically (`"a01"` and `"a1"`) fall back to their raw
//! bytes, and fully equal keys keep their original relative order.
//!
//! Sorting always truncates at capacity; a strict overflow policy only affects
//! [`Normalizer::normalize`].

use crate::keys::KeySource;
use crate::normalize::Normalizer;
use std::cmp::Ordering;

impl Normalizer {
    /// Returns the indices that put `source` in natural order.
    ///
    /// `source` is not modified.
    ///
    /// ```
    /// use natorder::Normalizer;
    ///
    /// let data = vec!["item10", "item2", "item1"];
    /// assert_eq!(Normalizer::default().order(&data), vec![2, 1, 0]);
    /// ```
    pub fn order<S: KeySource + ?Sized>(&self, source: &S) -> Vec<usize> {
        let len = source.len();
        if len == 0 {
            return vec![];
        }

        let normalized: Vec<Vec<u8>> = (0..len)
            .map(|index| self.normalize_lossy(source.key(index)).into_bytes())
            .collect();

        let mut indices: Vec<usize> = (0..len).collect();
        // Stable, so equal keys keep their input order.
        indices.sort_by(|&a, &b| {
            normalized[a]
                .cmp(&normalized[b])
                .then_with(|| source.key(a).cmp(source.key(b)))
        });
        indices
    }

    /// Sorts `data` in natural order, in place.
    ///
    /// ```
    /// use natorder::Normalizer;
    ///
    /// let mut data = vec!["v1.10", "v1.9", "v1.2"];
    /// Normalizer::with_width(4).sort(&mut data);
    /// assert_eq!(data, vec!["v1.2", "v1.9", "v1.10"]);
    /// ```
    pub fn sort<T: AsRef<[u8]>>(&self, data: &mut [T]) {
        let indices = self.order(data);
        apply_permutation(data, indices);
    }

    /// Compares two byte strings in natural order.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.normalize_lossy(a)
            .as_bytes()
            .cmp(self.normalize_lossy(b).as_bytes())
            .then_with(|| a.cmp(b))
    }
}

/// Rearranges `data` so that slot `k` receives the item at `order[k]`.
///
/// Each cycle of the permutation is walked once: the item a slot needs is swapped in,
/// and the slot it came from becomes the next one to fill. A filled slot is marked by
/// storing its own index in `order`.
fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    for cycle_start in 0..data.len() {
        let mut slot = cycle_start;
        loop {
            let source = std::mem::replace(&mut order[slot], slot);
            if source == cycle_start {
                break;
            }
            data.swap(slot, source);
            slot = source;
        }
    }
}

/// [`Normalizer::order`] with the default limits.
pub fn natural_order<S: KeySource + ?Sized>(source: &S) -> Vec<usize> {
    Normalizer::default().order(source)
}

/// [`Normalizer::sort`] with the default limits.
///
/// ```
/// use natorder::natural_sort;
///
/// let mut data = vec!["track10", "track2", "Track1", "track1"];
/// natural_sort(&mut data);
/// assert_eq!(data, vec!["Track1", "track1", "track2", "track10"]);
/// ```
pub fn natural_sort<T: AsRef<[u8]>>(data: &mut [T]) {
    Normalizer::default().sort(data)
}

/// [`Normalizer::compare`] with the default limits.
pub fn natural_cmp(a: &[u8], b: &[u8]) -> Ordering {
    Normalizer::default().compare(a, b)
}

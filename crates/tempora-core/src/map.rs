// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A map keyed by pairwise non-intersecting intervals.
//!
//! Keys may abut (a closed end touching an open end at the same value) but
//! never overlap, including single-point overlap. Insertion that would
//! violate this is rejected with an [`OverlapError`] and leaves the map
//! untouched; existing entries are never silently overwritten or merged.
//!
//! Point lookup is a linear scan over the stored intervals. The structure
//! targets small, human-curated interval sets such as calendar periods, not
//! high-cardinality indexes, so no ordering is maintained.

use crate::interval::Interval;
use std::fmt;

/// A mapping from non-intersecting `Interval<T>` keys to values.
///
/// The map is mutated only by explicit insertion calls and carries no
/// internal locking; concurrent mutation must be serialized by the caller.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::interval::Interval;
/// # use tempora_core::map::IntervalMap;
///
/// let mut map = IntervalMap::new();
/// map.put(Interval::over(0, true, 10, false), "low").unwrap();
/// map.put(Interval::over(10, true, 20, false), "high").unwrap();
///
/// assert_eq!(map.get(&5), Some(&"low"));
/// assert_eq!(map.get(&10), Some(&"high"));
/// assert_eq!(map.get(&20), None);
/// ```
#[derive(Clone, Debug)]
pub struct IntervalMap<T, V> {
    entries: Vec<(Interval<T>, V)>,
}

impl<T, V> IntervalMap<T, V>
where
    T: Ord,
{
    /// Creates an empty `IntervalMap`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a key interval with its value.
    ///
    /// Fails with an [`OverlapError`] if `key` intersects any existing key;
    /// the map is unchanged on failure and the rejected key/value pair is
    /// handed back through the error. Abutting keys are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    /// # use tempora_core::map::IntervalMap;
    ///
    /// let mut map = IntervalMap::new();
    /// map.put(Interval::closed(0, 10), 'a').unwrap();
    ///
    /// let err = map.put(Interval::closed(10, 20), 'b').unwrap_err();
    /// assert_eq!(err.key(), &Interval::closed(10, 20));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: Interval<T>, value: V) -> Result<(), OverlapError<T, V>> {
        if self.contains_intersecting_key(&key) {
            return Err(OverlapError { key, value });
        }
        self.entries.push((key, value));
        Ok(())
    }

    /// Returns the value of the unique stored interval containing `point`,
    /// or `None` if no interval contains it.
    ///
    /// At most one interval can contain a point, by the map's invariant.
    pub fn get(&self, point: &T) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key.includes(point))
            .map(|(_, value)| value)
    }

    /// Returns `true` if some stored interval contains `point`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    /// # use tempora_core::map::IntervalMap;
    ///
    /// let mut map = IntervalMap::new();
    /// map.put(Interval::open(0, 10), ()).unwrap();
    /// assert!(map.includes_key(&5));
    /// assert!(!map.includes_key(&0));
    /// ```
    #[inline]
    pub fn includes_key(&self, point: &T) -> bool {
        self.get(point).is_some()
    }

    /// Returns `true` if `candidate` intersects any stored key.
    ///
    /// `put` uses this check internally; it is public so callers can
    /// pre-check before attempting an insertion.
    pub fn contains_intersecting_key(&self, candidate: &Interval<T>) -> bool {
        self.entries.iter().any(|(key, _)| key.intersects(candidate))
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored key/value pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<T, V> Default for IntervalMap<T, V>
where
    T: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// The error returned by [`IntervalMap::put`] when the new key intersects
/// an existing key.
///
/// Carries the rejected key and value so the caller can recover them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapError<T, V> {
    key: Interval<T>,
    value: V,
}

impl<T, V> OverlapError<T, V> {
    /// Returns the rejected key interval.
    #[inline]
    pub fn key(&self) -> &Interval<T> {
        &self.key
    }

    /// Returns the rejected value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the error, yielding the rejected key/value pair.
    #[inline]
    pub fn into_parts(self) -> (Interval<T>, V) {
        (self.key, self.value)
    }
}

impl<T, V> fmt::Display for OverlapError<T, V>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interval map keys cannot intersect: {} overlaps an existing key",
            self.key
        )
    }
}

impl<T, V> std::error::Error for OverlapError<T, V>
where
    T: fmt::Debug + fmt::Display,
    V: fmt::Debug,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut map = IntervalMap::new();
        map.put(Interval::over(0, true, 10, false), "a").unwrap();
        map.put(Interval::over(10, true, 20, false), "b").unwrap();
        map.put(Interval::at_least(20), "c").unwrap();

        assert_eq!(map.get(&0), Some(&"a"));
        assert_eq!(map.get(&9), Some(&"a"));
        assert_eq!(map.get(&10), Some(&"b"));
        assert_eq!(map.get(&19), Some(&"b"));
        assert_eq!(map.get(&20), Some(&"c"));
        assert_eq!(map.get(&1_000_000), Some(&"c"));
        assert_eq!(map.get(&-1), None);
    }

    #[test]
    fn test_overlapping_put_rejected() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 10), 1).unwrap();

        // Overlap in the interior.
        assert!(map.put(Interval::closed(5, 15), 2).is_err());
        // Single-point overlap at a shared closed endpoint.
        assert!(map.put(Interval::closed(10, 20), 3).is_err());
        // Full containment.
        assert!(map.put(Interval::open(2, 8), 4).is_err());

        // The map is unchanged after every failed put.
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&5), Some(&1));
        assert_eq!(map.get(&15), None);
    }

    #[test]
    fn test_abutting_keys_accepted() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 10), "left").unwrap();
        // Open lower end at 10 does not share the point 10.
        map.put(Interval::over(10, false, 20, true), "right").unwrap();

        assert_eq!(map.get(&10), Some(&"left"));
        assert_eq!(map.get(&11), Some(&"right"));
    }

    #[test]
    fn test_error_returns_rejected_pair() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 10), String::from("kept")).unwrap();

        let err = map
            .put(Interval::closed(5, 15), String::from("rejected"))
            .unwrap_err();
        assert_eq!(err.key(), &Interval::closed(5, 15));
        assert_eq!(err.value(), "rejected");

        let (key, value) = err.into_parts();
        assert_eq!(key, Interval::closed(5, 15));
        assert_eq!(value, "rejected");
    }

    #[test]
    fn test_contains_intersecting_key() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 10), ()).unwrap();

        assert!(map.contains_intersecting_key(&Interval::closed(10, 20)));
        assert!(!map.contains_intersecting_key(&Interval::over(10, false, 20, true)));
        assert!(!map.contains_intersecting_key(&Interval::closed(11, 20)));
    }

    #[test]
    fn test_covered_and_uncovered_points() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 4), 'a').unwrap();
        map.put(Interval::closed(6, 9), 'b').unwrap();

        for p in 0..=4 {
            assert_eq!(map.get(&p), Some(&'a'));
            assert!(map.includes_key(&p));
        }
        assert_eq!(map.get(&5), None);
        assert!(!map.includes_key(&5));
        for p in 6..=9 {
            assert_eq!(map.get(&p), Some(&'b'));
        }
    }

    #[test]
    fn test_empty_map() {
        let map: IntervalMap<i32, ()> = IntervalMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(&0), None);
        assert!(!map.includes_key(&0));
        assert!(!map.contains_intersecting_key(&Interval::all()));
    }

    #[test]
    fn test_iter() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 1), 10).unwrap();
        map.put(Interval::closed(2, 3), 20).unwrap();

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (&Interval::closed(0, 1), &10));
        assert_eq!(entries[1], (&Interval::closed(2, 3), &20));
    }

    #[test]
    fn test_error_display() {
        let mut map = IntervalMap::new();
        map.put(Interval::closed(0, 10), ()).unwrap();
        let err = map.put(Interval::closed(5, 15), ()).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "Interval map keys cannot intersect: [5, 15] overlaps an existing key"
        );
    }
}

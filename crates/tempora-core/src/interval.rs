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

use std::cmp::Ordering;
use std::fmt;

/// A range over any totally-ordered value type, with each end independently
/// open (excludes its boundary) or closed (includes it), and either end
/// possibly unbounded.
///
/// An `Interval` is an immutable value type: equality is structural (bounds
/// plus openness), and all operations are pure.
///
/// # Invariants
///
/// - If both bounds are present, `lower <= upper`.
/// - `lower == upper` is permitted only when both ends are closed (a
///   single-point interval).
/// - An absent bound always carries a `false` closedness flag, so structural
///   equality is well defined.
///
/// # Examples
///
/// ```rust
/// # use tempora_core::interval::Interval;
///
/// let iv = Interval::over(3, true, 7, false); // [3, 7)
/// assert!(iv.includes(&3));
/// assert!(iv.includes(&6));
/// assert!(!iv.includes(&7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Option<T>,
    lower_closed: bool,
    upper: Option<T>,
    upper_closed: bool,
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// Creates an interval with both bounds present and explicit closedness
    /// at each end.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`, or if `lower == upper` with either end
    /// open (only a both-ends-closed single point is representable).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::over(0, false, 10, true); // (0, 10]
    /// assert!(!iv.includes(&0));
    /// assert!(iv.includes(&10));
    /// ```
    #[inline]
    pub fn over(lower: T, lower_closed: bool, upper: T, upper_closed: bool) -> Self {
        Self::try_over(lower, lower_closed, upper, upper_closed)
            .expect("Invalid interval: lower must be less than or equal to upper, and a degenerate interval must be closed at both ends")
    }

    /// Creates an interval with both bounds present, if the inputs are valid.
    ///
    /// Returns `None` if `lower > upper`, or if `lower == upper` with either
    /// end open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// assert!(Interval::try_over(0, true, 10, true).is_some());
    /// assert!(Interval::try_over(10, true, 0, true).is_none());
    /// assert!(Interval::try_over(5, false, 5, false).is_none());
    /// ```
    pub fn try_over(lower: T, lower_closed: bool, upper: T, upper_closed: bool) -> Option<Self> {
        match lower.cmp(&upper) {
            Ordering::Greater => None,
            Ordering::Equal if !(lower_closed && upper_closed) => None,
            _ => Some(Self {
                lower: Some(lower),
                lower_closed,
                upper: Some(upper),
                upper_closed,
            }),
        }
    }

    /// Creates a closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::closed(1, 5);
    /// assert!(iv.includes(&1));
    /// assert!(iv.includes(&5));
    /// ```
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::over(lower, true, upper, true)
    }

    /// Creates an open interval `(lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper` (an open interval cannot be degenerate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::open(1, 5);
    /// assert!(!iv.includes(&1));
    /// assert!(iv.includes(&2));
    /// assert!(!iv.includes(&5));
    /// ```
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::over(lower, false, upper, false)
    }

    /// Creates the interval `[lower, +inf)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::at_least(10);
    /// assert!(iv.includes(&10));
    /// assert!(iv.includes(&1_000_000));
    /// ```
    #[inline]
    pub fn at_least(lower: T) -> Self {
        Self {
            lower: Some(lower),
            lower_closed: true,
            upper: None,
            upper_closed: false,
        }
    }

    /// Creates the interval `(lower, +inf)`.
    #[inline]
    pub fn more_than(lower: T) -> Self {
        Self {
            lower: Some(lower),
            lower_closed: false,
            upper: None,
            upper_closed: false,
        }
    }

    /// Creates the interval `(-inf, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::up_to(10);
    /// assert!(iv.includes(&10));
    /// assert!(!iv.includes(&11));
    /// ```
    #[inline]
    pub fn up_to(upper: T) -> Self {
        Self {
            lower: None,
            lower_closed: false,
            upper: Some(upper),
            upper_closed: true,
        }
    }

    /// Creates the interval `(-inf, upper)`.
    #[inline]
    pub fn less_than(upper: T) -> Self {
        Self {
            lower: None,
            lower_closed: false,
            upper: Some(upper),
            upper_closed: false,
        }
    }

    /// Creates the unbounded interval `(-inf, +inf)`, which includes every
    /// value of the domain.
    #[inline]
    pub fn all() -> Self {
        Self {
            lower: None,
            lower_closed: false,
            upper: None,
            upper_closed: false,
        }
    }

    /// Returns the lower bound, or `None` if unbounded below.
    #[inline]
    pub fn lower_bound(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    /// Returns the upper bound, or `None` if unbounded above.
    #[inline]
    pub fn upper_bound(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    /// Returns `true` if the lower boundary value itself belongs to the
    /// interval. Always `false` when unbounded below.
    #[inline]
    pub fn is_lower_closed(&self) -> bool {
        self.lower_closed
    }

    /// Returns `true` if the upper boundary value itself belongs to the
    /// interval. Always `false` when unbounded above.
    #[inline]
    pub fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// Returns `true` if the interval contains exactly one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// assert!(Interval::closed(5, 5).is_single_point());
    /// assert!(!Interval::closed(5, 6).is_single_point());
    /// ```
    #[inline]
    pub fn is_single_point(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(l), Some(u)) => l == u,
            _ => false,
        }
    }

    /// Returns `true` if `value` lies within the interval, honoring the
    /// open/closed semantics at each end. An absent bound always admits its
    /// side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let iv = Interval::over(0, true, 10, false); // [0, 10)
    /// assert!(iv.includes(&0));
    /// assert!(iv.includes(&9));
    /// assert!(!iv.includes(&10));
    /// assert!(!iv.includes(&-1));
    /// ```
    pub fn includes(&self, value: &T) -> bool {
        let above_lower = match &self.lower {
            None => true,
            Some(l) => match value.cmp(l) {
                Ordering::Greater => true,
                Ordering::Equal => self.lower_closed,
                Ordering::Less => false,
            },
        };
        if !above_lower {
            return false;
        }
        match &self.upper {
            None => true,
            Some(u) => match value.cmp(u) {
                Ordering::Less => true,
                Ordering::Equal => self.upper_closed,
                Ordering::Greater => false,
            },
        }
    }

    /// Returns `true` if the two intervals share at least one value.
    ///
    /// A closed endpoint touching an open endpoint at the same value does
    /// not intersect; two closed endpoints at the same value do. The
    /// relation is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10);
    /// assert!(a.intersects(&Interval::closed(10, 20))); // share the point 10
    /// assert!(!a.intersects(&Interval::open(10, 20))); // open end excludes 10
    /// assert!(!a.intersects(&Interval::closed(11, 20)));
    /// ```
    pub fn intersects(&self, other: &Interval<T>) -> bool {
        let lower = greater_lower(
            bound_ref(&self.lower, self.lower_closed),
            bound_ref(&other.lower, other.lower_closed),
        );
        let upper = lesser_upper(
            bound_ref(&self.upper, self.upper_closed),
            bound_ref(&other.upper, other.upper_closed),
        );
        match (lower, upper) {
            // One side of the shared region is unbounded, so it is nonempty.
            (None, _) | (_, None) => true,
            (Some((lv, lc)), Some((uv, uc))) => match lv.cmp(uv) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => lc && uc,
            },
        }
    }

    /// Calculates the shared range of two intervals.
    ///
    /// Returns `None` if the intervals do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10);
    /// let b = Interval::over(5, false, 15, true); // (5, 15]
    /// assert_eq!(a.intersection(&b), Some(Interval::over(5, false, 10, true)));
    ///
    /// let c = Interval::closed(20, 30);
    /// assert_eq!(a.intersection(&c), None);
    /// ```
    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>>
    where
        T: Clone,
    {
        if !self.intersects(other) {
            return None;
        }
        let (lower, lower_closed) = match greater_lower(
            bound_ref(&self.lower, self.lower_closed),
            bound_ref(&other.lower, other.lower_closed),
        ) {
            Some((v, c)) => (Some(v.clone()), c),
            None => (None, false),
        };
        let (upper, upper_closed) = match lesser_upper(
            bound_ref(&self.upper, self.upper_closed),
            bound_ref(&other.upper, other.upper_closed),
        ) {
            Some((v, c)) => (Some(v.clone()), c),
            None => (None, false),
        };
        Some(Interval {
            lower,
            lower_closed,
            upper,
            upper_closed,
        })
    }
}

#[inline]
fn bound_ref<T>(bound: &Option<T>, closed: bool) -> Option<(&T, bool)> {
    bound.as_ref().map(|v| (v, closed))
}

/// The more restrictive of two lower bounds: the greater value wins, and at
/// equal values the open bound wins. `None` is negative infinity.
fn greater_lower<'a, T: Ord>(
    a: Option<(&'a T, bool)>,
    b: Option<(&'a T, bool)>,
) -> Option<(&'a T, bool)> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some((av, ac)), Some((bv, bc))) => match av.cmp(bv) {
            Ordering::Greater => Some((av, ac)),
            Ordering::Less => Some((bv, bc)),
            Ordering::Equal => Some((av, ac && bc)),
        },
    }
}

/// The more restrictive of two upper bounds: the lesser value wins, and at
/// equal values the open bound wins. `None` is positive infinity.
fn lesser_upper<'a, T: Ord>(
    a: Option<(&'a T, bool)>,
    b: Option<(&'a T, bool)>,
) -> Option<(&'a T, bool)> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some((av, ac)), Some((bv, bc))) => match av.cmp(bv) {
            Ordering::Less => Some((av, ac)),
            Ordering::Greater => Some((bv, bc)),
            Ordering::Equal => Some((av, ac && bc)),
        },
    }
}

impl<T> Ord for Interval<T>
where
    T: Ord,
{
    /// Orders by lower bound, then upper bound, for deterministic ordering.
    ///
    /// An unbounded lower end sorts first and an unbounded upper end sorts
    /// last. At equal bound values a closed lower end sorts before an open
    /// one (it starts earlier) and an open upper end sorts before a closed
    /// one (it stops earlier).
    fn cmp(&self, other: &Self) -> Ordering {
        let by_lower = match (&self.lower, &other.lower) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b).then_with(|| {
                match (self.lower_closed, other.lower_closed) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => Ordering::Equal,
                }
            }),
        };
        by_lower.then_with(|| match (&self.upper, &other.upper) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b).then_with(|| {
                match (self.upper_closed, other.upper_closed) {
                    (false, true) => Ordering::Less,
                    (true, false) => Ordering::Greater,
                    _ => Ordering::Equal,
                }
            }),
        })
    }
}

impl<T> PartialOrd for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(l) => write!(f, "{}{}", if self.lower_closed { '[' } else { '(' }, l)?,
            None => write!(f, "(-inf")?,
        }
        write!(f, ", ")?;
        match &self.upper {
            Some(u) => write!(f, "{}{}", u, if self.upper_closed { ']' } else { ')' }),
            None => write!(f, "inf)"),
        }
    }
}

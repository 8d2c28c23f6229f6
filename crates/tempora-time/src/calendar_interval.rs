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

use crate::date::CalendarDate;
use std::fmt;
use std::iter::FusedIterator;
use tempora_core::interval::Interval;

/// A bounded, both-ends-inclusive span of calendar dates.
///
/// `CalendarInterval` is the calendar instantiation of the generic
/// [`Interval`]: containment and intersection delegate to the interval
/// algebra, while the day-sequence operations live here because only a
/// bounded date domain can enumerate its members.
///
/// # Examples
///
/// ```rust
/// # use tempora_time::calendar_interval::CalendarInterval;
/// # use tempora_time::date::CalendarDate;
///
/// let week = CalendarInterval::inclusive(
///     CalendarDate::new(2004, 1, 5),
///     CalendarDate::new(2004, 1, 11),
/// );
/// assert_eq!(week.day_count(), 7);
/// assert!(week.includes(&CalendarDate::new(2004, 1, 7)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarInterval {
    start: CalendarDate,
    end: CalendarDate,
}

impl CalendarInterval {
    /// Creates the inclusive interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn inclusive(start: CalendarDate, end: CalendarDate) -> Self {
        Self::try_inclusive(start, end)
            .expect("Invalid calendar interval: start must be less than or equal to end")
    }

    /// Creates the inclusive interval `[start, end]`, if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::calendar_interval::CalendarInterval;
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let a = CalendarDate::new(2004, 1, 1);
    /// let b = CalendarDate::new(2004, 1, 2);
    /// assert!(CalendarInterval::try_inclusive(a, b).is_some());
    /// assert!(CalendarInterval::try_inclusive(b, a).is_none());
    /// ```
    #[inline]
    pub fn try_inclusive(start: CalendarDate, end: CalendarDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Returns the first day of the interval.
    #[inline]
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the interval.
    #[inline]
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns this span as a generic closed [`Interval`] over dates.
    #[inline]
    pub fn as_interval(&self) -> Interval<CalendarDate> {
        Interval::closed(self.start, self.end)
    }

    /// Returns `true` if `date` falls within the interval.
    #[inline]
    pub fn includes(&self, date: &CalendarDate) -> bool {
        self.as_interval().includes(date)
    }

    /// Returns `true` if the two spans share at least one day.
    #[inline]
    pub fn intersects(&self, other: &CalendarInterval) -> bool {
        self.as_interval().intersects(&other.as_interval())
    }

    /// Returns the number of days in the inclusive day sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::calendar_interval::CalendarInterval;
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let single = CalendarInterval::inclusive(
    ///     CalendarDate::new(2004, 1, 5),
    ///     CalendarDate::new(2004, 1, 5),
    /// );
    /// assert_eq!(single.day_count(), 1);
    /// ```
    pub fn day_count(&self) -> u64 {
        let span = self
            .end
            .as_naive()
            .signed_duration_since(self.start.as_naive());
        span.num_days() as u64 + 1
    }

    /// Creates a lazy iterator over the inclusive day sequence, from the
    /// start forward.
    ///
    /// The iterator is finite and each call produces a fresh, independent
    /// sequence; there is no shared cursor state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::calendar_interval::CalendarInterval;
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let span = CalendarInterval::inclusive(
    ///     CalendarDate::new(2004, 2, 28),
    ///     CalendarDate::new(2004, 3, 1),
    /// );
    /// let days: Vec<_> = span.days().collect();
    /// assert_eq!(days.len(), 3); // Feb 28, Feb 29 (leap), Mar 1
    /// ```
    #[inline]
    pub fn days(&self) -> CalendarDays {
        CalendarDays {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// An iterator over the inclusive day sequence of a [`CalendarInterval`].
#[derive(Clone, Debug)]
pub struct CalendarDays {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for CalendarDays {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current.next_day())
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(next) => {
                let remaining = self
                    .end
                    .as_naive()
                    .signed_duration_since(next.as_naive())
                    .num_days() as usize
                    + 1;
                (remaining, Some(remaining))
            }
        }
    }
}

impl ExactSizeIterator for CalendarDays {}

impl FusedIterator for CalendarDays {}

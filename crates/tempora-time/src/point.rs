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
use chrono::{DateTime, Utc};
use std::fmt;

/// An absolute instant, stored as milliseconds since the Unix epoch (UTC).
///
/// `TimePoint` is an immutable ordered value with millisecond precision.
/// It anchors durations in absolute time; calendar-granular questions go
/// through [`CalendarDate`].
///
/// # Examples
///
/// ```rust
/// # use tempora_time::point::TimePoint;
///
/// let epoch = TimePoint::from_millis(0);
/// let later = TimePoint::from_millis(1_000);
/// assert!(epoch < later);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint {
    millis: i64,
}

impl TimePoint {
    /// Creates a time point from milliseconds since the Unix epoch.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Returns the milliseconds since the Unix epoch.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Returns the instant at UTC midnight opening the given calendar day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    /// # use tempora_time::point::TimePoint;
    ///
    /// let epoch_day = CalendarDate::new(1970, 1, 1);
    /// assert_eq!(TimePoint::at_midnight(epoch_day), TimePoint::from_millis(0));
    /// ```
    pub fn at_midnight(date: CalendarDate) -> Self {
        let midnight = date
            .as_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid for every calendar date");
        Self::from_millis(midnight.and_utc().timestamp_millis())
    }

    /// Returns the UTC civil date this instant falls on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    /// # use tempora_time::point::TimePoint;
    ///
    /// let just_before_midnight = TimePoint::from_millis(86_400_000 - 1);
    /// assert_eq!(just_before_midnight.calendar_date(), CalendarDate::new(1970, 1, 1));
    /// assert_eq!(TimePoint::from_millis(86_400_000).calendar_date(), CalendarDate::new(1970, 1, 2));
    /// ```
    pub fn calendar_date(&self) -> CalendarDate {
        CalendarDate::from(self.as_datetime().date_naive())
    }

    /// Returns this instant shifted by a signed millisecond delta.
    ///
    /// # Panics
    ///
    /// Panics if the shifted value overflows the millisecond range.
    #[inline]
    pub fn plus_millis(&self, delta: i64) -> Self {
        Self {
            millis: self
                .millis
                .checked_add(delta)
                .expect("time point out of supported range"),
        }
    }

    /// Returns the instant as a `chrono` UTC datetime.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.millis)
            .expect("time point out of supported range")
    }
}

impl From<DateTime<Utc>> for TimePoint {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_millis(value.timestamp_millis())
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_datetime().to_rfc3339())
    }
}

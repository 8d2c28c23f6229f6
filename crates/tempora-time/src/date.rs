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

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::fmt;

/// A day-granularity date in the proleptic Gregorian calendar.
///
/// `CalendarDate` is an immutable ordered value: it carries no time of day
/// and no time zone, and compares in calendar order. It is the value domain
/// that calendar intervals and the business calendar operate over.
///
/// # Examples
///
/// ```rust
/// # use tempora_time::date::CalendarDate;
///
/// let d = CalendarDate::new(2004, 1, 5);
/// assert_eq!(d.to_string(), "2004-01-05");
/// assert!(d < CalendarDate::new(2004, 1, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    /// Creates a date from a calendar year, month (1-12), and day of month.
    ///
    /// # Panics
    ///
    /// Panics if the components do not name a valid Gregorian date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let leap_day = CalendarDate::new(2004, 2, 29);
    /// assert_eq!(leap_day.day(), 29);
    /// ```
    #[inline]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self::try_new(year, month, day).expect("Invalid calendar date")
    }

    /// Creates a date from its components, if they name a valid date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    ///
    /// assert!(CalendarDate::try_new(2005, 2, 29).is_none());
    /// assert!(CalendarDate::try_new(2005, 2, 28).is_some());
    /// ```
    #[inline]
    pub fn try_new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self { date })
    }

    /// Returns the calendar year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month of the year (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the day of the month (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the day of the week under the fixed Gregorian week.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(CalendarDate::new(2004, 1, 5).day_of_week(), Weekday::Mon);
    /// ```
    #[inline]
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the following calendar day.
    ///
    /// # Panics
    ///
    /// Panics if the successor exceeds the supported date range.
    #[inline]
    pub fn next_day(&self) -> Self {
        Self {
            date: self
                .date
                .succ_opt()
                .expect("calendar date out of supported range"),
        }
    }

    /// Returns the preceding calendar day.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor exceeds the supported date range.
    #[inline]
    pub fn previous_day(&self) -> Self {
        Self {
            date: self
                .date
                .pred_opt()
                .expect("calendar date out of supported range"),
        }
    }

    /// Returns this date shifted by a signed number of whole days.
    ///
    /// # Panics
    ///
    /// Panics if the result exceeds the supported date range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let d = CalendarDate::new(2004, 2, 27);
    /// assert_eq!(d.plus_days(2), CalendarDate::new(2004, 2, 29));
    /// assert_eq!(d.plus_days(-27), CalendarDate::new(2004, 1, 31));
    /// ```
    pub fn plus_days(&self, days: i64) -> Self {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.date.checked_add_days(magnitude)
        } else {
            self.date.checked_sub_days(magnitude)
        };
        Self {
            date: shifted.expect("calendar date out of supported range"),
        }
    }

    /// Returns this date shifted by a signed number of calendar months,
    /// clamping the day of month where the target month is shorter.
    ///
    /// # Panics
    ///
    /// Panics if the result exceeds the supported date range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let d = CalendarDate::new(2005, 1, 31);
    /// assert_eq!(d.plus_months(1), CalendarDate::new(2005, 2, 28));
    /// assert_eq!(d.plus_months(-1), CalendarDate::new(2004, 12, 31));
    /// ```
    pub fn plus_months(&self, months: i64) -> Self {
        let magnitude = u32::try_from(months.unsigned_abs())
            .expect("month offset out of supported range");
        let shifted = if months >= 0 {
            self.date.checked_add_months(Months::new(magnitude))
        } else {
            self.date.checked_sub_months(Months::new(magnitude))
        };
        Self {
            date: shifted.expect("calendar date out of supported range"),
        }
    }

    /// Returns the underlying `chrono` civil date.
    #[inline]
    pub fn as_naive(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl From<CalendarDate> for NaiveDate {
    #[inline]
    fn from(value: CalendarDate) -> Self {
        value.date
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let d = CalendarDate::new(2004, 1, 5);
        assert_eq!(d.year(), 2004);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 5);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        assert!(CalendarDate::try_new(2004, 2, 29).is_some()); // leap year
        assert!(CalendarDate::try_new(2005, 2, 29).is_none());
        assert!(CalendarDate::try_new(2004, 13, 1).is_none());
        assert!(CalendarDate::try_new(2004, 4, 31).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid calendar date")]
    fn test_new_panics_on_invalid() {
        CalendarDate::new(2005, 2, 29);
    }

    #[test]
    fn test_ordering() {
        assert!(CalendarDate::new(2003, 12, 31) < CalendarDate::new(2004, 1, 1));
        assert!(CalendarDate::new(2004, 1, 31) < CalendarDate::new(2004, 2, 1));
        assert_eq!(CalendarDate::new(2004, 6, 15), CalendarDate::new(2004, 6, 15));
    }

    #[test]
    fn test_day_stepping() {
        let d = CalendarDate::new(2004, 2, 28);
        assert_eq!(d.next_day(), CalendarDate::new(2004, 2, 29));
        assert_eq!(d.next_day().next_day(), CalendarDate::new(2004, 3, 1));
        assert_eq!(d.previous_day(), CalendarDate::new(2004, 2, 27));
    }

    #[test]
    fn test_plus_days_across_year_boundary() {
        let d = CalendarDate::new(2003, 12, 30);
        assert_eq!(d.plus_days(3), CalendarDate::new(2004, 1, 2));
        assert_eq!(d.plus_days(0), d);
        assert_eq!(CalendarDate::new(2004, 1, 2).plus_days(-3), d);
    }

    #[test]
    fn test_plus_months_clamps_day_of_month() {
        // Jan 31 + 1 month clamps to the end of February.
        assert_eq!(
            CalendarDate::new(2005, 1, 31).plus_months(1),
            CalendarDate::new(2005, 2, 28)
        );
        // In a leap year the clamp lands on the 29th.
        assert_eq!(
            CalendarDate::new(2004, 1, 31).plus_months(1),
            CalendarDate::new(2004, 2, 29)
        );
        assert_eq!(
            CalendarDate::new(2004, 3, 31).plus_months(-1),
            CalendarDate::new(2004, 2, 29)
        );
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(CalendarDate::new(2004, 1, 5).day_of_week(), Weekday::Mon);
        assert_eq!(CalendarDate::new(2004, 1, 10).day_of_week(), Weekday::Sat);
        assert_eq!(CalendarDate::new(2004, 1, 11).day_of_week(), Weekday::Sun);
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(CalendarDate::new(2004, 1, 5).to_string(), "2004-01-05");
        assert_eq!(CalendarDate::new(2004, 12, 25).to_string(), "2004-12-25");
    }

    #[test]
    fn test_naive_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2004, 6, 15).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date.as_naive(), naive);
        assert_eq!(NaiveDate::from(date), naive);
    }
}

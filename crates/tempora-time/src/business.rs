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

//! Business-day classification over a configurable holiday set.
//!
//! A [`BusinessCalendar`] deems a date a business day iff it is neither a
//! weekend day (Saturday or Sunday) nor a registered holiday. The weekend
//! rule is fixed; the holiday set is the per-calendar configuration.

use crate::calendar_interval::CalendarInterval;
use crate::date::CalendarDate;
use chrono::Weekday;
use rustc_hash::FxHashSet;

/// Maximum number of days [`BusinessCalendar::nearest_business_day`] scans
/// forward before giving up.
///
/// Ten years of consecutive non-business days means the calendar is
/// misconfigured, not that the answer is further out.
pub const NEAREST_SCAN_LIMIT_DAYS: u32 = 3_660;

/// A calendar classifying dates as business days or not.
///
/// # Examples
///
/// ```rust
/// # use tempora_time::business::BusinessCalendar;
/// # use tempora_time::date::CalendarDate;
///
/// let mut calendar = BusinessCalendar::new();
/// calendar.add_holiday(CalendarDate::new(2004, 1, 1));
///
/// assert!(!calendar.is_business_day(&CalendarDate::new(2004, 1, 1))); // holiday
/// assert!(!calendar.is_business_day(&CalendarDate::new(2004, 1, 3))); // Saturday
/// assert!(calendar.is_business_day(&CalendarDate::new(2004, 1, 2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct BusinessCalendar {
    holidays: FxHashSet<CalendarDate>,
}

impl BusinessCalendar {
    /// Creates a calendar with no holidays; only weekends are non-business.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single holiday.
    #[inline]
    pub fn add_holiday(&mut self, date: CalendarDate) {
        self.holidays.insert(date);
    }

    /// Registers every date in the iterator as a holiday.
    #[inline]
    pub fn add_holidays<I>(&mut self, dates: I)
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        self.holidays.extend(dates);
    }

    /// Whether the date is a registered holiday.
    #[inline]
    pub fn is_holiday(&self, date: &CalendarDate) -> bool {
        self.holidays.contains(date)
    }

    /// Whether the date falls on a Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self, date: &CalendarDate) -> bool {
        matches!(date.day_of_week(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether the date is a business day: neither a weekend day nor a
    /// registered holiday.
    #[inline]
    pub fn is_business_day(&self, date: &CalendarDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Returns the smallest business day greater than or equal to `date`.
    ///
    /// Returns `None` when no business day exists within
    /// [`NEAREST_SCAN_LIMIT_DAYS`] of `date`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::business::BusinessCalendar;
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let calendar = BusinessCalendar::new();
    /// // 2004-01-10 is a Saturday; the scan lands on Monday the 12th.
    /// assert_eq!(
    ///     calendar.nearest_business_day(CalendarDate::new(2004, 1, 10)),
    ///     Some(CalendarDate::new(2004, 1, 12))
    /// );
    /// ```
    pub fn nearest_business_day(&self, date: CalendarDate) -> Option<CalendarDate> {
        let mut candidate = date;
        for _ in 0..=NEAREST_SCAN_LIMIT_DAYS {
            if self.is_business_day(&candidate) {
                return Some(candidate);
            }
            candidate = candidate.next_day();
        }
        None
    }

    /// Counts the business days within an inclusive calendar interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::business::BusinessCalendar;
    /// # use tempora_time::calendar_interval::CalendarInterval;
    /// # use tempora_time::date::CalendarDate;
    ///
    /// let calendar = BusinessCalendar::new();
    /// let week = CalendarInterval::inclusive(
    ///     CalendarDate::new(2004, 1, 5),  // Monday
    ///     CalendarDate::new(2004, 1, 11), // Sunday
    /// );
    /// assert_eq!(calendar.elapsed_business_days(&week), 5);
    /// ```
    #[inline]
    pub fn elapsed_business_days(&self, interval: &CalendarInterval) -> usize {
        self.business_days(interval).count()
    }

    /// Iterates the business days within an inclusive calendar interval, in
    /// ascending order.
    pub fn business_days<'a>(
        &'a self,
        interval: &CalendarInterval,
    ) -> impl Iterator<Item = CalendarDate> + 'a {
        interval.days().filter(move |date| self.is_business_day(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2004-01-05 is a Monday; 2004-01-10 and 2004-01-11 the following
    // weekend.
    fn monday() -> CalendarDate {
        CalendarDate::new(2004, 1, 5)
    }

    #[test]
    fn test_weekend_detection() {
        let calendar = BusinessCalendar::new();
        assert!(!calendar.is_weekend(&monday()));
        assert!(calendar.is_weekend(&CalendarDate::new(2004, 1, 10)));
        assert!(calendar.is_weekend(&CalendarDate::new(2004, 1, 11)));
    }

    #[test]
    fn test_holiday_overrides_weekday() {
        let mut calendar = BusinessCalendar::new();
        assert!(calendar.is_business_day(&monday()));

        calendar.add_holiday(monday());
        assert!(calendar.is_holiday(&monday()));
        assert!(!calendar.is_business_day(&monday()));
    }

    #[test]
    fn test_add_holidays_bulk() {
        let mut calendar = BusinessCalendar::new();
        calendar.add_holidays([monday(), CalendarDate::new(2004, 1, 6)]);
        assert!(!calendar.is_business_day(&monday()));
        assert!(!calendar.is_business_day(&CalendarDate::new(2004, 1, 6)));
        assert!(calendar.is_business_day(&CalendarDate::new(2004, 1, 7)));
    }

    #[test]
    fn test_elapsed_business_days_over_full_week() {
        let calendar = BusinessCalendar::new();
        let week = CalendarInterval::inclusive(monday(), CalendarDate::new(2004, 1, 11));
        assert_eq!(calendar.elapsed_business_days(&week), 5);
    }

    #[test]
    fn test_elapsed_business_days_with_holiday() {
        let mut calendar = BusinessCalendar::new();
        calendar.add_holiday(CalendarDate::new(2004, 1, 7));
        let week = CalendarInterval::inclusive(monday(), CalendarDate::new(2004, 1, 11));
        assert_eq!(calendar.elapsed_business_days(&week), 4);
    }

    #[test]
    fn test_business_days_iterator_order() {
        let calendar = BusinessCalendar::new();
        let week = CalendarInterval::inclusive(monday(), CalendarDate::new(2004, 1, 11));
        let days: Vec<_> = calendar.business_days(&week).collect();
        assert_eq!(
            days,
            vec![
                CalendarDate::new(2004, 1, 5),
                CalendarDate::new(2004, 1, 6),
                CalendarDate::new(2004, 1, 7),
                CalendarDate::new(2004, 1, 8),
                CalendarDate::new(2004, 1, 9),
            ]
        );
    }

    #[test]
    fn test_nearest_business_day_identity() {
        let calendar = BusinessCalendar::new();
        assert_eq!(calendar.nearest_business_day(monday()), Some(monday()));
    }

    #[test]
    fn test_nearest_business_day_walks_forward() {
        let calendar = BusinessCalendar::new();
        // Both weekend days resolve to the following Monday.
        assert_eq!(
            calendar.nearest_business_day(CalendarDate::new(2004, 1, 10)),
            Some(CalendarDate::new(2004, 1, 12))
        );
        assert_eq!(
            calendar.nearest_business_day(CalendarDate::new(2004, 1, 11)),
            Some(CalendarDate::new(2004, 1, 12))
        );
    }

    #[test]
    fn test_nearest_business_day_skips_holidays() {
        let mut calendar = BusinessCalendar::new();
        // A long weekend: the following Monday is a holiday too.
        calendar.add_holiday(CalendarDate::new(2004, 1, 12));
        assert_eq!(
            calendar.nearest_business_day(CalendarDate::new(2004, 1, 10)),
            Some(CalendarDate::new(2004, 1, 13))
        );
    }

    #[test]
    fn test_nearest_business_day_gives_up_on_holiday_horizon() {
        let mut calendar = BusinessCalendar::new();
        let start = CalendarDate::new(2004, 1, 1);
        calendar.add_holidays(
            CalendarInterval::inclusive(
                start,
                start.plus_days(i64::from(NEAREST_SCAN_LIMIT_DAYS) + 1),
            )
            .days(),
        );
        assert_eq!(calendar.nearest_business_day(start), None);
    }
}

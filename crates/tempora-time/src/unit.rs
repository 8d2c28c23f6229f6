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

//! Time granularities and their convertibility groups.
//!
//! Convertibility is not universal. Sub-day units convert to milliseconds
//! and day-and-above units convert to days; `day` and `week` participate in
//! both groups, which is the bridge that lets sub-day and calendar-granular
//! durations interoperate. A unit is convertible to another only within a
//! shared group, and every arithmetic path checks group membership before
//! touching magnitudes.

use std::fmt;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;

// Nominal day factors for calendar-granular units. Date shifting never uses
// these (months and years get true calendar-field arithmetic); they exist so
// duration magnitudes have a common ground for arithmetic and comparison.
const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;
const DAYS_PER_QUARTER: u64 = 90;
const DAYS_PER_YEAR: u64 = 365;

/// An enumerated set of time granularities, from millisecond to year.
///
/// `TimeUnit` values are immutable `Copy` singletons. The derived ordering
/// runs from the finest (`Millisecond`) to the coarsest (`Year`) unit.
///
/// # Examples
///
/// ```rust
/// # use tempora_time::unit::TimeUnit;
///
/// assert!(TimeUnit::Hour.is_convertible_to(TimeUnit::Millisecond));
/// assert!(TimeUnit::Month.is_convertible_to(TimeUnit::Day));
/// assert!(!TimeUnit::Hour.is_convertible_to(TimeUnit::Month));
/// // Day bridges both convertibility groups.
/// assert!(TimeUnit::Day.is_convertible_to(TimeUnit::Second));
/// assert!(TimeUnit::Day.is_convertible_to(TimeUnit::Year));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Normalization order for millisecond-convertible durations.
const DESCENDING_MILLIS_UNITS: [TimeUnit; 6] = [
    TimeUnit::Week,
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
    TimeUnit::Millisecond,
];

/// Display order for millisecond-convertible durations. Weeks are omitted
/// so nine days render as "9 days" rather than "1 week, 2 days".
const DESCENDING_MILLIS_UNITS_FOR_DISPLAY: [TimeUnit; 5] = [
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
    TimeUnit::Millisecond,
];

/// Normalization and display order for day-convertible durations.
const DESCENDING_DAY_UNITS: [TimeUnit; 5] = [
    TimeUnit::Year,
    TimeUnit::Quarter,
    TimeUnit::Month,
    TimeUnit::Week,
    TimeUnit::Day,
];

impl TimeUnit {
    /// Returns `true` if this unit belongs to the millisecond group
    /// (`millisecond` through `week`).
    #[inline]
    pub const fn is_convertible_to_milliseconds(self) -> bool {
        matches!(
            self,
            TimeUnit::Millisecond
                | TimeUnit::Second
                | TimeUnit::Minute
                | TimeUnit::Hour
                | TimeUnit::Day
                | TimeUnit::Week
        )
    }

    /// Returns `true` if this unit belongs to the day group
    /// (`day` through `year`).
    #[inline]
    pub const fn is_convertible_to_days(self) -> bool {
        matches!(
            self,
            TimeUnit::Day | TimeUnit::Week | TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year
        )
    }

    /// Returns `true` if the two units share a convertibility group.
    ///
    /// Must hold before any arithmetic or comparison combines their
    /// magnitudes; operations on non-convertible units fail rather than
    /// silently truncate.
    #[inline]
    pub const fn is_convertible_to(self, other: TimeUnit) -> bool {
        (self.is_convertible_to_milliseconds() && other.is_convertible_to_milliseconds())
            || (self.is_convertible_to_days() && other.is_convertible_to_days())
    }

    /// Returns this unit's factor in milliseconds, or `None` if the unit is
    /// not millisecond-convertible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::unit::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Minute.factor_in_millis(), Some(60_000));
    /// assert_eq!(TimeUnit::Month.factor_in_millis(), None);
    /// ```
    #[inline]
    pub const fn factor_in_millis(self) -> Option<u64> {
        match self {
            TimeUnit::Millisecond => Some(1),
            TimeUnit::Second => Some(MILLIS_PER_SECOND),
            TimeUnit::Minute => Some(MILLIS_PER_MINUTE),
            TimeUnit::Hour => Some(MILLIS_PER_HOUR),
            TimeUnit::Day => Some(MILLIS_PER_DAY),
            TimeUnit::Week => Some(MILLIS_PER_WEEK),
            _ => None,
        }
    }

    /// Returns this unit's factor in days, or `None` if the unit is not
    /// day-convertible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::unit::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Week.factor_in_days(), Some(7));
    /// assert_eq!(TimeUnit::Hour.factor_in_days(), None);
    /// ```
    #[inline]
    pub const fn factor_in_days(self) -> Option<u64> {
        match self {
            TimeUnit::Day => Some(1),
            TimeUnit::Week => Some(DAYS_PER_WEEK),
            TimeUnit::Month => Some(DAYS_PER_MONTH),
            TimeUnit::Quarter => Some(DAYS_PER_QUARTER),
            TimeUnit::Year => Some(DAYS_PER_YEAR),
            _ => None,
        }
    }

    /// Returns this unit's factor relative to the given base unit, or
    /// `None` if `base` is not a base unit of one of this unit's groups.
    #[inline]
    pub const fn factor_in(self, base: TimeUnit) -> Option<u64> {
        match base {
            TimeUnit::Millisecond => self.factor_in_millis(),
            TimeUnit::Day => self.factor_in_days(),
            _ => None,
        }
    }

    /// Returns the base unit of this unit's group: `Millisecond` for
    /// millisecond-convertible units, `Day` otherwise.
    ///
    /// For the bridge units `day` and `week` the finer base wins, so their
    /// standalone magnitudes stay lossless.
    #[inline]
    pub const fn base_unit(self) -> TimeUnit {
        if self.is_convertible_to_milliseconds() {
            TimeUnit::Millisecond
        } else {
            TimeUnit::Day
        }
    }

    /// Returns the units of this unit's group in descending factor order,
    /// as used by normalization.
    #[inline]
    pub fn descending_units(self) -> &'static [TimeUnit] {
        if self.is_convertible_to_milliseconds() {
            &DESCENDING_MILLIS_UNITS
        } else {
            &DESCENDING_DAY_UNITS
        }
    }

    /// Returns the descending units used for display rendering.
    ///
    /// Identical to [`descending_units`](Self::descending_units) except
    /// that the millisecond group drops `Week`.
    #[inline]
    pub fn descending_units_for_display(self) -> &'static [TimeUnit] {
        if self.is_convertible_to_milliseconds() {
            &DESCENDING_MILLIS_UNITS_FOR_DISPLAY
        } else {
            &DESCENDING_DAY_UNITS
        }
    }

    /// Returns the lowercase singular name of the unit.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }

    /// Renders an amount of this unit with English pluralization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::unit::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Hour.quantity_label(1), "1 hour");
    /// assert_eq!(TimeUnit::Hour.quantity_label(2), "2 hours");
    /// ```
    pub fn quantity_label(self, amount: u64) -> String {
        if amount == 1 {
            format!("1 {}", self.name())
        } else {
            format!("{} {}s", amount, self.name())
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_membership() {
        for unit in [
            TimeUnit::Millisecond,
            TimeUnit::Second,
            TimeUnit::Minute,
            TimeUnit::Hour,
        ] {
            assert!(unit.is_convertible_to_milliseconds());
            assert!(!unit.is_convertible_to_days());
        }
        for unit in [TimeUnit::Month, TimeUnit::Quarter, TimeUnit::Year] {
            assert!(!unit.is_convertible_to_milliseconds());
            assert!(unit.is_convertible_to_days());
        }
        // The bridge units belong to both groups.
        for unit in [TimeUnit::Day, TimeUnit::Week] {
            assert!(unit.is_convertible_to_milliseconds());
            assert!(unit.is_convertible_to_days());
        }
    }

    #[test]
    fn test_convertibility_is_group_bound() {
        assert!(TimeUnit::Millisecond.is_convertible_to(TimeUnit::Week));
        assert!(TimeUnit::Year.is_convertible_to(TimeUnit::Month));
        assert!(TimeUnit::Day.is_convertible_to(TimeUnit::Hour));
        assert!(TimeUnit::Day.is_convertible_to(TimeUnit::Year));
        assert!(!TimeUnit::Hour.is_convertible_to(TimeUnit::Month));
        assert!(!TimeUnit::Year.is_convertible_to(TimeUnit::Millisecond));
    }

    #[test]
    fn test_convertibility_symmetry() {
        let all = [
            TimeUnit::Millisecond,
            TimeUnit::Second,
            TimeUnit::Minute,
            TimeUnit::Hour,
            TimeUnit::Day,
            TimeUnit::Week,
            TimeUnit::Month,
            TimeUnit::Quarter,
            TimeUnit::Year,
        ];
        for a in all {
            assert!(a.is_convertible_to(a));
            for b in all {
                assert_eq!(a.is_convertible_to(b), b.is_convertible_to(a));
            }
        }
    }

    #[test]
    fn test_factors() {
        assert_eq!(TimeUnit::Millisecond.factor_in_millis(), Some(1));
        assert_eq!(TimeUnit::Second.factor_in_millis(), Some(1_000));
        assert_eq!(TimeUnit::Minute.factor_in_millis(), Some(60_000));
        assert_eq!(TimeUnit::Hour.factor_in_millis(), Some(3_600_000));
        assert_eq!(TimeUnit::Day.factor_in_millis(), Some(86_400_000));
        assert_eq!(TimeUnit::Week.factor_in_millis(), Some(604_800_000));
        assert_eq!(TimeUnit::Year.factor_in_millis(), None);

        assert_eq!(TimeUnit::Day.factor_in_days(), Some(1));
        assert_eq!(TimeUnit::Week.factor_in_days(), Some(7));
        assert_eq!(TimeUnit::Month.factor_in_days(), Some(30));
        assert_eq!(TimeUnit::Quarter.factor_in_days(), Some(90));
        assert_eq!(TimeUnit::Year.factor_in_days(), Some(365));
        assert_eq!(TimeUnit::Hour.factor_in_days(), None);
    }

    #[test]
    fn test_base_unit() {
        assert_eq!(TimeUnit::Hour.base_unit(), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::Day.base_unit(), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::Week.base_unit(), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::Month.base_unit(), TimeUnit::Day);
        assert_eq!(TimeUnit::Year.base_unit(), TimeUnit::Day);
    }

    #[test]
    fn test_descending_units_are_sorted_by_factor() {
        let base = TimeUnit::Millisecond;
        let factors: Vec<u64> = DESCENDING_MILLIS_UNITS
            .iter()
            .map(|u| u.factor_in(base).unwrap())
            .collect();
        assert!(factors.windows(2).all(|w| w[0] > w[1]));

        let base = TimeUnit::Day;
        let factors: Vec<u64> = DESCENDING_DAY_UNITS
            .iter()
            .map(|u| u.factor_in(base).unwrap())
            .collect();
        assert!(factors.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_fineness_ordering() {
        assert!(TimeUnit::Millisecond < TimeUnit::Second);
        assert!(TimeUnit::Hour < TimeUnit::Day);
        assert!(TimeUnit::Day < TimeUnit::Week);
        assert!(TimeUnit::Quarter < TimeUnit::Year);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeUnit::Minute.quantity_label(0), "0 minutes");
        assert_eq!(TimeUnit::Minute.quantity_label(1), "1 minute");
        assert_eq!(TimeUnit::Minute.quantity_label(30), "30 minutes");
        assert_eq!(format!("{}", TimeUnit::Quarter), "quarter");
    }
}

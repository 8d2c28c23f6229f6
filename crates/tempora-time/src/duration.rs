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

//! Elapsed spans of time with unit-aware arithmetic.
//!
//! A [`Duration`] is a non-negative quantity of a [`TimeUnit`], not a
//! calendar anchor. All arithmetic and comparison first converts both
//! operands to the base unit of a shared convertibility group
//! (milliseconds or days); combining non-convertible units is a
//! [`DurationError`], never a silent truncation. Division returns an exact
//! rational ratio so downstream business-day and interest-style
//! calculations keep full precision.
//!
//! Shifting absolute time values is deliberately non-uniform: sub-day
//! units move a [`TimePoint`] by a fixed millisecond delta, while months,
//! quarters, and years apply calendar-field arithmetic, because those
//! units have variable lengths.

use crate::calendar_interval::CalendarInterval;
use crate::date::CalendarDate;
use crate::point::TimePoint;
use crate::unit::TimeUnit;
use num_rational::Rational64;
use std::cmp::Ordering;
use std::fmt;

/// An elapsed span of time: a non-negative quantity of a [`TimeUnit`].
///
/// Two durations are equal iff their units are mutually convertible and
/// their base-unit magnitudes are equal, regardless of the unit each was
/// expressed in. Immutable.
///
/// # Examples
///
/// ```rust
/// # use tempora_time::duration::Duration;
///
/// let d = Duration::hours(1).checked_add(&Duration::minutes(30)).unwrap();
/// assert_eq!(d, Duration::minutes(90));
/// assert_eq!(Duration::minutes(90).to_normalized_string(), "1 hour, 30 minutes");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Duration {
    quantity: u64,
    unit: TimeUnit,
}

impl Duration {
    /// The zero-length duration.
    pub const NONE: Duration = Duration::milliseconds(0);

    /// Creates a duration from an explicit quantity and unit.
    #[inline]
    pub const fn new(quantity: u64, unit: TimeUnit) -> Self {
        Self { quantity, unit }
    }

    /// Creates a duration of whole milliseconds.
    #[inline]
    pub const fn milliseconds(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Millisecond)
    }

    /// Creates a duration of whole seconds.
    #[inline]
    pub const fn seconds(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Second)
    }

    /// Creates a duration of whole minutes.
    #[inline]
    pub const fn minutes(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Minute)
    }

    /// Creates a duration of whole hours.
    #[inline]
    pub const fn hours(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Hour)
    }

    /// Creates a duration of whole days.
    #[inline]
    pub const fn days(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Day)
    }

    /// Creates a duration of whole weeks.
    #[inline]
    pub const fn weeks(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Week)
    }

    /// Creates a duration of whole months.
    #[inline]
    pub const fn months(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Month)
    }

    /// Creates a duration of whole quarters.
    #[inline]
    pub const fn quarters(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Quarter)
    }

    /// Creates a duration of whole years.
    #[inline]
    pub const fn years(how_many: u64) -> Self {
        Self::new(how_many, TimeUnit::Year)
    }

    /// Creates a composite sub-day duration, expressed in milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if the combined magnitude overflows `u64` milliseconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    ///
    /// let d = Duration::days_hours_minutes_seconds_milliseconds(1, 2, 30, 0, 0);
    /// assert_eq!(d.to_normalized_string(), "1 day, 2 hours, 30 minutes");
    /// ```
    pub fn days_hours_minutes_seconds_milliseconds(
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        milliseconds: u64,
    ) -> Self {
        let mut total = Duration::days(days).in_base_units();
        for part in [
            Duration::hours(hours),
            Duration::minutes(minutes),
            Duration::seconds(seconds),
            Duration::milliseconds(milliseconds),
        ] {
            total = total
                .checked_add(part.in_base_units())
                .expect("duration magnitude overflows u64 base units");
        }
        Self::milliseconds(total)
    }

    /// Returns the quantity in the unit this duration was expressed in.
    #[inline]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the unit this duration was expressed in.
    #[inline]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns the magnitude in the base unit of this duration's group:
    /// milliseconds for millisecond-convertible units, days otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the magnitude overflows `u64` base units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    ///
    /// assert_eq!(Duration::minutes(2).in_base_units(), 120_000);
    /// assert_eq!(Duration::quarters(2).in_base_units(), 180);
    /// ```
    #[inline]
    pub fn in_base_units(&self) -> u64 {
        self.magnitude_in(self.unit.base_unit())
    }

    /// Adds another duration, requiring mutually convertible units.
    ///
    /// Both operands are converted to the base unit of the shared group and
    /// the sum is expressed in that base unit.
    ///
    /// # Panics
    ///
    /// Panics if the combined magnitude overflows `u64` base units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    /// # use tempora_time::duration::DurationError;
    /// # use tempora_time::unit::TimeUnit;
    ///
    /// let d = Duration::months(1).checked_add(&Duration::days(3)).unwrap();
    /// assert_eq!(d, Duration::days(33));
    ///
    /// let err = Duration::hours(1).checked_add(&Duration::months(1)).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     DurationError::NotConvertible { lhs: TimeUnit::Hour, rhs: TimeUnit::Month }
    /// );
    /// ```
    pub fn checked_add(&self, other: &Duration) -> Result<Duration, DurationError> {
        let base = self.common_base(other)?;
        let sum = self
            .magnitude_in(base)
            .checked_add(other.magnitude_in(base))
            .expect("duration magnitude overflows u64 base units");
        Ok(Duration::new(sum, base))
    }

    /// Subtracts another duration, requiring mutually convertible units and
    /// a non-negative result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::{Duration, DurationError};
    ///
    /// let d = Duration::hours(2).checked_sub(&Duration::minutes(30)).unwrap();
    /// assert_eq!(d, Duration::minutes(90));
    ///
    /// let err = Duration::days(1).checked_sub(&Duration::days(2)).unwrap_err();
    /// assert_eq!(err, DurationError::NegativeResult);
    /// ```
    pub fn checked_sub(&self, other: &Duration) -> Result<Duration, DurationError> {
        let base = self.common_base(other)?;
        let lhs = self.magnitude_in(base);
        let rhs = other.magnitude_in(base);
        match lhs.checked_sub(rhs) {
            Some(difference) => Ok(Duration::new(difference, base)),
            None => Err(DurationError::NegativeResult),
        }
    }

    /// Divides this duration by another, returning an exact rational ratio
    /// of their base-unit magnitudes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    /// use num_rational::Rational64;
    ///
    /// let ratio = Duration::days(1).divided_by(&Duration::hours(1)).unwrap();
    /// assert_eq!(ratio, Rational64::from_integer(24));
    ///
    /// let ratio = Duration::minutes(90).divided_by(&Duration::hours(1)).unwrap();
    /// assert_eq!(ratio, Rational64::new(3, 2));
    /// ```
    pub fn divided_by(&self, divisor: &Duration) -> Result<Rational64, DurationError> {
        let base = self.common_base(divisor)?;
        let denominator = divisor.magnitude_in(base);
        if denominator == 0 {
            return Err(DurationError::DivisionByZero);
        }
        let numerator = i64::try_from(self.magnitude_in(base))
            .expect("duration magnitude exceeds i64 base units");
        let denominator = i64::try_from(denominator)
            .expect("duration magnitude exceeds i64 base units");
        Ok(Rational64::new(numerator, denominator))
    }

    /// Compares two durations by their base-unit magnitudes.
    ///
    /// Comparing non-convertible units is an error, never a silent answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    /// use std::cmp::Ordering;
    ///
    /// let cmp = Duration::minutes(90).checked_cmp(&Duration::hours(1)).unwrap();
    /// assert_eq!(cmp, Ordering::Greater);
    ///
    /// assert!(Duration::milliseconds(1).checked_cmp(&Duration::months(1)).is_err());
    /// ```
    pub fn checked_cmp(&self, other: &Duration) -> Result<Ordering, DurationError> {
        let base = self.common_base(other)?;
        Ok(self.magnitude_in(base).cmp(&other.magnitude_in(base)))
    }

    /// Shifts a time point forward by this duration.
    ///
    /// Millisecond-convertible units move the absolute millisecond offset;
    /// months, quarters, and years apply calendar-field arithmetic on the
    /// UTC calendar because their lengths vary.
    ///
    /// # Panics
    ///
    /// Panics if the shifted instant leaves the supported time range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    /// # use tempora_time::point::TimePoint;
    ///
    /// let point = TimePoint::from_millis(0);
    /// assert_eq!(Duration::seconds(90).added_to(point), TimePoint::from_millis(90_000));
    /// ```
    pub fn added_to(&self, point: TimePoint) -> TimePoint {
        if self.unit.is_convertible_to_milliseconds() {
            point.plus_millis(self.signed_millis())
        } else {
            TimePoint::from(
                point
                    .as_datetime()
                    .checked_add_months(self.calendar_months())
                    .expect("time point out of supported range"),
            )
        }
    }

    /// Shifts a time point backward by this duration.
    ///
    /// # Panics
    ///
    /// Panics if the shifted instant leaves the supported time range.
    pub fn subtracted_from(&self, point: TimePoint) -> TimePoint {
        if self.unit.is_convertible_to_milliseconds() {
            point.plus_millis(-self.signed_millis())
        } else {
            TimePoint::from(
                point
                    .as_datetime()
                    .checked_sub_months(self.calendar_months())
                    .expect("time point out of supported range"),
            )
        }
    }

    /// Shifts a calendar date forward by this duration.
    ///
    /// Sub-day units leave the date unchanged (a day-granularity value
    /// cannot see them). `day` and `week` shift whole days. Months,
    /// quarters, and years apply calendar-field arithmetic, clamping the
    /// day of month where the target month is shorter.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    /// # use tempora_time::duration::Duration;
    ///
    /// let date = CalendarDate::new(2004, 1, 31);
    /// assert_eq!(Duration::hours(5).added_to_date(date), date);
    /// assert_eq!(Duration::weeks(1).added_to_date(date), CalendarDate::new(2004, 2, 7));
    /// assert_eq!(Duration::months(1).added_to_date(date), CalendarDate::new(2004, 2, 29));
    /// ```
    pub fn added_to_date(&self, date: CalendarDate) -> CalendarDate {
        match self.unit {
            TimeUnit::Millisecond | TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour => date,
            TimeUnit::Day | TimeUnit::Week => date.plus_days(self.signed_days()),
            TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year => {
                date.plus_months(self.signed_months())
            }
        }
    }

    /// Shifts a calendar date backward by this duration.
    ///
    /// Follows the same unit policy as [`added_to_date`](Self::added_to_date).
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported range.
    pub fn subtracted_from_date(&self, date: CalendarDate) -> CalendarDate {
        match self.unit {
            TimeUnit::Millisecond | TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour => date,
            TimeUnit::Day | TimeUnit::Week => date.plus_days(-self.signed_days()),
            TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year => {
                date.plus_months(-self.signed_months())
            }
        }
    }

    /// Returns the inclusive calendar interval of this duration's length
    /// anchored at `start`.
    ///
    /// Meaningful for day-and-above units; for sub-day units the interval
    /// collapses to the single day `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::date::CalendarDate;
    /// # use tempora_time::duration::Duration;
    ///
    /// let span = Duration::weeks(1).starting_from(CalendarDate::new(2004, 1, 5));
    /// assert_eq!(span.end(), CalendarDate::new(2004, 1, 12));
    /// ```
    pub fn starting_from(&self, start: CalendarDate) -> CalendarInterval {
        CalendarInterval::inclusive(start, self.added_to_date(start))
    }

    /// Decomposes the duration into the largest non-overlapping units with
    /// nonzero remainder, greedy and descending by factor.
    ///
    /// A zero duration renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    ///
    /// assert_eq!(Duration::minutes(90).to_normalized_string(), "1 hour, 30 minutes");
    /// assert_eq!(Duration::days(9).to_normalized_string(), "1 week, 2 days");
    /// assert_eq!(Duration::months(15).to_normalized_string(), "1 quarter, 2 months");
    /// ```
    #[inline]
    pub fn to_normalized_string(&self) -> String {
        self.render(self.unit.descending_units())
    }

    /// Returns the single coarsest unit that divides the duration exactly,
    /// or `None` if no unit of the group does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempora_time::duration::Duration;
    /// # use tempora_time::unit::TimeUnit;
    ///
    /// assert_eq!(Duration::minutes(120).normalized_unit(), Some(TimeUnit::Hour));
    /// assert_eq!(Duration::minutes(90).normalized_unit(), Some(TimeUnit::Minute));
    /// assert_eq!(Duration::days(14).normalized_unit(), Some(TimeUnit::Week));
    /// ```
    pub fn normalized_unit(&self) -> Option<TimeUnit> {
        let base = self.unit.base_unit();
        let magnitude = self.in_base_units();
        self.unit
            .descending_units()
            .iter()
            .copied()
            .find(|unit| {
                let factor = unit
                    .factor_in(base)
                    .expect("descending units share the duration's group");
                magnitude % factor == 0
            })
    }

    /// Renders the duration against a descending unit table.
    fn render(&self, units: &[TimeUnit]) -> String {
        let base = self.unit.base_unit();
        let mut remainder = self.in_base_units();
        let mut out = String::new();
        for &unit in units {
            let factor = unit
                .factor_in(base)
                .expect("descending units share the duration's group");
            let portion = remainder / factor;
            if portion > 0 {
                if !out.is_empty() {
                    out.push_str(", ");
                }
                out.push_str(&unit.quantity_label(portion));
            }
            remainder %= factor;
        }
        out
    }

    /// Picks the common base unit for a binary operation, preferring the
    /// lossless millisecond base when both operands allow it.
    fn common_base(&self, other: &Duration) -> Result<TimeUnit, DurationError> {
        if self.unit.is_convertible_to_milliseconds() && other.unit.is_convertible_to_milliseconds()
        {
            Ok(TimeUnit::Millisecond)
        } else if self.unit.is_convertible_to_days() && other.unit.is_convertible_to_days() {
            Ok(TimeUnit::Day)
        } else {
            Err(DurationError::NotConvertible {
                lhs: self.unit,
                rhs: other.unit,
            })
        }
    }

    /// Magnitude in the given base unit. The caller must have established
    /// group membership via `common_base` or an explicit group check.
    fn magnitude_in(&self, base: TimeUnit) -> u64 {
        let factor = self
            .unit
            .factor_in(base)
            .expect("unit convertibility must be checked before conversion");
        self.quantity
            .checked_mul(factor)
            .expect("duration magnitude overflows u64 base units")
    }

    fn signed_millis(&self) -> i64 {
        i64::try_from(self.magnitude_in(TimeUnit::Millisecond))
            .expect("duration magnitude exceeds i64 milliseconds")
    }

    fn signed_days(&self) -> i64 {
        i64::try_from(self.magnitude_in(TimeUnit::Day))
            .expect("duration magnitude exceeds i64 days")
    }

    fn signed_months(&self) -> i64 {
        let per_unit = match self.unit {
            TimeUnit::Month => 1,
            TimeUnit::Quarter => 3,
            TimeUnit::Year => 12,
            _ => unreachable!("calendar-field arithmetic applies to month-and-above units only"),
        };
        let months = self
            .quantity
            .checked_mul(per_unit)
            .expect("month magnitude overflows u64");
        i64::try_from(months).expect("month magnitude exceeds i64")
    }

    fn calendar_months(&self) -> chrono::Months {
        chrono::Months::new(
            u32::try_from(self.signed_months()).expect("month offset out of supported range"),
        )
    }
}

impl PartialEq for Duration {
    /// Equal iff the units are mutually convertible and the base-unit
    /// magnitudes are equal. Durations of non-convertible units are
    /// unrelated; error-aware callers use
    /// [`checked_cmp`](Self::checked_cmp).
    fn eq(&self, other: &Self) -> bool {
        matches!(self.checked_cmp(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Duration {
    /// Ordered by base-unit magnitude within a convertibility group;
    /// `None` across groups.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(other).ok()
    }
}

impl fmt::Display for Duration {
    /// Renders like [`to_normalized_string`](Self::to_normalized_string)
    /// but without the week granularity, so "9 days" stays "9 days".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.unit.descending_units_for_display()))
    }
}

/// The error type for duration arithmetic and comparison.
///
/// These are programmer-input errors, not transient conditions: callers
/// validate unit convertibility and non-negativity up front, or propagate
/// the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    /// An operation combined two units from disjoint convertibility groups.
    NotConvertible {
        /// The unit of the left-hand operand.
        lhs: TimeUnit,
        /// The unit of the right-hand operand.
        rhs: TimeUnit,
    },
    /// A subtraction would have produced a negative duration.
    NegativeResult,
    /// A division used a zero-length divisor.
    DivisionByZero,
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConvertible { lhs, rhs } => {
                write!(f, "time unit '{lhs}' is not convertible to '{rhs}'")
            }
            Self::NegativeResult => {
                write!(f, "duration subtraction would produce a negative result")
            }
            Self::DivisionByZero => write!(f, "cannot divide by a zero-length duration"),
        }
    }
}

impl std::error::Error for DurationError {}

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

//! # Tempora Time
//!
//! **Domain value types for points and spans of time.**
//!
//! This crate builds the time domain on top of the generic interval algebra
//! in `tempora-core`: multi-granularity durations with unit-aware
//! arithmetic, calendar dates and time points as ordered values, calendar
//! intervals, and business-day calendar logic.
//!
//! ## Modules
//!
//! - `unit`: The `TimeUnit` granularities and their convertibility groups.
//!   Sub-day units convert to milliseconds, day-and-above units convert to
//!   days, and `day`/`week` bridge the two groups.
//! - `duration`: `Duration`, a non-negative (quantity, unit) span with
//!   checked arithmetic, exact rational division, normalization, and
//!   calendar-aware date/time-point shifting.
//! - `date`: `CalendarDate`, a day-granularity proleptic-Gregorian date.
//! - `point`: `TimePoint`, an absolute instant in milliseconds since the
//!   Unix epoch.
//! - `calendar_interval`: `CalendarInterval`, a bounded inclusive span of
//!   calendar dates with a lazy day iterator.
//! - `business`: `BusinessCalendar`, a holiday set plus the fixed
//!   Saturday/Sunday weekend rule.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail loud**: operations across non-convertible units return errors
//!     instead of silently truncating or comparing incomparable spans.
//! 2.  **Value semantics**: every type is an immutable value; the only
//!     mutable containers (the interval map and the holiday set) are
//!     mutated through explicit single-writer insertion calls.
//! 3.  **Calendar honesty**: months and years have variable lengths, so
//!     shifting dates by them uses calendar-field arithmetic, never a fixed
//!     millisecond delta.

pub mod business;
pub mod calendar_interval;
pub mod date;
pub mod duration;
pub mod point;
pub mod unit;

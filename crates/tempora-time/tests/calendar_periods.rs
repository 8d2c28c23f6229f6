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

//! End-to-end scenarios combining calendar dates, durations, business-day
//! rules, and interval maps.

use tempora_core::interval::Interval;
use tempora_core::map::IntervalMap;
use tempora_time::business::BusinessCalendar;
use tempora_time::calendar_interval::CalendarInterval;
use tempora_time::date::CalendarDate;
use tempora_time::duration::Duration;

/// Quarterly billing periods keyed by calendar date, with rate lookup.
#[test]
fn test_quarterly_periods_in_interval_map() {
    let mut rates: IntervalMap<CalendarDate, &str> = IntervalMap::new();
    let year_start = CalendarDate::new(2004, 1, 1);

    let mut period_start = year_start;
    for rate in ["q1", "q2", "q3", "q4"] {
        let next_start = Duration::quarters(1).added_to_date(period_start);
        // Half-open periods abut without overlapping.
        let key = Interval::over(period_start, true, next_start, false);
        rates.put(key, rate).unwrap();
        period_start = next_start;
    }

    assert_eq!(rates.get(&CalendarDate::new(2004, 1, 1)), Some(&"q1"));
    assert_eq!(rates.get(&CalendarDate::new(2004, 5, 15)), Some(&"q2"));
    assert_eq!(rates.get(&period_start.previous_day()), Some(&"q4"));
    assert_eq!(rates.get(&period_start), None);
}

/// Overlapping period registration is rejected and the map stays intact.
#[test]
fn test_overlapping_period_rejected() {
    let mut map: IntervalMap<CalendarDate, u32> = IntervalMap::new();
    let january = CalendarInterval::inclusive(
        CalendarDate::new(2004, 1, 1),
        CalendarDate::new(2004, 1, 31),
    );
    map.put(january.as_interval(), 1).unwrap();

    let mid_january = CalendarInterval::inclusive(
        CalendarDate::new(2004, 1, 15),
        CalendarDate::new(2004, 2, 15),
    );
    let err = map.put(mid_january.as_interval(), 2).unwrap_err();
    assert_eq!(*err.value(), 2);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&CalendarDate::new(2004, 1, 20)), Some(&1));
}

/// A payment schedule: a month-long span shifted by business-day rules.
#[test]
fn test_settlement_date_rolls_off_weekend() {
    let calendar = BusinessCalendar::new();
    let trade_date = CalendarDate::new(2004, 1, 9); // Friday

    // One month from the trade date lands on Monday 2004-02-09.
    let nominal = Duration::months(1).added_to_date(trade_date);
    assert_eq!(nominal, CalendarDate::new(2004, 2, 9));
    assert_eq!(calendar.nearest_business_day(nominal), Some(nominal));

    // One week from Friday lands on the next Friday; two days later is a
    // Sunday and rolls to Monday.
    let weekend = Duration::days(2).added_to_date(Duration::weeks(1).added_to_date(trade_date));
    assert_eq!(weekend, CalendarDate::new(2004, 1, 18));
    assert_eq!(
        calendar.nearest_business_day(weekend),
        Some(CalendarDate::new(2004, 1, 19))
    );
}

/// Duration arithmetic feeding calendar intervals end to end.
#[test]
fn test_duration_span_and_business_count() {
    let mut calendar = BusinessCalendar::new();
    calendar.add_holiday(CalendarDate::new(2004, 1, 1));

    let span = Duration::weeks(1).starting_from(CalendarDate::new(2003, 12, 29)); // Monday
    assert_eq!(span.end(), CalendarDate::new(2004, 1, 5));
    assert_eq!(span.day_count(), 8);

    // Mon 29, Tue 30, Wed 31, Fri 2, Mon 5; New Year's Day and the
    // weekend drop out.
    assert_eq!(calendar.elapsed_business_days(&span), 5);
}

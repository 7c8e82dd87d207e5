//! Signed calendar-day difference.

use chrono::NaiveDate;

/// Signed count of calendar days from `a` to `b`, i.e. `b - a`.
///
/// Positive when `b` is after `a`, negative when before, zero for equal
/// dates. Time-of-day and timezones play no part; both operands are plain
/// calendar dates.
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

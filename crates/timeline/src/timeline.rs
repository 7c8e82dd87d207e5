//! Relationship timeline: start date plus optional next meeting.

use chrono::NaiveDate;

use crate::arithmetic::day_difference;
use crate::countdown::MeetCountdown;

/// The two configured dates of the relationship.
///
/// `start <= today` is expected but deliberately not enforced: a start date
/// in the future yields a negative days-together count, which is carried
/// through to the rendered page as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    start: NaiveDate,
    next_meet: Option<NaiveDate>,
}

impl Timeline {
    /// Creates a timeline from the start date and an optional meeting date.
    pub fn new(start: NaiveDate, next_meet: Option<NaiveDate>) -> Self {
        Self { start, next_meet }
    }

    /// Returns the relationship start date.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the next planned meeting date, if configured.
    pub fn next_meet(self) -> Option<NaiveDate> {
        self.next_meet
    }

    /// Signed days from the start date up to `today`.
    pub fn days_together(self, today: NaiveDate) -> i64 {
        day_difference(self.start, today)
    }

    /// Countdown status of the next meeting relative to `today`.
    pub fn countdown(self, today: NaiveDate) -> MeetCountdown {
        MeetCountdown::from_dates(today, self.next_meet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_together_counts_from_start() {
        let t = Timeline::new(date(2025, 2, 28), None);
        assert_eq!(t.days_together(date(2025, 3, 10)), 10);
    }

    #[test]
    fn future_start_goes_negative() {
        // Not validated: displayed as-is.
        let t = Timeline::new(date(2030, 1, 1), None);
        assert!(t.days_together(date(2025, 6, 1)) < 0);
    }

    #[test]
    fn countdown_delegates() {
        let today = date(2025, 6, 1);
        let t = Timeline::new(date(2025, 2, 28), Some(date(2025, 7, 1)));
        assert_eq!(t.countdown(today), MeetCountdown::Until(30));
    }

    #[test]
    fn accessors() {
        let t = Timeline::new(date(2025, 2, 28), Some(date(2026, 2, 27)));
        assert_eq!(t.start(), date(2025, 2, 28));
        assert_eq!(t.next_meet(), Some(date(2026, 2, 27)));
    }
}

//! Countdown to the next planned meeting.

use chrono::NaiveDate;

use crate::arithmetic::day_difference;

/// Status of the next planned meeting relative to a given "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetCountdown {
    /// No meeting date has been configured.
    Unset,
    /// The meeting is `days` calendar days away. A meeting today is
    /// `Until(0)`, not a separate state.
    Until(i64),
    /// The planned date lies `days` calendar days in the past (absolute
    /// value, always positive).
    SincePlanned(i64),
}

impl MeetCountdown {
    /// Derives the countdown from `today` and an optional meeting date.
    pub fn from_dates(today: NaiveDate, next_meet: Option<NaiveDate>) -> Self {
        match next_meet {
            None => Self::Unset,
            Some(meet) => {
                let diff = day_difference(today, meet);
                if diff >= 0 {
                    Self::Until(diff)
                } else {
                    Self::SincePlanned(diff.abs())
                }
            }
        }
    }
}

//! # eros-timeline
//!
//! Signed calendar-day arithmetic over `chrono::NaiveDate` and the derived
//! relationship timeline: days together since a start date, and the countdown
//! to an optional next meeting.
//!
//! Dates are date-only, proleptic Gregorian, with no timezone awareness.
//! "Today" is always passed in by the caller, never resolved here, so every
//! function in this crate is pure.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use eros_timeline::{MeetCountdown, Timeline, day_difference};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
//! let meet = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!
//! let timeline = Timeline::new(start, Some(meet));
//! assert_eq!(timeline.days_together(today), 93);
//! assert_eq!(timeline.countdown(today), MeetCountdown::Until(271));
//!
//! assert_eq!(day_difference(meet, start), -364);
//! ```

mod arithmetic;
mod countdown;
mod timeline;

pub use arithmetic::day_difference;
pub use countdown::MeetCountdown;
pub use timeline::Timeline;

//! Render context: everything one render pass needs, computed up front.

use chrono::NaiveDate;
use eros_geo::GeoPoint;
use eros_timeline::MeetCountdown;

/// Ephemeral aggregate of the computed scalars and static configuration that
/// flow into a single page render. Built once per run and discarded.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Display name for the first party.
    pub you_name: String,
    /// Display name for the second party.
    pub her_name: String,
    /// Location of the first party.
    pub you: GeoPoint,
    /// Location of the second party.
    pub her: GeoPoint,
    /// Great-circle distance between the two points, kilometres.
    pub distance_km: f64,
    /// Signed days from the relationship start to `today`.
    pub days_together: i64,
    /// Countdown status of the next planned meeting.
    pub countdown: MeetCountdown,
    /// Freeform note shown in its own card. Newlines are preserved by the
    /// page styling.
    pub note: String,
    /// The date the page is generated for, shown in the subtitle.
    pub today: NaiveDate,
}

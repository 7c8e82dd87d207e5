//! Literal configuration, edited directly in source before a run.
//!
//! There is deliberately no config file: this is a one-shot personal
//! generator, and its entire configuration surface is the handful of
//! constants below.

use chrono::NaiveDate;
use eros_geo::GeoPoint;
use eros_timeline::Timeline;

/// Immutable run configuration, constructed once at startup and passed by
/// reference into the computation and rendering code.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Your display name.
    pub you_name: String,
    /// Her display name.
    pub her_name: String,
    /// Your location.
    pub you: GeoPoint,
    /// Her location.
    pub her: GeoPoint,
    /// Relationship start date and optional next meeting date.
    pub timeline: Timeline,
    /// Freeform note shown on the page. Newlines are preserved.
    pub note: String,
}

impl DashboardConfig {
    /// The configuration baked into this build.
    ///
    /// Edit the values here (and only here), then rerun.
    pub fn literal() -> Self {
        Self {
            you_name: "Jakob".to_string(),
            her_name: "❤️".to_string(),
            you: GeoPoint::new("You (Aarhus / Denmark)", 56.1632, 10.1690),
            her: GeoPoint::new("Her (Venice / Italy)", 45.4375, 12.335833),
            timeline: Timeline::new(
                // Both literals are valid calendar dates by inspection.
                NaiveDate::from_ymd_opt(2025, 2, 28).expect("valid literal start date"),
                Some(NaiveDate::from_ymd_opt(2026, 2, 27).expect("valid literal meet date")),
            ),
            note: "Distance is just a number.\n\
                   What matters is that I choose you — every day."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_config_is_well_formed() {
        let cfg = DashboardConfig::literal();
        assert!(!cfg.you_name.is_empty());
        assert!(!cfg.her_name.is_empty());
        assert!(cfg.timeline.start() < cfg.timeline.next_meet().unwrap());
    }

    #[test]
    fn literal_coordinates_in_range() {
        let cfg = DashboardConfig::literal();
        for p in [&cfg.you, &cfg.her] {
            assert!((-90.0..=90.0).contains(&p.lat()));
            assert!((-180.0..=180.0).contains(&p.lon()));
        }
    }
}

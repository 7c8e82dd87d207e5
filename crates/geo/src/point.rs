//! Labelled geographic point.

/// A labelled point on the globe, in decimal degrees.
///
/// Coordinates are not range-checked. A latitude outside `[-90, 90]` or a
/// longitude outside `[-180, 180]` produces mathematically defined but
/// geographically meaningless distances rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    label: String,
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a new point from a display label and decimal-degree coordinates.
    pub fn new(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lon,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = GeoPoint::new("Aarhus", 56.1632, 10.1690);
        assert_eq!(p.label(), "Aarhus");
        assert_eq!(p.lat(), 56.1632);
        assert_eq!(p.lon(), 10.1690);
    }

    #[test]
    fn label_from_string() {
        let p = GeoPoint::new(String::from("Venice"), 45.4375, 12.335833);
        assert_eq!(p.label(), "Venice");
    }

    #[test]
    fn out_of_range_coordinates_accepted() {
        // No validation is performed on construction.
        let p = GeoPoint::new("nowhere", 123.0, 456.0);
        assert_eq!(p.lat(), 123.0);
        assert_eq!(p.lon(), 456.0);
    }

    #[test]
    fn clone_and_eq() {
        let a = GeoPoint::new("x", 1.0, 2.0);
        let b = a.clone();
        assert_eq!(a, b);
    }
}

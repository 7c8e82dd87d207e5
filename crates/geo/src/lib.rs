//! # eros-geo
//!
//! Labelled geographic points and great-circle distance via the haversine
//! formula. Pure functions over `f64` degrees; no I/O, no validation.
//!
//! ## Quick Start
//!
//! ```
//! use eros_geo::{GeoPoint, distance_km};
//!
//! let aarhus = GeoPoint::new("You (Aarhus / Denmark)", 56.1632, 10.1690);
//! let venice = GeoPoint::new("Her (Venice / Italy)", 45.4375, 12.335833);
//!
//! let d = distance_km(&aarhus, &venice);
//! assert!(d > 1150.0 && d < 1250.0);
//! ```

mod haversine;
mod point;

pub use haversine::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use point::GeoPoint;

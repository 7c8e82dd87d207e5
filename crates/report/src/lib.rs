//! # eros-report
//!
//! Assembles the dashboard HTML document from pre-computed values: the
//! distance, the day counts, the two points, and a freeform note. The
//! geographic route visualization is a pluggable collaborator behind the
//! [`RouteMap`] trait, so none of the distance or date code couples to a
//! charting library.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `context` | Ephemeral aggregate of everything one render pass needs |
//! | `escape` | Minimal HTML entity escaping |
//! | `map` | `RouteMap` trait and the plotly.js CDN implementation |
//! | `page` | Full-page HTML assembly |
//! | `error` | Error types |

mod context;
mod error;
mod escape;
mod map;
mod page;

pub use context::RenderContext;
pub use error::ReportError;
pub use escape::escape_html;
pub use map::{PlotlyRouteMap, RouteMap};
pub use page::render_page;

//! Pluggable route-map rendering.
//!
//! The page only needs an embeddable HTML fragment showing the two points
//! joined by a line. [`RouteMap`] is that narrow seam; [`PlotlyRouteMap`] is
//! the shipped implementation, drawing two Scattergeo traces with plotly.js
//! loaded from the CDN.

use eros_geo::GeoPoint;
use serde_json::json;

use crate::error::ReportError;

/// Renders a route between labelled points into an embeddable HTML fragment.
pub trait RouteMap {
    /// Produces the fragment for the given points, in order. The fragment is
    /// inserted into the page verbatim, so implementations own their own
    /// escaping.
    fn render_route(&self, route: &[&GeoPoint]) -> Result<String, ReportError>;
}

/// Plotly.js-backed [`RouteMap`]: a connecting-line trace plus a
/// markers-and-labels trace on a natural-earth projection, with the library
/// loaded from the plotly CDN.
#[derive(Debug, Clone)]
pub struct PlotlyRouteMap {
    div_id: String,
}

impl Default for PlotlyRouteMap {
    fn default() -> Self {
        Self {
            div_id: "route-map".to_string(),
        }
    }
}

impl PlotlyRouteMap {
    /// Sets the DOM id of the generated plot container.
    pub fn with_div_id(mut self, id: impl Into<String>) -> Self {
        self.div_id = id.into();
        self
    }

    /// Serializes a JSON value for embedding inside a `<script>` element.
    ///
    /// `<` is emitted as `\u003c` so a hostile label can never close the
    /// script element early.
    fn script_json(value: &serde_json::Value) -> Result<String, ReportError> {
        let raw = serde_json::to_string(value).map_err(|e| ReportError::MapSerialization {
            reason: e.to_string(),
        })?;
        Ok(raw.replace('<', "\\u003c"))
    }
}

impl RouteMap for PlotlyRouteMap {
    fn render_route(&self, route: &[&GeoPoint]) -> Result<String, ReportError> {
        let lons: Vec<f64> = route.iter().map(|p| p.lon()).collect();
        let lats: Vec<f64> = route.iter().map(|p| p.lat()).collect();
        let labels: Vec<&str> = route.iter().map(|p| p.label()).collect();

        let data = json!([
            {
                "type": "scattergeo",
                "lon": lons,
                "lat": lats,
                "mode": "lines",
                "line": { "width": 2 },
                "hoverinfo": "skip"
            },
            {
                "type": "scattergeo",
                "lon": lons,
                "lat": lats,
                "mode": "markers+text",
                "text": labels,
                "textposition": "top center",
                "marker": { "size": 10 }
            }
        ]);

        let layout = json!({
            "margin": { "l": 0, "r": 0, "t": 0, "b": 0 },
            "geo": {
                "projection": { "type": "natural earth" },
                "showland": true,
                "landcolor": "rgb(240,240,240)",
                "showcountries": true
            }
        });

        let data_json = Self::script_json(&data)?;
        let layout_json = Self::script_json(&layout)?;

        Ok(format!(
            concat!(
                "<div id=\"{id}\" class=\"plotly-graph-div\" ",
                "style=\"height:450px; width:100%;\"></div>\n",
                "<script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\" ",
                "charset=\"utf-8\"></script>\n",
                "<script type=\"text/javascript\">\n",
                "Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});\n",
                "</script>"
            ),
            id = self.div_id,
            data = data_json,
            layout = layout_json,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> (GeoPoint, GeoPoint) {
        (
            GeoPoint::new("You (Aarhus / Denmark)", 56.1632, 10.1690),
            GeoPoint::new("Her (Venice / Italy)", 45.4375, 12.335833),
        )
    }

    #[test]
    fn fragment_contains_both_traces() {
        let (you, her) = points();
        let html = PlotlyRouteMap::default()
            .render_route(&[&you, &her])
            .unwrap();
        assert!(html.contains("\"scattergeo\""));
        assert!(html.contains("\"lines\""));
        assert!(html.contains("markers+text"));
    }

    #[test]
    fn fragment_contains_labels_and_coordinates() {
        let (you, her) = points();
        let html = PlotlyRouteMap::default()
            .render_route(&[&you, &her])
            .unwrap();
        assert!(html.contains("You (Aarhus / Denmark)"));
        assert!(html.contains("Her (Venice / Italy)"));
        assert!(html.contains("56.1632"));
        assert!(html.contains("12.335833"));
    }

    #[test]
    fn fragment_loads_plotly_from_cdn() {
        let (you, her) = points();
        let html = PlotlyRouteMap::default()
            .render_route(&[&you, &her])
            .unwrap();
        assert!(html.contains("https://cdn.plot.ly/"));
    }

    #[test]
    fn custom_div_id() {
        let (you, her) = points();
        let html = PlotlyRouteMap::default()
            .with_div_id("love-map")
            .render_route(&[&you, &her])
            .unwrap();
        assert!(html.contains("id=\"love-map\""));
        assert!(html.contains("Plotly.newPlot(\"love-map\""));
    }

    #[test]
    fn hostile_label_cannot_close_script() {
        let evil = GeoPoint::new("</script><script>alert(1)</script>", 0.0, 0.0);
        let other = GeoPoint::new("ok", 1.0, 1.0);
        let html = PlotlyRouteMap::default()
            .render_route(&[&evil, &other])
            .unwrap();
        assert!(!html.contains("</script><script>alert"));
        assert!(html.contains("\\u003c/script"));
    }
}

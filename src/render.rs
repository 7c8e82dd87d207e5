//! Render pipeline: compute, assemble, write, confirm.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use eros_geo::distance_km;
use eros_report::{PlotlyRouteMap, RenderContext, render_page};

use crate::config::DashboardConfig;

/// Run the full one-shot pipeline.
///
/// Computes the distance and day counts from the literal configuration,
/// renders the dashboard page, writes it to `output` (overwriting any prior
/// file), and prints one confirmation line.
pub fn run(output: &Path) -> Result<()> {
    let config = DashboardConfig::literal();
    // Local clock, date-only, resolved exactly once per run.
    let today = Local::now().date_naive();

    let distance = distance_km(&config.you, &config.her);
    info!(distance_km = distance, "computed great-circle distance");

    let days_together = config.timeline.days_together(today);
    let countdown = config.timeline.countdown(today);
    info!(days_together, ?countdown, "computed day deltas");

    let ctx = RenderContext {
        you_name: config.you_name,
        her_name: config.her_name,
        you: config.you,
        her: config.her,
        distance_km: distance,
        days_together,
        countdown,
        note: config.note,
        today,
    };

    let html = render_page(&ctx, &PlotlyRouteMap::default())
        .context("failed to render dashboard page")?;

    std::fs::write(output, &html)
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(path = %output.display(), bytes = html.len(), "dashboard written");

    println!("✅ Generated: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_writes_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dashboard.html");

        run(&out).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("Distance right now"));
        assert!(html.contains("Days since we started"));
        // The shipped config pins both points: 1202.17 km, rounded and
        // grouped in the distance tile.
        assert!(html.contains("1,202 km"));
    }

    #[test]
    fn pipeline_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dashboard.html");
        std::fs::write(&out, "stale").unwrap();

        run(&out).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn pipeline_fails_on_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing-subdir").join("dashboard.html");
        let err = run(&out).unwrap_err();
        assert!(err.to_string().contains("failed to write output"));
    }
}

//! Full-page HTML assembly.

use eros_timeline::MeetCountdown;

use crate::context::RenderContext;
use crate::error::ReportError;
use crate::escape::escape_html;
use crate::map::RouteMap;

/// Inline stylesheet for the dashboard. Cosmetic only.
const STYLE: &str = r#"    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
      background: #0b0f17;
      color: #e9eef7;
      margin: 0;
      padding: 0;
    }
    .wrap {
      max-width: 920px;
      margin: 0 auto;
      padding: 28px 18px 40px;
    }
    .title {
      font-size: 32px;
      letter-spacing: 0.2px;
      margin: 6px 0 8px;
    }
    .subtitle {
      opacity: 0.85;
      margin: 0 0 22px;
      line-height: 1.4;
    }
    .card {
      background: rgba(255,255,255,0.06);
      border: 1px solid rgba(255,255,255,0.10);
      border-radius: 18px;
      padding: 18px;
      box-shadow: 0 10px 30px rgba(0,0,0,0.25);
      margin-bottom: 14px;
    }
    .stats {
      display: grid;
      grid-template-columns: repeat(3, minmax(0, 1fr));
      gap: 12px;
    }
    @media (max-width: 720px) {
      .stats { grid-template-columns: 1fr; }
    }
    .stat {
      background: rgba(0,0,0,0.18);
      border: 1px solid rgba(255,255,255,0.10);
      border-radius: 14px;
      padding: 14px;
    }
    .k {
      font-size: 12px;
      opacity: 0.8;
      margin-bottom: 8px;
      text-transform: uppercase;
      letter-spacing: 0.9px;
    }
    .v {
      font-size: 28px;
      font-weight: 700;
    }
    .note {
      white-space: pre-line;
      font-size: 16px;
      line-height: 1.55;
      opacity: 0.92;
    }
    .footer {
      opacity: 0.65;
      font-size: 12px;
      margin-top: 12px;
    }
    .heart {
      display: inline-block;
      transform: translateY(1px);
    }"#;

/// Renders the complete dashboard document for one context.
///
/// The output is a self-contained UTF-8 HTML page: title, subtitle with both
/// names and the generation date, three stat tiles, the embedded route map,
/// and the note card. All interpolated text is HTML-escaped; the map fragment
/// is inserted verbatim (the [`RouteMap`] implementation owns its escaping).
///
/// Deterministic: the same context renders to byte-identical output.
///
/// # Errors
///
/// Returns [`ReportError`] if the route-map fragment cannot be produced.
pub fn render_page(ctx: &RenderContext, map: &impl RouteMap) -> Result<String, ReportError> {
    let map_fragment = map.render_route(&[&ctx.you, &ctx.her])?;

    let distance_tile = stat_tile(
        "Distance right now",
        &format!("{} km", group_thousands(ctx.distance_km.round() as i64)),
    );
    let days_tile = stat_tile("Days since we started", &ctx.days_together.to_string());
    let meet_tile = match ctx.countdown {
        MeetCountdown::Until(days) => stat_tile("Days until we meet", &days.to_string()),
        MeetCountdown::SincePlanned(days) => {
            stat_tile("Days since we last planned meet date", &days.to_string())
        }
        MeetCountdown::Unset => stat_tile("Next meet", "Soon ✨"),
    };

    Ok(format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Distance doesn't matter</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="wrap">
    <div class="title">Distance doesn't matter <span class="heart">🫶</span></div>
    <div class="subtitle">
      A tiny dashboard for {you} &amp; {her}. Generated on {date}.
    </div>

    <div class="card">
      <div class="stats">
        {distance_tile}
        {days_tile}
        {meet_tile}
      </div>
    </div>

    <div class="card">
      {map_fragment}
    </div>

    <div class="card">
      <div class="note">{note}</div>
      <div class="footer">P.S. If distance is a number, then my love is an invariant.</div>
    </div>
  </div>
</body>
</html>
"#,
        style = STYLE,
        you = escape_html(&ctx.you_name),
        her = escape_html(&ctx.her_name),
        date = ctx.today.format("%Y-%m-%d"),
        distance_tile = distance_tile,
        days_tile = days_tile,
        meet_tile = meet_tile,
        map_fragment = map_fragment,
        note = escape_html(&ctx.note),
    ))
}

/// One labelled stat tile. Both label and value are escaped here.
fn stat_tile(label: &str, value: &str) -> String {
    format!(
        "<div class=\"stat\"><div class=\"k\">{}</div><div class=\"v\">{}</div></div>",
        escape_html(label),
        escape_html(value)
    )
}

/// Formats an integer with comma thousands separators.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

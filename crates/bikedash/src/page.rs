//! Server-side HTML for the dashboard page.
//!
//! The page is rebuilt from scratch on every request. Charts are embedded as
//! inline SVG; the only script is the `onchange` that resubmits the date form.

use axum::http::StatusCode;
use bikedash_common::{escape_html, format_count, format_date};
use bikedash_config::PageConfig;
use bikedash_data::{DashboardData, DateRange};
use bikedash_graphs::RenderedCharts;

const STYLE: &str = r"
body { margin: 0; display: flex; font-family: sans-serif; color: #31333F; }
.sidebar { width: 260px; min-height: 100vh; padding: 24px; background: #F0F2F6; box-sizing: border-box; }
.sidebar img { width: 100%; margin-bottom: 24px; }
.sidebar fieldset { border: none; margin: 0; padding: 0; }
.sidebar legend { font-weight: 600; }
.sidebar label { display: block; margin: 12px 0 4px; font-size: 14px; }
.sidebar input { width: 100%; padding: 6px; box-sizing: border-box; }
main { flex: 1; padding: 24px 48px; }
.metrics { display: flex; gap: 48px; margin-bottom: 24px; }
.metric-label { font-size: 14px; }
.metric-value { font-size: 36px; }
.columns { display: flex; gap: 16px; }
.chart svg { max-width: 100%; height: auto; }
";

/// Renders the full dashboard page.
pub fn render_dashboard(
    page: &PageConfig,
    bounds: &DateRange,
    data: &DashboardData,
    charts: &RenderedCharts,
) -> String {
    let title = escape_html(&page.title);
    let min = format_date(bounds.start);
    let max = format_date(bounds.end);
    let start = format_date(data.range.start);
    let end = format_date(data.range.end);

    let metrics = [
        metric("Total rentals", data.totals.total),
        metric("Registered users", data.totals.registered),
        metric("Casual users", data.totals.casual),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<aside class="sidebar">
<img src="{logo}" alt="Bike sharing logo">
<form method="get" action="/">
<fieldset>
<legend>Timeframe</legend>
<label for="start">Start date</label>
<input type="date" id="start" name="start" value="{start}" min="{min}" max="{max}" onchange="this.form.submit()">
<label for="end">End date</label>
<input type="date" id="end" name="end" value="{end}" min="{min}" max="{max}" onchange="this.form.submit()">
<noscript><button type="submit">Apply</button></noscript>
</fieldset>
</form>
</aside>
<main>
<h1>{title} &#x1F6B2;</h1>
<h2>Daily Rentals</h2>
<div class="metrics">{metrics}</div>
<div class="chart">{daily_total}</div>
<div class="columns">
<div class="chart">{daily_registered}</div>
<div class="chart">{daily_casual}</div>
</div>
<h2>Busy and Quiet Time</h2>
<div class="chart">{by_weekday}</div>
<div class="chart">{by_hour}</div>
<h2>Seasonal Rentals</h2>
<div class="chart">{by_season}</div>
</main>
</body>
</html>
"#,
        logo = escape_html(&page.logo_url),
        daily_total = charts.daily_total,
        daily_registered = charts.daily_registered,
        daily_casual = charts.daily_casual,
        by_weekday = charts.by_weekday,
        by_hour = charts.by_hour,
        by_season = charts.by_season,
    )
}

fn metric(label: &str, value: u64) -> String {
    format!(
        r#"<div class="metric"><div class="metric-label">{label}</div><div class="metric-value">{}</div></div>"#,
        format_count(value)
    )
}

/// Renders a minimal error page.
pub fn render_error(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{heading}</title><style>{STYLE}</style></head>
<body><main>
<h1>{code} {heading}</h1>
<p>{message}</p>
<p><a href="/">Back to the full date range</a></p>
</main></body>
</html>
"#,
        code = status.as_u16(),
        message = escape_html(message),
    )
}

//! Plotters drawing helpers shared by the renderers.

use crate::highlight::bar_tones;
use crate::types::{ChartStyle, ChartText, FONT_FAMILY};
use bikedash_common::{format_date, BucketKind, DashError, Result};
use bikedash_data::BucketMeans;
use chrono::NaiveDate;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use tracing::debug;

const TITLE_FONT_SIZE: u32 = 22;
const MARGIN: u32 = 16;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 60;
const BAR_GAP: u32 = 6;
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: u32 = 3;
const DATE_LABELS: usize = 6;

/// Upper end of the value axis: a little headroom above `max`, never zero.
pub fn value_axis_max(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Draws a daily line chart with a marker on every point.
///
/// Days are spaced evenly by position; labels show the date.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_line_chart(
    text: &ChartText,
    points: &[(NaiveDate, u64)],
    style: &ChartStyle,
) -> Result<String> {
    let x_max = points.len().saturating_sub(1).max(1) as f64;
    let y_max = value_axis_max(points.iter().map(|(_, v)| *v).max().unwrap_or(0) as f64);
    let series: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (i as f64, *v as f64))
        .collect();

    let date_label = |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() > f64::EPSILON || rounded < 0.0 {
            return String::new();
        }
        points
            .get(rounded as usize)
            .map(|(date, _)| format_date(*date))
            .unwrap_or_default()
    };
    let value_label = |y: &f64| format!("{y:.0}");

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, style.size()).into_drawing_area();
        root.fill(&style.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(text.title, (FONT_FAMILY, TITLE_FONT_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_labels(DATE_LABELS)
            .x_label_formatter(&date_label)
            .y_label_formatter(&value_label);
        if let Some(x_desc) = text.x_desc {
            mesh.x_desc(x_desc);
        }
        mesh.y_desc(text.y_desc);
        if !style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        chart.draw_series(LineSeries::new(
            series.iter().copied(),
            style.line.stroke_width(LINE_WIDTH),
        ))?;
        chart.draw_series(
            series
                .iter()
                .map(|point| Circle::new(*point, MARKER_SIZE, style.line.filled())),
        )?;

        root.present()?;
    }

    debug!(title = text.title, points = points.len(), bytes = svg.len(), "rendered line chart");
    Ok(svg)
}

/// Draws one bar per label, each with its own colour.
pub fn render_bar_chart(
    text: &ChartText,
    labels: &[String],
    bars: &[(f64, RGBColor)],
    style: &ChartStyle,
) -> Result<String> {
    if bars.is_empty() || bars.len() != labels.len() {
        return Err(DashError::graph(format!(
            "{}: {} bars for {} labels",
            text.title,
            bars.len(),
            labels.len()
        )));
    }
    let last = u32::try_from(bars.len() - 1)
        .map_err(|e| DashError::graph_with_source("Too many bars", e))?;
    let y_max = value_axis_max(bars.iter().map(|(v, _)| *v).fold(0.0, f64::max));

    let bar_label = |value: &SegmentValue<u32>| match value {
        SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => labels
            .get(*idx as usize)
            .cloned()
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    let value_label = |y: &f64| format!("{y:.0}");

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, style.size()).into_drawing_area();
        root.fill(&style.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(text.title, (FONT_FAMILY, TITLE_FONT_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d((0u32..last).into_segmented(), 0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_labels(labels.len())
            .x_label_formatter(&bar_label)
            .y_label_formatter(&value_label);
        if let Some(x_desc) = text.x_desc {
            mesh.x_desc(x_desc);
        }
        mesh.y_desc(text.y_desc);
        if !style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .margin(BAR_GAP)
                .style_func(|segment: &SegmentValue<u32>, _value: &f64| {
                    let color = match segment {
                        SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => bars
                            .get(*idx as usize)
                            .map_or(style.neutral, |(_, color)| *color),
                        SegmentValue::Last => style.neutral,
                    };
                    color.filled()
                })
                .data((0..=last).zip(bars.iter().map(|(v, _)| *v))),
        )?;

        root.present()?;
    }

    debug!(title = text.title, bars = bars.len(), bytes = svg.len(), "rendered bar chart");
    Ok(svg)
}

/// Draws a weekday or hour means table with max/min highlighting.
pub fn render_bucket_means(
    kind: BucketKind,
    text: &ChartText,
    data: &[BucketMeans],
    style: &ChartStyle,
) -> Result<String> {
    if data.len() != kind.len() {
        return Err(DashError::graph(format!(
            "{}: expected {} {kind} buckets, got {}",
            text.title,
            kind.len(),
            data.len()
        )));
    }

    let values: Vec<Option<f64>> = data
        .iter()
        .map(|bucket| (bucket.rows > 0).then_some(bucket.total_mean))
        .collect();
    let bars: Vec<(f64, RGBColor)> = data
        .iter()
        .zip(bar_tones(&values))
        .map(|(bucket, tone)| (bucket.total_mean, tone.color(style)))
        .collect();

    render_bar_chart(text, &kind.labels(), &bars, style)
}

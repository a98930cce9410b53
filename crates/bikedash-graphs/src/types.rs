//! Resolved drawing parameters shared by every renderer.

use bikedash_common::{DashError, Result};
use bikedash_config::GraphsConfig;
use plotters::style::RGBColor;

/// Font family for captions and axis labels.
pub const FONT_FAMILY: &str = "sans-serif";

/// Caption and axis descriptions of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartText {
    /// Caption above the plot.
    pub title: &'static str,
    /// Horizontal axis description, if any.
    pub x_desc: Option<&'static str>,
    /// Vertical axis description.
    pub y_desc: &'static str,
}

/// Chart dimensions and colours, parsed once from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Bars that are neither highlighted maximum nor minimum.
    pub neutral: RGBColor,
    /// Bars equal to the maximum.
    pub highlight_max: RGBColor,
    /// Bars equal to the minimum.
    pub highlight_min: RGBColor,
    /// Line series and their markers.
    pub line: RGBColor,
    /// Chart background.
    pub background: RGBColor,
}

impl ChartStyle {
    /// Resolves the configured `#RRGGBB` strings.
    pub fn from_config(config: &GraphsConfig) -> Result<Self> {
        let colors = &config.styling.colors;
        Ok(Self {
            width: config.width,
            height: config.height,
            enable_grid: config.styling.enable_grid,
            neutral: parse_hex_color(&colors.neutral)?,
            highlight_max: parse_hex_color(&colors.highlight_max)?,
            highlight_min: parse_hex_color(&colors.highlight_min)?,
            line: parse_hex_color(&colors.line)?,
            background: parse_hex_color(&colors.background)?,
        })
    }

    /// `(width, height)` as the backends take it.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Same style at a different size.
    #[must_use]
    pub const fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}

/// Parses a `#RRGGBB` string.
pub fn parse_hex_color(value: &str) -> Result<RGBColor> {
    let invalid = || DashError::graph(format!("'{value}' is not a #RRGGBB color"));

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

//! Graph renderer trait definitions for polymorphic graph types.

use crate::types::ChartStyle;
use async_trait::async_trait;
use bikedash_common::Result;

/// Trait for graph renderers that turn an aggregate table into an SVG chart.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// The aggregate table this renderer expects.
    type Data: ?Sized + Sync;

    /// Renders the chart as a standalone SVG document.
    async fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<String>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}

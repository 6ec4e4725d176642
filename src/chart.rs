//! Chart adapter
//!
//! Five chart instances live behind [`ChartHandle`]. In the browser a handle
//! wraps a Chart.js object; elsewhere [`MemoryChart`] keeps the series in
//! memory. Visual style is fixed here and never changes at runtime.

use serde_json::{Value, json};

use crate::error::{DashboardError, Result};
use crate::types::Chain;

const TEXT_DIM: &str = "#a0a0a0";
const GRID: &str = "#2a2d3a";
const TOOLTIP_BG: &str = "rgba(26, 29, 38, 0.95)";

/// Global Chart.js defaults applied once before any chart is built
pub const DEFAULT_TEXT_COLOR: &str = TEXT_DIM;
pub const DEFAULT_BORDER_COLOR: &str = GRID;

/// The five dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Price,
    Tvl,
    ChainShare,
    Revenue,
    Buyback,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Price,
        ChartKind::Tvl,
        ChartKind::ChainShare,
        ChartKind::Revenue,
        ChartKind::Buyback,
    ];

    /// Id of the `<canvas>` the chart draws into
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Price => "priceChart",
            ChartKind::Tvl => "tvlChart",
            ChartKind::ChainShare => "chainChart",
            ChartKind::Revenue => "revenueChart",
            ChartKind::Buyback => "buybackChart",
        }
    }

    /// Chart.js chart type
    pub fn chart_type(self) -> &'static str {
        match self {
            ChartKind::Price | ChartKind::Tvl => "line",
            ChartKind::ChainShare => "pie",
            ChartKind::Revenue | ChartKind::Buyback => "bar",
        }
    }

    /// Prefix used on y-axis ticks and tooltips
    pub fn value_prefix(self) -> Option<&'static str> {
        match self {
            ChartKind::ChainShare => None,
            _ => Some("$"),
        }
    }

    /// Complete Chart.js constructor config, without JS callbacks.
    pub fn config(self) -> Value {
        match self {
            ChartKind::Price => line_config("Price (USD)", "#00d4ff", "rgba(0, 212, 255, 0.1)"),
            ChartKind::Tvl => line_config("TVL", "#7b61ff", "rgba(123, 97, 255, 0.1)"),
            ChartKind::ChainShare => json!({
                "type": self.chart_type(),
                "data": {
                    "labels": Chain::ALL.map(Chain::label),
                    "datasets": [{
                        "data": [0, 0, 0],
                        "backgroundColor": ["#1d4ed8", "#7b61ff", "#627eea"]
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "plugins": {
                        "legend": {
                            "position": "bottom",
                            "labels": { "padding": 16, "usePointStyle": true }
                        },
                        "tooltip": tooltip()
                    }
                }
            }),
            ChartKind::Revenue => bar_config("Revenue", "#00ff88"),
            ChartKind::Buyback => bar_config("Buybacks", "#00d4ff"),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canvas_id())
    }
}

fn tooltip() -> Value {
    json!({
        "backgroundColor": TOOLTIP_BG,
        "titleColor": "#fff",
        "bodyColor": TEXT_DIM,
        "borderColor": GRID,
        "borderWidth": 1,
        "padding": 12
    })
}

fn axes() -> Value {
    json!({
        "x": { "grid": { "display": false } },
        "y": { "grid": { "color": GRID }, "ticks": {} }
    })
}

fn line_config(label: &str, border: &str, fill: &str) -> Value {
    let mut tooltip = tooltip();
    tooltip["mode"] = json!("index");
    tooltip["intersect"] = json!(false);
    tooltip["displayColors"] = json!(false);

    json!({
        "type": "line",
        "data": {
            "labels": [],
            "datasets": [{
                "label": label,
                "data": [],
                "borderColor": border,
                "backgroundColor": fill,
                "fill": true,
                "tension": 0.4
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false }, "tooltip": tooltip },
            "scales": axes()
        }
    })
}

fn bar_config(label: &str, color: &str) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": [],
            "datasets": [{
                "label": label,
                "data": [],
                "backgroundColor": color,
                "borderRadius": 6
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false }, "tooltip": tooltip() },
            "scales": axes()
        }
    })
}

/// Range picked with the period buttons (`data-period` on `.chart-btn`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPeriod {
    Day,
    Week,
    Month,
    Quarter,
}

impl ChartPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartPeriod::Day => "24h",
            ChartPeriod::Week => "7d",
            ChartPeriod::Month => "30d",
            ChartPeriod::Quarter => "90d",
        }
    }
}

impl std::str::FromStr for ChartPeriod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "1d" => Ok(ChartPeriod::Day),
            "7d" => Ok(ChartPeriod::Week),
            "30d" => Ok(ChartPeriod::Month),
            "90d" => Ok(ChartPeriod::Quarter),
            other => Err(DashboardError::Dom(format!("unknown chart period `{other}`"))),
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One live chart instance
pub trait ChartHandle {
    /// Replace the x-axis labels and the first dataset's values, then redraw.
    fn set_series(&mut self, labels: &[String], values: &[f64]) -> Result<()>;

    /// Replace only the first dataset's values, then redraw.
    fn set_values(&mut self, values: &[f64]) -> Result<()>;
}

/// In-memory chart, used headless and in tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub redraws: usize,
}

impl MemoryChart {
    /// Empty chart seeded the way [`ChartKind::config`] seeds it
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::ChainShare => Self {
                labels: Chain::ALL.map(|c| c.label().to_string()).to_vec(),
                values: vec![0.0; 3],
                redraws: 0,
            },
            _ => Self::default(),
        }
    }
}

impl ChartHandle for MemoryChart {
    fn set_series(&mut self, labels: &[String], values: &[f64]) -> Result<()> {
        self.labels = labels.to_vec();
        self.values = values.to_vec();
        self.redraws += 1;
        Ok(())
    }

    fn set_values(&mut self, values: &[f64]) -> Result<()> {
        self.values = values.to_vec();
        self.redraws += 1;
        Ok(())
    }
}

/// The five named chart instances
#[derive(Debug)]
pub struct Charts<H> {
    pub price: H,
    pub tvl: H,
    pub chain_share: H,
    pub revenue: H,
    pub buyback: H,
}

impl<H: ChartHandle> Charts<H> {
    /// Build every chart with `make`, in [`ChartKind::ALL`] order.
    pub fn build<F>(mut make: F) -> Result<Self>
    where
        F: FnMut(ChartKind) -> Result<H>,
    {
        Ok(Self {
            price: make(ChartKind::Price)?,
            tvl: make(ChartKind::Tvl)?,
            chain_share: make(ChartKind::ChainShare)?,
            revenue: make(ChartKind::Revenue)?,
            buyback: make(ChartKind::Buyback)?,
        })
    }

    pub fn get(&self, kind: ChartKind) -> &H {
        match kind {
            ChartKind::Price => &self.price,
            ChartKind::Tvl => &self.tvl,
            ChartKind::ChainShare => &self.chain_share,
            ChartKind::Revenue => &self.revenue,
            ChartKind::Buyback => &self.buyback,
        }
    }

    fn get_mut(&mut self, kind: ChartKind) -> &mut H {
        match kind {
            ChartKind::Price => &mut self.price,
            ChartKind::Tvl => &mut self.tvl,
            ChartKind::ChainShare => &mut self.chain_share,
            ChartKind::Revenue => &mut self.revenue,
            ChartKind::Buyback => &mut self.buyback,
        }
    }

    /// Replace a series chart's labels and values.
    ///
    /// Lengths are passed through as-is; the chart pairs them by index.
    pub fn update_series(&mut self, kind: ChartKind, labels: &[String], values: &[f64]) -> Result<()> {
        self.get_mut(kind).set_series(labels, values)
    }

    /// Replace the chain-share slices, ordered `[Sonic, Plasma, Ethereum]`.
    pub fn update_shares(&mut self, shares: [f64; 3]) -> Result<()> {
        self.chain_share.set_values(&shares)
    }
}

impl Charts<MemoryChart> {
    /// Headless chart set
    pub fn in_memory() -> Self {
        Self {
            price: MemoryChart::for_kind(ChartKind::Price),
            tvl: MemoryChart::for_kind(ChartKind::Tvl),
            chain_share: MemoryChart::for_kind(ChartKind::ChainShare),
            revenue: MemoryChart::for_kind(ChartKind::Revenue),
            buyback: MemoryChart::for_kind(ChartKind::Buyback),
        }
    }
}

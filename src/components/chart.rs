//! Chart Inputs
//!
//! Line and pie chart series. Drawing is left to the renderer; this module
//! only decides what the series contain.

use serde::Serialize;

use crate::api::dto::{as_number, PortfolioOverview};

/// Segment colors, cycled by index
pub const PALETTE: [&str; 7] = [
    "#00B894", // Green
    "#0984E3", // Blue
    "#6C5CE7", // Purple
    "#E17055", // Orange
    "#D63031", // Red
    "#fdcb6e", // Yellow
    "#55efc4", // Mint
];

/// Allocation shown when the portfolio has none
pub const DEFAULT_ALLOCATION: [(&str, f64); 2] = [("Crypto", 2.0), ("Stocks", 3.0)];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub points: Vec<ChartPoint>,
    /// Series is fixed demo data, not fetched
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegment {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub segments: Vec<PieSegment>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }
}

/// Weekly "Market Pulse" series.
///
/// Placeholder data: the backend has no feed for it yet, so the chart is
/// labelled as a demo instead of being wired to an unrelated endpoint.
pub fn market_pulse_demo() -> LineChart {
    let points = [
        ("Mon", 400.0),
        ("Tue", 300.0),
        ("Wed", 500.0),
        ("Thu", 450.0),
        ("Fri", 520.0),
    ]
    .into_iter()
    .map(|(name, value)| ChartPoint {
        name: name.to_string(),
        value,
    })
    .collect();

    LineChart {
        points,
        placeholder: true,
    }
}

/// Portfolio allocation as pie segments.
///
/// Absent allocation falls back to [`DEFAULT_ALLOCATION`]. A present but
/// empty allocation yields no segments. Non-numeric or zero weights count
/// as 1.
pub fn allocation_chart(overview: &PortfolioOverview) -> PieChart {
    let weights: Vec<(String, f64)> = match &overview.allocation {
        Some(allocation) => allocation
            .iter()
            .map(|(name, value)| {
                let weight = as_number(value)
                    .filter(|n| *n != 0.0 && !n.is_nan())
                    .unwrap_or(1.0);
                (name.clone(), weight)
            })
            .collect(),
        None => DEFAULT_ALLOCATION
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect(),
    };

    let segments = weights
        .into_iter()
        .enumerate()
        .map(|(idx, (name, value))| PieSegment {
            name,
            value,
            color: PALETTE[idx % PALETTE.len()],
        })
        .collect();

    PieChart { segments }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One named series of per-spoke values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Chart-ready radar data: one label per spoke, one series per radial
/// axis, values aligned with the label order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarDataset {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

impl RadarDataset {
    pub fn empty() -> Self {
        RadarDataset {
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendSeries {
    pub label: String,
    pub data: Vec<TrendPoint>,
    pub fill: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendChart {
    pub datasets: Vec<TrendSeries>,
}

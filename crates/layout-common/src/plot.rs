//! Plot payloads for the client plotting widget.

use serde::{Deserialize, Serialize};

/// Line styling for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub dash: String,
    pub width: u32,
    pub color: String,
}

/// One data series (trace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub name: String,
    pub mode: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub line: LineStyle,
}

impl PlotSeries {
    /// A line series over categorical x values.
    pub fn line<X, S>(name: impl Into<String>, x: X, y: Vec<f64>, line: LineStyle) -> Self
    where
        X: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            mode: "lines".to_string(),
            x: x.into_iter().map(Into::into).collect(),
            y,
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub title: String,
}

/// Layout options for the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
}

impl PlotLayout {
    pub fn titled(x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            xaxis: AxisTitle {
                title: x_title.into(),
            },
            yaxis: AxisTitle {
                title: y_title.into(),
            },
        }
    }
}

/// Title, series and layout for one plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub title: String,
    pub data: Vec<PlotSeries>,
    pub layout: PlotLayout,
}

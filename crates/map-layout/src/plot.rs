//! Demo plot served for clicked features.

use layout_common::plot::LineStyle;
use layout_common::{PlotData, PlotLayout, PlotSeries};
use tracing::debug;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const HIGH_2000: [f64; 12] = [32.5, 37.6, 49.9, 53.0, 69.1, 75.4, 76.5, 76.6, 70.7, 60.6, 45.1, 29.3];
const LOW_2000: [f64; 12] = [13.8, 22.3, 32.5, 37.2, 49.9, 56.1, 57.7, 58.3, 51.2, 42.8, 31.6, 15.9];
const HIGH_2007: [f64; 12] = [36.5, 26.6, 43.6, 52.3, 71.5, 81.4, 80.5, 82.2, 76.0, 67.3, 46.1, 35.0];
const LOW_2007: [f64; 12] = [23.6, 14.0, 27.0, 36.8, 47.6, 57.7, 58.9, 61.2, 53.3, 48.5, 31.0, 23.6];
const HIGH_2014: [f64; 12] = [28.8, 28.5, 37.0, 56.8, 69.7, 79.7, 78.5, 77.8, 74.1, 62.6, 45.3, 39.9];
const LOW_2014: [f64; 12] = [12.7, 14.3, 18.6, 35.5, 49.9, 58.0, 60.0, 58.6, 51.7, 45.2, 32.2, 29.1];

/// Plot data for a feature of a layer.
///
/// The data is static: every layer and feature gets the same monthly
/// temperature chart.
pub fn plot_for_layer_feature(layer_name: &str, feature_id: &str) -> PlotData {
    debug!(layer = layer_name, feature = feature_id, "Building plot data");

    // (year, dash, highs, lows), newest first
    let years: [(&str, &str, &[f64; 12], &[f64; 12]); 3] = [
        ("2014", "solid", &HIGH_2014, &LOW_2014),
        ("2007", "dash", &HIGH_2007, &LOW_2007),
        ("2000", "dot", &HIGH_2000, &LOW_2000),
    ];

    let data = years
        .iter()
        .flat_map(|(year, dash, highs, lows)| {
            [
                series(format!("High {}", year), highs, dash, "red"),
                series(format!("Low {}", year), lows, dash, "blue"),
            ]
        })
        .collect();

    PlotData {
        title: "Average High and Low Temperatures".to_string(),
        data,
        layout: PlotLayout::titled("Month", "Temperature (degrees F)"),
    }
}

fn series(name: String, values: &[f64; 12], dash: &str, color: &str) -> PlotSeries {
    PlotSeries::line(
        name,
        MONTHS,
        values.to_vec(),
        LineStyle {
            dash: dash.to_string(),
            width: 4,
            color: color.to_string(),
        },
    )
}

//! Vector style maps in the nested OpenLayers object form.
//!
//! The client rebuilds `ol.style.*` objects from keys named after their
//! constructors, e.g.
//!
//! ```json
//! {"Polygon": {"ol.style.Style": {
//!     "stroke": {"ol.style.Stroke": {"color": "green", "width": 3}},
//!     "fill": {"ol.style.Fill": {"color": "rgba(0, 255, 0, 0.1)"}}
//! }}}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Style per geometry type ("Polygon", "MultiPolygon", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorStyleMap(BTreeMap<String, StyleSpec>);

impl VectorStyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the style for a geometry type.
    pub fn with_style(mut self, geometry_type: impl Into<String>, style: StyleSpec) -> Self {
        self.0.insert(geometry_type.into(), style);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate every style in the map.
    pub fn validate(&self) -> Result<(), String> {
        for (geometry_type, style) in &self.0 {
            style
                .validate()
                .map_err(|e| format!("{}: {}", geometry_type, e))?;
        }
        Ok(())
    }
}

/// An `ol.style.Style` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    #[serde(rename = "ol.style.Style")]
    pub style: StyleBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSpec {
    #[serde(rename = "ol.style.Stroke")]
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSpec {
    #[serde(rename = "ol.style.Fill")]
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: String,
}

impl StyleSpec {
    /// Outline plus fill, the common polygon style.
    pub fn outlined(
        stroke_color: impl Into<String>,
        stroke_width: u32,
        fill_color: impl Into<String>,
    ) -> Self {
        Self {
            style: StyleBody {
                stroke: Some(StrokeSpec {
                    stroke: Stroke {
                        color: stroke_color.into(),
                        width: stroke_width,
                    },
                }),
                fill: Some(FillSpec {
                    fill: Fill {
                        color: fill_color.into(),
                    },
                }),
            },
        }
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        self.style.stroke.as_ref().map(|s| &s.stroke)
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.style.fill.as_ref().map(|f| &f.fill)
    }

    fn validate(&self) -> Result<(), String> {
        if self.stroke().is_none() && self.fill().is_none() {
            return Err("style has neither stroke nor fill".to_string());
        }
        if let Some(stroke) = self.stroke() {
            if stroke.width == 0 {
                return Err("stroke width must be positive".to_string());
            }
            if stroke.color.trim().is_empty() {
                return Err("stroke color is empty".to_string());
            }
        }
        if let Some(fill) = self.fill() {
            if fill.color.trim().is_empty() {
                return Err("fill color is empty".to_string());
            }
        }
        Ok(())
    }
}

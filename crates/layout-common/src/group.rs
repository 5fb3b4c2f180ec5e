//! Layer groups for the layer-control panel.

use serde::{Deserialize, Serialize};

use crate::LayerDescriptor;

/// How layers inside a group toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerControl {
    /// At most one member layer visible at a time
    Radio,
    /// Members toggle independently
    #[default]
    Checkbox,
}

/// A named group of layers sharing one control mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGroup {
    pub id: String,
    pub display_name: String,
    pub control: LayerControl,
    pub visible: bool,
    pub layers: Vec<LayerDescriptor>,
}

impl LayerGroup {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        control: LayerControl,
        layers: Vec<LayerDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            control,
            visible: true,
            layers,
        }
    }
}

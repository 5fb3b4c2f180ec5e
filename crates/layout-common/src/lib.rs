//! Common types shared by the map layout crates and the showcase service.

pub mod basemap;
pub mod bbox;
pub mod error;
pub mod group;
pub mod layer;
pub mod plot;
pub mod style;

pub use basemap::Basemap;
pub use bbox::BoundingBox;
pub use error::{LayoutError, LayoutResult};
pub use group::{LayerControl, LayerGroup};
pub use layer::{LayerDescriptor, LayerId, LayerSource, ServerType};
pub use plot::{PlotData, PlotLayout, PlotSeries};
pub use style::{StyleSpec, VectorStyleMap};

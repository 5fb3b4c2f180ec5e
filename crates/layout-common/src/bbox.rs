//! Bounding box / map extent type.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in EPSG:4326 degrees.
///
/// Serialized the way OpenLayers expects an extent: `[min_x, min_y, max_x, max_y]`.
/// Corner ordering is not validated; configured extents are echoed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Copy of this box with the corners swapped into ascending order.
    pub fn ordered(&self) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(self.max_x),
            min_y: self.min_y.min(self.max_y),
            max_x: self.min_x.max(self.max_x),
            max_y: self.min_y.max(self.max_y),
        }
    }

    /// Check if a point is contained within this bbox (corner order ignored).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let b = self.ordered();
        x >= b.min_x && x <= b.max_x && y >= b.min_y && y <= b.max_y
    }

    /// The extent as an `[min_x, min_y, max_x, max_y]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

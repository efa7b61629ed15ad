use serde::{Deserialize, Serialize};

/// Width of the standard 16:9 canvas in canvas units (inches).
pub const CANVAS_WIDTH: f64 = 10.0;
/// Height of the standard 16:9 canvas in canvas units (inches).
pub const CANVAS_HEIGHT: f64 = 5.625;

/// The fixed drawing surface of one output page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// An absolute region on the canvas assigned to a node for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        LayoutBox {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Shrinks the box by `inset_x` on the left and right and `inset_y` on the top and bottom.
    /// Sizes never go negative; an over-inset box collapses onto its centre line.
    pub fn inset(&self, inset_x: f64, inset_y: f64) -> LayoutBox {
        let inset_x = inset_x.min(self.width / 2.0).max(0.0);
        let inset_y = inset_y.min(self.height / 2.0).max(0.0);
        LayoutBox {
            x: self.x + inset_x,
            y: self.y + inset_y,
            width: self.width - 2.0 * inset_x,
            height: self.height - 2.0 * inset_y,
        }
    }

    /// Returns true when `other` lies inside this box, allowing `tolerance` for float noise.
    pub fn contains(&self, other: &LayoutBox, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

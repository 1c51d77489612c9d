//! Bevel geometry engine
//!
//! Turns a measured width/height and the fixed band height into the four
//! corner points of the label shape, the closed fill polygon, and the open
//! baseline segment the text visually follows. Geometry is an immutable
//! value recomputed from scratch on every measurement pass, so no point is
//! ever shared or mutated across frames.

use bevel_paint::{Path, Point};

/// Integer pixel point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    pub const ZERO: IPoint = IPoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Integer-truncated midpoint of two points
    pub const fn midpoint(a: IPoint, b: IPoint) -> IPoint {
        IPoint::new((a.x + b.x) / 2, (a.y + b.y) / 2)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f32, self.y as f32)
    }
}

/// Corner points of the bevel label shape for one measured size
///
/// `top_left` stays at the origin, `top_right` sits on the top edge,
/// `right_top` on the right edge, and `right_bottom` at the far corner; the
/// edge from `top_right` to `right_top` is the bevel that cuts the
/// rectangle's top-right corner. `center` is the truncated midpoint of that
/// bevel edge.
///
/// When `band_height` is not small relative to both dimensions, the cut
/// lengths can exceed the opposite edge and the polygon degenerates or
/// self-intersects; that output is kept as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BevelGeometry {
    pub top_left: IPoint,
    pub top_right: IPoint,
    pub right_top: IPoint,
    pub right_bottom: IPoint,
    pub center: IPoint,
}

impl BevelGeometry {
    /// Compute the geometry for a measured size
    ///
    /// Returns `None` unless both dimensions are positive; the zero-size
    /// guard is what keeps the diagonal ratios from dividing by zero.
    pub fn compute(width: i32, height: i32, band_height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }

        let diag = ((width as f64) * (width as f64) + (height as f64) * (height as f64)).sqrt();
        let h_line = (band_height as f64 * diag / height as f64) as i32;
        let v_line = (band_height as f64 * diag / width as f64) as i32;

        let top_right = IPoint::new(h_line, 0);
        let right_top = IPoint::new(width, height - v_line);

        Some(Self {
            top_left: IPoint::ZERO,
            top_right,
            right_top,
            right_bottom: IPoint::new(width, height),
            center: IPoint::midpoint(top_right, right_top),
        })
    }

    /// Closed fill polygon: top_left -> top_right -> right_top -> right_bottom
    pub fn shape_path(&self) -> Path {
        let tl = self.top_left.to_point();
        let tr = self.top_right.to_point();
        let rt = self.right_top.to_point();
        let rb = self.right_bottom.to_point();
        Path::new()
            .move_to(tl.x, tl.y)
            .line_to(tr.x, tr.y)
            .line_to(rt.x, rt.y)
            .line_to(rb.x, rb.y)
            .close()
    }

    /// Open segment from top_right to right_top - the bevel edge
    pub fn baseline_path(&self) -> Path {
        Path::line(self.top_right.to_point(), self.right_top.to_point())
    }

    /// Text rotation angle in degrees
    ///
    /// Taken from the full rectangle's diagonal (`right_bottom`), not the
    /// bevel edge; the two only coincide for a symmetric bevel.
    pub fn rotation_degrees(&self) -> f32 {
        (self.right_bottom.y as f32)
            .atan2(self.right_bottom.x as f32)
            .to_degrees()
    }
}

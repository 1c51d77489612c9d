//! Brushes for filling shapes
//!
//! A fill is either a solid color or an image shader backed by a shared
//! rasterized pixmap. The shader owns its pixmap through an `Arc` so a
//! cached raster can back many draw commands without copying pixels.

use std::sync::Arc;

use crate::color::Color;
use crate::pixmap::Pixmap;

/// How a shader extends beyond its source image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    /// Extend the edge pixels outward
    #[default]
    Clamp,
    /// Repeat the image
    Repeat,
    /// Repeat the image, mirroring at each seam
    Mirror,
}

/// Image-backed fill pattern
#[derive(Clone, Debug)]
pub struct ImageShader {
    pub pixmap: Arc<Pixmap>,
    pub tile_x: TileMode,
    pub tile_y: TileMode,
}

impl ImageShader {
    pub fn new(pixmap: Arc<Pixmap>, tile_x: TileMode, tile_y: TileMode) -> Self {
        Self {
            pixmap,
            tile_x,
            tile_y,
        }
    }

    /// Shader with edge-extending tiling on both axes
    pub fn clamped(pixmap: Arc<Pixmap>) -> Self {
        Self::new(pixmap, TileMode::Clamp, TileMode::Clamp)
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug)]
pub enum Brush {
    Solid(Color),
    Image(ImageShader),
}

impl Brush {
    /// The solid color, if this brush is one
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Brush::Solid(color) => Some(*color),
            Brush::Image(_) => None,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<ImageShader> for Brush {
    fn from(shader: ImageShader) -> Self {
        Brush::Image(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixelFormat;

    #[test]
    fn test_brush_from_color() {
        let brush: Brush = Color::RED.into();
        assert_eq!(brush.solid_color(), Some(Color::RED));
    }

    #[test]
    fn test_clamped_shader_shares_pixmap() {
        let pixmap = Arc::new(Pixmap::new(2, 2, PixelFormat::Rgb565));
        let shader = ImageShader::clamped(pixmap.clone());
        assert_eq!(shader.tile_x, TileMode::Clamp);
        assert_eq!(shader.tile_y, TileMode::Clamp);
        assert!(Arc::ptr_eq(&shader.pixmap, &pixmap));
    }
}

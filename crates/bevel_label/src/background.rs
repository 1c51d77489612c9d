//! Background drawables and rasterization
//!
//! A background is either a flat color or an arbitrary [`Drawable`]. A
//! drawable background is rendered once into an off-screen [`Pixmap`] and
//! wrapped in a clamped image shader; the widget caches that pixmap until
//! the background is replaced.

use std::fmt;
use std::sync::Arc;

use bevel_paint::{Color, PixelFormat, Pixmap};
use tracing::debug;

/// Identifier of a drawable in the host resource system. `0` means none.
pub type ResourceId = u32;

/// Whether a drawable covers every pixel of its bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawableOpacity {
    Opaque,
    Translucent,
}

/// Something that can render itself into a raster target
///
/// The target's dimensions are the drawable's bounds; implementations fill
/// the whole target.
pub trait Drawable {
    /// Intrinsic pixel width, non-positive when the drawable has no
    /// preferred size
    fn intrinsic_width(&self) -> i32 {
        -1
    }

    /// Intrinsic pixel height, non-positive when the drawable has no
    /// preferred size
    fn intrinsic_height(&self) -> i32 {
        -1
    }

    fn opacity(&self) -> DrawableOpacity {
        DrawableOpacity::Translucent
    }

    /// Render into the target once
    fn draw(&self, target: &mut Pixmap);
}

/// Host collaborator resolving resource identifiers to drawables
///
/// Lookup failure semantics belong to the host; an unresolved id simply
/// yields no drawable.
pub trait DrawableResources {
    fn drawable(&self, id: ResourceId) -> Option<Arc<dyn Drawable>>;
}

/// The widget's background
#[derive(Clone)]
pub enum Background {
    /// Flat color, mutated in place when only the color changes
    Flat(Color),
    /// Arbitrary drawable, rasterized lazily on first paint
    Image(Arc<dyn Drawable>),
}

impl Background {
    pub fn is_flat(&self) -> bool {
        matches!(self, Background::Flat(_))
    }
}

impl fmt::Debug for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Flat(color) => f.debug_tuple("Flat").field(color).finish(),
            Background::Image(_) => f.debug_tuple("Image").field(&"dyn Drawable").finish(),
        }
    }
}

/// Rasterize a drawable into a freshly allocated pixmap
///
/// Dimensions come from the drawable's intrinsic size where positive, else
/// from the supplied fallback (the view's current pixel size). The format is
/// RGBA8888 unless the drawable reports itself opaque, in which case the
/// cheaper RGB565 is used. An unmeasured view combined with a sizeless
/// drawable produces an empty pixmap, which the shader fills nothing with.
pub fn rasterize(drawable: &dyn Drawable, fallback_width: i32, fallback_height: i32) -> Pixmap {
    let width = positive_or(drawable.intrinsic_width(), fallback_width);
    let height = positive_or(drawable.intrinsic_height(), fallback_height);
    let format = match drawable.opacity() {
        DrawableOpacity::Opaque => PixelFormat::Rgb565,
        DrawableOpacity::Translucent => PixelFormat::Rgba8888,
    };

    let mut pixmap = Pixmap::new(width, height, format);
    if !pixmap.is_empty() {
        drawable.draw(&mut pixmap);
    }
    debug!(width, height, ?format, "rasterized background drawable");
    pixmap
}

fn positive_or(intrinsic: i32, fallback: i32) -> u32 {
    if intrinsic > 0 {
        intrinsic as u32
    } else {
        fallback.max(0) as u32
    }
}

/// Pixel-backed drawable
///
/// Stretches its source pixels (nearest-neighbor) over whatever bounds it
/// is rasterized into.
#[derive(Clone, Debug)]
pub struct BitmapDrawable {
    source: Pixmap,
    opacity: DrawableOpacity,
}

impl BitmapDrawable {
    pub fn new(source: Pixmap) -> Self {
        let opacity = if source.format().has_alpha() {
            DrawableOpacity::Translucent
        } else {
            DrawableOpacity::Opaque
        };
        Self { source, opacity }
    }

    /// Build from a decoded RGBA image, detecting full opacity from the
    /// alpha channel
    pub fn from_image(image: &image::RgbaImage) -> Self {
        let mut source = Pixmap::new(image.width(), image.height(), PixelFormat::Rgba8888);
        let mut opaque = true;
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a != u8::MAX {
                opaque = false;
            }
            source.put_pixel(
                x,
                y,
                Color::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ),
            );
        }
        let opacity = if opaque {
            DrawableOpacity::Opaque
        } else {
            DrawableOpacity::Translucent
        };
        Self { source, opacity }
    }

    pub fn source(&self) -> &Pixmap {
        &self.source
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_width(&self) -> i32 {
        self.source.width() as i32
    }

    fn intrinsic_height(&self) -> i32 {
        self.source.height() as i32
    }

    fn opacity(&self) -> DrawableOpacity {
        self.opacity
    }

    fn draw(&self, target: &mut Pixmap) {
        if self.source.is_empty() {
            return;
        }
        let (tw, th) = (target.width(), target.height());
        let (sw, sh) = (self.source.width(), self.source.height());
        for ty in 0..th {
            let sy = (ty as u64 * sh as u64 / th as u64) as u32;
            for tx in 0..tw {
                let sx = (tx as u64 * sw as u64 / tw as u64) as u32;
                if let Some(color) = self.source.pixel(sx, sy) {
                    target.put_pixel(tx, ty, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SolidDrawable {
        width: i32,
        height: i32,
        opacity: DrawableOpacity,
        color: Color,
    }

    impl Drawable for SolidDrawable {
        fn intrinsic_width(&self) -> i32 {
            self.width
        }

        fn intrinsic_height(&self) -> i32 {
            self.height
        }

        fn opacity(&self) -> DrawableOpacity {
            self.opacity
        }

        fn draw(&self, target: &mut Pixmap) {
            target.fill(self.color);
        }
    }

    #[test]
    fn test_intrinsic_size_wins_over_fallback() {
        let drawable = SolidDrawable {
            width: 8,
            height: 4,
            opacity: DrawableOpacity::Translucent,
            color: Color::RED,
        };
        let pixmap = rasterize(&drawable, 100, 100);
        assert_eq!((pixmap.width(), pixmap.height()), (8, 4));
        assert_eq!(pixmap.pixel(7, 3), Some(Color::RED));
    }

    #[test]
    fn test_sizeless_drawable_uses_view_size() {
        let drawable = SolidDrawable {
            width: -1,
            height: 0,
            opacity: DrawableOpacity::Translucent,
            color: Color::GREEN,
        };
        let pixmap = rasterize(&drawable, 20, 10);
        assert_eq!((pixmap.width(), pixmap.height()), (20, 10));
    }

    #[test]
    fn test_format_follows_opacity() {
        let opaque = SolidDrawable {
            width: 2,
            height: 2,
            opacity: DrawableOpacity::Opaque,
            color: Color::BLUE,
        };
        let translucent = SolidDrawable {
            opacity: DrawableOpacity::Translucent,
            ..opaque
        };
        assert_eq!(rasterize(&opaque, 0, 0).format(), PixelFormat::Rgb565);
        assert_eq!(rasterize(&translucent, 0, 0).format(), PixelFormat::Rgba8888);
    }

    #[test]
    fn test_unmeasured_view_and_sizeless_drawable() {
        let drawable = SolidDrawable {
            width: -1,
            height: -1,
            opacity: DrawableOpacity::Translucent,
            color: Color::RED,
        };
        let pixmap = rasterize(&drawable, 0, 0);
        assert!(pixmap.is_empty());
    }

    #[test]
    fn test_bitmap_drawable_stretches() {
        let mut source = Pixmap::new(2, 1, PixelFormat::Rgba8888);
        source.put_pixel(0, 0, Color::RED);
        source.put_pixel(1, 0, Color::BLUE);
        let drawable = BitmapDrawable::new(source);

        let mut target = Pixmap::new(4, 2, PixelFormat::Rgba8888);
        drawable.draw(&mut target);
        assert_eq!(target.pixel(0, 0), Some(Color::RED));
        assert_eq!(target.pixel(1, 1), Some(Color::RED));
        assert_eq!(target.pixel(2, 0), Some(Color::BLUE));
        assert_eq!(target.pixel(3, 1), Some(Color::BLUE));
    }

    #[test]
    fn test_from_image_detects_opacity() {
        let opaque = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        assert_eq!(
            BitmapDrawable::from_image(&opaque).opacity(),
            DrawableOpacity::Opaque
        );

        let translucent = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 128]));
        assert_eq!(
            BitmapDrawable::from_image(&translucent).opacity(),
            DrawableOpacity::Translucent
        );
    }
}

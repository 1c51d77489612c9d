//! 2D drawing substrate for the bevel label widget
//!
//! This crate provides the minimal drawing layer the widget paints through:
//!
//! - **Primitives**: points, sizes, rects, affine transforms
//! - **Color**: linear RGBA with exact packed-ARGB conversions
//! - **Paths**: straight-edged vector paths
//! - **Brushes**: solid colors and pixmap-backed image shaders
//! - **Pixmaps**: off-screen raster targets (RGBA8888 / RGB565)
//! - **Draw context**: the trait a host rendering surface implements, plus
//!   a command-recording implementation for deferred execution and tests
//!
//! # Example
//!
//! ```
//! use bevel_paint::{Color, DrawContext, Path, RecordingContext, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 80.0));
//!
//! let path = Path::new().move_to(0.0, 0.0).line_to(60.0, 0.0).close();
//! ctx.fill_path(&path, Color::RED.into());
//!
//! ctx.push_transform(Transform::rotate(0.4));
//! // ... rotated drawing ...
//! ctx.pop_transform();
//!
//! let commands = ctx.take_commands();
//! assert_eq!(commands.len(), 3);
//! ```

pub mod brush;
pub mod color;
pub mod context;
pub mod path;
pub mod pixmap;
pub mod primitives;
pub mod text;

pub use brush::{Brush, ImageShader, TileMode};
pub use color::Color;
pub use context::{DrawCommand, DrawContext, DrawContextExt, RecordingContext, Transform};
pub use path::{Path, PathCommand};
pub use pixmap::{PixelFormat, Pixmap};
pub use primitives::{Affine2D, Point, Rect, Size};
pub use text::{FontMetrics, TextStyle};

//! Draw context - the host rendering surface
//!
//! The `DrawContext` trait is the seam between widgets and whatever actually
//! puts pixels on screen. Widgets paint by filling paths, drawing text, and
//! pushing/popping transforms; a host backend replays the operations against
//! its own surface. [`RecordingContext`] records them as [`DrawCommand`]s
//! for deferred execution, and doubles as the test harness.

use crate::brush::Brush;
use crate::path::Path;
use crate::primitives::{Affine2D, Point, Size};
use crate::text::TextStyle;

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// 2D transform applied to subsequent drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(pub Affine2D);

impl Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        Transform(Affine2D::IDENTITY)
    }

    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Transform(Affine2D::translation(x, y))
    }

    /// Create a 2D scale around the origin (0, 0)
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform(Affine2D::scale(sx, sy))
    }

    /// Create a 2D rotation around the origin (0, 0), angle in radians
    pub fn rotate(angle: f32) -> Self {
        Transform(Affine2D::rotation(angle))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        self.0.transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl From<Affine2D> for Transform {
    fn from(affine: Affine2D) -> Self {
        Transform(affine)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing operations a widget may perform during its paint callback
pub trait DrawContext {
    /// Push a transform onto the stack
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current transform
    fn current_transform(&self) -> Transform;

    /// Fill a path with a brush
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Draw text with its baseline origin at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Get the current viewport size
    fn viewport_size(&self) -> Size;
}

/// Extension trait providing ergonomic generic methods
pub trait DrawContextExt: DrawContext {
    /// Fill a path with a color or brush
    fn fill<B: Into<Brush>>(&mut self, path: &Path, brush: B) {
        self.fill_path(path, brush.into());
    }

    /// Push a rotation transform (angle in radians)
    fn rotate(&mut self, angle: f32) {
        self.push_transform(Transform::rotate(angle));
    }
}

// Blanket implementation for all DrawContext implementers
impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    FillPath {
        path: Path,
        brush: Brush,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Transform::identity()],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack = vec![Transform::identity()];
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self
            .transform_stack
            .last()
            .map(|t| Transform(t.0.then(&transform.0)))
            .unwrap_or(transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        }
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_recording_context_creation() {
        let ctx = RecordingContext::new(Size::new(800.0, 600.0));
        assert_eq!(ctx.viewport_size(), Size::new(800.0, 600.0));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_fill_records_command() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        let path = Path::new().move_to(0.0, 0.0).line_to(10.0, 0.0).close();
        ctx.fill(&path, Color::BLUE);
        assert_eq!(ctx.commands().len(), 1);
        assert!(matches!(
            &ctx.commands()[0],
            DrawCommand::FillPath {
                brush: Brush::Solid(c),
                ..
            } if *c == Color::BLUE
        ));
    }

    #[test]
    fn test_transform_stack_balanced() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.rotate(0.5);
        assert_ne!(ctx.current_transform(), Transform::identity());
        ctx.pop_transform();
        assert_eq!(ctx.current_transform(), Transform::identity());
        // extra pops never underflow past the identity base
        ctx.pop_transform();
        assert_eq!(ctx.current_transform(), Transform::identity());
    }

    #[test]
    fn test_nested_transforms_compose() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.push_transform(Transform::translate(10.0, 0.0));
        ctx.push_transform(Transform::translate(0.0, 5.0));
        let p = ctx.current_transform().transform_point(Point::ZERO);
        assert_eq!(p, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_implements_draw_context() {
        fn paint(ctx: &mut dyn DrawContext) {
            ctx.draw_text("hi", Point::new(1.0, 2.0), &TextStyle::new(12.0));
        }

        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        paint(&mut ctx);
        assert_eq!(ctx.commands().len(), 1);
    }
}

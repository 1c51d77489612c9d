//! Text style and font metrics

use crate::color::Color;

// Default metrics ratios of a typical sans face (hhea ascent/descent over
// units-per-em), used when the host supplies no measured metrics.
const DEFAULT_ASCENT_RATIO: f32 = 0.928;
const DEFAULT_DESCENT_RATIO: f32 = 0.244;

/// Vertical font metrics for one pixel size
///
/// Sign convention follows the usual 2D text origin: the baseline is y = 0,
/// `ascent` is negative (above the baseline), `descent` positive (below).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    pub const fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    /// Approximate metrics scaled from the pixel size
    pub fn for_size(size: f32) -> Self {
        Self {
            ascent: -(size * DEFAULT_ASCENT_RATIO),
            descent: size * DEFAULT_DESCENT_RATIO,
        }
    }

    /// Total ascent-to-descent span
    pub fn span(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_uses_both_sides_of_baseline() {
        let metrics = FontMetrics::new(-18.0, 4.0);
        assert_eq!(metrics.span(), 22.0);
    }

    #[test]
    fn test_scaled_metrics_grow_with_size() {
        let small = FontMetrics::for_size(10.0);
        let large = FontMetrics::for_size(20.0);
        assert!(small.ascent < 0.0);
        assert!(small.descent > 0.0);
        assert!(large.span() > small.span());
    }

    #[test]
    fn test_style_builder() {
        let style = TextStyle::new(15.0).with_color(Color::WHITE);
        assert_eq!(style.size, 15.0);
        assert_eq!(style.color, Color::WHITE);
    }
}

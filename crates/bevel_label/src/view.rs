//! The bevel label widget
//!
//! `BevelLabelView` is a leaf component: the host layout system hands it a
//! measured size through [`Measurable`], the host rendering surface hands
//! it a [`DrawContext`] through [`Paintable`], and the host interaction
//! system reports state changes. Everything else - backgrounds, text color,
//! text size - is plain setters. Redraws are never performed directly; the
//! view raises a coalesced [`RedrawRequest`] that the host scheduler
//! drains.

use std::sync::Arc;

use bevel_paint::{
    Brush, Color, DrawContext, FontMetrics, ImageShader, Path, Pixmap, Point, TextStyle, Transform,
};
use tracing::trace;

use crate::background::{rasterize, Background, Drawable, DrawableResources, ResourceId};
use crate::color_state::{ColorStateList, InteractionState};
use crate::geometry::BevelGeometry;
use crate::units::{DisplayMetrics, SizeUnit};

/// Horizontal offset of the text along the rotated baseline, in pixels
const TEXT_OFFSET: f32 = 10.0;

/// Default text size when the configuration does not set one
const DEFAULT_TEXT_SIZE_SP: f32 = 15.0;

/// Default text color: opaque black
const DEFAULT_TEXT_COLOR: u32 = 0xFF000000;

// ─────────────────────────────────────────────────────────────────────────────
// Host-facing traits
// ─────────────────────────────────────────────────────────────────────────────

/// Receives the host layout system's measured size
pub trait Measurable {
    fn measure(&mut self, width: i32, height: i32);
}

/// Paints into a host-provided draw context
pub trait Paintable {
    fn paint(&mut self, ctx: &mut dyn DrawContext);
}

// ─────────────────────────────────────────────────────────────────────────────
// Redraw signal
// ─────────────────────────────────────────────────────────────────────────────

/// Coalesced redraw signal drained by the host scheduler
///
/// Requests only set a flag; painting happens when the host next invokes
/// the paint callback. The running count exists so callers can observe
/// whether an operation raised a request at all.
#[derive(Debug, Default)]
pub struct RedrawRequest {
    pending: bool,
    requests: u64,
}

impl RedrawRequest {
    pub fn request(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    /// Clear and return the pending flag
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total requests raised over the view's lifetime
    pub fn count(&self) -> u64 {
        self.requests
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Bevel label configuration
///
/// Carries the values the host resource system resolves at construction
/// time: label text, text size and unit, text color, display metrics, and
/// optionally measured font metrics (when absent, metrics are approximated
/// from the text size).
#[derive(Clone, Debug)]
pub struct BevelLabelConfig {
    /// Label text
    pub text: String,
    /// Text size, expressed in `text_size_unit`
    pub text_size: f32,
    /// Unit of `text_size`
    pub text_size_unit: SizeUnit,
    /// Text color table; opaque black when absent
    pub text_color: Option<ColorStateList>,
    /// Host display density factors
    pub display_metrics: DisplayMetrics,
    /// Measured font metrics for the label face, if the host has them
    pub font_metrics: Option<FontMetrics>,
}

impl Default for BevelLabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: DEFAULT_TEXT_SIZE_SP,
            text_size_unit: SizeUnit::Sp,
            text_color: None,
            display_metrics: DisplayMetrics::default(),
            font_metrics: None,
        }
    }
}

impl BevelLabelConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the text size in scalable pixels
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size_in(SizeUnit::Sp, size)
    }

    /// Set the text size in a given unit
    pub fn text_size_in(mut self, unit: SizeUnit, size: f32) -> Self {
        self.text_size = size;
        self.text_size_unit = unit;
        self
    }

    /// Set a state-independent text color (packed ARGB)
    pub fn text_color(mut self, argb: u32) -> Self {
        self.text_color = Some(ColorStateList::solid(argb));
        self
    }

    /// Set a state-dependent text color table
    pub fn text_color_list(mut self, colors: ColorStateList) -> Self {
        self.text_color = Some(colors);
        self
    }

    /// Set the host display metrics
    pub fn display_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.display_metrics = metrics;
        self
    }

    /// Supply measured font metrics instead of size-scaled approximations
    pub fn font_metrics(mut self, metrics: FontMetrics) -> Self {
        self.font_metrics = Some(metrics);
        self
    }

    /// Build the view
    pub fn build(self) -> BevelLabelView {
        BevelLabelView::new(self)
    }
}

#[derive(Clone, Copy, Debug)]
enum FontMetricsSource {
    /// Approximate from the current text size
    Scaled,
    /// Fixed metrics supplied by the host
    Fixed(FontMetrics),
}

impl FontMetricsSource {
    fn metrics(self, size: f32) -> FontMetrics {
        match self {
            FontMetricsSource::Scaled => FontMetrics::for_size(size),
            FontMetricsSource::Fixed(metrics) => metrics,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// The view
// ─────────────────────────────────────────────────────────────────────────────

/// A rectangular label with one corner cut by a diagonal bevel
///
/// Fills the bevel shape with a flat color or a rasterized drawable and
/// draws the label text rotated along the rectangle diagonal.
#[derive(Debug)]
pub struct BevelLabelView {
    text: String,
    text_size: f32,
    metrics_source: FontMetricsSource,
    display_metrics: DisplayMetrics,
    /// Font-metrics span fixed at construction; scales the bevel cut and is
    /// never recomputed, even when the text size changes
    band_height: i32,

    text_color: ColorStateList,
    cur_text_color: Color,
    interaction_state: InteractionState,

    width: i32,
    height: i32,
    geometry: Option<BevelGeometry>,
    shape_path: Path,
    baseline_path: Path,

    background: Option<Background>,
    background_resource: ResourceId,
    raster: Option<Arc<Pixmap>>,
    shader: Option<ImageShader>,
    /// Last solid color applied to the fill paint; used when no background
    /// is configured
    fill_color: Color,

    redraw: RedrawRequest,
}

impl BevelLabelView {
    pub fn new(config: BevelLabelConfig) -> Self {
        let display_metrics = config.display_metrics;
        let text_size = config.text_size_unit.to_px(config.text_size, &display_metrics);
        let metrics_source = match config.font_metrics {
            Some(metrics) => FontMetricsSource::Fixed(metrics),
            None => FontMetricsSource::Scaled,
        };
        let band_height = metrics_source.metrics(text_size).span() as i32;

        let text_color = config
            .text_color
            .unwrap_or_else(|| ColorStateList::solid(DEFAULT_TEXT_COLOR));
        let interaction_state = InteractionState::ENABLED;
        let cur_text_color = text_color.color_for_state(interaction_state);

        Self {
            text: config.text,
            text_size,
            metrics_source,
            display_metrics,
            band_height,
            text_color,
            cur_text_color,
            interaction_state,
            width: 0,
            height: 0,
            geometry: None,
            shape_path: Path::new(),
            baseline_path: Path::new(),
            background: None,
            background_resource: 0,
            raster: None,
            shader: None,
            fill_color: Color::BLACK,
            redraw: RedrawRequest::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Background
    // ─────────────────────────────────────────────────────────────────────

    /// Set a flat background color (packed ARGB)
    ///
    /// Mutates the current flat background in place when there is one;
    /// otherwise replaces the background entirely.
    pub fn set_background_color(&mut self, argb: u32) {
        match &mut self.background {
            Some(Background::Flat(color)) => {
                *color = Color::from_argb(argb);
                self.background_resource = 0;
            }
            _ => self.apply_background(Some(Background::Flat(Color::from_argb(argb)))),
        }
    }

    /// Set or clear the background drawable
    ///
    /// Setting the same drawable instance again is a no-op, as is clearing
    /// an already absent background.
    pub fn set_background(&mut self, drawable: Option<Arc<dyn Drawable>>) {
        let unchanged = match (&drawable, &self.background) {
            (None, None) => true,
            (Some(new), Some(Background::Image(current))) => Arc::ptr_eq(new, current),
            _ => false,
        };
        if unchanged {
            return;
        }
        self.apply_background(drawable.map(Background::Image));
    }

    /// Set the background from a host resource id
    ///
    /// A nonzero id equal to the last applied one is a no-op. An id of 0,
    /// or one the host cannot resolve, clears the background drawable.
    pub fn set_background_resource(
        &mut self,
        resources: &dyn DrawableResources,
        id: ResourceId,
    ) {
        if id != 0 && id == self.background_resource {
            return;
        }

        let drawable = if id != 0 { resources.drawable(id) } else { None };
        self.set_background(drawable);

        self.background_resource = id;
    }

    fn apply_background(&mut self, background: Option<Background>) {
        self.background_resource = 0;
        self.background = background;

        // release the cached raster; the next paint re-rasterizes
        self.raster = None;
        self.shader = None;

        self.redraw.request();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Text color
    // ─────────────────────────────────────────────────────────────────────

    /// Set a state-independent text color (packed ARGB)
    pub fn set_text_color(&mut self, argb: u32) {
        self.text_color = ColorStateList::solid(argb);
        self.update_text_color();
    }

    /// Set a state-dependent text color table
    pub fn set_text_color_list(&mut self, colors: ColorStateList) {
        self.text_color = colors;
        self.update_text_color();
    }

    /// Host callback: the interaction state vector changed
    pub fn interaction_state_changed(&mut self, state: InteractionState) {
        self.interaction_state = state;
        self.update_text_color();
    }

    fn update_text_color(&mut self) {
        let color = self.text_color.color_for_state(self.interaction_state);
        if color != self.cur_text_color {
            self.cur_text_color = color;
            self.redraw.request();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Text size
    // ─────────────────────────────────────────────────────────────────────

    /// Set the text size in scalable pixels
    pub fn set_text_size(&mut self, size: f32) {
        self.set_text_size_in(SizeUnit::Sp, size);
    }

    /// Set the text size in a given unit
    ///
    /// The band height stays fixed at its construction value.
    pub fn set_text_size_in(&mut self, unit: SizeUnit, size: f32) {
        let px = unit.to_px(size, &self.display_metrics);
        if px != self.text_size {
            self.text_size = px;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Paint
    // ─────────────────────────────────────────────────────────────────────

    fn fill_brush(&mut self) -> Brush {
        match &self.background {
            Some(Background::Flat(color)) => {
                self.fill_color = *color;
                Brush::Solid(*color)
            }
            Some(Background::Image(drawable)) => {
                let shader = match &self.shader {
                    Some(shader) => shader.clone(),
                    None => {
                        let pixmap =
                            Arc::new(rasterize(drawable.as_ref(), self.width, self.height));
                        let shader = ImageShader::clamped(pixmap.clone());
                        self.raster = Some(pixmap);
                        self.shader = Some(shader.clone());
                        shader
                    }
                };
                Brush::Image(shader)
            }
            None => Brush::Solid(self.fill_color),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current text size in pixels
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Band height fixed at construction
    pub fn band_height(&self) -> i32 {
        self.band_height
    }

    /// Geometry from the last measurement, if it was valid
    pub fn geometry(&self) -> Option<BevelGeometry> {
        self.geometry
    }

    pub fn shape_path(&self) -> &Path {
        &self.shape_path
    }

    pub fn baseline_path(&self) -> &Path {
        &self.baseline_path
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// The cached rasterized background, if one has been built
    pub fn background_raster(&self) -> Option<&Arc<Pixmap>> {
        self.raster.as_ref()
    }

    /// Currently resolved text color
    pub fn current_text_color(&self) -> Color {
        self.cur_text_color
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction_state
    }

    pub fn redraw(&self) -> &RedrawRequest {
        &self.redraw
    }

    /// Drain the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        self.redraw.take()
    }
}

impl Measurable for BevelLabelView {
    /// Recompute geometry and rebuild both paths for the measured size
    ///
    /// A zero or negative dimension clears the geometry so the paint pass
    /// becomes a no-op. The caller decides whether to request a redraw.
    fn measure(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;

        self.geometry = BevelGeometry::compute(width, height, self.band_height);
        match &self.geometry {
            Some(geometry) => {
                self.shape_path = geometry.shape_path();
                self.baseline_path = geometry.baseline_path();
                trace!(width, height, "bevel geometry recomputed");
            }
            None => {
                self.shape_path = Path::new();
                self.baseline_path = Path::new();
                trace!(width, height, "degenerate measurement, geometry cleared");
            }
        }
    }
}

impl Paintable for BevelLabelView {
    fn paint(&mut self, ctx: &mut dyn DrawContext) {
        let Some(geometry) = self.geometry else {
            trace!("paint skipped, no valid geometry");
            return;
        };

        let brush = self.fill_brush();
        ctx.fill_path(&self.shape_path, brush);

        ctx.push_transform(Transform::rotate(geometry.rotation_degrees().to_radians()));

        let metrics = self.metrics_source.metrics(self.text_size);
        let style = TextStyle::new(self.text_size).with_color(self.cur_text_color);
        ctx.draw_text(&self.text, Point::new(TEXT_OFFSET, -metrics.descent), &style);

        ctx.pop_transform();
    }
}

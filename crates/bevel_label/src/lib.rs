//! Bevel label widget
//!
//! A rectangular banner label with its top-right corner cut by a diagonal
//! bevel, filled with a flat color or a rasterized drawable, with the label
//! text rotated along the rectangle diagonal. The widget is host-agnostic:
//! a thin adapter maps the host toolkit's measure/draw/state callbacks onto
//! [`Measurable`], [`Paintable`], and
//! [`BevelLabelView::interaction_state_changed`].
//!
//! # Example
//!
//! ```
//! use bevel_label::{BevelLabelConfig, Measurable, Paintable};
//! use bevel_paint::{RecordingContext, Size};
//!
//! let mut label = BevelLabelConfig::new()
//!     .text("SCAN ME")
//!     .text_size(15.0)
//!     .build();
//! label.set_background_color(0xFF2962FF);
//!
//! // host layout pass
//! label.measure(300, 100);
//!
//! // host paint pass
//! let mut ctx = RecordingContext::new(Size::new(300.0, 100.0));
//! label.paint(&mut ctx);
//! assert!(!ctx.commands().is_empty());
//!
//! // the host drains the coalesced redraw signal
//! assert!(label.take_redraw_request());
//! ```

pub mod background;
pub mod color_state;
pub mod geometry;
pub mod units;
pub mod view;

pub use background::{
    rasterize, Background, BitmapDrawable, Drawable, DrawableOpacity, DrawableResources,
    ResourceId,
};
pub use color_state::{ColorStateEntry, ColorStateError, ColorStateList, InteractionState};
pub use geometry::{BevelGeometry, IPoint};
pub use units::{DisplayMetrics, SizeUnit};
pub use view::{BevelLabelConfig, BevelLabelView, Measurable, Paintable, RedrawRequest};

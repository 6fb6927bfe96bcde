//! Layout and painting of badge overlays.
//!
//! A badge is a small shape (oval, rect or rounded rect) drawn inside a
//! canvas area. Its size is a fraction of the area, its proportions follow
//! a fixed aspect ratio, and a [`Gravity`] decides where it sits. An
//! optional border ring is painted underneath.
//!
//! ```
//! use badger::{BadgeShape, Gravity, LayoutDirection, Rect};
//! use badger::render::recording::RecordingCanvas;
//!
//! let shape = BadgeShape::round_rect(0.5, 2.0, "end|top".parse()?, 0.25)?;
//! let mut canvas = RecordingCanvas::new();
//! let badge = shape.draw(
//!     &mut canvas,
//!     &Rect::new(0, 0, 64, 64),
//!     &"red",
//!     &"white",
//!     2,
//!     LayoutDirection::Rtl,
//! );
//!
//! assert_eq!(badge, Rect::new(0, 0, 32, 16));
//! assert_eq!(canvas.len(), 2);
//! # Ok::<(), badger::BadgeError>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod gravity;
pub mod layout;
mod log;
pub mod render;
pub mod types;

pub use errors::BadgeError;
pub use geometry::{Rect, RectF};
pub use gravity::{Gravity, HorizontalGravity, LayoutDirection, VerticalGravity};
pub use layout::{LayoutSpec, border_rect};
pub use render::{BadgeShape, Canvas, ShapeKind};
pub use types::{AspectRatio, NumericError, RadiusFactor, Scale};

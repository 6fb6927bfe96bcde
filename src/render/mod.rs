//! Badge rendering.
//!
//! The host supplies a [`Canvas`]; a [`BadgeShape`] lays the badge out inside
//! the host's bounds and paints it (border ring first, badge on top).

pub mod recording;
mod shapes;

pub use shapes::{OvalShape, RectShape, RoundRectShape, ShapeKind, ShapeRenderer};

use crate::errors::BadgeError;
use crate::geometry::{Rect, RectF};
use crate::gravity::{Gravity, LayoutDirection};
use crate::layout::{self, LayoutSpec};
use crate::types::{AspectRatio, RadiusFactor};

/// Drawing surface owned by the host.
///
/// `Paint` is opaque here: it is handed back to the surface untouched.
pub trait Canvas {
    type Paint;

    /// Paint an oval inscribed in `oval`
    fn draw_oval(&mut self, oval: RectF, paint: &Self::Paint);

    fn draw_rect(&mut self, rect: Rect, paint: &Self::Paint);

    /// Paint `rect` with elliptical corners of radii `rx` and `ry`
    fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: &Self::Paint);
}

/// A configured badge: layout parameters plus the geometry to paint.
///
/// Built once and reused for every draw; drawing never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeShape {
    layout: LayoutSpec,
    kind: ShapeKind,
}

impl BadgeShape {
    pub fn new(layout: LayoutSpec, kind: ShapeKind) -> Self {
        BadgeShape { layout, kind }
    }

    /// An oval with aspect ratio 1
    pub fn circle(scale: f32, gravity: Gravity) -> Result<Self, BadgeError> {
        BadgeShape::oval(scale, AspectRatio::SQUARE.raw(), gravity)
    }

    pub fn oval(scale: f32, aspect_ratio: f32, gravity: Gravity) -> Result<Self, BadgeError> {
        let layout = LayoutSpec::try_new(scale, aspect_ratio, gravity)?;
        Ok(BadgeShape::new(layout, OvalShape.into()))
    }

    pub fn rect(scale: f32, aspect_ratio: f32, gravity: Gravity) -> Result<Self, BadgeError> {
        let layout = LayoutSpec::try_new(scale, aspect_ratio, gravity)?;
        Ok(BadgeShape::new(layout, RectShape.into()))
    }

    /// A rect with rounded corners. A radius factor of zero gives exactly
    /// [`BadgeShape::rect`].
    pub fn round_rect(
        scale: f32,
        aspect_ratio: f32,
        gravity: Gravity,
        radius_factor: f32,
    ) -> Result<Self, BadgeError> {
        let layout = LayoutSpec::try_new(scale, aspect_ratio, gravity)?;
        let radius_factor = RadiusFactor::try_new(radius_factor)?;
        Ok(BadgeShape::new(layout, ShapeKind::rounded(radius_factor)))
    }

    /// A rect with aspect ratio 1
    pub fn square(scale: f32, gravity: Gravity) -> Result<Self, BadgeError> {
        BadgeShape::rect(scale, AspectRatio::SQUARE.raw(), gravity)
    }

    pub fn round_square(scale: f32, gravity: Gravity, radius_factor: f32) -> Result<Self, BadgeError> {
        BadgeShape::round_rect(scale, AspectRatio::SQUARE.raw(), gravity, radius_factor)
    }

    pub fn layout(&self) -> &LayoutSpec {
        &self.layout
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Lay the badge out inside `bounds` and paint it.
    ///
    /// A border ring `border_size` pixels wide is painted under the badge
    /// when `border_size > 0`; otherwise `border_paint` is never used.
    /// Returns the badge region (without the border).
    pub fn draw<C: Canvas>(
        &self,
        canvas: &mut C,
        bounds: &Rect,
        badge_paint: &C::Paint,
        border_paint: &C::Paint,
        border_size: i32,
        direction: LayoutDirection,
    ) -> Rect {
        let badge = self.layout.badge_rect(bounds, direction);

        match layout::border_rect(&badge, border_size) {
            Some(border) => self.on_draw(canvas, badge, Some(border), badge_paint, Some(border_paint)),
            None => self.on_draw(canvas, badge, None, badge_paint, None),
        }

        badge
    }

    /// Paint already laid-out regions. The border is painted only when both
    /// its region and its paint are present.
    pub fn on_draw<C: Canvas>(
        &self,
        canvas: &mut C,
        badge: Rect,
        border: Option<Rect>,
        badge_paint: &C::Paint,
        border_paint: Option<&C::Paint>,
    ) {
        self.kind.on_draw(canvas, badge, border, badge_paint, border_paint);
    }
}

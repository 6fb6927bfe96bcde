//! The closed set of badge geometries.
//!
//! Each variant paints a badge region and, when given one, a border region
//! underneath it.

use enum_dispatch::enum_dispatch;

use super::Canvas;
use crate::geometry::{Rect, RectF};
use crate::log;
use crate::types::RadiusFactor;

/// Paints one badge geometry
#[enum_dispatch]
pub trait ShapeRenderer {
    /// Paint the border (if both `border` and `border_paint` are present),
    /// then the badge.
    fn on_draw<C: Canvas>(
        &self,
        canvas: &mut C,
        badge: Rect,
        border: Option<Rect>,
        badge_paint: &C::Paint,
        border_paint: Option<&C::Paint>,
    );
}

/// Shape variants, dispatched without trait objects
#[enum_dispatch(ShapeRenderer)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Oval(OvalShape),
    Rect(RectShape),
    RoundRect(RoundRectShape),
}

impl ShapeKind {
    /// Rounded rect, or the plain rect when `radius_factor` is zero
    pub fn rounded(radius_factor: RadiusFactor) -> ShapeKind {
        if radius_factor.is_zero() {
            RectShape.into()
        } else {
            RoundRectShape { radius_factor }.into()
        }
    }
}

/// Ellipse inscribed in the region; a circle for square regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OvalShape;

impl ShapeRenderer for OvalShape {
    fn on_draw<C: Canvas>(
        &self,
        canvas: &mut C,
        badge: Rect,
        border: Option<Rect>,
        badge_paint: &C::Paint,
        border_paint: Option<&C::Paint>,
    ) {
        if let (Some(border), Some(paint)) = (border, border_paint) {
            log::trace!(region = %border, "oval border");
            canvas.draw_oval(border.into(), paint);
        }
        log::trace!(region = %badge, "oval badge");
        canvas.draw_oval(badge.into(), badge_paint);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectShape;

impl ShapeRenderer for RectShape {
    fn on_draw<C: Canvas>(
        &self,
        canvas: &mut C,
        badge: Rect,
        border: Option<Rect>,
        badge_paint: &C::Paint,
        border_paint: Option<&C::Paint>,
    ) {
        if let (Some(border), Some(paint)) = (border, border_paint) {
            log::trace!(region = %border, "rect border");
            canvas.draw_rect(border, paint);
        }
        log::trace!(region = %badge, "rect badge");
        canvas.draw_rect(badge, badge_paint);
    }
}

/// Rect with corners rounded by a fraction of half its shorter side.
///
/// Construct through [`ShapeKind::rounded`] so a zero factor collapses to
/// [`RectShape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectShape {
    pub radius_factor: RadiusFactor,
}

impl RoundRectShape {
    /// Corner radius for `region`, computed per region so the border ring
    /// gets its own radius.
    pub fn corner_radius(&self, region: &Rect) -> f32 {
        0.5 * region.width().min(region.height()) as f32 * self.radius_factor.raw()
    }
}

impl ShapeRenderer for RoundRectShape {
    fn on_draw<C: Canvas>(
        &self,
        canvas: &mut C,
        badge: Rect,
        border: Option<Rect>,
        badge_paint: &C::Paint,
        border_paint: Option<&C::Paint>,
    ) {
        if let (Some(border), Some(paint)) = (border, border_paint) {
            let r = self.corner_radius(&border);
            log::trace!(region = %border, radius = r, "round rect border");
            canvas.draw_round_rect(RectF::from(border), r, r, paint);
        }
        let r = self.corner_radius(&badge);
        log::trace!(region = %badge, radius = r, "round rect badge");
        canvas.draw_round_rect(RectF::from(badge), r, r, badge_paint);
    }
}

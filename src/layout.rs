//! Badge layout: sizing a badge from its container and placing it with
//! gravity. Knows nothing about painting.

use crate::errors::BadgeError;
use crate::geometry::Rect;
use crate::gravity::{Gravity, LayoutDirection};
use crate::log;
use crate::types::{AspectRatio, Scale};

/// Immutable sizing and placement parameters of a badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    pub scale: Scale,
    pub aspect_ratio: AspectRatio,
    pub gravity: Gravity,
}

impl LayoutSpec {
    pub const fn new(scale: Scale, aspect_ratio: AspectRatio, gravity: Gravity) -> Self {
        LayoutSpec {
            scale,
            aspect_ratio,
            gravity,
        }
    }

    /// Build from raw values, rejecting an out-of-range scale or a
    /// non-positive aspect ratio.
    pub fn try_new(scale: f32, aspect_ratio: f32, gravity: Gravity) -> Result<Self, BadgeError> {
        Ok(LayoutSpec::new(
            Scale::try_new(scale)?,
            AspectRatio::try_new(aspect_ratio)?,
            gravity,
        ))
    }

    /// Badge width and height for `bounds`, before placement.
    ///
    /// The scaled box is shrunk along whichever axis is too long for the
    /// aspect ratio, then truncated to whole pixels.
    pub fn badge_size(&self, bounds: &Rect) -> (i32, i32) {
        let scale = self.scale.raw();
        let ratio = self.aspect_ratio.raw();

        let mut width = bounds.width().max(0) as f32 * scale;
        let mut height = bounds.height().max(0) as f32 * scale;
        if width < height * ratio {
            height = width / ratio;
        } else {
            width = height * ratio;
        }

        (width as i32, height as i32)
    }

    /// Where the badge lands inside `bounds`
    pub fn badge_rect(&self, bounds: &Rect, direction: LayoutDirection) -> Rect {
        let (width, height) = self.badge_size(bounds);
        let rect = self.gravity.apply(width, height, bounds, direction);
        log::debug!(
            width,
            height,
            gravity = %self.gravity,
            ?direction,
            %bounds,
            badge = %rect,
            "badge layout"
        );
        rect
    }
}

/// Border thickness after clamping: negative sizes mean no border
pub fn effective_border_size(border_size: i32) -> i32 {
    border_size.max(0)
}

/// Region of the border ring around `badge`, or `None` when there is no
/// border to draw.
pub fn border_rect(badge: &Rect, border_size: i32) -> Option<Rect> {
    match effective_border_size(border_size) {
        0 => None,
        size => Some(badge.outset(size)),
    }
}

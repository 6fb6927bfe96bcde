//! Integer and float rectangles.

use std::fmt;

use glam::{Vec2, vec2};

/// Axis-aligned rectangle with integer pixel edges (Y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Rectangle of the given size with its top-left corner at the origin
    pub const fn from_size(width: i32, height: i32) -> Self {
        Rect::new(0, 0, width, height)
    }

    /// Saturates at `i32::MAX`/`i32::MIN` for extreme edges
    #[inline]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Area in square pixels, zero for degenerate rectangles
    pub fn area(&self) -> i64 {
        i64::from(self.width().max(0)) * i64::from(self.height().max(0))
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Left <= right and top <= bottom
    pub fn is_ordered(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Whether `other` lies entirely inside this rectangle (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Grow outward by `amount` on all four edges, stopping at the `i32`
    /// limits
    pub fn outset(&self, amount: i32) -> Rect {
        Rect::new(
            self.left.saturating_sub(amount),
            self.top.saturating_sub(amount),
            self.right.saturating_add(amount),
            self.bottom.saturating_add(amount),
        )
    }

    /// Mirror horizontally inside `container`
    pub fn mirror_x(&self, container: &Rect) -> Rect {
        Rect::new(
            container.left + container.right - self.right,
            self.top,
            container.left + container.right - self.left,
            self.bottom,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.left, self.top, self.right, self.bottom)
    }
}

/// Axis-aligned rectangle with float corners, for surfaces that paint
/// curved geometry
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub min: Vec2,
    pub max: Vec2,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        RectF {
            min: vec2(left, top),
            max: vec2(right, bottom),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

impl From<Rect> for RectF {
    fn from(r: Rect) -> Self {
        RectF::new(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

impl fmt::Display for RectF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

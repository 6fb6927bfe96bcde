//! Gravity: placing a box of known size inside a container rectangle.
//!
//! A gravity has one component per axis. Horizontal gravity can be relative
//! (`Start`/`End`), in which case the layout direction decides which edge it
//! pulls toward. A component left at `Center` centers the box on that axis,
//! which is also what "no gravity" means.

use std::fmt;
use std::str::FromStr;

use crate::errors::BadgeError;
use crate::geometry::Rect;

/// Text/layout direction, used to resolve `Start` and `End`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Placement along the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalGravity {
    #[default]
    Center,
    Top,
    Bottom,
    /// Stretch to the container's full height
    Fill,
}

/// Placement along the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalGravity {
    #[default]
    Center,
    Left,
    Right,
    /// Left in LTR, right in RTL
    Start,
    /// Right in LTR, left in RTL
    End,
    /// Stretch to the container's full width
    Fill,
}

impl HorizontalGravity {
    /// Replace `Start`/`End` with the concrete edge for `direction`
    pub fn to_absolute(self, direction: LayoutDirection) -> HorizontalGravity {
        match (self, direction) {
            (HorizontalGravity::Start, LayoutDirection::Ltr)
            | (HorizontalGravity::End, LayoutDirection::Rtl) => HorizontalGravity::Left,
            (HorizontalGravity::Start, LayoutDirection::Rtl)
            | (HorizontalGravity::End, LayoutDirection::Ltr) => HorizontalGravity::Right,
            (other, _) => other,
        }
    }

    pub fn is_relative(self) -> bool {
        matches!(self, HorizontalGravity::Start | HorizontalGravity::End)
    }
}

/// Where a box sits along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pull {
    Center,
    Before,
    After,
    Fill,
}

impl From<VerticalGravity> for Pull {
    fn from(v: VerticalGravity) -> Self {
        match v {
            VerticalGravity::Center => Pull::Center,
            VerticalGravity::Top => Pull::Before,
            VerticalGravity::Bottom => Pull::After,
            VerticalGravity::Fill => Pull::Fill,
        }
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Position a span of `size` between `start` and `end`.
///
/// Centering uses integer division truncating toward zero, so an odd
/// leftover pixel goes after the box. Edges saturate at the `i32` limits.
fn place(pull: Pull, size: i32, start: i32, end: i32, clip: bool) -> (i32, i32) {
    match pull {
        Pull::Center => {
            let (start64, end64, size64) = (i64::from(start), i64::from(end), i64::from(size));
            let lo = start64 + (end64 - start64 - size64) / 2;
            let (lo, hi) = (saturate(lo), saturate(lo + size64));
            if clip {
                (lo.max(start), hi.min(end))
            } else {
                (lo, hi)
            }
        }
        Pull::Before => {
            let hi = start.saturating_add(size);
            (start, if clip { hi.min(end) } else { hi })
        }
        Pull::After => {
            let lo = end.saturating_sub(size);
            (if clip { lo.max(start) } else { lo }, end)
        }
        Pull::Fill => (start, end),
    }
}

/// Alignment of a box inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gravity {
    pub vertical: VerticalGravity,
    pub horizontal: HorizontalGravity,
    /// Clamp vertical edges that would fall outside the container
    pub clip_vertical: bool,
    /// Clamp horizontal edges that would fall outside the container
    pub clip_horizontal: bool,
}

impl Gravity {
    /// No gravity: centered on both axes
    pub const NONE: Gravity = Gravity::new(VerticalGravity::Center, HorizontalGravity::Center);
    pub const CENTER: Gravity = Gravity::NONE;
    pub const TOP: Gravity = Gravity::new(VerticalGravity::Top, HorizontalGravity::Center);
    pub const BOTTOM: Gravity = Gravity::new(VerticalGravity::Bottom, HorizontalGravity::Center);
    pub const LEFT: Gravity = Gravity::new(VerticalGravity::Center, HorizontalGravity::Left);
    pub const RIGHT: Gravity = Gravity::new(VerticalGravity::Center, HorizontalGravity::Right);
    pub const START: Gravity = Gravity::new(VerticalGravity::Center, HorizontalGravity::Start);
    pub const END: Gravity = Gravity::new(VerticalGravity::Center, HorizontalGravity::End);
    pub const FILL: Gravity = Gravity::new(VerticalGravity::Fill, HorizontalGravity::Fill);

    pub const fn new(vertical: VerticalGravity, horizontal: HorizontalGravity) -> Self {
        Gravity {
            vertical,
            horizontal,
            clip_vertical: false,
            clip_horizontal: false,
        }
    }

    pub const fn with_vertical(mut self, vertical: VerticalGravity) -> Self {
        self.vertical = vertical;
        self
    }

    pub const fn with_horizontal(mut self, horizontal: HorizontalGravity) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub const fn with_clip(mut self, horizontal: bool, vertical: bool) -> Self {
        self.clip_horizontal = horizontal;
        self.clip_vertical = vertical;
        self
    }

    /// Same gravity with `Start`/`End` resolved to `Left`/`Right`
    pub fn to_absolute(self, direction: LayoutDirection) -> Gravity {
        self.with_horizontal(self.horizontal.to_absolute(direction))
    }

    /// Place a `width` x `height` box inside `container`, resolving
    /// relative horizontal gravity with `direction`.
    pub fn apply(&self, width: i32, height: i32, container: &Rect, direction: LayoutDirection) -> Rect {
        let horizontal = match self.horizontal.to_absolute(direction) {
            HorizontalGravity::Left => Pull::Before,
            HorizontalGravity::Right => Pull::After,
            HorizontalGravity::Fill => Pull::Fill,
            HorizontalGravity::Center | HorizontalGravity::Start | HorizontalGravity::End => {
                Pull::Center
            }
        };
        let (left, right) = place(
            horizontal,
            width,
            container.left,
            container.right,
            self.clip_horizontal,
        );
        let (top, bottom) = place(
            self.vertical.into(),
            height,
            container.top,
            container.bottom,
            self.clip_vertical,
        );
        Rect::new(left, top, right, bottom)
    }

    /// Direction-agnostic placement: `Start` is left and `End` is right.
    pub fn apply_absolute(&self, width: i32, height: i32, container: &Rect) -> Rect {
        self.apply(width, height, container, LayoutDirection::Ltr)
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags: Vec<&str> = Vec::with_capacity(4);
        match (self.horizontal, self.vertical) {
            (HorizontalGravity::Center, VerticalGravity::Center) => flags.push("center"),
            (HorizontalGravity::Fill, VerticalGravity::Fill) => flags.push("fill"),
            (h, v) => {
                flags.push(match h {
                    HorizontalGravity::Center => "center_horizontal",
                    HorizontalGravity::Left => "left",
                    HorizontalGravity::Right => "right",
                    HorizontalGravity::Start => "start",
                    HorizontalGravity::End => "end",
                    HorizontalGravity::Fill => "fill_horizontal",
                });
                flags.push(match v {
                    VerticalGravity::Center => "center_vertical",
                    VerticalGravity::Top => "top",
                    VerticalGravity::Bottom => "bottom",
                    VerticalGravity::Fill => "fill_vertical",
                });
            }
        }
        if self.clip_horizontal {
            flags.push("clip_horizontal");
        }
        if self.clip_vertical {
            flags.push("clip_vertical");
        }
        write!(f, "{}", flags.join("|"))
    }
}

impl FromStr for Gravity {
    type Err = BadgeError;

    /// Parse `|`-separated flags such as `right|top` or `end|center_vertical`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut vertical: Option<VerticalGravity> = None;
        let mut horizontal: Option<HorizontalGravity> = None;
        let mut gravity = Gravity::NONE;

        let mut set_v = |v: VerticalGravity| match vertical {
            Some(prev) if prev != v => Err(BadgeError::gravity(
                input,
                format!("conflicting vertical gravity {prev:?} and {v:?}"),
            )),
            _ => {
                vertical = Some(v);
                Ok(())
            }
        };
        let mut set_h = |h: HorizontalGravity| match horizontal {
            Some(prev) if prev != h => Err(BadgeError::gravity(
                input,
                format!("conflicting horizontal gravity {prev:?} and {h:?}"),
            )),
            _ => {
                horizontal = Some(h);
                Ok(())
            }
        };

        if input.trim().is_empty() {
            return Err(BadgeError::gravity(input, "empty gravity"));
        }

        for token in input.split('|').map(str::trim) {
            match token {
                // Unset axes already center, so center never overrides an edge
                "no_gravity" | "center" | "center_vertical" | "center_horizontal" => {}
                "top" => set_v(VerticalGravity::Top)?,
                "bottom" => set_v(VerticalGravity::Bottom)?,
                "fill_vertical" => set_v(VerticalGravity::Fill)?,
                "left" => set_h(HorizontalGravity::Left)?,
                "right" => set_h(HorizontalGravity::Right)?,
                "start" => set_h(HorizontalGravity::Start)?,
                "end" => set_h(HorizontalGravity::End)?,
                "fill_horizontal" => set_h(HorizontalGravity::Fill)?,
                "fill" => {
                    set_v(VerticalGravity::Fill)?;
                    set_h(HorizontalGravity::Fill)?;
                }
                "clip_vertical" => gravity.clip_vertical = true,
                "clip_horizontal" => gravity.clip_horizontal = true,
                "" => return Err(BadgeError::gravity(input, "empty flag")),
                other => return Err(BadgeError::gravity(input, format!("unknown flag `{other}`"))),
            }
        }

        gravity.vertical = vertical.unwrap_or_default();
        gravity.horizontal = horizontal.unwrap_or_default();
        Ok(gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0, 0, 64, 64);

    #[test]
    fn center_and_none_agree() {
        assert_eq!(
            Gravity::NONE.apply_absolute(32, 32, &BOUNDS),
            Rect::new(16, 16, 48, 48)
        );
        assert_eq!(Gravity::CENTER, Gravity::NONE);
    }

    #[test]
    fn odd_leftover_goes_after() {
        let r = Gravity::CENTER.apply_absolute(31, 10, &Rect::new(0, 0, 64, 21));
        assert_eq!(r, Rect::new(16, 5, 47, 15));
    }

    #[test]
    fn absolute_edges() {
        let right_top = Gravity::new(VerticalGravity::Top, HorizontalGravity::Right);
        assert_eq!(right_top.apply_absolute(32, 16, &BOUNDS), Rect::new(32, 0, 64, 16));

        let left_bottom = Gravity::new(VerticalGravity::Bottom, HorizontalGravity::Left);
        assert_eq!(left_bottom.apply_absolute(10, 20, &BOUNDS), Rect::new(0, 44, 10, 64));
    }

    #[test]
    fn relative_edges_follow_direction() {
        let g = Gravity::END;
        assert_eq!(g.apply(32, 16, &BOUNDS, LayoutDirection::Ltr), Rect::new(32, 24, 64, 40));
        assert_eq!(g.apply(32, 16, &BOUNDS, LayoutDirection::Rtl), Rect::new(0, 24, 32, 40));

        let g = Gravity::START;
        assert_eq!(g.apply(32, 16, &BOUNDS, LayoutDirection::Ltr), Rect::new(0, 24, 32, 40));
        assert_eq!(g.apply(32, 16, &BOUNDS, LayoutDirection::Rtl), Rect::new(32, 24, 64, 40));
    }

    #[test]
    fn absolute_gravity_ignores_direction() {
        let g = Gravity::LEFT;
        assert_eq!(
            g.apply(8, 8, &BOUNDS, LayoutDirection::Ltr),
            g.apply(8, 8, &BOUNDS, LayoutDirection::Rtl)
        );
    }

    #[test]
    fn relative_resolution() {
        assert_eq!(Gravity::START.to_absolute(LayoutDirection::Rtl), Gravity::RIGHT);
        assert_eq!(Gravity::END.to_absolute(LayoutDirection::Ltr), Gravity::RIGHT);
        assert_eq!(Gravity::TOP.to_absolute(LayoutDirection::Rtl), Gravity::TOP);
        assert!(HorizontalGravity::End.is_relative());
        assert!(!HorizontalGravity::Right.is_relative());
    }

    #[test]
    fn fill_stretches_axis() {
        let g = Gravity::new(VerticalGravity::Top, HorizontalGravity::Fill);
        assert_eq!(g.apply_absolute(10, 10, &BOUNDS), Rect::new(0, 0, 64, 10));
        assert_eq!(Gravity::FILL.apply_absolute(1, 1, &BOUNDS), BOUNDS);
    }

    #[test]
    fn clip_keeps_oversized_box_inside() {
        let container = Rect::new(0, 0, 20, 20);
        let unclipped = Gravity::CENTER.apply_absolute(30, 30, &container);
        assert_eq!(unclipped, Rect::new(-5, -5, 25, 25));

        let clipped = Gravity::CENTER.with_clip(true, true).apply_absolute(30, 30, &container);
        assert_eq!(clipped, container);

        let right = Gravity::RIGHT.with_clip(true, false).apply_absolute(30, 10, &container);
        assert_eq!(right, Rect::new(0, 5, 20, 15));
    }

    #[test]
    fn parse_flag_strings() {
        assert_eq!(
            "right|top".parse::<Gravity>(),
            Ok(Gravity::new(VerticalGravity::Top, HorizontalGravity::Right))
        );
        assert_eq!("end | center_vertical".parse::<Gravity>(), Ok(Gravity::END));
        assert_eq!("no_gravity".parse::<Gravity>(), Ok(Gravity::NONE));
        assert_eq!("center|center_vertical".parse::<Gravity>(), Ok(Gravity::CENTER));
        assert_eq!("left".parse::<Gravity>(), Ok(Gravity::LEFT));
        assert_eq!(
            "clip_horizontal|bottom".parse::<Gravity>(),
            Ok(Gravity::BOTTOM.with_clip(true, false))
        );
    }

    #[test]
    fn center_flag_yields_to_edges() {
        assert_eq!("end|center".parse::<Gravity>(), Ok(Gravity::END));
        assert_eq!("center|top".parse::<Gravity>(), Ok(Gravity::TOP));
        assert_eq!("left|center_horizontal".parse::<Gravity>(), Ok(Gravity::LEFT));
        assert_eq!("center_vertical|bottom".parse::<Gravity>(), Ok(Gravity::BOTTOM));
        assert_eq!(
            "end|center".parse::<Gravity>().map(|g| g.apply(32, 16, &BOUNDS, LayoutDirection::Rtl)),
            Ok(Rect::new(0, 24, 32, 40))
        );
    }

    #[test]
    fn extreme_container_does_not_overflow() {
        let container = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let r = Gravity::CENTER.apply_absolute(10, 10, &container);
        assert!(container.contains(&r));
        assert_eq!(r.width(), 10);

        let r = Gravity::RIGHT.apply_absolute(i32::MAX, 4, &Rect::new(i32::MIN, 0, 0, 4));
        assert_eq!(r, Rect::new(i32::MIN + 1, 0, 0, 4));
    }

    #[test]
    fn parse_rejects_bad_flags() {
        assert!(matches!(
            "left|right".parse::<Gravity>(),
            Err(BadgeError::InvalidGravity { .. })
        ));
        assert!(matches!(
            "top|sideways".parse::<Gravity>(),
            Err(BadgeError::InvalidGravity { .. })
        ));
        assert!(matches!("".parse::<Gravity>(), Err(BadgeError::InvalidGravity { .. })));
        assert!(matches!("top||left".parse::<Gravity>(), Err(BadgeError::InvalidGravity { .. })));
    }

    #[test]
    fn display_parses_back() {
        let samples = [
            Gravity::NONE,
            Gravity::FILL,
            Gravity::END,
            Gravity::new(VerticalGravity::Bottom, HorizontalGravity::Start),
            Gravity::new(VerticalGravity::Fill, HorizontalGravity::Left).with_clip(false, true),
            Gravity::TOP.with_clip(true, true),
        ];
        for g in samples {
            assert_eq!(g.to_string().parse::<Gravity>(), Ok(g), "round trip of {g}");
        }
        assert_eq!(Gravity::END.to_string(), "end|center_vertical");
    }
}

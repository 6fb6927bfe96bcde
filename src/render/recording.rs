//! A [`Canvas`] that records paint calls instead of rasterizing them.
//!
//! Useful as a display list: draw once, inspect or replay the commands onto
//! another canvas later.

use std::fmt;

use super::Canvas;
use crate::geometry::{Rect, RectF};

/// One recorded paint call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<P> {
    Oval { oval: RectF, paint: P },
    Rect { rect: Rect, paint: P },
    RoundRect { rect: RectF, rx: f32, ry: f32, paint: P },
}

impl<P> DrawCommand<P> {
    pub fn paint(&self) -> &P {
        match self {
            DrawCommand::Oval { paint, .. }
            | DrawCommand::Rect { paint, .. }
            | DrawCommand::RoundRect { paint, .. } => paint,
        }
    }

    /// Issue this command against `canvas`
    pub fn replay<C: Canvas<Paint = P>>(&self, canvas: &mut C) {
        match self {
            DrawCommand::Oval { oval, paint } => canvas.draw_oval(*oval, paint),
            DrawCommand::Rect { rect, paint } => canvas.draw_rect(*rect, paint),
            DrawCommand::RoundRect { rect, rx, ry, paint } => {
                canvas.draw_round_rect(*rect, *rx, *ry, paint)
            }
        }
    }
}

impl<P: fmt::Display> fmt::Display for DrawCommand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Oval { oval, paint } => write!(f, "oval {oval} {paint}"),
            DrawCommand::Rect { rect, paint } => write!(f, "rect {rect} {paint}"),
            DrawCommand::RoundRect { rect, rx, ry, paint } => {
                write!(f, "round_rect {rect} rx={rx} ry={ry} {paint}")
            }
        }
    }
}

/// Canvas that keeps every paint call, in order
#[derive(Debug, Clone)]
pub struct RecordingCanvas<P> {
    commands: Vec<DrawCommand<P>>,
}

impl<P> Default for RecordingCanvas<P> {
    fn default() -> Self {
        RecordingCanvas { commands: Vec::new() }
    }
}

impl<P> RecordingCanvas<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand<P>] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand<P>> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay every recorded command onto `canvas`
    pub fn replay<C: Canvas<Paint = P>>(&self, canvas: &mut C) {
        for command in &self.commands {
            command.replay(canvas);
        }
    }
}

impl<P: fmt::Display> fmt::Display for RecordingCanvas<P> {
    /// One command per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl<P: Clone> Canvas for RecordingCanvas<P> {
    type Paint = P;

    fn draw_oval(&mut self, oval: RectF, paint: &P) {
        self.commands.push(DrawCommand::Oval {
            oval,
            paint: paint.clone(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &P) {
        self.commands.push(DrawCommand::Rect {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: &P) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            rx,
            ry,
            paint: paint.clone(),
        });
    }
}

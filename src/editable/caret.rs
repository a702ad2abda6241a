//! Caret: a logical (line, column) position and its pixel rectangle.
//!
//! The logical position is the source of truth. The rectangle is a cached
//! projection recomputed from the position and per-character glyph widths
//! on every move; the only exception is [`Caret::advance`], which shifts
//! the rectangle by the width of a just-inserted character and lands on
//! the same value a full recompute would.
//!
//! Both pixel-direction transforms are explicit, named functions:
//! [`Caret::set_logical`] resolves a requested logical position (applying
//! the line-wrap rules) and projects it to pixels; [`Caret::pixel_to_logical`]
//! reverses that projection by walking character widths. Mouse placement
//! goes through [`Caret::position_from_point`], which snaps a pixel point
//! to the nearest column boundary by midpoint hit-testing.

use crate::config::WidgetConfig;
use crate::editable::buffer::LineBuffer;
use crate::metrics::TextMetrics;

/// A position in the buffer (line and column, both 0-indexed).
///
/// Column may equal the line length: the caret sits after the last
/// character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// The caret's pixel rectangle, relative to the widget origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Caret state: logical position plus derived pixel rectangle.
#[derive(Debug, Clone)]
pub struct Caret {
    pos: Position,
    rect: CursorRect,
}

impl Caret {
    /// Creates a caret at the buffer origin.
    pub fn new<M: TextMetrics>(metrics: &M, config: &WidgetConfig) -> Self {
        Self {
            pos: Position::zero(),
            rect: CursorRect {
                x: config.x_margin,
                y: config.y_margin,
                width: config.cursor_width(),
                // Line height also serves as the row divisor in the
                // reverse transforms, so it must be positive.
                height: metrics.line_height().max(1),
            },
        }
    }

    /// The caret's logical position.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The caret's pixel rectangle.
    pub fn rect(&self) -> CursorRect {
        self.rect
    }

    /// Moves the caret to a requested (column, line), resolving the
    /// wrap rules, and reprojects the rectangle.
    ///
    /// - A negative column wraps to the end of the previous line; if that
    ///   leaves no line, the move is rejected.
    /// - A negative line is rejected.
    /// - A column past the line's end wraps to the start of the next
    ///   line; if there is no next line, the move is rejected.
    ///
    /// Rejected moves leave position and rectangle untouched and return
    /// `false`. These are expected boundary hits, never errors.
    pub fn set_logical<M: TextMetrics>(
        &mut self,
        column: isize,
        line: isize,
        buffer: &LineBuffer,
        metrics: &M,
        config: &WidgetConfig,
    ) -> bool {
        let mut line = line;
        // Negative column means "end of the previous line".
        let requested = if column < 0 {
            line -= 1;
            None
        } else {
            Some(column as usize)
        };

        if line < 0 {
            tracing::trace!("move above first line rejected");
            return false;
        }
        let mut line = line as usize;
        if line >= buffer.line_count() {
            tracing::trace!(line, "move past last line rejected");
            return false;
        }

        let column = match requested {
            None => buffer.line_len(line),
            Some(column) if column > buffer.line_len(line) => {
                // Past the end of the line: wrap to the next line's start.
                line += 1;
                if line >= buffer.line_count() {
                    tracing::trace!(line, "wrap past last line rejected");
                    return false;
                }
                0
            }
            Some(column) => column,
        };

        self.pos = Position::new(line, column);
        self.refresh_rect(buffer, metrics, config);
        true
    }

    /// Fast path for character insertion: the new character's width is
    /// known, so the rectangle shifts right by exactly that much and the
    /// column advances by one. Equal by construction to a full
    /// reprojection of the new position.
    pub fn advance(&mut self, width: i32) {
        self.pos.column += 1;
        self.rect.x += width;
    }

    /// Reprojects the rectangle from the logical position: x is the left
    /// margin plus the widths of every character before the column, y is
    /// the line index times the line height plus the top margin.
    fn refresh_rect<M: TextMetrics>(
        &mut self,
        buffer: &LineBuffer,
        metrics: &M,
        config: &WidgetConfig,
    ) {
        let chars = buffer.line(self.pos.line).unwrap_or(&[]);
        let prefix: i32 = chars[..self.pos.column]
            .iter()
            .map(|&ch| metrics.char_width(ch))
            .sum();
        self.rect.x = config.x_margin + prefix;
        self.rect.y = config.y_margin + self.pos.line as i32 * self.rect.height;
    }

    /// Derives a logical position back out of the pixel rectangle.
    ///
    /// Walks the line's characters accumulating widths; the column is the
    /// one whose running width sum equals the rectangle's x offset
    /// exactly. When no sum matches (integer pixel arithmetic can leave
    /// gaps), the result falls back to column 0 of the line. The fallback
    /// is long-standing behavior relied on by callers and is covered by
    /// regression tests; it also happens to be the exact answer for a
    /// caret at the start of a line, where the prefix sum is empty.
    pub fn pixel_to_logical<M: TextMetrics>(
        &self,
        buffer: &LineBuffer,
        metrics: &M,
        config: &WidgetConfig,
    ) -> Position {
        let x = self.rect.x - config.x_margin;
        let y = self.rect.y - config.y_margin;
        let line = (y / self.rect.height) as usize;
        let chars = buffer.line(line).unwrap_or(&[]);

        let mut width_sum = 0;
        for (index, &ch) in chars.iter().enumerate() {
            width_sum += metrics.char_width(ch);
            if width_sum == x {
                return Position::new(line, index + 1);
            }
        }
        Position::new(line, 0)
    }

    /// Maps a widget-relative pixel point to the closest buffer position,
    /// for mouse placement.
    ///
    /// The line index is the point's y divided by the line height,
    /// clamped into the buffer. Within the line, the walk visits the
    /// midpoint boundary between each adjacent character pair,
    /// accumulating the rounded sum of their half-widths; the first
    /// boundary range containing x wins. A point past every boundary
    /// lands after the last character, and an empty line always answers
    /// column 0.
    pub fn position_from_point<M: TextMetrics>(
        &self,
        x: i32,
        y: i32,
        buffer: &LineBuffer,
        metrics: &M,
        config: &WidgetConfig,
    ) -> Position {
        let x = x - config.x_margin;
        let y = y - config.y_margin;

        let last_line = buffer.line_count() - 1;
        let line = if y < 0 {
            0
        } else {
            ((y / self.rect.height) as usize).min(last_line)
        };

        let chars = buffer.line(line).unwrap_or(&[]);
        let Some(&first) = chars.first() else {
            return Position::new(line, 0);
        };

        // Left half of the first character keeps the caret at column 0.
        let mut boundary = metrics.char_width(first) / 2;
        if x <= boundary {
            return Position::new(line, 0);
        }

        for (index, pair) in chars.windows(2).enumerate() {
            let half_sum = (metrics.char_width(pair[0]) as f64 / 2.0
                + metrics.char_width(pair[1]) as f64 / 2.0)
                .round() as i32;
            if (boundary..=boundary + half_sum).contains(&x) {
                return Position::new(line, index + 1);
            }
            boundary += half_sum;
        }

        // Past every midpoint boundary: append position.
        Position::new(line, chars.len())
    }
}

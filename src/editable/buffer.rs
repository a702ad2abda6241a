//! Line-oriented text storage.
//!
//! The buffer is an ordered list of lines, each an ordered list of single
//! code points. There is no flat-offset view: everything addresses text as
//! (line, column), which is the coordinate system the caret works in.
//!
//! The buffer always contains at least one line, even when empty. Length
//! queries tolerate out-of-range lines by answering 0, which lets the
//! cursor arithmetic probe neighboring lines without special-casing the
//! buffer edges.

use crate::error::EditError;

/// A text buffer holding lines of single code points.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<Vec<char>>,
}

impl LineBuffer {
    /// Creates a buffer with a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Creates a buffer from text, splitting on `\n`.
    ///
    /// Empty input yields one empty line; a trailing newline yields a
    /// trailing empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|line| line.chars().collect()).collect(),
        }
    }

    // ==================== Accessors ====================

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in characters, or 0 for out-of-range lines.
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, Vec::len)
    }

    /// The characters of a line, or `None` for out-of-range lines.
    pub fn line(&self, line: usize) -> Option<&[char]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    /// A line's content as a `String`; empty for out-of-range lines.
    pub fn line_text(&self, line: usize) -> String {
        self.lines
            .get(line)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    /// Full content with lines joined by `\n`.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }

    /// True when the buffer holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    // ==================== Mutations ====================

    /// Inserts `ch` at (line, column).
    ///
    /// Column may equal the line length (append). Any other out-of-range
    /// address is a programmer error and is reported as `OutOfRange`.
    pub fn insert_char(
        &mut self,
        line: usize,
        column: usize,
        ch: char,
    ) -> Result<(), EditError> {
        let target = self
            .lines
            .get_mut(line)
            .ok_or(EditError::OutOfRange { line, column })?;
        if column > target.len() {
            return Err(EditError::OutOfRange { line, column });
        }
        target.insert(column, ch);
        Ok(())
    }

    /// Splits `line` at `column`: the suffix from `column` becomes a new
    /// line at `line + 1`, and `line` keeps the prefix.
    pub fn split_line(&mut self, line: usize, column: usize) -> Result<(), EditError> {
        let target = self
            .lines
            .get_mut(line)
            .ok_or(EditError::OutOfRange { line, column })?;
        if column > target.len() {
            return Err(EditError::OutOfRange { line, column });
        }
        let suffix = target.split_off(column);
        self.lines.insert(line + 1, suffix);
        Ok(())
    }

    /// Appends line `line + 1` onto `line` and removes it.
    ///
    /// Returns `false` when there is no next line to join; this is a
    /// reported no-op, not a failure.
    pub fn join_line_with_next(&mut self, line: usize) -> bool {
        if line + 1 >= self.lines.len() {
            tracing::trace!(line, "join past last line ignored");
            return false;
        }
        let next = self.lines.remove(line + 1);
        self.lines[line].extend(next);
        true
    }

    /// Deletes the character at (line, column).
    ///
    /// When `column` is at or past the end of the line, joins the line
    /// with the next one instead (forward-delete merges lines). Returns
    /// whether anything changed.
    pub fn delete_char(&mut self, line: usize, column: usize) -> bool {
        let Some(target) = self.lines.get_mut(line) else {
            tracing::trace!(line, column, "delete outside buffer ignored");
            return false;
        };
        if column < target.len() {
            target.remove(column);
            true
        } else {
            self.join_line_with_next(line)
        }
    }
}

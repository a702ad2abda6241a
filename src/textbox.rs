//! The frame-driven widget core.
//!
//! `TextBox` owns the buffer, the caret, and the repeat controller, and
//! is driven once per rendered frame: the host hands it the frame's
//! ordered input events plus the elapsed milliseconds, and afterwards
//! queries lines, display runs, and the caret rectangle to draw.
//!
//! Within one tick the order is fixed: every queued event is applied
//! first, then the repeat controller advances and replays at most one
//! held action. Rendering queries always observe the fully updated
//! state.
//!
//! Every edit mutates the buffer first and repositions the caret second.
//! Boundary hits (backspace at the buffer start, delete at the end,
//! moves off the edges) are silent no-ops; the widget never surfaces an
//! error to the host.

use crate::config::WidgetConfig;
use crate::editable::{Caret, CursorRect, LineBuffer, Position};
use crate::event::{InputEvent, Key, MouseButton};
use crate::highlight::{display_runs, Run};
use crate::messages::{Direction, EditKind, EditMsg};
use crate::metrics::TextMetrics;
use crate::repeat::{KeyRepeat, RepeatTable};
use crate::theme::ColorConfig;

/// Key-to-action bindings. The armed set of a repeating action is every
/// key bound to the same action kind, which makes the four arrows one
/// group: releasing any arrow stops an armed movement.
const KEY_BINDINGS: &[(Key, EditMsg)] = &[
    (Key::Return, EditMsg::Newline),
    (Key::Backspace, EditMsg::Backspace),
    (Key::Delete, EditMsg::DeleteForward),
    (Key::Tab, EditMsg::InsertTab),
    (Key::Up, EditMsg::Move(Direction::Up)),
    (Key::Down, EditMsg::Move(Direction::Down)),
    (Key::Left, EditMsg::Move(Direction::Left)),
    (Key::Right, EditMsg::Move(Direction::Right)),
];

fn message_for_key(key: Key) -> Option<EditMsg> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, msg)| *msg)
}

fn keys_for_kind(kind: EditKind) -> Vec<Key> {
    KEY_BINDINGS
        .iter()
        .filter(|(_, msg)| msg.kind() == kind)
        .map(|(key, _)| *key)
        .collect()
}

/// A multi-line text-input widget core.
///
/// Generic over the host's glyph measurement; widget instances are
/// independent and may share one metrics provider and one color config.
#[derive(Debug)]
pub struct TextBox<M: TextMetrics> {
    buffer: LineBuffer,
    caret: Caret,
    repeat: KeyRepeat,
    repeat_table: RepeatTable,
    colors: ColorConfig,
    config: WidgetConfig,
    metrics: M,
    /// Monotonic clock in milliseconds, advanced by each tick's elapsed
    /// time. Arming timestamps and repeat timing both read it.
    clock_ms: u64,
}

impl<M: TextMetrics> TextBox<M> {
    /// Creates an empty widget with the default configuration.
    pub fn new(metrics: M, colors: ColorConfig) -> Self {
        Self::with_config(metrics, colors, WidgetConfig::default())
    }

    /// Creates an empty widget with an explicit configuration.
    pub fn with_config(metrics: M, colors: ColorConfig, config: WidgetConfig) -> Self {
        let caret = Caret::new(&metrics, &config);
        Self {
            buffer: LineBuffer::new(),
            caret,
            repeat: KeyRepeat::new(),
            repeat_table: RepeatTable::default(),
            colors,
            config,
            metrics,
            clock_ms: 0,
        }
    }

    // ==================== Frame driving ====================

    /// Advances the widget by one frame.
    ///
    /// Applies `events` in order, then advances the repeat controller by
    /// `elapsed_ms` and replays at most one held action.
    pub fn tick(&mut self, events: &[InputEvent], elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);

        for event in events {
            self.handle_event(event);
        }

        // Text mutation precedes repeat advancement within a tick.
        if let Some(msg) = self.repeat.tick(self.clock_ms, elapsed_ms) {
            self.apply(msg);
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::TextInput(text) => self.insert_text(text),
            InputEvent::KeyDown(key) => {
                let Some(msg) = message_for_key(*key) else {
                    return;
                };
                self.apply(msg);
                // A repeatable action arms the controller as it fires,
                // replacing whatever was armed before.
                if let Some(timing) = self.repeat_table.timing(msg.kind()) {
                    self.repeat
                        .arm(keys_for_kind(msg.kind()), msg, timing, self.clock_ms);
                }
            }
            InputEvent::KeyUp(key) => {
                if let Err(err) = self.repeat.release(*key) {
                    tracing::trace!(?key, %err, "key release ignored");
                }
            }
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                let pos =
                    self.caret
                        .position_from_point(*x, *y, &self.buffer, &self.metrics, &self.config);
                self.caret.set_logical(
                    pos.column as isize,
                    pos.line as isize,
                    &self.buffer,
                    &self.metrics,
                    &self.config,
                );
            }
            InputEvent::MouseDown { .. } => {}
        }
    }

    /// Applies one edit action.
    pub fn apply(&mut self, msg: EditMsg) {
        tracing::trace!(?msg, "apply");
        match msg {
            EditMsg::Newline => self.newline(),
            EditMsg::Backspace => self.backspace(),
            EditMsg::DeleteForward => self.delete_forward(),
            EditMsg::InsertTab => self.insert_tab(),
            EditMsg::Move(direction) => self.move_caret(direction),
        }
    }

    /// Inserts committed text at the caret, one code point at a time.
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.write(ch);
        }
    }

    // ==================== Edits ====================

    fn write(&mut self, ch: char) {
        let width = self.metrics.char_width(ch);
        let Position { line, column } = self.caret.position();
        if let Err(err) = self.buffer.insert_char(line, column, ch) {
            tracing::warn!(%err, "insert rejected");
            return;
        }
        self.caret.advance(width);
    }

    fn newline(&mut self) {
        let Position { line, column } = self.caret.position();
        if let Err(err) = self.buffer.split_line(line, column) {
            tracing::warn!(%err, "newline rejected");
            return;
        }
        self.caret.set_logical(
            0,
            line as isize + 1,
            &self.buffer,
            &self.metrics,
            &self.config,
        );
    }

    fn backspace(&mut self) {
        let before = self.caret.position();
        self.caret.set_logical(
            before.column as isize - 1,
            before.line as isize,
            &self.buffer,
            &self.metrics,
            &self.config,
        );
        let after = self.caret.position();
        // Only delete when the move actually went somewhere; at the very
        // start of the buffer the caret stays and nothing is removed.
        if after != before {
            self.buffer.delete_char(after.line, after.column);
        }
    }

    fn delete_forward(&mut self) {
        let Position { line, column } = self.caret.position();
        if !self.buffer.delete_char(line, column) {
            tracing::trace!("delete at buffer end ignored");
        }
    }

    fn insert_tab(&mut self) {
        for _ in 0..self.config.tab_width {
            self.write(' ');
        }
    }

    fn move_caret(&mut self, direction: Direction) {
        let Position { line, column } = self.caret.position();
        let (target_column, target_line) = match direction {
            // Vertical moves clamp the column into the destination line;
            // horizontal moves let the caret wrap across line ends.
            Direction::Up => {
                let target = line as isize - 1;
                (self.clamped_column(column, target), target)
            }
            Direction::Down => {
                let target = line as isize + 1;
                (self.clamped_column(column, target), target)
            }
            Direction::Left => (column as isize - 1, line as isize),
            Direction::Right => (column as isize + 1, line as isize),
        };
        self.caret.set_logical(
            target_column,
            target_line,
            &self.buffer,
            &self.metrics,
            &self.config,
        );
    }

    fn clamped_column(&self, column: usize, line: isize) -> isize {
        let len = if line < 0 {
            0
        } else {
            self.buffer.line_len(line as usize)
        };
        column.min(len) as isize
    }

    // ==================== State access ====================

    /// Replaces the content and resets the caret to the origin.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = LineBuffer::from_text(text);
        self.caret = Caret::new(&self.metrics, &self.config);
    }

    /// Places the caret at (column, line), applying the wrap rules.
    /// Returns whether the move was accepted.
    pub fn place_caret(&mut self, column: usize, line: usize) -> bool {
        self.caret.set_logical(
            column as isize,
            line as isize,
            &self.buffer,
            &self.metrics,
            &self.config,
        )
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line_text(&self, line: usize) -> String {
        self.buffer.line_text(line)
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// The caret's logical position.
    pub fn position(&self) -> Position {
        self.caret.position()
    }

    /// The caret's pixel rectangle, for drawing.
    pub fn cursor_rect(&self) -> CursorRect {
        self.caret.rect()
    }

    /// Colored display runs for one line, rebuilt on every call.
    /// The host measures each run via its metrics to place it.
    pub fn display_runs(&self, line: usize) -> Vec<Run> {
        display_runs(&self.buffer.line_text(line), &self.colors)
    }

    /// True while a held key has an action armed.
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_armed()
    }

    /// The repeat-configuration table, for per-action timing overrides.
    pub fn repeat_table_mut(&mut self) -> &mut RepeatTable {
        &mut self.repeat_table
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn colors(&self) -> &ColorConfig {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn test_box() -> TextBox<MonospaceMetrics> {
        TextBox::new(MonospaceMetrics::new(8, 16), ColorConfig::default())
    }

    #[test]
    fn test_key_bindings_cover_editing_keys() {
        assert_eq!(message_for_key(Key::Return), Some(EditMsg::Newline));
        assert_eq!(message_for_key(Key::Backspace), Some(EditMsg::Backspace));
        assert_eq!(message_for_key(Key::Delete), Some(EditMsg::DeleteForward));
        assert_eq!(message_for_key(Key::Tab), Some(EditMsg::InsertTab));
        assert_eq!(message_for_key(Key::Escape), None);
        assert_eq!(message_for_key(Key::Char('a')), None);
    }

    #[test]
    fn test_arrow_keys_form_one_armed_group() {
        let keys = keys_for_kind(EditKind::Move);
        assert_eq!(keys, vec![Key::Up, Key::Down, Key::Left, Key::Right]);
        assert_eq!(keys_for_kind(EditKind::Backspace), vec![Key::Backspace]);
    }

    #[test]
    fn test_write_advances_caret_by_width() {
        let mut widget = test_box();
        widget.insert_text("ab");

        assert_eq!(widget.content(), "ab");
        assert_eq!(widget.position(), Position::new(0, 2));
        assert_eq!(widget.cursor_rect().x, 5 + 2 * 8);
    }

    #[test]
    fn test_newline_moves_to_next_line_start() {
        let mut widget = test_box();
        widget.insert_text("ab");
        widget.apply(EditMsg::Newline);

        assert_eq!(widget.line_count(), 2);
        assert_eq!(widget.position(), Position::new(1, 0));
        assert_eq!(widget.cursor_rect().x, 5);
        assert_eq!(widget.cursor_rect().y, 5 + 16);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut widget = test_box();
        widget.apply(EditMsg::Backspace);

        assert_eq!(widget.content(), "");
        assert_eq!(widget.position(), Position::zero());
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut widget = test_box();
        widget.set_text("ab\ncd");
        widget.place_caret(0, 1);
        widget.apply(EditMsg::Backspace);

        assert_eq!(widget.content(), "abcd");
        assert_eq!(widget.position(), Position::new(0, 2));
    }

    #[test]
    fn test_tab_inserts_configured_spaces() {
        let mut widget = test_box();
        widget.apply(EditMsg::InsertTab);

        assert_eq!(widget.content(), "    ");
        assert_eq!(widget.position(), Position::new(0, 4));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut widget = test_box();
        widget.tick(
            &[
                InputEvent::KeyDown(Key::Escape),
                InputEvent::KeyDown(Key::Char('q')),
            ],
            16,
        );

        assert_eq!(widget.content(), "");
        assert!(!widget.is_repeating());
    }

    #[test]
    fn test_non_left_mouse_buttons_are_ignored() {
        let mut widget = test_box();
        widget.set_text("hello");
        widget.place_caret(5, 0);
        widget.tick(
            &[InputEvent::MouseDown {
                button: MouseButton::Right,
                x: 5,
                y: 5,
            }],
            16,
        );

        assert_eq!(widget.position(), Position::new(0, 5));
    }
}

//! Cursor model tests - movement, wrapping, and the pixel transforms

mod common;

use common::{tap, test_box_with, ADVANCE, LINE_HEIGHT};
use quill::{Caret, Key, LineBuffer, MonospaceMetrics, Position, WidgetConfig};

fn fixture() -> (MonospaceMetrics, WidgetConfig) {
    (
        MonospaceMetrics::new(ADVANCE, LINE_HEIGHT),
        WidgetConfig::default(),
    )
}

// ========================================================================
// Vertical movement
// ========================================================================

#[test]
fn test_up_keeps_column_when_line_is_long_enough() {
    // From (line 1, column 1) onto a two-character line 0.
    let mut widget = test_box_with("ab\nc", 1, 1);
    tap(&mut widget, Key::Up);

    assert_eq!(widget.position(), Position::new(0, 1));
}

#[test]
fn test_up_clamps_column_to_shorter_line() {
    let mut widget = test_box_with("ab\nlonger", 1, 6);
    tap(&mut widget, Key::Up);

    assert_eq!(widget.position(), Position::new(0, 2));
}

#[test]
fn test_up_from_first_line_is_noop() {
    let mut widget = test_box_with("hello", 0, 3);
    tap(&mut widget, Key::Up);

    assert_eq!(widget.position(), Position::new(0, 3));
}

#[test]
fn test_down_clamps_column_to_shorter_line() {
    let mut widget = test_box_with("longer\nab", 0, 6);
    tap(&mut widget, Key::Down);

    assert_eq!(widget.position(), Position::new(1, 2));
}

#[test]
fn test_down_from_last_line_is_noop() {
    let mut widget = test_box_with("hello", 0, 3);
    tap(&mut widget, Key::Down);

    assert_eq!(widget.position(), Position::new(0, 3));
}

// ========================================================================
// Horizontal movement
// ========================================================================

#[test]
fn test_left_wraps_to_previous_line_end() {
    let mut widget = test_box_with("ab\ncd", 1, 0);
    tap(&mut widget, Key::Left);

    assert_eq!(widget.position(), Position::new(0, 2));
}

#[test]
fn test_left_at_buffer_start_is_noop() {
    let mut widget = test_box_with("ab\ncd", 0, 0);
    tap(&mut widget, Key::Left);

    assert_eq!(widget.position(), Position::zero());
}

#[test]
fn test_right_wraps_to_next_line_start() {
    let mut widget = test_box_with("ab\ncd", 0, 2);
    tap(&mut widget, Key::Right);

    assert_eq!(widget.position(), Position::new(1, 0));
}

#[test]
fn test_right_at_buffer_end_is_noop() {
    let mut widget = test_box_with("ab\ncd", 1, 2);
    tap(&mut widget, Key::Right);

    assert_eq!(widget.position(), Position::new(1, 2));
}

// ========================================================================
// Pixel transforms
// ========================================================================

#[test]
fn test_logical_pixel_round_trip_across_reachable_positions() {
    let (metrics, config) = fixture();
    let buffer = LineBuffer::from_text("hello\n\nwide line here");

    for line in 0..buffer.line_count() {
        for column in 0..=buffer.line_len(line) {
            let mut caret = Caret::new(&metrics, &config);
            assert!(caret.set_logical(
                column as isize,
                line as isize,
                &buffer,
                &metrics,
                &config
            ));
            assert_eq!(
                caret.pixel_to_logical(&buffer, &metrics, &config),
                Position::new(line, column),
                "round trip failed at ({column}, {line})"
            );
        }
    }
}

#[test]
fn test_position_from_point_is_idempotent() {
    let (metrics, config) = fixture();
    let buffer = LineBuffer::from_text("hello\nworld");
    let caret = Caret::new(&metrics, &config);

    for x in (0..120).step_by(3) {
        for y in (0..60).step_by(7) {
            let first = caret.position_from_point(x, y, &buffer, &metrics, &config);
            let second = caret.position_from_point(x, y, &buffer, &metrics, &config);
            assert_eq!(first, second, "pixel lookup diverged at ({x}, {y})");
        }
    }
}

#[test]
fn test_caret_rect_tracks_position_through_edits() {
    let mut widget = test_box_with("ab\ncd", 0, 0);
    tap(&mut widget, Key::Down);
    tap(&mut widget, Key::Right);

    let rect = widget.cursor_rect();
    assert_eq!(rect.x, 5 + ADVANCE);
    assert_eq!(rect.y, 5 + LINE_HEIGHT);
    assert_eq!(rect.height, LINE_HEIGHT);
}

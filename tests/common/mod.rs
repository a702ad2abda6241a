//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::{ColorConfig, InputEvent, Key, MonospaceMetrics, TextBox, WidgetConfig};

/// Character advance used by the test metrics, in pixels.
pub const ADVANCE: i32 = 8;
/// Line height used by the test metrics, in pixels.
pub const LINE_HEIGHT: i32 = 16;

/// Create an empty widget with deterministic monospace metrics.
pub fn test_box() -> TextBox<MonospaceMetrics> {
    TextBox::new(
        MonospaceMetrics::new(ADVANCE, LINE_HEIGHT),
        ColorConfig::builtin().expect("builtin color config"),
    )
}

/// Create a widget with given text and caret position.
pub fn test_box_with(text: &str, line: usize, column: usize) -> TextBox<MonospaceMetrics> {
    let mut widget = test_box();
    widget.set_text(text);
    assert!(
        widget.place_caret(column, line),
        "caret placement ({column}, {line}) rejected for {text:?}"
    );
    widget
}

/// Create a widget with an explicit configuration.
pub fn test_box_with_config(config: WidgetConfig) -> TextBox<MonospaceMetrics> {
    TextBox::with_config(
        MonospaceMetrics::new(ADVANCE, LINE_HEIGHT),
        ColorConfig::builtin().expect("builtin color config"),
        config,
    )
}

/// Press and release a key within a single tick.
pub fn tap(widget: &mut TextBox<MonospaceMetrics>, key: Key) {
    widget.tick(&[InputEvent::KeyDown(key), InputEvent::KeyUp(key)], 1);
}

/// The buffer's lines as strings.
pub fn lines(widget: &TextBox<MonospaceMetrics>) -> Vec<String> {
    (0..widget.line_count())
        .map(|line| widget.line_text(line))
        .collect()
}

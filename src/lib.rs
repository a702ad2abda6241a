//! quill - editing core for a multi-line text-input widget
//!
//! This crate provides the state and logic a text-input widget needs
//! between the event source and the renderer: a line-oriented buffer, a
//! caret that maps between logical (line, column) positions and pixel
//! coordinates, a key-repeat controller for held keys, and a word
//! tokenizer that turns lines into colored display runs.
//!
//! The host owns the window, the font engine, and the frame loop. It
//! implements [`TextMetrics`] over its font engine, translates its native
//! events into [`InputEvent`] values, and calls [`TextBox::tick`] once
//! per frame with the frame's events and elapsed time; afterwards it
//! queries lines, display runs, and the caret rectangle to draw.

pub mod config;
pub mod editable;
pub mod error;
pub mod event;
pub mod highlight;
pub mod messages;
pub mod metrics;
pub mod repeat;
pub mod textbox;
pub mod theme;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use editable::{Caret, CursorRect, LineBuffer, Position};
pub use error::EditError;
pub use event::{InputEvent, Key, MouseButton};
pub use highlight::{display_runs, tokenize, CharClass, Run, Token};
pub use messages::{Direction, EditKind, EditMsg};
pub use metrics::{MonospaceMetrics, TextMetrics};
pub use repeat::{KeyRepeat, RepeatTable, RepeatTiming};
pub use textbox::TextBox;
pub use theme::{Color, ColorConfig, ColorPair};

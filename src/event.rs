//! Input event types delivered by the host event source.
//!
//! These types abstract over the windowing toolkit's native events and keep
//! the editing core toolkit-free. The host translates its own keyboard,
//! text, and mouse events into this form and hands the widget an ordered
//! batch once per frame.

/// Keys that can be pressed.
///
/// Printable input arrives through [`InputEvent::TextInput`]; the `Char`
/// variant exists so hosts can forward character key-downs they do not
/// translate themselves. Only the named editing and navigation keys are
/// bound to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key (already accounts for shift state)
    Char(char),
    /// Backspace / delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Escape key
    Escape,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A discrete input event, delivered in order within a frame's batch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Committed text from the platform's input method.
    TextInput(String),
    /// A key was pressed.
    KeyDown(Key),
    /// A key was released.
    KeyUp(Key),
    /// A mouse button was pressed at the given widget-relative position.
    MouseDown { button: MouseButton, x: i32, y: i32 },
}

impl InputEvent {
    /// Convenience constructor for a left-button press.
    pub fn click(x: i32, y: i32) -> Self {
        Self::MouseDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    /// Convenience constructor for committed text.
    pub fn text(s: &str) -> Self {
        Self::TextInput(s.to_string())
    }
}

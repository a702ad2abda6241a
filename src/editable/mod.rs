//! Text editing state for the widget core.
//!
//! The two components here hold everything the widget mutates:
//!
//! - [`LineBuffer`]: lines of single code points with insert, split,
//!   join, and delete operations
//! - [`Caret`]: the logical (line, column) position and its derived
//!   pixel rectangle, with the logical↔pixel transforms

mod buffer;
mod caret;

pub use buffer::LineBuffer;
pub use caret::{Caret, CursorRect, Position};

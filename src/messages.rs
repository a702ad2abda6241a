//! Edit action identifiers.
//!
//! Key-downs are translated into these messages before being applied, and
//! the same values are stored by the repeat controller so a held key can
//! replay its action without capturing closures.

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An edit action dispatched from a key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMsg {
    /// Split the current line at the caret (Return)
    Newline,
    /// Delete the character before the caret (Backspace)
    Backspace,
    /// Delete the character at the caret (Delete)
    DeleteForward,
    /// Insert a tab's worth of spaces (Tab)
    InsertTab,
    /// Move the caret one step in a direction (arrow keys)
    Move(Direction),
}

/// Payload-free identifier for an [`EditMsg`], used as the lookup key in
/// the repeat-configuration table. All four arrow movements share one kind
/// so the arrows arm as a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Newline,
    Backspace,
    DeleteForward,
    InsertTab,
    Move,
}

impl EditMsg {
    pub fn kind(&self) -> EditKind {
        match self {
            EditMsg::Newline => EditKind::Newline,
            EditMsg::Backspace => EditKind::Backspace,
            EditMsg::DeleteForward => EditKind::DeleteForward,
            EditMsg::InsertTab => EditKind::InsertTab,
            EditMsg::Move(_) => EditKind::Move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moves_share_one_kind() {
        assert_eq!(EditMsg::Move(Direction::Up).kind(), EditKind::Move);
        assert_eq!(EditMsg::Move(Direction::Left).kind(), EditKind::Move);
        assert_ne!(EditMsg::Backspace.kind(), EditKind::Move);
    }
}

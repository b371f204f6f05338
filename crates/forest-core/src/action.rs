//! The four movement actions.

use std::fmt;

/// Cardinal direction the agent can attempt to move in.
///
/// The discriminant order (`Up`, `Right`, `Down`, `Left`) is the canonical
/// action order: transition distributions, RTDP candidate vectors and
/// sampler weights are all indexed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Action {
    /// Move one cell up (row - 1).
    Up = 0,
    /// Move one cell right (col + 1).
    Right = 1,
    /// Move one cell down (row + 1).
    Down = 2,
    /// Move one cell left (col - 1).
    Left = 3,
}

impl Action {
    /// All actions in canonical order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Number of actions.
    pub const COUNT: usize = 4;

    /// Position of this action in [`Action::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index). Returns `None` for `i >= 4`.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Returns the `(row_offset, col_offset)` for this action.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }

    /// Upper-case label used in run output.
    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "TOP",
            Action::Right => "RIGHT",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

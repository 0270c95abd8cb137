use serde::{Deserialize, Serialize};

/// One of the two sides. X always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// Canonical cell state stored in board snapshots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Taken(mark) => Some(mark),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

//! The [`CellKind`] of a single maze square.

use std::fmt;

/// Classification of a maze cell.
///
/// Each kind has a one-character code, the same code used by the map
/// descriptions the solver is fed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Free floor (`.`).
    #[default]
    Open,
    /// Solid wall (`#`).
    Wall,
    /// A trap (`X`). The mouse never steps on one.
    Trap,
    /// Where the mouse starts (`M`).
    MouseStart,
    /// Where the cat starts (`C`).
    CatStart,
    /// An exit door (`D`, also accepted as `G`).
    Door,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 6] = [
        CellKind::Open,
        CellKind::Wall,
        CellKind::Trap,
        CellKind::MouseStart,
        CellKind::CatStart,
        CellKind::Door,
    ];

    /// Classify a cell code. Returns `None` for characters that are not part
    /// of the map alphabet.
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'X' => Some(Self::Trap),
            'M' => Some(Self::MouseStart),
            'C' => Some(Self::CatStart),
            'D' | 'G' => Some(Self::Door),
            _ => None,
        }
    }

    /// Canonical character code.
    pub const fn code(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Trap => 'X',
            Self::MouseStart => 'M',
            Self::CatStart => 'C',
            Self::Door => 'D',
        }
    }
}

impl TryFrom<char> for CellKind {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, char> {
        Self::from_code(ch).ok_or(ch)
    }
}

impl From<CellKind> for char {
    fn from(kind: CellKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

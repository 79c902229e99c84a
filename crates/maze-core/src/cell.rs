//! The [`CellKind`] type: the static terrain of a maze position.

use crate::error::MazeError;

/// Step cost of Ground, Start and End.
pub const GROUND_COST: i32 = 1;
/// Step cost of Grass.
pub const GRASS_COST: i32 = 3;
/// Step cost of Lava: traversable, but prohibitively expensive.
pub const LAVA_COST: i32 = 1000;

/// Terrain type of a single maze cell.
///
/// The discriminants are the integer codes of the maze text format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum CellKind {
    End = -2,
    Start = -1,
    #[default]
    Ground = 0,
    Wall = 1,
    Grass = 2,
    Lava = 3,
}

impl CellKind {
    /// Every kind, in code order.
    pub const ALL: [CellKind; 6] = [
        CellKind::End,
        CellKind::Start,
        CellKind::Ground,
        CellKind::Wall,
        CellKind::Grass,
        CellKind::Lava,
    ];

    /// Integer code used by the text format.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i8 as i32
    }

    /// Whether a walker may enter this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Cost of stepping *into* this cell, or `None` for walls.
    #[inline]
    pub const fn step_cost(self) -> Option<i32> {
        match self {
            CellKind::Start | CellKind::End | CellKind::Ground => Some(GROUND_COST),
            CellKind::Grass => Some(GRASS_COST),
            CellKind::Lava => Some(LAVA_COST),
            CellKind::Wall => None,
        }
    }

    /// Single-character text representation.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::End => 'E',
            CellKind::Start => 'S',
            CellKind::Ground => '.',
            CellKind::Wall => '#',
            CellKind::Grass => '"',
            CellKind::Lava => '~',
        }
    }
}

impl TryFrom<i32> for CellKind {
    type Error = MazeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(CellKind::End),
            -1 => Ok(CellKind::Start),
            0 => Ok(CellKind::Ground),
            1 => Ok(CellKind::Wall),
            2 => Ok(CellKind::Grass),
            3 => Ok(CellKind::Lava),
            _ => Err(MazeError::UnknownCellCode(code)),
        }
    }
}

impl From<CellKind> for i32 {
    fn from(kind: CellKind) -> Self {
        kind.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in CellKind::ALL {
            assert_eq!(CellKind::try_from(kind.code()).unwrap(), kind);
        }
        assert_eq!(CellKind::End.code(), -2);
        assert_eq!(CellKind::Lava.code(), 3);
    }

    #[test]
    fn unknown_code_rejected() {
        assert!(matches!(
            CellKind::try_from(4),
            Err(MazeError::UnknownCellCode(4))
        ));
        assert!(CellKind::try_from(-3).is_err());
    }

    #[test]
    fn only_walls_block() {
        for kind in CellKind::ALL {
            assert_eq!(kind.is_traversable(), kind != CellKind::Wall);
            assert_eq!(kind.step_cost().is_some(), kind.is_traversable());
        }
    }

    #[test]
    fn terrain_costs() {
        assert_eq!(CellKind::Ground.step_cost(), Some(1));
        assert_eq!(CellKind::End.step_cost(), Some(1));
        assert_eq!(CellKind::Grass.step_cost(), Some(3));
        assert_eq!(CellKind::Lava.step_cost(), Some(1000));
    }
}

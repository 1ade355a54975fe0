//! The two sides of a game.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// Both teams, White first.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row holding this team's non-pawn pieces at setup.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Row holding this team's pawns at setup.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Team::White => 6,
            Team::Black => 1,
        }
    }

    /// Row on which this team's pawns promote: the opponent's back row.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.flip().back_row()
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }

    /// Lowercase team name.
    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }
}

impl Not for Team {
    type Output = Team;

    #[inline]
    fn not(self) -> Team {
        self.flip()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Team;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Team::White.flip(), Team::Black);
        assert_eq!(!Team::Black, Team::White);
        assert_eq!(Team::White.flip().flip(), Team::White);
    }

    #[test]
    fn rows_face_each_other() {
        assert_eq!(Team::White.promotion_row(), Team::Black.back_row());
        assert_eq!(Team::Black.promotion_row(), Team::White.back_row());
        for team in Team::ALL {
            let start = team.back_row() as i8;
            assert_eq!(start + team.pawn_direction(), team.pawn_row() as i8);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Team::White), "white");
        assert_eq!(format!("{}", Team::Black), "black");
    }
}

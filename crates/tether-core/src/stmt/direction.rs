/// Sort direction for an ordering entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Interprets a signed direction: negative values sort descending.
    pub fn from_sign(sign: i64) -> Direction {
        if sign < 0 {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    pub fn sign(self) -> i64 {
        match self {
            Direction::Asc => 1,
            Direction::Desc => -1,
        }
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Direction::Desc)
    }
}

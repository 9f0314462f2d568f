use enum_map::Enum;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` if moving in `other` straight after moving in `self`
    /// would turn the snake back onto its own neck
    pub(crate) fn is_reversal(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

//! The four grid directions shared by the keypad and the walk.

use strum::VariantArray;

/// One step on a square grid.
///
/// Variants are listed clockwise starting from [`Up`](SquareStep::Up), which the walker relies on for turning.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// North on the city grid.
    Up,
    /// East.
    Right,
    /// South.
    Down,
    /// West.
    Left,
}

impl SquareStep {
    /// The `(dx, dy)` this step moves by; `y` grows downward.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Quarter turn clockwise.
    pub fn turn_right(&self) -> Self {
        Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(&self) -> Self {
        Self::VARIANTS[(self.index() + Self::VARIANTS.len() - 1) % Self::VARIANTS.len()]
    }

    fn index(&self) -> usize {
        // VARIANTS is a permutation of all variants, so this always finds one
        Self::VARIANTS.iter().position(|v| v == self).unwrap_or_default()
    }
}

/// Keypad commands are the first letter of each direction.
impl TryFrom<char> for SquareStep {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(other),
        }
    }
}

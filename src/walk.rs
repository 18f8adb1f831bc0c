//! Taxicab walks over the city grid.

use std::collections::HashSet;
use std::num::ParseIntError;
use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

use crate::location::Position;
use crate::shape::SquareStep;

/// Reasons a list of walking instructions may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum WalkError {
    /// The instruction does not start with `R` or `L`.
    #[error("unknown turn in instruction {0:?}")]
    UnknownTurn(String),
    /// The number of blocks after the turn is missing or not a number.
    #[error("bad distance in instruction {instruction:?}: {source}")]
    BadDistance {
        /// The offending instruction.
        instruction: String,
        /// Why the distance did not parse.
        source: ParseIntError,
    },
}

/// Which way to turn before walking.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Turn {
    /// `L`, counter-clockwise.
    Left,
    /// `R`, clockwise.
    Right,
}

/// A single `R2`-style instruction: turn, then walk `blocks` forward.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    /// Applied before walking.
    pub turn: Turn,
    /// How far to walk after turning.
    pub blocks: u32,
}

impl FromStr for Instruction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let turn = match chars.next() {
            Some('R') => Turn::Right,
            Some('L') => Turn::Left,
            _ => return Err(WalkError::UnknownTurn(s.to_owned())),
        };

        let blocks = chars.as_str().parse().map_err(|source| WalkError::BadDistance {
            instruction: s.to_owned(),
            source,
        })?;

        Ok(Self { turn, blocks })
    }
}

/// Someone walking the city grid from the origin, initially facing north.
#[derive(Clone, Debug)]
pub struct Walker {
    position: Position,
    heading: SquareStep,
    visited: HashSet<Position>,
    first_revisit: Option<Position>,
}

impl Default for Walker {
    fn default() -> Self {
        Self {
            position: Position::default(),
            heading: SquareStep::Up,
            visited: HashSet::new(),
            first_revisit: None,
        }
    }
}

impl Walker {
    /// A walker at the origin facing north.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow a comma separated instruction list such as `R2, L3` and return the resulting distance from the origin.
    ///
    /// All instructions are parsed before the walker moves.
    pub fn follow(&mut self, input: &str) -> Result<u64, WalkError> {
        let instructions = input.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Instruction::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        for instruction in instructions {
            self.apply(instruction);
        }

        debug!("walk ended at {}, {} blocks away", self.position, self.distance_from_origin());
        Ok(self.distance_from_origin())
    }

    /// Turn, then walk.
    pub fn apply(&mut self, instruction: Instruction) {
        match instruction.turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }

        self.move_forwards(instruction.blocks);
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    /// Quarter turn clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Walk `blocks` one at a time, remembering every intersection passed.
    pub fn move_forwards(&mut self, blocks: u32) {
        for _ in 0..blocks {
            self.position = self.position.offset_by(self.heading.delta());
            trace!("{:?} to {}", self.heading, self.position);

            // the starting point is not recorded until stepped on
            if !self.visited.insert(self.position) && self.first_revisit.is_none() {
                debug!("first revisit at {}", self.position);
                self.first_revisit = Some(self.position);
            }
        }
    }

    /// Where the walker stands.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Which way the walker faces.
    pub fn heading(&self) -> SquareStep {
        self.heading
    }

    /// Taxicab distance from the starting point.
    pub fn distance_from_origin(&self) -> u64 {
        self.position.distance_from_origin()
    }

    /// Distance from the origin of the first intersection visited twice, if any.
    pub fn first_revisit(&self) -> Option<u64> {
        self.first_revisit.map(|p| p.distance_from_origin())
    }
}

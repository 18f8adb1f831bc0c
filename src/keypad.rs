//! Keypad layouts and the navigator that decodes bathroom codes from them.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::location::Location;
use crate::shape::SquareStep;

/// Ways navigating a keypad can fail.
///
/// Moving off the keypad or into a gap is *not* one of them; such moves are ignored.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum KeypadError {
    /// The starting label does not appear anywhere on the keypad.
    #[error("no button labelled {0:?} on the keypad")]
    InvalidGrid(char),
    /// A builder was asked to build a keypad with no rows.
    #[error("keypad has no rows")]
    EmptyGrid,
    /// A command other than `U`, `D`, `L` or `R`.
    #[error("unknown command {0:?}")]
    UnknownCommand(char),
}

/// A button layout: a jagged table of rows where [`None`] marks a spot with no button.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Keypad {
    rows: Vec<Vec<Option<char>>>,
}

impl Keypad {
    /// Wrap a table of rows. Rows may differ in length.
    pub fn new(rows: Vec<Vec<Option<char>>>) -> Self {
        Self { rows }
    }

    /// The plain 3x3 layout:
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// 7 8 9
    /// ```
    pub fn square() -> Self {
        Self::parse("123\n456\n789")
    }

    /// The diamond layout found on the bathroom door:
    /// ```text
    ///     1
    ///   2 3 4
    /// 5 6 7 8 9
    ///   A B C
    ///     D
    /// ```
    pub fn diamond() -> Self {
        Self::parse("..1..\n.234.\n56789\n.ABC.\n..D..")
    }

    /// Build a layout from text, one row per line; `.` and spaces are gaps.
    pub fn parse(layout: &str) -> Self {
        Self::new(
            layout
                .lines()
                .map(|line| line.chars()
                    .map(|c| match c {
                        '.' | ' ' => None,
                        label => Some(label),
                    })
                    .collect_vec())
                .collect_vec(),
        )
    }

    /// The rows of the layout, top first.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    /// The label at `location`, or [`None`] if it is off the keypad or a gap.
    pub fn get(&self, location: Location) -> Option<char> {
        self.rows.get(location.1)?.get(location.0).copied().flatten()
    }

    /// Find `label` scanning rows top to bottom, then columns left to right.
    pub fn find(&self, label: char) -> Option<Location> {
        self.rows.iter()
            .enumerate()
            .find_map(|(y, row)| row.iter()
                .position(|cell| *cell == Some(label))
                .map(|x| Location(x, y)))
    }
}

impl Display for Keypad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().map(|cell| cell.unwrap_or('.')).collect::<String>())?;
        }

        Ok(())
    }
}

/// A finger moving over a [`Keypad`], pressing one button per line of instructions.
///
/// The cursor always rests on a button: construction places it on the start label and moves that would leave the keypad or land in a gap are dropped.
#[derive(Clone, Debug)]
pub struct KeypadNavigator {
    keypad: Keypad,
    cursor: Location,
    pressed: Vec<char>,
}

impl KeypadNavigator {
    /// Place the cursor on `start` (conventionally `'5'`).
    ///
    /// Fails with [`KeypadError::InvalidGrid`] if no button carries that label.
    pub fn new(keypad: Keypad, start: char) -> Result<Self, KeypadError> {
        let cursor = keypad.find(start).ok_or(KeypadError::InvalidGrid(start))?;
        debug!("starting on {:?} at {}", start, cursor);

        Ok(Self {
            keypad,
            cursor,
            pressed: Vec::new(),
        })
    }

    /// Follow newline-separated lines of `U`/`D`/`L`/`R` commands, pressing the button under the cursor at the end of each non-empty line.
    ///
    /// Any unknown command aborts the whole call with [`KeypadError::UnknownCommand`]: every line is parsed before the first move is made, so on error neither the cursor nor [`code`](Self::code) change.
    pub fn process(&mut self, text: &str) -> Result<(), KeypadError> {
        let lines = text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars()
                .map(|c| SquareStep::try_from(c).map_err(KeypadError::UnknownCommand))
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        for steps in lines {
            for step in steps {
                self.step(step);
            }
            self.press();
        }

        Ok(())
    }

    /// Apply a single command character.
    ///
    /// Moves that would leave the keypad or land on a gap are ignored; only an unrecognised character is an error.
    pub fn move_once(&mut self, command: char) -> Result<(), KeypadError> {
        let step = SquareStep::try_from(command).map_err(KeypadError::UnknownCommand)?;
        self.step(step);
        Ok(())
    }

    /// Move one step if the destination holds a button. Returns whether the cursor moved.
    pub fn step(&mut self, step: SquareStep) -> bool {
        // bounds are checked against the destination row, since rows may differ in length
        match self.cursor.offset_by(step.delta()).filter(|candidate| self.keypad.get(*candidate).is_some()) {
            Some(candidate) => {
                trace!("{:?}: {} -> {}", step, self.cursor, candidate);
                self.cursor = candidate;
                true
            }
            None => {
                trace!("{:?}: blocked at {}", step, self.cursor);
                false
            }
        }
    }

    fn press(&mut self) {
        let label = self.current();
        debug!("pressing {:?} at {}", label, self.cursor);
        self.pressed.push(label);
    }

    /// The code pressed so far, one character per processed line.
    pub fn code(&self) -> String {
        self.pressed.iter().collect()
    }

    /// Where the cursor rests.
    pub fn position(&self) -> Location {
        self.cursor
    }

    /// The label under the cursor.
    pub fn current(&self) -> char {
        // the cursor only ever rests on buttons
        self.keypad.get(self.cursor).unwrap_or_default()
    }

    /// The layout being navigated.
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

/// Decode `input` on `keypad`, starting from `'5'`.
pub fn decode(keypad: Keypad, input: &str) -> Result<String, KeypadError> {
    let mut navigator = KeypadNavigator::new(keypad, '5')?;
    navigator.process(input)?;
    Ok(navigator.code())
}

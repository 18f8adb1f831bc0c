//! Row-by-row construction of keypad navigators.

use crate::keypad::{Keypad, KeypadError, KeypadNavigator};

/// A builder for [`KeypadNavigator`]s, assembling the keypad row by row.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct KeypadBuilder {
    rows: Vec<Vec<Option<char>>>,
    start: char,
}

impl Default for KeypadBuilder {
    fn default() -> Self {
        Self {
            rows: Default::default(),
            start: '5',
        }
    }
}

impl KeypadBuilder {
    /// Begin from an existing layout instead of an empty one.
    pub fn from_keypad(keypad: &Keypad) -> Self {
        Self {
            rows: keypad.rows().to_vec(),
            ..Default::default()
        }
    }

    /// Append a row below those already added. [`None`] cells are gaps.
    pub fn row(&mut self, cells: impl IntoIterator<Item = Option<char>>) -> &mut Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    /// Append a row of buttons with no gaps, one per character of `labels`.
    pub fn buttons(&mut self, labels: &str) -> &mut Self {
        self.row(labels.chars().map(Some))
    }

    /// Remove the most recently added row, if any.
    pub fn pop_row(&mut self) -> &mut Self {
        self.rows.pop();
        self
    }

    /// Set the label the cursor starts on. Defaults to `'5'`.
    pub fn start(&mut self, label: char) -> &mut Self {
        self.start = label;
        self
    }

    /// Convert the state of this builder into a navigator.
    ///
    /// Fails with [`KeypadError::EmptyGrid`] if no rows were added, or [`KeypadError::InvalidGrid`] if the start label is missing.
    pub fn build(&self) -> Result<KeypadNavigator, KeypadError> {
        if self.rows.is_empty() {
            return Err(KeypadError::EmptyGrid);
        }

        KeypadNavigator::new(Keypad::new(self.rows.clone()), self.start)
    }
}

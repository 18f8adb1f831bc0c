//! Triangle side validation, read by rows or by columns.

use std::num::ParseIntError;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use ndarray::{Array2, Axis};
use thiserror::Error;

/// Reasons triangle input may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TriangleError {
    /// A line did not hold exactly three numbers.
    #[error("expected 3 sides, found {found}")]
    SideCount {
        /// How many numbers the line held.
        found: usize,
    },
    /// A side was not an unsigned integer.
    #[error("bad side length: {0}")]
    BadSide(#[from] ParseIntError),
    /// Column mode reads rows three at a time.
    #[error("{rows} rows cannot be split into groups of 3")]
    IncompleteGroup {
        /// How many non-empty rows the input held.
        rows: usize,
    },
}

/// Three side lengths, not necessarily forming a triangle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Triangle(pub u32, pub u32, pub u32);

impl Triangle {
    /// Whether each pair of sides is strictly longer than the remaining side.
    pub fn is_possible(&self) -> bool {
        let (a, b, c) = (self.0 as u64, self.1 as u64, self.2 as u64);
        a + b > c && a + c > b && b + c > a
    }
}

impl FromStr for Triangle {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides = s.split_whitespace().map(str::parse).collect::<Result<Vec<u32>, _>>()?;
        match sides[..] {
            [a, b, c] => Ok(Self(a, b, c)),
            _ => Err(TriangleError::SideCount { found: sides.len() }),
        }
    }
}

fn rows(input: &str) -> Result<Vec<Triangle>, TriangleError> {
    input.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Triangle::from_str)
        .collect()
}

/// Count possible triangles, one per non-empty line.
pub fn count_possible_by_rows(input: &str) -> Result<usize, TriangleError> {
    let count = rows(input)?.iter().filter(|t| t.is_possible()).count();
    debug!("{} possible triangles by rows", count);
    Ok(count)
}

/// Count possible triangles listed vertically: each group of three lines holds three triangles, one per column.
pub fn count_possible_by_columns(input: &str) -> Result<usize, TriangleError> {
    let rows = rows(input)?;
    if rows.len() % 3 != 0 {
        return Err(TriangleError::IncompleteGroup { rows: rows.len() });
    }

    let sides = Array2::from_shape_fn((rows.len(), 3), |(y, x)| match x {
        0 => rows[y].0,
        1 => rows[y].1,
        _ => rows[y].2,
    });

    let count = sides.axis_chunks_iter(Axis(0), 3)
        .flat_map(|group| group.columns()
            .into_iter()
            .map(|column| Triangle(column[0], column[1], column[2]))
            .collect_vec())
        .filter(Triangle::is_possible)
        .count();

    debug!("{} possible triangles by columns", count);
    Ok(count)
}

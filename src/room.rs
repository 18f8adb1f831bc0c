//! Room identifiers: checksum validation and shift-cipher decryption.

use std::cmp::Reverse;
use std::num::ParseIntError;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

/// Reasons a room identifier may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RoomError {
    /// Not of the form `name-123[abcde]`.
    #[error("malformed room identifier {0:?}")]
    Malformed(String),
    /// The sector ID does not fit in a `u32`.
    #[error("bad sector ID: {0}")]
    BadSector(#[from] ParseIntError),
}

const CHECKSUM_LEN: usize = 5;

/// An encrypted room identifier such as `aaaaa-bbb-z-y-x-123[abxyz]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    /// Dash separated, still encrypted.
    pub name: String,
    /// Also the cipher shift.
    pub sector_id: u32,
    /// As written between the brackets.
    pub checksum: String,
}

impl FromStr for Room {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RoomError::Malformed(s.to_owned());

        let (rest, checksum) = s.trim()
            .strip_suffix(']')
            .and_then(|rest| rest.split_once('['))
            .ok_or_else(malformed)?;
        let (name, sector) = rest.rsplit_once('-').ok_or_else(malformed)?;

        if name.is_empty()
            || !name.chars().all(|c| c.is_ascii_lowercase() || c == '-')
            || sector.is_empty()
            || !sector.chars().all(|c| c.is_ascii_digit())
            || checksum.is_empty()
            || !checksum.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(malformed());
        }

        Ok(Self {
            name: name.to_owned(),
            sector_id: sector.parse()?,
            checksum: checksum.to_owned(),
        })
    }
}

impl Room {
    /// The five most common letters in the name, ties broken alphabetically.
    pub fn expected_checksum(&self) -> String {
        self.name.chars()
            .filter(|c| *c != '-')
            .counts()
            .into_iter()
            .sorted_by_key(|(letter, count)| (Reverse(*count), *letter))
            .take(CHECKSUM_LEN)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Whether the stated checksum matches the name; decoys do not.
    pub fn is_real(&self) -> bool {
        self.checksum == self.expected_checksum()
    }

    /// Rotate every lowercase letter forward `shift` places; dashes become spaces.
    ///
    /// Parsed names hold nothing else, but [`Room`] can be built by hand, so any other character is left as is.
    pub fn rotate_by(&self, shift: u32) -> String {
        let shift = (shift % 26) as u8;
        self.name.chars()
            .map(|c| match c {
                '-' => ' ',
                letter if letter.is_ascii_lowercase() => ((letter as u8 - b'a' + shift) % 26 + b'a') as char,
                other => other,
            })
            .collect()
    }

    /// The real name, rotated by the sector ID.
    pub fn decrypt(&self) -> String {
        self.rotate_by(self.sector_id)
    }
}

fn rooms(input: &str) -> impl Iterator<Item = Result<Room, RoomError>> + '_ {
    input.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Room::from_str)
}

/// Sum the sector IDs of every real room.
pub fn sum_real_sector_ids(input: &str) -> Result<u64, RoomError> {
    let mut sum = 0;
    for room in rooms(input) {
        let room = room?;
        if room.is_real() {
            sum += room.sector_id as u64;
        } else {
            trace!("decoy {}", room.name);
        }
    }

    debug!("real sector ID sum {}", sum);
    Ok(sum)
}

/// The sector ID of the first room whose decrypted name is `name`.
///
/// If several rooms decrypt to `name`, the earliest line wins rather than the last.
/// Every line is parsed, so a malformed line anywhere in `input` is reported even after a match.
pub fn find_sector(input: &str, name: &str) -> Result<Option<u32>, RoomError> {
    let rooms = rooms(input).collect::<Result<Vec<_>, _>>()?;
    let found = rooms.iter().find(|room| room.decrypt() == name).map(|room| room.sector_id);

    debug!("{:?} found in sector {:?}", name, found);
    Ok(found)
}

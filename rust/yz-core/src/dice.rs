//! Roll-set validation.
//!
//! A [`Dice`] value can only be obtained by validating raw input, so everything
//! downstream of it may assume exactly five faces in 1..=6.

use thiserror::Error;

use crate::tally::Tally;

/// Number of dice in a roll set.
pub const NUM_DICE: usize = 5;
/// Lowest face value.
pub const MIN_FACE: i32 = 1;
/// Highest face value.
pub const MAX_FACE: i32 = 6;

/// Reasons a roll set is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRollsError {
    #[error("must have 5 rolls, got {got}")]
    WrongCount { got: usize },
    #[error("invalid roll value {value} at index {index} (expected 1..=6)")]
    OutOfRange { index: usize, value: i32 },
}

/// A validated roll set: five faces in 1..=6, in the order they were rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice([u8; NUM_DICE]);

impl Dice {
    /// Faces in input order.
    pub fn faces(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Sum of all five faces.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    pub fn tally(&self) -> Tally {
        Tally::from_faces(&self.0)
    }
}

/// Check that `rolls` holds exactly five faces, each in 1..=6.
///
/// The length is checked before any value; the first out-of-range value is reported.
pub fn validate_rolls(rolls: &[i32]) -> Result<Dice, InvalidRollsError> {
    if rolls.len() != NUM_DICE {
        return Err(InvalidRollsError::WrongCount { got: rolls.len() });
    }
    let mut faces = [0u8; NUM_DICE];
    for (index, (&value, slot)) in rolls.iter().zip(faces.iter_mut()).enumerate() {
        if !(MIN_FACE..=MAX_FACE).contains(&value) {
            return Err(InvalidRollsError::OutOfRange { index, value });
        }
        *slot = value as u8;
    }
    Ok(Dice(faces))
}

impl TryFrom<&[i32]> for Dice {
    type Error = InvalidRollsError;

    fn try_from(rolls: &[i32]) -> Result<Self, Self::Error> {
        validate_rolls(rolls)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Dice {
    type Error = InvalidRollsError;

    fn try_from(faces: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        validate_rolls(&faces.map(i32::from))
    }
}

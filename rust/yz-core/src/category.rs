//! Scoring categories.
//!
//! Tag order (0..=14) is stable and used wherever a category is stored as a number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_CATS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    Ones = 0,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPair,
    ThreeKind,
    FourKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Yahtzee,
    Chance,
}

/// Category names in tag order.
pub const CAT_NAMES: [&str; NUM_CATS] = [
    "ones",
    "twos",
    "threes",
    "fours",
    "fives",
    "sixes",
    "pair",
    "two_pair",
    "three_kind",
    "four_kind",
    "small_straight",
    "large_straight",
    "full_house",
    "yahtzee",
    "chance",
];

impl Category {
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeKind,
        Category::FourKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a category by tag. `None` for tags >= 15.
    pub fn from_index(idx: u8) -> Option<Category> {
        Self::ALL.get(idx as usize).copied()
    }

    pub fn name(self) -> &'static str {
        CAT_NAMES[self as usize]
    }

    /// The face counted by an upper-section category (Ones..Sixes).
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category {0:?} (expected one of: {names})", names = CAT_NAMES.join(", "))]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Case-insensitive; `-` and `_` are interchangeable (`two-pair`, `TWO_PAIR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        CAT_NAMES
            .iter()
            .position(|&n| n == norm)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

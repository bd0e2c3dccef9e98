//! yz-core: Yahtzee scoring for a single roll of five dice.
//!
//! Given five faces and a [`Category`], [`score`] returns the points that roll earns.
//! There is no game state here: every call is a pure function of its inputs.

pub mod category;
pub mod config;
pub mod dice;
pub mod scoring;
pub mod tally;

#[cfg(test)]
mod scoring_tests;

pub use category::{Category, ParseCategoryError, CAT_NAMES, NUM_CATS};
pub use config::{Config, ConfigError, OutputFormat};
pub use dice::{validate_rolls, Dice, InvalidRollsError, NUM_DICE};
pub use scoring::{
    debug_log_enabled, invalid_rolls_message, score, score_dice, score_or_zero, score_tag,
    scores_for_dice, YAHTZEE_SCORE,
};
pub use tally::{StraightKind, Tally};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Category scoring.
//!
//! [`score`] is the primary entry point and surfaces invalid input as an error.
//! [`score_or_zero`] keeps the numeric contract for callers that only want a number:
//! invalid input scores 0 and is reported on the diagnostic channel.

use std::sync::OnceLock;

use crate::category::{Category, NUM_CATS};
use crate::dice::{validate_rolls, Dice, InvalidRollsError};
use crate::tally::StraightKind;

/// Fixed score for five of a kind.
pub const YAHTZEE_SCORE: u32 = 50;

/// True when `YZ_DEBUG_LOG` is `1`, `true` or `yes`. Read once per process.
pub fn debug_log_enabled() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| matches!(std::env::var("YZ_DEBUG_LOG").as_deref(), Ok("1" | "true" | "yes")))
}

/// Diagnostic line for rejected rolls. `category` is `None` when scoring every category.
pub fn invalid_rolls_message(
    rolls: &[i32],
    category: Option<Category>,
    err: &InvalidRollsError,
) -> String {
    match category {
        Some(c) => format!("error validating rolls {rolls:?} for {c}: {err}"),
        None => format!("error validating rolls {rolls:?}: {err}"),
    }
}

fn report_invalid(rolls: &[i32], category: Category, err: &InvalidRollsError) {
    if debug_log_enabled() {
        eprintln!("yz-core: {}", invalid_rolls_message(rolls, Some(category), err));
    }
}

/// Score `rolls` under `category`.
pub fn score(rolls: &[i32], category: Category) -> Result<u32, InvalidRollsError> {
    let dice = validate_rolls(rolls)?;
    Ok(score_dice(&dice, category))
}

/// Like [`score`], but invalid rolls score 0.
pub fn score_or_zero(rolls: &[i32], category: Category) -> u32 {
    match score(rolls, category) {
        Ok(s) => s,
        Err(e) => {
            report_invalid(rolls, category, &e);
            0
        }
    }
}

/// Score by raw category tag. Tags outside 0..=14 score 0, as do invalid rolls.
pub fn score_tag(rolls: &[i32], tag: u8) -> u32 {
    match Category::from_index(tag) {
        Some(c) => score_or_zero(rolls, c),
        None => 0,
    }
}

/// Apply one category's rule to an already-validated roll set.
pub fn score_dice(dice: &Dice, category: Category) -> u32 {
    let t = dice.tally();
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.upper_face().unwrap_or(0);
            t.count(face) as u32 * face as u32
        }
        Category::Pair => t.select_best(2) as u32 * 2,
        Category::ThreeKind => t.select_best(3) as u32 * 3,
        Category::FourKind => t.select_best(4) as u32 * 4,
        Category::TwoPair => t.select_best_pair(2, 2),
        Category::FullHouse => t.select_best_pair(2, 3),
        // Straights score the dice sum, not a fixed bonus.
        Category::SmallStraight => straight_score(dice, StraightKind::Small),
        Category::LargeStraight => straight_score(dice, StraightKind::Large),
        Category::Yahtzee => {
            if t.select_best(5) != 0 {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        Category::Chance => dice.sum(),
    }
}

fn straight_score(dice: &Dice, kind: StraightKind) -> u32 {
    if dice.tally().is_straight(kind) {
        dice.sum()
    } else {
        0
    }
}

/// Score every category for a validated roll set, in tag order.
pub fn scores_for_dice(dice: &Dice) -> [u32; NUM_CATS] {
    Category::ALL.map(|c| score_dice(dice, c))
}

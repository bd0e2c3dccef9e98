#[cfg(test)]
mod tests {
    use crate::{
        invalid_rolls_message, score, score_or_zero, score_tag, scores_for_dice, validate_rolls, Category,
        InvalidRollsError, YAHTZEE_SCORE,
    };
    use Category::*;

    fn check(rolls: [i32; 5], expected: &[(Category, u32)]) {
        for &(cat, want) in expected {
            assert_eq!(
                score(&rolls, cat),
                Ok(want),
                "rolls {:?} category {}",
                rolls,
                cat
            );
        }
    }

    #[test]
    fn two_low_pairs() {
        check(
            [1, 1, 4, 3, 4],
            &[
                (TwoPair, 10),
                (Pair, 8),
                (ThreeKind, 0),
                (FourKind, 0),
                (Yahtzee, 0),
                (Chance, 13),
                (Ones, 2),
            ],
        );
    }

    #[test]
    fn three_and_two() {
        check(
            [3, 3, 2, 3, 2],
            &[
                (TwoPair, 10),
                (Pair, 6),
                (ThreeKind, 9),
                (FourKind, 0),
                (Yahtzee, 0),
                (Chance, 13),
                (Ones, 0),
            ],
        );
    }

    #[test]
    fn single_pair() {
        check(
            [1, 2, 4, 3, 4],
            &[
                (TwoPair, 0),
                (Pair, 8),
                (ThreeKind, 0),
                (FourKind, 0),
                (Yahtzee, 0),
                (Chance, 14),
            ],
        );
    }

    #[test]
    fn no_repeats() {
        check(
            [1, 2, 5, 3, 4],
            &[
                (TwoPair, 0),
                (Pair, 0),
                (ThreeKind, 0),
                (FourKind, 0),
                (Yahtzee, 0),
                (Chance, 15),
            ],
        );
    }

    #[test]
    fn four_of_a_kind() {
        check(
            [1, 2, 2, 2, 2],
            &[
                (TwoPair, 0),
                (Pair, 4),
                (ThreeKind, 6),
                (FourKind, 8),
                (Yahtzee, 0),
                (Chance, 9),
            ],
        );
    }

    #[test]
    fn five_of_a_kind() {
        check(
            [2, 2, 2, 2, 2],
            &[
                (TwoPair, 0),
                (Pair, 4),
                (ThreeKind, 6),
                (FourKind, 8),
                (Yahtzee, 50),
                (Chance, 10),
                (FullHouse, 0),
                (Twos, 10),
            ],
        );
    }

    #[test]
    fn full_house_weights_pair_and_triple() {
        check([2, 2, 3, 3, 3], &[(FullHouse, 13)]);
        check([3, 2, 3, 2, 3], &[(FullHouse, 13)]);
        check([5, 5, 5, 6, 6], &[(FullHouse, 27)]);
        check([1, 1, 2, 3, 4], &[(FullHouse, 0)]);
        check([4, 4, 4, 4, 1], &[(FullHouse, 0)]);
    }

    #[test]
    fn straights_score_the_sum() {
        check([1, 2, 3, 4, 5], &[(SmallStraight, 15), (LargeStraight, 0)]);
        check([5, 4, 3, 2, 1], &[(SmallStraight, 15)]);
        check([2, 3, 4, 5, 6], &[(LargeStraight, 20), (SmallStraight, 0)]);
        check([1, 2, 3, 4, 6], &[(SmallStraight, 0), (LargeStraight, 0)]);
        check([1, 2, 3, 4, 4], &[(SmallStraight, 0), (LargeStraight, 0)]);
    }

    #[test]
    fn upper_section_counts_face() {
        let rolls = [6, 6, 5, 6, 1];
        check(
            rolls,
            &[
                (Ones, 1),
                (Twos, 0),
                (Threes, 0),
                (Fours, 0),
                (Fives, 5),
                (Sixes, 18),
            ],
        );
    }

    #[test]
    fn invalid_rolls_are_errors_and_score_zero() {
        let bad: [&[i32]; 5] = [
            &[],
            &[1, 2, 3, 4],
            &[1, 2, 3, 4, 5, 6],
            &[0, 1, 2, 3, 4],
            &[1, 2, 3, 4, 7],
        ];
        for rolls in bad {
            for cat in Category::ALL {
                assert!(score(rolls, cat).is_err(), "{:?} {}", rolls, cat);
                assert_eq!(score_or_zero(rolls, cat), 0, "{:?} {}", rolls, cat);
            }
        }
        assert_eq!(
            score(&[1, 1, 1, 1], Chance),
            Err(InvalidRollsError::WrongCount { got: 4 })
        );
    }

    #[test]
    fn score_tag_falls_back_to_zero_for_unknown_tags() {
        let rolls = [2, 2, 2, 2, 2];
        assert_eq!(score_tag(&rolls, Yahtzee.index()), 50);
        assert_eq!(score_tag(&rolls, 14), 10);
        assert_eq!(score_tag(&rolls, 15), 0);
        assert_eq!(score_tag(&rolls, 200), 0);
        assert_eq!(score_tag(&[9, 9, 9, 9, 9], Yahtzee.index()), 0);
    }

    #[test]
    fn score_table_matches_single_category_scoring() {
        let dice = validate_rolls(&[2, 2, 3, 3, 3]).unwrap();
        let table = scores_for_dice(&dice);
        for cat in Category::ALL {
            let rolls = dice.faces().map(i32::from);
            assert_eq!(table[cat.index() as usize], score(&rolls, cat).unwrap());
        }
        assert_eq!(table[FullHouse.index() as usize], 13);
        assert_eq!(table[Chance.index() as usize], 13);
    }

    fn all_hands() -> impl Iterator<Item = [i32; 5]> {
        (0..7776).map(|mut n| {
            let mut d = [0i32; 5];
            for slot in &mut d {
                *slot = n % 6 + 1;
                n /= 6;
            }
            d
        })
    }

    #[test]
    fn exhaustive_properties_over_all_hands() {
        // 6^5 = 7776 hands.
        let mut hands = 0;
        for rolls in all_hands() {
            hands += 1;
            let sum: i32 = rolls.iter().sum();
            let all_same = rolls.iter().all(|&d| d == rolls[0]);
            for cat in Category::ALL {
                let s = score(&rolls, cat).unwrap();
                // Idempotent: same input, same output.
                assert_eq!(score(&rolls, cat).unwrap(), s);
                assert_eq!(score_or_zero(&rolls, cat), s);
                match cat {
                    Chance => assert_eq!(s, sum as u32),
                    Yahtzee => assert_eq!(s == YAHTZEE_SCORE, all_same, "{:?}", rolls),
                    _ => assert!(s <= YAHTZEE_SCORE, "{:?} {} = {}", rolls, cat, s),
                }
            }
        }
        assert_eq!(hands, 7776);
    }

    #[test]
    fn scores_ignore_dice_order() {
        for rolls in all_hands() {
            let mut sorted = rolls;
            sorted.sort_unstable();
            for cat in Category::ALL {
                assert_eq!(score(&rolls, cat), score(&sorted, cat));
            }
        }
    }

    #[test]
    fn two_pair_never_reuses_a_face() {
        for rolls in all_hands() {
            let s = score(&rolls, TwoPair).unwrap();
            let distinct_pairs = (1..=6)
                .filter(|f| rolls.iter().filter(|&&d| d == *f).count() >= 2)
                .count();
            assert_eq!(s > 0, distinct_pairs >= 2, "{:?}", rolls);
        }
    }

    #[test]
    fn invalid_rolls_message_names_rolls_category_and_reason() {
        let rolls = [1, 2, 9, 4, 5];
        let err = score(&rolls, Chance).unwrap_err();
        assert_eq!(
            invalid_rolls_message(&rolls, Some(Chance), &err),
            "error validating rolls [1, 2, 9, 4, 5] for chance: \
             invalid roll value 9 at index 2 (expected 1..=6)"
        );

        let rolls = [6, 6];
        let err = score(&rolls, FullHouse).unwrap_err();
        assert_eq!(
            invalid_rolls_message(&rolls, None, &err),
            "error validating rolls [6, 6]: must have 5 rolls, got 2"
        );
    }
}

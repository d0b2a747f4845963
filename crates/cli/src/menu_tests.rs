// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    empty = { "", Transition::Exit },
    whitespace_only = { "   ", Transition::Exit },
    show = { "1", Transition::Show },
    repeat = { "2", Transition::Repeat },
    next = { "3", Transition::Exit },
    padded = { " 2 ", Transition::Repeat },
    zero = { "0", Transition::Retry },
    too_large = { "4", Transition::Retry },
    negative = { "-1", Transition::Retry },
    text = { "abc", Transition::Retry },
    label = { "next word", Transition::Retry },
    overflow = { "99999999999999999999999", Transition::Retry },
)]
fn input_transitions(line: &str, expected: Transition) {
    assert_eq!(transition(line), expected);
}

#[test]
fn test_render_lists_three_numbered_choices() {
    assert_eq!(
        render(),
        vec!["[1] show word", "[2] repeat word", "[3] next word"]
    );
}

#[test]
fn test_from_selection_is_one_based() {
    assert_eq!(MenuChoice::from_selection(0), None);
    assert_eq!(MenuChoice::from_selection(1), Some(MenuChoice::ShowWord));
    assert_eq!(MenuChoice::from_selection(3), Some(MenuChoice::NextWord));
    assert_eq!(MenuChoice::from_selection(4), None);
}

proptest! {
    #[test]
    fn non_numeric_input_retries(line in "[a-zA-Z][a-zA-Z ]{0,20}") {
        prop_assert_eq!(transition(&line), Transition::Retry);
    }

    #[test]
    fn out_of_range_numbers_retry(n in 4usize..10_000) {
        prop_assert_eq!(transition(&n.to_string()), Transition::Retry);
    }
}

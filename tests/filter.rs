mod common;

use std::collections::{BTreeSet, LinkedList, VecDeque};

use common::{is_even, is_odd, CallCounter, SAMPLE};
use rangepipe::cursor::{BidirectionalCursor, Cursor};
use rangepipe::{copy_range, filter, view, Traversal};

#[test]
fn filter_keeps_matching_elements_in_order() {
    let mut evens: Vec<&i32> = Vec::new();
    copy_range(&mut evens, &SAMPLE | filter(is_even));
    assert_eq!(evens, vec![&2, &6, &12]);
}

#[test]
fn filter_accepts_every_source_kind() {
    let vector = SAMPLE.to_vec();
    let deque: VecDeque<i32> = SAMPLE.into_iter().collect();
    let list: LinkedList<i32> = SAMPLE.into_iter().collect();
    let set: BTreeSet<i32> = SAMPLE.into_iter().collect();

    let expected = vec![2, 6, 12];
    let from_vec: Vec<i32> = (&vector | filter(is_even)).into_iter().copied().collect();
    let from_deque: Vec<i32> = (&deque | filter(is_even)).into_iter().copied().collect();
    let from_list: Vec<i32> = (&list | filter(is_even)).into_iter().copied().collect();
    let from_set: Vec<i32> = (&set | filter(is_even)).into_iter().copied().collect();
    let from_temp: Vec<i32> = (SAMPLE.to_vec() | filter(|x: &i32| x % 2 == 0))
        .into_iter()
        .collect();

    assert_eq!(from_vec, expected);
    assert_eq!(from_deque, expected);
    assert_eq!(from_list, expected);
    assert_eq!(from_set, expected);
    assert_eq!(from_temp, expected);
}

#[test]
fn filter_over_text_yields_chars() {
    let letters: String = ("a1b2c3" | filter(|c: &char| c.is_alphabetic()))
        .into_iter()
        .collect();
    assert_eq!(letters, "abc");

    let owned = String::from("x-y-z");
    let dashes = &owned | filter(|c: &char| *c == '-');
    assert_eq!(dashes.count(), 2);
}

#[test]
fn filter_calls_nothing_until_iterated() {
    let counter = CallCounter::new();
    let odds = &SAMPLE | filter(counter.predicate(is_odd));
    assert_eq!(counter.calls(), 0);

    let collected: Vec<i32> = odds.iter().copied().collect();
    assert_eq!(collected, vec![1, 3, 9, 13]);
    assert_eq!(counter.calls(), SAMPLE.len());
}

#[test]
fn filter_dereference_is_idempotent() {
    let counter = CallCounter::new();
    let evens = &SAMPLE | filter(counter.predicate(is_even));
    let mut cursor = evens.begin();
    let calls_after_begin = counter.calls();

    assert_eq!(cursor.current(), cursor.current());
    assert_eq!(*cursor.current(), 2);
    assert_eq!(counter.calls(), calls_after_begin);
}

#[test]
fn filter_view_can_be_walked_twice() {
    let evens = view(&SAMPLE) | filter(is_even);
    let first: Vec<&i32> = evens.iter().collect();
    let second: Vec<&i32> = (&evens).into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn filter_steps_backward_but_not_randomly() {
    let evens = &SAMPLE | filter(is_even);
    assert_eq!(evens.traversal(), Traversal::Bidirectional);

    let mut cursor = evens.end();
    cursor.retreat();
    assert_eq!(*cursor.current(), 12);

    let backward: Vec<i32> = evens.iter().rev().copied().collect();
    assert_eq!(backward, vec![12, 6, 2]);
}

#[test]
fn filter_of_filter_narrows_further() {
    let multiples_of_six: Vec<i32> = (&SAMPLE | filter(is_even) | filter(|x: &&i32| **x % 3 == 0))
        .into_iter()
        .copied()
        .collect();
    assert_eq!(multiples_of_six, vec![6, 12]);
}

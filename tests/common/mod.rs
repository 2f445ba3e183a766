#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Values used throughout the adaptor tests.
pub const SAMPLE: [i32; 7] = [1, 2, 3, 6, 9, 12, 13];

pub fn is_even(x: &&i32) -> bool {
    **x % 2 == 0
}

pub fn is_odd(x: &&i32) -> bool {
    **x % 2 != 0
}

/// Endless producer of `start, start + 1, ...`.
pub fn counter_from(start: u64) -> impl FnMut() -> u64 + Clone {
    let mut next = start;
    move || {
        next += 1;
        next - 1
    }
}

/// Linear congruential generator; impure, but reproducible from its seed.
pub fn lcg(seed: u64) -> impl FnMut() -> u64 + Clone {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    }
}

/// Counts how often the functions it wraps are called.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn predicate<T>(&self, predicate: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
        let calls = Rc::clone(&self.calls);
        move |item: &T| {
            calls.set(calls.get() + 1);
            predicate(item)
        }
    }

    pub fn mapping<T, U>(&self, map: impl Fn(T) -> U) -> impl Fn(T) -> U {
        let calls = Rc::clone(&self.calls);
        move |item: T| {
            calls.set(calls.get() + 1);
            map(item)
        }
    }
}

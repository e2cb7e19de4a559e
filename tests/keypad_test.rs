// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for counting on the default keypad graph.
//!
//! The pinned values were computed once from the hand-authored adjacency
//! table and serve as regressions for the whole counting pipeline.

use knight_moves::counter::Counters;
use knight_moves::{graph, Graph, SequenceCounter};

const DEFAULT_NUMBER_OF_VOWELS: usize = 2;

fn keypad_counter(depth: usize) -> SequenceCounter {
    SequenceCounter::new(graph::keypad(), DEFAULT_NUMBER_OF_VOWELS, depth)
        .expect("default configuration must construct")
}

#[test]
fn test_depth_one_counts_vertices() {
    let graph = graph::keypad();
    let mut counter = keypad_counter(1);
    assert_eq!(counter.count(), graph.len() as u64);
    assert_eq!(counter.count(), 18);
}

#[test]
fn test_depth_two_counts_edges() {
    let graph = graph::keypad();
    let mut counter = keypad_counter(2);
    assert_eq!(counter.count(), graph.total_out_degree() as u64);
    assert_eq!(counter.count(), 60);
}

#[test]
fn test_depth_ten_regression() {
    let mut counter = keypad_counter(10);
    assert_eq!(counter.count(), 1_013_398);
}

#[test]
fn test_deeper_regressions() {
    for (depth, expected) in [
        (3, 214),
        (5, 2_486),
        (16, 1_195_650_888),
        (32, 129_891_093_550_589_788),
    ] {
        let mut counter = keypad_counter(depth);
        assert_eq!(counter.count(), expected, "depth {}", depth);
    }
}

#[test]
fn test_budget_zero_excludes_vowel_starts() {
    // Four of the five vowels (A, E, I, O) are keypad vertices; with no
    // budget only the remaining 14 vertices can start a sequence.
    let mut counter = SequenceCounter::new(graph::keypad(), 0, 1).unwrap();
    assert_eq!(counter.count(), 14);
}

#[test]
fn test_budget_sweep_is_monotonic() {
    let expected = [259_950, 652_904, 1_013_398, 1_227_864, 1_306_510];
    let mut previous = 0;
    for (budget, pinned) in expected.into_iter().enumerate() {
        let mut counter = SequenceCounter::new(graph::keypad(), budget, 10).unwrap();
        let count = counter.count();
        assert_eq!(count, pinned, "budget {}", budget);
        assert!(count >= previous, "budget {} decreased the count", budget);
        previous = count;
    }
}

#[test]
fn test_repeated_counts_are_deterministic() {
    let mut counter = keypad_counter(10);
    let first = counter.count();
    let misses = counter.statistics().get(Counters::CacheMisses);

    // The second call returns the same value from the filled cache.
    assert_eq!(counter.count(), first);
    assert_eq!(counter.statistics().get(Counters::CacheMisses), misses);
}

#[test]
fn test_memoization_takes_effect() {
    let mut counter = keypad_counter(10);
    counter.count();
    assert!(counter.statistics().get(Counters::CacheHits) > 0);
}

#[test]
fn test_empty_graph_counts_nothing() {
    for depth in [1, 2, 32] {
        let mut counter = SequenceCounter::new(Graph::new(), DEFAULT_NUMBER_OF_VOWELS, depth)
            .expect("empty graph is a valid construction");
        assert_eq!(counter.count(), 0, "depth {}", depth);
    }
}

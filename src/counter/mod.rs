// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The memoized sequence counter.
//!
//! [`SequenceCounter`] owns a read-only graph, a vowel classification, and
//! the memo table for one (budget, depth) configuration. Construction
//! validates the configuration and interns the graph into dense per-vertex
//! tables (Tier 1); [`SequenceCounter::count`] runs the memoized recursion,
//! filling the memo table and statistics (Tier 2) as it goes.
//!
//! # Recursion
//!
//! `sequences(vertices, vowels_allowed, depth_remaining)`:
//!
//! 1. Zero remaining depth counts exactly one sequence, the empty
//!    continuation. This terminal state is never cached.
//! 2. Otherwise each vertex contributes its cached count when present. On
//!    a miss, a vowel vertex with no budget remaining contributes 0;
//!    any other vertex contributes the sum over its neighbours with the
//!    budget and depth decremented. The result is stored before returning.
//!
//! The cache is keyed on the post-decrement depth, so cell indices line up
//! with the recursive descent. Without the cache the recursion explores an
//! exponential number of walks; with it, `O(V × budget × depth)` states
//! are each computed once in `O(outdegree)` work.

pub mod errors;
pub mod statistics;

mod memo;

pub use errors::CounterError;
pub use statistics::{Counters, Statistics};

use crate::graph::Graph;
use crate::vowels::VowelSet;
use memo::MemoTable;
use std::collections::HashMap;
use tracing::debug;

/// Maximum supported sequence length.
pub const MAX_DEPTH: usize = 32;

/// Dense per-vertex tables interned from the graph (Tier 1).
///
/// Vertex indices follow the graph's sorted label order. Immutable for the
/// lifetime of the counter.
#[derive(Debug, Clone)]
struct VertexTables {
    /// Adjacency lists resolved to vertex indices.
    adjacency: Vec<Vec<usize>>,

    /// Budget cost of visiting each vertex: 1 for a vowel, 0 otherwise.
    vowel_cost: Vec<usize>,
}

impl VertexTables {
    /// Resolve every label in the graph to a dense vertex index.
    ///
    /// Fails if an adjacency list names a label with no vertex row, so the
    /// recursion can index unchecked.
    fn intern(graph: &Graph, vowels: &VowelSet) -> Result<Self, CounterError> {
        let index: HashMap<&str, usize> = graph
            .vertices()
            .enumerate()
            .map(|(i, label)| (label, i))
            .collect();

        let mut adjacency = Vec::with_capacity(graph.len());
        let mut vowel_cost = Vec::with_capacity(graph.len());
        for (label, adjacent) in graph.iter() {
            let row = adjacent
                .iter()
                .map(|neighbour| {
                    index.get(neighbour.as_str()).copied().ok_or_else(|| {
                        CounterError::UnknownNeighbour {
                            vertex: label.to_owned(),
                            neighbour: neighbour.clone(),
                        }
                    })
                })
                .collect::<Result<Vec<usize>, CounterError>>()?;
            adjacency.push(row);
            vowel_cost.push(vowels.cost(label));
        }

        Ok(Self {
            adjacency,
            vowel_cost,
        })
    }
}

/// Counts distinct fixed-length vertex sequences under a vowel budget.
///
/// A sequence is an ordered walk of `depth` vertices, each step following a
/// directed edge of the graph, containing at most `number_of_vowels` vowel
/// vertices. [`count`](Self::count) sums the sequences starting from every
/// vertex.
///
/// A counter is built for one (budget, depth) configuration and holds no
/// mutation path besides filling its own cache: repeated `count` calls
/// return the same value, with later calls served from the memo table.
///
/// The count accumulates in a `u64` with no overflow guard. For the
/// bounded default domain (18 vertices, depth ≤ 32) the largest value is
/// around 1.3 × 10^17; callers extending the graph or the depth bound must
/// re-validate that headroom.
#[derive(Debug)]
pub struct SequenceCounter {
    graph: Graph,
    vowels: VowelSet,
    number_of_vowels: usize,
    depth: usize,
    /// Tier 1: interned per-vertex tables.
    tables: VertexTables,
    /// Tier 2: lazily filled memo cells.
    memo: MemoTable,
    /// Tier 2: cache and pruning tallies.
    statistics: Statistics,
}

impl SequenceCounter {
    /// Build a counter over `graph` with the default vowel set (`A E I O U`).
    ///
    /// `number_of_vowels` is the maximum number of vowel vertices permitted
    /// within one sequence; `depth` is the sequence length, `1..=32`.
    pub fn new(
        graph: Graph,
        number_of_vowels: usize,
        depth: usize,
    ) -> Result<Self, CounterError> {
        Self::with_vowels(graph, VowelSet::default(), number_of_vowels, depth)
    }

    /// Build a counter with a caller-supplied vowel classification.
    pub fn with_vowels(
        graph: Graph,
        vowels: VowelSet,
        number_of_vowels: usize,
        depth: usize,
    ) -> Result<Self, CounterError> {
        if depth < 1 || depth > MAX_DEPTH {
            return Err(CounterError::DepthOutOfRange(depth));
        }

        let tables = VertexTables::intern(&graph, &vowels)?;
        let memo = MemoTable::new(graph.len(), number_of_vowels, depth);

        Ok(Self {
            graph,
            vowels,
            number_of_vowels,
            depth,
            tables,
            memo,
            statistics: Statistics::new(),
        })
    }

    /// Count the valid sequences of length `depth`, summed over every
    /// vertex of the graph as a starting point.
    ///
    /// Each starting vertex gets the full vowel budget. Deterministic:
    /// repeated calls return the same value, served from the filled cache.
    pub fn count(&mut self) -> u64 {
        let roots: Vec<usize> = (0..self.graph.len()).collect();
        let total = sequences(
            &self.tables,
            &mut self.memo,
            &mut self.statistics,
            &roots,
            self.number_of_vowels,
            self.depth,
        );
        debug!(
            depth = self.depth,
            budget = self.number_of_vowels,
            total,
            cache_hits = self.statistics.get(Counters::CacheHits),
            cache_misses = self.statistics.get(Counters::CacheMisses),
            "counted sequences"
        );
        total
    }

    /// The graph the counter was built over.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The vowel classification in effect.
    pub fn vowels(&self) -> &VowelSet {
        &self.vowels
    }

    /// The configured per-sequence vowel budget.
    pub fn number_of_vowels(&self) -> usize {
        self.number_of_vowels
    }

    /// The configured sequence length.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Cache and pruning tallies accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Count the sequences contributed by each vertex in `vertices`, with
/// `vowels_allowed` budget units and `depth_remaining` vertices still to
/// place (including the current one).
///
/// Takes the counter's tiers as disjoint borrows: the interned tables are
/// read-only while the memo and statistics fill in.
fn sequences(
    tables: &VertexTables,
    memo: &mut MemoTable,
    statistics: &mut Statistics,
    vertices: &[usize],
    vowels_allowed: usize,
    depth_remaining: usize,
) -> u64 {
    if depth_remaining == 0 {
        // The empty continuation: one sequence, never cached.
        return 1;
    }

    // Cache cells are keyed on the post-decrement depth.
    let depth_remaining = depth_remaining - 1;

    let mut total: u64 = 0;
    for &vertex in vertices {
        let count = match memo.get(vertex, vowels_allowed, depth_remaining) {
            Some(cached) => {
                statistics.increment(Counters::CacheHits);
                cached
            }
            None => {
                statistics.increment(Counters::CacheMisses);
                let cost = tables.vowel_cost[vertex];
                // A vowel is only entered while budget remains, so
                // vowels_allowed never underflows.
                let computed = if vowels_allowed >= cost {
                    sequences(
                        tables,
                        memo,
                        statistics,
                        &tables.adjacency[vertex],
                        vowels_allowed - cost,
                        depth_remaining,
                    )
                } else {
                    statistics.increment(Counters::BudgetPrunes);
                    0
                };
                memo.set(vertex, vowels_allowed, depth_remaining, computed);
                computed
            }
        };
        total += count;
    }
    total
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the counter and track how the memo table
//! behaves during a count: how often a state was served from cache, how
//! often it had to be computed, and how often the vowel budget cut a
//! branch off entirely.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The tallies a counter keeps while counting.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// A state was answered from the memo table.
    CacheHits,
    /// A state had to be computed (and was then stored).
    CacheMisses,
    /// A vowel vertex was reached with no budget remaining.
    BudgetPrunes,
}

/// Dense tally storage, one slot per [`Counters`] variant.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let statistics = Statistics::new();
        assert_eq!(statistics.get(Counters::CacheHits), 0);
        assert_eq!(statistics.get(Counters::CacheMisses), 0);
        assert_eq!(statistics.get(Counters::BudgetPrunes), 0);
    }

    #[test]
    fn test_increment_is_independent() {
        let mut statistics = Statistics::new();
        statistics.increment(Counters::CacheMisses);
        statistics.increment(Counters::CacheMisses);
        statistics.increment(Counters::BudgetPrunes);

        assert_eq!(statistics.get(Counters::CacheHits), 0);
        assert_eq!(statistics.get(Counters::CacheMisses), 2);
        assert_eq!(statistics.get(Counters::BudgetPrunes), 1);
    }
}

use crate::Rule;
use alloc::collections::BTreeMap;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Proof search statistics.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// number of rule applications
    pub inferences: usize,
    /// number of sequents to which no rule applied
    pub failures: usize,
    /// maximal depth of a visited sequent, the goal being at depth 0
    pub depth: usize,
    /// number of applications per rule
    pub rules: BTreeMap<Rule, usize>,
}

impl Stats {
    pub fn record(&mut self, rule: Rule) {
        self.inferences += 1;
        *self.rules.entry(rule).or_default() += 1;
    }

    /// Number of applications of the given rule.
    pub fn applications(&self, rule: Rule) -> usize {
        self.rules.get(&rule).copied().unwrap_or(0)
    }
}

impl core::iter::FromIterator<Stats> for Stats {
    fn from_iter<I: IntoIterator<Item = Stats>>(iter: I) -> Self {
        let mut stats = Stats::default();

        for i in iter {
            stats.inferences += i.inferences;
            stats.failures += i.failures;
            stats.depth = stats.depth.max(i.depth);
            for (rule, n) in i.rules {
                *stats.rules.entry(rule).or_default() += n;
            }
        }
        stats
    }
}

use crate::prelude::*;
use crate::resolution::{complementary, resolve};
use crate::statistics::Statistics;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::debug;
use std::time::{Duration, Instant};

/// Clauses known so far, without duplicates up to renaming.
pub type KnowledgeBase = IndexSet<Clause, FnvBuildHasher>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The empty clause was derived.
    Refuted,
    /// No new clauses can be derived.
    Saturated,
    TimeOut,
}

impl SearchResult {
    pub fn is_entailed(self) -> bool {
        self == SearchResult::Refuted
    }
}

/// Saturate `kb` under binary resolution until the empty clause turns up,
/// nothing new can be derived, or `time_limit` has passed.
pub fn saturate(
    symbols: &Symbols,
    mut kb: KnowledgeBase,
    fresh: &mut Fresh,
    time_limit: Duration,
    statistics: &Statistics,
) -> SearchResult {
    let start = Instant::now();
    if kb.iter().any(Clause::is_empty) {
        return SearchResult::Refuted;
    }

    loop {
        statistics.increment_passes();
        let mut snapshot: Vec<Clause> = kb.iter().cloned().collect();
        snapshot.sort_by_key(Clause::len);
        debug!(
            "pass {}: {} clauses",
            statistics.passes(),
            snapshot.len()
        );

        let mut new = KnowledgeBase::default();
        for (i, left) in snapshot.iter().enumerate() {
            for right in &snapshot[i + 1..] {
                if start.elapsed() > time_limit {
                    return SearchResult::TimeOut;
                }
                if !complementary(left, right) {
                    statistics.increment_skipped_pairs();
                    continue;
                }
                statistics.increment_examined_pairs();
                let resolvents = resolve(symbols, left, right, fresh);
                statistics.add_resolvents(resolvents.len());
                if resolvents.iter().any(Clause::is_empty) {
                    return SearchResult::Refuted;
                }
                new.extend(resolvents);
            }
        }

        if new.iter().all(|clause| kb.contains(clause)) {
            return SearchResult::Saturated;
        }
        kb.extend(new);
        statistics.set_retained_clauses(kb.len());
    }
}

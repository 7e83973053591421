use crate::prelude::*;
use crate::search::{saturate, KnowledgeBase, SearchResult};
use crate::statistics::Statistics;
use log::{debug, info};
use std::time::Duration;

/// Answers every query of a problem by refutation.
pub struct Prover<'p> {
    problem: &'p Problem,
    time_limit: Duration,
}

impl<'p> Prover<'p> {
    pub fn new(problem: &'p Problem, time_limit: Duration) -> Self {
        Self {
            problem,
            time_limit,
        }
    }

    /// Add the negated query to a renamed copy of the knowledge base and
    /// try to derive the empty clause.
    pub fn prove(&self, query: &Literal) -> SearchResult {
        let symbols = self.problem.signature();
        let mut fresh = Fresh::default();
        let mut kb = KnowledgeBase::default();

        let negated = Clause::new(symbols, vec![query.negated()]);
        kb.insert(negated.rename(&mut fresh));
        for clause in self.problem.clauses() {
            kb.insert(clause.rename(&mut fresh));
        }

        let statistics = Statistics::new(kb.len());
        let result =
            saturate(symbols, kb, &mut fresh, self.time_limit, &statistics);
        statistics.record();
        debug!("fresh variables: {}", fresh.issued());
        result
    }

    pub fn prove_all(&self) -> Vec<bool> {
        let symbols = self.problem.signature();
        debug!(
            "{} clauses, {} queries",
            self.problem.num_clauses(),
            self.problem.num_queries()
        );
        self.problem
            .queries()
            .iter()
            .map(|query| {
                let result = self.prove(query);
                let reason = match result {
                    SearchResult::Refuted => "refuted",
                    SearchResult::Saturated => "saturated",
                    SearchResult::TimeOut => "timed out",
                };
                info!("{}: {}", query.display(symbols), reason);
                result.is_entailed()
            })
            .collect()
    }
}

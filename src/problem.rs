use crate::prelude::*;

/// A knowledge base and the queries to check against it.
#[derive(Default)]
pub struct Problem {
    symbols: Symbols,
    clauses: Vec<Clause>,
    queries: Vec<Literal>,
}

impl Problem {
    pub fn new(
        symbols: Symbols,
        clauses: Vec<Clause>,
        queries: Vec<Literal>,
    ) -> Self {
        Self {
            symbols,
            clauses,
            queries,
        }
    }

    pub fn signature(&self) -> &Symbols {
        &self.symbols
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn queries(&self) -> &[Literal] {
        &self.queries
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn num_queries(&self) -> usize {
        self.queries.len()
    }
}

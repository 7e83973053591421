use crate::prelude::*;
use fnv::FnvHashMap;

/// Incrementally assembles a `Problem`.
///
/// Variable names are scoped to the clause or query being built: the
/// same name in two different clauses denotes two different variables.
#[derive(Default)]
pub struct ProblemBuilder {
    symbols: Symbols,
    clauses: Vec<Clause>,
    queries: Vec<Literal>,
    literals: Vec<Literal>,
    variables: FnvHashMap<String, Id<Variable>>,
    fresh: Fresh,
}

impl ProblemBuilder {
    pub fn finish(self) -> Problem {
        Problem::new(self.symbols, self.clauses, self.queries)
    }

    pub fn constant(&mut self, name: &str) -> Term {
        Term::Constant(self.symbols.intern(name))
    }

    pub fn variable(&mut self, name: &str) -> Term {
        if let Some(x) = self.variables.get(name) {
            return Term::Variable(*x);
        }
        let x = self.fresh.variable();
        self.variables.insert(name.to_string(), x);
        Term::Variable(x)
    }

    pub fn function(&mut self, name: &str, args: Vec<Term>) -> Term {
        Term::tuple(self.symbols.intern(name), args)
    }

    /// Add a literal to the clause under construction.
    pub fn literal(&mut self, polarity: bool, name: &str, args: Vec<Term>) {
        let predicate = self.symbols.intern(name);
        self.literals.push(Literal::new(polarity, predicate, args));
    }

    /// Close the clause under construction and add it to the knowledge
    /// base.
    pub fn clause(&mut self) {
        let literals = std::mem::take(&mut self.literals);
        self.clauses.push(Clause::new(&self.symbols, literals));
        self.reset_variables();
    }

    /// Close the literal under construction as a query.
    pub fn query(&mut self) {
        let mut literals = std::mem::take(&mut self.literals);
        debug_assert_eq!(literals.len(), 1, "a query is a single literal");
        if let Some(query) = literals.pop() {
            self.queries.push(query);
        }
        self.reset_variables();
    }

    fn reset_variables(&mut self) {
        self.variables.clear();
        self.fresh = Fresh::default();
    }
}

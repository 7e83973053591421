use log::debug;
use std::cell::Cell;

/// Counters for one proof search.
pub struct Statistics {
    initial_clauses: usize,
    passes: Cell<usize>,
    examined_pairs: Cell<usize>,
    skipped_pairs: Cell<usize>,
    resolvents: Cell<usize>,
    retained_clauses: Cell<usize>,
}

impl Statistics {
    pub fn new(initial_clauses: usize) -> Self {
        let passes = Cell::default();
        let examined_pairs = Cell::default();
        let skipped_pairs = Cell::default();
        let resolvents = Cell::default();
        let retained_clauses = Cell::new(initial_clauses);
        Self {
            initial_clauses,
            passes,
            examined_pairs,
            skipped_pairs,
            resolvents,
            retained_clauses,
        }
    }

    pub fn record(&self) {
        debug!("initial clauses: {}", self.initial_clauses);
        debug!("saturation passes: {}", self.passes());
        debug!("examined pairs: {}", self.examined_pairs.get());
        debug!("skipped pairs: {}", self.skipped_pairs.get());
        debug!("resolvents: {}", self.resolvents.get());
        debug!("retained clauses: {}", self.retained_clauses());
    }

    pub fn passes(&self) -> usize {
        self.passes.get()
    }

    pub fn retained_clauses(&self) -> usize {
        self.retained_clauses.get()
    }

    pub fn increment_passes(&self) {
        add(&self.passes, 1);
    }

    pub fn increment_examined_pairs(&self) {
        add(&self.examined_pairs, 1);
    }

    pub fn increment_skipped_pairs(&self) {
        add(&self.skipped_pairs, 1);
    }

    pub fn add_resolvents(&self, resolvents: usize) {
        add(&self.resolvents, resolvents);
    }

    pub fn set_retained_clauses(&self, retained: usize) {
        self.retained_clauses.set(retained);
    }
}

fn add(counter: &Cell<usize>, amount: usize) {
    counter.set(counter.get() + amount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let statistics = Statistics::new(4);
        assert_eq!(statistics.retained_clauses(), 4);
        statistics.increment_passes();
        statistics.increment_passes();
        statistics.add_resolvents(3);
        statistics.add_resolvents(2);
        statistics.increment_skipped_pairs();
        statistics.set_retained_clauses(9);
        assert_eq!(statistics.passes(), 2);
        assert_eq!(statistics.resolvents.get(), 5);
        assert_eq!(statistics.skipped_pairs.get(), 1);
        assert_eq!(statistics.examined_pairs.get(), 0);
        assert_eq!(statistics.retained_clauses(), 9);
    }
}

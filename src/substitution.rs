use crate::prelude::*;
use fnv::FnvHashMap;

/// Variable bindings accumulated during one unification attempt.
///
/// Values never mention a variable bound elsewhere in the map: every
/// `bind` pushes the new binding through all existing values.
#[derive(Clone, Debug, Default)]
pub struct SubstitutionMap {
    bound: FnvHashMap<Id<Variable>, Term>,
}

impl SubstitutionMap {
    /// `term` must not contain `x`, even through existing bindings.
    pub fn bind(&mut self, x: Id<Variable>, term: Term) {
        self.bound.insert(x, term);
        let updated: Vec<(Id<Variable>, Term)> = self
            .bound
            .iter()
            .map(|(y, value)| (*y, value.substitute(self)))
            .collect();
        self.bound.extend(updated);
    }

    pub fn is_bound(&self, x: Id<Variable>) -> bool {
        self.bound.contains_key(&x)
    }

    pub fn resolve(&self, x: Id<Variable>) -> Option<&Term> {
        self.bound.get(&x)
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id<Variable>, &Term)> {
        self.bound.iter().map(|(x, term)| (*x, term))
    }
}

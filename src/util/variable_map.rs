use crate::prelude::*;
use crate::util::fresh::Fresh;
use fnv::FnvHashMap;

/// Renames variables in order of first occurrence.
pub struct VariableMap<'f> {
    map: FnvHashMap<Id<Variable>, Id<Variable>>,
    fresh: &'f mut Fresh,
}

impl<'f> VariableMap<'f> {
    pub fn new(fresh: &'f mut Fresh) -> Self {
        let map = FnvHashMap::default();
        Self { map, fresh }
    }

    pub fn get(&mut self, variable: Id<Variable>) -> Id<Variable> {
        if let Some(renamed) = self.map.get(&variable) {
            return *renamed;
        }
        let renamed = self.fresh.variable();
        self.map.insert(variable, renamed);
        renamed
    }
}

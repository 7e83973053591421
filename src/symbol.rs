use crate::prelude::*;
use fnv::FnvHashMap;

pub struct Symbol {
    pub name: String,
}

/// Interned predicate, function and constant names.
#[derive(Default)]
pub struct Symbols {
    symbols: Block<Symbol>,
    lookup: FnvHashMap<String, Id<Symbol>>,
}

impl Symbols {
    pub fn intern(&mut self, name: &str) -> Id<Symbol> {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }
        let name = name.to_string();
        let id = self.symbols.push(Symbol { name: name.clone() });
        self.lookup.insert(name, id);
        id
    }

    pub fn name(&self, symbol: Id<Symbol>) -> &str {
        &self.symbols[symbol].name
    }

    pub fn len(&self) -> usize {
        self.symbols.len().as_usize()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut symbols = Symbols::default();
        let p = symbols.intern("Parent");
        let q = symbols.intern("Ancestor");
        assert_ne!(p, q);
        assert_eq!(symbols.intern("Parent"), p);
        assert_eq!(symbols.name(q), "Ancestor");
        assert_eq!(symbols.len(), 2);
    }
}

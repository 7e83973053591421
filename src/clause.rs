use crate::prelude::*;
use crate::util::variable_map::VariableMap;
use fnv::{FnvHashMap, FnvHashSet};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::rc::Rc;

/// A disjunction of literals, identified up to variable renaming.
///
/// Literals are kept sorted by `Literal::compare`, negative literals
/// first. `canonical` is the standardized form of the literals and is
/// the only thing equality and hashing look at.
#[derive(Clone, Debug)]
pub struct Clause {
    literals: Rc<[Literal]>,
    split: usize,
    canonical: Rc<[Literal]>,
}

impl Clause {
    pub fn new(symbols: &Symbols, literals: Vec<Literal>) -> Self {
        let mut seen = FnvHashSet::default();
        let mut literals: Vec<Literal> = literals
            .into_iter()
            .filter(|literal| seen.insert(literal.clone()))
            .collect();
        literals.sort_by(|left, right| left.compare(right, symbols));
        let (literals, canonical) = canonical_order(symbols, &literals);
        let split = literals.iter().take_while(|l| !l.polarity).count();
        Self {
            literals: literals.into(),
            split,
            canonical: canonical.into(),
        }
    }

    pub fn empty() -> Self {
        let literals: Rc<[Literal]> = Rc::new([]);
        let canonical = literals.clone();
        let split = 0;
        Self {
            literals,
            split,
            canonical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn negative(&self) -> &[Literal] {
        &self.literals[..self.split]
    }

    pub fn positive(&self) -> &[Literal] {
        &self.literals[self.split..]
    }

    pub(crate) fn negative_range(&self) -> Range<usize> {
        0..self.split
    }

    pub(crate) fn positive_range(&self) -> Range<usize> {
        self.split..self.literals.len()
    }

    /// The canonical representative of this clause's renaming class:
    /// variables are renamed `x0, x1, ...` by first occurrence.
    pub fn standardize(&self) -> Self {
        let literals = self.canonical.clone();
        let split = self.split;
        let canonical = self.canonical.clone();
        Self {
            literals,
            split,
            canonical,
        }
    }

    /// Rename every variable apart from anything `fresh` issued before.
    ///
    /// Renaming keeps literal positions, so the canonical form carries
    /// over unchanged.
    pub fn rename(&self, fresh: &mut Fresh) -> Self {
        let mut map = VariableMap::new(fresh);
        let literals: Vec<Literal> = self
            .literals
            .iter()
            .map(|literal| literal.rename(&mut |x| map.get(x)))
            .collect();
        Self {
            literals: literals.into(),
            split: self.split,
            canonical: self.canonical.clone(),
        }
    }

    pub fn display<'a>(
        &'a self,
        symbols: &'a Symbols,
    ) -> impl fmt::Display + 'a {
        let clause = self;
        ShowClause { symbols, clause }
    }
}

/// Variable names handed out in order of first occurrence.
#[derive(Clone, Default)]
struct Naming {
    map: FnvHashMap<Id<Variable>, Id<Variable>>,
    fresh: Fresh,
}

impl Naming {
    fn apply(&mut self, literal: &Literal) -> Literal {
        let Self { map, fresh } = self;
        let mut name = |x| *map.entry(x).or_insert_with(|| fresh.variable());
        literal.rename(&mut name)
    }
}

/// A prefix of the canonical form, and the literals it was built from.
#[derive(Clone)]
struct Partial {
    used: Vec<bool>,
    naming: Naming,
    order: Vec<Literal>,
    canonical: Vec<Literal>,
}

impl Partial {
    /// Everything the rest of the search depends on.
    fn key(
        &self,
        sorted: &[Literal],
    ) -> (Vec<bool>, Vec<(Id<Variable>, Id<Variable>)>) {
        let mut named = vec![];
        for (literal, used) in sorted.iter().zip(self.used.iter()) {
            if !used {
                literal.atom().variables(&mut |x| {
                    if let Some(y) = self.naming.map.get(&x) {
                        named.push((x, *y));
                    }
                });
            }
        }
        named.sort();
        named.dedup();
        (self.used.clone(), named)
    }
}

/// Order `sorted` so that its standardized form is the least under
/// `Literal::compare_exact` among all orders agreeing with
/// `Literal::compare`.
///
/// Only literals tied under `compare` are permuted. The result depends on
/// the clause up to renaming, not on the order the literals came in.
/// Returns the chosen order and its standardized form.
fn canonical_order(
    symbols: &Symbols,
    sorted: &[Literal],
) -> (Vec<Literal>, Vec<Literal>) {
    let mut frontier = vec![Partial {
        used: vec![false; sorted.len()],
        naming: Naming::default(),
        order: vec![],
        canonical: vec![],
    }];
    let mut start = 0;
    while start < sorted.len() {
        let end = start
            + sorted[start..]
                .iter()
                .take_while(|literal| {
                    literal.compare(&sorted[start], symbols) == Ordering::Equal
                })
                .count();
        for _ in start..end {
            frontier = extend(symbols, sorted, start..end, &frontier);
        }
        start = end;
    }
    match frontier.pop() {
        Some(best) => (best.order, best.canonical),
        None => (vec![], vec![]),
    }
}

/// Every way to extend the frontier by the least next literal from `run`.
fn extend(
    symbols: &Symbols,
    sorted: &[Literal],
    run: Range<usize>,
    frontier: &[Partial],
) -> Vec<Partial> {
    let mut best: Vec<Partial> = vec![];
    let mut seen = FnvHashSet::default();
    for partial in frontier {
        for index in run.clone().filter(|index| !partial.used[*index]) {
            let mut naming = partial.naming.clone();
            let standardized = naming.apply(&sorted[index]);
            let ordering = best
                .first()
                .and_then(|first| first.canonical.last())
                .map(|least| standardized.compare_exact(least, symbols));
            match ordering {
                Some(Ordering::Greater) => continue,
                Some(Ordering::Less) => {
                    best.clear();
                    seen.clear();
                }
                _ => {}
            }
            let mut next = partial.clone();
            next.used[index] = true;
            next.naming = naming;
            next.order.push(sorted[index].clone());
            next.canonical.push(standardized);
            if seen.insert(next.key(sorted)) {
                best.push(next);
            }
        }
    }
    best
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, hash: &mut H) {
        self.canonical.hash(hash);
    }
}

struct ShowClause<'a> {
    symbols: &'a Symbols,
    clause: &'a Clause,
}

impl fmt::Display for ShowClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut literals = self.clause.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{}", first.display(self.symbols))?;
        } else {
            write!(f, "$false")?;
        }
        for rest in literals {
            write!(f, " | {}", rest.display(self.symbols))?;
        }
        Ok(())
    }
}

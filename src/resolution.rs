use crate::prelude::*;
use fnv::FnvHashSet;
use std::ops::Range;

/// Whether some literal of `left` has the same predicate as some
/// literal of `right` with the opposite sign.
///
/// Two literals can only resolve if this holds, so pairs failing it are
/// skipped without losing any resolvent.
pub fn complementary(left: &Clause, right: &Clause) -> bool {
    left.literals().iter().any(|p| {
        right.literals().iter().any(|q| {
            p.polarity != q.polarity && p.predicate() == q.predicate()
        })
    })
}

/// All binary resolvents of `left` and `right`, renamed apart with
/// variables from `fresh`.
pub fn resolve(
    symbols: &Symbols,
    left: &Clause,
    right: &Clause,
    fresh: &mut Fresh,
) -> FnvHashSet<Clause> {
    let mut resolvents = FnvHashSet::default();
    let pairs = [
        (left.positive_range(), right.negative_range()),
        (left.negative_range(), right.positive_range()),
    ];
    for (outer, inner) in pairs.iter().cloned() {
        resolve_ranges(
            symbols,
            left,
            outer,
            right,
            inner,
            fresh,
            &mut resolvents,
        );
    }
    resolvents
}

fn resolve_ranges(
    symbols: &Symbols,
    left: &Clause,
    outer: Range<usize>,
    right: &Clause,
    inner: Range<usize>,
    fresh: &mut Fresh,
    resolvents: &mut FnvHashSet<Clause>,
) {
    for i in outer {
        for j in inner.clone() {
            if let Some(resolvent) = resolve_on(symbols, left, i, right, j) {
                resolvents.insert(resolvent.rename(fresh));
            }
        }
    }
}

fn resolve_on(
    symbols: &Symbols,
    left: &Clause,
    i: usize,
    right: &Clause,
    j: usize,
) -> Option<Clause> {
    let p = &left.literals()[i];
    let q = &right.literals()[j];
    if p.predicate() != q.predicate() {
        return None;
    }
    let subst = p.atom().unify(q.atom(), SubstitutionMap::default())?;
    debug_assert!({
        let (p, q) = (p.substitute(&subst), q.substitute(&subst));
        p.is_complementary(&q)
    });
    let survivors = without(left.literals(), i)
        .chain(without(right.literals(), j))
        .map(|literal| literal.substitute(&subst))
        .collect();
    Some(Clause::new(symbols, survivors))
}

fn without(
    literals: &[Literal],
    skip: usize,
) -> impl Iterator<Item = &Literal> {
    literals
        .iter()
        .enumerate()
        .filter(move |(index, _)| *index != skip)
        .map(|(_, literal)| literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(index: u32) -> Term {
        Term::Variable(Id::new(index))
    }

    struct Fixture {
        symbols: Symbols,
        fresh: Fresh,
    }

    impl Fixture {
        fn new() -> Self {
            let symbols = Symbols::default();
            let fresh = Fresh::default();
            Self { symbols, fresh }
        }

        fn constant(&mut self, name: &str) -> Term {
            Term::Constant(self.symbols.intern(name))
        }

        fn literal(
            &mut self,
            polarity: bool,
            name: &str,
            args: Vec<Term>,
        ) -> Literal {
            Literal::new(polarity, self.symbols.intern(name), args)
        }

        fn clause(&self, literals: Vec<Literal>) -> Clause {
            Clause::new(&self.symbols, literals)
        }

        fn resolve(&mut self, left: &Clause, right: &Clause) -> Vec<String> {
            let mut shown: Vec<String> =
                resolve(&self.symbols, left, right, &mut self.fresh)
                    .iter()
                    .map(|c| {
                        let c = c.standardize();
                        let text = c.display(&self.symbols).to_string();
                        text
                    })
                    .collect();
            shown.sort();
            shown
        }
    }

    #[test]
    fn unit_clauses_resolve_to_empty() {
        let mut fixture = Fixture::new();
        let a = fixture.constant("A");
        let p = fixture.literal(true, "P", vec![var(0)]);
        let not_p = fixture.literal(false, "P", vec![a]);
        let left = fixture.clause(vec![p]);
        let right = fixture.clause(vec![not_p]);
        let resolvents =
            resolve(&fixture.symbols, &left, &right, &mut fixture.fresh);
        assert!(resolvents.contains(&Clause::empty()));
        assert_eq!(resolvents.len(), 1);
    }

    #[test]
    fn no_complementary_pair_yields_nothing() {
        let mut fixture = Fixture::new();
        let p = fixture.literal(true, "P", vec![var(0)]);
        let q = fixture.literal(false, "Q", vec![var(0)]);
        let clause = fixture.clause(vec![p, q]);
        assert!(!complementary(&clause, &clause));
        assert!(fixture.resolve(&clause, &clause).is_empty());
    }

    #[test]
    fn modus_ponens() {
        let mut fixture = Fixture::new();
        let a = fixture.constant("A");
        let not_p = fixture.literal(false, "P", vec![var(0)]);
        let q = fixture.literal(true, "Q", vec![var(0)]);
        let p = fixture.literal(true, "P", vec![a]);
        let rule = fixture.clause(vec![not_p, q]);
        let fact = fixture.clause(vec![p]);
        assert!(complementary(&rule, &fact));
        assert_eq!(fixture.resolve(&rule, &fact), vec!["Q(A)"]);
        assert_eq!(fixture.resolve(&fact, &rule), vec!["Q(A)"]);
    }

    #[test]
    fn every_unifiable_pair_gives_a_resolvent() {
        let mut fixture = Fixture::new();
        let a = fixture.constant("A");
        let b = fixture.constant("B");
        let p_a = fixture.literal(true, "P", vec![a]);
        let p_b = fixture.literal(true, "P", vec![b]);
        let not_p = fixture.literal(false, "P", vec![var(0)]);
        let r = fixture.literal(true, "R", vec![var(0)]);
        let facts = fixture.clause(vec![p_a, p_b]);
        let rule = fixture.clause(vec![not_p, r]);
        assert_eq!(
            fixture.resolve(&facts, &rule),
            vec!["P(A) | R(B)", "P(B) | R(A)"]
        );
    }

    #[test]
    fn failed_unification_contributes_nothing() {
        let mut fixture = Fixture::new();
        let a = fixture.constant("A");
        let b = fixture.constant("B");
        let p = fixture.literal(true, "P", vec![a]);
        let not_p = fixture.literal(false, "P", vec![b]);
        let left = fixture.clause(vec![p]);
        let right = fixture.clause(vec![not_p]);
        assert!(complementary(&left, &right));
        assert!(fixture.resolve(&left, &right).is_empty());
    }

    #[test]
    fn resolvents_use_fresh_variables() {
        let mut fixture = Fixture::new();
        let not_p = fixture.literal(false, "P", vec![var(0)]);
        let q = fixture.literal(true, "Q", vec![var(0), var(1)]);
        let p = fixture.literal(true, "P", vec![var(2)]);
        let rule = fixture.clause(vec![not_p, q]);
        let fact = fixture.clause(vec![p]);
        let resolvents =
            resolve(&fixture.symbols, &rule, &fact, &mut fixture.fresh);
        assert_eq!(resolvents.len(), 1);
        assert_eq!(fixture.fresh.issued(), 2);
        let shown: Vec<String> = resolvents
            .iter()
            .map(|c| c.display(&fixture.symbols).to_string())
            .collect();
        assert_eq!(shown, vec!["Q(x0,x1)"]);
    }
}

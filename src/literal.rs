use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub polarity: bool,
    atom: Term,
}

impl Literal {
    pub fn new(
        polarity: bool,
        predicate: Id<Symbol>,
        args: Vec<Term>,
    ) -> Self {
        let atom = Term::tuple(predicate, args);
        Self { polarity, atom }
    }

    pub fn atom(&self) -> &Term {
        &self.atom
    }

    pub fn predicate(&self) -> Id<Symbol> {
        match &self.atom {
            Term::Tuple(predicate, _) => *predicate,
            _ => unreachable!("literal atoms are always tuples"),
        }
    }

    pub fn args(&self) -> &[Term] {
        match &self.atom {
            Term::Tuple(_, args) => args,
            _ => unreachable!("literal atoms are always tuples"),
        }
    }

    pub fn negated(&self) -> Self {
        let polarity = !self.polarity;
        let atom = self.atom.clone();
        Self { polarity, atom }
    }

    pub fn is_complementary(&self, other: &Self) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    pub fn substitute(&self, subst: &SubstitutionMap) -> Self {
        let polarity = self.polarity;
        let atom = self.atom.substitute(subst);
        Self { polarity, atom }
    }

    pub fn rename<F: FnMut(Id<Variable>) -> Id<Variable>>(
        &self,
        f: &mut F,
    ) -> Self {
        let polarity = self.polarity;
        let atom = self.atom.rename(f);
        Self { polarity, atom }
    }

    /// The order literals take inside a clause.
    ///
    /// Negative literals come first, then literals are ordered by
    /// predicate name, arity and finally by their arguments. Every
    /// variable compares equal to every other variable, so the order is
    /// the same for any renaming of a clause.
    pub fn compare(&self, other: &Self, symbols: &Symbols) -> Ordering {
        self.compare_by(other, symbols, |_, _| Ordering::Equal)
    }

    /// `compare`, with ties between variables broken by index.
    pub fn compare_exact(&self, other: &Self, symbols: &Symbols) -> Ordering {
        self.compare_by(other, symbols, |x, y| x.cmp(&y))
    }

    fn compare_by(
        &self,
        other: &Self,
        symbols: &Symbols,
        variables: VariableOrder,
    ) -> Ordering {
        self.polarity
            .cmp(&other.polarity)
            .then_with(|| {
                let left = symbols.name(self.predicate());
                let right = symbols.name(other.predicate());
                left.cmp(right)
            })
            .then_with(|| self.args().len().cmp(&other.args().len()))
            .then_with(|| {
                compare_args(self.args(), other.args(), symbols, variables)
            })
    }

    pub fn display<'a>(
        &'a self,
        symbols: &'a Symbols,
    ) -> impl fmt::Display + 'a {
        let literal = self;
        ShowLiteral { symbols, literal }
    }
}

type VariableOrder = fn(Id<Variable>, Id<Variable>) -> Ordering;

fn compare_args(
    left: &[Term],
    right: &[Term],
    symbols: &Symbols,
    variables: VariableOrder,
) -> Ordering {
    left.iter()
        .zip(right.iter())
        .map(|(s, t)| compare_terms(s, t, symbols, variables))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn compare_terms(
    left: &Term,
    right: &Term,
    symbols: &Symbols,
    variables: VariableOrder,
) -> Ordering {
    fn rank(term: &Term) -> u8 {
        match term {
            Term::Variable(_) => 0,
            Term::Constant(_) => 1,
            Term::Tuple(_, _) => 2,
        }
    }

    match (left, right) {
        (Term::Variable(x), Term::Variable(y)) => variables(*x, *y),
        (Term::Constant(c), Term::Constant(d)) => {
            symbols.name(*c).cmp(symbols.name(*d))
        }
        (Term::Tuple(f, ss), Term::Tuple(g, ts)) => symbols
            .name(*f)
            .cmp(symbols.name(*g))
            .then_with(|| ss.len().cmp(&ts.len()))
            .then_with(|| compare_args(ss, ts, symbols, variables)),
        _ => rank(left).cmp(&rank(right)),
    }
}

struct ShowLiteral<'a> {
    symbols: &'a Symbols,
    literal: &'a Literal,
}

impl fmt::Display for ShowLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.literal.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.literal.atom.display(self.symbols))
    }
}

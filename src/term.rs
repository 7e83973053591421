use crate::prelude::*;
use std::fmt;
use std::rc::Rc;

pub struct Variable;

/// A constant, a variable, or a tuple standing for either a predicate
/// application or a function application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Constant(Id<Symbol>),
    Variable(Id<Variable>),
    Tuple(Id<Symbol>, Rc<[Term]>),
}

impl Term {
    pub fn tuple(functor: Id<Symbol>, args: Vec<Term>) -> Self {
        Term::Tuple(functor, args.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn unify(
        &self,
        other: &Self,
        subst: SubstitutionMap,
    ) -> Option<SubstitutionMap> {
        match (self, other) {
            (Term::Variable(x), _) => unify_variable(*x, other, subst),
            (_, Term::Variable(y)) => unify_variable(*y, self, subst),
            (Term::Constant(c), Term::Constant(d)) => {
                if c == d {
                    Some(subst)
                } else {
                    None
                }
            }
            (Term::Tuple(f, ss), Term::Tuple(g, ts)) => {
                if f != g || ss.len() != ts.len() {
                    return None;
                }
                ss.iter()
                    .zip(ts.iter())
                    .try_fold(subst, |subst, (s, t)| s.unify(t, subst))
            }
            _ => None,
        }
    }

    pub fn substitute(&self, subst: &SubstitutionMap) -> Self {
        match self {
            Term::Constant(_) => self.clone(),
            Term::Variable(x) => match subst.resolve(*x) {
                Some(bound) => bound.substitute(subst),
                None => self.clone(),
            },
            Term::Tuple(f, args) => {
                let mut modified = false;
                let substituted: Vec<Term> = args
                    .iter()
                    .map(|arg| {
                        let result = arg.substitute(subst);
                        modified |= result != *arg;
                        result
                    })
                    .collect();
                if modified {
                    Term::tuple(*f, substituted)
                } else {
                    self.clone()
                }
            }
        }
    }

    pub fn occurs(&self, x: Id<Variable>, subst: &SubstitutionMap) -> bool {
        match self {
            Term::Constant(_) => false,
            Term::Variable(y) => match subst.resolve(*y) {
                Some(bound) => bound.occurs(x, subst),
                None => x == *y,
            },
            Term::Tuple(_, args) => {
                args.iter().any(|arg| arg.occurs(x, subst))
            }
        }
    }

    /// Left-to-right, depth-first.
    pub fn variables<F: FnMut(Id<Variable>)>(&self, f: &mut F) {
        match self {
            Term::Constant(_) => {}
            Term::Variable(x) => f(*x),
            Term::Tuple(_, args) => {
                for arg in args.iter() {
                    arg.variables(f);
                }
            }
        }
    }

    pub fn rename<F: FnMut(Id<Variable>) -> Id<Variable>>(
        &self,
        f: &mut F,
    ) -> Self {
        match self {
            Term::Constant(_) => self.clone(),
            Term::Variable(x) => Term::Variable(f(*x)),
            Term::Tuple(functor, args) => Term::tuple(
                *functor,
                args.iter().map(|arg| arg.rename(f)).collect(),
            ),
        }
    }

    pub fn display<'a>(
        &'a self,
        symbols: &'a Symbols,
    ) -> impl fmt::Display + 'a {
        let term = self;
        ShowTerm { symbols, term }
    }
}

fn unify_variable(
    x: Id<Variable>,
    term: &Term,
    subst: SubstitutionMap,
) -> Option<SubstitutionMap> {
    if let Some(bound) = subst.resolve(x) {
        let bound = bound.clone();
        return bound.unify(term, subst);
    }
    let term = term.substitute(&subst);
    if let Term::Variable(y) = &term {
        if x == *y {
            return Some(subst);
        }
    }
    if term.occurs(x, &subst) {
        return None;
    }
    let mut subst = subst;
    subst.bind(x, term);
    Some(subst)
}

struct ShowTerm<'a> {
    symbols: &'a Symbols,
    term: &'a Term,
}

impl fmt::Display for ShowTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.term {
            Term::Constant(c) => write!(f, "{}", self.symbols.name(*c)),
            Term::Variable(x) => write!(f, "x{}", x.index()),
            Term::Tuple(functor, args) => {
                write!(f, "{}(", self.symbols.name(*functor))?;
                let mut args = args.iter();
                if let Some(first) = args.next() {
                    write!(f, "{}", first.display(self.symbols))?;
                    for rest in args {
                        write!(f, ",{}", rest.display(self.symbols))?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

pub use crate::clause::Clause;
pub use crate::literal::Literal;
pub use crate::problem::Problem;
pub use crate::substitution::SubstitutionMap;
pub use crate::symbol::{Symbol, Symbols};
pub use crate::term::{Term, Variable};
pub use crate::util::block::Block;
pub use crate::util::fresh::Fresh;
pub use crate::util::id::Id;

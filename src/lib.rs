pub mod clause;
pub mod io;
pub mod literal;
pub mod options;
pub mod prelude;
pub mod problem;
pub mod problem_builder;
pub mod prover;
pub mod resolution;
pub mod search;
pub mod statistics;
pub mod substitution;
pub mod symbol;
pub mod term;
pub mod util;

//! # truthtab: truth tables for propositional logic
//!
//! **`truthtab`** parses a propositional-logic expression, enumerates every
//! truth assignment of its variables, evaluates every sub-expression under
//! each assignment, and renders the result as an aligned truth table.
//!
//! ## Expression syntax
//!
//! Variable names are maximal runs of ASCII letters (case-sensitive, so
//! `ab` is one two-letter variable). Grouping is expressed purely through
//! parentheses --- there is no operator precedence; an operator symbol tags
//! the group it appears in. The connectives are:
//!
//! | symbol | connective |
//! |--------|---------------|
//! | `!` | not (1 operand) |
//! | `&` | and |
//! | `\|` | or |
//! | `*` | xor |
//! | `>` | implication |
//! | `^` | biconditional |
//!
//! All other characters (digits, whitespace, punctuation) are skipped.
//!
//! ## Pipeline
//!
//! raw string → [`parser::parse`] → syntax tree → [`expr::compile`] →
//! operation tree → [`table::TruthTable::build`] → scenarios →
//! [`render::render`] → output lines. [`truth_table`] runs the whole
//! pipeline in one call:
//!
//! ```rust
//! use truthtab::{truth_table, Mode};
//!
//! let lines = truth_table("a & b", Mode::Plain)?;
//! assert_eq!(lines[0], "a & b & a ∧ b \\\\");
//! assert_eq!(lines[1], "T & T &   T   \\\\");
//! # Ok::<(), truthtab::Error>(())
//! ```

pub mod ast;
pub mod expr;
pub mod parser;
pub mod render;
pub mod table;

use thiserror::Error;

pub use crate::render::Mode;

/// Any failure of the parse → compile → enumerate pipeline.
///
/// All failures are detected before enumeration begins; no partial table is
/// ever produced.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] parser::ParseError),
    #[error(transparent)]
    Compile(#[from] expr::CompileError),
    #[error(transparent)]
    Table(#[from] table::TableError),
}

/// Renders the truth table of `input` as output lines (header first).
pub fn truth_table(input: &str, mode: Mode) -> Result<Vec<String>, Error> {
    let tree = parser::parse(input)?;
    let compiled = expr::compile(tree)?;
    let table = table::TruthTable::build(&compiled)?;
    Ok(render::render(&table, mode))
}

//! Compiles the parse tree into an operation tree and collects variables.

use thiserror::Error;

use crate::ast::{Connective, NodeChild, SyntaxNode};

/// A compiled sub-expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    /// A bare variable, identified by its name.
    Var(String),
    /// A connective applied to compiled operands.
    Op(Operation),
}

/// A connective with its operands, in left-to-right source order.
///
/// The order matters for asymmetric connectives (implication).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Operation {
    pub connective: Connective,
    pub operands: Vec<Expr>,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CompileError {
    #[error("invalid operand count: {connective} takes {expected} operand(s), found {found}")]
    ArityMismatch {
        connective: Connective,
        expected: usize,
        found: usize,
    },
    #[error("group without an operator must contain exactly one operand, found {found}")]
    UngroupedOperands { found: usize },
    #[error("empty expression")]
    EmptyGroup,
}

/// Compiles a syntax tree into an [`Expr`], post-order.
///
/// Operator-less single-child nodes are transparent grouping wrappers and
/// collapse into their child. Arity is checked here, before any enumeration
/// work begins.
pub fn compile(node: SyntaxNode) -> Result<Expr, CompileError> {
    let operands = node
        .children
        .into_iter()
        .map(|child| match child {
            NodeChild::Var(name) => Ok(Expr::Var(name)),
            NodeChild::Group(group) => compile(group),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match node.operator {
        None => match operands.len() {
            1 => Ok(operands.into_iter().next().unwrap()),
            0 => Err(CompileError::EmptyGroup),
            found => Err(CompileError::UngroupedOperands { found }),
        },
        Some(connective) => {
            let expected = connective.arity();
            if operands.len() != expected {
                return Err(CompileError::ArityMismatch {
                    connective,
                    expected,
                    found: operands.len(),
                });
            }
            Ok(Expr::Op(Operation {
                connective,
                operands,
            }))
        }
    }
}

/// Ordered, duplicate-free variable names of the expression, in
/// first-encountered order under a depth-first left-to-right traversal.
pub fn variables(expr: &Expr) -> Vec<String> {
    let mut vars = Vec::new();
    collect(expr, &mut vars);
    vars
}

fn collect(expr: &Expr, vars: &mut Vec<String>) {
    match expr {
        Expr::Var(name) => {
            if !vars.iter().any(|v| v == name) {
                vars.push(name.clone());
            }
        }
        Expr::Op(op) => {
            for operand in &op.operands {
                collect(operand, vars);
            }
        }
    }
}

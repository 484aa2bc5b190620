//! Scenario enumeration: every assignment, every operation value.
//!
//! The operation tree is flattened into reversed pre-order, so every
//! operation's operands appear earlier in the list (pre-order visits a node
//! before its children; reversing yields children-before-parents). Each
//! scenario is then evaluated strictly in list order, with operands looked
//! up by position.

use log::debug;
use thiserror::Error;

use crate::ast::Connective;
use crate::expr::{self, Expr, Operation};

/// An operand of a flattened operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OperandRef {
    /// Index into the variable set.
    Var(usize),
    /// Index into the flattened operation list; always less than the index
    /// of the operation holding the reference.
    Op(usize),
}

/// One entry of the flattened operation list.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlatOp {
    pub connective: Connective,
    pub operands: Vec<OperandRef>,
}

/// One row of the truth table: a total assignment plus every operation's
/// value under it. Immutable once built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scenario {
    /// Variable values, parallel to [`TruthTable::variables`].
    pub assignment: Vec<bool>,
    /// Operation values, parallel to [`TruthTable::operations`].
    pub values: Vec<bool>,
}

/// The fully materialized truth table. All `2^n` scenarios are computed
/// before any rendering happens; nothing is streamed.
#[derive(Debug, Clone)]
pub struct TruthTable {
    /// Distinct variable names, first-seen order.
    pub variables: Vec<String>,
    /// Operations in evaluation order (innermost first, root last).
    pub operations: Vec<FlatOp>,
    /// All `2^n` rows, in binary-counter order.
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum TableError {
    #[error("expression contains no variables")]
    NoVariables,
    #[error("too many variables: {0} (cannot materialize 2^{0} rows)")]
    TooManyVariables(usize),
}

impl TruthTable {
    /// Builds the complete truth table for a compiled expression.
    ///
    /// The first variable is the slowest-changing column (true for the
    /// first half of the rows), the last variable alternates every row.
    pub fn build(expr: &Expr) -> Result<Self, TableError> {
        let variables = expr::variables(expr);
        let n = variables.len();
        if n == 0 {
            return Err(TableError::NoVariables);
        }
        let rows = 1usize
            .checked_shl(n as u32)
            .ok_or(TableError::TooManyVariables(n))?;

        let operations = flatten(expr, &variables);
        debug!(
            "{} variable(s), {} operation(s), {} scenario(s)",
            n,
            operations.len(),
            rows
        );

        let mut scenarios = Vec::with_capacity(rows);
        for r in 0..rows {
            let assignment: Vec<bool> = (0..n)
                .map(|f| {
                    let period = 1usize << (n - f);
                    (r % period) < period / 2
                })
                .collect();

            let mut values: Vec<bool> = Vec::with_capacity(operations.len());
            for op in &operations {
                let args: Vec<bool> = op
                    .operands
                    .iter()
                    .map(|operand| match operand {
                        OperandRef::Var(v) => assignment[*v],
                        OperandRef::Op(o) => values[*o],
                    })
                    .collect();
                values.push(op.connective.apply(&args));
            }
            scenarios.push(Scenario { assignment, values });
        }

        Ok(TruthTable {
            variables,
            operations,
            scenarios,
        })
    }
}

/// Flattens the operation tree into reversed pre-order.
fn flatten(expr: &Expr, variables: &[String]) -> Vec<FlatOp> {
    let total = count_ops(expr);
    let mut slots: Vec<Option<FlatOp>> = vec![None; total];
    let mut next_preorder = 0;
    if let Expr::Op(op) = expr {
        fill(op, variables, &mut next_preorder, &mut slots);
    }
    slots
        .into_iter()
        .map(|slot| slot.expect("every slot is filled"))
        .collect()
}

fn count_ops(expr: &Expr) -> usize {
    match expr {
        Expr::Var(_) => 0,
        Expr::Op(op) => 1 + op.operands.iter().map(count_ops).sum::<usize>(),
    }
}

/// Assigns `op` its pre-order number, recurses into operand operations, and
/// writes the operation into its reversed slot. Returns that slot index.
fn fill(
    op: &Operation,
    variables: &[String],
    next_preorder: &mut usize,
    slots: &mut Vec<Option<FlatOp>>,
) -> usize {
    let preorder = *next_preorder;
    *next_preorder += 1;
    let slot = slots.len() - 1 - preorder;

    let operands = op
        .operands
        .iter()
        .map(|operand| match operand {
            Expr::Var(name) => {
                let index = variables
                    .iter()
                    .position(|v| v == name)
                    .expect("variable was collected");
                OperandRef::Var(index)
            }
            Expr::Op(child) => OperandRef::Op(fill(child, variables, next_preorder, slots)),
        })
        .collect();

    slots[slot] = Some(FlatOp {
        connective: op.connective,
        operands,
    });
    slot
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::expr::compile;
    use crate::parser::parse;

    fn table(input: &str) -> TruthTable {
        let expr = compile(parse(input).unwrap()).unwrap();
        TruthTable::build(&expr).unwrap()
    }

    /// The root operation sits at the end of the flattened list.
    fn root_values(table: &TruthTable) -> Vec<bool> {
        table
            .scenarios
            .iter()
            .map(|s| *s.values.last().unwrap())
            .collect()
    }

    #[test]
    fn test_row_and_column_counts() {
        let t = table("(a & b) | (c * d)");
        assert_eq!(t.variables.len(), 4);
        assert_eq!(t.operations.len(), 3);
        assert_eq!(t.scenarios.len(), 16);
        for scenario in &t.scenarios {
            assert_eq!(scenario.assignment.len(), 4);
            assert_eq!(scenario.values.len(), 3);
        }
    }

    #[test]
    fn test_enumeration_order() {
        let t = table("(a & b) > c");
        let rows = t.scenarios.len();
        // First variable: true for the first half of the rows.
        for (r, scenario) in t.scenarios.iter().enumerate() {
            assert_eq!(scenario.assignment[0], r < rows / 2);
        }
        // Last variable: alternates every row, starting with true.
        for (r, scenario) in t.scenarios.iter().enumerate() {
            assert_eq!(scenario.assignment[2], r % 2 == 0);
        }
    }

    #[test]
    fn test_flatten_reversed_preorder() {
        // Pre-order is [or, a&b, c&d]; reversed puts c&d first, root last.
        let t = table("(a & b) | (c & d)");
        assert_eq!(
            t.operations[0].operands,
            vec![OperandRef::Var(2), OperandRef::Var(3)]
        );
        assert_eq!(
            t.operations[1].operands,
            vec![OperandRef::Var(0), OperandRef::Var(1)]
        );
        assert_eq!(
            t.operations[2].operands,
            vec![OperandRef::Op(1), OperandRef::Op(0)]
        );
        assert_eq!(t.operations[2].connective, Connective::Or);
    }

    #[test]
    fn test_conjunction_values() {
        let t = table("a & b");
        assert_eq!(root_values(&t), vec![true, false, false, false]);
    }

    #[test]
    fn test_implication_values() {
        // False only for a=T, b=F (row 1).
        let t = table("a > b");
        assert_eq!(root_values(&t), vec![true, false, true, true]);
    }

    #[test]
    fn test_biconditional_values() {
        let t = table("a ^ b");
        assert_eq!(root_values(&t), vec![true, false, false, true]);
    }

    #[test]
    fn test_xor_values() {
        let t = table("a * b");
        assert_eq!(root_values(&t), vec![false, true, true, false]);
    }

    #[test]
    fn test_negated_group() {
        // Negation applies to the whole disjunction.
        let t = table("!(a | b)");
        assert_eq!(t.operations.len(), 2);
        assert_eq!(root_values(&t), vec![false, false, false, true]);
    }

    #[test]
    fn test_nested_operand_lookup() {
        // (a & b) | (a & b): two distinct operations, both feeding the root.
        let t = table("(a & b) | (a & b)");
        assert_eq!(t.variables.len(), 2);
        assert_eq!(t.operations.len(), 3);
        assert_eq!(root_values(&t), vec![true, false, false, false]);
    }

    #[test]
    fn test_bare_variable_has_no_operations() {
        let t = table("a");
        assert_eq!(t.variables, vec!["a".to_string()]);
        assert!(t.operations.is_empty());
        assert_eq!(t.scenarios.len(), 2);
        assert!(t.scenarios[0].assignment[0]);
        assert!(!t.scenarios[1].assignment[0]);
    }

    #[test]
    fn test_scenarios_are_deterministic() {
        let a = table("(a | b) ^ (a & b)");
        let b = table("(a | b) ^ (a & b)");
        assert_eq!(a.scenarios, b.scenarios);
    }
}

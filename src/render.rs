//! Renders a truth table as aligned text lines.

use crate::ast::Connective;
use crate::table::{OperandRef, TruthTable};

/// Output notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Mode {
    /// Unicode operator symbols.
    #[default]
    Plain,
    /// LaTeX operator macros; operation titles are wrapped in `$...$`.
    Latex,
}

/// Column delimiter, shared by both modes.
const SEPARATOR: &str = " & ";
/// Row terminator, suitable for a LaTeX tabular environment.
const ROW_END: &str = " \\\\";

fn label(connective: Connective, mode: Mode, args: &[&str]) -> String {
    match mode {
        Mode::Plain => match connective {
            Connective::Not => format!("˜{}", args[0]),
            Connective::And => format!("{} ∧ {}", args[0], args[1]),
            Connective::Or => format!("{} ∨ {}", args[0], args[1]),
            Connective::Xor => format!("{} ⊕ {}", args[0], args[1]),
            Connective::Implication => format!("{} ⇒ {}", args[0], args[1]),
            Connective::Biconditional => format!("{} ⇔ {}", args[0], args[1]),
        },
        Mode::Latex => match connective {
            Connective::Not => format!("\\sim {}", args[0]),
            Connective::And => format!("{} \\wedge {}", args[0], args[1]),
            Connective::Or => format!("{} \\vee {}", args[0], args[1]),
            Connective::Xor => format!("{} \\oplus {}", args[0], args[1]),
            Connective::Implication => format!("{} \\Rightarrow {}", args[0], args[1]),
            Connective::Biconditional => format!("{} \\Leftrightarrow {}", args[0], args[1]),
        },
    }
}

/// Column titles: variable names verbatim, then one title per operation in
/// list order (innermost first, root last).
///
/// Operation titles substitute the already-built titles of their operands
/// into the connective's label. In LaTeX mode only the outermost title of a
/// column is wrapped in `$...$`, not the nested sub-labels.
pub fn titles(table: &TruthTable, mode: Mode) -> Vec<String> {
    let mut op_labels: Vec<String> = Vec::with_capacity(table.operations.len());
    for op in &table.operations {
        let built = {
            let args: Vec<&str> = op
                .operands
                .iter()
                .map(|operand| match operand {
                    OperandRef::Var(v) => table.variables[*v].as_str(),
                    OperandRef::Op(o) => op_labels[*o].as_str(),
                })
                .collect();
            label(op.connective, mode, &args)
        };
        op_labels.push(built);
    }

    let mut titles = table.variables.clone();
    for op_label in op_labels {
        titles.push(match mode {
            Mode::Plain => op_label,
            Mode::Latex => format!("${}$", op_label),
        });
    }
    titles
}

/// Renders the header line plus one line per scenario.
pub fn render(table: &TruthTable, mode: Mode) -> Vec<String> {
    let titles = titles(table, mode);
    // Widths in display characters, so multi-byte symbols count as one.
    let widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();

    let mut lines = Vec::with_capacity(table.scenarios.len() + 1);
    lines.push(format!("{}{}", titles.join(SEPARATOR), ROW_END));

    for scenario in &table.scenarios {
        let cells: Vec<String> = scenario
            .assignment
            .iter()
            .chain(scenario.values.iter())
            .zip(&widths)
            .map(|(&value, &width)| pad_cell(if value { 'T' } else { 'F' }, width))
            .collect();
        lines.push(format!("{}{}", cells.join(SEPARATOR), ROW_END));
    }
    lines
}

/// Centers a one-character cell within `width` display columns: pad-start
/// to `ceil(width / 2)`, then pad-end to `width`.
fn pad_cell(value: char, width: usize) -> String {
    let start = (width + 1) / 2;
    let mut cell = String::with_capacity(width);
    for _ in 1..start {
        cell.push(' ');
    }
    cell.push(value);
    for _ in start..width {
        cell.push(' ');
    }
    cell
}

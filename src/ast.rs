//! Parse-tree types and the six propositional connectives.

use std::fmt;

/// A propositional connective.
///
/// The connective carries its own semantics: [`arity`][Connective::arity]
/// fixes the operand count and [`apply`][Connective::apply] is the boolean
/// combinator. Display labels live in [`render`][crate::render], since they
/// depend on the output notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Xor,
    Implication,
    Biconditional,
}

impl Connective {
    /// Maps an operator symbol to its connective.
    ///
    /// Returns `None` for symbols with no connective assigned (`<` is
    /// tokenized but reserved).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' => Some(Connective::Not),
            '&' => Some(Connective::And),
            '|' => Some(Connective::Or),
            '*' => Some(Connective::Xor),
            '>' => Some(Connective::Implication),
            '^' => Some(Connective::Biconditional),
            _ => None,
        }
    }

    /// Number of operands the connective takes.
    pub fn arity(self) -> usize {
        match self {
            Connective::Not => 1,
            _ => 2,
        }
    }

    /// Applies the connective to its operand values, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `args.len() != self.arity()`. The compiler checks arity
    /// before any evaluation happens, so this is unreachable for compiled
    /// expressions.
    pub fn apply(self, args: &[bool]) -> bool {
        match (self, args) {
            (Connective::Not, [a]) => !a,
            (Connective::And, [a, b]) => *a && *b,
            (Connective::Or, [a, b]) => *a || *b,
            (Connective::Xor, [a, b]) => (*a || *b) && !(*a && *b),
            (Connective::Implication, [a, b]) => !*a || (*a && *b),
            (Connective::Biconditional, [a, b]) => a == b,
            _ => panic!("{} applied to {} operand(s)", self, args.len()),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Connective::Not => "not",
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Xor => "xor",
            Connective::Implication => "implication",
            Connective::Biconditional => "biconditional",
        };
        write!(f, "{}", name)
    }
}

/// One node of the parse tree: an optional operator tag over ordered
/// children.
///
/// Grouping is determined purely by parentheses. A node without an operator
/// is a transparent grouping wrapper; the compiler collapses it into its
/// single child.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SyntaxNode {
    pub operator: Option<Connective>,
    pub children: Vec<NodeChild>,
}

/// A child of a [`SyntaxNode`]: either a variable leaf or a nested group.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum NodeChild {
    Var(String),
    Group(SyntaxNode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping() {
        assert_eq!(Connective::from_symbol('!'), Some(Connective::Not));
        assert_eq!(Connective::from_symbol('&'), Some(Connective::And));
        assert_eq!(Connective::from_symbol('|'), Some(Connective::Or));
        assert_eq!(Connective::from_symbol('*'), Some(Connective::Xor));
        assert_eq!(Connective::from_symbol('>'), Some(Connective::Implication));
        assert_eq!(Connective::from_symbol('^'), Some(Connective::Biconditional));
        assert_eq!(Connective::from_symbol('<'), None);
        assert_eq!(Connective::from_symbol('('), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Connective::Not.arity(), 1);
        assert_eq!(Connective::And.arity(), 2);
        assert_eq!(Connective::Implication.arity(), 2);
    }

    #[test]
    fn test_not() {
        assert!(!Connective::Not.apply(&[true]));
        assert!(Connective::Not.apply(&[false]));
    }

    #[test]
    fn test_and() {
        assert!(Connective::And.apply(&[true, true]));
        assert!(!Connective::And.apply(&[true, false]));
        assert!(!Connective::And.apply(&[false, true]));
        assert!(!Connective::And.apply(&[false, false]));
    }

    #[test]
    fn test_or() {
        assert!(Connective::Or.apply(&[true, true]));
        assert!(Connective::Or.apply(&[true, false]));
        assert!(Connective::Or.apply(&[false, true]));
        assert!(!Connective::Or.apply(&[false, false]));
    }

    #[test]
    fn test_xor() {
        assert!(!Connective::Xor.apply(&[true, true]));
        assert!(Connective::Xor.apply(&[true, false]));
        assert!(Connective::Xor.apply(&[false, true]));
        assert!(!Connective::Xor.apply(&[false, false]));
    }

    #[test]
    fn test_implication() {
        // False only when the antecedent holds and the consequent fails.
        assert!(Connective::Implication.apply(&[true, true]));
        assert!(!Connective::Implication.apply(&[true, false]));
        assert!(Connective::Implication.apply(&[false, true]));
        assert!(Connective::Implication.apply(&[false, false]));
    }

    #[test]
    fn test_biconditional() {
        assert!(Connective::Biconditional.apply(&[true, true]));
        assert!(!Connective::Biconditional.apply(&[true, false]));
        assert!(!Connective::Biconditional.apply(&[false, true]));
        assert!(Connective::Biconditional.apply(&[false, false]));
    }

    #[test]
    #[should_panic]
    fn test_wrong_arity_panics() {
        Connective::Not.apply(&[true, false]);
    }
}

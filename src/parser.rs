//! Tokenizer and parse-tree builder.
//!
//! Grouping is determined purely by parentheses, never by operator
//! precedence: an operator symbol tags whichever group is currently open.
//! `a & b` and `(a & b)` therefore build different trees (the latter has a
//! grouping wrapper around the conjunction), but compile to the same
//! operation.

use log::debug;
use thiserror::Error;

use crate::ast::{Connective, NodeChild, SyntaxNode};

/// The fixed operator/grouping alphabet.
const SYMBOLS: &str = "|&!()*<>^";

/// A lexical token with its byte offset in the input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TokenKind {
    /// A maximal run of ASCII letters: one variable name, case-sensitive.
    Ident(String),
    /// One of the symbols `| & ! ( ) * < > ^`.
    Symbol(char),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("unbalanced parentheses: unmatched ')' at offset {offset}")]
    UnmatchedClose { offset: usize },
    #[error("unbalanced parentheses: {open} group(s) left open at end of input")]
    UnclosedGroup { open: usize },
    #[error("conflicting operator '{symbol}' at offset {offset}: this group already has an operator")]
    ConflictingOperator { symbol: char, offset: usize },
    #[error("reserved symbol '{symbol}' at offset {offset}")]
    ReservedSymbol { symbol: char, offset: usize },
}

/// Splits the input into tokens.
///
/// Characters outside the alphabet (digits, whitespace, punctuation) are
/// silently skipped, so `a & b` and `a&b` tokenize identically.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_ascii_alphabetic() {
            let mut name = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !c.is_ascii_alphabetic() {
                    break;
                }
                name.push(c);
                chars.next();
            }
            tokens.push(Token {
                kind: TokenKind::Ident(name),
                offset,
            });
        } else {
            if SYMBOLS.contains(ch) {
                tokens.push(Token {
                    kind: TokenKind::Symbol(ch),
                    offset,
                });
            }
            chars.next();
        }
    }
    tokens
}

/// Parses an expression string into its syntax tree.
///
/// Maintains an explicit stack of open groups; the top of the stack is the
/// current context. `(` pushes a fresh group, `)` pops it into its parent's
/// children, an operator symbol tags the current group, and an identifier
/// becomes a variable child of the current group.
pub fn parse(input: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = tokenize(input);
    debug!("tokenized {:?} into {} token(s)", input, tokens.len());

    let mut stack: Vec<SyntaxNode> = vec![SyntaxNode::default()];
    for token in tokens {
        match token.kind {
            TokenKind::Ident(name) => {
                let top = stack.last_mut().unwrap();
                top.children.push(NodeChild::Var(name));
            }
            TokenKind::Symbol('(') => {
                stack.push(SyntaxNode::default());
            }
            TokenKind::Symbol(')') => {
                // The bottom of the stack is the root, which is not closable.
                if stack.len() < 2 {
                    return Err(ParseError::UnmatchedClose {
                        offset: token.offset,
                    });
                }
                let group = stack.pop().unwrap();
                let top = stack.last_mut().unwrap();
                top.children.push(NodeChild::Group(group));
            }
            TokenKind::Symbol(symbol) => {
                let Some(connective) = Connective::from_symbol(symbol) else {
                    return Err(ParseError::ReservedSymbol {
                        symbol,
                        offset: token.offset,
                    });
                };
                let top = stack.last_mut().unwrap();
                if top.operator.is_some() {
                    return Err(ParseError::ConflictingOperator {
                        symbol,
                        offset: token.offset,
                    });
                }
                top.operator = Some(connective);
            }
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::UnclosedGroup {
            open: stack.len() - 1,
        });
    }
    Ok(stack.pop().unwrap())
}

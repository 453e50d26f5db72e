//! Token kinds the source lexer attaches to parse nodes.
//!
//! These are the raw lexical categories of the Hive grammar; the
//! translator's classifier maps them onto target operator enums.

use serde::{Deserialize, Serialize};

/// Arithmetic operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticToken {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
}

/// Comparison operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonToken {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Logical connective tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalToken {
    And,
    Or,
}

/// Unary sign tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignToken {
    Plus,
    Minus,
}

/// The grammar exposes both a NOT and a distinct NON token; they are
/// treated identically everywhere negation is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegationToken {
    Not,
    Non,
}

/// Interval field tokens, singular and plural spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalFieldToken {
    Year,
    Years,
    Month,
    Months,
    Day,
    Days,
    Hour,
    Hours,
    Minute,
    Minutes,
    Second,
    Seconds,
}

/// Window frame type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameTypeToken {
    Range,
    Rows,
}

/// Frame bound direction tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundDirectionToken {
    Preceding,
    Following,
}

/// Sort ordering tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingToken {
    Asc,
    Desc,
}

/// NULLS FIRST / NULLS LAST tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullOrderingToken {
    First,
    Last,
}

/// Comparison quantifier tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantifierToken {
    All,
    Any,
    Some,
}

/// Special date/time function tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateTimeFunctionToken {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Localtime,
    Localtimestamp,
}

/// Set operation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperatorToken {
    Union,
    Intersect,
    Except,
}

/// ALL / DISTINCT set quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetQuantifier {
    All,
    Distinct,
}

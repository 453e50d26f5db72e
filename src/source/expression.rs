//! Expression, literal and identifier nodes of the source parse tree.
//!
//! Raw token text is carried as written (identifier delimiters, string
//! quotes, the binary-literal marker); the translator applies unescaping
//! and policy checks.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::source::query::{Query, SortItem};
use crate::source::tokens::*;
use crate::source::types::TypeNode;

/// How an identifier was written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    Unquoted,
    /// Double-quoted; `text` includes the surrounding quotes.
    Quoted,
    /// Back-quoted; `text` includes the surrounding backticks.
    BackQuoted,
    /// Lexed as an identifier but starting with a digit.
    Digit,
}

/// An identifier token, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub text: String,
    pub style: QuoteStyle,
    pub location: Location,
}

impl Identifier {
    pub fn unquoted(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            style: QuoteStyle::Unquoted,
            location,
        }
    }
}

/// A dot-separated name, one identifier per segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub parts: Vec<Identifier>,
}

impl QualifiedName {
    pub fn new(parts: Vec<Identifier>) -> Self {
        Self { parts }
    }

    /// Location of the first segment.
    pub fn location(&self) -> Location {
        self.parts[0].location
    }
}

/// A string literal token; `raw` includes the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub raw: String,
    pub location: Location,
}

impl StringLiteral {
    pub fn new(raw: impl Into<String>, location: Location) -> Self {
        Self {
            raw: raw.into(),
            location,
        }
    }
}

/// The type name of a typed literal constructor (`TYPE 'value'`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeConstructorName {
    DoublePrecision,
    Name(String),
}

/// Literal tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null { location: Location },
    String(StringLiteral),
    /// `X'..'`; `raw` includes the marker and quotes.
    Binary { raw: String, location: Location },
    Boolean { value: bool, location: Location },
    Integer { text: String, location: Location },
    Decimal { text: String, location: Location },
    Double { text: String, location: Location },
    Interval {
        value: String,
        field: IntervalFieldToken,
        location: Location,
    },
    TypeConstructor {
        type_name: TypeConstructorName,
        value: StringLiteral,
        location: Location,
    },
}

impl Literal {
    pub fn location(&self) -> Location {
        match self {
            Literal::Null { location }
            | Literal::Binary { location, .. }
            | Literal::Boolean { location, .. }
            | Literal::Integer { location, .. }
            | Literal::Decimal { location, .. }
            | Literal::Double { location, .. }
            | Literal::Interval { location, .. }
            | Literal::TypeConstructor { location, .. } => *location,
            Literal::String(s) => s.location,
        }
    }
}

/// `WHEN condition THEN result`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub condition: Expression,
    pub result: Expression,
    pub location: Location,
}

/// An `OVER (...)` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Over {
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<SortItem>,
    /// Location of the ORDER token, when an ORDER BY is present.
    pub order_location: Option<Location>,
    pub frame: Option<WindowFrame>,
    pub location: Location,
}

/// A window frame specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub frame_type: FrameTypeToken,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
    pub location: Location,
}

/// A window frame boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameBound {
    Unbounded {
        direction: BoundDirectionToken,
        location: Location,
    },
    Bounded {
        direction: BoundDirectionToken,
        value: Box<Expression>,
        location: Location,
    },
    CurrentRow { location: Location },
}

/// Value and boolean expression productions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    /// A positional parameter marker (`?`).
    Parameter { location: Location },
    LogicalBinary {
        operator: LogicalToken,
        operator_location: Location,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Not {
        value: Box<Expression>,
        location: Location,
    },
    Comparison {
        operator: ComparisonToken,
        operator_location: Location,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    DistinctFrom {
        negation: Option<NegationToken>,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Location,
    },
    Between {
        negation: Option<NegationToken>,
        value: Box<Expression>,
        lower: Box<Expression>,
        upper: Box<Expression>,
        location: Location,
    },
    NullPredicate {
        negation: Option<NegationToken>,
        value: Box<Expression>,
        location: Location,
    },
    Like {
        negation: Option<NegationToken>,
        value: Box<Expression>,
        pattern: Box<Expression>,
        location: Location,
    },
    Rlike { location: Location },
    Regexp { location: Location },
    InList {
        negation: Option<NegationToken>,
        value: Box<Expression>,
        items: Vec<Expression>,
        location: Location,
    },
    InSubquery {
        negation: Option<NegationToken>,
        value: Box<Expression>,
        query: Box<Query>,
        location: Location,
    },
    Exists {
        query: Box<Query>,
        location: Location,
    },
    QuantifiedComparison {
        operator: ComparisonToken,
        operator_location: Location,
        quantifier: QuantifierToken,
        value: Box<Expression>,
        query: Box<Query>,
    },
    ArithmeticUnary {
        sign: SignToken,
        value: Box<Expression>,
        location: Location,
    },
    ArithmeticBinary {
        operator: ArithmeticToken,
        operator_location: Location,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `&`, `|`, `^`, `~` arithmetic; always rejected.
    BitArithmetic { location: Location },
    /// `left || right`; location is the operator token's.
    Concat {
        left: Box<Expression>,
        right: Box<Expression>,
        location: Location,
    },
    Row {
        items: Vec<Expression>,
        location: Location,
    },
    Array {
        items: Vec<Expression>,
        location: Location,
    },
    Cast {
        expression: Box<Expression>,
        target: TypeNode,
        try_cast: bool,
        location: Location,
    },
    SpecialDateTimeFunction {
        function: DateTimeFunctionToken,
        location: Location,
    },
    CurrentUser { location: Location },
    Extract {
        field: Identifier,
        value: Box<Expression>,
        location: Location,
    },
    Substring {
        arguments: Vec<Expression>,
        location: Location,
    },
    Position {
        arguments: Vec<Expression>,
        location: Location,
    },
    Normalize {
        value: Box<Expression>,
        form: Option<String>,
        location: Location,
    },
    Subscript {
        value: Box<Expression>,
        index: Box<Expression>,
        location: Location,
    },
    Subquery {
        query: Box<Query>,
        location: Location,
    },
    Dereference {
        base: Box<Expression>,
        field: Identifier,
        location: Location,
    },
    FunctionCall {
        name: QualifiedName,
        distinct: bool,
        over: Option<Over>,
        arguments: Vec<Expression>,
        location: Location,
    },
    SimpleCase {
        operand: Box<Expression>,
        when_clauses: Vec<WhenClause>,
        else_clause: Option<Box<Expression>>,
        location: Location,
    },
    SearchedCase {
        when_clauses: Vec<WhenClause>,
        else_clause: Option<Box<Expression>>,
        location: Location,
    },
    GroupingOperation {
        names: Vec<QualifiedName>,
        location: Location,
    },
}

/// A path element of a path specification: `[catalog.]schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    pub catalog: Option<Identifier>,
    pub schema: Identifier,
    pub location: Location,
}

/// A comma-separated list of path elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpecification {
    pub elements: Vec<PathElement>,
    pub location: Location,
}

//! Expression nodes of the target dialect.
//!
//! Nodes translated from source tokens keep that token's location;
//! nodes synthesized during rewriting carry none. `Display` renders the
//! usual SQL text, which is also how synthesized property values and
//! conversion notices quote expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::operators::*;
use crate::ast::query::{OrderBy, Query};
use crate::location::Location;

/// An identifier of the target dialect. `delimited` records whether the
/// source spelling was quoted, which keeps case-sensitivity rules intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
    pub delimited: bool,
    pub location: Option<Location>,
}

impl Identifier {
    pub fn new(value: impl Into<String>, delimited: bool, location: Location) -> Self {
        Self {
            value: value.into(),
            delimited,
            location: Some(location),
        }
    }

    /// An identifier invented by a rewrite, with no source token.
    pub fn synthesized(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            delimited: false,
            location: None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delimited {
            write!(f, "\"{}\"", self.value.replace('"', "\"\""))
        } else {
            f.write_str(&self.value)
        }
    }
}

/// A dot-separated name. Display is the dot-joined segment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub parts: Vec<Identifier>,
}

impl QualifiedName {
    pub fn new(parts: Vec<Identifier>) -> Self {
        Self { parts }
    }

    pub fn of(part: impl Into<String>) -> Self {
        Self {
            parts: vec![Identifier::synthesized(part)],
        }
    }

    /// The last segment, if any.
    pub fn suffix(&self) -> Option<&Identifier> {
        self.parts.last()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null {
        location: Option<Location>,
    },
    /// `value` is the unescaped character data.
    String {
        value: String,
        location: Option<Location>,
    },
    /// `value` is the hex digits without the `X''` wrapper.
    Binary {
        value: String,
        location: Option<Location>,
    },
    Boolean {
        value: bool,
        location: Option<Location>,
    },
    Long {
        value: i64,
        location: Option<Location>,
    },
    Double {
        value: f64,
        location: Option<Location>,
    },
    /// Exact decimal, kept as its validated source text.
    Decimal {
        value: String,
        location: Option<Location>,
    },
    Time {
        value: String,
        location: Option<Location>,
    },
    Timestamp {
        value: String,
        location: Option<Location>,
    },
    Char {
        value: String,
        location: Option<Location>,
    },
    Interval {
        value: String,
        sign: IntervalSign,
        field: IntervalField,
        location: Option<Location>,
    },
    /// A typed constructor such as `DATE '2020-01-01'`.
    Generic {
        type_name: String,
        value: String,
        location: Option<Location>,
    },
}

impl Literal {
    pub fn string(value: impl Into<String>, location: Location) -> Self {
        Literal::String {
            value: value.into(),
            location: Some(location),
        }
    }

    /// A string literal invented by a rewrite.
    pub fn synthesized_string(value: impl Into<String>) -> Self {
        Literal::String {
            value: value.into(),
            location: None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null { .. } => f.write_str("null"),
            Literal::String { value, .. } => write!(f, "'{}'", value.replace('\'', "''")),
            Literal::Binary { value, .. } => write!(f, "X'{value}'"),
            Literal::Boolean { value, .. } => write!(f, "{value}"),
            Literal::Long { value, .. } => write!(f, "{value}"),
            Literal::Double { value, .. } => write!(f, "{value:?}"),
            Literal::Decimal { value, .. } => write!(f, "DECIMAL '{value}'"),
            Literal::Time { value, .. } => write!(f, "TIME '{value}'"),
            Literal::Timestamp { value, .. } => write!(f, "TIMESTAMP '{value}'"),
            Literal::Char { value, .. } => write!(f, "CHAR '{value}'"),
            Literal::Interval {
                value, sign, field, ..
            } => {
                let sign = match sign {
                    IntervalSign::Positive => "",
                    IntervalSign::Negative => "-",
                };
                write!(f, "INTERVAL {sign}'{value}' {field}")
            }
            Literal::Generic {
                type_name, value, ..
            } => write!(f, "{type_name} '{value}'"),
        }
    }
}

/// `WHEN operand THEN result`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub operand: Expression,
    pub result: Expression,
}

impl fmt::Display for WhenClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHEN {} THEN {}", self.operand, self.result)
    }
}

/// A window specification attached to a function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub partition_by: Vec<Expression>,
    pub order_by: Option<OrderBy>,
    pub frame: Option<WindowFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub frame_type: FrameType,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameBound {
    pub bound_type: BoundType,
    pub value: Option<Box<Expression>>,
}

impl fmt::Display for FrameBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.bound_type, &self.value) {
            (BoundType::UnboundedPreceding, _) => f.write_str("UNBOUNDED PRECEDING"),
            (BoundType::UnboundedFollowing, _) => f.write_str("UNBOUNDED FOLLOWING"),
            (BoundType::CurrentRow, _) => f.write_str("CURRENT ROW"),
            (BoundType::Preceding, Some(value)) => write!(f, "{value} PRECEDING"),
            (BoundType::Following, Some(value)) => write!(f, "{value} FOLLOWING"),
            (BoundType::Preceding, None) => f.write_str("PRECEDING"),
            (BoundType::Following, None) => f.write_str("FOLLOWING"),
        }
    }
}

/// Target expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    /// A positional parameter; positions count from zero per statement.
    Parameter {
        position: usize,
        location: Option<Location>,
    },
    LogicalBinary {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Option<Location>,
    },
    Not {
        value: Box<Expression>,
        location: Option<Location>,
    },
    Comparison {
        operator: ComparisonOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Option<Location>,
    },
    Between {
        value: Box<Expression>,
        lower: Box<Expression>,
        upper: Box<Expression>,
        location: Option<Location>,
    },
    IsNull {
        value: Box<Expression>,
        location: Option<Location>,
    },
    IsNotNull {
        value: Box<Expression>,
        location: Option<Location>,
    },
    Like {
        value: Box<Expression>,
        pattern: Box<Expression>,
        escape: Option<Box<Expression>>,
        location: Option<Location>,
    },
    In {
        value: Box<Expression>,
        list: Vec<Expression>,
        location: Option<Location>,
    },
    InSubquery {
        value: Box<Expression>,
        query: Box<Query>,
        location: Option<Location>,
    },
    Exists {
        query: Box<Query>,
        location: Option<Location>,
    },
    QuantifiedComparison {
        operator: ComparisonOperator,
        quantifier: Quantifier,
        value: Box<Expression>,
        query: Box<Query>,
        location: Option<Location>,
    },
    ArithmeticUnary {
        sign: Sign,
        value: Box<Expression>,
        location: Option<Location>,
    },
    ArithmeticBinary {
        operator: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Option<Location>,
    },
    Cast {
        expression: Box<Expression>,
        /// Canonical type-signature text.
        data_type: String,
        try_cast: bool,
        location: Option<Location>,
    },
    CurrentTime {
        function: CurrentTimeFunction,
        location: Option<Location>,
    },
    CurrentUser {
        location: Option<Location>,
    },
    Extract {
        field: ExtractField,
        value: Box<Expression>,
        location: Option<Location>,
    },
    Subscript {
        base: Box<Expression>,
        index: Box<Expression>,
        location: Option<Location>,
    },
    Subquery {
        query: Box<Query>,
        location: Option<Location>,
    },
    Dereference {
        base: Box<Expression>,
        field: Identifier,
        location: Option<Location>,
    },
    FunctionCall {
        name: QualifiedName,
        distinct: bool,
        window: Option<Window>,
        arguments: Vec<Expression>,
        location: Option<Location>,
    },
    Row {
        items: Vec<Expression>,
        location: Option<Location>,
    },
    Array {
        items: Vec<Expression>,
        location: Option<Location>,
    },
    SimpleCase {
        operand: Box<Expression>,
        when_clauses: Vec<WhenClause>,
        default: Option<Box<Expression>>,
        location: Option<Location>,
    },
    SearchedCase {
        when_clauses: Vec<WhenClause>,
        default: Option<Box<Expression>>,
        location: Option<Location>,
    },
    If {
        condition: Box<Expression>,
        true_value: Box<Expression>,
        false_value: Option<Box<Expression>>,
        location: Option<Location>,
    },
    NullIf {
        first: Box<Expression>,
        second: Box<Expression>,
        location: Option<Location>,
    },
    Coalesce {
        operands: Vec<Expression>,
        location: Option<Location>,
    },
    GroupingOperation {
        groups: Vec<QualifiedName>,
        location: Option<Location>,
    },
}

fn join(f: &mut fmt::Formatter<'_>, items: &[Expression], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Identifier(identifier) => write!(f, "{identifier}"),
            Expression::Parameter { .. } => f.write_str("?"),
            Expression::LogicalBinary {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::Not { value, .. } => write!(f, "(NOT {value})"),
            Expression::Comparison {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::Between {
                value,
                lower,
                upper,
                ..
            } => write!(f, "({value} BETWEEN {lower} AND {upper})"),
            Expression::IsNull { value, .. } => write!(f, "({value} IS NULL)"),
            Expression::IsNotNull { value, .. } => write!(f, "({value} IS NOT NULL)"),
            Expression::Like {
                value,
                pattern,
                escape,
                ..
            } => {
                write!(f, "({value} LIKE {pattern}")?;
                if let Some(escape) = escape {
                    write!(f, " ESCAPE {escape}")?;
                }
                f.write_str(")")
            }
            Expression::In { value, list, .. } => {
                write!(f, "({value} IN (")?;
                join(f, list, ", ")?;
                f.write_str("))")
            }
            Expression::InSubquery { value, query, .. } => {
                write!(f, "({value} IN ({query}))")
            }
            Expression::Exists { query, .. } => write!(f, "(EXISTS ({query}))"),
            Expression::QuantifiedComparison {
                operator,
                quantifier,
                value,
                query,
                ..
            } => write!(f, "({value} {operator} {quantifier} ({query}))"),
            Expression::ArithmeticUnary { sign, value, .. } => write!(f, "{sign}{value}"),
            Expression::ArithmeticBinary {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::Cast {
                expression,
                data_type,
                try_cast,
                ..
            } => {
                let name = if *try_cast { "TRY_CAST" } else { "CAST" };
                write!(f, "{name}({expression} AS {data_type})")
            }
            Expression::CurrentTime { function, .. } => write!(f, "{function}"),
            Expression::CurrentUser { .. } => f.write_str("CURRENT_USER"),
            Expression::Extract { field, value, .. } => {
                write!(f, "EXTRACT({field} FROM {value})")
            }
            Expression::Subscript { base, index, .. } => write!(f, "{base}[{index}]"),
            Expression::Subquery { query, .. } => write!(f, "({query})"),
            Expression::Dereference { base, field, .. } => write!(f, "{base}.{field}"),
            Expression::FunctionCall {
                name,
                distinct,
                window,
                arguments,
                ..
            } => {
                write!(f, "{name}(")?;
                if *distinct {
                    f.write_str("DISTINCT ")?;
                }
                join(f, arguments, ", ")?;
                f.write_str(")")?;
                if let Some(window) = window {
                    f.write_str(" OVER (")?;
                    if !window.partition_by.is_empty() {
                        f.write_str("PARTITION BY ")?;
                        join(f, &window.partition_by, ", ")?;
                    }
                    if let Some(order_by) = &window.order_by {
                        if !window.partition_by.is_empty() {
                            f.write_str(" ")?;
                        }
                        write!(f, "{order_by}")?;
                    }
                    if let Some(frame) = &window.frame {
                        write!(f, " {} {}", frame.frame_type, frame.start)?;
                        if let Some(end) = &frame.end {
                            // BETWEEN form when both bounds are present.
                            write!(f, " AND {end}")?;
                        }
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Expression::Row { items, .. } => {
                f.write_str("ROW (")?;
                join(f, items, ", ")?;
                f.write_str(")")
            }
            Expression::Array { items, .. } => {
                f.write_str("ARRAY[")?;
                join(f, items, ",")?;
                f.write_str("]")
            }
            Expression::SimpleCase {
                operand,
                when_clauses,
                default,
                ..
            } => {
                write!(f, "(CASE {operand}")?;
                for clause in when_clauses {
                    write!(f, " {clause}")?;
                }
                if let Some(default) = default {
                    write!(f, " ELSE {default}")?;
                }
                f.write_str(" END)")
            }
            Expression::SearchedCase {
                when_clauses,
                default,
                ..
            } => {
                f.write_str("(CASE")?;
                for clause in when_clauses {
                    write!(f, " {clause}")?;
                }
                if let Some(default) = default {
                    write!(f, " ELSE {default}")?;
                }
                f.write_str(" END)")
            }
            Expression::If {
                condition,
                true_value,
                false_value,
                ..
            } => {
                write!(f, "IF({condition}, {true_value}")?;
                if let Some(false_value) = false_value {
                    write!(f, ", {false_value}")?;
                }
                f.write_str(")")
            }
            Expression::NullIf { first, second, .. } => {
                write!(f, "NULLIF({first}, {second})")
            }
            Expression::Coalesce { operands, .. } => {
                f.write_str("COALESCE(")?;
                join(f, operands, ", ")?;
                f.write_str(")")
            }
            Expression::GroupingOperation { groups, .. } => {
                f.write_str("GROUPING (")?;
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{group}")?;
                }
                f.write_str(")")
            }
        }
    }
}

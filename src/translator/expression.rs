//! Expression lowering.

use crate::ast;
use crate::error::{TranslateError, TranslateResult};
use crate::location::Location;
use crate::source::expression::{
    Expression, FrameBound, Over, WhenClause, WindowFrame,
};
use crate::source::tokens::NegationToken;
use crate::translator::query::translate_query;
use crate::translator::types::type_signature;
use crate::translator::{classify, literal, Context};

/// Both the NOT and NON spellings negate by wrapping the inner node.
fn negated(
    negation: Option<NegationToken>,
    inner: ast::Expression,
    location: Location,
) -> ast::Expression {
    match negation {
        Some(_) => ast::Expression::Not {
            value: Box::new(inner),
            location: Some(location),
        },
        None => inner,
    }
}

fn boxed(
    context: &mut Context,
    expression: &Expression,
) -> TranslateResult<Box<ast::Expression>> {
    Ok(Box::new(translate_expression(context, expression)?))
}

fn all(
    context: &mut Context,
    expressions: &[Expression],
) -> TranslateResult<Vec<ast::Expression>> {
    expressions
        .iter()
        .map(|expression| translate_expression(context, expression))
        .collect()
}

pub(crate) fn translate_expression(
    context: &mut Context,
    expression: &Expression,
) -> TranslateResult<ast::Expression> {
    match expression {
        Expression::Literal(value) => Ok(ast::Expression::Literal(literal::translate_literal(
            context, value,
        )?)),
        Expression::Identifier(identifier) => Ok(ast::Expression::Identifier(
            literal::translate_identifier(identifier)?,
        )),
        Expression::Parameter { location } => Ok(ast::Expression::Parameter {
            position: context.next_parameter(),
            location: Some(*location),
        }),
        Expression::LogicalBinary {
            operator,
            operator_location,
            left,
            right,
        } => Ok(ast::Expression::LogicalBinary {
            operator: classify::logical_operator(*operator),
            left: boxed(context, left)?,
            right: boxed(context, right)?,
            location: Some(*operator_location),
        }),
        Expression::Not { value, location } => Ok(ast::Expression::Not {
            value: boxed(context, value)?,
            location: Some(*location),
        }),
        Expression::Comparison {
            operator,
            operator_location,
            left,
            right,
        } => Ok(ast::Expression::Comparison {
            operator: classify::comparison_operator(*operator),
            left: boxed(context, left)?,
            right: boxed(context, right)?,
            location: Some(*operator_location),
        }),
        Expression::DistinctFrom {
            negation,
            left,
            right,
            location,
        } => {
            let comparison = ast::Expression::Comparison {
                operator: ast::ComparisonOperator::IsDistinctFrom,
                left: boxed(context, left)?,
                right: boxed(context, right)?,
                location: Some(*location),
            };
            Ok(negated(*negation, comparison, *location))
        }
        Expression::Between {
            negation,
            value,
            lower,
            upper,
            location,
        } => {
            let between = ast::Expression::Between {
                value: boxed(context, value)?,
                lower: boxed(context, lower)?,
                upper: boxed(context, upper)?,
                location: Some(*location),
            };
            Ok(negated(*negation, between, *location))
        }
        Expression::NullPredicate {
            negation,
            value,
            location,
        } => {
            let value = boxed(context, value)?;
            let location = Some(*location);
            Ok(match negation {
                None => ast::Expression::IsNull { value, location },
                Some(_) => ast::Expression::IsNotNull { value, location },
            })
        }
        Expression::Like {
            negation,
            value,
            pattern,
            location,
        } => {
            let like = ast::Expression::Like {
                value: boxed(context, value)?,
                pattern: boxed(context, pattern)?,
                escape: None,
                location: Some(*location),
            };
            Ok(negated(*negation, like, *location))
        }
        Expression::Rlike { location } => Err(TranslateError::unsupported(
            "Unsupported statement: RLIKE",
            *location,
        )),
        Expression::Regexp { location } => Err(TranslateError::unsupported(
            "Unsupported statement: REGEXP",
            *location,
        )),
        Expression::InList {
            negation,
            value,
            items,
            location,
        } => {
            let predicate = ast::Expression::In {
                value: boxed(context, value)?,
                list: all(context, items)?,
                location: Some(*location),
            };
            Ok(negated(*negation, predicate, *location))
        }
        Expression::InSubquery {
            negation,
            value,
            query,
            location,
        } => {
            let predicate = ast::Expression::InSubquery {
                value: boxed(context, value)?,
                query: Box::new(translate_query(context, query)?),
                location: Some(*location),
            };
            Ok(negated(*negation, predicate, *location))
        }
        Expression::Exists { query, location } => Ok(ast::Expression::Exists {
            query: Box::new(translate_query(context, query)?),
            location: Some(*location),
        }),
        Expression::QuantifiedComparison {
            operator,
            operator_location,
            quantifier,
            value,
            query,
        } => Ok(ast::Expression::QuantifiedComparison {
            operator: classify::comparison_operator(*operator),
            quantifier: classify::quantifier(*quantifier),
            value: boxed(context, value)?,
            query: Box::new(translate_query(context, query)?),
            location: Some(*operator_location),
        }),
        Expression::ArithmeticUnary {
            sign,
            value,
            location,
        } => Ok(ast::Expression::ArithmeticUnary {
            sign: classify::sign(*sign),
            value: boxed(context, value)?,
            location: Some(*location),
        }),
        Expression::ArithmeticBinary {
            operator,
            operator_location,
            left,
            right,
        } => Ok(ast::Expression::ArithmeticBinary {
            operator: classify::arithmetic_operator(*operator),
            left: boxed(context, left)?,
            right: boxed(context, right)?,
            location: Some(*operator_location),
        }),
        Expression::BitArithmetic { location } => Err(TranslateError::unsupported(
            "Unsupported statement: Bit arithmetic",
            *location,
        )),
        Expression::Concat {
            left,
            right,
            location,
        } => Ok(ast::Expression::FunctionCall {
            name: ast::QualifiedName::of("concat"),
            distinct: false,
            window: None,
            arguments: vec![
                translate_expression(context, left)?,
                translate_expression(context, right)?,
            ],
            location: Some(*location),
        }),
        Expression::Row { items, location } => Ok(ast::Expression::Row {
            items: all(context, items)?,
            location: Some(*location),
        }),
        Expression::Array { items, location } => Ok(ast::Expression::Array {
            items: all(context, items)?,
            location: Some(*location),
        }),
        Expression::Cast {
            expression,
            target,
            try_cast,
            location,
        } => Ok(ast::Expression::Cast {
            expression: boxed(context, expression)?,
            data_type: type_signature(target),
            try_cast: *try_cast,
            location: Some(*location),
        }),
        Expression::SpecialDateTimeFunction { function, location } => {
            Ok(ast::Expression::CurrentTime {
                function: classify::date_time_function(*function),
                location: Some(*location),
            })
        }
        Expression::CurrentUser { location } => Ok(ast::Expression::CurrentUser {
            location: Some(*location),
        }),
        Expression::Extract {
            field,
            value,
            location,
        } => {
            let parsed = field.text.parse::<ast::ExtractField>().map_err(|_| {
                TranslateError::invalid_attribute(
                    format!("Invalid EXTRACT field: {}", field.text),
                    *location,
                )
            })?;
            Ok(ast::Expression::Extract {
                field: parsed,
                value: boxed(context, value)?,
                location: Some(*location),
            })
        }
        Expression::Substring {
            arguments,
            location,
        } => Ok(ast::Expression::FunctionCall {
            name: ast::QualifiedName::of("substr"),
            distinct: false,
            window: None,
            arguments: all(context, arguments)?,
            location: Some(*location),
        }),
        Expression::Position {
            arguments,
            location,
        } => {
            // POSITION(needle IN haystack) becomes strpos(haystack, needle).
            let mut arguments = all(context, arguments)?;
            arguments.reverse();
            Ok(ast::Expression::FunctionCall {
                name: ast::QualifiedName::of("strpos"),
                distinct: false,
                window: None,
                arguments,
                location: Some(*location),
            })
        }
        Expression::Normalize {
            value,
            form,
            location,
        } => {
            let form = form.clone().unwrap_or_else(|| "NFC".to_string());
            Ok(ast::Expression::FunctionCall {
                name: ast::QualifiedName::of("normalize"),
                distinct: false,
                window: None,
                arguments: vec![
                    translate_expression(context, value)?,
                    ast::Expression::Literal(ast::Literal::String {
                        value: form,
                        location: Some(*location),
                    }),
                ],
                location: Some(*location),
            })
        }
        Expression::Subscript {
            value,
            index,
            location,
        } => Ok(ast::Expression::Subscript {
            base: boxed(context, value)?,
            index: boxed(context, index)?,
            location: Some(*location),
        }),
        Expression::Subquery { query, location } => Ok(ast::Expression::Subquery {
            query: Box::new(translate_query(context, query)?),
            location: Some(*location),
        }),
        Expression::Dereference {
            base,
            field,
            location,
        } => Ok(ast::Expression::Dereference {
            base: boxed(context, base)?,
            field: literal::translate_identifier(field)?,
            location: Some(*location),
        }),
        Expression::FunctionCall {
            name,
            distinct,
            over,
            arguments,
            location,
        } => translate_function_call(context, name, *distinct, over, arguments, *location),
        Expression::SimpleCase {
            operand,
            when_clauses,
            else_clause,
            location,
        } => Ok(ast::Expression::SimpleCase {
            operand: boxed(context, operand)?,
            when_clauses: translate_when_clauses(context, when_clauses)?,
            default: else_clause
                .as_deref()
                .map(|clause| boxed(context, clause))
                .transpose()?,
            location: Some(*location),
        }),
        Expression::SearchedCase {
            when_clauses,
            else_clause,
            location,
        } => Ok(ast::Expression::SearchedCase {
            when_clauses: translate_when_clauses(context, when_clauses)?,
            default: else_clause
                .as_deref()
                .map(|clause| boxed(context, clause))
                .transpose()?,
            location: Some(*location),
        }),
        Expression::GroupingOperation { names, location } => {
            let groups = names
                .iter()
                .map(literal::translate_qualified_name)
                .collect::<TranslateResult<Vec<_>>>()?;
            Ok(ast::Expression::GroupingOperation {
                groups,
                location: Some(*location),
            })
        }
    }
}

fn translate_when_clauses(
    context: &mut Context,
    clauses: &[WhenClause],
) -> TranslateResult<Vec<ast::WhenClause>> {
    clauses
        .iter()
        .map(|clause| {
            Ok(ast::WhenClause {
                operand: translate_expression(context, &clause.condition)?,
                result: translate_expression(context, &clause.result)?,
            })
        })
        .collect()
}

fn translate_function_call(
    context: &mut Context,
    name: &crate::source::QualifiedName,
    distinct: bool,
    over: &Option<Over>,
    arguments: &[Expression],
    location: Location,
) -> TranslateResult<ast::Expression> {
    let name = literal::translate_qualified_name(name)?;
    let joined = name.to_string();

    // The conditional functions lower to dedicated nodes and accept
    // neither OVER nor DISTINCT.
    if joined.eq_ignore_ascii_case("if") {
        check(arguments.len() == 3, "Illegal arguments for 'if' function", location)?;
        check(over.is_none(), "OVER not valid for 'if' function", location)?;
        check(!distinct, "DISTINCT not valid for 'if' function", location)?;
        return Ok(ast::Expression::If {
            condition: boxed(context, &arguments[0])?,
            true_value: boxed(context, &arguments[1])?,
            false_value: Some(boxed(context, &arguments[2])?),
            location: Some(location),
        });
    }

    if joined.eq_ignore_ascii_case("nullif") {
        check(arguments.len() == 2, "Illegal arguments for 'nullif' function", location)?;
        check(over.is_none(), "OVER not valid for 'nullif' function", location)?;
        check(!distinct, "DISTINCT not valid for 'nullif' function", location)?;
        return Ok(ast::Expression::NullIf {
            first: boxed(context, &arguments[0])?,
            second: boxed(context, &arguments[1])?,
            location: Some(location),
        });
    }

    if joined.eq_ignore_ascii_case("coalesce") {
        check(
            !arguments.is_empty(),
            "The 'coalesce' function must have at least one argument",
            location,
        )?;
        check(over.is_none(), "OVER not valid for 'coalesce' function", location)?;
        check(!distinct, "DISTINCT not valid for 'coalesce' function", location)?;
        return Ok(ast::Expression::Coalesce {
            operands: all(context, arguments)?,
            location: Some(location),
        });
    }

    let window = over
        .as_ref()
        .map(|over| translate_window(context, over))
        .transpose()?;
    Ok(ast::Expression::FunctionCall {
        name,
        distinct,
        window,
        arguments: all(context, arguments)?,
        location: Some(location),
    })
}

fn check(condition: bool, message: &str, location: Location) -> TranslateResult<()> {
    if condition {
        Ok(())
    } else {
        Err(TranslateError::invalid_attribute(message, location))
    }
}

fn translate_window(context: &mut Context, over: &Over) -> TranslateResult<ast::Window> {
    let order_by = if over.order_by.is_empty() {
        None
    } else {
        Some(ast::OrderBy {
            items: crate::translator::query::translate_sort_items(context, &over.order_by)?,
            location: over.order_location,
        })
    };
    Ok(ast::Window {
        partition_by: all(context, &over.partition_by)?,
        order_by,
        frame: over
            .frame
            .as_ref()
            .map(|frame| translate_frame(context, frame))
            .transpose()?,
    })
}

fn translate_frame(
    context: &mut Context,
    frame: &WindowFrame,
) -> TranslateResult<ast::WindowFrame> {
    Ok(ast::WindowFrame {
        frame_type: classify::frame_type(frame.frame_type),
        start: translate_frame_bound(context, &frame.start)?,
        end: frame
            .end
            .as_ref()
            .map(|bound| translate_frame_bound(context, bound))
            .transpose()?,
    })
}

fn translate_frame_bound(
    context: &mut Context,
    bound: &FrameBound,
) -> TranslateResult<ast::FrameBound> {
    Ok(match bound {
        FrameBound::Unbounded { direction, .. } => ast::FrameBound {
            bound_type: classify::unbounded_bound(*direction),
            value: None,
        },
        FrameBound::Bounded {
            direction, value, ..
        } => ast::FrameBound {
            bound_type: classify::bounded_bound(*direction),
            value: Some(boxed(context, value)?),
        },
        FrameBound::CurrentRow { .. } => ast::FrameBound {
            bound_type: ast::BoundType::CurrentRow,
            value: None,
        },
    })
}

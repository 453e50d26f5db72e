//! Identifier and literal lowering: unescaping quoted tokens, numeric
//! validation, the decimal-literal policy, and the glob-to-LIKE rewrite
//! used by the SHOW statements.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ast;
use crate::error::{TranslateError, TranslateResult};
use crate::location::Location;
use crate::source::expression::{
    Identifier, Literal, QuoteStyle, StringLiteral, TypeConstructorName,
};
use crate::source::QualifiedName;
use crate::translator::classify;
use crate::translator::Context;

/// Strip the delimiting quotes from a string token. The source escape
/// `\'` has no target equivalent and fails the translation.
pub(crate) fn unquote(raw: &str, location: Location) -> TranslateResult<String> {
    if raw.contains("\\'") || raw.len() < 2 {
        return Err(TranslateError::invalid_literal(
            format!("Unsupported string: {raw}"),
            location,
        ));
    }
    Ok(raw[1..raw.len() - 1].to_string())
}

/// The unescaped character data of a string literal token.
pub(crate) fn string_value(literal: &StringLiteral) -> TranslateResult<String> {
    unquote(&literal.raw, literal.location)
}

pub(crate) fn translate_identifier(identifier: &Identifier) -> TranslateResult<ast::Identifier> {
    let location = identifier.location;
    match identifier.style {
        QuoteStyle::Unquoted => Ok(ast::Identifier::new(
            identifier.text.clone(),
            false,
            location,
        )),
        QuoteStyle::Quoted => {
            let inner = strip_delimiters(&identifier.text).replace("\"\"", "\"");
            Ok(ast::Identifier::new(inner, true, location))
        }
        QuoteStyle::BackQuoted => {
            let inner = strip_delimiters(&identifier.text).replace("``", "`");
            Ok(ast::Identifier::new(inner, true, location))
        }
        QuoteStyle::Digit => Err(TranslateError::unsupported(
            format!(
                "Unsupported statement: {}(identifiers must not start with a digit)",
                identifier.text
            ),
            location,
        )),
    }
}

fn strip_delimiters(text: &str) -> &str {
    if text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

pub(crate) fn translate_qualified_name(
    name: &QualifiedName,
) -> TranslateResult<ast::QualifiedName> {
    let parts = name
        .parts
        .iter()
        .map(translate_identifier)
        .collect::<TranslateResult<Vec<_>>>()?;
    Ok(ast::QualifiedName::new(parts))
}

pub(crate) fn translate_literal(
    context: &Context,
    literal: &Literal,
) -> TranslateResult<ast::Literal> {
    let location = Some(literal.location());
    match literal {
        Literal::Null { .. } => Ok(ast::Literal::Null { location }),
        Literal::String(string) => Ok(ast::Literal::String {
            value: string_value(string)?,
            location,
        }),
        Literal::Binary { raw, location: at } => Ok(ast::Literal::Binary {
            value: unquote(&raw[1..], *at)?,
            location,
        }),
        Literal::Boolean { value, .. } => Ok(ast::Literal::Boolean {
            value: *value,
            location,
        }),
        Literal::Integer { text, location: at } => {
            let value = text.parse::<i64>().map_err(|_| {
                TranslateError::invalid_literal(format!("Invalid numeric literal: {text}"), *at)
            })?;
            Ok(ast::Literal::Long { value, location })
        }
        Literal::Decimal { text, location: at } => translate_decimal(context, text, *at),
        Literal::Double { text, location: at } => Ok(ast::Literal::Double {
            value: parse_double(text, *at)?,
            location,
        }),
        Literal::Interval { value, field, .. } => Ok(ast::Literal::Interval {
            value: value.clone(),
            sign: ast::IntervalSign::Positive,
            field: classify::interval_field(*field),
            location,
        }),
        Literal::TypeConstructor {
            type_name, value, ..
        } => {
            let text = string_value(value)?;
            let node = match type_name {
                TypeConstructorName::DoublePrecision => ast::Literal::Generic {
                    type_name: "DOUBLE".to_string(),
                    value: text,
                    location,
                },
                TypeConstructorName::Name(name) if name.eq_ignore_ascii_case("time") => {
                    ast::Literal::Time {
                        value: text,
                        location,
                    }
                }
                TypeConstructorName::Name(name) if name.eq_ignore_ascii_case("timestamp") => {
                    ast::Literal::Timestamp {
                        value: text,
                        location,
                    }
                }
                TypeConstructorName::Name(name) if name.eq_ignore_ascii_case("decimal") => {
                    ast::Literal::Decimal {
                        value: text,
                        location,
                    }
                }
                TypeConstructorName::Name(name) if name.eq_ignore_ascii_case("char") => {
                    ast::Literal::Char {
                        value: text,
                        location,
                    }
                }
                TypeConstructorName::Name(name) => ast::Literal::Generic {
                    type_name: name.clone(),
                    value: text,
                    location,
                },
            };
            Ok(node)
        }
    }
}

fn translate_decimal(
    context: &Context,
    text: &str,
    location: Location,
) -> TranslateResult<ast::Literal> {
    use crate::translator::DecimalLiteralPolicy::*;
    match context.decimal_policy() {
        AsDouble => Ok(ast::Literal::Double {
            value: parse_double(text, location)?,
            location: Some(location),
        }),
        AsDecimal => {
            Decimal::from_str(text).map_err(|_| {
                TranslateError::invalid_literal(
                    format!("Invalid numeric literal: {text}"),
                    location,
                )
            })?;
            Ok(ast::Literal::Decimal {
                value: text.to_string(),
                location: Some(location),
            })
        }
        Reject => Err(TranslateError::invalid_literal(
            format!("Unexpected decimal literal: {text}"),
            location,
        )),
    }
}

fn parse_double(text: &str, location: Location) -> TranslateResult<f64> {
    text.parse::<f64>().map_err(|_| {
        TranslateError::invalid_literal(format!("Invalid numeric literal: {text}"), location)
    })
}

/// Rewrite a Hive glob pattern (`*`, `_`, `|`) into a LIKE pattern plus
/// its escape character, for the SHOW statements.
pub(crate) fn like_pattern(
    pattern: &StringLiteral,
) -> TranslateResult<(String, Option<String>)> {
    let mut text = string_value(pattern)?;
    if text.contains('|') {
        return Err(TranslateError::unsupported(
            "Unsupported wildcards: |",
            pattern.location,
        ));
    }
    let mut escape = None;
    if text.contains('_') {
        text = text.replace('_', "#_");
        escape = Some("#".to_string());
    }
    Ok((text.replace('*', "%"), escape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::{DecimalLiteralPolicy, TranslatorOptions, Translator};
    use pretty_assertions::assert_eq;

    fn at(line: usize, column: usize) -> Location {
        Location::new(line, column)
    }

    #[test]
    fn quoted_identifier_collapses_doubled_quotes() {
        let source = Identifier {
            text: "\"a\"\"b\"".to_string(),
            style: QuoteStyle::Quoted,
            location: at(1, 0),
        };
        let translated = translate_identifier(&source).unwrap();
        assert_eq!(translated.value, "a\"b");
        assert!(translated.delimited);
    }

    #[test]
    fn back_quoted_identifier_collapses_doubled_backticks() {
        let source = Identifier {
            text: "`x``y`".to_string(),
            style: QuoteStyle::BackQuoted,
            location: at(1, 0),
        };
        let translated = translate_identifier(&source).unwrap();
        assert_eq!(translated.value, "x`y");
        assert!(translated.delimited);
    }

    #[test]
    fn digit_identifier_is_rejected() {
        let source = Identifier {
            text: "1col".to_string(),
            style: QuoteStyle::Digit,
            location: at(2, 7),
        };
        let error = translate_identifier(&source).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 2:7: Unsupported statement: 1col(identifiers must not start with a digit)"
        );
    }

    #[test]
    fn backslash_quote_escape_is_rejected() {
        let error = unquote("'it\\'s'", at(1, 10)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:10: Unsupported string: 'it\\'s'");
    }

    #[test]
    fn decimal_policy_governs_decimal_literals() {
        let source = Literal::Decimal {
            text: "1.25".to_string(),
            location: at(1, 0),
        };
        let translate = |policy| {
            Translator::new(TranslatorOptions {
                decimal_literal: policy,
            })
            .translate_expression(&crate::source::Expression::Literal(source.clone()))
        };

        let double = translate(DecimalLiteralPolicy::AsDouble).unwrap();
        assert_eq!(
            double.node,
            ast::Expression::Literal(ast::Literal::Double {
                value: 1.25,
                location: Some(at(1, 0)),
            })
        );

        let decimal = translate(DecimalLiteralPolicy::AsDecimal).unwrap();
        assert_eq!(
            decimal.node,
            ast::Expression::Literal(ast::Literal::Decimal {
                value: "1.25".to_string(),
                location: Some(at(1, 0)),
            })
        );

        let rejected = translate(DecimalLiteralPolicy::Reject).unwrap_err();
        assert_eq!(rejected.to_string(), "line 1:0: Unexpected decimal literal: 1.25");
    }

    #[test]
    fn glob_pattern_becomes_like_pattern() {
        let pattern = StringLiteral::new("'page_*'", at(1, 12));
        let (text, escape) = like_pattern(&pattern).unwrap();
        assert_eq!(text, "page#_%");
        assert_eq!(escape, Some("#".to_string()));

        let plain = StringLiteral::new("'orders*'", at(1, 12));
        assert_eq!(like_pattern(&plain).unwrap(), ("orders%".to_string(), None));

        let bad = StringLiteral::new("'a|b'", at(1, 12));
        let error = like_pattern(&bad).unwrap_err();
        assert_eq!(error.to_string(), "line 1:12: Unsupported wildcards: |");
    }
}

//! The translation core: a single pass over the source parse tree that
//! either produces a target-dialect node plus conversion notices, or
//! fails fast with a located error.

mod classify;
mod expression;
mod literal;
mod query;
mod statement;
mod types;

pub use classify::FILE_FORMATS;
pub use types::type_signature;

use serde::{Deserialize, Serialize};

use crate::ast;
use crate::error::TranslateResult;
use crate::source;

/// How decimal literals are rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimalLiteralPolicy {
    /// Rewrite to a double literal.
    #[default]
    AsDouble,
    /// Keep as an exact decimal literal.
    AsDecimal,
    /// Fail the translation.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorOptions {
    pub decimal_literal: DecimalLiteralPolicy,
}

/// A successful translation: the produced node plus the conversion
/// notices accumulated along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated<T> {
    pub node: T,
    pub notices: Vec<String>,
}

/// Mutable per-call state, threaded through the recursion so a
/// `Translator` itself stays immutable and shareable.
pub(crate) struct Context {
    policy: DecimalLiteralPolicy,
    parameter_position: usize,
    notices: Vec<String>,
}

impl Context {
    fn new(policy: DecimalLiteralPolicy) -> Self {
        Self {
            policy,
            parameter_position: 0,
            notices: Vec::new(),
        }
    }

    pub(crate) fn decimal_policy(&self) -> DecimalLiteralPolicy {
        self.policy
    }

    /// Next positional parameter index, counted per statement.
    pub(crate) fn next_parameter(&mut self) -> usize {
        let position = self.parameter_position;
        self.parameter_position += 1;
        position
    }

    pub(crate) fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    fn finish<T>(self, node: T) -> Translated<T> {
        Translated {
            node,
            notices: self.notices,
        }
    }
}

/// The dialect translator. One instance can serve any number of
/// independent calls; every call gets fresh per-call state.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslatorOptions,
}

impl Translator {
    pub fn new(options: TranslatorOptions) -> Self {
        Self { options }
    }

    /// Translate one statement.
    pub fn translate(
        &self,
        input: &source::Statement,
    ) -> TranslateResult<Translated<ast::Statement>> {
        let mut context = Context::new(self.options.decimal_literal);
        let node = statement::translate_statement(&mut context, input)?;
        tracing::debug!(notices = context.notices.len(), "statement translated");
        Ok(context.finish(node))
    }

    /// Translate a standalone expression.
    pub fn translate_expression(
        &self,
        input: &source::Expression,
    ) -> TranslateResult<Translated<ast::Expression>> {
        let mut context = Context::new(self.options.decimal_literal);
        let node = expression::translate_expression(&mut context, input)?;
        Ok(context.finish(node))
    }

    /// Translate a standalone path specification.
    pub fn translate_path(
        &self,
        input: &source::PathSpecification,
    ) -> TranslateResult<Translated<ast::PathSpecification>> {
        let context = Context::new(self.options.decimal_literal);
        let elements = input
            .elements
            .iter()
            .map(|element| {
                Ok(ast::PathElement {
                    catalog: element
                        .catalog
                        .as_ref()
                        .map(literal::translate_identifier)
                        .transpose()?,
                    schema: literal::translate_identifier(&element.schema)?,
                    location: Some(element.location),
                })
            })
            .collect::<TranslateResult<Vec<_>>>()?;
        let node = ast::PathSpecification {
            elements,
            location: Some(input.location),
        };
        Ok(context.finish(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::source::{Identifier, PathElement, PathSpecification};
    use pretty_assertions::assert_eq;

    #[test]
    fn path_specification_translates_each_element() {
        let path = PathSpecification {
            elements: vec![PathElement {
                catalog: Some(Identifier::unquoted("hive", Location::new(1, 4))),
                schema: Identifier::unquoted("sales", Location::new(1, 9)),
                location: Location::new(1, 4),
            }],
            location: Location::new(1, 4),
        };
        let translated = Translator::default().translate_path(&path).unwrap();
        assert_eq!(translated.notices, Vec::<String>::new());
        assert_eq!(translated.node.elements.len(), 1);
        assert_eq!(translated.node.elements[0].schema.value, "sales");
    }
}

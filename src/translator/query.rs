//! Query lowering.

use crate::ast;
use crate::error::{TranslateError, TranslateResult};
use crate::source::query::{
    GroupBy, GroupingElement, JoinTypeToken, Query, QueryNoWith, QuerySpecification, QueryTerm,
    Relation, SelectItem, SortItem,
};
use crate::source::tokens::SetQuantifier;
use crate::translator::expression::translate_expression;
use crate::translator::{classify, literal, Context};

pub(crate) fn translate_query(context: &mut Context, query: &Query) -> TranslateResult<ast::Query> {
    let with = query
        .with
        .as_ref()
        .map(|with| {
            Ok(ast::With {
                recursive: with.recursive,
                queries: with
                    .queries
                    .iter()
                    .map(|named| {
                        Ok(ast::WithQuery {
                            name: literal::translate_identifier(&named.name)?,
                            column_aliases: named
                                .column_aliases
                                .as_ref()
                                .map(|aliases| {
                                    aliases
                                        .iter()
                                        .map(literal::translate_identifier)
                                        .collect::<TranslateResult<Vec<_>>>()
                                })
                                .transpose()?,
                            query: Box::new(translate_query(context, &named.query)?),
                            location: Some(named.location),
                        })
                    })
                    .collect::<TranslateResult<Vec<_>>>()?,
                location: Some(with.location),
            })
        })
        .transpose()?;

    let body = translate_query_no_with(context, &query.body)?;
    Ok(ast::Query {
        with,
        location: Some(query.location),
        ..body
    })
}

/// Lower a query body with its trailing clauses. When the term is a
/// plain SELECT specification the ordering and limit clauses attach to
/// the specification itself; otherwise they stay on the query.
fn translate_query_no_with(
    context: &mut Context,
    body: &QueryNoWith,
) -> TranslateResult<ast::Query> {
    if let Some(location) = body.clustered_by {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: CLUSTERED BY",
            location,
        ));
    }
    if let Some(location) = body.distribute_by {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: DISTRIBUTE BY",
            location,
        ));
    }
    if let Some(location) = body.sorted_by {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: SORT BY",
            location,
        ));
    }

    let term = translate_query_term(context, &body.term)?;
    let order_by = if body.order_by.is_empty() {
        None
    } else {
        Some(ast::OrderBy {
            items: translate_sort_items(context, &body.order_by)?,
            location: body.order_location,
        })
    };
    let offset = body
        .limit
        .as_ref()
        .and_then(|limit| limit.offset.clone())
        .map(|row_count| ast::Offset { row_count });
    let limit = body
        .limit
        .as_ref()
        .and_then(|limit| limit.rows.clone())
        .map(|row_count| ast::Limit { row_count });

    match term {
        ast::QueryBody::Specification(mut specification) => {
            specification.order_by = order_by;
            specification.offset = offset;
            specification.limit = limit;
            Ok(ast::Query {
                with: None,
                body: ast::QueryBody::Specification(specification),
                order_by: None,
                offset: None,
                limit: None,
                location: Some(body.location),
            })
        }
        term => Ok(ast::Query {
            with: None,
            body: term,
            order_by,
            offset,
            limit,
            location: Some(body.location),
        }),
    }
}

fn translate_query_term(
    context: &mut Context,
    term: &QueryTerm,
) -> TranslateResult<ast::QueryBody> {
    match term {
        QueryTerm::Specification(specification) => Ok(ast::QueryBody::Specification(
            translate_query_specification(context, specification)?,
        )),
        QueryTerm::SetOperation {
            operator,
            operator_location,
            quantifier,
            left,
            right,
            ..
        } => Ok(ast::QueryBody::SetOperation {
            operator: classify::set_operator(*operator),
            distinct: !matches!(quantifier, Some(SetQuantifier::All)),
            left: Box::new(translate_query_term(context, left)?),
            right: Box::new(translate_query_term(context, right)?),
            location: Some(*operator_location),
        }),
        QueryTerm::Values { rows, location } => Ok(ast::QueryBody::Values {
            rows: rows
                .iter()
                .map(|row| translate_expression(context, row))
                .collect::<TranslateResult<Vec<_>>>()?,
            location: Some(*location),
        }),
    }
}

fn translate_query_specification(
    context: &mut Context,
    specification: &QuerySpecification,
) -> TranslateResult<ast::QuerySpecification> {
    if let Some(location) = specification.lateral_views.first() {
        return Err(TranslateError::unsupported(
            "Unsupported statement: LATERAL VIEW",
            *location,
        ));
    }

    let items = specification
        .items
        .iter()
        .map(|item| translate_select_item(context, item))
        .collect::<TranslateResult<Vec<_>>>()?;

    // Comma-separated FROM relations fold into implicit joins.
    let mut from: Option<ast::Relation> = None;
    for relation in &specification.relations {
        let translated = translate_relation(context, relation)?;
        from = Some(match from {
            None => translated,
            Some(left) => ast::Relation::Join {
                join_type: ast::JoinType::Implicit,
                left: Box::new(left),
                right: Box::new(translated),
                on: None,
                location: Some(specification.location),
            },
        });
    }

    Ok(ast::QuerySpecification {
        select: ast::Select {
            distinct: matches!(specification.quantifier, Some(SetQuantifier::Distinct)),
            items,
            location: Some(specification.select_location),
        },
        from,
        where_clause: specification
            .where_clause
            .as_ref()
            .map(|clause| translate_expression(context, clause))
            .transpose()?,
        group_by: specification
            .group_by
            .as_ref()
            .map(|group_by| translate_group_by(context, group_by))
            .transpose()?,
        having: specification
            .having
            .as_ref()
            .map(|clause| translate_expression(context, clause))
            .transpose()?,
        order_by: None,
        offset: None,
        limit: None,
        location: Some(specification.location),
    })
}

fn translate_select_item(
    context: &mut Context,
    item: &SelectItem,
) -> TranslateResult<ast::SelectItem> {
    match item {
        SelectItem::All { prefix, location } => Ok(ast::SelectItem::AllColumns {
            prefix: prefix
                .as_ref()
                .map(literal::translate_qualified_name)
                .transpose()?,
            location: Some(*location),
        }),
        SelectItem::Single {
            expression,
            alias,
            location,
        } => Ok(ast::SelectItem::SingleColumn {
            expression: translate_expression(context, expression)?,
            alias: alias
                .as_ref()
                .map(literal::translate_identifier)
                .transpose()?,
            location: Some(*location),
        }),
    }
}

fn translate_group_by(context: &mut Context, group_by: &GroupBy) -> TranslateResult<ast::GroupBy> {
    let elements = group_by
        .elements
        .iter()
        .map(|element| {
            Ok(match element {
                GroupingElement::Single { expressions, .. } => ast::GroupingElement::Simple {
                    columns: translate_all(context, expressions)?,
                },
                GroupingElement::Rollup { expressions, .. } => ast::GroupingElement::Rollup {
                    columns: translate_all(context, expressions)?,
                },
                GroupingElement::Cube { expressions, .. } => ast::GroupingElement::Cube {
                    columns: translate_all(context, expressions)?,
                },
                GroupingElement::MultipleSets { sets, .. } => ast::GroupingElement::GroupingSets {
                    sets: sets
                        .iter()
                        .map(|set| translate_all(context, set))
                        .collect::<TranslateResult<Vec<_>>>()?,
                },
            })
        })
        .collect::<TranslateResult<Vec<_>>>()?;
    Ok(ast::GroupBy {
        distinct: matches!(group_by.quantifier, Some(SetQuantifier::Distinct)),
        elements,
    })
}

fn translate_all(
    context: &mut Context,
    expressions: &[crate::source::Expression],
) -> TranslateResult<Vec<ast::Expression>> {
    expressions
        .iter()
        .map(|expression| translate_expression(context, expression))
        .collect()
}

pub(crate) fn translate_relation(
    context: &mut Context,
    relation: &Relation,
) -> TranslateResult<ast::Relation> {
    match relation {
        Relation::Table { name, location } => Ok(ast::Relation::Table {
            name: literal::translate_qualified_name(name)?,
            location: Some(*location),
        }),
        Relation::Join {
            join_type,
            left,
            right,
            criteria,
            criteria_location,
            location,
        } => translate_join(
            context,
            *join_type,
            left,
            right,
            criteria.as_ref(),
            *criteria_location,
            *location,
        ),
        Relation::Sampled {
            relation,
            percentage,
            location,
        } => {
            let inner = translate_relation(context, relation)?;
            match percentage {
                None => Ok(inner),
                Some(percentage) => Ok(ast::Relation::SampledRelation {
                    relation: Box::new(inner),
                    sample_type: ast::SampleType::System,
                    percentage: translate_expression(context, percentage)?,
                    location: Some(*location),
                }),
            }
        }
        Relation::Aliased {
            relation,
            alias,
            column_aliases,
            location,
        } => Ok(ast::Relation::AliasedRelation {
            relation: Box::new(translate_relation(context, relation)?),
            alias: literal::translate_identifier(alias)?,
            column_aliases: column_aliases
                .as_ref()
                .map(|aliases| {
                    aliases
                        .iter()
                        .map(literal::translate_identifier)
                        .collect::<TranslateResult<Vec<_>>>()
                })
                .transpose()?,
            location: Some(*location),
        }),
        Relation::Subquery { query, location } => Ok(ast::Relation::TableSubquery {
            query: Box::new(translate_query(context, query)?),
            location: Some(*location),
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn translate_join(
    context: &mut Context,
    join_type: JoinTypeToken,
    left: &Relation,
    right: &Relation,
    criteria: Option<&crate::source::Expression>,
    criteria_location: Option<crate::location::Location>,
    location: crate::location::Location,
) -> TranslateResult<ast::Relation> {
    let target_type = match join_type {
        JoinTypeToken::LeftSemi => {
            return Err(TranslateError::unsupported(
                "Unsupported statement: Left semi join",
                location,
            ));
        }
        JoinTypeToken::Cross => {
            if let Some(at) = criteria_location {
                return Err(TranslateError::unsupported(
                    "Unsupported statement: Cross join must not contain join condition",
                    at,
                ));
            }
            ast::JoinType::Cross
        }
        JoinTypeToken::Inner => ast::JoinType::Inner,
        JoinTypeToken::LeftOuter => ast::JoinType::Left,
        JoinTypeToken::RightOuter => ast::JoinType::Right,
        JoinTypeToken::FullOuter => ast::JoinType::Full,
    };

    if target_type != ast::JoinType::Cross && criteria.is_none() {
        return Err(TranslateError::unsupported(
            "Unsupported statement: Inner join must contain join condition",
            location,
        ));
    }

    Ok(ast::Relation::Join {
        join_type: target_type,
        left: Box::new(translate_relation(context, left)?),
        right: Box::new(translate_relation(context, right)?),
        on: criteria
            .map(|criteria| translate_expression(context, criteria))
            .transpose()?,
        location: Some(location),
    })
}

/// Sort items default to ascending order; missing null ordering stays
/// unspecified.
pub(crate) fn translate_sort_items(
    context: &mut Context,
    items: &[SortItem],
) -> TranslateResult<Vec<ast::SortItem>> {
    items
        .iter()
        .map(|item| {
            Ok(ast::SortItem {
                expression: translate_expression(context, &item.expression)?,
                ordering: Some(
                    item.ordering
                        .map(classify::ordering)
                        .unwrap_or(ast::Ordering::Ascending),
                ),
                null_ordering: item.null_ordering.map(classify::null_ordering),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::source::expression::{Expression, Identifier};
    use crate::source::query::LimitClause;
    use crate::source::tokens::SetOperatorToken;
    use crate::source::QualifiedName;
    use pretty_assertions::assert_eq;

    fn at(line: usize, column: usize) -> Location {
        Location::new(line, column)
    }

    fn context() -> Context {
        Context::new(crate::translator::DecimalLiteralPolicy::AsDouble)
    }

    fn table(name: &str) -> Relation {
        Relation::Table {
            name: QualifiedName::new(vec![Identifier::unquoted(name, at(1, 14))]),
            location: at(1, 14),
        }
    }

    fn select_star(relations: Vec<Relation>) -> QuerySpecification {
        QuerySpecification {
            select_location: at(1, 0),
            quantifier: None,
            items: vec![SelectItem::All {
                prefix: None,
                location: at(1, 7),
            }],
            relations,
            lateral_views: vec![],
            where_clause: None,
            group_by: None,
            having: None,
            location: at(1, 0),
        }
    }

    fn query_of(term: QueryTerm) -> Query {
        Query {
            with: None,
            body: QueryNoWith {
                term,
                order_by: vec![],
                order_location: None,
                clustered_by: None,
                distribute_by: None,
                sorted_by: None,
                limit: None,
                location: at(1, 0),
            },
            location: at(1, 0),
        }
    }

    #[test]
    fn comma_relations_fold_into_implicit_joins() {
        let mut context = context();
        let query = query_of(QueryTerm::Specification(select_star(vec![
            table("a"),
            table("b"),
            table("c"),
        ])));

        let translated = translate_query(&mut context, &query).unwrap();
        let ast::QueryBody::Specification(specification) = translated.body else {
            panic!("expected a query specification");
        };
        let Some(ast::Relation::Join {
            join_type, left, ..
        }) = specification.from
        else {
            panic!("expected a join");
        };
        assert_eq!(join_type, ast::JoinType::Implicit);
        assert!(matches!(
            *left,
            ast::Relation::Join {
                join_type: ast::JoinType::Implicit,
                ..
            }
        ));
    }

    #[test]
    fn order_and_limit_attach_to_the_specification() {
        let mut context = context();
        let mut query = query_of(QueryTerm::Specification(select_star(vec![table("t")])));
        query.body.order_by = vec![SortItem {
            expression: Expression::Identifier(Identifier::unquoted("x", at(1, 30))),
            ordering: None,
            null_ordering: None,
            location: at(1, 30),
        }];
        query.body.order_location = Some(at(1, 21));
        query.body.limit = Some(LimitClause {
            offset: Some("5".to_string()),
            rows: Some("10".to_string()),
        });

        let translated = translate_query(&mut context, &query).unwrap();
        assert_eq!(translated.order_by, None);
        assert_eq!(translated.limit, None);
        let ast::QueryBody::Specification(specification) = translated.body else {
            panic!("expected a query specification");
        };
        let order_by = specification.order_by.unwrap();
        assert_eq!(order_by.items[0].ordering, Some(ast::Ordering::Ascending));
        assert_eq!(order_by.items[0].null_ordering, None);
        assert_eq!(
            specification.offset,
            Some(ast::Offset {
                row_count: "5".to_string()
            })
        );
        assert_eq!(
            specification.limit,
            Some(ast::Limit {
                row_count: "10".to_string()
            })
        );
    }

    #[test]
    fn order_and_limit_stay_on_set_operation_queries() {
        let mut context = context();
        let term = QueryTerm::SetOperation {
            operator: SetOperatorToken::Union,
            operator_location: at(2, 0),
            quantifier: Some(SetQuantifier::All),
            left: Box::new(QueryTerm::Specification(select_star(vec![table("a")]))),
            right: Box::new(QueryTerm::Specification(select_star(vec![table("b")]))),
            location: at(1, 0),
        };
        let mut query = query_of(term);
        query.body.limit = Some(LimitClause {
            offset: None,
            rows: Some("3".to_string()),
        });

        let translated = translate_query(&mut context, &query).unwrap();
        assert!(matches!(
            translated.body,
            ast::QueryBody::SetOperation {
                operator: ast::SetOperator::Union,
                distinct: false,
                ..
            }
        ));
        assert_eq!(
            translated.limit,
            Some(ast::Limit {
                row_count: "3".to_string()
            })
        );
    }

    #[test]
    fn hive_distribution_clauses_are_rejected() {
        let mut context = context();
        let mut query = query_of(QueryTerm::Specification(select_star(vec![table("t")])));
        query.body.clustered_by = Some(at(1, 40));
        let error = translate_query(&mut context, &query).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:40: Unsupported attribute: CLUSTERED BY"
        );
    }

    #[test]
    fn lateral_view_is_rejected() {
        let mut context = context();
        let mut specification = select_star(vec![table("t")]);
        specification.lateral_views.push(at(1, 22));
        let query = query_of(QueryTerm::Specification(specification));
        let error = translate_query(&mut context, &query).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:22: Unsupported statement: LATERAL VIEW"
        );
    }

    #[test]
    fn join_condition_rules_are_enforced() {
        let mut context = context();
        let bare_inner = Relation::Join {
            join_type: JoinTypeToken::Inner,
            left: Box::new(table("a")),
            right: Box::new(table("b")),
            criteria: None,
            criteria_location: None,
            location: at(1, 16),
        };
        let error = translate_relation(&mut context, &bare_inner).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:16: Unsupported statement: Inner join must contain join condition"
        );

        let conditioned_cross = Relation::Join {
            join_type: JoinTypeToken::Cross,
            left: Box::new(table("a")),
            right: Box::new(table("b")),
            criteria: Some(Expression::Identifier(Identifier::unquoted(
                "flag",
                at(1, 35),
            ))),
            criteria_location: Some(at(1, 32)),
            location: at(1, 16),
        };
        let error = translate_relation(&mut context, &conditioned_cross).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:32: Unsupported statement: Cross join must not contain join condition"
        );
    }

    #[test]
    fn table_sample_becomes_system_sampling() {
        let mut context = context();
        let sampled = Relation::Sampled {
            relation: Box::new(table("t")),
            percentage: Some(Expression::Literal(crate::source::expression::Literal::Integer {
                text: "10".to_string(),
                location: at(1, 28),
            })),
            location: at(1, 16),
        };
        let translated = translate_relation(&mut context, &sampled).unwrap();
        assert!(matches!(
            translated,
            ast::Relation::SampledRelation {
                sample_type: ast::SampleType::System,
                ..
            }
        ));

        let unsampled = Relation::Sampled {
            relation: Box::new(table("t")),
            percentage: None,
            location: at(1, 16),
        };
        let translated = translate_relation(&mut context, &unsampled).unwrap();
        assert!(matches!(translated, ast::Relation::Table { .. }));
    }
}

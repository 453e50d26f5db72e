use pretty_assertions::assert_eq;

use sqlshift::ast;
use sqlshift::location::Location;
use sqlshift::prelude::*;
use sqlshift::source::{
    self, ColumnDefinition, CreateTable, Expression, Identifier, Literal, PropertyList, Query,
    QueryNoWith, QuerySpecification, QueryTerm, QualifiedName, Relation, SelectItem, Statement,
    StringLiteral, TypeNode,
};

fn at(line: usize, column: usize) -> Location {
    Location::new(line, column)
}

fn table_name(parts: &[&str]) -> QualifiedName {
    QualifiedName::new(
        parts
            .iter()
            .map(|part| Identifier::unquoted(*part, at(1, 13)))
            .collect(),
    )
}

fn column(name: &str, type_name: &str, line: usize) -> ColumnDefinition {
    ColumnDefinition {
        name: Identifier::unquoted(name, at(line, 4)),
        data_type: TypeNode::Base {
            name: type_name.to_string(),
            double_precision: false,
            parameters: vec![],
            location: at(line, 12),
        },
        comment: None,
        constraint: None,
        location: at(line, 4),
    }
}

fn select_star_from(table: &str) -> Query {
    Query {
        with: None,
        body: QueryNoWith {
            term: QueryTerm::Specification(QuerySpecification {
                select_location: at(1, 0),
                quantifier: None,
                items: vec![SelectItem::All {
                    prefix: None,
                    location: at(1, 7),
                }],
                relations: vec![Relation::Table {
                    name: table_name(&[table]),
                    location: at(1, 14),
                }],
                lateral_views: vec![],
                where_clause: None,
                group_by: None,
                having: None,
                location: at(1, 0),
            }),
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

fn managed_orc_table() -> CreateTable {
    CreateTable {
        name: table_name(&["sales", "orders"]),
        temporary: false,
        if_not_exists: true,
        external: true,
        elements: vec![column("id", "BIGINT", 2), column("payload", "BINARY", 3)],
        constraint: None,
        comment: Some(StringLiteral::new("'order facts'", at(1, 40))),
        transactional: true,
        partitioned_by: Some(vec![column("ds", "STRING", 5)]),
        clustered_by: Some(vec![Expression::Identifier(Identifier::unquoted(
            "id",
            at(6, 14),
        ))]),
        sorted_by: None,
        bucket_count: Some(Expression::Literal(Literal::Integer {
            text: "16".to_string(),
            location: at(6, 30),
        })),
        skewed: None,
        row_format: None,
        stored_by: None,
        stored_as: Some(Identifier::unquoted("ORC", at(7, 10))),
        location_uri: Some(StringLiteral::new("'/warehouse/orders'", at(8, 9))),
        properties: None,
        location: at(1, 0),
    }
}

#[test]
fn create_table_rewrites_layout_clauses_into_properties() {
    let translator = Translator::default();
    let translated = translator
        .translate(&Statement::CreateTable(Box::new(managed_orc_table())))
        .unwrap();

    let ast::Statement::CreateTable(created) = translated.node else {
        panic!("expected a create table");
    };
    assert_eq!(created.name.to_string(), "sales.orders");
    assert!(created.if_not_exists);
    assert_eq!(created.comment, Some("order facts".to_string()));

    // Two declared columns plus the hidden partition column.
    assert_eq!(created.elements.len(), 3);
    let ast::TableElement::Column(payload) = &created.elements[1] else {
        panic!("expected a column");
    };
    assert_eq!(payload.data_type, "varbinary");
    let ast::TableElement::Column(partition) = &created.elements[2] else {
        panic!("expected a column");
    };
    assert!(partition.hidden);
    assert_eq!(partition.name.value, "ds");

    let names: Vec<&str> = created
        .properties
        .iter()
        .map(|property| property.name.value.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "transactional",
            "partitioned_by",
            "bucketed_by",
            "bucket_count",
            "format",
            "external",
            "location",
        ]
    );
    assert_eq!(
        created.properties[4].value,
        ast::Expression::Literal(ast::Literal::synthesized_string("ORC"))
    );
    assert_eq!(
        created.properties[6].value,
        ast::Expression::Literal(ast::Literal::string("/warehouse/orders", at(8, 9)))
    );
    assert_eq!(translated.notices, Vec::<String>::new());
}

#[test]
fn translated_statements_round_trip_through_json() {
    let translator = Translator::default();
    let translated = translator
        .translate(&Statement::CreateTable(Box::new(managed_orc_table())))
        .unwrap();

    let encoded = serde_json::to_string(&translated.node).unwrap();
    let decoded: ast::Statement = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, translated.node);
}

#[test]
fn insert_overwrite_carries_the_flag_through() {
    let translator = Translator::default();
    let translated = translator
        .translate(&Statement::InsertOverwrite(source::InsertOverwrite {
            target: table_name(&["t"]),
            partition: None,
            query: select_star_from("staging"),
            location: at(1, 0),
        }))
        .unwrap();

    let ast::Statement::Insert(insert) = translated.node else {
        panic!("expected an insert");
    };
    assert!(insert.overwrite);
    let ast::QueryBody::Specification(specification) = insert.query.body else {
        panic!("expected a query specification");
    };
    assert!(matches!(
        specification.from,
        Some(ast::Relation::Table { .. })
    ));
}

#[test]
fn failures_carry_the_offending_location() {
    let translator = Translator::default();
    let error = translator
        .translate(&Statement::DropTable(source::DropTable {
            name: table_name(&["t"]),
            if_exists: false,
            purge: Some(at(1, 22)),
            location: at(1, 0),
        }))
        .unwrap_err();
    assert_eq!(error.to_string(), "line 1:22: Unsupported attribute: PURGE");
    assert_eq!(error.location(), at(1, 22));
    assert!(matches!(error, TranslateError::UnsupportedConstruct { .. }));
}

#[test]
fn decimal_policy_is_selected_per_translator() {
    let rejecting = Translator::new(TranslatorOptions {
        decimal_literal: DecimalLiteralPolicy::Reject,
    });
    let error = rejecting
        .translate_expression(&Expression::Literal(Literal::Decimal {
            text: "0.5".to_string(),
            location: at(1, 8),
        }))
        .unwrap_err();
    assert_eq!(error.to_string(), "line 1:8: Unexpected decimal literal: 0.5");

    let keeping = Translator::new(TranslatorOptions {
        decimal_literal: DecimalLiteralPolicy::AsDecimal,
    });
    let translated = keeping
        .translate_expression(&Expression::Literal(Literal::Decimal {
            text: "0.5".to_string(),
            location: at(1, 8),
        }))
        .unwrap();
    assert_eq!(translated.node.to_string(), "DECIMAL '0.5'");
}

#[test]
fn view_comments_surface_as_notices() {
    let translator = Translator::default();
    let translated = translator
        .translate(&Statement::CreateView(source::CreateView {
            name: table_name(&["v"]),
            query: select_star_from("t"),
            comment: Some(StringLiteral::new("'daily rollup'", at(1, 30))),
            column_aliases: None,
            properties: None,
            location: at(1, 0),
        }))
        .unwrap();
    assert_eq!(translated.notices, vec!["COMMENT: 'daily rollup'"]);

    let rejected = translator
        .translate(&Statement::CreateView(source::CreateView {
            name: table_name(&["v"]),
            query: select_star_from("t"),
            comment: None,
            column_aliases: None,
            properties: Some(PropertyList {
                properties: vec![],
                location: at(1, 26),
            }),
            location: at(1, 0),
        }))
        .unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "line 1:26: Unsupported attribute: TBLPROPERTIES"
    );
}

//! Statement lowering: the DDL/DML rewrites, the CREATE TABLE property
//! synthesis, and the per-statement rejection rules.

use crate::ast;
use crate::error::{TranslateError, TranslateResult};
use crate::location::Location;
use crate::source::expression::{
    Expression as SourceExpression, Literal as SourceLiteral, StringLiteral,
};
use crate::source::statement::{
    self as source, ColumnAliases, ExplainOption, Principal, PrincipalKindToken, PropertyList,
    SetRoleTarget, Statement,
};
use crate::translator::expression::translate_expression;
use crate::translator::query::translate_query;
use crate::translator::{classify, literal, types, Context};

pub(crate) fn translate_statement(
    context: &mut Context,
    statement: &Statement,
) -> TranslateResult<ast::Statement> {
    match statement {
        Statement::Use(s) => Ok(ast::Statement::Use(ast::Use {
            catalog: None,
            schema: literal::translate_identifier(&s.schema)?,
            location: Some(s.location),
        })),
        Statement::CreateSchema(s) => translate_create_schema(context, s),
        Statement::DropSchema(s) => {
            if let Some(at) = s.cascade {
                return Err(TranslateError::unsupported(
                    "Unsupported statement: CASCADE",
                    at,
                ));
            }
            Ok(ast::Statement::DropSchema(ast::DropSchema {
                name: literal::translate_qualified_name(&s.name)?,
                if_exists: s.if_exists,
                cascade: false,
                location: Some(s.location),
            }))
        }
        Statement::ShowSchemas(s) => {
            let (like_pattern, escape) = translate_pattern(s.pattern.as_ref())?;
            Ok(ast::Statement::ShowSchemas(ast::ShowSchemas {
                catalog: None,
                like_pattern,
                escape,
                location: Some(s.location),
            }))
        }
        Statement::CreateView(s) => translate_view(
            context,
            &s.name,
            &s.query,
            s.comment.as_ref(),
            s.column_aliases.as_ref(),
            s.properties.as_ref(),
            false,
            s.location,
        ),
        Statement::AlterView(s) => translate_view(
            context,
            &s.name,
            &s.query,
            s.comment.as_ref(),
            s.column_aliases.as_ref(),
            s.properties.as_ref(),
            true,
            s.location,
        ),
        Statement::DropView(s) => Ok(ast::Statement::DropView(ast::DropView {
            name: literal::translate_qualified_name(&s.name)?,
            if_exists: s.if_exists,
            location: Some(s.location),
        })),
        Statement::CreateTable(s) => translate_create_table(context, s),
        Statement::CreateTableAsSelect(s) => translate_create_table_as_select(context, s),
        Statement::CreateTableLike(s) => translate_create_table_like(s),
        Statement::ShowTables(s) => {
            let (like_pattern, escape) = translate_pattern(s.pattern.as_ref())?;
            Ok(ast::Statement::ShowTables(ast::ShowTables {
                schema: s
                    .schema
                    .as_ref()
                    .map(literal::translate_qualified_name)
                    .transpose()?,
                like_pattern,
                escape,
                location: Some(s.location),
            }))
        }
        Statement::ShowCreateTable(s) => {
            let name = literal::translate_qualified_name(&s.name)?;
            context.notice(format!("SHOW CREATE TABLE {name}"));
            Ok(ast::Statement::ShowCreate(ast::ShowCreate {
                kind: ast::ShowCreateKind::Table,
                name,
                location: Some(s.location),
            }))
        }
        Statement::RenameTable(s) => Ok(ast::Statement::RenameTable(ast::RenameTable {
            source: literal::translate_qualified_name(&s.from)?,
            target: literal::translate_qualified_name(&s.to)?,
            location: Some(s.location),
        })),
        Statement::CommentTable(s) => translate_comment_table(context, s),
        Statement::AddColumn(s) => translate_add_column(s),
        Statement::DropTable(s) => {
            if let Some(at) = s.purge {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: PURGE",
                    at,
                ));
            }
            Ok(ast::Statement::DropTable(ast::DropTable {
                name: literal::translate_qualified_name(&s.name)?,
                if_exists: s.if_exists,
                location: Some(s.location),
            }))
        }
        Statement::ShowColumns(s) => {
            if let Some(at) = s.db {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: FROM/IN DB",
                    at,
                ));
            }
            if let Some(at) = s.pattern {
                return Err(TranslateError::unsupported("Unsupported attribute: LIKE", at));
            }
            Ok(ast::Statement::ShowColumns(ast::ShowColumns {
                table: literal::translate_qualified_name(&s.table)?,
                location: Some(s.location),
            }))
        }
        Statement::DescribeTable(s) => {
            if let Some(at) = s.extended_or_formatted {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: EXTENDED/FORMATTED",
                    at,
                ));
            }
            if let Some(at) = s.option {
                return Err(TranslateError::unsupported(
                    "Unsupported Describe statement",
                    at,
                ));
            }
            Ok(ast::Statement::ShowColumns(ast::ShowColumns {
                table: literal::translate_qualified_name(&s.table)?,
                location: Some(s.location),
            }))
        }
        Statement::InsertInto(s) => {
            if let Some(at) = s.partition {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: PARTITION",
                    at,
                ));
            }
            Ok(ast::Statement::Insert(ast::Insert {
                target: literal::translate_qualified_name(&s.target)?,
                columns: translate_column_aliases(s.column_aliases.as_ref())?,
                query: translate_query(context, &s.query)?,
                overwrite: false,
                location: Some(s.location),
            }))
        }
        Statement::InsertOverwrite(s) => {
            if let Some(at) = s.partition {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: PARTITION",
                    at,
                ));
            }
            Ok(ast::Statement::Insert(ast::Insert {
                target: literal::translate_qualified_name(&s.target)?,
                columns: None,
                query: translate_query(context, &s.query)?,
                overwrite: true,
                location: Some(s.location),
            }))
        }
        Statement::Update(s) => Ok(ast::Statement::Update(ast::Update {
            table: literal::translate_qualified_name(&s.target)?,
            assignments: s
                .assignments
                .iter()
                .map(|assignment| {
                    Ok(ast::AssignmentItem {
                        name: literal::translate_qualified_name(&assignment.name)?,
                        value: translate_expression(context, &assignment.value)?,
                        location: Some(assignment.location),
                    })
                })
                .collect::<TranslateResult<Vec<_>>>()?,
            where_clause: s
                .where_clause
                .as_ref()
                .map(|clause| translate_expression(context, clause))
                .transpose()?,
            location: Some(s.location),
        })),
        Statement::Delete(s) => Ok(ast::Statement::Delete(ast::Delete {
            table: literal::translate_qualified_name(&s.target)?,
            where_clause: s
                .where_clause
                .as_ref()
                .map(|clause| translate_expression(context, clause))
                .transpose()?,
            location: Some(s.location),
        })),
        Statement::ShowFunctions(s) => {
            if let Some(at) = s.pattern {
                return Err(TranslateError::unsupported("Unsupported attribute: LIKE", at));
            }
            Ok(ast::Statement::ShowFunctions(ast::ShowFunctions {
                location: Some(s.location),
            }))
        }
        Statement::CreateRole(s) => Ok(ast::Statement::CreateRole(ast::CreateRole {
            name: literal::translate_identifier(&s.name)?,
            location: Some(s.location),
        })),
        Statement::DropRole(s) => Ok(ast::Statement::DropRole(ast::DropRole {
            name: literal::translate_identifier(&s.name)?,
            location: Some(s.location),
        })),
        Statement::GrantRoles(s) => Ok(ast::Statement::GrantRoles(ast::GrantRoles {
            roles: translate_identifiers(&s.roles)?,
            grantees: translate_principals(&s.grantees)?,
            admin_option: s.admin_option,
            location: Some(s.location),
        })),
        Statement::RevokeRoles(s) => Ok(ast::Statement::RevokeRoles(ast::RevokeRoles {
            roles: translate_identifiers(&s.roles)?,
            grantees: translate_principals(&s.grantees)?,
            admin_option: s.admin_option,
            location: Some(s.location),
        })),
        Statement::SetRole(s) => {
            let (kind, role) = match &s.target {
                SetRoleTarget::All => (ast::SetRoleKind::All, None),
                SetRoleTarget::None => (ast::SetRoleKind::None, None),
                SetRoleTarget::Role(role) => (
                    ast::SetRoleKind::Role,
                    Some(literal::translate_identifier(role)?),
                ),
            };
            Ok(ast::Statement::SetRole(ast::SetRole {
                kind,
                role,
                location: Some(s.location),
            }))
        }
        Statement::ShowRoles(s) => Ok(ast::Statement::ShowRoles(ast::ShowRoles {
            catalog: None,
            current: s.current,
            location: Some(s.location),
        })),
        Statement::Grant(s) => Ok(ast::Statement::Grant(ast::Grant {
            privileges: s.privileges.iter().map(|p| p.text.clone()).collect(),
            table: true,
            name: literal::translate_qualified_name(&s.table_name)?,
            grantee: translate_principal(&s.grantee)?,
            grant_option: s.grant_option,
            location: Some(s.location),
        })),
        Statement::Revoke(s) => Ok(ast::Statement::Revoke(ast::Revoke {
            grant_option: s.grant_option,
            privileges: s.privileges.iter().map(|p| p.text.clone()).collect(),
            table: true,
            name: literal::translate_qualified_name(&s.table_name)?,
            grantee: translate_principal(&s.grantee)?,
            location: Some(s.location),
        })),
        Statement::ShowGrants(s) => {
            if let Some(at) = s.principal {
                return Err(TranslateError::unsupported(
                    "Unsupported attribute: PRINCIPAL",
                    at,
                ));
            }
            if let Some(at) = s.all {
                return Err(TranslateError::unsupported("Unsupported attribute: ALL", at));
            }
            Ok(ast::Statement::ShowGrants(ast::ShowGrants {
                table: s.table,
                name: Some(literal::translate_qualified_name(&s.name)?),
                location: Some(s.location),
            }))
        }
        Statement::Explain(s) => {
            if s.options
                .iter()
                .any(|option| !matches!(option, ExplainOption::Analyze))
            {
                return Err(TranslateError::unsupported(
                    "Only supported attribute: ANALYZE",
                    s.location,
                ));
            }
            Ok(ast::Statement::Explain(ast::Explain {
                analyze: s.options.contains(&ExplainOption::Analyze),
                statement: Box::new(translate_statement(context, &s.statement)?),
                location: Some(s.location),
            }))
        }
        Statement::SetSession(s) => {
            if let Some(property) = &s.property {
                return Err(TranslateError::unsupported(
                    "Unsupported to set session property",
                    property.location,
                ));
            }
            Ok(ast::Statement::ShowSession(ast::ShowSession {
                location: Some(s.location),
            }))
        }
        Statement::Query(query) => Ok(ast::Statement::Query(translate_query(context, query)?)),
        Statement::Unsupported {
            construct,
            location,
        } => Err(TranslateError::unsupported(
            format!("Unsupported statement: {construct}"),
            *location,
        )),
    }
}

fn translate_create_schema(
    context: &mut Context,
    s: &source::CreateSchema,
) -> TranslateResult<ast::Statement> {
    if let Some(properties) = &s.properties {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: DBPROPERTIES",
            properties.location,
        ));
    }

    let mut properties = Vec::new();
    if let Some(comment) = &s.comment {
        let rendered = ast::Literal::string(literal::string_value(comment)?, comment.location);
        context.notice(format!("COMMENT: {rendered}"));
    }
    if let Some(uri) = &s.location_uri {
        properties.push(location_property(uri, Some(s.location))?);
    }

    Ok(ast::Statement::CreateSchema(ast::CreateSchema {
        name: literal::translate_qualified_name(&s.name)?,
        if_not_exists: s.if_not_exists,
        properties,
        location: Some(s.location),
    }))
}

#[allow(clippy::too_many_arguments)]
fn translate_view(
    context: &mut Context,
    name: &crate::source::QualifiedName,
    query: &crate::source::query::Query,
    comment: Option<&StringLiteral>,
    column_aliases: Option<&ColumnAliases>,
    properties: Option<&PropertyList>,
    replace: bool,
    location: Location,
) -> TranslateResult<ast::Statement> {
    if let Some(comment) = comment {
        let rendered = ast::Literal::string(literal::string_value(comment)?, comment.location);
        context.notice(format!("COMMENT: {rendered}"));
    }
    if let Some(aliases) = column_aliases {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: COLUMN ALIASES",
            aliases.location,
        ));
    }
    if let Some(properties) = properties {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: TBLPROPERTIES",
            properties.location,
        ));
    }

    Ok(ast::Statement::CreateView(ast::CreateView {
        name: literal::translate_qualified_name(name)?,
        query: translate_query(context, query)?,
        replace,
        location: Some(location),
    }))
}

/// The Hive physical-layout clauses become table properties; partition
/// columns are appended to the element list as hidden columns.
fn translate_create_table(
    context: &mut Context,
    s: &source::CreateTable,
) -> TranslateResult<ast::Statement> {
    if s.temporary {
        return Err(TranslateError::unsupported(
            "Unsupported statement: CREATE TEMPORARY TABLE",
            s.location,
        ));
    }
    if let Some(at) = s.constraint {
        return Err(TranslateError::unsupported(
            "Unsupported constraint statement",
            at,
        ));
    }

    let comment = s
        .comment
        .as_ref()
        .map(literal::string_value)
        .transpose()?;

    let mut properties = Vec::new();
    if s.transactional {
        properties.push(ast::Property::synthesized(
            "transactional",
            ast::Expression::Identifier(ast::Identifier::synthesized("true")),
        ));
    }

    let mut elements = s
        .elements
        .iter()
        .map(|column| {
            Ok(ast::TableElement::Column(translate_column_definition(
                column, false,
            )?))
        })
        .collect::<TranslateResult<Vec<_>>>()?;

    if let Some(partition_columns) = &s.partitioned_by {
        let mut names = Vec::new();
        for column in partition_columns {
            let translated = translate_column_definition(column, true)?;
            names.push(ast::Expression::Literal(ast::Literal::synthesized_string(
                translated.name.value.clone(),
            )));
            elements.push(ast::TableElement::Column(translated));
        }
        properties.push(ast::Property::synthesized(
            "partitioned_by",
            ast::Expression::Array {
                items: names,
                location: None,
            },
        ));
    }
    if let Some(bucket_columns) = &s.clustered_by {
        let items = bucket_columns
            .iter()
            .map(|expression| {
                let translated = translate_expression(context, expression)?;
                Ok(ast::Expression::Literal(ast::Literal::synthesized_string(
                    translated.to_string(),
                )))
            })
            .collect::<TranslateResult<Vec<_>>>()?;
        properties.push(ast::Property::synthesized(
            "bucketed_by",
            ast::Expression::Array {
                items,
                location: None,
            },
        ));
    }
    if let Some(sort_items) = &s.sorted_by {
        let items = sort_items
            .iter()
            .map(|item| {
                let mut text = translate_expression(context, &item.expression)?.to_string();
                if let Some(ordering) = item.ordering {
                    text.push(' ');
                    text.push_str(match ordering {
                        crate::source::tokens::OrderingToken::Asc => "ASC",
                        crate::source::tokens::OrderingToken::Desc => "DESC",
                    });
                }
                Ok(ast::Expression::Literal(ast::Literal::synthesized_string(
                    text,
                )))
            })
            .collect::<TranslateResult<Vec<_>>>()?;
        properties.push(ast::Property::synthesized(
            "sorted_by",
            ast::Expression::Array {
                items,
                location: None,
            },
        ));
    }
    if let Some(bucket_count) = &s.bucket_count {
        properties.push(ast::Property::synthesized(
            "bucket_count",
            translate_expression(context, bucket_count)?,
        ));
    }
    if let Some(at) = s.skewed {
        return Err(TranslateError::unsupported("Unsupported statement: SKEWED", at));
    }
    if let Some(at) = s.row_format {
        return Err(TranslateError::unsupported(
            "Unsupported statement: ROW FORMAT",
            at,
        ));
    }
    if let Some(at) = s.stored_by {
        return Err(TranslateError::unsupported(
            "Unsupported statement: STORED BY",
            at,
        ));
    }
    if let Some(stored_as) = &s.stored_as {
        properties.push(format_property(stored_as)?);
    }
    if s.external {
        if s.location_uri.is_none() {
            return Err(TranslateError::invalid_attribute(
                "Unsupported statement: External attribute should be used with location",
                s.location,
            ));
        }
        properties.push(ast::Property::synthesized(
            "external",
            ast::Expression::Identifier(ast::Identifier::synthesized("true")),
        ));
    }
    if let Some(uri) = &s.location_uri {
        properties.push(location_property(uri, None)?);
    }
    if let Some(list) = &s.properties {
        properties.extend(transactional_properties(context, list)?);
    }

    Ok(ast::Statement::CreateTable(Box::new(ast::CreateTable {
        name: literal::translate_qualified_name(&s.name)?,
        elements,
        if_not_exists: s.if_not_exists,
        properties,
        comment,
        location: Some(s.location),
    })))
}

fn translate_create_table_as_select(
    context: &mut Context,
    s: &source::CreateTableAsSelect,
) -> TranslateResult<ast::Statement> {
    if s.temporary {
        return Err(TranslateError::unsupported(
            "Unsupported statement: CREATE TEMPORARY TABLE",
            s.location,
        ));
    }

    let comment = s
        .comment
        .as_ref()
        .map(literal::string_value)
        .transpose()?;
    let column_aliases = translate_column_aliases(s.column_aliases.as_ref())?;

    let mut properties = Vec::new();
    if s.transactional {
        properties.push(ast::Property::synthesized(
            "transactional",
            ast::Expression::Identifier(ast::Identifier::synthesized("true")),
        ));
    }
    if let Some(stored_as) = &s.stored_as {
        properties.push(format_property(stored_as)?);
    }
    if let Some(uri) = &s.location_uri {
        properties.push(location_property(uri, None)?);
    }
    if let Some(list) = &s.properties {
        properties.extend(transactional_properties(context, list)?);
    }

    Ok(ast::Statement::CreateTableAsSelect(Box::new(
        ast::CreateTableAsSelect {
            name: literal::translate_qualified_name(&s.name)?,
            query: translate_query(context, &s.query)?,
            if_not_exists: s.if_not_exists,
            properties,
            with_data: true,
            column_aliases,
            comment,
            location: Some(s.location),
        },
    )))
}

fn translate_create_table_like(s: &source::CreateTableLike) -> TranslateResult<ast::Statement> {
    let elements = vec![ast::TableElement::Like(ast::LikeClause {
        name: literal::translate_qualified_name(&s.like_name)?,
        properties_option: Some(ast::PropertiesOption::Excluding),
        location: None,
    })];

    let mut properties = Vec::new();
    if s.external {
        if s.location_uri.is_none() {
            return Err(TranslateError::invalid_attribute(
                "External attribute should be used with location",
                s.location,
            ));
        }
        properties.push(ast::Property::synthesized(
            "external",
            ast::Expression::Identifier(ast::Identifier::synthesized("true")),
        ));
    }
    if let Some(uri) = &s.location_uri {
        properties.push(location_property(uri, None)?);
    }

    Ok(ast::Statement::CreateTable(Box::new(ast::CreateTable {
        name: literal::translate_qualified_name(&s.name)?,
        elements,
        if_not_exists: s.if_not_exists,
        properties,
        comment: None,
        location: Some(s.location),
    })))
}

fn translate_comment_table(
    context: &mut Context,
    s: &source::CommentTable,
) -> TranslateResult<ast::Statement> {
    let mut comment = None;
    for property in &s.properties.properties {
        let name = literal::translate_identifier(&property.name)?;
        if name.value.eq_ignore_ascii_case("comment") {
            comment = Some(property_value_text(context, &property.value)?);
        } else {
            return Err(TranslateError::invalid_attribute(
                format!("Unsupported attribute: {}", name.value),
                s.properties.location,
            ));
        }
    }
    Ok(ast::Statement::Comment(ast::Comment {
        name: literal::translate_qualified_name(&s.name)?,
        comment,
        location: Some(s.location),
    }))
}

fn translate_add_column(s: &source::AddColumn) -> TranslateResult<ast::Statement> {
    if let Some(at) = s.cascade {
        return Err(TranslateError::unsupported(
            "Unsupported statement: CASCADE",
            at,
        ));
    }
    if let Some(at) = s.replace {
        return Err(TranslateError::unsupported(
            "Unsupported statement: REPLACE",
            at,
        ));
    }
    if let Some(at) = s.partition {
        return Err(TranslateError::unsupported(
            "Unsupported statement: PARTITION",
            at,
        ));
    }
    let Some((first, rest)) = s.columns.split_first() else {
        return Err(TranslateError::invalid_attribute(
            "ADD COLUMNS requires a column definition",
            s.location,
        ));
    };
    if !rest.is_empty() {
        return Err(TranslateError::unsupported(
            "Unsupported add multiple columns",
            first.location,
        ));
    }

    let column = translate_column_definition(first, false)?;
    Ok(ast::Statement::AddColumn(ast::AddColumn {
        name: literal::translate_qualified_name(&s.name)?,
        column,
        location: Some(s.location),
    }))
}

/// Partition columns become hidden and lose their comment.
fn translate_column_definition(
    column: &crate::source::statement::ColumnDefinition,
    hidden: bool,
) -> TranslateResult<ast::ColumnDefinition> {
    if let Some(at) = column.constraint {
        return Err(TranslateError::unsupported(
            "Unsupported attribute: Column constraint",
            at,
        ));
    }
    let comment = if hidden {
        None
    } else {
        column
            .comment
            .as_ref()
            .map(literal::string_value)
            .transpose()?
    };
    Ok(ast::ColumnDefinition {
        name: literal::translate_identifier(&column.name)?,
        data_type: types::type_signature(&column.data_type),
        hidden,
        properties: Vec::new(),
        comment,
        location: Some(column.location),
    })
}

/// TBLPROPERTIES only carries over the `transactional` key.
fn transactional_properties(
    context: &mut Context,
    list: &PropertyList,
) -> TranslateResult<Vec<ast::Property>> {
    let mut properties = Vec::new();
    for property in &list.properties {
        let name = literal::translate_identifier(&property.name)?;
        if name.value.eq_ignore_ascii_case("transactional") {
            let value = property_value_text(context, &property.value)?;
            properties.push(ast::Property::synthesized(
                "transactional",
                ast::Expression::Identifier(ast::Identifier::synthesized(value)),
            ));
        } else {
            return Err(TranslateError::invalid_attribute(
                format!("Unsupported attribute: {}", name.value),
                list.location,
            ));
        }
    }
    Ok(properties)
}

/// The character data of a property value: the inner text for string
/// literals, the rendered expression text otherwise.
fn property_value_text(
    context: &mut Context,
    value: &SourceExpression,
) -> TranslateResult<String> {
    match value {
        SourceExpression::Literal(SourceLiteral::String(string)) => literal::string_value(string),
        other => Ok(translate_expression(context, other)?.to_string()),
    }
}

fn format_property(stored_as: &crate::source::Identifier) -> TranslateResult<ast::Property> {
    let name = literal::translate_identifier(stored_as)?;
    let format = classify::file_format(&name.value).ok_or_else(|| {
        TranslateError::unmapped(
            format!("Unsupported file format: {}", name.value),
            stored_as.location,
        )
    })?;
    Ok(ast::Property::synthesized(
        "format",
        ast::Expression::Literal(ast::Literal::synthesized_string(format)),
    ))
}

fn location_property(
    uri: &StringLiteral,
    location: Option<Location>,
) -> TranslateResult<ast::Property> {
    Ok(ast::Property {
        name: ast::Identifier::synthesized("location"),
        value: ast::Expression::Literal(ast::Literal::string(
            literal::string_value(uri)?,
            uri.location,
        )),
        location,
    })
}

fn translate_pattern(
    pattern: Option<&StringLiteral>,
) -> TranslateResult<(Option<String>, Option<String>)> {
    match pattern {
        None => Ok((None, None)),
        Some(pattern) => {
            let (text, escape) = literal::like_pattern(pattern)?;
            Ok((Some(text), escape))
        }
    }
}

fn translate_column_aliases(
    aliases: Option<&ColumnAliases>,
) -> TranslateResult<Option<Vec<ast::Identifier>>> {
    aliases
        .map(|aliases| {
            aliases
                .names
                .iter()
                .map(literal::translate_identifier)
                .collect::<TranslateResult<Vec<_>>>()
        })
        .transpose()
}

fn translate_identifiers(
    identifiers: &[crate::source::Identifier],
) -> TranslateResult<Vec<ast::Identifier>> {
    identifiers
        .iter()
        .map(literal::translate_identifier)
        .collect()
}

fn translate_principal(principal: &Principal) -> TranslateResult<ast::PrincipalSpecification> {
    Ok(ast::PrincipalSpecification {
        kind: match principal.kind {
            PrincipalKindToken::Unspecified => ast::PrincipalKind::Unspecified,
            PrincipalKindToken::User => ast::PrincipalKind::User,
            PrincipalKindToken::Role => ast::PrincipalKind::Role,
        },
        name: literal::translate_identifier(&principal.name)?,
    })
}

fn translate_principals(
    principals: &[Principal],
) -> TranslateResult<Vec<ast::PrincipalSpecification>> {
    principals.iter().map(translate_principal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::source::expression::Identifier;
    use crate::source::query::{Query, QueryNoWith, QuerySpecification, QueryTerm, Relation, SelectItem};
    use crate::source::statement::Property;
    use crate::source::types::TypeNode;
    use crate::source::QualifiedName;
    use crate::translator::{Translator, TranslatorOptions};
    use pretty_assertions::assert_eq;

    fn at(line: usize, column: usize) -> Location {
        Location::new(line, column)
    }

    fn name(parts: &[&str]) -> QualifiedName {
        QualifiedName::new(
            parts
                .iter()
                .map(|part| Identifier::unquoted(*part, at(1, 13)))
                .collect(),
        )
    }

    fn base_type(type_name: &str) -> TypeNode {
        TypeNode::Base {
            name: type_name.to_string(),
            double_precision: false,
            parameters: vec![],
            location: at(1, 20),
        }
    }

    fn column(column_name: &str, type_name: &str) -> source::ColumnDefinition {
        source::ColumnDefinition {
            name: Identifier::unquoted(column_name, at(1, 18)),
            data_type: base_type(type_name),
            comment: None,
            constraint: None,
            location: at(1, 18),
        }
    }

    fn select_star_from(table: &str) -> Query {
        Query {
            with: None,
            body: QueryNoWith {
                term: QueryTerm::Specification(QuerySpecification {
                    select_location: at(2, 0),
                    quantifier: None,
                    items: vec![SelectItem::All {
                        prefix: None,
                        location: at(2, 7),
                    }],
                    relations: vec![Relation::Table {
                        name: name(&[table]),
                        location: at(2, 14),
                    }],
                    lateral_views: vec![],
                    where_clause: None,
                    group_by: None,
                    having: None,
                    location: at(2, 0),
                }),
                order_by: vec![],
                order_location: None,
                clustered_by: None,
                distribute_by: None,
                sorted_by: None,
                limit: None,
                location: at(2, 0),
            },
            location: at(2, 0),
        }
    }

    fn bare_create_table() -> source::CreateTable {
        source::CreateTable {
            name: name(&["t"]),
            temporary: false,
            if_not_exists: false,
            external: false,
            elements: vec![column("id", "INT")],
            constraint: None,
            comment: None,
            transactional: false,
            partitioned_by: None,
            clustered_by: None,
            sorted_by: None,
            bucket_count: None,
            skewed: None,
            row_format: None,
            stored_by: None,
            stored_as: None,
            location_uri: None,
            properties: None,
            location: at(1, 0),
        }
    }

    fn translate(statement: &Statement) -> TranslateResult<crate::translator::Translated<ast::Statement>> {
        Translator::new(TranslatorOptions::default()).translate(statement)
    }

    fn property_names(properties: &[ast::Property]) -> Vec<&str> {
        properties
            .iter()
            .map(|property| property.name.value.as_str())
            .collect()
    }

    #[test]
    fn partition_columns_become_hidden_and_synthesize_a_property() {
        let mut create = bare_create_table();
        let mut partition = column("ds", "STRING");
        partition.comment = Some(StringLiteral::new("'dropped'", at(1, 60)));
        create.partitioned_by = Some(vec![partition]);

        let translated = translate(&Statement::CreateTable(Box::new(create))).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert_eq!(table.elements.len(), 2);
        let ast::TableElement::Column(appended) = &table.elements[1] else {
            panic!("expected a column element");
        };
        assert!(appended.hidden);
        assert_eq!(appended.comment, None);
        assert_eq!(property_names(&table.properties), vec!["partitioned_by"]);
        assert_eq!(
            table.properties[0].value,
            ast::Expression::Array {
                items: vec![ast::Expression::Literal(ast::Literal::synthesized_string(
                    "ds"
                ))],
                location: None,
            }
        );
    }

    #[test]
    fn bucketing_and_sorting_become_properties() {
        let mut create = bare_create_table();
        create.clustered_by = Some(vec![SourceExpression::Identifier(Identifier::unquoted(
            "id",
            at(1, 40),
        ))]);
        create.sorted_by = Some(vec![crate::source::query::SortItem {
            expression: SourceExpression::Identifier(Identifier::unquoted("id", at(1, 55))),
            ordering: Some(crate::source::tokens::OrderingToken::Desc),
            null_ordering: None,
            location: at(1, 55),
        }]);
        create.bucket_count = Some(SourceExpression::Literal(SourceLiteral::Integer {
            text: "32".to_string(),
            location: at(1, 70),
        }));

        let translated = translate(&Statement::CreateTable(Box::new(create))).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert_eq!(
            property_names(&table.properties),
            vec!["bucketed_by", "sorted_by", "bucket_count"]
        );
        assert_eq!(
            table.properties[1].value,
            ast::Expression::Array {
                items: vec![ast::Expression::Literal(ast::Literal::synthesized_string(
                    "id DESC"
                ))],
                location: None,
            }
        );
        assert_eq!(
            table.properties[2].value,
            ast::Expression::Literal(ast::Literal::Long {
                value: 32,
                location: Some(at(1, 70)),
            })
        );
    }

    #[test]
    fn stored_as_maps_through_the_format_table() {
        let mut create = bare_create_table();
        create.stored_as = Some(Identifier::unquoted("orc", at(1, 44)));
        let translated = translate(&Statement::CreateTable(Box::new(create))).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert_eq!(
            table.properties[0].value,
            ast::Expression::Literal(ast::Literal::synthesized_string("ORC"))
        );

        let mut unknown = bare_create_table();
        unknown.stored_as = Some(Identifier::unquoted("CARBONDATA", at(1, 44)));
        let error = translate(&Statement::CreateTable(Box::new(unknown))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:44: Unsupported file format: CARBONDATA"
        );
        assert!(matches!(error, TranslateError::UnrecognizedMapping { .. }));
    }

    #[test]
    fn external_requires_location() {
        let mut create = bare_create_table();
        create.external = true;
        let error = translate(&Statement::CreateTable(Box::new(create))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:0: Unsupported statement: External attribute should be used with location"
        );

        let mut create = bare_create_table();
        create.external = true;
        create.location_uri = Some(StringLiteral::new("'/warehouse/t'", at(1, 80)));
        let translated = translate(&Statement::CreateTable(Box::new(create))).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert_eq!(property_names(&table.properties), vec!["external", "location"]);
    }

    #[test]
    fn tblproperties_only_keeps_transactional() {
        let mut create = bare_create_table();
        create.properties = Some(PropertyList {
            properties: vec![Property {
                name: Identifier::unquoted("transactional", at(1, 90)),
                value: SourceExpression::Literal(SourceLiteral::String(StringLiteral::new(
                    "'true'",
                    at(1, 107),
                ))),
                location: at(1, 90),
            }],
            location: at(1, 88),
        });

        let translated = translate(&Statement::CreateTable(Box::new(create))).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert_eq!(
            table.properties[0].value,
            ast::Expression::Identifier(ast::Identifier::synthesized("true"))
        );

        let mut rejected = bare_create_table();
        rejected.properties = Some(PropertyList {
            properties: vec![Property {
                name: Identifier::unquoted("orc.compress", at(1, 90)),
                value: SourceExpression::Literal(SourceLiteral::String(StringLiteral::new(
                    "'ZLIB'",
                    at(1, 105),
                ))),
                location: at(1, 90),
            }],
            location: at(1, 88),
        });
        let error = translate(&Statement::CreateTable(Box::new(rejected))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:88: Unsupported attribute: orc.compress"
        );
    }

    #[test]
    fn create_table_like_excludes_properties() {
        let like = source::CreateTableLike {
            name: name(&["t2"]),
            like_name: name(&["t1"]),
            if_not_exists: false,
            external: true,
            location_uri: None,
            location: at(1, 0),
        };
        let error = translate(&Statement::CreateTableLike(like)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:0: External attribute should be used with location"
        );

        let like = source::CreateTableLike {
            name: name(&["t2"]),
            like_name: name(&["t1"]),
            if_not_exists: true,
            external: false,
            location_uri: None,
            location: at(1, 0),
        };
        let translated = translate(&Statement::CreateTableLike(like)).unwrap();
        let ast::Statement::CreateTable(table) = translated.node else {
            panic!("expected a create table");
        };
        assert!(table.if_not_exists);
        assert!(matches!(
            table.elements[0],
            ast::TableElement::Like(ast::LikeClause {
                properties_option: Some(ast::PropertiesOption::Excluding),
                ..
            })
        ));
    }

    #[test]
    fn create_schema_comment_becomes_a_notice() {
        let create = source::CreateSchema {
            name: name(&["sales"]),
            if_not_exists: false,
            comment: Some(StringLiteral::new("'per-region data'", at(1, 30))),
            location_uri: None,
            properties: None,
            location: at(1, 0),
        };
        let translated = translate(&Statement::CreateSchema(create)).unwrap();
        assert_eq!(translated.notices, vec!["COMMENT: 'per-region data'"]);

        let rejected = source::CreateSchema {
            name: name(&["sales"]),
            if_not_exists: false,
            comment: None,
            location_uri: None,
            properties: Some(PropertyList {
                properties: vec![],
                location: at(1, 35),
            }),
            location: at(1, 0),
        };
        let error = translate(&Statement::CreateSchema(rejected)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:35: Unsupported attribute: DBPROPERTIES");
    }

    #[test]
    fn drop_schema_cascade_locates_the_cascade_token() {
        let drop = source::DropSchema {
            name: name(&["sales"]),
            if_exists: false,
            cascade: Some(at(1, 18)),
            location: at(1, 0),
        };
        let error = translate(&Statement::DropSchema(drop)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:18: Unsupported statement: CASCADE");
    }

    #[test]
    fn alter_view_becomes_replacing_create_view() {
        let alter = source::AlterView {
            name: name(&["v"]),
            query: select_star_from("t"),
            comment: None,
            column_aliases: None,
            properties: None,
            location: at(1, 0),
        };
        let translated = translate(&Statement::AlterView(alter)).unwrap();
        let ast::Statement::CreateView(view) = translated.node else {
            panic!("expected a create view");
        };
        assert!(view.replace);
    }

    #[test]
    fn show_create_table_emits_a_notice() {
        let show = source::ShowCreateTable {
            name: name(&["db", "t"]),
            location: at(1, 0),
        };
        let translated = translate(&Statement::ShowCreateTable(show)).unwrap();
        assert_eq!(translated.notices, vec!["SHOW CREATE TABLE db.t"]);
        assert!(matches!(
            translated.node,
            ast::Statement::ShowCreate(ast::ShowCreate {
                kind: ast::ShowCreateKind::Table,
                ..
            })
        ));
    }

    #[test]
    fn comment_table_accepts_only_the_comment_key() {
        let comment = source::CommentTable {
            name: name(&["t"]),
            properties: PropertyList {
                properties: vec![Property {
                    name: Identifier::unquoted("comment", at(1, 30)),
                    value: SourceExpression::Literal(SourceLiteral::String(StringLiteral::new(
                        "'fact table'",
                        at(1, 40),
                    ))),
                    location: at(1, 30),
                }],
                location: at(1, 28),
            },
            location: at(1, 0),
        };
        let translated = translate(&Statement::CommentTable(comment)).unwrap();
        let ast::Statement::Comment(comment) = translated.node else {
            panic!("expected a comment statement");
        };
        assert_eq!(comment.comment, Some("fact table".to_string()));

        let rejected = source::CommentTable {
            name: name(&["t"]),
            properties: PropertyList {
                properties: vec![Property {
                    name: Identifier::unquoted("owner", at(1, 30)),
                    value: SourceExpression::Literal(SourceLiteral::String(StringLiteral::new(
                        "'etl'",
                        at(1, 38),
                    ))),
                    location: at(1, 30),
                }],
                location: at(1, 28),
            },
            location: at(1, 0),
        };
        let error = translate(&Statement::CommentTable(rejected)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:28: Unsupported attribute: owner");
    }

    #[test]
    fn add_column_rejects_multiple_columns() {
        let add = source::AddColumn {
            name: name(&["t"]),
            cascade: None,
            replace: None,
            partition: None,
            columns: vec![column("a", "INT"), column("b", "INT")],
            location: at(1, 0),
        };
        let error = translate(&Statement::AddColumn(add)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:18: Unsupported add multiple columns");

        let add = source::AddColumn {
            name: name(&["t"]),
            cascade: None,
            replace: None,
            partition: None,
            columns: vec![column("a", "BINARY")],
            location: at(1, 0),
        };
        let translated = translate(&Statement::AddColumn(add)).unwrap();
        let ast::Statement::AddColumn(add) = translated.node else {
            panic!("expected an add column");
        };
        assert_eq!(add.column.data_type, "varbinary");
        assert!(!add.column.hidden);
    }

    #[test]
    fn add_column_without_columns_is_an_error_not_a_panic() {
        let add = source::AddColumn {
            name: name(&["t"]),
            cascade: None,
            replace: None,
            partition: None,
            columns: vec![],
            location: at(1, 0),
        };
        let error = translate(&Statement::AddColumn(add)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:0: ADD COLUMNS requires a column definition"
        );
        assert!(matches!(error, TranslateError::InvalidAttribute { .. }));
    }

    #[test]
    fn describe_table_becomes_show_columns() {
        let describe = source::DescribeTable {
            table: name(&["t"]),
            extended_or_formatted: None,
            option: None,
            location: at(1, 0),
        };
        let translated = translate(&Statement::DescribeTable(describe)).unwrap();
        assert!(matches!(translated.node, ast::Statement::ShowColumns(_)));

        let rejected = source::DescribeTable {
            table: name(&["t"]),
            extended_or_formatted: Some(at(1, 9)),
            option: None,
            location: at(1, 0),
        };
        let error = translate(&Statement::DescribeTable(rejected)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:9: Unsupported attribute: EXTENDED/FORMATTED"
        );
    }

    #[test]
    fn insert_overwrite_sets_the_overwrite_flag() {
        let insert = source::InsertOverwrite {
            target: name(&["t"]),
            partition: None,
            query: select_star_from("s"),
            location: at(1, 0),
        };
        let translated = translate(&Statement::InsertOverwrite(insert)).unwrap();
        let ast::Statement::Insert(insert) = translated.node else {
            panic!("expected an insert");
        };
        assert!(insert.overwrite);
        assert_eq!(insert.columns, None);

        let partitioned = source::InsertInto {
            target: name(&["t"]),
            partition: Some(at(1, 14)),
            column_aliases: None,
            query: select_star_from("s"),
            location: at(1, 0),
        };
        let error = translate(&Statement::InsertInto(partitioned)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:14: Unsupported attribute: PARTITION");
    }

    #[test]
    fn grant_keeps_privilege_text_and_principal_kind() {
        let grant = source::Grant {
            privileges: vec![source::Privilege {
                text: "SELECT".to_string(),
                location: at(1, 6),
            }],
            table_name: name(&["t"]),
            grantee: Principal {
                kind: PrincipalKindToken::Role,
                name: Identifier::unquoted("analyst", at(1, 30)),
                location: at(1, 25),
            },
            grant_option: true,
            location: at(1, 0),
        };
        let translated = translate(&Statement::Grant(grant)).unwrap();
        let ast::Statement::Grant(grant) = translated.node else {
            panic!("expected a grant");
        };
        assert_eq!(grant.privileges, vec!["SELECT".to_string()]);
        assert!(grant.table);
        assert!(grant.grant_option);
        assert_eq!(grant.grantee.kind, ast::PrincipalKind::Role);
    }

    #[test]
    fn explain_accepts_only_analyze() {
        let explain = source::Explain {
            options: vec![ExplainOption::Analyze],
            statement: Box::new(Statement::Query(select_star_from("t"))),
            location: at(1, 0),
        };
        let translated = translate(&Statement::Explain(explain)).unwrap();
        let ast::Statement::Explain(explain) = translated.node else {
            panic!("expected an explain");
        };
        assert!(explain.analyze);

        let rejected = source::Explain {
            options: vec![ExplainOption::Dependency],
            statement: Box::new(Statement::Query(select_star_from("t"))),
            location: at(1, 0),
        };
        let error = translate(&Statement::Explain(rejected)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:0: Only supported attribute: ANALYZE");
    }

    #[test]
    fn bare_set_lists_the_session() {
        let bare = source::SetSession {
            property: None,
            location: at(1, 0),
        };
        let translated = translate(&Statement::SetSession(bare)).unwrap();
        assert!(matches!(translated.node, ast::Statement::ShowSession(_)));

        let assigning = source::SetSession {
            property: Some(Property {
                name: Identifier::unquoted("hive.exec.dynamic.partition", at(1, 4)),
                value: SourceExpression::Literal(SourceLiteral::String(StringLiteral::new(
                    "'true'",
                    at(1, 34),
                ))),
                location: at(1, 4),
            }),
            location: at(1, 0),
        };
        let error = translate(&Statement::SetSession(assigning)).unwrap_err();
        assert_eq!(error.to_string(), "line 1:4: Unsupported to set session property");
    }

    #[test]
    fn unsupported_constructs_name_the_construct() {
        let error = translate(&Statement::Unsupported {
            construct: source::UnsupportedConstruct::TruncateTable,
            location: at(1, 0),
        })
        .unwrap_err();
        assert_eq!(error.to_string(), "line 1:0: Unsupported statement: Truncate Table");

        let error = translate(&Statement::Unsupported {
            construct: source::UnsupportedConstruct::AlterTableNotStoredAsDirectories,
            location: at(1, 0),
        })
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 1:0: Unsupported statement: Alter Table Not Stored As Directories"
        );
    }

    #[test]
    fn show_tables_rewrites_the_glob_pattern() {
        let show = source::ShowTables {
            schema: None,
            pattern: Some(StringLiteral::new("'page_*'", at(1, 12))),
            location: at(1, 0),
        };
        let translated = translate(&Statement::ShowTables(show)).unwrap();
        let ast::Statement::ShowTables(show) = translated.node else {
            panic!("expected a show tables");
        };
        assert_eq!(show.like_pattern, Some("page#_%".to_string()));
        assert_eq!(show.escape, Some("#".to_string()));
    }
}

//! Query nodes of the target dialect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::expression::{Expression, Identifier, QualifiedName};
use crate::ast::operators::{JoinType, NullOrdering, Ordering, SetOperator};
use crate::location::Location;

/// A full query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub with: Option<With>,
    pub body: QueryBody,
    pub order_by: Option<OrderBy>,
    pub offset: Option<Offset>,
    pub limit: Option<Limit>,
    pub location: Option<Location>,
}

/// `WITH [RECURSIVE] name [(cols)] AS (query), ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    pub recursive: bool,
    pub queries: Vec<WithQuery>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithQuery {
    pub name: Identifier,
    pub column_aliases: Option<Vec<Identifier>>,
    pub query: Box<Query>,
    pub location: Option<Location>,
}

/// The body of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryBody {
    Specification(QuerySpecification),
    SetOperation {
        operator: SetOperator,
        distinct: bool,
        left: Box<QueryBody>,
        right: Box<QueryBody>,
        location: Option<Location>,
    },
    Values {
        rows: Vec<Expression>,
        location: Option<Location>,
    },
}

/// A SELECT specification. Ordering and limit clauses attach here when
/// the specification is itself the query body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpecification {
    pub select: Select,
    pub from: Option<Relation>,
    pub where_clause: Option<Expression>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expression>,
    pub order_by: Option<OrderBy>,
    pub offset: Option<Offset>,
    pub limit: Option<Limit>,
    pub location: Option<Location>,
}

/// The select clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,
    pub items: Vec<SelectItem>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    AllColumns {
        prefix: Option<QualifiedName>,
        location: Option<Location>,
    },
    SingleColumn {
        expression: Expression,
        alias: Option<Identifier>,
        location: Option<Location>,
    },
}

/// Table sampling method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    Bernoulli,
    System,
}

/// FROM-clause relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Relation {
    Table {
        name: QualifiedName,
        location: Option<Location>,
    },
    Join {
        join_type: JoinType,
        left: Box<Relation>,
        right: Box<Relation>,
        /// ON condition; cross and implicit joins carry none.
        on: Option<Expression>,
        location: Option<Location>,
    },
    AliasedRelation {
        relation: Box<Relation>,
        alias: Identifier,
        column_aliases: Option<Vec<Identifier>>,
        location: Option<Location>,
    },
    SampledRelation {
        relation: Box<Relation>,
        sample_type: SampleType,
        percentage: Expression,
        location: Option<Location>,
    },
    TableSubquery {
        query: Box<Query>,
        location: Option<Location>,
    },
}

/// `GROUP BY [DISTINCT] element, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub distinct: bool,
    pub elements: Vec<GroupingElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupingElement {
    Simple { columns: Vec<Expression> },
    Rollup { columns: Vec<Expression> },
    Cube { columns: Vec<Expression> },
    GroupingSets { sets: Vec<Vec<Expression>> },
}

/// `ORDER BY item, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub items: Vec<SortItem>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortItem {
    pub expression: Expression,
    pub ordering: Option<Ordering>,
    pub null_ordering: Option<NullOrdering>,
}

/// `OFFSET n [ROWS]`; the row count is kept as its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub row_count: String,
}

/// `LIMIT n`; the row count is kept as its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub row_count: String,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ORDER BY ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item.expression)?;
            if let Some(ordering) = item.ordering {
                write!(f, " {ordering}")?;
            }
            if let Some(null_ordering) = item.null_ordering {
                write!(f, " {null_ordering}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(with) = &self.with {
            f.write_str("WITH ")?;
            if with.recursive {
                f.write_str("RECURSIVE ")?;
            }
            for (i, named) in with.queries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", named.name)?;
                if let Some(aliases) = &named.column_aliases {
                    f.write_str(" (")?;
                    for (j, alias) in aliases.iter().enumerate() {
                        if j > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{alias}")?;
                    }
                    f.write_str(")")?;
                }
                write!(f, " AS ({})", named.query)?;
            }
            f.write_str(" ")?;
        }
        write!(f, "{}", self.body)?;
        if let Some(order_by) = &self.order_by {
            write!(f, " {order_by}")?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " OFFSET {} ROWS", offset.row_count)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}", limit.row_count)?;
        }
        Ok(())
    }
}

impl fmt::Display for QueryBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryBody::Specification(spec) => write!(f, "{spec}"),
            QueryBody::SetOperation {
                operator,
                distinct,
                left,
                right,
                ..
            } => {
                write!(f, "{left} {operator} ")?;
                if !distinct {
                    f.write_str("ALL ")?;
                }
                write!(f, "{right}")
            }
            QueryBody::Values { rows, .. } => {
                f.write_str("VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{row}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for QuerySpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.select.distinct {
            f.write_str("DISTINCT ")?;
        }
        for (i, item) in self.select.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match item {
                SelectItem::AllColumns { prefix, .. } => {
                    if let Some(prefix) = prefix {
                        write!(f, "{prefix}.")?;
                    }
                    f.write_str("*")?;
                }
                SelectItem::SingleColumn {
                    expression, alias, ..
                } => {
                    write!(f, "{expression}")?;
                    if let Some(alias) = alias {
                        write!(f, " AS {alias}")?;
                    }
                }
            }
        }
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        if let Some(group_by) = &self.group_by {
            f.write_str(" GROUP BY ")?;
            if group_by.distinct {
                f.write_str("DISTINCT ")?;
            }
            for (i, element) in group_by.elements.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{element}")?;
            }
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " {order_by}")?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " OFFSET {} ROWS", offset.row_count)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}", limit.row_count)?;
        }
        Ok(())
    }
}

fn write_columns(f: &mut fmt::Formatter<'_>, columns: &[Expression]) -> fmt::Result {
    f.write_str("(")?;
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{column}")?;
    }
    f.write_str(")")
}

impl fmt::Display for GroupingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingElement::Simple { columns } => {
                if columns.len() == 1 {
                    write!(f, "{}", columns[0])
                } else {
                    write_columns(f, columns)
                }
            }
            GroupingElement::Rollup { columns } => {
                f.write_str("ROLLUP ")?;
                write_columns(f, columns)
            }
            GroupingElement::Cube { columns } => {
                f.write_str("CUBE ")?;
                write_columns(f, columns)
            }
            GroupingElement::GroupingSets { sets } => {
                f.write_str("GROUPING SETS (")?;
                for (i, set) in sets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_columns(f, set)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Table { name, .. } => write!(f, "{name}"),
            Relation::Join {
                join_type,
                left,
                right,
                on,
                ..
            } => {
                match join_type {
                    JoinType::Implicit => return write!(f, "{left}, {right}"),
                    JoinType::Cross => write!(f, "{left} CROSS JOIN {right}")?,
                    JoinType::Inner => write!(f, "{left} INNER JOIN {right}")?,
                    JoinType::Left => write!(f, "{left} LEFT JOIN {right}")?,
                    JoinType::Right => write!(f, "{left} RIGHT JOIN {right}")?,
                    JoinType::Full => write!(f, "{left} FULL JOIN {right}")?,
                }
                if let Some(on) = on {
                    write!(f, " ON {on}")?;
                }
                Ok(())
            }
            Relation::AliasedRelation {
                relation,
                alias,
                column_aliases,
                ..
            } => {
                write!(f, "{relation} AS {alias}")?;
                if let Some(aliases) = column_aliases {
                    f.write_str(" (")?;
                    for (i, column) in aliases.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{column}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Relation::SampledRelation {
                relation,
                sample_type,
                percentage,
                ..
            } => {
                let method = match sample_type {
                    SampleType::Bernoulli => "BERNOULLI",
                    SampleType::System => "SYSTEM",
                };
                write!(f, "{relation} TABLESAMPLE {method} ({percentage})")
            }
            Relation::TableSubquery { query, .. } => write!(f, "({query})"),
        }
    }
}

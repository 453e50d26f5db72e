//! Query-layer productions of the source parse tree.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::source::expression::{Expression, Identifier, QualifiedName};
use crate::source::tokens::*;

/// A full query, with an optional WITH clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub with: Option<With>,
    pub body: QueryNoWith,
    pub location: Location,
}

/// `WITH [RECURSIVE] name [(cols)] AS (query), ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    pub recursive: bool,
    pub queries: Vec<NamedQuery>,
    pub location: Location,
}

/// One named query of a WITH clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedQuery {
    pub name: Identifier,
    pub column_aliases: Option<Vec<Identifier>>,
    pub query: Query,
    pub location: Location,
}

/// The Hive `LIMIT [offset,] rows` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitClause {
    pub offset: Option<String>,
    pub rows: Option<String>,
}

/// A query body: a term plus trailing ordering/limit clauses. The Hive
/// CLUSTER BY / DISTRIBUTE BY / SORT BY clauses are carried as bare
/// locations since they are always rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNoWith {
    pub term: QueryTerm,
    pub order_by: Vec<SortItem>,
    /// Location of the ORDER token, when an ORDER BY is present.
    pub order_location: Option<Location>,
    pub clustered_by: Option<Location>,
    pub distribute_by: Option<Location>,
    pub sorted_by: Option<Location>,
    pub limit: Option<LimitClause>,
    pub location: Location,
}

/// A query term: a plain specification, a set operation over two terms,
/// or an inline VALUES table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryTerm {
    Specification(QuerySpecification),
    SetOperation {
        operator: SetOperatorToken,
        operator_location: Location,
        quantifier: Option<SetQuantifier>,
        left: Box<QueryTerm>,
        right: Box<QueryTerm>,
        location: Location,
    },
    Values {
        rows: Vec<Expression>,
        location: Location,
    },
}

/// A SELECT specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpecification {
    /// Location of the SELECT token.
    pub select_location: Location,
    pub quantifier: Option<SetQuantifier>,
    pub items: Vec<SelectItem>,
    /// Comma-separated FROM relations; more than one is folded into
    /// implicit joins by the translator.
    pub relations: Vec<Relation>,
    /// LATERAL VIEW clauses, always rejected.
    pub lateral_views: Vec<Location>,
    pub where_clause: Option<Expression>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expression>,
    pub location: Location,
}

/// One item of a select list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    All {
        prefix: Option<QualifiedName>,
        location: Location,
    },
    Single {
        expression: Expression,
        alias: Option<Identifier>,
        location: Location,
    },
}

/// `GROUP BY [ALL|DISTINCT] element, ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub quantifier: Option<SetQuantifier>,
    pub elements: Vec<GroupingElement>,
    pub location: Location,
}

/// One grouping element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupingElement {
    Single {
        expressions: Vec<Expression>,
        location: Location,
    },
    Rollup {
        expressions: Vec<Expression>,
        location: Location,
    },
    Cube {
        expressions: Vec<Expression>,
        location: Location,
    },
    MultipleSets {
        sets: Vec<Vec<Expression>>,
        location: Location,
    },
}

/// Join type as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinTypeToken {
    Cross,
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
}

/// FROM-clause relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Relation {
    Table {
        name: QualifiedName,
        location: Location,
    },
    Join {
        join_type: JoinTypeToken,
        left: Box<Relation>,
        right: Box<Relation>,
        criteria: Option<Expression>,
        /// Location of the ON clause, when present.
        criteria_location: Option<Location>,
        location: Location,
    },
    /// `TABLESAMPLE (n PERCENT)`; absent percentage means no sampling.
    Sampled {
        relation: Box<Relation>,
        percentage: Option<Expression>,
        location: Location,
    },
    Aliased {
        relation: Box<Relation>,
        alias: Identifier,
        column_aliases: Option<Vec<Identifier>>,
        location: Location,
    },
    Subquery {
        query: Box<Query>,
        location: Location,
    },
}

/// One item of an ORDER BY or SORTED BY list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortItem {
    pub expression: Expression,
    pub ordering: Option<OrderingToken>,
    pub null_ordering: Option<NullOrderingToken>,
    pub location: Location,
}

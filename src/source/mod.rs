//! Source-dialect parse tree model.
//!
//! Each node carries the [`Location`](crate::location::Location) of the
//! token that introduced it, so rejection errors can point at the exact
//! offending clause rather than the statement start.

pub mod expression;
pub mod query;
pub mod statement;
pub mod tokens;
pub mod types;

pub use expression::{
    Expression, FrameBound, Identifier, Literal, Over, PathElement, PathSpecification,
    QualifiedName, QuoteStyle, StringLiteral, TypeConstructorName, WhenClause, WindowFrame,
};
pub use query::{
    GroupBy, GroupingElement, JoinTypeToken, LimitClause, NamedQuery, Query, QueryNoWith,
    QuerySpecification, QueryTerm, Relation, SelectItem, SortItem, With,
};
pub use statement::{
    AddColumn, AlterView, Assignment, ColumnAliases, ColumnDefinition, CommentTable, CreateRole,
    CreateSchema,
    CreateTable, CreateTableAsSelect, CreateTableLike, CreateView, Delete, DescribeTable,
    DropRole, DropSchema, DropTable, DropView, Explain, ExplainOption, Grant, GrantRoles,
    InsertInto, InsertOverwrite, Principal, PrincipalKindToken, Privilege, Property, PropertyList,
    RenameTable, Revoke, RevokeRoles, SetRole, SetRoleTarget, SetSession, ShowColumns,
    ShowCreateTable, ShowFunctions, ShowGrants, ShowRoles, ShowSchemas, ShowTables, Statement,
    UnsupportedConstruct, Update, Use,
};
pub use tokens::*;
pub use types::{TypeNode, TypeParameter};

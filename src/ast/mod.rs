//! Target-dialect abstract syntax tree.
//!
//! Nodes are plain data; `Display` renders SQL text, which the
//! translator also leans on when it folds an expression into a
//! synthesized property or a conversion notice.

pub mod expression;
pub mod operators;
pub mod query;
pub mod statement;

pub use expression::{
    Expression, FrameBound, Identifier, Literal, QualifiedName, WhenClause, Window, WindowFrame,
};
pub use operators::*;
pub use query::{
    GroupBy, GroupingElement, Limit, Offset, OrderBy, Query, QueryBody, QuerySpecification,
    Relation, SampleType, Select, SelectItem, SortItem, With, WithQuery,
};
pub use statement::{
    AddColumn, AssignmentItem, ColumnDefinition, Comment, CreateRole, CreateSchema, CreateTable,
    CreateTableAsSelect, CreateView, Delete, DropRole, DropSchema, DropTable, DropView, Explain,
    Grant, GrantRoles, Insert, LikeClause, PathElement, PathSpecification, PrincipalKind,
    PrincipalSpecification, PropertiesOption, Property, RenameTable, Revoke, RevokeRoles, SetRole,
    SetRoleKind, ShowColumns, ShowCreate, ShowCreateKind, ShowFunctions, ShowGrants, ShowRoles,
    ShowSchemas, ShowSession, ShowTables, Statement, TableElement, Update, Use,
};

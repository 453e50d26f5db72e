//! Statement nodes of the target dialect.

use serde::{Deserialize, Serialize};

use crate::ast::expression::{Expression, Identifier, QualifiedName};
use crate::ast::query::Query;
use crate::location::Location;

/// A `name = value` property. Synthesized properties carry no location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: Identifier,
    pub value: Expression,
    pub location: Option<Location>,
}

impl Property {
    /// A property invented by a rewrite.
    pub fn synthesized(name: impl Into<String>, value: Expression) -> Self {
        Self {
            name: Identifier::synthesized(name),
            value,
            location: None,
        }
    }
}

/// A column of a CREATE TABLE. Hidden columns come from rewritten
/// partition specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Identifier,
    /// Canonical type-signature text.
    pub data_type: String,
    pub hidden: bool,
    pub properties: Vec<Property>,
    pub comment: Option<String>,
    pub location: Option<Location>,
}

/// `LIKE other_table` element of a CREATE TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertiesOption {
    Including,
    Excluding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeClause {
    pub name: QualifiedName,
    pub properties_option: Option<PropertiesOption>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableElement {
    Column(ColumnDefinition),
    Like(LikeClause),
}

/// A GRANT/REVOKE principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalKind {
    Unspecified,
    User,
    Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalSpecification {
    pub kind: PrincipalKind,
    pub name: Identifier,
}

/// `SET column = value` item of an UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentItem {
    pub name: QualifiedName,
    pub value: Expression,
    pub location: Option<Location>,
}

/// `[catalog.]schema` element of a path specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    pub catalog: Option<Identifier>,
    pub schema: Identifier,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpecification {
    pub elements: Vec<PathElement>,
    pub location: Option<Location>,
}

/// SET ROLE target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetRoleKind {
    All,
    None,
    Role,
}

/// Object kind of a SHOW CREATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowCreateKind {
    Table,
    View,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Use {
    pub catalog: Option<Identifier>,
    pub schema: Identifier,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSchema {
    pub name: QualifiedName,
    pub if_not_exists: bool,
    pub properties: Vec<Property>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSchema {
    pub name: QualifiedName,
    pub if_exists: bool,
    pub cascade: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSchemas {
    pub catalog: Option<Identifier>,
    pub like_pattern: Option<String>,
    pub escape: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateView {
    pub name: QualifiedName,
    pub query: Query,
    pub replace: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropView {
    pub name: QualifiedName,
    pub if_exists: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub name: QualifiedName,
    pub elements: Vec<TableElement>,
    pub if_not_exists: bool,
    pub properties: Vec<Property>,
    pub comment: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableAsSelect {
    pub name: QualifiedName,
    pub query: Query,
    pub if_not_exists: bool,
    pub properties: Vec<Property>,
    pub with_data: bool,
    pub column_aliases: Option<Vec<Identifier>>,
    pub comment: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowTables {
    pub schema: Option<QualifiedName>,
    pub like_pattern: Option<String>,
    pub escape: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowCreate {
    pub kind: ShowCreateKind,
    pub name: QualifiedName,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTable {
    pub source: QualifiedName,
    pub target: QualifiedName,
    pub location: Option<Location>,
}

/// `COMMENT ON TABLE`, rewritten from the Hive TBLPROPERTIES form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub name: QualifiedName,
    pub comment: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddColumn {
    pub name: QualifiedName,
    pub column: ColumnDefinition,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTable {
    pub name: QualifiedName,
    pub if_exists: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowColumns {
    pub table: QualifiedName,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub target: QualifiedName,
    pub columns: Option<Vec<Identifier>>,
    pub query: Query,
    pub overwrite: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: QualifiedName,
    pub assignments: Vec<AssignmentItem>,
    pub where_clause: Option<Expression>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: QualifiedName,
    pub where_clause: Option<Expression>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowFunctions {
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: Identifier,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRole {
    pub name: Identifier,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRoles {
    pub roles: Vec<Identifier>,
    pub grantees: Vec<PrincipalSpecification>,
    pub admin_option: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeRoles {
    pub roles: Vec<Identifier>,
    pub grantees: Vec<PrincipalSpecification>,
    pub admin_option: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRole {
    pub kind: SetRoleKind,
    pub role: Option<Identifier>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRoles {
    pub catalog: Option<Identifier>,
    pub current: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// Privilege names as written in the source.
    pub privileges: Vec<String>,
    pub table: bool,
    pub name: QualifiedName,
    pub grantee: PrincipalSpecification,
    pub grant_option: bool,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revoke {
    pub grant_option: bool,
    pub privileges: Vec<String>,
    pub table: bool,
    pub name: QualifiedName,
    pub grantee: PrincipalSpecification,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowGrants {
    pub table: bool,
    pub name: Option<QualifiedName>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explain {
    pub analyze: bool,
    pub statement: Box<Statement>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSession {
    pub location: Option<Location>,
}

/// A translated statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Use(Use),
    CreateSchema(CreateSchema),
    DropSchema(DropSchema),
    ShowSchemas(ShowSchemas),
    CreateView(CreateView),
    DropView(DropView),
    CreateTable(Box<CreateTable>),
    CreateTableAsSelect(Box<CreateTableAsSelect>),
    ShowTables(ShowTables),
    ShowCreate(ShowCreate),
    RenameTable(RenameTable),
    Comment(Comment),
    AddColumn(AddColumn),
    DropTable(DropTable),
    ShowColumns(ShowColumns),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    ShowFunctions(ShowFunctions),
    CreateRole(CreateRole),
    DropRole(DropRole),
    GrantRoles(GrantRoles),
    RevokeRoles(RevokeRoles),
    SetRole(SetRole),
    ShowRoles(ShowRoles),
    Grant(Grant),
    Revoke(Revoke),
    ShowGrants(ShowGrants),
    Explain(Explain),
    ShowSession(ShowSession),
    Query(Query),
}

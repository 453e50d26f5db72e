//! Statement productions of the source parse tree.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::source::expression::{Expression, Identifier, QualifiedName, StringLiteral};
use crate::source::query::{Query, SortItem};
use crate::source::types::TypeNode;

/// A source property: `name = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: Identifier,
    pub value: Expression,
    pub location: Location,
}

/// A parenthesized property list (TBLPROPERTIES / DBPROPERTIES), with the
/// location of the list itself for error reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pub properties: Vec<Property>,
    pub location: Location,
}

/// A parenthesized column-alias list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    pub names: Vec<Identifier>,
    pub location: Location,
}

/// A column definition: `name type [COMMENT '...']`. A column-level
/// constraint, which is always rejected, is carried as its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Identifier,
    pub data_type: TypeNode,
    pub comment: Option<StringLiteral>,
    pub constraint: Option<Location>,
    pub location: Location,
}

/// `SET assignment` item of an UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: QualifiedName,
    pub value: Expression,
    pub location: Location,
}

/// A GRANT/REVOKE principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalKindToken {
    Unspecified,
    User,
    Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub kind: PrincipalKindToken,
    pub name: Identifier,
    pub location: Location,
}

/// A privilege token of a GRANT/REVOKE, carried as its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    pub text: String,
    pub location: Location,
}

/// EXPLAIN modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplainOption {
    Analyze,
    Extended,
    Cbo,
    Ast,
    Dependency,
    Authorization,
    Locks,
    VectorizationAnalyze,
}

/// SET ROLE target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetRoleTarget {
    All,
    None,
    Role(Identifier),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Use {
    pub schema: Identifier,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSchema {
    pub name: QualifiedName,
    pub if_not_exists: bool,
    pub comment: Option<StringLiteral>,
    pub location_uri: Option<StringLiteral>,
    /// DBPROPERTIES, always rejected.
    pub properties: Option<PropertyList>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSchema {
    pub name: QualifiedName,
    pub if_exists: bool,
    /// Location of the CASCADE token, when present.
    pub cascade: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSchemas {
    pub pattern: Option<StringLiteral>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateView {
    pub name: QualifiedName,
    pub query: Query,
    pub comment: Option<StringLiteral>,
    pub column_aliases: Option<ColumnAliases>,
    pub properties: Option<PropertyList>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterView {
    pub name: QualifiedName,
    pub query: Query,
    pub comment: Option<StringLiteral>,
    pub column_aliases: Option<ColumnAliases>,
    pub properties: Option<PropertyList>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropView {
    pub name: QualifiedName,
    pub if_exists: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub name: QualifiedName,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub external: bool,
    pub elements: Vec<ColumnDefinition>,
    /// Table-level constraint specification, always rejected.
    pub constraint: Option<Location>,
    pub comment: Option<StringLiteral>,
    pub transactional: bool,
    pub partitioned_by: Option<Vec<ColumnDefinition>>,
    pub clustered_by: Option<Vec<Expression>>,
    pub sorted_by: Option<Vec<SortItem>>,
    pub bucket_count: Option<Expression>,
    pub skewed: Option<Location>,
    pub row_format: Option<Location>,
    pub stored_by: Option<Location>,
    pub stored_as: Option<Identifier>,
    pub location_uri: Option<StringLiteral>,
    pub properties: Option<PropertyList>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableAsSelect {
    pub name: QualifiedName,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub comment: Option<StringLiteral>,
    pub column_aliases: Option<ColumnAliases>,
    pub transactional: bool,
    pub stored_as: Option<Identifier>,
    pub location_uri: Option<StringLiteral>,
    pub properties: Option<PropertyList>,
    pub query: Query,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableLike {
    pub name: QualifiedName,
    pub like_name: QualifiedName,
    pub if_not_exists: bool,
    pub external: bool,
    pub location_uri: Option<StringLiteral>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowTables {
    pub schema: Option<QualifiedName>,
    pub pattern: Option<StringLiteral>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowCreateTable {
    pub name: QualifiedName,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameTable {
    pub from: QualifiedName,
    pub to: QualifiedName,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentTable {
    pub name: QualifiedName,
    pub properties: PropertyList,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddColumn {
    pub name: QualifiedName,
    pub cascade: Option<Location>,
    pub replace: Option<Location>,
    pub partition: Option<Location>,
    pub columns: Vec<ColumnDefinition>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTable {
    pub name: QualifiedName,
    pub if_exists: bool,
    pub purge: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowColumns {
    pub table: QualifiedName,
    /// FROM/IN db qualifier, rejected.
    pub db: Option<Location>,
    /// LIKE pattern, rejected.
    pub pattern: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeTable {
    pub table: QualifiedName,
    /// EXTENDED or FORMATTED, rejected.
    pub extended_or_formatted: Option<Location>,
    /// A describe option (column/partition path), rejected.
    pub option: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertInto {
    pub target: QualifiedName,
    pub partition: Option<Location>,
    pub column_aliases: Option<ColumnAliases>,
    pub query: Query,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertOverwrite {
    pub target: QualifiedName,
    pub partition: Option<Location>,
    pub query: Query,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub target: QualifiedName,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub target: QualifiedName,
    pub where_clause: Option<Expression>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowFunctions {
    /// LIKE pattern, rejected.
    pub pattern: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: Identifier,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropRole {
    pub name: Identifier,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantRoles {
    pub roles: Vec<Identifier>,
    pub grantees: Vec<Principal>,
    pub admin_option: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokeRoles {
    pub roles: Vec<Identifier>,
    pub grantees: Vec<Principal>,
    pub admin_option: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRole {
    pub target: SetRoleTarget,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRoles {
    pub current: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub privileges: Vec<Privilege>,
    pub table_name: QualifiedName,
    pub grantee: Principal,
    pub grant_option: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revoke {
    pub privileges: Vec<Privilege>,
    pub table_name: QualifiedName,
    pub grantee: Principal,
    pub grant_option: bool,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowGrants {
    pub table: bool,
    pub name: QualifiedName,
    pub principal: Option<Location>,
    pub all: Option<Location>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explain {
    pub options: Vec<ExplainOption>,
    pub statement: Box<Statement>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSession {
    /// A property assignment, rejected; bare SET lists the session.
    pub property: Option<Property>,
    pub location: Location,
}

/// Grammar productions that are never rewritten; the translator rejects
/// each with a construct-specific message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnsupportedConstruct {
    AlterSchema,
    DescribeSchema,
    ShowViews,
    AlterTableAddConstraint,
    AlterTableChangeConstraint,
    AlterTableDropConstraint,
    AlterTableSerde,
    AlterTableStorage,
    AlterTableSkewed,
    AlterTableNotSkewed,
    AlterTableNotStoredAsDirectories,
    AlterTableSetSkewedLocation,
    AlterTableAddPartition,
    AlterTableRenamePartition,
    AlterTableExchangePartition,
    AlterTableRecoverPartitions,
    AlterTableDropPartition,
    AlterTableArchivePartition,
    AlterTablePartitionFileFormat,
    AlterTablePartitionLocation,
    AlterTablePartitionTouch,
    AlterTablePartitionProtections,
    AlterTablePartitionCompact,
    AlterTablePartitionConcatenate,
    AlterTablePartitionUpdateColumns,
    AlterTableChangeColumn,
    ShowTableExtended,
    ShowTableProperties,
    TruncateTable,
    MsckRepairTable,
    CreateMaterializedView,
    DropMaterializedView,
    AlterMaterializedView,
    ShowMaterializedViews,
    CreateFunction,
    DropFunction,
    ReloadFunctions,
    CreateIndex,
    DropIndex,
    AlterIndex,
    ShowIndex,
    ShowPartitions,
    DescribePartition,
    DescribeFunction,
    CreateMacro,
    DropMacro,
    ShowRoleGrant,
    ShowPrincipals,
    ShowLocks,
    ShowConf,
    ShowTransactions,
    ShowCompactions,
    AbortTransactions,
    LoadData,
    Merge,
    ExportData,
    ImportData,
    InsertFilesystem,
    ResetSession,
}

impl std::fmt::Display for UnsupportedConstruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AlterSchema => "Alter Schema/Database",
            Self::DescribeSchema => "Describe Schema/Database",
            Self::ShowViews => "Show Views",
            Self::AlterTableAddConstraint => "Alter Table Add Constraint",
            Self::AlterTableChangeConstraint => "Alter Table Change Constraint",
            Self::AlterTableDropConstraint => "Alter Table Drop Constraint",
            Self::AlterTableSerde => "Alter Table Serde",
            Self::AlterTableStorage => "Alter Table Storage",
            Self::AlterTableSkewed => "Alter Table Skewed",
            Self::AlterTableNotSkewed => "Alter Table Not Skewed",
            Self::AlterTableNotStoredAsDirectories => "Alter Table Not Stored As Directories",
            Self::AlterTableSetSkewedLocation => "Alter Table Set Skewed Location",
            Self::AlterTableAddPartition => "Alter Table Add Partition",
            Self::AlterTableRenamePartition => "Alter Table Rename Partition",
            Self::AlterTableExchangePartition => "Alter Table Exchange Partition",
            Self::AlterTableRecoverPartitions => "Alter Table Recover Partition",
            Self::AlterTableDropPartition => "Alter Table Drop Partition",
            Self::AlterTableArchivePartition => "Alter Table Archive/Unarchive Partition",
            Self::AlterTablePartitionFileFormat => "Alter Table Partition File Format",
            Self::AlterTablePartitionLocation => "Alter Table Partition Location",
            Self::AlterTablePartitionTouch => "Alter Table Touch Partition",
            Self::AlterTablePartitionProtections => "Alter Table Partition Protections",
            Self::AlterTablePartitionCompact => "Alter Table Partition Compact",
            Self::AlterTablePartitionConcatenate => "Alter Table Partition Concatenate",
            Self::AlterTablePartitionUpdateColumns => "Alter Table Partition Update Columns",
            Self::AlterTableChangeColumn => "Alter Table Change Column",
            Self::ShowTableExtended => "Show Table Extended",
            Self::ShowTableProperties => "Show Table Properties",
            Self::TruncateTable => "Truncate Table",
            Self::MsckRepairTable => "Msck Repair Table",
            Self::CreateMaterializedView => "Create Materialized View",
            Self::DropMaterializedView => "Drop Materialized View",
            Self::AlterMaterializedView => "Alter Materialized View",
            Self::ShowMaterializedViews => "Show Materialized Views",
            Self::CreateFunction => "Create Function",
            Self::DropFunction => "Drop Function",
            Self::ReloadFunctions => "Reload Functions",
            Self::CreateIndex => "Create Index",
            Self::DropIndex => "Drop Index",
            Self::AlterIndex => "Alter Index",
            Self::ShowIndex => "Show Index",
            Self::ShowPartitions => "Show Partitions",
            Self::DescribePartition => "Describe Partition",
            Self::DescribeFunction => "Describe Function",
            Self::CreateMacro => "Create Macro",
            Self::DropMacro => "Drop Macro",
            Self::ShowRoleGrant => "Show Role Grant",
            Self::ShowPrincipals => "Show Principals",
            Self::ShowLocks => "Show Locks",
            Self::ShowConf => "Show Conf",
            Self::ShowTransactions => "Show Transactions",
            Self::ShowCompactions => "Show Compactions",
            Self::AbortTransactions => "Abort Transactions",
            Self::LoadData => "Load Data",
            Self::Merge => "Merge",
            Self::ExportData => "Export",
            Self::ImportData => "Import",
            Self::InsertFilesystem => "Insert Filesystem",
            Self::ResetSession => "Reset",
        };
        f.write_str(name)
    }
}

/// One top-level statement production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Use(Use),
    CreateSchema(CreateSchema),
    DropSchema(DropSchema),
    ShowSchemas(ShowSchemas),
    CreateView(CreateView),
    AlterView(AlterView),
    DropView(DropView),
    CreateTable(Box<CreateTable>),
    CreateTableAsSelect(Box<CreateTableAsSelect>),
    CreateTableLike(CreateTableLike),
    ShowTables(ShowTables),
    ShowCreateTable(ShowCreateTable),
    RenameTable(RenameTable),
    CommentTable(CommentTable),
    AddColumn(AddColumn),
    DropTable(DropTable),
    ShowColumns(ShowColumns),
    DescribeTable(DescribeTable),
    InsertInto(InsertInto),
    InsertOverwrite(InsertOverwrite),
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
    SetSession(SetSession),
    Query(Query),
    Unsupported {
        construct: UnsupportedConstruct,
        location: Location,
    },
}

//! System-catalog queries and fixed scripts for the T-SQL backend.

pub(crate) const FOREIGN_KEY_CONSTRAINTS_QUERY: &str = r"
select  name as constraint_name,
        object_name(parent_obj) as table_name,
        object_schema_name(parent_obj) as table_schema
from sysobjects where xtype = 'f'";

pub(crate) const PRIMARY_KEY_CONSTRAINTS_QUERY: &str = r"
select  name as constraint_name,
        object_name(parent_obj) as table_name,
        object_schema_name(parent_obj) as table_schema
from sysobjects where xtype = 'pk'";

pub(crate) const USER_TABLES_QUERY: &str = r"
select  name as table_name,
        object_schema_name(id) as table_schema
from sysobjects where xtype = 'u'";

pub(crate) const SCHEMAS_QUERY: &str = "SELECT name FROM sys.schemas";

/// Built-in and role schemas that must survive a purge.
pub(crate) const BUILTIN_SCHEMAS: &[&str] = &[
    "dbo",
    "guest",
    "INFORMATION_SCHEMA",
    "sys",
    "db_owner",
    "db_accessadmin",
    "db_securityadmin",
    "db_ddladmin",
    "db_backupoperator",
    "db_datareader",
    "db_datawriter",
    "db_denydatareader",
    "db_denydatawriter",
];

pub(crate) const DISABLE_KEY_CONSTRAINTS_SQL: &str =
    "EXEC sp_msforeachtable 'ALTER TABLE ? NOCHECK CONSTRAINT all';";

pub(crate) const ENABLE_KEY_CONSTRAINTS_SQL: &str =
    "EXEC sp_msforeachtable 'ALTER TABLE ? WITH CHECK CHECK CONSTRAINT all';";

pub(crate) const DELETE_ALL_ROWS_SQL: &str = "EXEC sp_msforeachtable 'delete ?';";

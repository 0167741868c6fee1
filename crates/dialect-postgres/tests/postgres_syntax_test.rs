use seedql_core::{ColumnSpec, DdlGenerator, Dialect, TableSpec};
use seedql_dialect_postgres::PostgresDialect;

#[test]
fn create_table_end_to_end() {
    let dialect = PostgresDialect;
    let generator = DdlGenerator::new(&dialect);
    let table = TableSpec::new("Users")
        .in_schema("public")
        .column(ColumnSpec::new("Id", "SERIAL").identity(true).primary_key(true))
        .column(ColumnSpec::new("Name", "nvarchar(50)"));

    let sql = generator.create_table(&table).expect("must synthesize");

    assert_eq!(
        sql,
        "CREATE TABLE public.Users(Id SERIAL NOT NULL, Name nvarchar(50) NULL, \
         CONSTRAINT PK_Users PRIMARY KEY (Id))"
    );
}

#[test]
fn identifiers_pass_through_unescaped() {
    let dialect = PostgresDialect;

    assert_eq!(dialect.escape("Users"), "Users");
}

#[test]
fn identity_is_expressed_through_the_type_literal() {
    let dialect = PostgresDialect;

    assert_eq!(dialect.identity_clause(), "");
    assert_eq!(dialect.id_column().sql_type(), "SERIAL");
}

#[test]
fn constraint_columns_carry_no_sort_direction() {
    let dialect = PostgresDialect;

    assert_eq!(dialect.constraint_column("Id"), "Id");
}

#[test]
fn default_schema_is_public() {
    let dialect = PostgresDialect;
    let generator = DdlGenerator::new(&dialect);
    let table = TableSpec::new("Users").column(ColumnSpec::new("Name", "text"));

    let sql = generator.create_table(&table).expect("must synthesize");

    assert!(sql.starts_with("CREATE TABLE public.Users("));
}

#[test]
fn rename_column_uses_alter_table() {
    let dialect = PostgresDialect;
    let generator = DdlGenerator::new(&dialect);

    assert_eq!(
        generator.rename_column("Users", "Name", "FullName"),
        "ALTER TABLE public.Users RENAME COLUMN Name TO FullName"
    );
}

#[test]
fn user_tables_query_reads_information_schema() {
    let dialect = PostgresDialect;

    let sql = dialect.user_tables_query();
    assert!(sql.contains("information_schema.tables"));
    assert!(sql.contains("table_schema = 'public'"));
}

#[test]
fn constraint_purge_phases_have_no_catalog_queries() {
    let dialect = PostgresDialect;

    assert!(dialect.foreign_key_catalog_query().is_none());
    assert!(dialect.primary_key_catalog_query().is_none());
    assert!(dialect.schema_catalog_query().is_none());
    assert!(dialect.builtin_schemas().is_empty());
}

#[test]
fn delete_all_scripts_are_unavailable() {
    let dialect = PostgresDialect;

    assert!(dialect.disable_constraints_sql().is_none());
    assert!(dialect.enable_constraints_sql().is_none());
    assert!(dialect.delete_all_rows_sql().is_none());
}

#[test]
fn guid_id_column_uses_uuid() {
    let dialect = PostgresDialect;

    let guid = dialect.guid_id_column();
    assert_eq!(guid.sql_type(), "uuid");
    assert!(guid.is_primary_key());
}

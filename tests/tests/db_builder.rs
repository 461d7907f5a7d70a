use rowmap::{impl_model, schema::Table, Db};
use tests::{
    models::{self, User},
    setup, MockDriver,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn schema_dir_and_explicit_tables_are_registered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("users.yaml"), models::USERS).unwrap();
    std::fs::write(dir.path().join("owners.yml"), models::OWNERS).unwrap();
    std::fs::write(dir.path().join("README.md"), "not a table").unwrap();

    let mut builder = Db::builder();
    builder
        .load_schema_dir(dir.path())
        .table(Table::from_yaml_str(models::WIDTHS).unwrap());

    let db = builder.build(MockDriver::new()).await.unwrap();

    let names = db
        .schema()
        .tables()
        .map(|table| table.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["owners", "users", "widths"]);
}

#[tokio::test]
async fn table_declared_twice_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("users.yaml"), models::USERS).unwrap();

    let mut builder = Db::builder();
    builder
        .load_schema_dir(dir.path())
        .table(Table::from_yaml_str(models::USERS).unwrap());

    let err = builder.build(MockDriver::new()).await.unwrap_err();
    assert!(err.is_configuration_conflict());
}

#[test]
fn zero_to_null_requires_nullable() {
    let err = Table::from_yaml_str(
        "table_name: t\npk: id\ncolumns:\n  - id: { type: int8 }\n  - n: { type: int4, zero_to_null: true }\n",
    )
    .unwrap_err();

    assert!(err.is_configuration_conflict());
}

#[tokio::test]
async fn mapping_is_resolved_once_per_repository() {
    let (db, _driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();

    let columns = repo
        .mapping()
        .columns()
        .map(|(column, field)| (column, field.name))
        .collect::<Vec<_>>();
    assert_eq!(
        columns,
        [
            ("id", "Id"),
            ("name", "FullName"),
            ("age", "Age"),
            ("score", "Score"),
            ("active", "Active"),
        ]
    );
    assert_eq!(repo.mapping().unresolved_columns(), ["owner_id", "legacy_code"]);
    assert_eq!(repo.mapping().unresolved_relations(), ["pets"]);
}

#[tokio::test]
async fn unknown_table_is_an_error() {
    let (db, _driver) = setup().await;

    let err = db.repository::<User>("people").unwrap_err();
    assert_eq!(err.to_string(), "table `people` is not registered");
}

#[derive(Debug, Default)]
struct Mismatched {
    id: i64,
    age: String,
}

impl_model!(Mismatched {
    "Id" => id: i64,
    "Age" => age: String,
});

#[tokio::test]
async fn field_type_must_fit_column_type() {
    let (db, _driver) = setup().await;

    let err = db.repository::<Mismatched>("users").unwrap_err();
    assert!(err.is_configuration_conflict());
    assert!(err.to_string().contains("column `users.age` is int4"), "{err}");
}

#[tokio::test]
async fn connect_rejects_unknown_scheme() {
    let err = Db::builder()
        .connect("mysql://localhost/app")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unsupported database; scheme=mysql; url=mysql://localhost/app"
    );
}

#[cfg(not(feature = "postgresql"))]
#[tokio::test]
async fn connect_postgresql_needs_feature() {
    let err = Db::builder()
        .connect("postgresql://localhost/app")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "`postgresql` feature not enabled");
}

use rowmap::{stmt::Type, BelongsTo, Value};
use rowmap_core::err;
use tests::{
    models::{Owner, User},
    setup,
};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn save_inserts_new_record_and_assigns_id() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([[Value::I64(42)]]);

    let mut user = User::new("ann", 30);
    let id = repo.save(&mut user).await.unwrap();

    assert_eq!(id, Value::I64(42));
    assert_eq!(user.id, 42);

    let mut log = driver.log();
    assert_eq!(log.inserts(), 1);
    assert_eq!(log.updates(), 0);

    let op = log.pop().unwrap();
    assert_eq!(op.ret, Some(vec![Type::I64]));
    assert_eq!(
        rowmap_sql::inline(&op.stmt),
        r#"INSERT INTO "users" ("name", "age", "score", "active", "owner_id") VALUES ('ann', 30, null, true, null) RETURNING id"#
    );
}

#[tokio::test]
async fn save_updates_existing_record() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_count(1);

    let mut user = User::new("ann", 31);
    user.id = 7;
    user.score = 12;

    let id = repo.save(&mut user).await.unwrap();

    assert_eq!(id, Value::I64(7));
    assert_eq!(user.id, 7);

    let mut log = driver.log();
    assert_eq!(log.inserts(), 0);
    assert_eq!(log.updates(), 1);

    let op = log.pop().unwrap();
    assert_eq!(op.ret, None);
    assert_eq!(
        rowmap_sql::inline(&op.stmt),
        r#"UPDATE "users" SET name = 'ann', age = 31, score = 12, active = true, owner_id = null WHERE id = 7"#
    );
}

#[tokio::test]
async fn insert_persists_owner_foreign_key() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([[Value::I64(1)]]);

    let mut user = User::new("ann", 30);
    user.owner = BelongsTo::new(Owner {
        id: 3,
        name: "bob".to_string(),
    });

    repo.save(&mut user).await.unwrap();

    let sql = driver.log().pop_sql().unwrap();
    assert!(sql.contains("VALUES ('ann', 30, null, true, 3)"), "{sql}");
}

#[tokio::test]
async fn update_matching_no_rows_is_not_an_error() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_count(0);

    let mut user = User::new("ann", 30);
    user.id = 404;

    assert_eq!(repo.save(&mut user).await.unwrap(), Value::I64(404));
    assert_eq!(driver.log().updates(), 1);
}

#[tokio::test]
async fn update_without_primary_key_is_rejected() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();

    let err = repo.update(&User::new("ann", 30)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "cannot update a `users` row without a primary key"
    );
    assert!(driver.log().is_empty());
}

#[tokio::test]
async fn insert_returning_no_row_is_an_error() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    let mut user = User::new("ann", 30);
    let err = repo.save(&mut user).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid result: insert into `users` returned no id"
    );
    assert_eq!(user.id, 0);
}

#[tokio::test]
async fn driver_errors_propagate() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_error(err!("connection reset"));

    let mut user = User::new("ann", 30);
    let err = repo.save(&mut user).await.unwrap_err();

    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(user.id, 0);
}

#[tokio::test]
async fn returned_id_is_converted_to_field_width() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([[Value::I32(9)]]);

    let mut user = User::new("ann", 30);
    repo.save(&mut user).await.unwrap();

    assert_eq!(user.id, 9);
}

use rowmap::{stmt::Type, Filters, InList, Value};
use tests::{models::User, setup};

use pretty_assertions::assert_eq;

const PROJECTION: &str = r#"SELECT "m0_"."id", "m0_"."name", "m0_"."age", "m0_"."score", "m0_"."active" FROM "users" AS "m0_""#;

fn row(id: i64, name: &str, age: i32, score: Option<i32>) -> Vec<Value> {
    vec![
        Value::I64(id),
        Value::from(name),
        Value::I32(age),
        Value::from(score),
        Value::Bool(true),
    ]
}

fn ann() -> User {
    User {
        id: 7,
        ..User::new("ann", 30)
    }
}

#[tokio::test]
async fn find_decodes_one_row() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([row(7, "ann", 30, None)]);

    assert_eq!(repo.find(7_i64).await.unwrap(), ann());

    let op = driver.log().pop().unwrap();
    assert_eq!(
        op.ret,
        Some(vec![Type::I64, Type::String, Type::I32, Type::I32, Type::Bool])
    );
    assert_eq!(
        rowmap_sql::inline(&op.stmt),
        r#"SELECT "id", "name", "age", "score", "active" FROM "users" WHERE id = 7"#
    );
}

#[tokio::test]
async fn find_without_row_is_not_found() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    let err = repo.find(7_i64).await.unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=users id=I64(7)");
}

#[tokio::test]
async fn find_one_by_limits_to_one_row() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([row(7, "ann", 30, None)]);

    let filters = Filters::new().eq("FullName", "ann");
    assert_eq!(repo.find_one_by(&filters, false).await.unwrap(), ann());

    assert_eq!(
        driver.log().pop_sql().unwrap(),
        format!(
            r#"{PROJECTION} WHERE "m0_"."name" = 'ann' ORDER BY "m0_"."id" DESC LIMIT 1 OFFSET 0"#
        )
    );
}

#[tokio::test]
async fn find_one_by_without_row_is_not_found() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    let err = repo
        .find_one_by(&Filters::new().eq("Age", 99_i64), true)
        .await
        .unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn find_by_without_rows_is_empty() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    let users = repo
        .find_by(&Filters::new().between("Age", 18_i64, 30_i64), true)
        .await
        .unwrap();
    assert!(users.is_empty());

    assert_eq!(
        driver.log().pop_sql().unwrap(),
        format!(
            r#"{PROJECTION} WHERE "m0_"."age" BETWEEN 18 AND 30 ORDER BY "m0_"."id" ASC LIMIT 999999 OFFSET 0"#
        )
    );
}

#[tokio::test]
async fn find_by_decodes_every_row_in_order() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([row(1, "ann", 30, Some(5)), row(2, "", 41, None)]);

    let filters = Filters::new().in_list("Score", InList::new([5_i64]).or_is_null());
    let users = repo.find_by(&filters, true).await.unwrap();

    assert_eq!(
        users,
        [
            User {
                id: 1,
                score: 5,
                ..User::new("ann", 30)
            },
            User {
                id: 2,
                ..User::new("", 41)
            },
        ]
    );

    let sql = driver.log().pop_sql().unwrap();
    assert!(
        sql.contains(r#"("m0_"."score" IN (5) OR "m0_"."score" IS NULL)"#),
        "{sql}"
    );
}

#[tokio::test]
async fn find_all_is_unfiltered_ascending() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([row(7, "ann", 30, None)]);

    assert_eq!(repo.find_all().await.unwrap(), [ann()]);
    assert_eq!(
        driver.log().pop_sql().unwrap(),
        format!(r#"{PROJECTION} ORDER BY "m0_"."id" ASC LIMIT 999999 OFFSET 0"#)
    );
}

#[tokio::test]
async fn find_page_passes_limit_and_offset() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    repo.find_page(&Filters::new(), 20, 40, false).await.unwrap();

    assert_eq!(
        driver.log().pop_sql().unwrap(),
        format!(r#"{PROJECTION} ORDER BY "m0_"."id" DESC LIMIT 20 OFFSET 40"#)
    );
}

#[tokio::test]
async fn dot_filter_joins_owner() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows(Vec::<Vec<Value>>::new());

    repo.find_by(&Filters::new().eq("Owner.Name", "bob"), true)
        .await
        .unwrap();

    assert_eq!(
        driver.log().pop_sql().unwrap(),
        format!(
            r#"{PROJECTION} INNER JOIN "owners" AS "owner" ON "owner"."id" = "m0_"."owner_id" WHERE "owner"."name" = 'bob' ORDER BY "m0_"."id" ASC LIMIT 999999 OFFSET 0"#
        )
    );
}

#[tokio::test]
async fn malformed_range_fails_before_executing() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();

    let filters = Filters::new().eq(
        "Age",
        Value::List(vec![Value::I64(1), Value::I64(2), Value::I64(3)]),
    );
    let err = repo.find_by(&filters, true).await.unwrap_err();

    assert!(err.is_malformed_filter());
    assert!(driver.log().is_empty());
}

#[tokio::test]
async fn undecodable_value_is_an_error() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([vec![
        Value::I64(7),
        Value::from("ann"),
        Value::from("thirty"),
        Value::Null,
        Value::Bool(true),
    ]]);

    let err = repo.find(7_i64).await.unwrap_err();
    assert!(err.is_type_conversion());
    assert!(
        err.to_string().starts_with("decoding field `Age`: "),
        "{err}"
    );
}

#[tokio::test]
async fn short_row_is_an_error() {
    let (db, driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();
    driver.push_rows([vec![Value::I64(7)]]);

    let err = repo.find(7_i64).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid result: expected 5 columns, got 1");
}

use rowmap::{
    stmt::{Statement, Type, ValueRecord},
    Filters, Value,
};
use tests::{
    models::{User, Widths},
    setup,
};

use pretty_assertions::assert_eq;

fn widths() -> Widths {
    Widths {
        id: 0,
        tiny: 200,
        small: -3,
        medium: 40_000,
        wide: 4_000_000_000,
        ratio: 0.5,
        label: Some("it's".to_string()),
        flag: true,
        balance: -70_000,
    }
}

#[tokio::test]
async fn scan_types_follow_field_widths() {
    let (db, driver) = setup().await;
    let repo = db.repository::<Widths>("widths").unwrap();
    driver.push_rows([[
        Value::I64(1),
        Value::I16(200),
        Value::I16(-3),
        Value::I32(40_000),
        Value::I64(4_000_000_000),
        Value::F64(0.5),
        Value::Null,
        Value::Bool(false),
        Value::I32(-70_000),
    ]]);

    let found = repo.find(1_i64).await.unwrap();
    assert_eq!(
        found,
        Widths {
            id: 1,
            label: None,
            flag: false,
            ..widths()
        }
    );

    let op = driver.log().pop().unwrap();
    assert_eq!(
        op.ret,
        Some(vec![
            Type::I64,
            Type::U8,
            Type::I16,
            Type::U16,
            Type::U32,
            Type::F64,
            Type::String,
            Type::Bool,
            Type::I64,
        ])
    );
}

#[tokio::test]
async fn value_wider_than_field_is_an_error() {
    let (db, driver) = setup().await;
    let repo = db.repository::<Widths>("widths").unwrap();
    driver.push_rows([[
        Value::I64(1),
        Value::I16(300),
        Value::I16(0),
        Value::I32(0),
        Value::I64(0),
        Value::F64(0.0),
        Value::Null,
        Value::Bool(false),
        Value::I32(0),
    ]]);

    let err = repo.find(1_i64).await.unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "decoding field `Tiny`: cannot convert I16(300) to u8"
    );
}

#[tokio::test]
async fn written_values_decode_to_the_same_record() {
    let (db, driver) = setup().await;
    let repo = db.repository::<Widths>("widths").unwrap();

    for label in [Some("it's".to_string()), None] {
        driver.push_rows([[Value::I64(5)]]);

        let mut record = Widths {
            label,
            ..widths()
        };
        repo.save(&mut record).await.unwrap();

        // Feed the inserted values back as the stored row
        let op = driver.log().pop().unwrap();
        let Statement::Insert(insert) = op.stmt else {
            panic!("expected an insert");
        };

        let mut row = vec![Value::I64(5)];
        row.extend(insert.values.exprs().map(|expr| expr.as_value().unwrap().clone()));

        // A plain `int` column is written at 32 bits
        assert_eq!(row.last(), Some(&Value::I32(-70_000)));
        driver.push_rows([row]);

        assert_eq!(repo.find(5_i64).await.unwrap(), record);
        driver.log().clear();
    }
}

#[tokio::test]
async fn explicit_columns_decode_in_request_order() {
    let (db, _driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();

    let decoder = repo.row_decoder(&["age", "name"]).unwrap();
    assert_eq!(decoder.types(), [Type::I32, Type::String]);

    let user = decoder
        .decode(ValueRecord::from_vec(vec![Value::I32(30), Value::from("ann")]))
        .unwrap();
    assert_eq!(user.age, 30);
    assert_eq!(user.full_name, "ann");

    let mut target = User {
        id: 9,
        ..User::new("bob", 50)
    };
    decoder
        .decode_into(
            ValueRecord::from_vec(vec![Value::I32(51), Value::from("bobby")]),
            &mut target,
        )
        .unwrap();

    // Columns outside the list keep their values
    assert_eq!(
        target,
        User {
            id: 9,
            full_name: "bobby".to_string(),
            age: 51,
            active: true,
            ..User::default()
        }
    );
}

#[tokio::test]
async fn column_without_field_is_unresolved() {
    let (db, _driver) = setup().await;
    let repo = db.repository::<User>("users").unwrap();

    let err = repo.row_decoder(&["age", "legacy_code"]).unwrap_err();
    assert!(err.is_unresolved_field());
    assert!(err.to_string().contains("`legacy_code`"), "{err}");

    // Unmapped columns never reach generated statements
    let stmt: Statement = repo
        .builder()
        .select_by(&Filters::new(), 0, 0, true)
        .unwrap()
        .into();
    let sql = rowmap_sql::inline(&stmt);
    assert!(!sql.contains("legacy_code"), "{sql}");
    assert!(!sql.contains("owner_id"), "{sql}");
}

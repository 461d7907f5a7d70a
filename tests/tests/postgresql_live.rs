//! Runs against a real server. Set `ROWMAP_TEST_POSTGRES_URL` and run with
//! `--features postgresql -- --ignored`.
#![cfg(feature = "postgresql")]

use rowmap::{schema::Table, Db, Filters, Value};
use tests::{init_tracing, models::Widths};

use pretty_assertions::assert_eq;

const TABLE: &str = r#"
table_name: rowmap_widths
pk: id
columns:
  - id: { type: int8 }
  - tiny: { type: int2 }
  - small: { type: int2 }
  - medium: { type: int4 }
  - wide: { type: int8 }
  - ratio: { type: float64 }
  - label: { type: string, nullable: true }
  - flag: { type: bool }
  - balance: { type: int }
"#;

const DDL: &str = "
DROP TABLE IF EXISTS rowmap_widths;
CREATE TABLE rowmap_widths (
    id BIGSERIAL PRIMARY KEY,
    tiny SMALLINT NOT NULL,
    small SMALLINT NOT NULL,
    medium INTEGER NOT NULL,
    wide BIGINT NOT NULL,
    ratio DOUBLE PRECISION NOT NULL,
    label TEXT,
    flag BOOLEAN NOT NULL,
    balance INTEGER NOT NULL
);
";

async fn reset(url: &str) {
    let (client, connection) = tokio_postgres::connect(url, tokio_postgres::NoTls)
        .await
        .unwrap();
    tokio::spawn(connection);
    client.batch_execute(DDL).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn crud_round_trip() {
    init_tracing();

    let url = std::env::var("ROWMAP_TEST_POSTGRES_URL")
        .expect("ROWMAP_TEST_POSTGRES_URL must be set");
    reset(&url).await;

    let mut builder = Db::builder();
    builder.table(Table::from_yaml_str(TABLE).unwrap());
    let db = builder.connect(&url).await.unwrap();
    let repo = db.repository::<Widths>("rowmap_widths").unwrap();

    let mut record = Widths {
        tiny: 200,
        small: -3,
        medium: 40_000,
        wide: 4_000_000_000,
        ratio: 0.5,
        label: Some("it's".to_string()),
        flag: true,
        balance: -70_000,
        ..Widths::default()
    };

    let id = repo.save(&mut record).await.unwrap();
    assert_eq!(id, Value::I64(record.id));
    assert_eq!(repo.find(record.id).await.unwrap(), record);

    record.label = None;
    record.tiny = 7;
    repo.save(&mut record).await.unwrap();

    let mut stale = Widths {
        id: record.id,
        ..Widths::default()
    };
    repo.refresh(&mut stale).await.unwrap();
    assert_eq!(stale, record);

    let found = repo
        .find_by(&Filters::new().between("Tiny", 1_i64, 10_i64), true)
        .await
        .unwrap();
    assert_eq!(found, [record.clone()]);

    assert!(repo
        .find_by(&Filters::new().eq("Label", "nope"), true)
        .await
        .unwrap()
        .is_empty());
    assert!(repo.find(record.id + 1).await.unwrap_err().is_record_not_found());
}

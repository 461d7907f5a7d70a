pub use exec_log::ExecLog;

mod mock_driver;
pub use mock_driver::{DriverOp, MockDriver};

pub mod models;

use rowmap::{schema::Table, Db};

/// Routes `tracing` output through the test harness so it shows up next to
/// failing tests. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rowmap=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A `Db` over the fixture tables, executing against a fresh scripted driver.
pub async fn setup() -> (Db, MockDriver) {
    init_tracing();

    let driver = MockDriver::new();

    let mut builder = Db::builder();
    for yaml in [models::USERS, models::OWNERS, models::WIDTHS] {
        builder.table(Table::from_yaml_str(yaml).unwrap());
    }

    let db = builder.build(driver.clone()).await.unwrap();
    (db, driver)
}

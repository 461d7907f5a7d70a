use super::Db;
use crate::{driver::Driver, Result};

use rowmap_core::{schema::Table, Schema};

use std::{path::PathBuf, sync::Arc};

#[derive(Debug, Default)]
pub struct Builder {
    /// Directories of `<table>.yaml` files, loaded in registration order
    dirs: Vec<PathBuf>,

    /// Tables registered directly
    tables: Vec<Table>,
}

impl Builder {
    /// Registers a table declaration.
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.tables.push(table);
        self
    }

    /// Registers every table declared in `dir`.
    pub fn load_schema_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.dirs.push(dir.into());
        self
    }

    /// Builds the table registry. A table declared twice is an error.
    pub fn build_schema(&self) -> Result<Schema> {
        let mut schema = Schema::new();

        for dir in &self.dirs {
            schema.extend_from_dir(dir)?;
        }

        for table in &self.tables {
            schema.register(table.clone())?;
        }

        Ok(schema)
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = self.build_schema()?;

        Ok(Db {
            driver: Arc::new(driver),
            schema: Arc::new(schema),
        })
    }

    /// Connects to the database at `url` and builds the handle.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let schema = self.build_schema()?;
        let driver = super::connect(url).await?;

        Ok(Db {
            driver: driver.into(),
            schema: Arc::new(schema),
        })
    }
}

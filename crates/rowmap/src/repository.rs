mod decode;
pub use decode::RowDecoder;

use rowmap_core::{
    driver::{operation::QuerySql, Driver, Rows},
    model::Field,
    schema::{FieldMapping, Table},
    stmt::{self, Filters, Value, ValueRecord},
    Error, Model, Result, Schema,
};
use rowmap_sql::Builder;

use std::{fmt, marker::PhantomData, sync::Arc};

/// Generic CRUD over one table for one record type.
///
/// Every call awaits exactly one driver operation. Obtained from
/// [`Db::repository`](crate::Db::repository).
pub struct Repository<M> {
    driver: Arc<dyn Driver>,
    schema: Arc<Schema>,
    table: Table,
    mapping: FieldMapping,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> Repository<M> {
    pub(crate) fn new(
        driver: Arc<dyn Driver>,
        schema: Arc<Schema>,
        table: Table,
        mapping: FieldMapping,
    ) -> Self {
        Self {
            driver,
            schema,
            table,
            mapping,
            _model: PhantomData,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Statement builder for this repository's table and record type.
    pub fn builder(&self) -> Builder<'_> {
        Builder::new(&self.schema, &self.table, &self.mapping)
    }

    /// Loads the row with primary key `id`.
    pub async fn find(&self, id: impl Into<Value>) -> Result<M> {
        let id = id.into();
        let stmt = self.builder().select_by_id(id.clone())?;

        self.query(stmt).await?.into_iter().next().ok_or_else(|| {
            Error::record_not_found(format!("table={} id={id:?}", self.table.name))
        })
    }

    /// Loads the first row matching `filters`, ordered by primary key.
    pub async fn find_one_by(&self, filters: &Filters, ascending: bool) -> Result<M> {
        let stmt = self.builder().select_by(filters, 1, 0, ascending)?;

        self.query(stmt).await?.into_iter().next().ok_or_else(|| {
            Error::record_not_found(format!(
                "table={} filters={:?}",
                self.table.name,
                filters.iter().map(|(key, _)| key).collect::<Vec<_>>()
            ))
        })
    }

    /// Loads every row matching `filters`. No match is an empty `Vec`.
    pub async fn find_by(&self, filters: &Filters, ascending: bool) -> Result<Vec<M>> {
        self.find_page(filters, 0, 0, ascending).await
    }

    pub async fn find_all(&self) -> Result<Vec<M>> {
        self.find_by(&Filters::new(), true).await
    }

    /// Loads one page of rows matching `filters`. A `limit` of `0` means
    /// unbounded.
    pub async fn find_page(
        &self,
        filters: &Filters,
        limit: u64,
        offset: u64,
        ascending: bool,
    ) -> Result<Vec<M>> {
        let stmt = self.builder().select_by(filters, limit, offset, ascending)?;
        self.query(stmt).await
    }

    /// Inserts `record` if its primary key is zero, updates it otherwise.
    ///
    /// Returns the primary key. After an insert the key the database assigned
    /// is written back into `record`, unless the key field was set meanwhile.
    pub async fn save(&self, record: &mut M) -> Result<Value> {
        let builder = self.builder();
        let id = builder.primary_key_value(record)?;

        if !id.is_zero() {
            self.update(record).await?;
            return Ok(id);
        }

        let pk = self.primary_key_field()?;
        let ty = pk.primitive_ty().into_iter().collect();
        let stmt = builder.insert(record)?;

        let mut rows = self.exec(QuerySql::query(stmt, ty)).await?.into_values()?;

        let id = match rows.first_mut().and_then(|row| row.fields.first_mut()) {
            Some(id) => std::mem::take(id),
            None => {
                return Err(Error::invalid_result(format!(
                    "insert into `{}` returned no id",
                    self.table.name
                )))
            }
        };

        if builder.primary_key_value(record)?.is_zero() {
            record.set(pk.name, id.clone())?;
        }

        Ok(id)
    }

    /// Writes every mapped column of an already persisted record.
    ///
    /// A primary key that matches no row is not an error; it is logged.
    pub async fn update(&self, record: &M) -> Result<()> {
        let builder = self.builder();
        let stmt = builder.update(record)?;

        let count = self.exec(QuerySql::execute(stmt)).await?.into_count()?;

        if count == 0 {
            tracing::warn!(
                table = %self.table.name,
                id = ?builder.primary_key_value(record)?,
                "update matched no rows"
            );
        }

        Ok(())
    }

    /// Re-reads `record` by primary key.
    ///
    /// The row is decoded onto a copy of `record`, which replaces it only once
    /// every column has been decoded. Attached relations are kept.
    pub async fn refresh(&self, record: &mut M) -> Result<()>
    where
        M: Clone,
    {
        let id = self.builder().primary_key_value(record)?;
        let stmt = self.builder().select_by_id(id.clone())?;

        let decoder = RowDecoder::<M>::new(&self.mapping);
        let row = self
            .fetch(stmt, &decoder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::record_not_found(format!("table={} id={id:?}", self.table.name))
            })?;

        decoder.decode_into(row, record)
    }

    /// Decoder for an explicit list of columns.
    ///
    /// Every column must map to a field of `M`.
    pub fn row_decoder(&self, columns: &[&str]) -> Result<RowDecoder<M>> {
        RowDecoder::for_columns(&self.mapping, columns)
    }

    async fn query(&self, stmt: stmt::Select) -> Result<Vec<M>> {
        let decoder = RowDecoder::<M>::new(&self.mapping);
        let rows = self.fetch(stmt, &decoder).await?;

        rows.into_iter().map(|row| decoder.decode(row)).collect()
    }

    async fn fetch(
        &self,
        stmt: stmt::Select,
        decoder: &RowDecoder<M>,
    ) -> Result<Vec<ValueRecord>> {
        self.exec(QuerySql::query(stmt, decoder.types()))
            .await?
            .into_values()
    }

    async fn exec(&self, op: QuerySql) -> Result<Rows> {
        tracing::debug!(sql = %rowmap_sql::inline(&op.stmt), "exec");

        let response = self.driver.exec(op.into()).await?;
        Ok(response.rows)
    }

    fn primary_key_field(&self) -> Result<&'static Field> {
        let pk = self.table.primary_key();
        self.mapping
            .column_field(pk)
            .ok_or_else(|| Error::unresolved_field("primary key", pk, M::type_name()))
    }
}

impl<M> Clone for Repository<M> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            schema: self.schema.clone(),
            table: self.table.clone(),
            mapping: self.mapping.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Repository<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("table", &self.table.name)
            .field("model", &self.mapping.model_name())
            .finish()
    }
}

pub mod db;
pub use db::Db;

pub mod repository;
pub use repository::{Repository, RowDecoder};

pub use rowmap_core::{
    driver, impl_model,
    model::{self, BelongsTo},
    schema,
    stmt::{self, FilterValue, Filters, InList, Value},
    Error, Model, Result, Schema,
};

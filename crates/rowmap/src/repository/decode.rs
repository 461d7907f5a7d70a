use rowmap_core::{
    model::Field,
    schema::FieldMapping,
    stmt::{Type, ValueRecord},
    Error, Model, Result,
};

use std::marker::PhantomData;

/// Decodes positional rows into records.
///
/// Each column lands in one primitive field. Values are converted to the
/// field's exact width; a value the field cannot hold is a type-conversion
/// error. A NULL read into a non-`Option` field leaves the field's zero value.
#[derive(Debug)]
pub struct RowDecoder<M> {
    fields: Vec<&'static Field>,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> RowDecoder<M> {
    /// Decoder for every resolved column, in schema order.
    pub fn new(mapping: &FieldMapping) -> Self {
        Self {
            fields: mapping.columns().map(|(_, field)| field).collect(),
            _model: PhantomData,
        }
    }

    /// Decoder for an explicit column list. A column with no field is an
    /// [`UnresolvedField`](Error::is_unresolved_field) error.
    pub fn for_columns(mapping: &FieldMapping, columns: &[&str]) -> Result<Self> {
        let fields = columns
            .iter()
            .map(|&column| {
                mapping.column_field(column).ok_or_else(|| {
                    Error::unresolved_field("column", column, M::type_name())
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            fields,
            _model: PhantomData,
        })
    }

    /// Scan type of each column: the type of the field it lands in.
    pub fn types(&self) -> Vec<Type> {
        self.fields
            .iter()
            .filter_map(|field| field.primitive_ty())
            .collect()
    }

    /// Decodes `row` into a fresh record.
    pub fn decode(&self, row: ValueRecord) -> Result<M> {
        self.load(row, M::default())
    }

    /// Decodes `row` onto a copy of `record` and swaps the copy in. Fields
    /// the decoder does not cover, relations included, keep their values. On
    /// error `record` is left untouched.
    pub fn decode_into(&self, row: ValueRecord, record: &mut M) -> Result<()>
    where
        M: Clone,
    {
        *record = self.load(row, record.clone())?;
        Ok(())
    }

    fn load(&self, row: ValueRecord, mut record: M) -> Result<M> {
        if row.len() != self.fields.len() {
            return Err(Error::invalid_result(format!(
                "expected {} columns, got {}",
                self.fields.len(),
                row.len()
            )));
        }

        for (field, value) in self.fields.iter().zip(row) {
            record
                .set(field.name, value)
                .map_err(|err| err.context(format!("decoding field `{}`", field.name)))?;
        }

        Ok(record)
    }
}

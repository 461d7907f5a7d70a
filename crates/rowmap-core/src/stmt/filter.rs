use super::Value;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A filter value supplied to `find_by` and friends.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// `column = value`
    ///
    /// A `Value::List` here is read as a range and must hold exactly two
    /// bounds.
    Eq(Value),

    /// `column BETWEEN low AND high`
    Between(Value, Value),

    /// `column IN (...)`, optionally `OR column IS NULL`
    In(InList),
}

/// Set-membership filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InList {
    pub values: Vec<Value>,

    /// Also match rows where the column is NULL
    pub or_is_null: bool,
}

impl FilterValue {
    /// Builds a range filter from a dynamically sized list of bounds.
    pub fn range(bounds: Vec<Value>) -> Result<Self> {
        match <[Value; 2]>::try_from(bounds) {
            Ok([low, high]) => Ok(Self::Between(low, high)),
            Err(bounds) => Err(Error::malformed_filter(format!(
                "range needs exactly 2 values, got {}",
                bounds.len()
            ))),
        }
    }

    /// Normalizes the filter into its canonical shape, turning list-valued
    /// equality into a range.
    pub fn normalize(self) -> Result<Self> {
        match self {
            Self::Eq(Value::List(bounds)) => Self::range(bounds),
            other => Ok(other),
        }
    }
}

impl InList {
    pub fn new(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            or_is_null: false,
        }
    }

    pub fn or_is_null(mut self) -> Self {
        self.or_is_null = true;
        self
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        Self::Eq(value)
    }
}

impl From<InList> for FilterValue {
    fn from(value: InList) -> Self {
        Self::In(value)
    }
}

/// Filter entries keyed by field name (`"Age"`) or relation path
/// (`"Owner.Name"`). Entries render in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    entries: IndexMap<String, FilterValue>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn eq(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, FilterValue::Eq(value.into()));
        self
    }

    pub fn between(
        mut self,
        key: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.insert(key, FilterValue::Between(low.into(), high.into()));
        self
    }

    pub fn in_list(mut self, key: impl Into<String>, list: InList) -> Self {
        self.insert(key, FilterValue::In(list));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut filters = Filters::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}

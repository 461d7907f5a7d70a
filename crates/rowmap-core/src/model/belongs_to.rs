use crate::{stmt::Value, Model};

use std::fmt;

/// Owning pointer for a `one_to_one` or `many_to_one` relation field.
///
/// Only the related record's primary key is ever read from it; relation
/// fields are not populated when rows are decoded.
pub struct BelongsTo<T> {
    value: Option<Box<T>>,
}

impl<T: Model> BelongsTo<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_deref_mut()
    }

    pub fn set(&mut self, value: Option<T>) {
        self.value = value.map(Box::new);
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// The foreign key value for this relation: the related primary key, or
    /// `Null` when nothing is attached or the related record is unsaved.
    pub fn key_value(&self) -> Value {
        match self.value.as_ref().and_then(|value| value.primary_key_value()) {
            Some(key) if !key.is_zero() => key,
            _ => Value::Null,
        }
    }
}

impl<T> Default for BelongsTo<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: Clone> Clone for BelongsTo<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for BelongsTo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Model> From<T> for BelongsTo<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for BelongsTo<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.as_ref() {
            Some(t) => t.fmt(fmt),
            None => {
                write!(fmt, "<none>")?;
                Ok(())
            }
        }
    }
}

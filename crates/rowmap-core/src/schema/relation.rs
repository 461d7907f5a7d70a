use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A relation declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub name: String,

    pub kind: RelationKind,

    /// Name of the related table
    pub target: String,

    /// Column on the declaring table holding the related primary key
    pub foreign_key: Option<String>,

    pub cascade_persist: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    OneToOne,
    ManyToOne,

    /// Declared only. Has no read or write behavior.
    OneToMany,
}

impl Relation {
    pub fn new(name: impl Into<String>, kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            foreign_key: None,
            cascade_persist: None,
        }
    }

    pub fn foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    pub fn cascade_persist(mut self, cascade_persist: bool) -> Self {
        self.cascade_persist = Some(cascade_persist);
        self
    }

    /// The foreign key written by INSERT and UPDATE, if this relation owns
    /// one.
    pub fn owned_foreign_key(&self) -> Option<&str> {
        if self.kind.is_owning() {
            self.foreign_key.as_deref()
        } else {
            None
        }
    }

    /// The foreign key to join through when filtering on this relation.
    pub fn join_foreign_key(&self) -> Option<&str> {
        if self.kind.is_one_to_one() {
            self.foreign_key.as_deref()
        } else {
            None
        }
    }
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::ManyToOne => "many_to_one",
            Self::OneToMany => "one_to_many",
        }
    }

    pub fn is_one_to_one(self) -> bool {
        matches!(self, Self::OneToOne)
    }

    /// `one_to_one` and `many_to_one` relations hold the foreign key on the
    /// declaring table.
    pub fn is_owning(self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }
}

impl FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one_to_one" => Ok(Self::OneToOne),
            "many_to_one" => Ok(Self::ManyToOne),
            "one_to_many" => Ok(Self::OneToMany),
            _ => Err(Error::configuration_conflict(format!(
                "unknown relation type `{s}`"
            ))),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Record types and table declarations shared by the integration tests.

use rowmap::{impl_model, BelongsTo};

pub const USERS: &str = r#"
table_name: users
pk: id
columns:
  - id: { type: int8 }
  - name: { type: string, nullable: true, fieldName: FullName }
  - age: { type: int4 }
  - score: { type: int4, nullable: true, zero_to_null: true }
  - active: { type: bool }
  - owner_id: { type: int8, nullable: true }
  - legacy_code: { type: string, nullable: true }
relations:
  - owner: { type: one_to_one, target: owners, foreign_key: owner_id, cascade_persist: "true" }
  - pets: { type: one_to_many, target: pets }
"#;

pub const OWNERS: &str = r#"
table_name: owners
pk: id
columns:
  - id: { type: int8 }
  - name: { type: string }
"#;

pub const WIDTHS: &str = r#"
table_name: widths
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

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
}

impl_model!(Owner {
    "ID" => id: i64,
    "Name" => name: String,
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub age: i32,
    pub score: i32,
    pub active: bool,
    pub owner: BelongsTo<Owner>,
}

impl_model!(User {
    "Id" => id: i64,
    "FullName" => full_name: String,
    "Age" => age: i32,
    "Score" => score: i32,
    "Active" => active: bool,
} relations {
    "Owner" => owner,
});

impl User {
    pub fn new(full_name: &str, age: i32) -> User {
        User {
            full_name: full_name.to_string(),
            age,
            active: true,
            ..User::default()
        }
    }
}

/// One field of every supported width.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Widths {
    pub id: i64,
    pub tiny: u8,
    pub small: i16,
    pub medium: u16,
    pub wide: u32,
    pub ratio: f64,
    pub label: Option<String>,
    pub flag: bool,
    pub balance: i64,
}

impl_model!(Widths {
    "Id" => id: i64,
    "Tiny" => tiny: u8,
    "Small" => small: i16,
    "Medium" => medium: u16,
    "Wide" => wide: u32,
    "Ratio" => ratio: f64,
    "Label" => label: Option<String>,
    "Flag" => flag: bool,
    "Balance" => balance: i64,
});

use super::{Column, ColumnType, Relation, RelationKind, Table};
use crate::Result;

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk table declaration.
///
/// `columns` and `relations` are lists of single-entry maps so that YAML
/// preserves declaration order.
#[derive(Debug, Deserialize)]
struct TableDecl {
    table_name: String,
    pk: String,
    columns: Vec<IndexMap<String, ColumnDecl>>,
    #[serde(default)]
    relations: Vec<IndexMap<String, RelationDecl>>,
}

#[derive(Debug, Deserialize)]
struct ColumnDecl {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    zero_to_null: bool,
    #[serde(default, rename = "fieldName")]
    field_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelationDecl {
    #[serde(rename = "type")]
    kind: String,
    target: String,
    #[serde(default)]
    foreign_key: Option<String>,
    #[serde(default)]
    cascade_persist: Option<Flag>,
}

/// A boolean that may also be spelled as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    /// Strings other than `"true"/"1"/"false"/"0"` leave the flag unset.
    fn to_bool(&self) -> Option<bool> {
        match self {
            Flag::Bool(v) => Some(*v),
            Flag::Text(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

impl Table {
    /// Parses a table declaration from YAML.
    pub fn from_yaml_str(src: &str) -> Result<Table> {
        let decl: TableDecl = serde_yaml::from_str(src)?;
        decl.into_table()
    }

    /// Reads a table declaration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        Table::from_yaml_str(&src)
            .map_err(|err| err.context(format!("loading `{}`", path.display())))
    }

    /// Reads `<dir>/<name>.yaml`.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Table> {
        let dir = dir.as_ref();
        let path = ["yaml", "yml"]
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                crate::err!("no declaration for table `{name}` in `{}`", dir.display())
            })?;

        Table::from_yaml_file(path)
    }
}

impl TableDecl {
    fn into_table(self) -> Result<Table> {
        let mut builder = Table::builder(self.table_name, self.pk);

        for (name, decl) in self.columns.into_iter().flatten() {
            let ty: ColumnType = decl.ty.parse()?;
            let mut column = Column::new(name, ty)
                .nullable(decl.nullable)
                .zero_to_null(decl.zero_to_null);

            if let Some(field_name) = decl.field_name {
                column = column.field_name(field_name);
            }

            builder = builder.column(column);
        }

        for (name, decl) in self.relations.into_iter().flatten() {
            let kind: RelationKind = decl.kind.parse()?;
            let mut relation = Relation::new(name, kind, decl.target);

            if let Some(foreign_key) = decl.foreign_key {
                relation = relation.foreign_key(foreign_key);
            }

            if let Some(cascade_persist) = decl.cascade_persist.as_ref().and_then(Flag::to_bool) {
                relation = relation.cascade_persist(cascade_persist);
            }

            builder = builder.relation(relation);
        }

        builder.build()
    }
}

pub(super) fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = vec![];

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        if is_yaml && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

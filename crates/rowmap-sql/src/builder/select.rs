use super::{lower_value, Builder, DEFAULT_LIMIT, MAIN_TABLE_ALIAS};

use rowmap_core::{
    schema::{column_field_name, Column, Relation},
    stmt::{
        self, Direction, Expr, ExprColumn, FilterValue, Filters, Join, Limit, OrderBy, Source,
    },
    Error, Result,
};

use heck::ToSnakeCase;

impl Builder<'_> {
    /// `SELECT "c1", "c2", ... FROM "table" WHERE <pk> = <id>`
    pub fn select_by_id(&self, id: impl Into<stmt::Value>) -> Result<stmt::Select> {
        let projection = self
            .mapping
            .columns()
            .map(|(name, _)| ExprColumn::new(name))
            .collect();

        Ok(stmt::Select {
            projection,
            source: Source::table(&self.table.name),
            filter: Some(self.primary_key_filter(id.into())?),
            order_by: None,
            limit: None,
        })
    }

    /// Filtered, ordered and paginated select over the main table aliased as
    /// `"m0_"`.
    ///
    /// Plain filter keys name a field (`"Age"`) and are matched against the
    /// columns in schema order. Keys of the form `"Relation.Field"` join the
    /// relation's target table and filter on its `field` column. Rows are
    /// always ordered by the primary key. A `limit` of `0` means unbounded.
    pub fn select_by(
        &self,
        filters: &Filters,
        limit: u64,
        offset: u64,
        ascending: bool,
    ) -> Result<stmt::Select> {
        let mut source = Source::aliased(&self.table.name, MAIN_TABLE_ALIAS);
        let mut predicates = vec![];

        let projection = self
            .mapping
            .columns()
            .map(|(name, _)| ExprColumn::aliased(MAIN_TABLE_ALIAS, name))
            .collect();

        self.column_predicates(filters, &mut predicates)?;
        self.relation_predicates(filters, &mut source, &mut predicates)?;

        let filter = if predicates.is_empty() {
            None
        } else {
            Some(Expr::and_from_vec(predicates))
        };

        Ok(stmt::Select {
            projection,
            source,
            filter,
            order_by: Some(OrderBy {
                expr: ExprColumn::aliased(MAIN_TABLE_ALIAS, self.table.primary_key()).into(),
                direction: Direction::from_ascending(ascending),
            }),
            limit: Some(Limit {
                limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
                offset,
            }),
        })
    }

    fn column_predicates(&self, filters: &Filters, predicates: &mut Vec<Expr>) -> Result<()> {
        let mut matched = vec![false; filters.len()];

        for column in self.table.columns() {
            let Some(field) = self.mapping.column_field(&column.name) else {
                continue;
            };

            let convention = column_field_name(&column.name);

            for (i, (key, value)) in filters.iter().enumerate() {
                if key != convention && key != field.name {
                    continue;
                }

                matched[i] = true;
                let expr = ExprColumn::aliased(MAIN_TABLE_ALIAS, &column.name);
                predicates.push(predicate(expr, column, value)?);
            }
        }

        for ((key, _), matched) in filters.iter().zip(matched) {
            if !matched && !key.contains('.') {
                tracing::warn!(
                    table = %self.table.name,
                    filter = key,
                    "filter matches no column; skipping"
                );
            }
        }

        Ok(())
    }

    fn relation_predicates(
        &self,
        filters: &Filters,
        source: &mut Source,
        predicates: &mut Vec<Expr>,
    ) -> Result<()> {
        for (key, value) in filters.iter() {
            let Some((relation_key, field_key)) = key.split_once('.') else {
                continue;
            };

            let Some(relation) = self.filter_relation(relation_key) else {
                tracing::warn!(
                    table = %self.table.name,
                    filter = key,
                    "filter names no relation; skipping"
                );
                continue;
            };

            let Some(foreign_key) = relation.join_foreign_key() else {
                tracing::warn!(
                    table = %self.table.name,
                    filter = key,
                    relation = %relation.name,
                    kind = %relation.kind,
                    "only one_to_one relations with a foreign key can be joined; skipping"
                );
                continue;
            };

            let target = self.schema.expect_table(&relation.target)?;
            let column_name = field_key.to_snake_case();
            let column = target.column(&column_name).ok_or_else(|| {
                Error::malformed_filter(format!(
                    "`{key}`: table `{}` has no column `{column_name}`",
                    target.name
                ))
            })?;

            let alias = relation.name.as_str();

            if !source.has_join(alias) {
                source.joins.push(Join {
                    table: target.name.clone(),
                    alias: alias.to_string(),
                    constraint: Expr::eq(
                        ExprColumn::aliased(alias, target.primary_key()),
                        ExprColumn::aliased(MAIN_TABLE_ALIAS, foreign_key),
                    ),
                });
            }

            let expr = ExprColumn::aliased(alias, column_name.as_str());
            predicates.push(predicate(expr, column, value)?);
        }

        Ok(())
    }

    /// Finds the resolved relation a dot filter refers to, by field name or
    /// relation name.
    fn filter_relation(&self, key: &str) -> Option<&Relation> {
        self.mapping
            .relations()
            .find(|(name, field)| field.name == key || *name == key)
            .and_then(|(name, _)| self.table.relation(name))
    }
}

fn predicate(expr: ExprColumn, column: &Column, value: &FilterValue) -> Result<Expr> {
    Ok(match value.clone().normalize()? {
        FilterValue::Eq(value) => {
            let value = lower_value(column, value)?;

            if value.is_null() {
                Expr::is_null(expr)
            } else {
                Expr::eq(expr, value)
            }
        }
        FilterValue::Between(low, high) => Expr::between(
            expr,
            lower_value(column, low)?,
            lower_value(column, high)?,
        ),
        FilterValue::In(list) => {
            let values = list
                .values
                .into_iter()
                .map(|value| lower_value(column, value))
                .collect::<Result<Vec<_>>>()?;

            let in_list = Expr::in_list(expr.clone(), values);

            if list.or_is_null {
                Expr::or(in_list, Expr::is_null(expr))
            } else {
                in_list
            }
        }
    })
}

use super::{Comma, Ident, Params, ToSql};

use rowmap_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let returning = self
            .returning
            .as_ref()
            .map(|column| (" RETURNING ", column.as_str()));

        if self.values.is_empty() {
            fmt!(f, "INSERT INTO " table_name " DEFAULT VALUES" returning);
        } else {
            let columns = Comma(self.values.columns().map(Ident));
            let values = Comma(self.values.exprs());

            fmt!(
                f, "INSERT INTO " table_name " (" columns ") VALUES (" values ")" returning
            );
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = Ident(&self.table);
        let assignments = Comma(self.assignments.iter().map(|(column, expr)| (column, (" = ", expr))));

        fmt!(f, "UPDATE " table_name " SET " assignments " WHERE " self.filter);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let projection = Comma(self.projection.iter().map(Projected));
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));
        let limit = self.limit.as_ref().map(|limit| (" ", limit));

        fmt!(
            f,
            "SELECT " projection " FROM " self.source filter order_by limit
        );
    }
}

/// A column in a projection is always quoted, aliased or not.
struct Projected<'a>(&'a stmt::ExprColumn);

impl ToSql for Projected<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match &self.0.alias {
            Some(alias) => fmt!(f, Ident(alias) "." Ident(&self.0.name)),
            None => fmt!(f, Ident(&self.0.name)),
        }
    }
}

impl ToSql for &stmt::Source {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", Ident(alias)));

        fmt!(f, Ident(&self.table) alias);

        for join in &self.joins {
            fmt!(f, " " join);
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            "INNER JOIN " Ident(&self.table) " AS " Ident(&self.alias) " ON " self.constraint
        );
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "ORDER BY " self.expr " " self.direction);
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "LIMIT " self.limit " OFFSET " self.offset);
    }
}

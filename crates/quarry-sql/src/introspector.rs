use quarry_core::{
    async_trait,
    stmt::{Expr, Ident, OrderBy, Select, TableRef},
    Db, Error, Introspector, Result, TableMetadata,
};

/// Reads user table names out of `sqlite_master`.
///
/// With a schema set, the catalog of that schema is consulted and the
/// schema is reported back on every [`TableMetadata`]; otherwise the
/// default `main` catalog is used.
#[derive(Debug, Clone, Default)]
pub struct SqliteIntrospector {
    schema: Option<Ident>,
}

impl SqliteIntrospector {
    pub fn new() -> Self {
        Self { schema: None }
    }

    pub fn with_schema(schema: impl Into<Ident>) -> Self {
        Self {
            schema: Some(schema.into()),
        }
    }
}

#[async_trait]
impl Introspector for SqliteIntrospector {
    async fn table_metadata(&self, db: &Db) -> Result<Vec<TableMetadata>> {
        let catalog = match &self.schema {
            Some(schema) => TableRef::with_schema(schema.clone(), "sqlite_master"),
            None => TableRef::new("sqlite_master"),
        };

        let select = Select::new(catalog)
            .column("name")
            .filter(Expr::and(
                Expr::eq(Expr::column("type"), "table"),
                // Internal bookkeeping tables live under the sqlite_ prefix.
                Expr::not_like(Expr::column("name"), "sqlite_%"),
            ))
            .order_by(OrderBy::asc(Expr::column("name")));

        let result = db.execute(select).await?;
        let rows = result
            .rows
            .into_plain()
            .ok_or_else(|| Error::unsupported("sqlite_master rows were not materialized"))?;

        let mut tables = Vec::with_capacity(rows.len());
        for row in &rows {
            let name = row
                .get("name")
                .and_then(|value| value.as_text())
                .ok_or_else(|| Error::MissingColumn {
                    column: "name".into(),
                })?;

            tables.push(TableMetadata {
                name: name.to_owned(),
                schema: self.schema.as_ref().map(|s| s.as_str().to_owned()),
            });
        }

        Ok(tables)
    }
}

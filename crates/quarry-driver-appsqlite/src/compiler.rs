use quarry_core::{
    stmt::{CreateIndex, Statement},
    CompiledStatement, QueryCompiler, Result,
};
use quarry_sql::{Formatter, SqliteCompiler};

use std::sync::Arc;

/// Statement renderer for the host's SQLite engine.
///
/// Identical to the stock renderer except for index creation: the engine
/// rejects a schema-qualified table after `on` and instead wants the
/// qualifier hoisted onto the index name, as in
/// `create index "main"."idx_a" on "table_a" (...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSqliteQueryCompiler;

impl SqliteCompiler for AppSqliteQueryCompiler {
    fn visit_create_index(&self, f: &mut Formatter<'_>, create: &CreateIndex) -> Result<()> {
        f.inline_literals = true;

        self.visit_create_index_prefix(f, create)?;
        match &create.table.schema {
            Some(schema) => {
                // Qualifier moves to the index name and must not be
                // repeated on the table.
                f.ident(schema);
                f.push(".");
                f.ident(&create.name);
                f.push(" on ");
                f.ident(&create.table.name);
            }
            None => {
                f.ident(&create.name);
                f.push(" on ");
                self.visit_table_ref(f, &create.table)?;
            }
        }
        self.visit_create_index_tail(f, create)?;

        f.inline_literals = false;
        Ok(())
    }
}

impl QueryCompiler for AppSqliteQueryCompiler {
    fn compile(&self, statement: Arc<Statement>) -> Result<CompiledStatement> {
        SqliteCompiler::compile(self, statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quarry_core::stmt::{Expr, Select};
    use quarry_sql::SqliteQueryCompiler;

    fn compile(statement: impl Into<Statement>) -> CompiledStatement {
        SqliteCompiler::compile(&AppSqliteQueryCompiler, Arc::new(statement.into())).unwrap()
    }

    #[test]
    fn schema_hoists_onto_the_index_name() {
        let compiled = compile(
            CreateIndex::new("idx_a", "main.table_a")
                .columns(["a", "b"])
                .filter(Expr::gt(Expr::column("a"), 0i64)),
        );

        assert_eq!(
            compiled.sql,
            r#"create index "main"."idx_a" on "table_a" ("a", "b") where "a" > 0"#
        );
        assert!(compiled.parameters.is_empty());
    }

    #[test]
    fn unqualified_table_renders_like_stock() {
        let create = CreateIndex::new("idx_a", "table_a").column("a");

        let ours = compile(create.clone());
        let stock = SqliteCompiler::compile(&SqliteQueryCompiler, Arc::new(create.into())).unwrap();

        assert_eq!(ours.sql, stock.sql);
        assert_eq!(ours.sql, r#"create index "idx_a" on "table_a" ("a")"#);
    }

    #[test]
    fn unique_and_if_not_exists_precede_the_hoisted_name() {
        let compiled = compile(
            CreateIndex::new("idx_a", "main.table_a")
                .unique()
                .if_not_exists()
                .column("a"),
        );

        assert_eq!(
            compiled.sql,
            r#"create unique index if not exists "main"."idx_a" on "table_a" ("a")"#
        );
    }

    #[test]
    fn other_statements_fall_through_unchanged() {
        let select = Select::new("main.table_a")
            .column("id")
            .filter(Expr::eq(Expr::column("value_a"), "sup"));

        let ours = compile(select.clone());
        let stock = SqliteCompiler::compile(&SqliteQueryCompiler, Arc::new(select.into())).unwrap();

        assert_eq!(ours.sql, stock.sql);
        assert_eq!(ours.parameters, stock.parameters);
    }
}

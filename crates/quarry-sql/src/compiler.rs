use crate::Formatter;

use quarry_core::{
    stmt::{
        BinaryOp, ColumnDef, ColumnRef, ColumnType, CreateIndex, CreateTable, Delete, Direction,
        DropTable, Expr, Insert, OrderBy, Raw, Select, Selection, Statement, TableRef, Update,
    },
    CompiledStatement, QueryCompiler, Result,
};

use std::sync::Arc;

/// The generic SQLite statement renderer.
///
/// Every method has a default body, so a dialect that diverges from stock
/// SQLite on a single statement kind overrides just that `visit_*` method
/// and falls through to the defaults for everything else, reusing the
/// sub-visitors (identifiers, table references, expressions) so quoting
/// rules stay in one place.
pub trait SqliteCompiler: Send + Sync + 'static {
    /// Render a statement into SQL text plus ordered bind parameters.
    fn compile(&self, statement: Arc<Statement>) -> Result<CompiledStatement> {
        let mut sql = String::new();
        let mut parameters = Vec::new();

        let mut f = Formatter::new(&mut sql, &mut parameters);
        self.visit_statement(&mut f, &statement)?;

        Ok(CompiledStatement {
            sql,
            parameters,
            statement,
        })
    }

    fn visit_statement(&self, f: &mut Formatter<'_>, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Select(select) => self.visit_select(f, select),
            Statement::Insert(insert) => self.visit_insert(f, insert),
            Statement::Update(update) => self.visit_update(f, update),
            Statement::Delete(delete) => self.visit_delete(f, delete),
            Statement::CreateTable(create) => self.visit_create_table(f, create),
            Statement::CreateIndex(create) => self.visit_create_index(f, create),
            Statement::DropTable(drop) => self.visit_drop_table(f, drop),
            Statement::Raw(raw) => self.visit_raw(f, raw),
        }
    }

    fn visit_select(&self, f: &mut Formatter<'_>, select: &Select) -> Result<()> {
        f.push("select ");

        if select.selections.is_empty() {
            f.push("*");
        } else {
            for (i, selection) in select.selections.iter().enumerate() {
                if i > 0 {
                    f.push(", ");
                }
                self.visit_selection(f, selection)?;
            }
        }

        f.push(" from ");
        self.visit_table_ref(f, &select.from)?;

        if let Some(filter) = &select.filter {
            f.push(" where ");
            self.visit_expr(f, filter)?;
        }

        if !select.order_by.is_empty() {
            f.push(" order by ");
            for (i, order_by) in select.order_by.iter().enumerate() {
                if i > 0 {
                    f.push(", ");
                }
                self.visit_order_by(f, order_by)?;
            }
        }

        if let Some(limit) = select.limit {
            f.push(" limit ");
            f.value(&(limit as i64).into());
        }

        Ok(())
    }

    fn visit_selection(&self, f: &mut Formatter<'_>, selection: &Selection) -> Result<()> {
        match selection {
            Selection::Column(column) => self.visit_column_ref(f, column),
            Selection::Aliased { expr, alias } => {
                self.visit_expr(f, expr)?;
                f.push(" as ");
                f.ident(alias);
                Ok(())
            }
            Selection::Expr(expr) => self.visit_expr(f, expr),
            Selection::All => {
                f.push("*");
                Ok(())
            }
        }
    }

    fn visit_insert(&self, f: &mut Formatter<'_>, insert: &Insert) -> Result<()> {
        f.push("insert into ");
        self.visit_table_ref(f, &insert.table)?;

        if insert.rows.is_empty() {
            f.push(" default values");
            return Ok(());
        }

        if !insert.columns.is_empty() {
            f.push(" (");
            for (i, column) in insert.columns.iter().enumerate() {
                if i > 0 {
                    f.push(", ");
                }
                f.ident(column);
            }
            f.push(")");
        }

        f.push(" values ");
        for (i, row) in insert.rows.iter().enumerate() {
            if i > 0 {
                f.push(", ");
            }
            f.push("(");
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.push(", ");
                }
                self.visit_expr(f, value)?;
            }
            f.push(")");
        }

        Ok(())
    }

    fn visit_update(&self, f: &mut Formatter<'_>, update: &Update) -> Result<()> {
        f.push("update ");
        self.visit_table_ref(f, &update.table)?;

        f.push(" set ");
        for (i, assignment) in update.assignments.iter().enumerate() {
            if i > 0 {
                f.push(", ");
            }
            f.ident(&assignment.column);
            f.push(" = ");
            self.visit_expr(f, &assignment.value)?;
        }

        if let Some(filter) = &update.filter {
            f.push(" where ");
            self.visit_expr(f, filter)?;
        }

        Ok(())
    }

    fn visit_delete(&self, f: &mut Formatter<'_>, delete: &Delete) -> Result<()> {
        f.push("delete from ");
        self.visit_table_ref(f, &delete.from)?;

        if let Some(filter) = &delete.filter {
            f.push(" where ");
            self.visit_expr(f, filter)?;
        }

        Ok(())
    }

    fn visit_create_table(&self, f: &mut Formatter<'_>, create: &CreateTable) -> Result<()> {
        f.push("create table ");
        if create.if_not_exists {
            f.push("if not exists ");
        }
        self.visit_table_ref(f, &create.name)?;

        f.push(" (");
        for (i, column) in create.columns.iter().enumerate() {
            if i > 0 {
                f.push(", ");
            }
            self.visit_column_def(f, column)?;
        }
        f.push(")");

        Ok(())
    }

    fn visit_column_def(&self, f: &mut Formatter<'_>, column: &ColumnDef) -> Result<()> {
        f.ident(&column.name);
        f.push(" ");
        f.push(match column.ty {
            ColumnType::Integer => "integer",
            ColumnType::Real => "real",
            ColumnType::Text => "text",
            ColumnType::Blob => "blob",
        });
        if column.primary_key {
            f.push(" primary key");
        }
        if column.auto_increment {
            f.push(" autoincrement");
        }
        if column.not_null {
            f.push(" not null");
        }
        Ok(())
    }

    /// Stock rendering: the schema, when present, qualifies the table in
    /// the `on` clause and the index name stays bare.
    fn visit_create_index(&self, f: &mut Formatter<'_>, create: &CreateIndex) -> Result<()> {
        f.inline_literals = true;

        self.visit_create_index_prefix(f, create)?;
        f.ident(&create.name);
        f.push(" on ");
        self.visit_table_ref(f, &create.table)?;
        self.visit_create_index_tail(f, create)?;

        f.inline_literals = false;
        Ok(())
    }

    /// `create [unique ]index [if not exists ]`
    fn visit_create_index_prefix(&self, f: &mut Formatter<'_>, create: &CreateIndex) -> Result<()> {
        f.push("create ");
        if create.unique {
            f.push("unique ");
        }
        f.push("index ");
        if create.if_not_exists {
            f.push("if not exists ");
        }
        Ok(())
    }

    /// The clauses after the `on` target: `using`, the column list,
    /// `nulls not distinct`, and the partial-index predicate.
    fn visit_create_index_tail(&self, f: &mut Formatter<'_>, create: &CreateIndex) -> Result<()> {
        if let Some(method) = &create.using {
            f.push(" using ");
            f.ident(method);
        }

        if !create.columns.is_empty() {
            f.push(" (");
            for (i, column) in create.columns.iter().enumerate() {
                if i > 0 {
                    f.push(", ");
                }
                f.ident(column);
            }
            f.push(")");
        }

        if create.nulls_not_distinct {
            f.push(" nulls not distinct");
        }

        if let Some(filter) = &create.filter {
            f.push(" where ");
            self.visit_expr(f, filter)?;
        }

        Ok(())
    }

    fn visit_drop_table(&self, f: &mut Formatter<'_>, drop: &DropTable) -> Result<()> {
        f.push("drop table ");
        if drop.if_exists {
            f.push("if exists ");
        }
        self.visit_table_ref(f, &drop.name)
    }

    fn visit_raw(&self, f: &mut Formatter<'_>, raw: &Raw) -> Result<()> {
        f.push(&raw.sql);
        f.params.extend(raw.parameters.iter().cloned());
        Ok(())
    }

    fn visit_expr(&self, f: &mut Formatter<'_>, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Column(column) => self.visit_column_ref(f, column),
            Expr::Value(value) => {
                f.value(value);
                Ok(())
            }
            Expr::BinaryOp(binary) => {
                self.visit_expr(f, &binary.lhs)?;
                f.push(" ");
                f.push(binary_op_sql(binary.op));
                f.push(" ");
                self.visit_expr(f, &binary.rhs)
            }
            Expr::Func(func) => {
                // Function names are keywords to the engine, not quoted
                // identifiers.
                f.push(func.name.as_str());
                f.push("(");
                for (i, arg) in func.args.iter().enumerate() {
                    if i > 0 {
                        f.push(", ");
                    }
                    self.visit_expr(f, arg)?;
                }
                f.push(")");
                Ok(())
            }
            Expr::Wildcard => {
                f.push("*");
                Ok(())
            }
        }
    }

    fn visit_order_by(&self, f: &mut Formatter<'_>, order_by: &OrderBy) -> Result<()> {
        self.visit_expr(f, &order_by.expr)?;
        match order_by.direction {
            Some(Direction::Asc) => f.push(" asc"),
            Some(Direction::Desc) => f.push(" desc"),
            None => {}
        }
        Ok(())
    }

    fn visit_column_ref(&self, f: &mut Formatter<'_>, column: &ColumnRef) -> Result<()> {
        if let Some(table) = &column.table {
            f.ident(table);
            f.push(".");
        }
        f.ident(&column.column);
        Ok(())
    }

    fn visit_table_ref(&self, f: &mut Formatter<'_>, table: &TableRef) -> Result<()> {
        if let Some(schema) = &table.schema {
            f.ident(schema);
            f.push(".");
        }
        f.ident(&table.name);
        Ok(())
    }
}

fn binary_op_sql(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => "=",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "and",
        BinaryOp::Or => "or",
        BinaryOp::Like => "like",
        BinaryOp::NotLike => "not like",
    }
}

/// The stock SQLite compiler: every rendering is the default one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteQueryCompiler;

impl SqliteCompiler for SqliteQueryCompiler {}

impl QueryCompiler for SqliteQueryCompiler {
    fn compile(&self, statement: Arc<Statement>) -> Result<CompiledStatement> {
        SqliteCompiler::compile(self, statement)
    }
}

mod column_ref;
pub use column_ref::ColumnRef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::{ColumnDef, ColumnType, CreateTable};

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::{BinaryOp, ExprBinaryOp};

mod expr_func;
pub use expr_func::ExprFunc;

mod ident;
pub use ident::Ident;

mod insert;
pub use insert::Insert;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod raw;
pub use raw::Raw;

mod select;
pub use select::{Select, Selection};

mod table_ref;
pub use table_ref::TableRef;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

/// A statement accepted by the execution pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    CreateTable(CreateTable),
    CreateIndex(CreateIndex),
    DropTable(DropTable),
    Raw(Raw),
}

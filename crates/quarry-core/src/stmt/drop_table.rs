use super::{Statement, TableRef};

/// A `drop table` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub name: TableRef,
    pub if_exists: bool,
}

impl DropTable {
    pub fn new(name: impl Into<TableRef>) -> Self {
        Self {
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}

use crate::Value;
use std::sync::Arc;

/// Column names of one result set, shared by reference across its rows.
pub type ColumnNames = Arc<[String]>;

/// Raw cells of one row in column order, `None` is a SQL NULL.
pub type RawRow = Box<[Option<Box<[u8]>>]>;

/// Name and declared type of one result column, read once per statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub type_name: String,
}

/// One result row with its cells coerced to typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRow {
    columns: ColumnNames,
    values: Box<[Value]>,
}

impl NamedRow {
    pub fn new(columns: ColumnNames, values: Box<[Value]>) -> Self {
        Self { columns, values }
    }
    pub fn names(&self) -> &[String] {
        &self.columns
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    /// Value of the column with the given name, `None` when it is not part of
    /// the result set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values[i])
    }
}

/// Metadata about the rows impacted by a modify operation.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RowsAffected {
    /// Total number of rows changed by the operation.
    pub rows_affected: u64,
    /// Identifier of the last inserted row, when the driver reports one.
    pub last_insert_id: Option<i64>,
}

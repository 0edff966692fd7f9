use crate::{ColumnInfo, RawRow, Result, RowsAffected, Value};

pub trait Driver {
    type Connection: Connection;

    /// Scheme prefix of the connection urls handled by this driver.
    const NAME: &'static str;
}

pub trait Connection: Sized {
    type Driver: Driver;
    type Prepared<'c>: Prepared
    where
        Self: 'c;

    /// Open a connection to the database identified by a `scheme://...` url.
    fn connect(url: &str) -> Result<Self>;
    /// Prepare one SQL statement for binding and execution.
    fn prepare(&self, sql: &str) -> Result<Self::Prepared<'_>>;
}

pub trait Prepared {
    type Cursor<'s>: Cursor
    where
        Self: 's;

    /// Bind the next positional parameter of the statement.
    fn bind(&mut self, value: Value) -> Result<&mut Self>;
    /// Run a statement that returns no rows and report what it touched.
    fn execute(&mut self) -> Result<RowsAffected>;
    /// Run the statement and step over its result rows.
    fn query(&mut self) -> Result<Self::Cursor<'_>>;
}

/// Row by row access to one result set. Dropping the cursor releases the
/// result resources no matter how many rows were consumed.
pub trait Cursor {
    /// Name and declared type of every result column.
    fn columns(&self) -> &[ColumnInfo];
    /// Raw cells of the next row, `None` once the rows are exhausted.
    fn try_next(&mut self) -> Result<Option<RawRow>>;
}

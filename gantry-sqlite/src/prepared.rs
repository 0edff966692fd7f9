use crate::SqliteCursor;
use gantry_core::{ColumnInfo, Context, Error, Prepared, Result, RowsAffected, Value};
use rusqlite::types::Null;

/// Prepared sqlite statement binding its parameters by position.
pub struct SqlitePrepared<'c> {
    connection: &'c rusqlite::Connection,
    statement: rusqlite::Statement<'c>,
    index: usize,
}

impl<'c> SqlitePrepared<'c> {
    pub(crate) fn new(
        connection: &'c rusqlite::Connection,
        statement: rusqlite::Statement<'c>,
    ) -> Self {
        Self {
            connection,
            statement,
            // Sqlite parameter indexes start at 1
            index: 1,
        }
    }
}

impl Prepared for SqlitePrepared<'_> {
    type Cursor<'s>
        = SqliteCursor<'s>
    where
        Self: 's;

    fn bind(&mut self, value: Value) -> Result<&mut Self> {
        let index = self.index;
        self.index += 1;
        let statement = &mut self.statement;
        match value {
            Value::Null
            | Value::Boolean(None)
            | Value::Int8(None)
            | Value::Int16(None)
            | Value::Int32(None)
            | Value::Int64(None)
            | Value::UInt8(None)
            | Value::UInt16(None)
            | Value::UInt32(None)
            | Value::UInt64(None)
            | Value::Float64(None)
            | Value::Varchar(None)
            | Value::Blob(None) => statement.raw_bind_parameter(index, Null),
            Value::Boolean(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Int8(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Int16(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Int32(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Int64(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::UInt8(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::UInt16(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::UInt32(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::UInt64(Some(v)) => {
                if v > i64::MAX as u64 {
                    return Err(Error::msg(format!(
                        "Cannot bind the u64 value `{v}` into a sqlite integer because it is out of bounds"
                    )));
                }
                statement.raw_bind_parameter(index, v as i64)
            }
            Value::Float64(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Varchar(Some(v)) => statement.raw_bind_parameter(index, v),
            Value::Blob(Some(v)) => statement.raw_bind_parameter(index, v.into_vec()),
        }
        .with_context(|| format!("While binding the parameter at index {index}"))?;
        Ok(self)
    }

    fn execute(&mut self) -> Result<RowsAffected> {
        let rows_affected = self
            .statement
            .raw_execute()
            .context("While executing the statement")? as u64;
        Ok(RowsAffected {
            rows_affected,
            last_insert_id: Some(self.connection.last_insert_rowid()),
        })
    }

    fn query(&mut self) -> Result<SqliteCursor<'_>> {
        let columns = self
            .statement
            .columns()
            .iter()
            .map(|column| ColumnInfo {
                name: column.name().to_string(),
                type_name: column.decl_type().unwrap_or_default().to_string(),
            })
            .collect();
        Ok(SqliteCursor::new(columns, self.statement.raw_query()))
    }
}

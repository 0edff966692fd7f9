use gantry_core::{ColumnInfo, Context, Cursor, RawRow, Result};
use rusqlite::types::ValueRef;

/// Cursor over the raw result rows of one sqlite statement.
///
/// Sqlite stores cells natively typed, they are rendered to their canonical
/// text here: integers through `itoa`, floats through `ryu`, text and blobs
/// pass through unchanged. Dropping the cursor resets the statement.
pub struct SqliteCursor<'s> {
    columns: Box<[ColumnInfo]>,
    rows: rusqlite::Rows<'s>,
}

impl<'s> SqliteCursor<'s> {
    pub(crate) fn new(columns: Box<[ColumnInfo]>, rows: rusqlite::Rows<'s>) -> Self {
        Self { columns, rows }
    }
}

impl Cursor for SqliteCursor<'_> {
    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    fn try_next(&mut self) -> Result<Option<RawRow>> {
        let Some(row) = self.rows.next().context("While stepping to the next row")? else {
            return Ok(None);
        };
        let columns = &self.columns;
        (0..columns.len())
            .map(|i| {
                let value = row.get_ref(i).with_context(|| {
                    format!("While reading the cell of the column `{}`", columns[i].name)
                })?;
                Ok(render_cell(value))
            })
            .collect::<Result<RawRow>>()
            .map(Some)
    }
}

fn render_cell(value: ValueRef<'_>) -> Option<Box<[u8]>> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(v) => Some(itoa::Buffer::new().format(v).as_bytes().into()),
        ValueRef::Real(v) => Some(ryu::Buffer::new().format(v).as_bytes().into()),
        ValueRef::Text(v) | ValueRef::Blob(v) => Some(v.into()),
    }
}

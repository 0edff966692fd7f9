use crate::{
    ColumnInfo, ColumnNames, Connection, Context, Cursor, Error, ErrorSink, NamedRow, Prepared,
    RawRow, Record, Records, Result, Value, coerce,
};
use std::any;

/// Entry point of the mapping layer, owns a driver connection and the error
/// sink failures are reported to.
///
/// Every operation comes in two flavors. The `try_` form returns a `Result`
/// and leaves reporting to the caller. The plain form never fails from the
/// caller's point of view: any error goes to the sink exactly once and the
/// zero value of the operation comes back, with the rows accumulated before
/// the failure preserved wherever the operation appends incrementally.
pub struct Client<C: Connection> {
    connection: C,
    sink: ErrorSink,
}

impl<C: Connection> Client<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            sink: ErrorSink::default(),
        }
    }

    /// Opens the connection from a url and wraps it with the default sink.
    pub fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(C::connect(url)?))
    }

    pub fn with_sink(connection: C, sink: ErrorSink) -> Self {
        Self { connection, sink }
    }

    /// Replaces the error sink used by the fail-soft operations.
    pub fn set_sink(&mut self, sink: ErrorSink) {
        self.sink = sink;
    }

    pub fn sink(&self) -> &ErrorSink {
        &self.sink
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    fn prepare_bound(&self, sql: &str, params: &[Value]) -> Result<C::Prepared<'_>> {
        let mut statement = self.connection.prepare(sql)?;
        for value in params {
            statement.bind(value.clone())?;
        }
        Ok(statement)
    }

    /// Runs the query and appends one [`NamedRow`] per result row.
    ///
    /// Rows already appended stay in `rows` when a later row cuts the read
    /// short with an error.
    pub fn try_query_into(
        &self,
        sql: &str,
        params: &[Value],
        rows: &mut Vec<NamedRow>,
    ) -> Result<()> {
        let mut statement = self.prepare_bound(sql, params)?;
        let mut cursor = statement.query()?;
        let names = cursor
            .columns()
            .iter()
            .map(|column| column.name.clone())
            .collect::<ColumnNames>();
        let types = cursor
            .columns()
            .iter()
            .map(|column| column.type_name.clone())
            .collect::<Box<[_]>>();
        while let Some(raw) = cursor.try_next()? {
            let values = raw
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    coerce(cell.as_deref(), &types[i]).with_context(|| {
                        format!("While coercing the value of the column `{}`", names[i])
                    })
                })
                .collect::<Result<_>>()?;
            rows.push(NamedRow::new(names.clone(), values));
        }
        Ok(())
    }

    /// Fail-soft [`Client::try_query_into`], returns the rows read up to the
    /// first failure.
    pub fn query(&self, sql: &str, params: &[Value]) -> Vec<NamedRow> {
        let mut rows = Vec::new();
        if let Err(error) = self.try_query_into(sql, params, &mut rows) {
            self.sink.handle(&error);
        }
        rows
    }

    /// Binds the first result row onto a fresh record.
    ///
    /// An empty result set is not an error, the default instance comes back
    /// untouched. Every result column must resolve to a settable field.
    pub fn try_get<R: Record>(&self, sql: &str, params: &[Value]) -> Result<R> {
        let mut statement = self.prepare_bound(sql, params)?;
        let mut cursor = statement.query()?;
        let setters = resolve_fields::<R>(cursor.columns())?;
        let mut record = R::default();
        if let Some(raw) = cursor.try_next()? {
            scan_row(&mut record, &setters, &raw)?;
        }
        Ok(record)
    }

    /// Fail-soft [`Client::try_get`], returns the default instance on error.
    pub fn get<R: Record>(&self, sql: &str, params: &[Value]) -> R {
        match self.try_get(sql, params) {
            Ok(record) => record,
            Err(error) => {
                self.sink.handle(&error);
                R::default()
            }
        }
    }

    /// Binds every result row onto a fresh record appended to `records`.
    ///
    /// Columns resolve to fields once per statement, not once per row.
    /// Records appended before a failing row stay in the destination.
    pub fn try_get_all<R: Record, D: Records<R>>(
        &self,
        sql: &str,
        params: &[Value],
        records: &mut D,
    ) -> Result<()> {
        let mut statement = self.prepare_bound(sql, params)?;
        let mut cursor = statement.query()?;
        let setters = resolve_fields::<R>(cursor.columns())?;
        while let Some(raw) = cursor.try_next()? {
            let mut record = R::default();
            scan_row(&mut record, &setters, &raw)?;
            records.append(record);
        }
        Ok(())
    }

    /// Fail-soft [`Client::try_get_all`].
    pub fn get_all<R: Record, D: Records<R>>(&self, sql: &str, params: &[Value], records: &mut D) {
        if let Err(error) = self.try_get_all(sql, params, records) {
            self.sink.handle(&error);
        }
    }

    /// Runs an INSERT and returns the identifier of the inserted row, `0`
    /// when the driver does not report one.
    pub fn try_add(&self, sql: &str, params: &[Value]) -> Result<i64> {
        let mut statement = self.prepare_bound(sql, params)?;
        let affected = statement.execute()?;
        Ok(affected.last_insert_id.unwrap_or(0))
    }

    /// Fail-soft [`Client::try_add`], returns `0` on error. An id of `0` is
    /// ambiguous between failure and a backend without insert ids, use
    /// [`Client::try_add`] to tell them apart.
    pub fn add(&self, sql: &str, params: &[Value]) -> i64 {
        match self.try_add(sql, params) {
            Ok(id) => id,
            Err(error) => {
                self.sink.handle(&error);
                0
            }
        }
    }

    /// Runs a statement and returns the number of rows it affected.
    pub fn try_exec(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut statement = self.prepare_bound(sql, params)?;
        let affected = statement.execute()?;
        Ok(affected.rows_affected)
    }

    /// Fail-soft [`Client::try_exec`], returns `0` on error. An affected
    /// count of `0` is ambiguous between failure and a no-op statement, use
    /// [`Client::try_exec`] to tell them apart.
    pub fn exec(&self, sql: &str, params: &[Value]) -> u64 {
        match self.try_exec(sql, params) {
            Ok(count) => count,
            Err(error) => {
                self.sink.handle(&error);
                0
            }
        }
    }
}

struct FieldSetter<R> {
    column: ColumnInfo,
    set: fn(&mut R, Value) -> Result<()>,
}

/// Resolves every result column to the settable field binding it, in column
/// order. Unmatched and non settable columns are hard errors.
fn resolve_fields<R: Record>(columns: &[ColumnInfo]) -> Result<Vec<FieldSetter<R>>> {
    columns
        .iter()
        .map(|column| {
            let Some(field) = R::field(&column.name) else {
                return Err(Error::msg(format!(
                    "Cannot find a field for the column `{}` in {}",
                    column.name,
                    any::type_name::<R>(),
                )));
            };
            let Some(set) = field.set else {
                return Err(Error::msg(format!(
                    "The field for the column `{}` in {} is not settable",
                    column.name,
                    any::type_name::<R>(),
                )));
            };
            Ok(FieldSetter {
                column: column.clone(),
                set,
            })
        })
        .collect()
}

fn scan_row<R: Record>(record: &mut R, setters: &[FieldSetter<R>], raw: &RawRow) -> Result<()> {
    for (setter, cell) in setters.iter().zip(raw.iter()) {
        let value = coerce(cell.as_deref(), &setter.column.type_name).with_context(|| {
            format!(
                "While coercing the value of the column `{}`",
                setter.column.name
            )
        })?;
        (setter.set)(record, value).with_context(|| {
            format!(
                "While setting the field for the column `{}`",
                setter.column.name
            )
        })?;
    }
    Ok(())
}

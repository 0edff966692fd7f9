use crate::{SqliteDriver, SqlitePrepared};
use gantry_core::{Connection, Context, Driver, Error, Result, truncate_long};

/// Connection to one sqlite database, either a file or an in-memory instance.
///
/// The url is `sqlite://` followed by the database path, an empty path and
/// `:memory:` both open an in-memory database.
pub struct SqliteConnection {
    pub(crate) connection: rusqlite::Connection,
}

impl Connection for SqliteConnection {
    type Driver = SqliteDriver;
    type Prepared<'c>
        = SqlitePrepared<'c>
    where
        Self: 'c;

    fn connect(url: &str) -> Result<Self> {
        let prefix = format!("{}://", <Self::Driver as Driver>::NAME);
        let Some(path) = url.strip_prefix(&prefix) else {
            return Err(Error::msg(format!(
                "Expected sqlite connection url to start with `{}`",
                &prefix
            )));
        };
        let connection = if path.is_empty() || path == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(path)
        }
        .with_context(|| format!("While opening the sqlite database `{url}`"))?;
        Ok(Self { connection })
    }

    fn prepare(&self, sql: &str) -> Result<SqlitePrepared<'_>> {
        let statement = match self.connection.prepare(sql) {
            Ok(statement) => statement,
            Err(e) => {
                let error = Error::new(e)
                    .context(format!("While preparing the query:\n{}", truncate_long!(sql)));
                log::error!("{}", error);
                return Err(error);
            }
        };
        Ok(SqlitePrepared::new(&self.connection, statement))
    }
}

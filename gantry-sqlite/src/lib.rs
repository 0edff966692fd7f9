mod connection;
mod cursor;
mod driver;
mod prepared;

pub use connection::*;
pub use cursor::*;
pub use driver::*;
pub use prepared::*;

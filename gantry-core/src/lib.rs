mod as_value;
mod client;
mod coerce;
mod driver;
mod record;
mod row;
mod sink;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use client::*;
pub use coerce::*;
pub use driver::*;
pub use record::*;
pub use row::*;
pub use sink::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;

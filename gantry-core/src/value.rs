use std::fmt::{self, Display};

/// Dynamically typed scalar travelling between the driver and record fields.
///
/// Every data variant wraps an `Option` where `None` is the typed null of
/// that variant, `Value::Null` is the untyped null coming from a NULL cell.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
}

impl Value {
    /// Whether the value carries no data, either the untyped or a typed null.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
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
                | Value::Blob(None)
        )
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(Some(v)) => f.write_str(if *v { "true" } else { "false" }),
            Value::Int8(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::Int16(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::Int32(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::Int64(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::UInt8(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::UInt16(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::UInt32(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::UInt64(Some(v)) => f.write_str(itoa::Buffer::new().format(*v)),
            Value::Float64(Some(v)) => f.write_str(ryu::Buffer::new().format(*v)),
            Value::Varchar(Some(v)) => f.write_str(v),
            Value::Blob(Some(v)) => f.write_str(&hex::encode(v)),
            _ => f.write_str("NULL"),
        }
    }
}

/// Builds the positional parameters slice expected by the client operations.
///
/// Accepts any expression convertible to [`Value`] through `AsValue`.
#[macro_export]
macro_rules! params {
    () => {
        &[] as &[$crate::Value]
    };
    ($($value:expr),+ $(,)?) => {
        &[$($crate::Value::from($value)),+]
    };
}

use crate::{AsValue, Context, Result, Value};
use std::str;

/// Parsing family selected from the column type name reported by the driver.
///
/// Names come in two flavors depending on the backend: SQL declarations like
/// `VARCHAR(40)` or `unsigned big int`, and native scan types like `int32` or
/// `sql.NullBool`. Classification is containment based so both map onto the
/// same families, unknown names land on `Text` and never fail on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float64,
    Text,
    Blob,
}

impl ScanKind {
    pub fn from_type_name(name: &str) -> Self {
        let name = name.split('(').next().unwrap_or(name);
        let name = name.trim().to_ascii_lowercase();
        let name = name.as_str();
        if name.contains("bool") {
            return ScanKind::Boolean;
        }
        if name.starts_with("uint") || name.starts_with("unsigned") {
            return match integer_width(name) {
                8 => ScanKind::UInt8,
                16 => ScanKind::UInt16,
                32 => ScanKind::UInt32,
                _ => ScanKind::UInt64,
            };
        }
        if name.contains("tinyint") {
            return ScanKind::Int8;
        }
        if name.contains("smallint") {
            return ScanKind::Int16;
        }
        if name.contains("int") {
            return match integer_width(name) {
                8 => ScanKind::Int8,
                16 => ScanKind::Int16,
                32 => ScanKind::Int32,
                _ => ScanKind::Int64,
            };
        }
        if ["real", "floa", "doub", "numeric", "decimal"]
            .iter()
            .any(|v| name.contains(v))
        {
            return ScanKind::Float64;
        }
        if ["blob", "binary", "bytea"].iter().any(|v| name.contains(v)) {
            return ScanKind::Blob;
        }
        ScanKind::Text
    }

    /// Turns the raw bytes of one cell into the typed [`Value`] of this family.
    pub fn coerce(&self, bytes: &[u8]) -> Result<Value> {
        let text = || str::from_utf8(bytes).context("The cell does not hold valid UTF-8 text");
        Ok(match self {
            ScanKind::Boolean => bool::parse(text()?)?.as_value(),
            ScanKind::Int8 => i8::parse(text()?)?.as_value(),
            ScanKind::Int16 => i16::parse(text()?)?.as_value(),
            ScanKind::Int32 => i32::parse(text()?)?.as_value(),
            ScanKind::Int64 => i64::parse(text()?)?.as_value(),
            ScanKind::UInt8 => u8::parse(text()?)?.as_value(),
            ScanKind::UInt16 => u16::parse(text()?)?.as_value(),
            ScanKind::UInt32 => u32::parse(text()?)?.as_value(),
            ScanKind::UInt64 => u64::parse(text()?)?.as_value(),
            ScanKind::Float64 => f64::parse(text()?)?.as_value(),
            ScanKind::Text => match str::from_utf8(bytes) {
                Ok(v) => Value::Varchar(Some(v.into())),
                Err(..) => Value::Blob(Some(bytes.into())),
            },
            ScanKind::Blob => Value::Blob(Some(bytes.into())),
        })
    }
}

/// Bit width suffix of an integer type name, `64` when there is none.
fn integer_width(name: &str) -> u32 {
    if name.ends_with("64") {
        64
    } else if name.ends_with("32") {
        32
    } else if name.ends_with("16") {
        16
    } else if name.ends_with('8') {
        8
    } else {
        64
    }
}

/// Coerces one raw cell into a typed [`Value`] according to the column type.
///
/// A missing cell is the NULL marker no matter the declared type. Numeric and
/// boolean kinds must parse their whole buffer, failures surface as errors.
/// Textual and binary kinds pass the bytes through unchanged.
pub fn coerce(cell: Option<&[u8]>, type_name: &str) -> Result<Value> {
    let Some(bytes) = cell else {
        return Ok(Value::Null);
    };
    ScanKind::from_type_name(type_name).coerce(bytes)
}

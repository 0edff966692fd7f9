use crate::{Error, Result, Value, consume_while, truncate_long};
use anyhow::Context;
use atoi::{FromRadix10Checked, FromRadix10SignedChecked};
use fast_float::parse_partial;
use std::any;

/// Conversion between native Rust scalars and the dynamically typed [`Value`]
/// representation that backs query parameters and row decoding.
///
/// # Parsing contract
/// - `parse` delegates to `extract` then verifies the input is exhausted,
///   guarding against accidentally accepting things like `123abc`.
/// - `extract` MUST update the input slice only on success.
/// - Errors include the offending fragment, prefer `any::type_name::<Self>()`
///   for uniform messages.
pub trait AsValue {
    /// The NULL-like variant of this type, used to represent absent data.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    ///
    /// Implementations accept the canonical variant for the type, alternate
    /// numeric widths when the payload fits after a range check, and fall
    /// back to parsing `Value::Varchar` content via [`AsValue::parse`].
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
    /// Parse a full string into `Self` delegating to [`AsValue::extract`].
    fn parse(input: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized,
    {
        let mut value = input.as_ref();
        let result = Self::extract(&mut value)?;
        if !value.is_empty() {
            return Err(Error::msg(format!(
                "Value `{}` parsed as {} without consuming the whole input (remaining: `{}`)",
                truncate_long!(input.as_ref()),
                any::type_name::<Self>(),
                truncate_long!(value),
            )));
        }
        Ok(result)
    }
    /// Attempt to parse a prefix from the provided string slice, updating the
    /// slice to point to the remaining portion on success.
    fn extract(value: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        Err(Error::msg(format!(
            "Cannot parse '{value}' as {}",
            any::type_name::<Self>()
        )))
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn integer_payload(value: &Value) -> Option<i128> {
    Some(match value {
        Value::Int8(Some(v)) => *v as i128,
        Value::Int16(Some(v)) => *v as i128,
        Value::Int32(Some(v)) => *v as i128,
        Value::Int64(Some(v)) => *v as i128,
        Value::UInt8(Some(v)) => *v as i128,
        Value::UInt16(Some(v)) => *v as i128,
        Value::UInt32(Some(v)) => *v as i128,
        Value::UInt64(Some(v)) => *v as i128,
        _ => return None,
    })
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path, $from_radix:ident) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v as _),
                    Value::Varchar(Some(ref v)) => Self::parse(v),
                    ref value => {
                        let Some(v) = integer_payload(value) else {
                            return Err(Error::msg(format!(
                                "Cannot convert {value:?} to {}",
                                any::type_name::<Self>(),
                            )));
                        };
                        if v < <$source>::MIN as i128 || v > <$source>::MAX as i128 {
                            return Err(Error::msg(format!(
                                "Value {v} is out of range for {}",
                                any::type_name::<Self>(),
                            )));
                        }
                        Ok(v as $source)
                    }
                }
            }
            fn extract(input: &mut &str) -> Result<Self> {
                let value = *input;
                let (result, consumed) = <$source>::$from_radix(value.as_bytes());
                if consumed == 0 {
                    return Err(Error::msg(format!(
                        "Cannot extract {} from `{}`",
                        any::type_name::<Self>(),
                        truncate_long!(value),
                    )));
                }
                let Some(result) = result else {
                    return Err(Error::msg(format!(
                        "Value `{}` is out of range for {}",
                        truncate_long!(value),
                        any::type_name::<Self>(),
                    )));
                };
                *input = &value[consumed..];
                Ok(result)
            }
        }
    };
}
impl_as_value!(i8, Value::Int8, from_radix_10_signed_checked);
impl_as_value!(i16, Value::Int16, from_radix_10_signed_checked);
impl_as_value!(i32, Value::Int32, from_radix_10_signed_checked);
impl_as_value!(i64, Value::Int64, from_radix_10_signed_checked);
impl_as_value!(isize, Value::Int64, from_radix_10_signed_checked);
impl_as_value!(u8, Value::UInt8, from_radix_10_checked);
impl_as_value!(u16, Value::UInt16, from_radix_10_checked);
impl_as_value!(u32, Value::UInt32, from_radix_10_checked);
impl_as_value!(u64, Value::UInt64, from_radix_10_checked);
impl_as_value!(usize, Value::UInt64, from_radix_10_checked);

macro_rules! extract_float {
    ($input:expr) => {{
        let value = *$input;
        let context = || {
            format!(
                "Cannot extract a floating point value from `{}`",
                truncate_long!(value)
            )
        };
        let (num, tail) = parse_partial(value).with_context(context)?;
        *$input = &value[tail..];
        Ok(num)
    }};
}

impl AsValue for f64 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float64(Some(v)) => Ok(v),
            Value::Varchar(Some(ref v)) => Self::parse(v),
            ref value => {
                let Some(v) = integer_payload(value) else {
                    return Err(Error::msg(format!("Cannot convert {value:?} to f64")));
                };
                Ok(v as f64)
            }
        }
    }
    fn extract(input: &mut &str) -> Result<Self> {
        extract_float!(input)
    }
}

impl AsValue for f32 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self as f64))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        f64::try_from_value(value).map(|v| v as f32)
    }
    fn extract(input: &mut &str) -> Result<Self> {
        extract_float!(input)
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path, $extract:expr $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self.into()))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v.into()),
                    $($pat_rest => $expr_rest,)*
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
            fn extract(value: &mut &str) -> Result<Self> {
                $extract(value)
            }
        }
    };
}
impl_as_value!(
    bool,
    Value::Boolean,
    |input: &mut &str| {
        let mut value = *input;
        let result = consume_while(&mut value, |v| v.is_alphanumeric() || *v == '_');
        let result = match result {
            x if x.eq_ignore_ascii_case("true") || x.eq_ignore_ascii_case("t") || x.eq("1") => true,
            x if x.eq_ignore_ascii_case("false") || x.eq_ignore_ascii_case("f") || x.eq("0") => {
                false
            }
            _ => return Err(Error::msg(format!("Cannot parse boolean from '{input}'"))),
        };
        *input = value;
        Ok(result)
    },
    Value::Varchar(Some(ref v)) => Self::parse(v),
    Value::Int8(Some(v)) => Ok(v != 0),
    Value::Int16(Some(v)) => Ok(v != 0),
    Value::Int32(Some(v)) => Ok(v != 0),
    Value::Int64(Some(v)) => Ok(v != 0),
    Value::UInt8(Some(v)) => Ok(v != 0),
    Value::UInt16(Some(v)) => Ok(v != 0),
    Value::UInt32(Some(v)) => Ok(v != 0),
    Value::UInt64(Some(v)) => Ok(v != 0),
);
impl_as_value!(String, Value::Varchar, |input: &mut &str| {
    let result = (*input).to_owned();
    *input = "";
    Ok(result)
});
impl_as_value!(
    Vec<u8>,
    Value::Blob,
    |input: &mut &str| {
        let mut value = *input;
        let hex = consume_while(&mut value, char::is_ascii_hexdigit);
        let result = hex::decode(hex).map_err(|e| {
            Error::new(e).context(format!(
                "While decoding `{}` as {}",
                truncate_long!(hex),
                any::type_name::<Self>(),
            ))
        })?;
        *input = value;
        Ok(result)
    },
    Value::Varchar(Some(v)) => Ok(v.into_bytes()),
);

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
    fn extract(input: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        let mut value = *input;
        let result = consume_while(&mut value, |v| v.is_alphanumeric() || *v == '_');
        if result.eq_ignore_ascii_case("null") {
            *input = value;
            return Ok(None);
        };
        T::extract(input).map(Some)
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Self::new(<T as AsValue>::try_from_value(value)?))
    }
    fn extract(value: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        T::extract(value).map(Self::new)
    }
}

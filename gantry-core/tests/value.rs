#[cfg(test)]
mod tests {
    use gantry_core::{AsValue, Value};

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float64(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn value_bool() {
        let var = true;
        let val: Value = var.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        let var: bool = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, true);
        assert_eq!(bool::try_from_value((1 as i8).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((8 as i16).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((0 as i32).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((0 as i64).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((0 as u8).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((1 as u16).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((1 as u32).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((2 as u64).into()).unwrap(), true);
        assert!(matches!(bool::try_from_value((0.5 as f64).into()), Err(..)));
    }

    #[test]
    fn bool_forms() {
        assert_eq!(bool::parse("true").unwrap(), true);
        assert_eq!(bool::parse("TRUE").unwrap(), true);
        assert_eq!(bool::parse("t").unwrap(), true);
        assert_eq!(bool::parse("1").unwrap(), true);
        assert_eq!(bool::parse("false").unwrap(), false);
        assert_eq!(bool::parse("F").unwrap(), false);
        assert_eq!(bool::parse("0").unwrap(), false);
        assert!(matches!(bool::parse("yes"), Err(..)));
        assert!(matches!(bool::parse(""), Err(..)));
    }

    #[test]
    fn value_i8() {
        let var = 127 as i8;
        let val: Value = var.into();
        assert_eq!(val, Value::Int8(Some(127)));
        assert_ne!(val, Value::Int8(Some(126)));
        let var: i8 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: i8 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 127);
        assert_eq!(i8::try_from_value((99 as u8).into()).unwrap(), 99);
        assert!(matches!(i8::try_from_value((300 as i16).into()), Err(..)));
        assert!(matches!(i8::try_from_value((0.1 as f64).into()), Err(..)));
    }

    #[test]
    fn value_i16() {
        let var = -32768 as i16;
        let val: Value = var.into();
        assert_eq!(val, Value::Int16(Some(-32768)));
        assert_ne!(val, Value::Int32(Some(-32768)));
        let var: i16 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: i16 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -32768 as i16);
        assert_eq!(i16::try_from_value((29 as i8).into()).unwrap(), 29);
        assert_eq!(i16::try_from_value((100 as u8).into()).unwrap(), 100);
        assert_eq!(i16::try_from_value((5000 as u16).into()).unwrap(), 5000);
        assert!(matches!(i16::try_from_value((40_000 as u16).into()), Err(..)));
    }

    #[test]
    fn value_i32() {
        let var = -2147483648 as i32;
        let val: Value = var.into();
        assert_eq!(val, Value::Int32(Some(-2147483648)));
        assert_ne!(val, Value::Null);
        let var: i32 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: i32 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -2147483648 as i32);
        assert_eq!(i32::try_from_value((-31 as i8).into()).unwrap(), -31);
        assert_eq!(i32::try_from_value((-1 as i16).into()).unwrap(), -1);
        assert_eq!(i32::try_from_value((77 as u8).into()).unwrap(), 77);
        assert_eq!(i32::try_from_value((15 as u16).into()).unwrap(), 15);
        assert_eq!(i32::try_from_value((1001 as u32).into()).unwrap(), 1001);
    }

    #[test]
    fn value_i64() {
        let var = 9223372036854775807 as i64;
        let val: Value = var.into();
        let var: i64 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: i64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 9223372036854775807 as i64);
        assert_eq!(i64::try_from_value((-31 as i8).into()).unwrap(), -31);
        assert_eq!(i64::try_from_value((-1234 as i16).into()).unwrap(), -1234);
        assert_eq!(i64::try_from_value((-1 as i32).into()).unwrap(), -1);
        assert_eq!(i64::try_from_value((77 as u8).into()).unwrap(), 77);
        assert_eq!(i64::try_from_value((5555 as u16).into()).unwrap(), 5555);
        assert_eq!(i64::try_from_value((123456 as u32).into()).unwrap(), 123456);
        assert_eq!(
            i64::try_from_value((12345678901234 as u64).into()).unwrap(),
            12345678901234
        );
        assert!(matches!(i64::try_from_value(u64::MAX.into()), Err(..)));
        assert!(matches!(i64::try_from_value(Value::Null), Err(..)));
    }

    #[test]
    fn value_u8() {
        let var = 255 as u8;
        let val: Value = var.into();
        let var: u8 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: u8 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 255);
        assert!(matches!(u8::try_from_value((-1 as i8).into()), Err(..)));
    }

    #[test]
    fn value_u16() {
        let var = 65535 as u16;
        let val: Value = var.into();
        let var: u16 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: u16 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 65535);
        assert_eq!(u16::try_from_value((123 as u8).into()).unwrap(), 123);
    }

    #[test]
    fn value_u32() {
        let var = 4_000_000_000 as u32;
        let val: Value = var.into();
        let var: u32 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: u32 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 4_000_000_000);
        assert_eq!(u32::try_from_value((12 as u8).into()).unwrap(), 12);
        assert_eq!(u32::try_from_value((65535 as u16).into()).unwrap(), 65535);
    }

    #[test]
    fn value_u64() {
        let var = 18_000_000_000_000_000_000 as u64;
        let val: Value = var.into();
        let var: u64 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: u64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 18_000_000_000_000_000_000);
        assert_eq!(u64::try_from_value((77 as u8).into()).unwrap(), 77);
        assert_eq!(u64::try_from_value((1234 as u16).into()).unwrap(), 1234);
        assert_eq!(u64::try_from_value((123456 as u32).into()).unwrap(), 123456);
        assert!(matches!(u64::try_from_value((-5 as i8).into()), Err(..)));
    }

    #[test]
    fn value_f32() {
        let var = 3.14f32;
        let val: Value = var.into();
        let var: f32 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: f32 = AsValue::try_from_value(val).unwrap();
        assert!((var - 3.14).abs() < f32::EPSILON);
        assert_eq!(f32::try_from_value((2.25 as f64).into()).unwrap(), 2.25);
    }

    #[test]
    fn value_f64() {
        let var = 2.7182818284f64;
        let val: Value = var.into();
        let var: f64 = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: f64 = AsValue::try_from_value(val).unwrap();
        assert!((var - 2.7182818284).abs() < f64::EPSILON);
        assert_eq!(f64::try_from_value((3.5 as f32).into()).unwrap(), 3.5);
        assert_eq!(f64::try_from_value((7 as i32).into()).unwrap(), 7.0);
        assert!(matches!(f64::try_from_value(Value::Varchar(None)), Err(..)));
    }

    #[test]
    fn value_string() {
        let var = "Hello World!";
        let val: Value = var.into();
        assert_eq!(val, Value::Varchar(Some("Hello World!".into())));
        assert_ne!(val, Value::Varchar(Some("Hello World.".into())));
        let var: String = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: String = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, "Hello World!");
        assert!(matches!(
            String::try_from_value(Value::Int64(Some(1))),
            Err(..)
        ));
    }

    #[test]
    fn value_blob() {
        let var = vec![1u8, 2, 3];
        let val: Value = var.into();
        assert_eq!(val, Value::Blob(Some(vec![1, 2, 3].into())));
        let var: Vec<u8> = AsValue::try_from_value(val).unwrap();
        let val = var.as_value();
        let var: Vec<u8> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, vec![1, 2, 3]);
        // Text payloads transfer their raw bytes, parsing decodes hex instead
        assert_eq!(
            Vec::<u8>::try_from_value(Value::Varchar(Some("ab".into()))).unwrap(),
            b"ab"
        );
        assert_eq!(Vec::<u8>::parse("ab01").unwrap(), vec![0xab, 0x01]);
    }

    #[test]
    fn value_option() {
        let val: Value = Some(42i64).into();
        assert_eq!(val, Value::Int64(Some(42)));
        let val: Value = None::<i64>.into();
        assert_eq!(val, Value::Int64(None));
        assert!(val.is_null());
        assert_eq!(
            Option::<i64>::try_from_value(Value::Int64(None)).unwrap(),
            None
        );
        assert_eq!(Option::<i64>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i64>::try_from_value(Value::Int64(Some(7))).unwrap(),
            Some(7)
        );
        assert_eq!(Option::<i64>::parse("null").unwrap(), None);
        assert_eq!(Option::<i64>::parse("NULL").unwrap(), None);
        assert_eq!(Option::<i64>::parse("7").unwrap(), Some(7));
    }

    #[test]
    fn value_box() {
        let val: Value = Box::new(9i64).into();
        assert_eq!(val, Value::Int64(Some(9)));
        let var: Box<i64> = AsValue::try_from_value(val).unwrap();
        assert_eq!(*var, 9);
    }

    #[test]
    fn extract_remainders() {
        let mut input = "42 rest";
        assert_eq!(i64::extract(&mut input).unwrap(), 42);
        assert_eq!(input, " rest");
        let mut input = "abc";
        assert!(i64::extract(&mut input).is_err());
        assert_eq!(input, "abc");
        let mut input = "2.5x";
        assert_eq!(f64::extract(&mut input).unwrap(), 2.5);
        assert_eq!(input, "x");
    }

    #[test]
    fn parse_whole_input() {
        assert_eq!(i64::parse("12").unwrap(), 12);
        assert!(matches!(i64::parse("12abc"), Err(..)));
        assert!(matches!(i64::parse(""), Err(..)));
        assert!(matches!(i8::parse("300"), Err(..)));
        assert!(matches!(f64::parse("1.5.2"), Err(..)));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int32(Some(42)).to_string(), "42");
        assert_eq!(Value::Int64(Some(-7)).to_string(), "-7");
        assert_eq!(Value::Float64(Some(1.5)).to_string(), "1.5");
        assert_eq!(Value::Boolean(Some(true)).to_string(), "true");
        assert_eq!(Value::Varchar(Some("hello".into())).to_string(), "hello");
        assert_eq!(
            Value::Blob(Some(vec![0xab, 0x01].into())).to_string(),
            "ab01"
        );
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int64(None).to_string(), "NULL");
    }
}

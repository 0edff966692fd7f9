#[cfg(test)]
mod tests {
    use gantry::{Value, params};

    #[test]
    fn literals() {
        let params: &[Value] = params![1i64, "hello", 2.5f64, true, Some(7i64), None::<i64>];
        assert_eq!(params.len(), 6);
        assert_eq!(params[0], Value::Int64(Some(1)));
        assert_eq!(params[1], Value::Varchar(Some("hello".into())));
        assert_eq!(params[2], Value::Float64(Some(2.5)));
        assert_eq!(params[3], Value::Boolean(Some(true)));
        assert_eq!(params[4], Value::Int64(Some(7)));
        assert_eq!(params[5], Value::Int64(None));
        assert!(params[5].is_null());
    }

    #[test]
    fn empty() {
        let params: &[Value] = params![];
        assert!(params.is_empty());
    }
}

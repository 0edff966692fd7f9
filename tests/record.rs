#[cfg(test)]
mod tests {
    use gantry::{Record, Value};

    #[derive(Record, Debug, Default)]
    struct Trade {
        trade_id: i64,
        symbol: String,
        #[record(name = "px")]
        price: f64,
        #[record(skip)]
        cached_total: f64,
        _quantity: i64,
    }

    #[test]
    fn field_table() {
        let fields = Trade::fields();
        assert_eq!(fields.len(), 5);
        let names = fields.iter().map(|field| field.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["trade_id", "symbol", "px", "cached_total", "quantity"]
        );
        assert!(fields[0].is_settable());
        assert!(fields[1].is_settable());
        assert!(fields[2].is_settable());
        assert!(!fields[3].is_settable());
        assert!(fields[4].is_settable());
    }

    #[test]
    fn field_lookup() {
        assert!(Trade::field("px").is_some());
        assert!(Trade::field("price").is_none());
        assert!(Trade::field("quantity").is_some());
        assert!(Trade::field("_quantity").is_none());
        assert!(Trade::field("missing").is_none());
        assert!(!Trade::field("cached_total").unwrap().is_settable());
    }

    #[test]
    fn setters() {
        let mut trade = Trade::default();
        let set = Trade::field("px").unwrap().set.unwrap();
        set(&mut trade, Value::Float64(Some(1.25))).unwrap();
        assert_eq!(trade.price, 1.25);
        let set = Trade::field("trade_id").unwrap().set.unwrap();
        set(&mut trade, Value::Varchar(Some("42".into()))).unwrap();
        assert_eq!(trade.trade_id, 42);
        assert!(set(&mut trade, Value::Null).is_err());
        assert_eq!(trade.trade_id, 42);
        let set = Trade::field("symbol").unwrap().set.unwrap();
        assert!(set(&mut trade, Value::Int64(Some(1))).is_err());
        assert_eq!(trade.symbol, "");
        let set = Trade::field("quantity").unwrap().set.unwrap();
        set(&mut trade, Value::Int64(Some(-3))).unwrap();
        assert_eq!(trade._quantity, -3);
        assert_eq!(trade.cached_total, 0.0);
    }

    #[test]
    fn optional_fields() {
        #[derive(Record, Debug, Default)]
        struct Sparse {
            tag: String,
            hits: Option<i64>,
        }
        let mut sparse = Sparse::default();
        let set = Sparse::field("hits").unwrap().set.unwrap();
        set(&mut sparse, Value::Int64(Some(7))).unwrap();
        assert_eq!(sparse.hits, Some(7));
        set(&mut sparse, Value::Null).unwrap();
        assert_eq!(sparse.hits, None);
        assert_eq!(sparse.tag, "");
    }
}

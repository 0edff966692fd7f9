use gantry::{Client, Connection, Value, params};
use indoc::indoc;
use std::ptr;

pub(crate) fn rows<C: Connection>(client: &Client<C>) {
    // Setup
    client
        .try_exec("DROP TABLE IF EXISTS measurements", &[])
        .expect("Failed to drop the measurements table");
    client
        .try_exec(
            indoc! {"
                CREATE TABLE measurements (
                    sensor VARCHAR(40) NOT NULL,
                    reading BIGINT,
                    calibrated BOOLEAN,
                    gain DOUBLE
                )
            "},
            &[],
        )
        .expect("Failed to create the measurements table");
    let insert =
        "INSERT INTO measurements (sensor, reading, calibrated, gain) VALUES (?1, ?2, ?3, ?4)";
    client
        .try_exec(insert, params!["alpha", 42i64, true, 1.5f64])
        .expect("Failed to insert alpha");
    client
        .try_exec(insert, params!["beta", -7i64, false, 0.25f64])
        .expect("Failed to insert beta");
    client
        .try_exec(insert, params!["gamma", None::<i64>, None::<bool>, None::<f64>])
        .expect("Failed to insert gamma");

    // Cells come back typed according to the declared column types
    let rows = client.query(
        "SELECT sensor, reading, calibrated, gain FROM measurements ORDER BY sensor",
        &[],
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0].names().iter().map(String::as_str).collect::<Vec<_>>(),
        ["sensor", "reading", "calibrated", "gain"],
    );
    assert_eq!(
        rows[0].get("sensor"),
        Some(&Value::Varchar(Some("alpha".into())))
    );
    assert_eq!(rows[0].get("reading"), Some(&Value::Int64(Some(42))));
    assert_eq!(rows[0].get("calibrated"), Some(&Value::Boolean(Some(true))));
    assert_eq!(rows[0].get("gain"), Some(&Value::Float64(Some(1.5))));
    assert_eq!(rows[1].get("reading"), Some(&Value::Int64(Some(-7))));
    assert_eq!(
        rows[1].get("calibrated"),
        Some(&Value::Boolean(Some(false)))
    );
    assert_eq!(rows[1].get("gain"), Some(&Value::Float64(Some(0.25))));

    // NULL cells are the explicit null marker, missing columns are None
    assert_eq!(rows[2].get("reading"), Some(&Value::Null));
    assert_eq!(rows[2].get("calibrated"), Some(&Value::Null));
    assert_eq!(rows[2].get("gain"), Some(&Value::Null));
    assert_eq!(rows[2].get("altitude"), None);

    // The name list is allocated once and shared across the result set
    assert!(ptr::eq(rows[0].names(), rows[1].names()));
    assert!(ptr::eq(rows[0].names(), rows[2].names()));

    // Empty result set
    let rows = client.query(
        "SELECT sensor FROM measurements WHERE sensor = ?1",
        params!["missing"],
    );
    assert!(rows.is_empty());
}

use crate::silent_logs;
use gantry::{Client, Connection, ErrorSink, NamedRow, Record, Value, params};
use indoc::indoc;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub(crate) fn faults<C: Connection>(client: &mut Client<C>) {
    #[derive(Record, Debug, Default)]
    struct Labeled {
        label: String,
    }
    #[derive(Record, Debug, Default)]
    struct SkippedAmount {
        label: String,
        #[record(skip)]
        amount: i64,
    }
    #[derive(Record, Debug, Default)]
    struct Reading {
        label: String,
        amount: i64,
    }

    // Count how many times the fail-soft methods report instead of returning
    let counter = Arc::new(AtomicUsize::new(0));
    let sink = {
        let counter = counter.clone();
        ErrorSink::new(move |error| {
            log::debug!("{error:#}");
            counter.fetch_add(1, Ordering::Relaxed);
        })
    };
    client.set_sink(sink);
    let errors = move || counter.load(Ordering::Relaxed);

    // Setup, `abc` cannot be stored as an integer so sqlite keeps it as text
    client
        .try_exec("DROP TABLE IF EXISTS readings", &[])
        .expect("Failed to drop the readings table");
    client
        .try_exec(
            indoc! {"
                CREATE TABLE readings (
                    label TEXT,
                    amount BIGINT
                )
            "},
            &[],
        )
        .expect("Failed to create the readings table");
    client
        .try_exec(
            "INSERT INTO readings (label, amount) VALUES ('bad', 'abc'), ('ok', 7)",
            &[],
        )
        .expect("Failed to insert the readings");
    let ascending = "SELECT label, amount FROM readings ORDER BY label ASC";
    let descending = "SELECT label, amount FROM readings ORDER BY label DESC";

    // The malformed cell comes first, nothing accumulates before the failure
    let rows = client.query(ascending, &[]);
    assert!(rows.is_empty());
    assert_eq!(errors(), 1);

    // Reversed, the sound row survives and only the rest is lost
    let rows = client.query(descending, &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("label"), Some(&Value::Varchar(Some("ok".into()))));
    assert_eq!(rows[0].get("amount"), Some(&Value::Int64(Some(7))));
    assert_eq!(errors(), 2);

    // The fallible flavor returns the error and leaves the sink alone
    let mut rows = Vec::<NamedRow>::new();
    silent_logs! {
        let result = client.try_query_into("SELECT * FROM absent_table", &[], &mut rows);
        assert!(result.is_err());
    }
    assert!(rows.is_empty());
    assert_eq!(errors(), 2);

    // A result column with no matching field fails the resolution
    let labeled: Labeled = client.get(ascending, &[]);
    assert_eq!(labeled.label, "");
    assert_eq!(errors(), 3);

    // So does a matching field that cannot be written
    let skipped: SkippedAmount = client.get(ascending, &[]);
    assert_eq!(skipped.label, "");
    assert_eq!(skipped.amount, 0);
    assert_eq!(errors(), 4);

    // Resolution failures in the fallible flavor keep the output untouched
    let mut all = Vec::<Labeled>::new();
    let result = client.try_get_all(ascending, &[], &mut all);
    assert!(result.is_err());
    assert!(all.is_empty());
    assert_eq!(errors(), 4);

    // Partial accumulation applies to records too
    let mut readings = Vec::<Reading>::new();
    client.get_all(descending, &[], &mut readings);
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].label, "ok");
    assert_eq!(readings[0].amount, 7);
    assert_eq!(errors(), 5);

    // A null cell cannot land on a field that has no null representation
    let result = client.try_get::<Reading>(
        "SELECT label, NULL AS amount FROM readings WHERE label = ?1",
        params!["ok"],
    );
    assert!(result.is_err());
    assert_eq!(errors(), 5);

    // Fail-soft mutations report and return zero
    silent_logs! {
        let id = client.add("INSERT INTO absent_table (label) VALUES (?1)", params!["x"]);
        assert_eq!(id, 0);
        assert_eq!(errors(), 6);
        let affected = client.exec("DELETE FROM absent_table", &[]);
        assert_eq!(affected, 0);
        assert_eq!(errors(), 7);
    }

    // And fail-soft record lookups fall back to the default instance
    silent_logs! {
        let labeled: Labeled = client.get("SELECT label FROM absent_table", &[]);
        assert_eq!(labeled.label, "");
        assert_eq!(errors(), 8);
    }

    client.set_sink(ErrorSink::default());
}

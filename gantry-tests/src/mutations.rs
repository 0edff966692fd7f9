use gantry::{Client, Connection, params};
use indoc::indoc;

pub(crate) fn mutations<C: Connection>(client: &Client<C>) {
    // Setup
    client
        .try_exec("DROP TABLE IF EXISTS inventory_items", &[])
        .expect("Failed to drop the inventory_items table");
    client
        .try_exec(
            indoc! {"
                CREATE TABLE inventory_items (
                    item_id INTEGER PRIMARY KEY,
                    label TEXT,
                    quantity BIGINT
                )
            "},
            &[],
        )
        .expect("Failed to create the inventory_items table");
    let insert = "INSERT INTO inventory_items (label, quantity) VALUES (?1, ?2)";

    // Inserts report the generated key
    let id = client
        .try_add(insert, params!["bolts", 40i64])
        .expect("Failed to insert the first item");
    assert_eq!(id, 1);
    let id = client.add(insert, params!["nuts", 200i64]);
    assert_eq!(id, 2);

    // Updates report the number of touched rows
    let affected = client
        .try_exec("UPDATE inventory_items SET quantity = quantity + 1", &[])
        .expect("Failed to update the items");
    assert_eq!(affected, 2);
    let affected = client.exec(
        "UPDATE inventory_items SET quantity = 0 WHERE label = ?1",
        params!["missing"],
    );
    assert_eq!(affected, 0);

    // Deletes as well
    let affected = client.exec(
        "DELETE FROM inventory_items WHERE item_id = ?1",
        params![1i64],
    );
    assert_eq!(affected, 1);
}

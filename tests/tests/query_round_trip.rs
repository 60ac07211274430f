use tests::connect;

use quarry_core::{
    stmt::{Expr, Insert, Select, Value},
    Error,
};

#[tokio::test]
async fn insert_then_select_by_value() {
    let test = connect().await;
    test.migrate().await;

    let first = test
        .db
        .execute(
            Insert::new(test.table("table_a"))
                .columns(["value_a"])
                .values(["hey"]),
        )
        .await
        .unwrap();
    assert_eq!(first.insert_id, Some(1));
    assert!(first.rows.is_empty());

    let second = test
        .db
        .execute(
            Insert::new(test.table("table_a"))
                .columns(["value_a"])
                .values(["sup"]),
        )
        .await
        .unwrap();
    assert_eq!(second.insert_id, Some(2));

    let result = test
        .db
        .execute(
            Select::new(test.table("table_a"))
                .columns(["id", "value_a"])
                .filter(Expr::eq(Expr::column("value_a"), "sup")),
        )
        .await
        .unwrap();

    let rows = result.rows.into_plain().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns(), ["id", "value_a"]);
    assert_eq!(rows[0].get("id"), Some(&Value::Integer(2)));
    assert_eq!(rows[0].get("value_a"), Some(&Value::Text("sup".into())));
}

#[tokio::test]
async fn multi_row_insert_reports_the_last_rowid() {
    let test = connect().await;
    test.migrate().await;

    let result = test
        .db
        .execute(
            Insert::new(test.table("table_a"))
                .columns(["value_a"])
                .values(["hey"])
                .values(["sup"]),
        )
        .await
        .unwrap();
    assert_eq!(result.insert_id, Some(2));
}

#[tokio::test]
async fn failed_statements_release_the_connection() {
    let test = connect().await;

    let result = test.db.execute(Select::new(test.table("no_such_table"))).await;
    assert!(matches!(result, Err(Error::Host(_))));

    // The connection must be free again for ordinary work.
    test.migrate().await;
}

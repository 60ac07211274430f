use tests::connect;

use quarry_core::stmt::{Expr, Insert, Select, Value};

use std::sync::Arc;

use tokio::task::yield_now;

async fn count_rows(test: &tests::TestDb) -> i64 {
    let result = test
        .db
        .execute(Select::new(test.table("table_a")).select_as(Expr::count_star(), "n"))
        .await
        .unwrap();

    let rows = result.rows.into_plain().unwrap();
    rows[0].get("n").and_then(Value::as_integer).unwrap()
}

#[tokio::test]
async fn rollback_discards_the_insert() {
    let test = connect().await;
    test.migrate().await;

    let tx = test.db.begin().await.unwrap();
    tx.execute(
        Insert::new(test.table("table_a"))
            .columns(["value_a"])
            .values(["hey"]),
    )
    .await
    .unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(count_rows(&test).await, 0);
}

#[tokio::test]
async fn commit_keeps_the_insert() {
    let test = connect().await;
    test.migrate().await;

    let tx = test.db.begin().await.unwrap();
    tx.execute(
        Insert::new(test.table("table_a"))
            .columns(["value_a"])
            .values(["hey"]),
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(count_rows(&test).await, 1);
}

#[tokio::test]
async fn open_bracket_blocks_other_statements() {
    let test = Arc::new(connect().await);
    test.migrate().await;

    let tx = test.db.begin().await.unwrap();
    tx.execute(
        Insert::new(test.table("table_a"))
            .columns(["value_a"])
            .values(["hey"]),
    )
    .await
    .unwrap();

    let outside = {
        let test = test.clone();
        tokio::spawn(async move { count_rows(&test).await })
    };

    // The bracket holds the sole connection; the outside query must wait.
    for _ in 0..10 {
        yield_now().await;
    }
    assert!(!outside.is_finished());

    tx.commit().await.unwrap();
    assert_eq!(outside.await.unwrap(), 1);
}

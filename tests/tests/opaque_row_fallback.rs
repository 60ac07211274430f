use tests::connect;

use quarry_core::stmt::{Expr, Insert, Select, Value};

async fn seed(test: &tests::TestDb) {
    test.migrate().await;
    test.db
        .execute(
            Insert::new(test.table("table_a"))
                .columns(["value_a"])
                .values(["hey"])
                .values(["sup"]),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn star_select_degrades_to_raw_rows() {
    let test = connect().await;
    seed(&test).await;

    let result = test
        .db
        .execute(
            Select::new(test.table("table_a"))
                .filter(Expr::eq(Expr::column("value_a"), "sup")),
        )
        .await
        .unwrap();

    // No projection list means no derivable column set, but named access
    // on the raw rows still works.
    let rows = result.rows.as_opaque().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("id"), Some(&Value::Integer(2)));
    assert_eq!(rows[0].get("value_a"), Some(&Value::Text("sup".into())));
}

#[tokio::test]
async fn unaliased_aggregate_degrades_to_raw_rows() {
    let test = connect().await;
    seed(&test).await;

    let result = test
        .db
        .execute(Select::new(test.table("table_a")).select_expr(Expr::count_star()))
        .await
        .unwrap();

    let rows = result.rows.as_opaque().unwrap();
    assert_eq!(rows.len(), 1);
    // The engine names the result column after the expression text.
    assert_eq!(rows[0].get("count(*)"), Some(&Value::Integer(2)));
}

#[tokio::test]
async fn aliased_aggregate_stays_plain() {
    let test = connect().await;
    seed(&test).await;

    let result = test
        .db
        .execute(Select::new(test.table("table_a")).select_as(Expr::count_star(), "n"))
        .await
        .unwrap();

    let rows = result.rows.into_plain().unwrap();
    assert_eq!(rows[0].get("n"), Some(&Value::Integer(2)));
}

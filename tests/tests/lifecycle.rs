use tests::{connect, SCHEMA};

use quarry_core::{stmt::Select, Error};

async fn attached(test: &tests::TestDb) -> bool {
    let rows = test
        .host
        .query_async("pragma database_list", &[])
        .await
        .unwrap();

    rows.iter()
        .any(|row| row.get("name").and_then(|value| value.as_text()) == Some(SCHEMA))
}

#[tokio::test]
async fn connect_attaches_and_destroy_detaches() {
    let test = connect().await;
    assert!(attached(&test).await);

    test.db.destroy().await.unwrap();
    assert!(!attached(&test).await);
}

#[tokio::test]
async fn statements_after_destroy_fail() {
    let test = connect().await;
    test.migrate().await;
    test.db.destroy().await.unwrap();

    let result = test.db.execute(Select::new(test.table("table_a")).column("id")).await;
    assert!(matches!(result, Err(Error::Host(_))));
}

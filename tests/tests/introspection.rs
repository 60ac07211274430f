use tests::{connect, SCHEMA};

use quarry_core::TableMetadata;

#[tokio::test]
async fn lists_user_tables_in_the_attached_schema() {
    let test = connect().await;
    test.migrate().await;

    let tables = test.db.table_metadata().await.unwrap();

    // The index and SQLite's own bookkeeping tables must not show up.
    assert_eq!(
        tables,
        vec![TableMetadata {
            name: "table_a".into(),
            schema: Some(SCHEMA.into()),
        }]
    );
}

#[tokio::test]
async fn capability_flags() {
    let test = connect().await;

    assert!(test.db.adapter().supports_returning());
    assert!(!test.db.adapter().supports_transactional_ddl());
}

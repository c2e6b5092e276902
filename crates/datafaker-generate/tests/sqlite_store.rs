use datafaker_generate::{
    FieldSource, FieldSpec, GenerationEngine, GenerationError, GenerationRequest, SqliteStore,
    Store,
};
use sqlx::Row;

fn request() -> GenerationRequest {
    GenerationRequest::new("people", 25)
        .with_seed(11)
        .with_field(FieldSpec::new(
            "id",
            FieldSource::Sequence {
                start: 1,
                step: 1,
                min: None,
                max: None,
                cycle: false,
            },
        ))
        .with_field(FieldSpec::descriptor("name", "Name"))
        .with_field(FieldSpec::descriptor("active", "bool").with_null(20))
}

#[tokio::test]
async fn inserts_every_row_in_memory() {
    let batch = GenerationEngine::default()
        .assemble(&request())
        .expect("assemble")
        .batch;
    let store = SqliteStore::connect("sqlite::memory:").await.expect("connect");
    store.ensure_table(&batch).await.expect("create table");

    let inserted = store.insert_batch(&batch).await.expect("insert");
    assert_eq!(inserted, 25);

    let row = sqlx::query("SELECT COUNT(*) AS n, MAX(id) AS top FROM people")
        .fetch_one(store.pool())
        .await
        .expect("count");
    assert_eq!(row.get::<i64, _>("n"), 25);
    assert_eq!(row.get::<i64, _>("top"), 25);
}

#[tokio::test]
async fn rejects_unsafe_identifiers() {
    let mut batch = GenerationEngine::default()
        .assemble(&request())
        .expect("assemble")
        .batch;
    batch.table = "people; DROP TABLE x".to_string();
    let store = SqliteStore::connect("sqlite::memory:").await.expect("connect");
    assert!(matches!(
        store.insert_batch(&batch).await,
        Err(GenerationError::InvalidRequest(_))
    ));
}

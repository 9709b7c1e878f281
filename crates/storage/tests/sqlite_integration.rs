use chrono::Duration;
use quiz_core::model::{ContactInfo, Persona, ResponseId, SurveyResponse};
use quiz_core::time::fixed_now;
use storage::repository::{ResponseRepository, StorageError};
use storage::sqlite::SqliteRepository;

fn build_response(name: &str, persona: Persona, offset_minutes: i64) -> SurveyResponse {
    let contact = ContactInfo::new(name, format!("{name}@example.com")).unwrap();
    SurveyResponse::new(
        ResponseId::generate(),
        fixed_now() + Duration::minutes(offset_minutes),
        &contact,
        persona,
    )
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_all_fields() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let response = build_response("ada", Persona::Visionary, 0);
    let id = repo.append_response(&response).await.unwrap();

    let fetched = repo.get_response(id).await.expect("fetch");
    assert_eq!(fetched.response_id(), response.response_id());
    assert_eq!(fetched.submitted_at(), response.submitted_at());
    assert_eq!(fetched.name(), "ada");
    assert_eq!(fetched.email(), "ada@example.com");
    assert_eq!(fetched.persona(), Persona::Visionary);
}

#[tokio::test]
async fn sqlite_lists_recent_newest_first() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_recent?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.append_response(&build_response("first", Persona::Guide, 0))
        .await
        .unwrap();
    repo.append_response(&build_response("second", Persona::Gatherer, 5))
        .await
        .unwrap();
    repo.append_response(&build_response("third", Persona::Connector, 10))
        .await
        .unwrap();

    let rows = repo.list_recent(2).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].response.name(), "third");
    assert_eq!(rows[1].response.name(), "second");
    assert!(rows[0].id > rows[1].id);
}

#[tokio::test]
async fn sqlite_rejects_duplicate_response_id() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_duplicate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let response = build_response("ada", Persona::Guide, 0);
    repo.append_response(&response).await.unwrap();
    let err = repo.append_response(&response).await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict));
}

#[tokio::test]
async fn sqlite_missing_row_is_not_found() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_missing?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let err = repo.get_response(99).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let response = build_response("ada", Persona::Visionary, 0);
    repo.append_response(&response).await.unwrap();
}

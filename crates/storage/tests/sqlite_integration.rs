use storage::repository::{KvStore, keys};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_every_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set(keys::THEME, "dark").await.unwrap();
    repo.set(keys::TEXT_SIZE, "1.4").await.unwrap();
    repo.set(keys::HIGH_CONTRAST, "true").await.unwrap();
    repo.set(keys::USER_PROGRESS, r#"{"1":{"scores":[1],"attempts":[0]}}"#)
        .await
        .unwrap();

    assert_eq!(repo.get(keys::THEME).await.unwrap().as_deref(), Some("dark"));
    assert_eq!(
        repo.get(keys::TEXT_SIZE).await.unwrap().as_deref(),
        Some("1.4")
    );
    assert_eq!(
        repo.get(keys::HIGH_CONTRAST).await.unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(
        repo.get(keys::USER_PROGRESS).await.unwrap().as_deref(),
        Some(r#"{"1":{"scores":[1],"attempts":[0]}}"#)
    );
}

#[tokio::test]
async fn sqlite_set_replaces_the_stored_value() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set(keys::USER_PROGRESS, "{}").await.unwrap();
    repo.set(keys::USER_PROGRESS, r#"{"2":{"scores":[],"attempts":[]}}"#)
        .await
        .unwrap();

    assert_eq!(
        repo.get(keys::USER_PROGRESS).await.unwrap().as_deref(),
        Some(r#"{"2":{"scores":[],"attempts":[]}}"#)
    );

    repo.remove(keys::USER_PROGRESS).await.unwrap();
    assert_eq!(repo.get(keys::USER_PROGRESS).await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set(keys::THEME, "light").await.unwrap();

    // Running migrations again must not clear existing data.
    repo.migrate().await.expect("second migrate");
    assert_eq!(
        repo.get(keys::THEME).await.unwrap().as_deref(),
        Some("light")
    );
}

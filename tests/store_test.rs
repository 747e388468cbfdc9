use std::sync::Arc;

use shelfscout::management::{JsonFileStore, KeyValueStore, Namespace};

#[tokio::test]
async fn test_missing_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert_eq!(store.get(Namespace::Token).await.unwrap(), None);
    assert_eq!(store.get(Namespace::Bestsellers).await.unwrap(), None);
}

#[tokio::test]
async fn test_put_creates_namespace_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested"));

    store
        .put(Namespace::Token, r#"{"access_token":"a","expiration":1}"#.to_string())
        .await
        .unwrap();
    store
        .put(Namespace::Bestsellers, "{}".to_string())
        .await
        .unwrap();

    assert!(dir.path().join("nested/auth/token.json").is_file());
    assert!(dir.path().join("nested/cache/bestsellers.json").is_file());
    assert_eq!(
        store.get(Namespace::Bestsellers).await.unwrap().as_deref(),
        Some("{}")
    );
}

#[tokio::test]
async fn test_put_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store.put(Namespace::Token, "first".to_string()).await.unwrap();
    store.put(Namespace::Token, "second".to_string()).await.unwrap();

    assert_eq!(
        store.get(Namespace::Token).await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_unwritable_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();
    let store = JsonFileStore::new(&blocker);

    assert!(store.put(Namespace::Token, "x".to_string()).await.is_err());
}

#[tokio::test]
async fn test_put_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store.put(Namespace::Bestsellers, "{}".to_string()).await.unwrap();
    store.put(Namespace::Bestsellers, "{\"a\":\"1\"}".to_string()).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path().join("cache"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["bestsellers.json".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reads_never_see_partial_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path()));
    store.put(Namespace::Bestsellers, "{}".to_string()).await.unwrap();

    let mut tasks = Vec::new();
    for writer in 0..4 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            for round in 0..25 {
                let entries: std::collections::HashMap<String, String> = (0..200)
                    .map(|i| {
                        (
                            format!("2023-01-01_list-{}-{}-{}", writer, round, i),
                            "0000000001".to_string(),
                        )
                    })
                    .collect();
                let body = serde_json::to_string(&entries).unwrap();
                store.put(Namespace::Bestsellers, body).await.unwrap();
            }
        }));
    }
    for _ in 0..4 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..50 {
                let content = store.get(Namespace::Bestsellers).await.unwrap().unwrap();
                let parsed: Result<serde_json::Value, _> = serde_json::from_str(&content);
                assert!(parsed.is_ok(), "read a partial write of {} bytes", content.len());
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }
}

//! PostgreSQL repository tests.
//!
//! Ignored by default. Run against a scratch database with
//! `DATABASE_URL=postgres://... cargo test --test postgres_test -- --ignored --test-threads=1`.

use foldertree_core::config::DatabaseConfig;
use foldertree_core::error::ErrorKind;
use foldertree_core::traits::Repository;
use foldertree_database::migration::run_migrations;
use foldertree_database::{DatabasePool, StoreManager};
use foldertree_entity::file::CreateFile;
use foldertree_entity::folder::CreateFolder;
use foldertree_service::TreeService;

async fn setup() -> StoreManager {
    let config = DatabaseConfig {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        ssl_mode: "disable".to_string(),
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(pool.pool())
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE files, folders RESTART IDENTITY")
        .execute(pool.pool())
        .await
        .expect("Failed to clean tables");

    StoreManager::postgres(pool)
}

#[tokio::test]
#[ignore]
async fn test_listings_are_ascending_by_id() {
    let stores = setup().await;
    let folders = stores.folders();

    let a = folders.create(&CreateFolder::root("zeta")).await.unwrap();
    let b = folders.create(&CreateFolder::root("alpha")).await.unwrap();

    let roots = folders.find_roots().await.unwrap();
    let ids: Vec<i64> = roots.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    stores.close().await;
}

#[tokio::test]
#[ignore]
async fn test_file_insert_into_missing_folder_is_rejected() {
    let stores = setup().await;

    let err = stores
        .files()
        .create(&CreateFile::new("a.txt", 999))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Database);
    assert_eq!(stores.files().count().await.unwrap(), 0);
    stores.close().await;
}

#[tokio::test]
#[ignore]
async fn test_folder_insert_under_missing_parent_is_rejected() {
    let stores = setup().await;

    let err = stores
        .folders()
        .create(&CreateFolder::child("orphan", 12345))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Database);
    stores.close().await;
}

#[tokio::test]
#[ignore]
async fn test_delete_leaves_orphans() {
    let stores = setup().await;
    let folders = stores.folders();
    let files = stores.files();

    let root = folders.create(&CreateFolder::root("root")).await.unwrap();
    let child = folders
        .create(&CreateFolder::child("child", root.id))
        .await
        .unwrap();
    files
        .create(&CreateFile::new("a.txt", root.id))
        .await
        .unwrap();

    assert!(folders.delete(&root.id).await.unwrap());
    assert!(!folders.delete(&root.id).await.unwrap());

    let orphan = folders.find_by_id(&child.id).await.unwrap().unwrap();
    assert_eq!(orphan.parent_folder_id, Some(root.id));
    assert_eq!(files.find_by_folder(root.id).await.unwrap().len(), 1);
    stores.close().await;
}

#[tokio::test]
#[ignore]
async fn test_rename_and_tree() {
    let stores = setup().await;
    let folders = stores.folders();

    let root = folders.create(&CreateFolder::root("old")).await.unwrap();
    let renamed = folders.rename(root.id, "new").await.unwrap();
    assert_eq!(renamed.name, "new");
    assert!(renamed.updated_at >= root.updated_at);
    assert!(folders.rename(root.id + 100, "x").await.unwrap_err().is_not_found());

    let child = folders
        .create(&CreateFolder::child("child", root.id))
        .await
        .unwrap();
    stores
        .files()
        .create(&CreateFile::new("c.txt", child.id))
        .await
        .unwrap();

    let tree = TreeService::from_manager(&stores).fetch_tree().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].folder.name, "new");
    assert_eq!(tree[0].children[0].files[0].name, "c.txt");
    stores.close().await;
}

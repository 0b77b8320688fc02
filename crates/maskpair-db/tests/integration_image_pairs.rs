//! Integration tests for the `SQLite` image pair repository.
//!
//! These run against an on-disk database created through `setup_database`,
//! the same path the CLI takes.

use std::time::Duration;

use maskpair_core::{ImageFileInfo, ImagePairRepository, NewImagePair};
use maskpair_db::{SqliteImagePairRepository, setup_database};
use sqlx::SqlitePool;
use tempfile::{TempDir, tempdir};

async fn open_repo() -> (TempDir, SqlitePool, SqliteImagePairRepository) {
    let temp = tempdir().unwrap();
    let pool = setup_database(&temp.path().join("maskpair.db"))
        .await
        .expect("Failed to setup database");
    let repo = SqliteImagePairRepository::new(pool.clone());
    (temp, pool, repo)
}

fn pair(n: usize) -> NewImagePair {
    NewImagePair::new(
        ImageFileInfo::new(format!("img{n}.png"), format!("/imgs/img{n}.png")),
        ImageFileInfo::new(format!("img{n}_mask.png"), format!("/imgs/img{n}_mask.png")),
    )
}

#[tokio::test]
async fn test_concrete_upload_scenario() {
    let (_temp, _pool, repo) = open_repo().await;

    let original = ImageFileInfo::new("a.png", "/imgs/a.png")
        .with_file_size(2048)
        .with_dimensions(100, 200);
    let mask = ImageFileInfo::new("a_mask.png", "/imgs/a_mask.png");

    let id = repo.insert(&NewImagePair::new(original, mask)).await.unwrap();
    assert_eq!(id, 1, "First insert into an empty table should get id 1");

    let stored = repo.get_by_id(1).await.unwrap().expect("Pair 1 should exist");
    assert_eq!(stored.original_filename, "a.png");
    assert_eq!(stored.mask_filename, "a_mask.png");
    assert_eq!(stored.file_size, Some(2048));
    assert_eq!(stored.image_width, Some(100));
    assert_eq!(stored.image_height, Some(200));
    assert!(stored.upload_date <= chrono::Utc::now());
}

#[tokio::test]
async fn test_recent_on_empty_table_is_empty() {
    let (_temp, _pool, repo) = open_repo().await;
    assert!(repo.list_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_recent_orders_most_recent_first() {
    let (_temp, _pool, repo) = open_repo().await;

    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(repo.insert(&pair(n)).await.unwrap());
        // Spread uploads over distinct milliseconds
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let all = repo.list_recent(5).await.unwrap();
    let listed: Vec<i64> = all.iter().map(|p| p.id).collect();
    let expected: Vec<i64> = ids.iter().rev().copied().collect();
    assert_eq!(listed, expected);
    assert!(all.windows(2).all(|w| w[0].upload_date >= w[1].upload_date));

    let top_two = repo.list_recent(2).await.unwrap();
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[0].id, ids[4]);
    assert_eq!(top_two[1].id, ids[3]);
}

#[tokio::test]
async fn test_same_instant_uploads_fall_back_to_id_order() {
    let (_temp, pool, repo) = open_repo().await;

    for n in 0..3 {
        repo.insert(&pair(n)).await.unwrap();
    }
    // Force identical timestamps
    sqlx::query("UPDATE image_pairs SET upload_date = '2024-01-01 00:00:00.000'")
        .execute(&pool)
        .await
        .unwrap();

    let listed: Vec<i64> = repo
        .list_recent(10)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_limit_is_passed_through() {
    let (_temp, _pool, repo) = open_repo().await;
    for n in 0..3 {
        repo.insert(&pair(n)).await.unwrap();
    }

    assert!(repo.list_recent(0).await.unwrap().is_empty());
    // SQLite treats a negative limit as "no limit"
    assert_eq!(repo.list_recent(-1).await.unwrap().len(), 3);
    assert_eq!(repo.list_recent(i64::MAX).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (_temp, pool, repo) = open_repo().await;

    let first = repo.insert(&pair(0)).await.unwrap();
    sqlx::query("DELETE FROM image_pairs WHERE id = ?")
        .bind(first)
        .execute(&pool)
        .await
        .unwrap();

    let second = repo.insert(&pair(1)).await.unwrap();
    assert!(second > first);
    assert!(repo.get_by_id(first).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reordered_columns_still_map_by_name() {
    let temp = tempdir().unwrap();
    let pool = SqlitePool::connect_with(
        sqlx::sqlite::SqliteConnectOptions::new()
            .filename(temp.path().join("legacy.db"))
            .create_if_missing(true),
    )
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE image_pairs (
            image_height INTEGER,
            image_width INTEGER,
            file_size INTEGER,
            upload_date TEXT DEFAULT CURRENT_TIMESTAMP,
            mask_path TEXT NOT NULL,
            mask_filename TEXT NOT NULL,
            original_path TEXT NOT NULL,
            original_filename TEXT NOT NULL,
            id INTEGER PRIMARY KEY AUTOINCREMENT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    maskpair_db::verify_schema(&pool).await.unwrap();

    let repo = SqliteImagePairRepository::new(pool);
    let original = ImageFileInfo::new("a.png", "/imgs/a.png").with_dimensions(640, 480);
    let id = repo
        .insert(&NewImagePair::new(
            original,
            ImageFileInfo::new("a_mask.png", "/imgs/a_mask.png"),
        ))
        .await
        .unwrap();

    let stored = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.original_filename, "a.png");
    assert_eq!(stored.mask_path, "/imgs/a_mask.png");
    assert_eq!(stored.image_width, Some(640));
    assert_eq!(stored.image_height, Some(480));
}

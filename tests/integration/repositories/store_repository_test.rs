// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{setup_database, STORE_ID, STORE_NAME, STORE_SECRET};
use salesrs::domain::repositories::store_repository::StoreRepository;
use salesrs::infrastructure::repositories::store_repo_impl::StoreRepositoryImpl;

#[tokio::test]
async fn finds_seeded_store() {
    let db = setup_database().await;
    let repo = StoreRepositoryImpl::new(db);

    let store = repo.find_by_id(STORE_ID).await.unwrap().unwrap();

    assert_eq!(store.id, STORE_ID);
    assert_eq!(store.name, STORE_NAME);
    assert_eq!(store.webhook_secret, STORE_SECRET);
}

#[tokio::test]
async fn unknown_store_is_none() {
    let db = setup_database().await;
    let repo = StoreRepositoryImpl::new(db);

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

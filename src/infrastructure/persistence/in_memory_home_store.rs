use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{DocumentStoreError, HomeDocumentStore};
use crate::domain::entities::{Home, HomeDetails};
use crate::domain::value_objects::HomeId;

/// Process-local home collection, ordered by insertion
#[derive(Default)]
pub struct InMemoryHomeStore {
    homes: RwLock<Vec<Home>>,
}

impl InMemoryHomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.homes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.homes.read().is_empty()
    }
}

#[async_trait]
impl HomeDocumentStore for InMemoryHomeStore {
    async fn insert_one(&self, home: &Home) -> Result<(), DocumentStoreError> {
        let id = home
            .id()
            .ok_or_else(|| DocumentStoreError::Internal("home has no id".to_string()))?;

        let mut homes = self.homes.write();
        if homes.iter().any(|h| h.id() == Some(id)) {
            return Err(DocumentStoreError::Internal(format!(
                "duplicate home id: {}",
                id
            )));
        }
        homes.push(home.clone());
        Ok(())
    }

    async fn find_one(&self, id: &HomeId) -> Result<Option<Home>, DocumentStoreError> {
        Ok(self
            .homes
            .read()
            .iter()
            .find(|h| h.id() == Some(id))
            .cloned())
    }

    async fn find_window(&self, skip: i64, limit: i64) -> Result<Vec<Home>, DocumentStoreError> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .homes
            .read()
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, DocumentStoreError> {
        Ok(self.homes.read().len() as i64)
    }

    async fn update_one(
        &self,
        id: &HomeId,
        details: &HomeDetails,
    ) -> Result<u64, DocumentStoreError> {
        let mut homes = self.homes.write();
        match homes.iter_mut().find(|h| h.id() == Some(id)) {
            Some(home) => {
                home.apply_details(details.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::sample_details;
    use std::collections::BTreeMap;

    fn stored(id: &str) -> Home {
        Home::reconstruct(
            HomeId::new(id).unwrap(),
            "owner@example.com".to_string(),
            sample_details(),
            BTreeMap::new(),
        )
    }

    #[tokio::test]
    async fn test_window_follows_insertion_order() {
        let store = InMemoryHomeStore::new();
        for id in ["a", "b", "c", "d"] {
            store.insert_one(&stored(id)).await.unwrap();
        }

        let window = store.find_window(1, 2).await.unwrap();
        let ids: Vec<_> = window.iter().filter_map(|h| h.id()).map(HomeId::as_str).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_window_past_end_is_empty() {
        let store = InMemoryHomeStore::new();
        store.insert_one(&stored("a")).await.unwrap();
        assert!(store.find_window(5, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_unassigned_and_duplicate() {
        let store = InMemoryHomeStore::new();
        let unassigned = Home::new("owner@example.com", sample_details());
        assert!(store.insert_one(&unassigned).await.is_err());

        store.insert_one(&stored("a")).await.unwrap();
        assert!(store.insert_one(&stored("a")).await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_reports_matched_count() {
        let store = InMemoryHomeStore::new();
        store.insert_one(&stored("a")).await.unwrap();

        let mut details = sample_details();
        details.price = 9_999;

        let missing = HomeId::new("zz").unwrap();
        assert_eq!(store.update_one(&missing, &details).await.unwrap(), 0);

        let id = HomeId::new("a").unwrap();
        assert_eq!(store.update_one(&id, &details).await.unwrap(), 1);
        let home = store.find_one(&id).await.unwrap().unwrap();
        assert_eq!(home.details().price, 9_999);
    }
}

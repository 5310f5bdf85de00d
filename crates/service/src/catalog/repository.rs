use async_trait::async_trait;
use uuid::Uuid;

use super::kind::CatalogKind;
use crate::errors::ServiceError;

/// Storage-facing collaborator of [`CatalogService`](super::service::CatalogService).
#[async_trait]
pub trait CatalogRepository<K: CatalogKind>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<K::Record>, ServiceError>;
    async fn find_by_key(&self, key: &str) -> Result<Option<K::Record>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<K::Record>, ServiceError>;
    /// Persists a new record under a freshly generated id.
    async fn insert(&self, changes: K::Changes) -> Result<K::Record, ServiceError>;
    /// Returns `false` when no row has this id.
    async fn update_by_id(&self, id: Uuid, changes: K::Changes) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::marker::PhantomData;
    use tokio::sync::RwLock;

    /// Keeps records in insertion order and enforces key uniqueness like a unique index.
    pub struct InMemoryRepository<K: CatalogKind> {
        rows: RwLock<Vec<K::Record>>,
        _kind: PhantomData<fn() -> K>,
    }

    impl<K: CatalogKind> Default for InMemoryRepository<K> {
        fn default() -> Self { Self { rows: RwLock::new(Vec::new()), _kind: PhantomData } }
    }

    impl<K: CatalogKind> InMemoryRepository<K> {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl<K: CatalogKind> CatalogRepository<K> for InMemoryRepository<K> {
        async fn find_all(&self) -> Result<Vec<K::Record>, ServiceError> {
            Ok(self.rows.read().await.clone())
        }

        async fn find_by_key(&self, key: &str) -> Result<Option<K::Record>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.iter().find(|r| K::key(r) == key).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<K::Record>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.iter().find(|r| K::id(r) == id).cloned())
        }

        async fn insert(&self, changes: K::Changes) -> Result<K::Record, ServiceError> {
            let record = K::build(Uuid::new_v4(), changes)?;
            let mut rows = self.rows.write().await;
            if rows.iter().any(|r| K::key(r) == K::key(&record)) {
                return Err(ServiceError::conflict(K::LABEL, K::KEY_FIELD));
            }
            rows.push(record.clone());
            Ok(record)
        }

        async fn update_by_id(&self, id: Uuid, changes: K::Changes) -> Result<bool, ServiceError> {
            let mut rows = self.rows.write().await;
            let Some(pos) = rows.iter().position(|r| K::id(r) == id) else {
                return Ok(false);
            };
            let mut next = rows[pos].clone();
            K::apply(&mut next, changes);
            if rows.iter().any(|r| K::id(r) != id && K::key(r) == K::key(&next)) {
                return Err(ServiceError::conflict(K::LABEL, K::KEY_FIELD));
            }
            rows[pos] = next;
            Ok(true)
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|r| K::id(r) != id);
            Ok(rows.len() != before)
        }
    }
}

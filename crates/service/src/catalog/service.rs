use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::kind::CatalogKind;
use super::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Application service encapsulating the CRUD and uniqueness rules shared by every
/// catalog kind.
pub struct CatalogService<K: CatalogKind> {
    repo: Arc<dyn CatalogRepository<K>>,
}

impl<K: CatalogKind> Clone for CatalogService<K> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<K: CatalogKind> CatalogService<K> {
    pub fn new(repo: Arc<dyn CatalogRepository<K>>) -> Self { Self { repo } }

    #[instrument(skip_all, fields(kind = K::LABEL))]
    pub async fn list_all(&self) -> Result<Vec<K::Record>, ServiceError> {
        self.repo.find_all().await
    }

    /// Create a record after checking its key is free.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{ArtistService, kinds::artist::{ArtistKind, CreateArtist}, repository::mock::InMemoryRepository};
    /// let svc = ArtistService::new(Arc::new(InMemoryRepository::<ArtistKind>::new()));
    /// let date = chrono::NaiveDate::from_ymd_opt(1987, 1, 1).unwrap();
    /// let artist = tokio_test::block_on(svc.create(CreateArtist { name: "Nirvana".into(), starting_date: date })).unwrap();
    /// assert_eq!(artist.name, "Nirvana");
    /// let again = tokio_test::block_on(svc.create(CreateArtist { name: "Nirvana".into(), starting_date: date }));
    /// assert!(matches!(again, Err(service::errors::ServiceError::Conflict(_))));
    /// ```
    #[instrument(skip_all, fields(kind = K::LABEL))]
    pub async fn create(&self, input: K::Create) -> Result<K::Record, ServiceError> {
        let key = K::create_key(&input);
        if key.trim().is_empty() {
            return Err(ServiceError::Validation(format!("{} must not be empty", K::KEY_FIELD)));
        }
        if self.repo.find_by_key(key).await?.is_some() {
            return Err(ServiceError::conflict(K::LABEL, K::KEY_FIELD));
        }

        let record = self.repo.insert(K::insert_changes(input)?).await?;
        info!(id = %K::id(&record), "created");
        Ok(record)
    }

    /// Partial update. The key field must be present and non-blank and must not
    /// collide with another record.
    #[instrument(skip_all, fields(kind = K::LABEL, id = %id))]
    pub async fn update(&self, id: Uuid, mut input: K::Update) -> Result<bool, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(K::LABEL, id));
        }

        let key = match K::take_key(&mut input) {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ServiceError::InvalidUpdate(format!("{} is required", K::KEY_FIELD))),
        };
        if let Some(other) = self.repo.find_by_key(&key).await? {
            if K::id(&other) != id {
                return Err(ServiceError::conflict(K::LABEL, K::KEY_FIELD));
            }
        }

        let changes = K::update_changes(input, key)?;
        if !self.repo.update_by_id(id, changes).await? {
            return Err(ServiceError::not_found(K::LABEL, id));
        }
        info!("updated");
        Ok(true)
    }

    #[instrument(skip_all, fields(kind = K::LABEL, id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(K::LABEL, id));
        }
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(K::LABEL, id));
        }
        info!("deleted");
        Ok(true)
    }
}

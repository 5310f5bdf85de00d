use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, NotSet, QueryFilter, Set, SqlErr,
};
use tracing::debug;
use uuid::Uuid;

use super::kind::CatalogKind;
use super::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Binds a [`CatalogKind`] to its SeaORM entity.
pub trait SeaOrmKind: CatalogKind {
    type Entity: EntityTrait<Model = Self::Record>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn key_column() -> <Self::Entity as EntityTrait>::Column;

    /// Active model carrying `id` and every present field of the change set.
    fn active_model(id: ActiveValue<Uuid>, changes: Self::Changes) -> Self::ActiveModel;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<K> {
    db: DatabaseConnection,
    _kind: PhantomData<fn() -> K>,
}

impl<K> SeaOrmRepository<K> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _kind: PhantomData } }
}

fn write_err<K: CatalogKind>(e: DbErr) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::conflict(K::LABEL, K::KEY_FIELD),
        _ => ServiceError::Db(e.to_string()),
    }
}

#[async_trait]
impl<K> CatalogRepository<K> for SeaOrmRepository<K>
where
    K: SeaOrmKind,
    K::Record: IntoActiveModel<K::ActiveModel> + FromQueryResult,
{
    async fn find_all(&self) -> Result<Vec<K::Record>, ServiceError> {
        K::Entity::find().all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<K::Record>, ServiceError> {
        K::Entity::find()
            .filter(K::key_column().eq(key))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<K::Record>, ServiceError> {
        K::Entity::find()
            .filter(K::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, changes: K::Changes) -> Result<K::Record, ServiceError> {
        let id = Uuid::new_v4();
        debug!(kind = K::LABEL, %id, "insert");
        K::active_model(Set(id), changes).insert(&self.db).await.map_err(write_err::<K>)
    }

    async fn update_by_id(&self, id: Uuid, changes: K::Changes) -> Result<bool, ServiceError> {
        let res = K::Entity::update_many()
            .set(K::active_model(NotSet, changes))
            .filter(K::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(write_err::<K>)?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = K::Entity::delete_many()
            .filter(K::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

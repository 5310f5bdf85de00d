//! Handlers shared by every catalog kind.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use service::catalog::{CatalogKind, CatalogService};
use uuid::Uuid;

use crate::errors::JsonApiError;

async fn list<K: CatalogKind>(State(svc): State<CatalogService<K>>) -> Result<Json<Vec<K::Record>>, JsonApiError> {
    Ok(Json(svc.list_all().await?))
}

async fn create<K: CatalogKind>(
    State(svc): State<CatalogService<K>>,
    Json(input): Json<K::Create>,
) -> Result<(StatusCode, Json<K::Record>), JsonApiError> {
    let record = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update<K: CatalogKind>(
    State(svc): State<CatalogService<K>>,
    Path(id): Path<Uuid>,
    Json(input): Json<K::Update>,
) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(svc.update(id, input).await?))
}

async fn remove<K: CatalogKind>(
    State(svc): State<CatalogService<K>>,
    Path(id): Path<Uuid>,
) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(svc.delete(id).await?))
}

/// `GET|POST {base}` and `PUT|DELETE {base}/:id` for one kind.
pub fn routes<K: CatalogKind>(base: &str, svc: CatalogService<K>) -> Router {
    Router::new()
        .route(base, get(list::<K>).post(create::<K>))
        .route(&format!("{}/:id", base), put(update::<K>).delete(remove::<K>))
        .with_state(svc)
}

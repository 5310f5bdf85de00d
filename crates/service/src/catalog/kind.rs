use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Describes one entity kind of the catalog: its record type, payloads, and how
/// payload fields are merged into a change set.
///
/// The uniqueness key is the single field that must be distinct across all live
/// records of the kind (`name`, or `username` for users).
pub trait CatalogKind: Send + Sync + 'static {
    /// Lower-case entity name used in messages and spans.
    const LABEL: &'static str;
    const KEY_FIELD: &'static str;

    type Record: Clone + Serialize + Send + Sync + 'static;
    /// Payload of `create`; carries every required field.
    type Create: DeserializeOwned + Send + 'static;
    /// Payload of `update`; every field optional.
    type Update: DeserializeOwned + Send + 'static;
    /// Field-level change set handed to the repository. `None` means untouched.
    type Changes: Send + 'static;

    fn id(record: &Self::Record) -> Uuid;
    fn key(record: &Self::Record) -> &str;
    fn create_key(input: &Self::Create) -> &str;

    /// Removes the key field from an update payload.
    fn take_key(input: &mut Self::Update) -> Option<String>;

    fn insert_changes(input: Self::Create) -> Result<Self::Changes, ServiceError>;

    /// Remaining payload fields plus the validated key.
    fn update_changes(input: Self::Update, key: String) -> Result<Self::Changes, ServiceError>;

    /// Materializes a full record from a change set; fails when a required field is missing.
    fn build(id: Uuid, changes: Self::Changes) -> Result<Self::Record, ServiceError>;

    fn apply(record: &mut Self::Record, changes: Self::Changes);
}

pub(crate) fn missing(field: &str) -> ServiceError {
    ServiceError::Validation(format!("{} is required", field))
}

/// Deserializes a nullable field so that an absent field (`None`) stays distinct
/// from an explicit `null` (`Some(None)`).
pub fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

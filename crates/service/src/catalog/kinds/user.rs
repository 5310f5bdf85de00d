use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use models::user;
use rand::rngs::OsRng;
use sea_orm::{ActiveValue, NotSet, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::kind::{missing, CatalogKind};
use crate::catalog::seaorm::SeaOrmKind;
use crate::errors::ServiceError;

#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `password` holds the Argon2 PHC string, never the plain text.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub(crate) fn hash_password(plain: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| ServiceError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub struct UserKind;

impl CatalogKind for UserKind {
    const LABEL: &'static str = "user";
    const KEY_FIELD: &'static str = "username";

    type Record = user::Model;
    type Create = CreateUser;
    type Update = UpdateUser;
    type Changes = UserChanges;

    fn id(record: &user::Model) -> Uuid { record.id }
    fn key(record: &user::Model) -> &str { &record.username }
    fn create_key(input: &CreateUser) -> &str { &input.username }
    fn take_key(input: &mut UpdateUser) -> Option<String> { input.username.take() }

    fn insert_changes(input: CreateUser) -> Result<UserChanges, ServiceError> {
        Ok(UserChanges { username: Some(input.username), password: Some(hash_password(&input.password)?) })
    }

    fn update_changes(input: UpdateUser, key: String) -> Result<UserChanges, ServiceError> {
        let password = input.password.as_deref().map(hash_password).transpose()?;
        Ok(UserChanges { username: Some(key), password })
    }

    fn build(id: Uuid, changes: UserChanges) -> Result<user::Model, ServiceError> {
        Ok(user::Model {
            id,
            username: changes.username.ok_or_else(|| missing("username"))?,
            password: changes.password.ok_or_else(|| missing("password"))?,
        })
    }

    fn apply(record: &mut user::Model, changes: UserChanges) {
        if let Some(username) = changes.username {
            record.username = username;
        }
        if let Some(password) = changes.password {
            record.password = password;
        }
    }
}

impl SeaOrmKind for UserKind {
    type Entity = user::Entity;
    type ActiveModel = user::ActiveModel;

    fn id_column() -> user::Column { user::Column::Id }
    fn key_column() -> user::Column { user::Column::Username }

    fn active_model(id: ActiveValue<Uuid>, changes: UserChanges) -> user::ActiveModel {
        user::ActiveModel {
            id,
            username: changes.username.map_or(NotSet, Set),
            password: changes.password.map_or(NotSet, Set),
        }
    }
}

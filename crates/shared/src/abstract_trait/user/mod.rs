use crate::{errors::RepositoryError, model::User, model::UserRole};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
}

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn touch_last_login(&self, id: i32) -> Result<User, RepositoryError>;
}

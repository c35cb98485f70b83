use crate::{
    abstract_trait::{NewUser, UserRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

const USER_COLUMNS: &str = "id, username, password_hash, role, is_active, created_at, last_login";

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(username)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch user {}: {:?}", username, e);
                RepositoryError::from(e)
            })?;

        Ok(user)
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO users (username, password_hash, role, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.role)
            .bind(user.is_active)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create user {}: {:?}", user.username, e);
                RepositoryError::from_unique_violation(e, "Username already registered")
            })?;

        info!("✅ Created user {} ({})", created.username, created.role);
        Ok(created)
    }

    async fn touch_last_login(&self, id: i32) -> Result<UserModel, RepositoryError> {
        let sql = format!(
            "UPDATE users SET last_login = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update last login for user {}: {:?}", id, e);
                RepositoryError::from(e)
            })?
            .ok_or_else(|| RepositoryError::NotFound(format!("User {id} not found")))?;

        Ok(user)
    }
}

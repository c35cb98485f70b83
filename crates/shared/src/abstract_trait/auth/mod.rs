use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError>;
    async fn login_user(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError>;
    async fn get_me(&self, username: &str) -> Result<UserResponse, ServiceError>;
}

use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository, NewUser},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tracing::{info, warn};

pub struct AuthService {
    users: DynUserRepository,
    hash: DynHashing,
    jwt: DynJwtService,
    metrics: Metrics,
}

pub struct AuthServiceDeps {
    pub users: DynUserRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps, registry: &mut Registry) -> Self {
        let AuthServiceDeps { users, hash, jwt } = deps;

        Self {
            users,
            hash,
            jwt,
            metrics: Metrics::registered(registry, "auth_service", "AuthService"),
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        info!("📝 Registering user {} as {}", req.username, req.role);
        let ctx = TracingContext::start("RegisterUser");

        if self.users.find_by_username(&req.username).await?.is_some() {
            self.metrics
                .complete_error(&ctx, Method::Post, "Username already registered");
            return Err(RepositoryError::AlreadyExists("Username already registered".into()).into());
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        let user = self
            .users
            .create_user(&NewUser {
                username: req.username.clone(),
                password_hash,
                role: req.role,
                is_active: req.is_active,
            })
            .await
            .inspect_err(|e| {
                self.metrics
                    .complete_error(&ctx, Method::Post, &e.to_string())
            })?;

        self.metrics
            .complete_success(&ctx, Method::Post, "User registered");
        Ok(UserResponse::from(user))
    }

    async fn login_user(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        info!("🔐 Attempting login for {}", req.username);
        let ctx = TracingContext::start("Login");

        let user = match self.users.find_by_username(&req.username).await? {
            Some(user) if user.is_active => user,
            Some(_) => {
                warn!("❌ Inactive user tried to log in: {}", req.username);
                self.metrics
                    .complete_error(&ctx, Method::Post, "Inactive user");
                return Err(ServiceError::InvalidCredentials);
            }
            None => {
                warn!("❌ Unknown user: {}", req.username);
                self.metrics
                    .complete_error(&ctx, Method::Post, "Unknown user");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        if let Err(e) = self
            .hash
            .compare_password(&user.password_hash, &req.password)
            .await
        {
            warn!("❌ Invalid password for {}", req.username);
            self.metrics
                .complete_error(&ctx, Method::Post, "Invalid password");
            return Err(e);
        }

        let access_token = self.jwt.generate_token(&user.username, user.role)?;
        self.users.touch_last_login(user.id).await?;

        self.metrics
            .complete_success(&ctx, Method::Post, "Login successful");
        Ok(TokenResponse::bearer(access_token))
    }

    async fn get_me(&self, username: &str) -> Result<UserResponse, ServiceError> {
        let ctx = TracingContext::start("GetMe");

        match self.users.find_by_username(username).await? {
            Some(user) => {
                self.metrics.complete_success(&ctx, Method::Get, "Fetched current user");
                Ok(UserResponse::from(user))
            }
            None => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Token subject no longer exists");
                Err(ServiceError::Unauthorized(
                    "Could not validate credentials".into(),
                ))
            }
        }
    }
}

use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::Repositories,
    service::RoleGate,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub role_gate: RoleGate,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        Self::with_repositories(config, Repositories::new(pool))
    }

    /// Builds the state over any set of repositories.
    pub fn with_repositories(config: &Config, repositories: Repositories) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(
            &config.jwt_secret,
            config.access_token_expire_minutes,
        )) as DynJwtService;
        let hashing = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;
        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps {
            repositories,
            hash: hashing,
            jwt_config: jwt_config.clone(),
        };

        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            role_gate: RoleGate::new(jwt_config.clone()),
            jwt_config,
            registry: Arc::new(registry),
        }
    }
}

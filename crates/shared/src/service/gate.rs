use crate::{abstract_trait::DynJwtService, errors::ServiceError, model::UserRole};
use tracing::warn;

/// Who is calling, as proven by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: UserRole,
}

#[derive(Clone)]
pub struct RoleGate {
    jwt: DynJwtService,
}

impl RoleGate {
    pub fn new(jwt: DynJwtService) -> Self {
        Self { jwt }
    }

    /// Verifies the token and checks its role against `allowed`.
    ///
    /// Any token failure is `Unauthorized`; a valid token with the wrong role
    /// is `Forbidden`.
    pub fn authorize(&self, token: &str, allowed: &[UserRole]) -> Result<Identity, ServiceError> {
        let claims = self.jwt.verify_token(token).map_err(|e| {
            warn!("🔒 Rejected bearer token: {e}");
            ServiceError::Unauthorized("Could not validate credentials".into())
        })?;

        if !allowed.contains(&claims.role) {
            warn!(
                "⛔ {} ({}) is not allowed here, needs one of {:?}",
                claims.sub, claims.role, allowed
            );
            return Err(ServiceError::Forbidden(
                "You do not have permission to access this resource".into(),
            ));
        }

        Ok(Identity {
            username: claims.sub,
            role: claims.role,
        })
    }
}

use axum::{
    RequestPartsExt,
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use shared::{
    errors::HttpError,
    model::UserRole,
    service::{Identity, RoleGate},
};
use std::marker::PhantomData;

/// The set of roles a route accepts.
pub trait RolePolicy: Send + Sync + 'static {
    const ROLES: &'static [UserRole];
}

pub struct AnyStaff;
pub struct AdminOnly;
/// Staff who take orders at the tables.
pub struct FrontOfHouse;
pub struct KitchenOnly;
pub struct KitchenOrAdmin;
/// Staff allowed to adjust stock counts.
pub struct StockKeepers;

impl RolePolicy for AnyStaff {
    const ROLES: &'static [UserRole] = &[UserRole::Admin, UserRole::Cashier, UserRole::Cook];
}

impl RolePolicy for AdminOnly {
    const ROLES: &'static [UserRole] = &[UserRole::Admin];
}

impl RolePolicy for FrontOfHouse {
    const ROLES: &'static [UserRole] = &[UserRole::Admin, UserRole::Cashier];
}

impl RolePolicy for KitchenOnly {
    const ROLES: &'static [UserRole] = &[UserRole::Cook];
}

impl RolePolicy for KitchenOrAdmin {
    const ROLES: &'static [UserRole] = &[UserRole::Cook, UserRole::Admin];
}

impl RolePolicy for StockKeepers {
    const ROLES: &'static [UserRole] = &[UserRole::Admin, UserRole::Cook];
}

/// Extracts the caller from the bearer token and rejects roles outside `P`.
pub struct Authorized<P: RolePolicy> {
    pub identity: Identity,
    _policy: PhantomData<P>,
}

impl<P: RolePolicy> Authorized<P> {
    pub fn username(&self) -> &str {
        &self.identity.username
    }
}

impl<S, P> FromRequestParts<S> for Authorized<P>
where
    S: Send + Sync,
    P: RolePolicy,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(gate) = parts
            .extract::<Extension<RoleGate>>()
            .await
            .map_err(|_| HttpError::Internal("Role gate is not configured".into()))?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| HttpError::Unauthorized("Not authenticated".into()))?;

        let identity = gate
            .authorize(bearer.token(), P::ROLES)
            .map_err(HttpError::from)?;

        Ok(Self {
            identity,
            _policy: PhantomData,
        })
    }
}

use crate::{
    abstract_trait::JwtServiceTrait, errors::ServiceError, model::UserRole,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(sub: String, role: UserRole, iat: usize, exp: usize) -> Self {
        Claims { sub, role, iat, exp }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, access_token_minutes: i64) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            access_token_ttl: Duration::minutes(access_token_minutes),
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, ServiceError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, username: &str, role: UserRole) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + self.access_token_ttl).timestamp() as usize;

        self.sign(&Claims::new(username.to_string(), role, iat, exp))
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(e),
            }
        })?;

        Ok(token_data.claims)
    }
}

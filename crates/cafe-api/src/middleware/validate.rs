use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use shared::errors::{ErrorResponse, ServiceError};
use validator::{Validate, ValidationErrors};

type Rejection = (StatusCode, Json<ErrorResponse>);

fn validation_rejection(errors: ValidationErrors) -> Rejection {
    let message = match ServiceError::from(errors) {
        ServiceError::Validation(messages) if !messages.is_empty() => {
            format!("Validation failed: {}", messages.join("; "))
        }
        _ => "Validation failed".to_string(),
    };

    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// JSON body that has passed its `validator` rules.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!(
                        "Invalid JSON: {}",
                        rejection.body_text()
                    ))),
                )
            })?;

        value.validate().map_err(validation_rejection)?;

        Ok(Self(value))
    }
}

/// Query string that has passed its `validator` rules.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!(
                        "Invalid query: {}",
                        rejection.body_text()
                    ))),
                )
            })?;

        value.validate().map_err(validation_rejection)?;

        Ok(Self(value))
    }
}

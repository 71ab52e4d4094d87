//! Request extractors that keep failures inside the response envelope.

use axum::extract::{FromRequest, Request, rejection::JsonRejection};

use crate::error::ApiError;

/// `axum::Json` with its rejection routed through [`ApiError`], so a
/// malformed or mistyped body comes back as a 422 error envelope instead
/// of axum's plain-text rejection.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

//! Request extractors whose rejections keep the JSON envelope.
//!
//! Axum's stock `Path` and `Json` reject with plain-text bodies. These
//! newtype wrappers delegate the parsing and remap the rejection into
//! [`AppError`], so a non-numeric id or a malformed body gets the same
//! `{success, message}` shape as every other failure. An unparseable path
//! segment means the URL names no real endpoint, so it reports as the 404
//! envelope rather than a validation error.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// `axum::extract::Path` with the envelope-shaped rejection.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::EndpointNotFound)?;
        Ok(Self(value))
    }
}

/// `axum::Json` with the envelope-shaped rejection.
///
/// Also usable in response position, delegating to `axum::Json`.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

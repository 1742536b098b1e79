use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `axum::Json` with its rejection routed through [`ApiError`], so a
/// body that fails to parse still gets the `{success: false, error}`
/// envelope instead of axum's plain-text rejection.
///
/// [`ApiError`]: crate::errors::ApiError
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(crate::errors::ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Same treatment for query strings (`/entries?limit=abc`).
#[derive(Debug, axum::extract::FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(crate::errors::ApiError))]
pub struct Query<T>(pub T);

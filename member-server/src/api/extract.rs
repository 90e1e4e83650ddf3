//! Request extractors that report rejections through `AppError`
//!
//! axum's stock rejections answer with plain text; these wrappers keep every
//! client error in the `ErrorResponse` body with field-level details.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use validator::Validate;

/// JSON body that is deserialized and then validated
///
/// The body is parsed to a `Value` first so a shape error can name the
/// field that caused it.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        let value: T = serde_path_to_error::deserialize(body).map_err(shape_error)?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonSyntaxError(e) => {
            AppError::invalid_request("Request body is not valid JSON")
                .with_detail("body", e.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::invalid_request("Expected request with `Content-Type: application/json`")
        }
        other => AppError::invalid_request(other.body_text()),
    }
}

/// Well-formed JSON that does not fit `T`, keyed by the offending field
fn shape_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let field = err.path().to_string();
    let reason = err.into_inner().to_string();
    let err = AppError::validation("Request body does not match the expected shape");
    if field == "." {
        err.with_detail("body", reason)
    } else {
        err.with_detail(field, vec![Value::String(reason)])
    }
}

/// Query string extractor
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                AppError::validation("Invalid query parameters")
                    .with_detail("query", rejection.body_text())
            })?;
        Ok(ApiQuery(value))
    }
}

/// Path parameter extractor
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(ApiPath(value))
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => {
            AppError::validation("Invalid path parameter").with_detail("path", e.body_text())
        }
        other => {
            tracing::error!(rejection = %other.body_text(), "Route is missing its path parameters");
            AppError::new(ErrorCode::InternalError)
        }
    }
}

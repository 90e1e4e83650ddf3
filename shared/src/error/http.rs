//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::MemberNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity (payload failed schema validation)
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (duplicate email is reported as 400, not 409)
            Self::InvalidRequest | Self::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
        }
    }
}

//! Repository → API error mapping
//!
//! Lets handlers propagate [`RepoError`] with `?`. Storage failures are logged
//! here once and reach the client only as a generic `DatabaseError`.

use shared::error::{AppError, ErrorCode};

use crate::db::RepoError;

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Duplicate(reason) => {
                tracing::warn!(%reason, "Unique constraint rejected member write");
                AppError::new(ErrorCode::EmailAlreadyRegistered)
            }
            RepoError::Database(db_err) => {
                tracing::error!(error = %db_err, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let err: AppError = RepoError::Duplicate("idx_members_email".into()).into();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let err: AppError = RepoError::Database("connection refused at 10.0.0.5".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("10.0.0.5"));
    }
}

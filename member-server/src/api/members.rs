//! Member API handlers
//!
//! POST   /members/      register a member (400 if the email is taken)
//! GET    /members/      list members (`skip`, `limit`)
//! GET    /members/{id}  fetch one member
//! PUT    /members/{id}  partial update
//! DELETE /members/{id}  hard delete

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{Member, MemberCreate, MemberUpdate, MembershipType, NewMember};
use validator::Validate;

use super::extract::{ApiPath, ApiQuery, ValidJson};
use crate::db::RepoError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

pub const DEFAULT_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
pub struct ListParams {
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be a non-negative integer"))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "limit must be a non-negative integer"))]
    pub limit: i64,
}

/// Duplicate writes surface with the email the client sent, when it sent one
fn email_conflict(err: RepoError, email: Option<&str>) -> AppError {
    match (err, email) {
        (RepoError::Duplicate(_), Some(email)) => {
            tracing::warn!(email = %email, "Email already registered (unique index)");
            AppError::email_taken(email)
        }
        (other, _) => other.into(),
    }
}

fn note_unknown_tier(membership_type: &str) {
    if MembershipType::parse(membership_type).is_none() {
        tracing::debug!(membership_type, "Membership type outside the known tiers");
    }
}

/// POST /members/
pub async fn create_member(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<MemberCreate>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    let new_member = NewMember::try_from(payload)?;

    // Fast path for the common case; the unique index still guards concurrent inserts
    if state.members.find_by_email(&new_member.email).await?.is_some() {
        tracing::warn!(email = %new_member.email, "Email already registered");
        return Err(AppError::email_taken(&new_member.email));
    }
    note_unknown_tier(&new_member.membership_type);

    let member = state
        .members
        .create(&new_member)
        .await
        .map_err(|e| email_conflict(e, Some(&new_member.email)))?;

    tracing::info!(member_id = member.id, email = %member.email, "Member created");
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /members/
pub async fn list_members(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Vec<Member>> {
    params.validate()?;
    let members = state.members.list(params.skip, params.limit).await?;
    Ok(Json(members))
}

/// GET /members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    ApiPath(member_id): ApiPath<i64>,
) -> ApiResult<Member> {
    let member = state
        .members
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::member_not_found(member_id))?;
    Ok(Json(member))
}

/// PUT /members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    ApiPath(member_id): ApiPath<i64>,
    ValidJson(payload): ValidJson<MemberUpdate>,
) -> ApiResult<Member> {
    if let Some(membership_type) = &payload.membership_type {
        note_unknown_tier(membership_type);
    }

    let member = state
        .members
        .update(member_id, &payload)
        .await
        .map_err(|e| email_conflict(e, payload.email.as_deref()))?
        .ok_or_else(|| AppError::member_not_found(member_id))?;

    tracing::info!(member_id, "Member updated");
    Ok(Json(member))
}

/// DELETE /members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    ApiPath(member_id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    if !state.members.delete(member_id).await? {
        return Err(AppError::member_not_found(member_id));
    }

    tracing::info!(member_id, "Member deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_list_params_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_list_params_bounds() {
        let negative = ListParams { skip: -1, limit: 10 };
        assert!(negative.validate().is_err());

        let negative_limit = ListParams { skip: 0, limit: -5 };
        assert!(negative_limit.validate().is_err());

        let large_page = ListParams { skip: 0, limit: 500 };
        assert!(large_page.validate().is_ok());

        let empty_page = ListParams { skip: 0, limit: 0 };
        assert!(empty_page.validate().is_ok());
    }

    #[test]
    fn test_email_conflict_with_email_names_it() {
        let err = email_conflict(RepoError::Duplicate("members".into()), Some("a@pycon.ph"));
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(err.details.unwrap()["email"], "a@pycon.ph");
    }

    #[test]
    fn test_email_conflict_without_email_has_no_detail() {
        let err = email_conflict(RepoError::Duplicate("members".into()), None);
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert!(err.details.is_none());
    }

    #[test]
    fn test_email_conflict_passes_other_errors_through() {
        let err = email_conflict(RepoError::Database("boom".into()), Some("a@pycon.ph"));
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

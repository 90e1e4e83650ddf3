//! Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Member entity, one conference registrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub membership_type: String,
    pub is_active: bool,
    pub joined_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Create member payload
///
/// Text fields are optional on the wire so a missing key is reported by
/// `validate()` against that field. Server-assigned fields (`id`,
/// `joined_date`, `updated_at`) are not part of this shape; a client that
/// sends them has them ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCreate {
    #[validate(required(message = "field required"))]
    pub first_name: Option<String>,
    #[validate(required(message = "field required"))]
    pub last_name: Option<String>,
    #[validate(
        required(message = "field required"),
        email(message = "value is not a valid email address")
    )]
    pub email: Option<String>,
    #[validate(required(message = "field required"))]
    pub membership_type: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// A validated registration, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub membership_type: String,
    pub is_active: bool,
}

impl TryFrom<MemberCreate> for NewMember {
    type Error = ValidationErrors;

    fn try_from(payload: MemberCreate) -> Result<Self, Self::Error> {
        payload.validate()?;
        match (
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.membership_type,
        ) {
            (Some(first_name), Some(last_name), Some(email), Some(membership_type)) => {
                Ok(NewMember {
                    first_name,
                    last_name,
                    email,
                    membership_type,
                    is_active: payload.is_active,
                })
            }
            // validate() already rejects any missing field
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Update member payload
///
/// Every field is optional. `None` leaves the stored value untouched, so an
/// explicit JSON `null` behaves like an omitted key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MemberUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[validate(email(message = "value is not a valid email address"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl MemberUpdate {
    /// Apply the supplied fields to `member`, leaving the rest as they are.
    ///
    /// Timestamps are not touched here; the caller owns `updated_at`.
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(first_name) = &self.first_name {
            member.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            member.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            member.email = email.clone();
        }
        if let Some(membership_type) = &self.membership_type {
            member.membership_type = membership_type.clone();
        }
        if let Some(is_active) = self.is_active {
            member.is_active = is_active;
        }
    }
}

/// Known membership tiers
///
/// The stored column is free text; this enum only names the values the
/// conference actually issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    Student,
    Professional,
    Speaker,
}

impl MembershipType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "professional" => Some(Self::Professional),
            "speaker" => Some(Self::Speaker),
            _ => None,
        }
    }
}

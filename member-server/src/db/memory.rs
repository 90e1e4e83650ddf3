//! In-process member repository
//!
//! Mirrors the PostgreSQL semantics (generated ids, unique email, id ordering)
//! behind a single lock. Selected with `DATABASE_URL=memory://` and used by
//! the HTTP test-suite.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Member, MemberUpdate, NewMember};
use shared::util::now_utc;

use super::{MemberRepository, RepoError, RepoResult};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Member>,
    last_id: i64,
}

impl Table {
    fn email_taken(&self, email: &str, except_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|m| m.email == email && Some(m.id) != except_id)
    }
}

#[derive(Default)]
pub struct MemoryMemberRepository {
    table: RwLock<Table>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate(email: &str) -> RepoError {
    RepoError::Duplicate(format!("email {email} already exists"))
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn create(&self, data: &NewMember) -> RepoResult<Member> {
        let mut table = self.table.write();
        if table.email_taken(&data.email, None) {
            return Err(duplicate(&data.email));
        }

        table.last_id += 1;
        let now = now_utc();
        let member = Member {
            id: table.last_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            membership_type: data.membership_type.clone(),
            is_active: data.is_active,
            joined_date: now,
            updated_at: now,
        };
        table.rows.insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> RepoResult<Vec<Member>> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .table
            .read()
            .rows
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, data: &MemberUpdate) -> RepoResult<Option<Member>> {
        let mut table = self.table.write();
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = &data.email {
            if table.email_taken(email, Some(id)) {
                return Err(duplicate(email));
            }
        }

        let Some(member) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        data.apply_to(member);
        member.updated_at = now_utc().max(member.joined_date);
        Ok(Some(member.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

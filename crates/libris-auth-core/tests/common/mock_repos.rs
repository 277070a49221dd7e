//! Mock repositories for testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use libris_db::{
    CreateRole, CreateUser, DbError, DbResult, RoleRepository, RoleRow, UserClaimRow,
    UserRepository, UserRow,
};
use uuid::Uuid;

/// Build a linked pair of mocks.
///
/// The two share one role catalog so that `roles_for_user` can resolve
/// assignment ids to names, the way the real store joins the tables.
#[allow(dead_code)]
pub fn mock_store() -> (MockUserRepository, MockRoleRepository) {
    let catalog: Arc<DashMap<Uuid, RoleRow>> = Arc::new(DashMap::new());
    (
        MockUserRepository::new(Arc::clone(&catalog)),
        MockRoleRepository { roles: catalog },
    )
}

/// In-memory user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
    assignments: Arc<DashMap<Uuid, Vec<Uuid>>>,
    claims: Arc<DashMap<Uuid, Vec<UserClaimRow>>>,
    claim_seq: Arc<AtomicI64>,
    role_catalog: Arc<DashMap<Uuid, RoleRow>>,
}

impl MockUserRepository {
    fn new(role_catalog: Arc<DashMap<Uuid, RoleRow>>) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            by_email: Arc::new(DashMap::new()),
            assignments: Arc::new(DashMap::new()),
            claims: Arc::new(DashMap::new()),
            claim_seq: Arc::new(AtomicI64::new(0)),
            role_catalog,
        }
    }

    /// Insert a test user directly
    #[allow(dead_code)]
    pub fn insert_user(&self, user: UserRow) {
        self.by_email.insert(user.email.to_lowercase(), user.id);
        self.users.insert(user.id, user);
    }

    /// Attach a stored custom claim directly
    #[allow(dead_code)]
    pub fn insert_claim(&self, user_id: Uuid, key: &str, value: &str) {
        let id = self.claim_seq.fetch_add(1, Ordering::Relaxed) + 1;
        self.claims.entry(user_id).or_default().push(UserClaimRow {
            id,
            user_id,
            claim_key: key.to_string(),
            claim_value: value.to_string(),
        });
    }

    #[allow(dead_code)]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[allow(dead_code)]
    pub fn assignment_count(&self, user_id: Uuid) -> usize {
        self.assignments.get(&user_id).map(|a| a.len()).unwrap_or(0)
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(&email.to_lowercase())
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let email_key = user.email.to_lowercase();
        if self.users.contains_key(&user.id) || self.by_email.contains_key(&email_key) {
            return Err(DbError::Duplicate);
        }

        let row = UserRow {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(email_key, row.id);
        self.users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn add_role(&self, user_id: Uuid, role_id: Uuid) -> DbResult<()> {
        let mut assigned = self.assignments.entry(user_id).or_default();
        if !assigned.contains(&role_id) {
            assigned.push(role_id);
        }
        Ok(())
    }

    async fn roles_for_user(&self, user_id: Uuid) -> DbResult<Vec<String>> {
        let mut names: Vec<String> = self
            .assignments
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.role_catalog.get(id).map(|r| r.name.clone()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        Ok(names)
    }

    async fn claims_for_user(&self, user_id: Uuid) -> DbResult<Vec<UserClaimRow>> {
        Ok(self.claims.get(&user_id).map(|c| c.value().clone()).unwrap_or_default())
    }
}

/// In-memory role repository for testing
#[derive(Default, Clone)]
pub struct MockRoleRepository {
    roles: Arc<DashMap<Uuid, RoleRow>>,
}

impl MockRoleRepository {
    #[allow(dead_code)]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_name(&self, name: &str) -> DbResult<Option<RoleRow>> {
        Ok(self
            .roles
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.value().clone()))
    }

    async fn upsert(&self, role: CreateRole) -> DbResult<()> {
        self.roles.entry(role.id).or_insert(RoleRow { id: role.id, name: role.name });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(email: &str) -> CreateUser {
        CreateUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_user_repo_crud() {
        let (repo, _) = mock_store();

        let user = repo.create(create_user("test@example.com")).await.unwrap();

        let found = repo.find_by_id(user.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "test@example.com");

        // Email lookups fold case
        let found = repo.find_by_email("TEST@Example.Com").await.unwrap();
        assert!(found.is_some());

        // Duplicate email is rejected
        let result = repo.create(create_user("Test@Example.com")).await;
        assert!(matches!(result, Err(DbError::Duplicate)));
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_role_repo_upsert_is_idempotent() {
        let (_, repo) = mock_store();
        let id = Uuid::new_v4();

        repo.upsert(CreateRole { id, name: "Admin".to_string() }).await.unwrap();
        repo.upsert(CreateRole { id, name: "Admin".to_string() }).await.unwrap();

        assert_eq!(repo.role_count(), 1);
        let found = repo.find_by_name("Admin").await.unwrap();
        assert_eq!(found.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_roles_for_user_enumerates_by_name() {
        let (users, roles) = mock_store();
        let user_id = Uuid::new_v4();
        let admin_id = Uuid::new_v4();
        let user_role_id = Uuid::new_v4();

        roles.upsert(CreateRole { id: admin_id, name: "Admin".to_string() }).await.unwrap();
        roles.upsert(CreateRole { id: user_role_id, name: "User".to_string() }).await.unwrap();

        // Assigned out of name order; enumeration still sorts
        users.add_role(user_id, user_role_id).await.unwrap();
        users.add_role(user_id, admin_id).await.unwrap();
        // Re-assignment is a no-op
        users.add_role(user_id, admin_id).await.unwrap();

        let names = users.roles_for_user(user_id).await.unwrap();
        assert_eq!(names, vec!["Admin", "User"]);
        assert_eq!(users.assignment_count(user_id), 2);
    }

    #[tokio::test]
    async fn test_claims_keep_insertion_order() {
        let (users, _) = mock_store();
        let user_id = Uuid::new_v4();

        users.insert_claim(user_id, "library", "central");
        users.insert_claim(user_id, "shelf", "a3");

        let claims = users.claims_for_user(user_id).await.unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].claim_key, "library");
        assert_eq!(claims[1].claim_key, "shelf");
        assert!(claims[0].id < claims[1].id);
    }
}

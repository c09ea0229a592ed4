use super::error::UserError;
use super::models::{User, UserId};
use super::repository::UserRepository;
use parking_lot::RwLock;

/// Vec-backed repository. Keeps records in insertion order, nothing survives
/// the process.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    // never lowered by delete
    high_water: Option<UserId>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list. Later duplicates of an id are dropped.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            if let Err(e) = repo.insert(user) {
                tracing::warn!("Skipping seed user: {}", e);
            }
        }
        repo
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<User, UserError> {
        let mut inner = self.inner.write();
        if inner.users.iter().any(|u| u.id == user.id) {
            return Err(UserError::DuplicateId(user.id));
        }
        inner.high_water = inner.high_water.max(Some(user.id));
        inner.users.push(user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.inner.read().users.iter().find(|u| u.id == id).cloned()
    }

    fn list_all(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    fn update(&self, id: UserId, apply: &mut dyn FnMut(&mut User)) -> Option<User> {
        let mut inner = self.inner.write();
        let user = inner.users.iter_mut().find(|u| u.id == id)?;
        apply(user);
        Some(user.clone())
    }

    fn delete(&self, id: UserId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        inner.users.len() != before
    }

    fn max_id(&self) -> Option<UserId> {
        self.inner.read().users.iter().map(|u| u.id).max()
    }

    fn highest_issued_id(&self) -> Option<UserId> {
        self.inner.read().high_water
    }

    fn len(&self) -> usize {
        self.inner.read().users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::models::Role;
    use chrono::NaiveDate;

    fn user(id: u64, first: &str) -> User {
        User::new(
            UserId(id),
            first.to_string(),
            "Doe".to_string(),
            format!("{}@example.com", first.to_lowercase()),
            Role::Customer,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_insert_keeps_order() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user(3, "Cara")).unwrap();
        repo.insert(user(1, "Abe")).unwrap();
        repo.insert(user(2, "Bo")).unwrap();

        let ids: Vec<u64> = repo.list_all().iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user(1, "Abe")).unwrap();

        let result = repo.insert(user(1, "Other"));
        assert_eq!(result, Err(UserError::DuplicateId(UserId(1))));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(UserId(1)).unwrap().first_name, "Abe");
    }

    #[test]
    fn test_with_users_drops_duplicates() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Abe"), user(1, "Again")]);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_touches_only_target() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Abe"), user(2, "Bo")]);

        let updated = repo.update(UserId(2), &mut |u| u.active = false).unwrap();
        assert!(!updated.active);
        assert!(repo.find_by_id(UserId(1)).unwrap().active);
        assert!(!repo.find_by_id(UserId(2)).unwrap().active);
    }

    #[test]
    fn test_update_missing_id_is_none() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Abe")]);
        let mut called = false;
        assert!(repo.update(UserId(9), &mut |_| called = true).is_none());
        assert!(!called);
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Abe"), user(2, "Bo")]);

        assert!(repo.delete(UserId(1)));
        assert!(!repo.delete(UserId(1)));
        assert_eq!(repo.len(), 1);
        assert!(repo.find_by_id(UserId(2)).is_some());
    }

    #[test]
    fn test_max_id() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.max_id(), None);

        repo.insert(user(7, "Gus")).unwrap();
        repo.insert(user(2, "Bo")).unwrap();
        assert_eq!(repo.max_id(), Some(UserId(7)));
    }

    #[test]
    fn test_highest_issued_id_survives_delete() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Abe"), user(6, "Fay")]);
        assert_eq!(repo.highest_issued_id(), Some(UserId(6)));

        assert!(repo.delete(UserId(6)));
        assert_eq!(repo.max_id(), Some(UserId(1)));
        assert_eq!(repo.highest_issued_id(), Some(UserId(6)));

        assert!(repo.delete(UserId(1)));
        assert!(repo.is_empty());
        assert_eq!(repo.highest_issued_id(), Some(UserId(6)));
    }
}

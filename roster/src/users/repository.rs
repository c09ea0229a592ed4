use super::error::UserError;
use super::models::{User, UserId};

/// Ordered in-memory collection of user records.
pub trait UserRepository: Send + Sync {
    /// Append a user; fails if the id is already present
    fn insert(&self, user: User) -> Result<User, UserError>;

    /// Find a user by ID
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// List all users in insertion order
    fn list_all(&self) -> Vec<User>;

    /// Mutate the matching record in place and return its new state
    fn update(&self, id: UserId, apply: &mut dyn FnMut(&mut User)) -> Option<User>;

    /// Remove a user by ID, reporting whether anything was removed
    fn delete(&self, id: UserId) -> bool;

    /// Largest id currently stored
    fn max_id(&self) -> Option<UserId>;

    /// Largest id ever stored, deleted records included
    fn highest_issued_id(&self) -> Option<UserId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

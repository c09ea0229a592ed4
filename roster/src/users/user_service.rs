use super::clock::Clock;
use super::draft::UserDraft;
use super::error::UserError;
use super::models::{User, UserId};
use super::repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    /// Create a user from a filled-in draft
    pub fn add_user(&self, draft: &UserDraft) -> Result<User, UserError> {
        let valid = draft.validate().inspect_err(|e| {
            warn!("Rejected new user: {}", e);
        })?;

        let user = User::new(
            self.next_id()?,
            valid.first_name,
            valid.last_name,
            valid.email,
            valid.role,
            self.clock.today(),
        );

        let user = self.user_repo.insert(user)?;
        info!("CREATE_USER: id={}, role={}", user.id, user.role);
        Ok(user)
    }

    /// Get a user by ID
    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.user_repo.find_by_id(id)
    }

    /// List all users in display order
    pub fn list_users(&self) -> Vec<User> {
        self.user_repo.list_all()
    }

    /// Flip between active and inactive
    pub fn toggle_active(&self, id: UserId) -> Option<User> {
        let updated = self.user_repo.update(id, &mut |u| u.active = !u.active);
        match &updated {
            Some(user) => debug!("TOGGLE_ACTIVE: id={}, active={}", id, user.active),
            None => debug!("TOGGLE_ACTIVE: no user with id={}", id),
        }
        updated
    }

    /// Flip between customer and staff
    pub fn toggle_role(&self, id: UserId) -> Option<User> {
        let updated = self.user_repo.update(id, &mut |u| u.role = u.role.toggled());
        match &updated {
            Some(user) => debug!("TOGGLE_ROLE: id={}, role={}", id, user.role),
            None => debug!("TOGGLE_ROLE: no user with id={}", id),
        }
        updated
    }

    /// Delete a user. Confirmation happens before this is called.
    pub fn delete_user(&self, id: UserId) -> bool {
        let removed = self.user_repo.delete(id);
        if removed {
            info!("DELETE_USER: id={}", id);
        } else {
            debug!("DELETE_USER: no user with id={}", id);
        }
        removed
    }

    pub fn user_count(&self) -> usize {
        self.user_repo.len()
    }

    /// One past the largest id ever handed out, or 1 for a fresh collection.
    /// Deleted ids are never reused.
    fn next_id(&self) -> Result<UserId, UserError> {
        match self.user_repo.highest_issued_id().max(self.user_repo.max_id()) {
            Some(last) => last.next().ok_or(UserError::IdsExhausted(last)),
            None => Ok(UserId::FIRST),
        }
    }
}

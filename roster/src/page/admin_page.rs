use super::dialogs::Dialogs;
use crate::users::{
    DraftField, Role, RoleFilter, StatusFilter, User, UserError, UserFilter, UserId, UserDraft,
    UserService,
};
use std::sync::Arc;
use tracing::{debug, error};

/// State behind the user management page: the store, the create-user draft,
/// whether the create modal is showing, and the filter bar.
pub struct AdminPage {
    user_service: Arc<UserService>,
    dialogs: Arc<dyn Dialogs>,
    draft: UserDraft,
    filter: UserFilter,
    modal_open: bool,
}

impl AdminPage {
    pub fn new(user_service: Arc<UserService>, dialogs: Arc<dyn Dialogs>) -> Self {
        Self {
            user_service,
            dialogs,
            draft: UserDraft::default(),
            filter: UserFilter::default(),
            modal_open: false,
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn total_users(&self) -> usize {
        self.user_service.user_count()
    }

    pub fn active_users(&self) -> usize {
        self.user_service
            .list_users()
            .iter()
            .filter(|u| u.active)
            .count()
    }

    /// Rows for the table, after the filter bar.
    pub fn visible_users(&self) -> Vec<User> {
        self.filter.apply(self.user_service.list_users())
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hide the modal without submitting. The draft is left as typed.
    pub fn cancel_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn select_role(&mut self, role: Role) {
        self.draft.set_role(role);
    }

    /// Create a user from the draft. Rejected drafts raise an alert and keep
    /// the modal open with the draft intact.
    pub fn submit(&mut self) -> Option<User> {
        match self.user_service.add_user(&self.draft) {
            Ok(user) => {
                self.draft.clear();
                self.modal_open = false;
                Some(user)
            }
            Err(UserError::Validation(e)) => {
                self.dialogs.alert(&e.to_string());
                None
            }
            Err(e) => {
                error!("Failed to create user: {}", e);
                self.dialogs.alert(&e.to_string());
                None
            }
        }
    }

    /// Ask before deleting; only a confirmed prompt removes the row.
    pub fn request_delete(&mut self, id: UserId) -> bool {
        let Some(user) = self.user_service.get_user(id) else {
            debug!("Delete requested for unknown user id={}", id);
            return false;
        };

        let message = format!(
            "Are you sure you want to delete {} ({})?",
            user.full_name(),
            user.email
        );
        if !self.dialogs.confirm(&message) {
            debug!("Delete of user id={} cancelled", id);
            return false;
        }

        self.user_service.delete_user(id)
    }

    pub fn toggle_role(&mut self, id: UserId) -> Option<User> {
        self.user_service.toggle_role(id)
    }

    pub fn toggle_active(&mut self, id: UserId) -> Option<User> {
        self.user_service.toggle_active(id)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_role_filter(&mut self, role: RoleFilter) {
        self.filter.role = role;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn clear_filter(&mut self) {
        self.filter = UserFilter::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::dialogs::ScriptedDialogs;
    use crate::users::defaults::demo_users;
    use crate::users::{FixedClock, InMemoryUserRepository, UserRepository};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn page_with(dialogs: Arc<ScriptedDialogs>) -> AdminPage {
        let user_repo = Arc::new(InMemoryUserRepository::with_users(demo_users(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ))) as Arc<dyn UserRepository>;
        let user_service = Arc::new(UserService::new(user_repo, Arc::new(FixedClock(today()))));
        AdminPage::new(user_service, dialogs)
    }

    fn fill_anna(page: &mut AdminPage) {
        page.update_field(DraftField::FirstName, "Anna");
        page.update_field(DraftField::LastName, "K");
        page.update_field(DraftField::Email, "a@k.io");
        page.select_role(Role::Staff);
    }

    #[test]
    fn test_submit_appends_clears_and_closes() {
        let dialogs = Arc::new(ScriptedDialogs::new());
        let mut page = page_with(dialogs.clone());

        page.open_modal();
        fill_anna(&mut page);
        let user = page.submit().unwrap();

        assert_eq!(user.id, UserId(5));
        assert_eq!(user.created_at, today());
        assert!(user.active);
        assert_eq!(user.role, Role::Staff);
        assert_eq!(page.total_users(), 5);
        assert_eq!(page.draft(), &UserDraft::default());
        assert!(!page.is_modal_open());
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn test_submit_with_missing_field_alerts_and_keeps_modal() {
        let dialogs = Arc::new(ScriptedDialogs::new());
        let mut page = page_with(dialogs.clone());

        page.open_modal();
        fill_anna(&mut page);
        page.update_field(DraftField::LastName, "");
        let draft_before = page.draft().clone();

        assert!(page.submit().is_none());

        assert_eq!(page.total_users(), 4);
        assert!(page.is_modal_open());
        assert_eq!(page.draft(), &draft_before);
        assert_eq!(dialogs.alerts(), vec!["Please fill in the last name field"]);
    }

    #[test]
    fn test_resubmit_after_deleting_new_user_gets_fresh_id() {
        let dialogs = Arc::new(ScriptedDialogs::answering([true]));
        let mut page = page_with(dialogs);

        fill_anna(&mut page);
        let first = page.submit().unwrap();
        assert!(page.request_delete(first.id));

        fill_anna(&mut page);
        let second = page.submit().unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(page.total_users(), 5);
    }

    #[test]
    fn test_cancel_closes_and_keeps_draft() {
        let mut page = page_with(Arc::new(ScriptedDialogs::new()));

        page.open_modal();
        page.update_field(DraftField::FirstName, "Half");
        page.cancel_modal();

        assert!(!page.is_modal_open());
        assert_eq!(page.draft().first_name, "Half");
        assert_eq!(page.total_users(), 4);
    }

    #[test]
    fn test_confirmed_delete_removes_only_target() {
        let dialogs = Arc::new(ScriptedDialogs::answering([true]));
        let mut page = page_with(dialogs.clone());

        assert!(page.request_delete(UserId(2)));

        let ids: Vec<u64> = page.visible_users().iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(
            dialogs.confirms(),
            vec!["Are you sure you want to delete Marcus Reed (marcus.reed@example.com)?"]
        );
    }

    #[test]
    fn test_cancelled_delete_changes_nothing() {
        let dialogs = Arc::new(ScriptedDialogs::answering([false]));
        let mut page = page_with(dialogs.clone());
        let before = page.visible_users();

        assert!(!page.request_delete(UserId(2)));

        assert_eq!(page.visible_users(), before);
        assert_eq!(dialogs.confirms().len(), 1);
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_does_not_prompt() {
        let dialogs = Arc::new(ScriptedDialogs::answering([true]));
        let mut page = page_with(dialogs.clone());

        assert!(!page.request_delete(UserId(42)));
        assert!(dialogs.confirms().is_empty());
        assert_eq!(page.total_users(), 4);
    }

    #[test]
    fn test_row_toggles() {
        let mut page = page_with(Arc::new(ScriptedDialogs::new()));

        let user = page.toggle_role(UserId(2)).unwrap();
        assert_eq!(user.role, Role::Staff);

        assert_eq!(page.active_users(), 3);
        let user = page.toggle_active(UserId(3)).unwrap();
        assert!(user.active);
        assert_eq!(page.active_users(), 4);

        assert!(page.toggle_role(UserId(77)).is_none());
    }

    #[test]
    fn test_filter_bar_narrows_rows_only() {
        let mut page = page_with(Arc::new(ScriptedDialogs::new()));

        page.set_role_filter(RoleFilter::Staff);
        page.set_status_filter(StatusFilter::Active);
        page.set_search("tomas");

        let ids: Vec<u64> = page.visible_users().iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![4]);
        assert_eq!(page.total_users(), 4);

        page.clear_filter();
        assert_eq!(page.visible_users().len(), 4);
    }

    #[test]
    fn test_new_user_hidden_by_filter_still_created() {
        let mut page = page_with(Arc::new(ScriptedDialogs::new()));
        page.set_role_filter(RoleFilter::Customer);

        fill_anna(&mut page);
        let user = page.submit().unwrap();

        assert_eq!(page.total_users(), 5);
        assert!(!page.visible_users().iter().any(|u| u.id == user.id));
    }
}

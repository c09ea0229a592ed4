use super::models::{Role, User};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RoleFilter {
    #[default]
    All,
    Customer,
    Staff,
}

impl RoleFilter {
    pub fn matches(self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Customer => role == Role::Customer,
            RoleFilter::Staff => role == Role::Staff,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::All => "All roles",
            RoleFilter::Customer => "Customer",
            RoleFilter::Staff => "Staff",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => active,
            StatusFilter::Inactive => !active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}

/// Search box plus the two select filters above the user table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: RoleFilter,
    pub status: StatusFilter,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.role == RoleFilter::All
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, user: &User) -> bool {
        self.role.matches(user.role) && self.status.matches(user.active) && self.matches_search(user)
    }

    /// Matching users, order preserved.
    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().filter(|u| self.matches(u)).collect()
    }

    fn matches_search(&self, user: &User) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            user.first_name.to_lowercase(),
            user.last_name.to_lowercase(),
            user.full_name().to_lowercase(),
            user.email.to_lowercase(),
        ]
        .iter()
        .any(|haystack| haystack.contains(&needle))
    }
}

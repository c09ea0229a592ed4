use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Identifier of a user record, unique within a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// The id handed out when the collection is empty.
    pub const FIRST: UserId = UserId(1);

    /// The following id, or `None` once the id space is used up.
    pub fn next(self) -> Option<UserId> {
        self.0.checked_add(1).map(UserId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Staff,
}

impl Role {
    /// The other role.
    pub fn toggled(self) -> Role {
        match self {
            Role::Customer => Role::Staff,
            Role::Staff => Role::Customer,
        }
    }

    /// Human-readable label for table badges and select options.
    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Staff => "Staff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: NaiveDate,
    pub active: bool,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        role: Role,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            role,
            created_at,
            active: true,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials shown in the avatar column.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

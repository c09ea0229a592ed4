use super::models::{Role, User, UserId};
use chrono::NaiveDate;

/// Sample records the console starts with, ids 1 through 4.
pub fn demo_users(created_at: NaiveDate) -> Vec<User> {
    vec![
        demo_user(1, "Olivia", "Bennett", "olivia.bennett@example.com", Role::Staff, true, created_at),
        demo_user(2, "Marcus", "Reed", "marcus.reed@example.com", Role::Customer, true, created_at),
        demo_user(3, "Priya", "Nair", "priya.nair@example.com", Role::Customer, false, created_at),
        demo_user(4, "Tomas", "Lindqvist", "tomas.lindqvist@example.com", Role::Staff, true, created_at),
    ]
}

fn demo_user(
    id: u64,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: Role,
    active: bool,
    created_at: NaiveDate,
) -> User {
    User {
        active,
        ..User::new(
            UserId(id),
            first_name.to_string(),
            last_name.to_string(),
            email.to_string(),
            role,
            created_at,
        )
    }
}

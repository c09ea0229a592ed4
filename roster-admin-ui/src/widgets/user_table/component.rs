use dioxus::prelude::*;
use roster::page::AdminPage;
use roster::users::{Role, User};

#[component]
pub fn UserTable(users: Vec<User>) -> Element {
    rsx! {
        table { class: "user-table",
            thead {
                tr {
                    th { "User" }
                    th { "Email" }
                    th { "Role" }
                    th { "Created" }
                    th { "Status" }
                    th { class: "actions", "Actions" }
                }
            }
            tbody {
                for user in users {
                    UserRow { key: "{user.id}", user: user.clone() }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User) -> Element {
    let mut page = use_context::<Signal<AdminPage>>();
    let id = user.id;

    let role_class = match user.role {
        Role::Staff => "badge staff",
        Role::Customer => "badge customer",
    };
    let (status_class, status_label) = if user.active {
        ("badge active", "Active")
    } else {
        ("badge inactive", "Inactive")
    };
    let role_action = format!("Make {}", user.role.toggled().label());
    let active_action = if user.active { "Deactivate" } else { "Activate" };

    rsx! {
        tr {
            td {
                div { class: "user-cell",
                    span { class: "avatar", "{user.initials()}" }
                    span { class: "user-name", "{user.full_name()}" }
                }
            }
            td { "{user.email}" }
            td { span { class: "{role_class}", "{user.role.label()}" } }
            td { "{user.created_at}" }
            td { span { class: "{status_class}", "{status_label}" } }
            td { class: "actions",
                button {
                    class: "button link",
                    r#type: "button",
                    onclick: move |_| {
                        page.write().toggle_role(id);
                    },
                    "{role_action}"
                }
                button {
                    class: "button link",
                    r#type: "button",
                    onclick: move |_| {
                        page.write().toggle_active(id);
                    },
                    "{active_action}"
                }
                button {
                    class: "button link danger",
                    r#type: "button",
                    onclick: move |_| {
                        page.write().request_delete(id);
                    },
                    "Delete"
                }
            }
        }
    }
}

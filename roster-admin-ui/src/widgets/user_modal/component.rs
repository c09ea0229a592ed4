use std::str::FromStr;

use dioxus::prelude::*;
use roster::page::AdminPage;
use roster::users::{DraftField, Role};
use strum::IntoEnumIterator;

#[component]
pub fn UserModal() -> Element {
    let mut page = use_context::<Signal<AdminPage>>();
    let draft = page.read().draft().clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal-header",
                    h2 { "Add user" }
                }
                form {
                    class: "modal-form",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        if let Some(user) = page.write().submit() {
                            info!("Added user {} ({})", user.id, user.email);
                        }
                    },
                    for field in DraftField::iter() {
                        DraftInput { field, value: draft.field(field).to_string() }
                    }
                    div { class: "form-group",
                        label { r#for: "role", "Role" }
                        select {
                            id: "role",
                            class: "select",
                            name: "role",
                            onchange: move |e: Event<FormData>| match Role::from_str(&e.value()) {
                                Ok(role) => page.write().select_role(role),
                                Err(_) => warn!("Unknown role: {}", e.value()),
                            },
                            for role in Role::iter() {
                                option {
                                    value: "{role}",
                                    selected: role == draft.role,
                                    "{role.label()}"
                                }
                            }
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "button secondary",
                            r#type: "button",
                            onclick: move |_| page.write().cancel_modal(),
                            "Cancel"
                        }
                        button { class: "button primary", r#type: "submit", "Add user" }
                    }
                }
            }
        }
    }
}

/// One controlled text input of the draft.
#[component]
fn DraftInput(field: DraftField, value: String) -> Element {
    let mut page = use_context::<Signal<AdminPage>>();
    let name = field.input_name();
    let input_type = match field {
        DraftField::Email => "email",
        _ => "text",
    };
    let label = match field {
        DraftField::FirstName => "First name",
        DraftField::LastName => "Last name",
        DraftField::Email => "Email",
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "{name}",
                "{label}"
                span { class: "required", "*" }
            }
            input {
                id: "{name}",
                class: "input",
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                oninput: move |e: Event<FormData>| page.write().update_field(field, e.value()),
            }
        }
    }
}

use std::str::FromStr;

use dioxus::prelude::*;
use roster::page::AdminPage;
use roster::users::{RoleFilter, StatusFilter};
use strum::IntoEnumIterator;

#[component]
pub fn FilterBar() -> Element {
    let mut page = use_context::<Signal<AdminPage>>();
    let filter = page.read().filter().clone();

    rsx! {
        div { class: "filter-bar",
            input {
                class: "input search",
                r#type: "search",
                name: "search",
                placeholder: "Search by name or email",
                value: "{filter.search}",
                oninput: move |e: Event<FormData>| page.write().set_search(e.value()),
            }
            select {
                class: "select",
                name: "role",
                onchange: move |e: Event<FormData>| match RoleFilter::from_str(&e.value()) {
                    Ok(role) => page.write().set_role_filter(role),
                    Err(_) => warn!("Unknown role filter: {}", e.value()),
                },
                for choice in RoleFilter::iter() {
                    option {
                        value: "{choice}",
                        selected: choice == filter.role,
                        "{choice.label()}"
                    }
                }
            }
            select {
                class: "select",
                name: "status",
                onchange: move |e: Event<FormData>| match StatusFilter::from_str(&e.value()) {
                    Ok(status) => page.write().set_status_filter(status),
                    Err(_) => warn!("Unknown status filter: {}", e.value()),
                },
                for choice in StatusFilter::iter() {
                    option {
                        value: "{choice}",
                        selected: choice == filter.status,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

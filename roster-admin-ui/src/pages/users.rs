use dioxus::prelude::*;
use roster::page::AdminPage;

use crate::widgets::empty_state::{EmptyAction, EmptyState};
use crate::widgets::filter_bar::FilterBar;
use crate::widgets::user_modal::UserModal;
use crate::widgets::user_table::UserTable;

/// What the empty table says, and which button it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmptyKind {
    /// Rows exist but the filter bar hides them all.
    NoMatches,
    /// The store itself is empty.
    NoUsers,
}

impl EmptyKind {
    fn for_page(filtered: bool, total: usize) -> Self {
        if filtered && total > 0 {
            EmptyKind::NoMatches
        } else {
            EmptyKind::NoUsers
        }
    }

    fn icon(self) -> &'static str {
        match self {
            EmptyKind::NoMatches => "🔍",
            EmptyKind::NoUsers => "👥",
        }
    }

    fn title(self) -> &'static str {
        match self {
            EmptyKind::NoMatches => "No matching users",
            EmptyKind::NoUsers => "No users",
        }
    }

    fn description(self, total: usize) -> String {
        match self {
            EmptyKind::NoMatches => format!("None of the {total} users match the current filters."),
            EmptyKind::NoUsers => "Click \"Add user\" to create the first account.".to_string(),
        }
    }

    fn action_label(self) -> &'static str {
        match self {
            EmptyKind::NoMatches => "Clear filters",
            EmptyKind::NoUsers => "Add user",
        }
    }
}

#[component]
pub fn Users() -> Element {
    let mut page = use_context::<Signal<AdminPage>>();

    let total = page.read().total_users();
    let rows = page.read().visible_users();
    let shown = rows.len();
    let modal_open = page.read().is_modal_open();
    let empty = EmptyKind::for_page(!page.read().filter().is_empty(), total);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div {
                    h1 { "Users" }
                    p { class: "page-subtitle", "Manage customer and staff accounts" }
                }
                button {
                    class: "button primary",
                    r#type: "button",
                    onclick: move |_| page.write().open_modal(),
                    "+ Add user"
                }
            }

            FilterBar {}

            if rows.is_empty() {
                EmptyState {
                    icon: empty.icon(),
                    title: empty.title(),
                    description: empty.description(total),
                    action: Some(EmptyAction {
                        label: empty.action_label(),
                        on_click: EventHandler::new(move |_| match empty {
                            EmptyKind::NoMatches => page.write().clear_filter(),
                            EmptyKind::NoUsers => page.write().open_modal(),
                        }),
                    }),
                }
            } else {
                UserTable { users: rows }
                p { class: "table-footer", "Showing {shown} of {total} users" }
            }

            if modal_open {
                UserModal {}
            }
        }
    }
}

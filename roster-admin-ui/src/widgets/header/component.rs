use dioxus::prelude::*;
use roster::page::AdminPage;

#[component]
pub fn Header() -> Element {
    let page = use_context::<Signal<AdminPage>>();

    let total = page.read().total_users();
    let active = page.read().active_users();

    rsx! {
        header { class: "app-header",
            h1 { class: "header-title", "User Management Console" }
            div { class: "header-actions",
                span { class: "status-badge", "{total} users" }
                span { class: "status-badge running", "{active} active" }
            }
        }
    }
}

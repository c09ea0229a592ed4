use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<crate::Route>();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Roster Admin" }
            }
            nav { class: "sidebar-nav",
                Link {
                    to: crate::Route::Users {},
                    class: if route == (crate::Route::Users {}) { "nav-item active" } else { "nav-item" },
                    "Users"
                }
            }
            div { class: "sidebar-footer",
                span { class: "status-dot healthy" }
                span { "In-memory session" }
            }
        }
    }
}

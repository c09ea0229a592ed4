use dioxus::prelude::*;

/// Button offered under an empty table.
#[derive(Clone, PartialEq)]
pub struct EmptyAction {
    pub label: &'static str,
    pub on_click: EventHandler<MouseEvent>,
}

/// Placeholder shown instead of the user table when there are no rows.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    description: String,
    action: Option<EmptyAction>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            span { class: "empty-icon", "{icon}" }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(EmptyAction { label, on_click }) = action {
                button {
                    class: "button secondary",
                    r#type: "button",
                    onclick: move |e| on_click.call(e),
                    "{label}"
                }
            }
        }
    }
}

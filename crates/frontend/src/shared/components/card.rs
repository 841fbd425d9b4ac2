use leptos::prelude::*;

const CARD_BASE: &str = "bg-white rounded-lg shadow-sm border border-slate-200";

pub fn card_class(extra: &str) -> String {
    if extra.is_empty() {
        CARD_BASE.to_string()
    } else {
        format!("{} {}", CARD_BASE, extra)
    }
}

/// Bordered white container
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(&class)>
            {children()}
        </div>
    }
}

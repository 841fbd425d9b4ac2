use crate::shared::icons::icon;
use contracts::dashboards::d100_onboarding::{IconKind, NavEntry};
use leptos::prelude::*;

const LINK_BASE: &str =
    "flex items-center py-4 px-4 my-1 rounded-lg text-slate-600 font-medium transition-colors duration-200";
pub const ACTIVE_ROW: &str = "bg-slate-100";
const IDLE_ROW: &str = "hover:bg-slate-50";

pub fn nav_link_class(active: bool) -> String {
    format!("{} {}", LINK_BASE, if active { ACTIVE_ROW } else { IDLE_ROW })
}

pub fn nav_icon_class(active: bool) -> &'static str {
    if active {
        "text-blue-500"
    } else {
        "text-slate-400"
    }
}

/// Sidebar row. Links are inert placeholders.
#[component]
pub fn NavItem(
    icon_kind: IconKind,
    #[prop(into)]
    label: String,
    #[prop(optional)]
    active: bool,
) -> impl IntoView {
    view! {
        <li>
            <a href="#" class=nav_link_class(active)>
                <span class=nav_icon_class(active)>{icon(icon_kind, None)}</span>
                <span class="ml-4">{label}</span>
            </a>
        </li>
    }
}

#[component]
pub fn SidebarNav(items: Vec<NavEntry>) -> impl IntoView {
    view! {
        <aside class="lg:col-span-1">
            <nav>
                <ul>
                    {items.into_iter().map(|item| {
                        view! {
                            <NavItem icon_kind=item.icon label=item.label active=item.active />
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

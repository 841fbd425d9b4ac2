use crate::shared::components::card::card_class;
use crate::shared::icons::icon;
use contracts::dashboards::d100_onboarding::{IconKind, QuickAccessEntry};
use leptos::prelude::*;

pub const QUICK_ACCESS_TITLE: &str = "Quick Access";

pub fn tile_class() -> String {
    card_class(
        "p-4 flex flex-col items-center justify-center text-center hover:shadow-md transition-shadow cursor-pointer",
    )
}

/// Tiles in input order as (icon, label) pairs.
pub fn tiles(items: &[QuickAccessEntry]) -> Vec<(IconKind, String)> {
    items
        .iter()
        .map(|item| (item.icon, item.name.clone()))
        .collect()
}

/// Shortcut tile
#[component]
pub fn QuickAccessItem(
    icon_kind: IconKind,
    #[prop(into)]
    name: String,
) -> impl IntoView {
    view! {
        <div class=tile_class()>
            {icon(icon_kind, None)}
            <span class="mt-2 text-sm font-semibold text-slate-600">{name}</span>
        </div>
    }
}

#[component]
pub fn QuickAccessSection(items: Vec<QuickAccessEntry>) -> impl IntoView {
    view! {
        <div class="xl:col-span-2">
            <h2 class="text-xl font-bold text-slate-800 mb-4">{QUICK_ACCESS_TITLE}</h2>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                {tiles(&items).into_iter().map(|(icon_kind, name)| {
                    view! { <QuickAccessItem icon_kind=icon_kind name=name /> }
                }).collect_view()}
            </div>
        </div>
    }
}

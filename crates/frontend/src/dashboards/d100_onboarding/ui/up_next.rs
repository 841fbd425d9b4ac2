use crate::shared::components::Card;
use contracts::dashboards::d100_onboarding::EventEntry;
use leptos::prelude::*;

pub const UP_NEXT_TITLE: &str = "Up Next";

/// One rendered list row: bold time followed by " - description".
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub time: String,
    pub detail: String,
}

impl EventRow {
    pub fn text(&self) -> String {
        format!("{}{}", self.time, self.detail)
    }
}

/// Rows in input order, one per event.
pub fn event_rows(events: &[EventEntry]) -> Vec<EventRow> {
    events
        .iter()
        .map(|event| EventRow {
            time: event.time.clone(),
            detail: format!(" - {}", event.description),
        })
        .collect()
}

/// Upcoming events, rendered in input order
#[component]
pub fn UpNextCard(events: Vec<EventEntry>) -> impl IntoView {
    let rows = event_rows(&events);

    view! {
        <Card class="p-6">
            <h2 class="text-xl font-bold text-slate-800 mb-4">{UP_NEXT_TITLE}</h2>
            <ul class="space-y-3 list-disc list-inside text-slate-600">
                {rows.into_iter().map(|row| {
                    view! {
                        <li>
                            <span class="font-semibold">{row.time}</span>
                            {row.detail}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </Card>
    }
}

use crate::shared::components::Card;
use contracts::dashboards::d100_onboarding::{CalendarCell, CalendarGrid};
use leptos::prelude::*;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "M", "Tu", "We", "Th", "Fr", "Sa"];
pub const WEEKEND_TEXT: &str = "text-red-400";
pub const HIGHLIGHT_CLASS: &str =
    "bg-blue-500 text-white rounded-full h-7 w-7 flex items-center justify-center";

pub fn cell_class(cell: &CalendarCell) -> String {
    format!(
        "p-1.5 flex justify-center items-center font-medium {}",
        if cell.weekend { WEEKEND_TEXT } else { "text-slate-700" }
    )
}

fn day_view(cell: &CalendarCell) -> AnyView {
    let label = cell.label();
    if cell.highlighted {
        view! { <span class=HIGHLIGHT_CLASS>{label}</span> }.into_any()
    } else {
        view! { <span>{label}</span> }.into_any()
    }
}

/// Month grid with banner, weekday row and one emphasized day
#[component]
pub fn CalendarWidget(grid: CalendarGrid) -> impl IntoView {
    let CalendarGrid { header, cells } = grid;

    view! {
        <Card>
            <div class="bg-blue-500 text-white text-center py-3 rounded-t-lg font-semibold">
                {header}
            </div>
            <div class="p-4">
                <div class="grid grid-cols-7 text-center text-xs text-slate-400 font-bold mb-2">
                    {WEEKDAY_LABELS.into_iter().map(|d| view! { <span>{d}</span> }).collect_view()}
                </div>
                <div class="grid grid-cols-7 text-center text-sm">
                    {cells.into_iter().map(|cell| {
                        view! { <div class=cell_class(&cell)>{day_view(&cell)}</div> }
                    }).collect_view()}
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_onboarding::DashboardData;

    #[test]
    fn test_weekend_and_highlight_styling() {
        let data = DashboardData::default();
        let grid = CalendarGrid::from_days("WEDNESDAY 16", &data.calendar_days, Some(10)).unwrap();

        let weekend: Vec<usize> = grid
            .cells
            .iter()
            .filter(|c| cell_class(c).ends_with(WEEKEND_TEXT))
            .map(|c| c.index)
            .collect();
        assert_eq!(weekend, vec![4, 11, 18, 25]);

        let emphasized: Vec<String> = grid
            .cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.label())
            .collect();
        assert_eq!(emphasized, vec!["10"]);
    }
}

use crate::shared::components::ProgressBar;
use crate::shared::icons::icon;
use contracts::dashboards::d100_onboarding::IconKind;
use leptos::prelude::*;

pub const DASHBOARD_TITLE: &str = "Welcome to Momentum";

pub fn completion_label(percentage: i64) -> String {
    format!("{}% Complete", percentage)
}

pub fn greeting(user_name: &str) -> String {
    format!("Hi, {}!", user_name)
}

/// Check mark, percentage text and progress bar
#[component]
pub fn CompletionProgress(percentage: i64) -> impl IntoView {
    view! {
        <div class="flex items-center mt-4 space-x-3">
            <div class="bg-white/20 rounded-full p-1">
                {icon(IconKind::CheckCircle, Some("text-white h-7 w-7"))}
            </div>
            <div>
                <span class="font-medium">{completion_label(percentage)}</span>
                <ProgressBar percentage=percentage />
            </div>
        </div>
    }
}

#[component]
pub fn DashboardHeader(
    #[prop(into)]
    user_name: String,
    completion_percentage: i64,
) -> impl IntoView {
    view! {
        <header class="bg-gradient-to-r from-blue-600 to-blue-500 rounded-xl p-8 text-white shadow-lg">
            <div class="flex justify-between items-start">
                <div>
                    <h1 class="text-3xl font-bold">{DASHBOARD_TITLE}</h1>
                    <CompletionProgress percentage=completion_percentage />
                </div>
                <div class="text-lg font-medium">{greeting(&user_name)}</div>
            </div>
        </header>
    }
}

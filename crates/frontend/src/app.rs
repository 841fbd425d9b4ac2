use crate::dashboards::OnboardingDashboard;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let data = config.data();
    let input = config.input;

    view! {
        <OnboardingDashboard
            user_name=input.user_name
            completion_percentage=input.completion_percentage
            buddy=input.buddy
            today=input.today
            data=data
        />
    }
}

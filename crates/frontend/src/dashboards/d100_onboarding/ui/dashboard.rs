use super::{
    CalendarWidget, DashboardHeader, OnboardingBuddyCard, QuickAccessSection, SidebarNav,
    UpNextCard,
};
use chrono::NaiveDate;
use contracts::dashboards::d100_onboarding::{
    BuddyRecord, DashboardData, DashboardInput, ResolvedDashboard,
};
use leptos::prelude::*;

/// Sanitizes caller input, logging every correction.
pub fn resolve_dashboard(input: DashboardInput, data: DashboardData) -> ResolvedDashboard {
    let resolution = input.resolve(data);
    for warning in &resolution.warnings {
        log::warn!("Onboarding dashboard input corrected: {}", warning);
    }
    resolution.dashboard
}

/// Onboarding dashboard page
///
/// Every prop is optional. Without overrides the page shows the built-in
/// mock data for "Alex Chen".
#[component]
pub fn OnboardingDashboard(
    #[prop(optional, into)]
    user_name: MaybeProp<String>,
    #[prop(optional, into)]
    completion_percentage: MaybeProp<i64>,
    #[prop(optional, into)]
    buddy: MaybeProp<BuddyRecord>,
    /// Compute the calendar for this date instead of showing the mock month
    #[prop(optional, into)]
    today: MaybeProp<NaiveDate>,
    /// Replaces the built-in nav, events, quick-access and calendar data
    #[prop(optional, into)]
    data: MaybeProp<DashboardData>,
) -> impl IntoView {
    let input = DashboardInput {
        user_name: user_name.get_untracked(),
        completion_percentage: completion_percentage.get_untracked(),
        buddy: buddy.get_untracked(),
        today: today.get_untracked(),
    };
    let ResolvedDashboard {
        user,
        buddy,
        nav,
        events,
        quick_access,
        calendar,
    } = resolve_dashboard(input, data.get_untracked().unwrap_or_default());

    view! {
        <div class="bg-slate-100 min-h-screen p-4 sm:p-6 lg:p-8 font-sans">
            <div class="max-w-7xl mx-auto">
                <DashboardHeader
                    user_name=user.name
                    completion_percentage=i64::from(user.completion.value())
                />

                <main class="mt-[-2rem] bg-white rounded-xl shadow-lg p-6 lg:p-8">
                    <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                        <SidebarNav items=nav />

                        <div class="lg:col-span-3">
                            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                                <div class="xl:col-span-2 space-y-6">
                                    <UpNextCard events=events />
                                </div>

                                <div class="xl:col-span-1">
                                    <CalendarWidget grid=calendar />
                                </div>

                                <div class="xl:col-span-3 grid grid-cols-1 xl:grid-cols-3 gap-6">
                                    <QuickAccessSection items=quick_access />
                                    <OnboardingBuddyCard buddy=buddy />
                                </div>
                            </div>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}

use crate::shared::components::Card;
use crate::shared::icons::avatar_icon;
use contracts::dashboards::d100_onboarding::BuddyRecord;
use leptos::prelude::*;

pub fn role_line(role: &str) -> String {
    format!("- {}", role)
}

#[component]
pub fn OnboardingBuddyCard(buddy: BuddyRecord) -> impl IntoView {
    view! {
        <div class="xl:col-span-1">
            <Card class="p-6 h-full flex flex-col justify-center">
                <div class="flex items-center">
                    <div class="bg-slate-200 rounded-full h-16 w-16 flex-shrink-0 flex items-center justify-center">
                        {avatar_icon()}
                    </div>
                    <div class="ml-4">
                        <h3 class="font-semibold text-slate-500 text-sm">"Your Onboarding Buddy"</h3>
                        <p class="font-bold text-slate-800">{buddy.name}</p>
                        <p class="text-sm text-slate-500">{role_line(&buddy.role)}</p>
                    </div>
                </div>
            </Card>
        </div>
    }
}

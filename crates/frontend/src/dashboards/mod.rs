pub mod d100_onboarding;

pub use d100_onboarding::ui::OnboardingDashboard;

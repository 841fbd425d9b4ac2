//! Onboarding dashboard components
//!
//! Every component is a pure mapping from its props to markup. Data flows
//! one way, from `OnboardingDashboard` down to the leaves.

mod buddy_card;
mod calendar;
mod dashboard;
mod header;
mod quick_access;
mod sidebar_nav;
mod up_next;

pub use buddy_card::OnboardingBuddyCard;
pub use calendar::CalendarWidget;
pub use dashboard::OnboardingDashboard;
pub use header::{CompletionProgress, DashboardHeader};
pub use quick_access::{QuickAccessItem, QuickAccessSection};
pub use sidebar_nav::{NavItem, SidebarNav};
pub use up_next::UpNextCard;

//! Onboarding dashboard contracts
//!
//! - dto.rs: display data shapes and the mock dataset
//! - calendar.rs: month grid model (fixed mock layout and real date arithmetic)
//! - validation.rs: input sanitization at the dashboard edge

pub mod calendar;
pub mod dto;
pub mod validation;

pub use calendar::{CalendarCell, CalendarGrid};
pub use dto::*;
pub use validation::{Resolution, ResolvedDashboard, ValidationError};

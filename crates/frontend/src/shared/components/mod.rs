pub mod card;
pub mod progress_bar;

pub use card::Card;
pub use progress_bar::ProgressBar;

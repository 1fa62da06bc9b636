pub mod modal;
pub mod progress;
pub mod search_input;
pub mod star_rating;
pub mod stat_card;
pub mod ui;

pub use modal::Modal;
pub use progress::ProgressBar;
pub use search_input::SearchInput;
pub use star_rating::StarRating;
pub use stat_card::StatCard;

pub mod summary;

pub use summary::{AnalyticsSummary, CategoryShare, MonthlySales};

//! Shared dashboard widgets

pub mod badge;
pub mod meter;
pub mod sparkline;

pub use badge::Badge;
pub use meter::Meter;
pub use sparkline::Sparkline;

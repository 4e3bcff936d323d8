//! Human-readable number formatting for dashboard figures.

pub mod decimal;
pub mod num;

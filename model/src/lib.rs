pub mod analytics;
pub mod position_metrics;
pub mod uniform;

pub use analytics::*;
pub use position_metrics::*;
pub use uniform::*;

mod carbon_results;
mod photo;
mod species;
mod tree_estimate;
mod tree_metrics;

pub use carbon_results::CarbonResults;
pub use photo::{ImageHandle, PhotoFile, PhotoRecord};
pub use species::SPECIES_CATALOG;
pub use tree_estimate::TreeEstimate;
pub use tree_metrics::TreeMetrics;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod utils;
pub mod views;

pub use app::{App, Command, CommandError, Flow};
pub use config::{ConfigError, ConfigOverrides, EstimatorConfig};

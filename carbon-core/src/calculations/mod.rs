//! Carbon calculation modules.
//!
//! This module provides the arithmetic that turns a tree's wood volume into
//! biomass, stored carbon, CO2-equivalent mass and carbon credits.

pub mod carbon;
pub mod common;

pub use carbon::{CarbonWorksheet, CarbonWorksheetConfig, CarbonWorksheetError};

//! Synthetic tree estimation.
//!
//! Stands in for a real measurement pipeline: metrics are drawn at random
//! and the carbon figures are derived from the drawn volume.

mod generator;

pub use generator::{
    AGE_RANGE_YEARS, DBH_RANGE_CM, EstimationError, EstimationGenerator, HEIGHT_RANGE_M,
    VOLUME_RANGE_M3,
};

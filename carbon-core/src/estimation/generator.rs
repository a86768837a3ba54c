//! Random tree metrics and the carbon figures derived from them.
//!
//! # Draws
//!
//! | Field        | Distribution                          |
//! |--------------|---------------------------------------|
//! | species      | uniform over [`SPECIES_CATALOG`]      |
//! | `height_m`   | uniform in [5, 30]                    |
//! | `dbh_cm`     | uniform in [10, 100]                  |
//! | `volume_m3`  | uniform in [0.2, 5]                   |
//! | `age_years`  | uniform integer in [5, 80]            |
//!
//! Draws are independent, and every call redraws all five. The random
//! source is supplied by the caller; results are not meant to be
//! reproducible between runs.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use carbon_core::estimation::EstimationGenerator;
//! use carbon_core::SPECIES_CATALOG;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let estimate = EstimationGenerator::default().generate(&mut rng).unwrap();
//!
//! assert!(SPECIES_CATALOG.contains(&estimate.metrics.species.as_str()));
//! assert!((5..=80).contains(&estimate.metrics.age_years));
//! ```

use std::ops::RangeInclusive;

use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::{CarbonWorksheet, CarbonWorksheetError};
use crate::{SPECIES_CATALOG, TreeEstimate, TreeMetrics};

pub const HEIGHT_RANGE_M: RangeInclusive<f64> = 5.0..=30.0;
pub const DBH_RANGE_CM: RangeInclusive<f64> = 10.0..=100.0;
pub const VOLUME_RANGE_M3: RangeInclusive<f64> = 0.2..=5.0;
pub const AGE_RANGE_YEARS: RangeInclusive<u32> = 5..=80;

/// Errors that can occur while generating an estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimationError {
    /// A floating-point draw could not be represented as a decimal.
    #[error("{field} draw {value} cannot be represented as a decimal")]
    UnrepresentableDraw { field: &'static str, value: String },

    /// The carbon worksheet rejected the drawn volume.
    #[error(transparent)]
    Worksheet(#[from] CarbonWorksheetError),
}

/// Produces [`TreeEstimate`]s from a random source.
#[derive(Debug, Clone, Default)]
pub struct EstimationGenerator {
    worksheet: CarbonWorksheet,
}

impl EstimationGenerator {
    /// Creates a generator that derives carbon figures with `worksheet`.
    pub fn new(worksheet: CarbonWorksheet) -> Self {
        Self { worksheet }
    }

    /// Draws a fresh set of metrics and derives the carbon figures.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationError`] if a draw is unrepresentable or the
    /// worksheet rejects the volume. Neither happens with the standard
    /// factors and ranges.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<TreeEstimate, EstimationError> {
        let metrics = synthesize_metrics(rng)?;
        let carbon = self.worksheet.calculate(metrics.volume_m3)?;

        debug!(
            species = %metrics.species,
            volume_m3 = %metrics.volume_m3,
            credits = %carbon.credits,
            "Generated tree estimate"
        );

        Ok(TreeEstimate { metrics, carbon })
    }
}

/// Draws the five biometric values.
pub(crate) fn synthesize_metrics<R: Rng + ?Sized>(
    rng: &mut R
) -> Result<TreeMetrics, EstimationError> {
    let species = SPECIES_CATALOG[rng.gen_range(0..SPECIES_CATALOG.len())];
    let height_m = draw_decimal(rng, "height_m", HEIGHT_RANGE_M)?;
    let dbh_cm = draw_decimal(rng, "dbh_cm", DBH_RANGE_CM)?;
    let volume_m3 = draw_decimal(rng, "volume_m3", VOLUME_RANGE_M3)?;
    let age_years = rng.gen_range(AGE_RANGE_YEARS);

    Ok(TreeMetrics {
        species: species.to_string(),
        height_m,
        dbh_cm,
        volume_m3,
        age_years,
    })
}

fn draw_decimal<R: Rng + ?Sized>(
    rng: &mut R,
    field: &'static str,
    range: RangeInclusive<f64>,
) -> Result<Decimal, EstimationError> {
    let value: f64 = rng.gen_range(range);
    Decimal::try_from(value).map_err(|_| EstimationError::UnrepresentableDraw {
        field,
        value: value.to_string(),
    })
}

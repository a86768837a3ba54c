//! Carbon worksheet: volume to carbon credits.
//!
//! This module converts a tree's estimated wood volume into the four carbon
//! figures shown to the user. Every figure is a pure function of the volume;
//! no randomness enters this stage.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Wood volume in cubic metres |
//! | 2    | Biomass: Line 1 × wood density (700 kg/m³) |
//! | 3    | Stored carbon: Line 2 × carbon fraction (50%) |
//! | 4    | CO2 equivalent: Line 3 × 3.67 ÷ 1000 (tonnes) |
//! | 5    | Credits: Line 4 ÷ tonnes per credit (1 credit ≈ 1 tCO2e) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use carbon_core::calculations::{CarbonWorksheet, CarbonWorksheetConfig};
//!
//! let worksheet = CarbonWorksheet::new(CarbonWorksheetConfig::default());
//! let result = worksheet.calculate(dec!(1.25)).unwrap();
//!
//! assert_eq!(result.biomass_kg, dec!(875));
//! assert_eq!(result.carbon_kg, dec!(437.5));
//! assert_eq!(result.co2e_tonnes, dec!(1.605625));
//! assert_eq!(result.credits, dec!(1.605625));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::CarbonResults;

/// Errors that can occur during carbon worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarbonWorksheetError {
    /// The wood density must be positive.
    #[error("wood density must be positive, got {0}")]
    InvalidWoodDensity(Decimal),

    /// The carbon fraction must be between 0 and 1 (exclusive of 0).
    #[error("carbon fraction must be between 0 and 1, got {0}")]
    InvalidCarbonFraction(Decimal),

    /// The CO2-to-carbon ratio must be positive.
    #[error("CO2 to carbon ratio must be positive, got {0}")]
    InvalidCo2Ratio(Decimal),

    /// The tonnes-per-credit ratio must be positive.
    #[error("tonnes per credit must be positive, got {0}")]
    InvalidTonnesPerCredit(Decimal),

    /// A tree cannot have a negative volume.
    #[error("wood volume must not be negative, got {0}")]
    NegativeVolume(Decimal),
}

/// Conversion factors for the carbon worksheet.
///
/// The [`Default`] value holds the standard factors every estimate uses.
/// Other values exist so the worksheet can be exercised in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonWorksheetConfig {
    /// Wood density in kilograms per cubic metre (Line 2).
    pub wood_density_kg_per_m3: Decimal,

    /// Share of dry biomass that is carbon (Line 3).
    pub carbon_fraction: Decimal,

    /// Molar mass ratio of CO2 to carbon, 44/12 rounded to 3.67 (Line 4).
    pub co2_to_carbon_ratio: Decimal,

    /// Tonnes of CO2e that make one credit (Line 5).
    pub tonnes_per_credit: Decimal,
}

impl Default for CarbonWorksheetConfig {
    fn default() -> Self {
        Self {
            wood_density_kg_per_m3: Decimal::from(700),
            carbon_fraction: Decimal::new(5, 1),
            co2_to_carbon_ratio: Decimal::new(367, 2),
            tonnes_per_credit: Decimal::ONE,
        }
    }
}

impl CarbonWorksheetConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`CarbonWorksheetError`] if:
    /// - `wood_density_kg_per_m3` is not positive
    /// - `carbon_fraction` is not in (0, 1]
    /// - `co2_to_carbon_ratio` is not positive
    /// - `tonnes_per_credit` is not positive
    pub fn validate(&self) -> Result<(), CarbonWorksheetError> {
        if self.wood_density_kg_per_m3 <= Decimal::ZERO {
            return Err(CarbonWorksheetError::InvalidWoodDensity(
                self.wood_density_kg_per_m3,
            ));
        }
        if self.carbon_fraction <= Decimal::ZERO || self.carbon_fraction > Decimal::ONE {
            return Err(CarbonWorksheetError::InvalidCarbonFraction(
                self.carbon_fraction,
            ));
        }
        if self.co2_to_carbon_ratio <= Decimal::ZERO {
            return Err(CarbonWorksheetError::InvalidCo2Ratio(
                self.co2_to_carbon_ratio,
            ));
        }
        if self.tonnes_per_credit <= Decimal::ZERO {
            return Err(CarbonWorksheetError::InvalidTonnesPerCredit(
                self.tonnes_per_credit,
            ));
        }
        Ok(())
    }
}

/// Calculator for the carbon worksheet.
#[derive(Debug, Clone)]
pub struct CarbonWorksheet {
    config: CarbonWorksheetConfig,
}

impl Default for CarbonWorksheet {
    fn default() -> Self {
        Self::new(CarbonWorksheetConfig::default())
    }
}

impl CarbonWorksheet {
    /// Creates a new carbon worksheet calculator with the given factors.
    pub fn new(config: CarbonWorksheetConfig) -> Self {
        Self { config }
    }

    /// Calculates every carbon figure from a single volume.
    ///
    /// All four results come from the same `volume_m3`; none is computed on
    /// its own. Values are exact and unrounded.
    ///
    /// # Errors
    ///
    /// Returns [`CarbonWorksheetError`] if the configuration is invalid or
    /// the volume is negative.
    pub fn calculate(
        &self,
        volume_m3: Decimal,
    ) -> Result<CarbonResults, CarbonWorksheetError> {
        self.config.validate()?;

        if volume_m3 < Decimal::ZERO {
            warn!(volume_m3 = %volume_m3, "Rejecting negative wood volume");
            return Err(CarbonWorksheetError::NegativeVolume(volume_m3));
        }

        // Line 2
        let biomass_kg = self.biomass(volume_m3);
        // Line 3
        let carbon_kg = self.stored_carbon(biomass_kg);
        // Line 4
        let co2e_tonnes = self.co2_equivalent(carbon_kg);
        // Line 5
        let credits = self.credits(co2e_tonnes);

        Ok(CarbonResults {
            biomass_kg,
            carbon_kg,
            co2e_tonnes,
            credits,
        })
    }

    fn biomass(
        &self,
        volume_m3: Decimal,
    ) -> Decimal {
        volume_m3 * self.config.wood_density_kg_per_m3
    }

    fn stored_carbon(
        &self,
        biomass_kg: Decimal,
    ) -> Decimal {
        biomass_kg * self.config.carbon_fraction
    }

    /// Converts kilograms of carbon into tonnes of CO2 equivalent.
    fn co2_equivalent(
        &self,
        carbon_kg: Decimal,
    ) -> Decimal {
        carbon_kg * self.config.co2_to_carbon_ratio / Decimal::ONE_THOUSAND
    }

    fn credits(
        &self,
        co2e_tonnes: Decimal,
    ) -> Decimal {
        co2e_tonnes / self.config.tonnes_per_credit
    }
}

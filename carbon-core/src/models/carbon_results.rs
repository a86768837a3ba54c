use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grams of CO2 emitted per mile by an average passenger car.
const CAR_CO2_GRAMS_PER_MILE: i64 = 404;

const GRAMS_PER_TONNE: i64 = 1_000_000;

/// Carbon figures derived from a tree's wood volume.
///
/// Produced only by [`crate::calculations::CarbonWorksheet`], always as a
/// set, and stored alongside the [`crate::TreeMetrics`] they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonResults {
    pub biomass_kg: Decimal,
    pub carbon_kg: Decimal,
    pub co2e_tonnes: Decimal,
    pub credits: Decimal,
}

impl CarbonResults {
    /// Miles an average car drives to emit the same CO2 the tree stores.
    pub fn driving_equivalent_miles(&self) -> Decimal {
        self.co2e_tonnes * Decimal::from(GRAMS_PER_TONNE) / Decimal::from(CAR_CO2_GRAMS_PER_MILE)
    }
}

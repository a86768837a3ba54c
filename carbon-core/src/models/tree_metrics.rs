use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Biometric values synthesized for one tree.
///
/// Values are stored unrounded; display precision is applied by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub species: String,
    pub height_m: Decimal,
    /// Diameter at breast height (about 1.3 m above ground).
    pub dbh_cm: Decimal,
    pub volume_m3: Decimal,
    pub age_years: u32,
}

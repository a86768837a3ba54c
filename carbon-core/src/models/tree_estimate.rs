use serde::{Deserialize, Serialize};

use super::{CarbonResults, TreeMetrics};

/// One generated estimate: the tree metrics and the carbon figures derived
/// from them. The two are created, replaced and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEstimate {
    pub metrics: TreeMetrics,
    pub carbon: CarbonResults,
}

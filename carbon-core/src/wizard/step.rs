use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of the wizard, in display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WizardStep {
    #[default]
    Welcome,
    ReferencePhoto,
    TreePhotos,
    TreeAnalysis,
    CarbonCredits,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Welcome,
        WizardStep::ReferencePhoto,
        WizardStep::TreePhotos,
        WizardStep::TreeAnalysis,
        WizardStep::CarbonCredits,
    ];

    /// Zero-based position, 0 for Welcome through 4 for Carbon Credits.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::ReferencePhoto => "Reference Photo",
            Self::TreePhotos => "Tree Photos",
            Self::TreeAnalysis => "Tree Analysis",
            Self::CarbonCredits => "Carbon Credits",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.title())
    }
}

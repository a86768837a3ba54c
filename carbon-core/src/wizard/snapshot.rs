use serde::Serialize;

use super::step::WizardStep;
use crate::{PhotoRecord, TreeEstimate};

/// Display data for one uploaded photo, without its image handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoSummary {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl From<&PhotoRecord> for PhotoSummary {
    fn from(record: &PhotoRecord) -> Self {
        Self {
            name: record.name.clone(),
            byte_size: record.byte_size,
            mime_type: record.mime_type.clone(),
        }
    }
}

/// A point-in-time copy of the wizard, used to render a view without
/// holding the wizard lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub current_step: WizardStep,
    pub reference_uploaded: bool,
    pub reference_photo: Option<PhotoSummary>,
    pub tree_photos: Vec<PhotoSummary>,
    pub is_processing: bool,
    pub model_created: bool,
    pub estimate: Option<TreeEstimate>,
    pub can_advance: bool,
    pub can_generate: bool,
}

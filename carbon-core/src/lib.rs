pub mod calculations;
pub mod estimation;
pub mod models;
pub mod wizard;

pub use models::*;
pub use wizard::{
    GenerationSession, ImageHost, MemoryImageHost, SessionConfig, Wizard, WizardError,
    WizardSnapshot, WizardStep,
};

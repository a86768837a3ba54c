//! The step wizard that sequences an estimation.
//!
//! - `step` - the five named steps and their order
//! - `controller` - [`Wizard`], the state machine and its transition guards
//! - `image_host` - acquiring and releasing displayable image handles
//! - `session` - async driver that runs the synthetic generation delay

mod controller;
mod image_host;
pub mod session;
mod snapshot;
mod step;

pub use controller::{GenerationTicket, TreePhotoUpload, Wizard, WizardError};
pub use image_host::{ImageHost, MemoryImageHost};
pub use session::{GenerationSession, SessionConfig};
pub use snapshot::{PhotoSummary, WizardSnapshot};
pub use step::WizardStep;

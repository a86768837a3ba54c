//! Status bar listing the commands available on the current step.

use std::fmt;

use carbon_core::{WizardSnapshot, WizardStep};

/// Command hint for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHint {
    pub command: &'static str,
    pub action: &'static str,
}

impl CommandHint {
    pub const fn new(command: &'static str, action: &'static str) -> Self {
        Self { command, action }
    }
}

/// Renders hints as `next: Continue │ back: Back │ ...`.
pub struct StatusBar<'a>(pub &'a [CommandHint]);

impl fmt::Display for StatusBar<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, hint) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" │ ")?;
            }
            write!(f, "{}: {}", hint.command, hint.action)?;
        }
        Ok(())
    }
}

/// Common command hints.
pub mod hints {
    use super::CommandHint;

    pub const START: CommandHint = CommandHint::new("next", "Start");
    pub const NEXT: CommandHint = CommandHint::new("next", "Continue");
    pub const BACK: CommandHint = CommandHint::new("back", "Back");
    pub const REFERENCE: CommandHint = CommandHint::new("reference <path>", "Upload reference");
    pub const PHOTOS: CommandHint = CommandHint::new("photos <path>...", "Add photos");
    pub const GENERATE: CommandHint = CommandHint::new("generate", "Generate 3D model");
    pub const WAIT: CommandHint = CommandHint::new("wait", "Wait for model");
    pub const RESET: CommandHint = CommandHint::new("reset", "Measure another tree");
    pub const HELP: CommandHint = CommandHint::new("help", "Commands");
    pub const QUIT: CommandHint = CommandHint::new("quit", "Quit");
}

/// Hints for what can be done from `snapshot` right now.
pub fn hints_for(snapshot: &WizardSnapshot) -> Vec<CommandHint> {
    let mut list = Vec::new();

    match snapshot.current_step {
        WizardStep::Welcome => list.push(hints::START),
        WizardStep::ReferencePhoto => list.push(hints::REFERENCE),
        WizardStep::TreePhotos => {
            list.push(hints::PHOTOS);
            if snapshot.can_generate {
                list.push(hints::GENERATE);
            }
            if snapshot.is_processing {
                list.push(hints::WAIT);
            }
        }
        WizardStep::TreeAnalysis => {}
        WizardStep::CarbonCredits => list.push(hints::RESET),
    }

    if snapshot.current_step != WizardStep::Welcome && snapshot.can_advance {
        list.push(hints::NEXT);
    }
    if snapshot.current_step != WizardStep::Welcome {
        list.push(hints::BACK);
    }
    list.extend([hints::HELP, hints::QUIT]);
    list
}

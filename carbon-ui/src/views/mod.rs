//! Plain-text views for each wizard step.
//!
//! Every view renders from a [`WizardSnapshot`], never from the live
//! wizard, so rendering never holds the session lock.
//!
//! - `progress_bar` - step tracker shown above every step but Welcome
//! - `welcome` through `carbon_credits` - one body per step
//! - `status_bar` - commands available on the current step

mod carbon_credits;
mod progress_bar;
mod reference_photo;
mod status_bar;
mod tree_analysis;
mod tree_photos;
mod welcome;

use std::fmt;

use carbon_core::{WizardSnapshot, WizardStep};

pub use progress_bar::ProgressBar;
pub use status_bar::{CommandHint, StatusBar, hints, hints_for};

/// Width of the horizontal rules between view sections.
const RULE_WIDTH: usize = 60;

/// The complete screen for the snapshot's current step.
pub struct StepView<'a>(pub &'a WizardSnapshot);

impl fmt::Display for StepView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let snapshot = self.0;

        if snapshot.current_step != WizardStep::Welcome {
            writeln!(f, "{}", ProgressBar(snapshot.current_step))?;
            rule(f)?;
        }

        match snapshot.current_step {
            WizardStep::Welcome => welcome::write(f)?,
            WizardStep::ReferencePhoto => reference_photo::write(f, snapshot)?,
            WizardStep::TreePhotos => tree_photos::write(f, snapshot)?,
            WizardStep::TreeAnalysis => tree_analysis::write(f, snapshot)?,
            WizardStep::CarbonCredits => carbon_credits::write(f, snapshot)?,
        }

        rule(f)?;
        writeln!(f, "{}", StatusBar(&hints_for(snapshot)))
    }
}

/// Renders the screen for `snapshot`.
pub fn render(snapshot: &WizardSnapshot) -> String {
    StepView(snapshot).to_string()
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "─".repeat(RULE_WIDTH))
}

/// Writes a step heading such as `Step 2: Upload Tree Photos`.
fn heading(
    f: &mut fmt::Formatter<'_>,
    text: &str,
) -> fmt::Result {
    writeln!(f, "{text}")?;
    writeln!(f)
}


#[cfg(test)]
mod tests {
    use super::fixtures::snapshot;
    use super::*;

    #[test]
    fn welcome_has_no_progress_bar() {
        let screen = render(&snapshot(WizardStep::Welcome));

        assert!(screen.contains("Carbon Credits Estimator"));
        assert!(!screen.contains("[1 Welcome]"));
        assert!(!screen.contains("✓"));
    }

    #[test]
    fn later_steps_show_progress_bar() {
        let screen = render(&snapshot(WizardStep::ReferencePhoto));

        assert!(screen.starts_with("✓ Welcome"));
        assert!(screen.contains("[2 Reference Photo]"));
    }

    #[test]
    fn every_screen_ends_with_status_bar() {
        for step in WizardStep::ALL {
            let screen = render(&snapshot(step));
            let last = screen.lines().last().unwrap_or_default();

            assert!(last.contains("help"), "{step}: {last}");
        }
    }
}

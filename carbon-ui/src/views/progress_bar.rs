use std::fmt;

use carbon_core::WizardStep;

/// One-line step tracker.
///
/// Completed steps show a check mark, the current step is bracketed and
/// later steps show their number: `✓ Welcome ─ [2 Reference Photo] ─ 3 Tree Photos ...`
pub struct ProgressBar(pub WizardStep);

impl fmt::Display for ProgressBar {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let current = self.0;

        for (i, step) in WizardStep::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ─ ")?;
            }
            let number = step.index() + 1;
            if *step < current {
                write!(f, "✓ {step}")?;
            } else if *step == current {
                write!(f, "[{number} {step}]")?;
            } else {
                write!(f, "{number} {step}")?;
            }
        }
        Ok(())
    }
}

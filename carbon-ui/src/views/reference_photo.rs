use std::fmt;

use carbon_core::WizardSnapshot;

use super::heading;
use crate::utils::format_bytes;

pub(super) fn write(
    f: &mut fmt::Formatter<'_>,
    snapshot: &WizardSnapshot,
) -> fmt::Result {
    heading(f, "Step 1: Upload Reference Photo")?;
    writeln!(
        f,
        "Take a photo with a person standing next to the tree for scale."
    )?;
    writeln!(f)?;

    match &snapshot.reference_photo {
        Some(photo) if snapshot.reference_uploaded => {
            writeln!(f, "  {} ({})", photo.name, format_bytes(photo.byte_size))?;
            writeln!(f, "✓ Reference detected successfully")?;
            writeln!(f, "  Person detected - scale calibrated")
        }
        _ => writeln!(f, "No reference photo yet. Use `reference <path>` to upload one."),
    }
}

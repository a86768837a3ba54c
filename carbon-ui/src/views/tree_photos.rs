use std::fmt;

use carbon_core::WizardSnapshot;

use super::heading;
use crate::utils::format_bytes;

/// Photos listed by name before the rest are summarized as "+N more".
const LISTED_PHOTOS: usize = 8;

pub(super) fn write(
    f: &mut fmt::Formatter<'_>,
    snapshot: &WizardSnapshot,
) -> fmt::Result {
    heading(f, "Step 2: Upload Tree Photos")?;
    writeln!(
        f,
        "Take photos of the tree from multiple angles for 3D reconstruction."
    )?;
    writeln!(f)?;

    let photos = &snapshot.tree_photos;
    if photos.is_empty() {
        return writeln!(f, "No tree photos yet. Use `photos <path>...` to add some.");
    }

    for (i, photo) in photos.iter().take(LISTED_PHOTOS).enumerate() {
        writeln!(
            f,
            "  {:>2}. {} ({})",
            i + 1,
            photo.name,
            format_bytes(photo.byte_size)
        )?;
    }
    if photos.len() > LISTED_PHOTOS {
        writeln!(f, "  +{} more", photos.len() - LISTED_PHOTOS)?;
    }
    writeln!(f)?;
    writeln!(f, "✓ {} photos uploaded", photos.len())?;

    if snapshot.is_processing {
        writeln!(f, "… Generating 3D model...")
    } else if snapshot.model_created {
        writeln!(f, "✓ 3D model created successfully")
    } else {
        writeln!(f, "Run `generate` when you're done uploading all photos.")
    }
}

use std::fmt;

use carbon_core::WizardSnapshot;

use super::heading;
use crate::utils::format_decimal;

pub(super) fn write(
    f: &mut fmt::Formatter<'_>,
    snapshot: &WizardSnapshot,
) -> fmt::Result {
    heading(f, "Step 3: Tree Analysis")?;

    let Some(estimate) = &snapshot.estimate else {
        return writeln!(f, "No 3D model has been generated yet.");
    };
    let metrics = &estimate.metrics;

    writeln!(f, "Tree Measurements")?;
    writeln!(f, "Generated from 3D model analysis")?;
    writeln!(f)?;

    let rows = [
        ("Species", metrics.species.clone()),
        ("Tree Height", format!("{} m", format_decimal(metrics.height_m, 1))),
        (
            "DBH (Diameter at Breast Height)",
            format!("{} cm", format_decimal(metrics.dbh_cm, 0)),
        ),
        (
            "Estimated Volume",
            format!("{} m³", format_decimal(metrics.volume_m3, 1)),
        ),
        ("Tree Age (estimated)", format!("{} years", metrics.age_years)),
    ];
    for (label, value) in rows {
        writeln!(f, "  {label:<32} {value}")?;
    }
    Ok(())
}

use std::fmt;

use carbon_core::WizardSnapshot;

use super::heading;
use crate::utils::{format_decimal, format_whole_with_commas};

pub(super) fn write(
    f: &mut fmt::Formatter<'_>,
    snapshot: &WizardSnapshot,
) -> fmt::Result {
    heading(f, "Step 4: Carbon Credits Results")?;

    let Some(estimate) = &snapshot.estimate else {
        return writeln!(f, "No 3D model has been generated yet.");
    };
    let carbon = &estimate.carbon;

    writeln!(f, "Carbon Analysis Complete")?;
    writeln!(f, "Environmental impact calculated")?;
    writeln!(f)?;

    let rows = [
        (
            "Total Biomass",
            format!("{} kg", format_decimal(carbon.biomass_kg, 0)),
            "Above & below ground biomass",
        ),
        (
            "Carbon Stored",
            format!("{} kg", format_decimal(carbon.carbon_kg, 0)),
            "50% of total biomass",
        ),
        (
            "CO₂ Equivalent",
            format!("{} tCO₂e", format_decimal(carbon.co2e_tonnes, 2)),
            "Carbon × 3.67 conversion factor",
        ),
        (
            "Credits Earned",
            format!("≈ {} credits", format_decimal(carbon.credits, 2)),
            "Based on verified standards",
        ),
    ];
    for (label, value, description) in rows {
        writeln!(f, "  {label:<16} {value:<16} {description}")?;
    }

    writeln!(f)?;
    writeln!(
        f,
        "This tree sequesters approximately {} tonnes of CO₂",
        format_decimal(carbon.co2e_tonnes, 2)
    )?;
    writeln!(
        f,
        "Equivalent to driving {} miles in an average car",
        format_whole_with_commas(carbon.driving_equivalent_miles())
    )
}

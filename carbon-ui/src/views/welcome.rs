use std::fmt;

pub(super) fn write(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Carbon Credits Estimator")?;
    writeln!(f, "MVP Demo")?;
    writeln!(f)?;
    writeln!(
        f,
        "Upload photos of trees to generate 3D models and calculate carbon\n\
         storage potential. Get instant estimates for carbon credits based on\n\
         biomass analysis."
    )?;
    writeln!(f)?;
    writeln!(f, "How it works")?;
    for line in [
        "Upload reference photo for scale",
        "Take multiple tree photos",
        "AI generates 3D model",
        "Calculate carbon storage",
        "Estimate credit value",
    ] {
        writeln!(f, "  • {line}")?;
    }
    Ok(())
}

use crate::domain::model::{Assessment, Category, PackageSpec};

/// Volume (cm³) at or above which a package is bulky.
pub const VOLUME_LIMIT_CM3: f64 = 1_000_000.0;
/// Single dimension (cm) at or above which a package is bulky.
pub const DIMENSION_LIMIT_CM: f64 = 150.0;
/// Mass (kg) at or above which a package is heavy.
pub const MASS_LIMIT_KG: f64 = 20.0;

pub fn is_bulky(spec: &PackageSpec) -> bool {
    exceeds_volume(spec) || exceeds_dimension(spec)
}

pub fn is_heavy(spec: &PackageSpec) -> bool {
    spec.mass() >= MASS_LIMIT_KG
}

/// Maps a validated package to its handling category. Never fails.
pub fn classify(spec: &PackageSpec) -> Category {
    category_for(is_bulky(spec), is_heavy(spec))
}

/// Like [`classify`], but also reports which rules fired.
pub fn assess(spec: &PackageSpec) -> Assessment {
    let bulky = is_bulky(spec);
    let heavy = is_heavy(spec);

    let mut remarks = Vec::new();
    if exceeds_dimension(spec) {
        remarks.push(format!("Dimension >= {}cm", DIMENSION_LIMIT_CM));
    }
    if exceeds_volume(spec) {
        remarks.push(format!("Volume >= {}cm³", VOLUME_LIMIT_CM3));
    }
    if heavy {
        remarks.push(format!("Mass >= {}kg", MASS_LIMIT_KG));
    }
    if remarks.is_empty() {
        remarks.push("Not bulky nor heavy".to_string());
    }

    let category = category_for(bulky, heavy);
    tracing::debug!(
        "Classified {} as {} (bulky: {}, heavy: {})",
        spec,
        category,
        bulky,
        heavy
    );

    Assessment {
        package: *spec,
        category,
        bulky,
        heavy,
        remarks,
    }
}

fn category_for(bulky: bool, heavy: bool) -> Category {
    match (bulky, heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    }
}

fn exceeds_volume(spec: &PackageSpec) -> bool {
    spec.volume() >= VOLUME_LIMIT_CM3
}

fn exceeds_dimension(spec: &PackageSpec) -> bool {
    spec.dimensions().iter().any(|&d| d >= DIMENSION_LIMIT_CM)
}

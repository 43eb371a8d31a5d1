//! Clinic display-name resolution.

/// Canonical clinic id → display name mapping.
///
/// The display name doubles as the `clinic_name` filter key on the shared
/// remote tables, so this list must agree with the values ingested there.
const CLINIC_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("klinik-bandar-utama", "Klinik Bandar Utama"),
    ("klinik-sri-hartamas", "Klinik Sri Hartamas"),
    ("pusat-kesihatan-setapak", "Pusat Kesihatan Setapak"),
    ("klinik-desa-jaya", "Klinik Desa Jaya"),
];

/// Resolves the display name for a clinic.
///
/// A non-empty explicit name wins verbatim. Otherwise known ids resolve via
/// the canonical mapping, and unknown ids degrade to a title-cased form of
/// the id itself. Total: same input always yields the same non-empty output
/// for any non-empty id.
pub fn resolve_clinic_name(clinic_id: &str, explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        if !name.trim().is_empty() {
            return name.to_string();
        }
    }

    if let Some((_, name)) = CLINIC_DISPLAY_NAMES.iter().find(|(id, _)| *id == clinic_id) {
        return (*name).to_string();
    }

    let titled = title_case(clinic_id);
    match titled.is_empty() {
        true => clinic_id.to_string(),
        false => titled,
    }
}

/// Replaces separators with spaces and capitalizes each word.
fn title_case(id: &str) -> String {
    id.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

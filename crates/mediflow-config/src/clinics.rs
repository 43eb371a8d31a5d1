//! Static clinic directory.
//!
//! All clinics share the same remote tables; the directory only feeds the
//! public listing endpoints and seeds the table registry with known ids.

use serde::{Deserialize, Serialize};

/// Public profile of one clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicProfile {
    pub clinic_id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub operating_hours: String,
    pub languages_supported: Vec<String>,
    pub services: Vec<String>,
    pub is_active: bool,
}

/// Returns the configured clinic directory.
pub fn clinic_directory() -> Vec<ClinicProfile> {
    vec![
        ClinicProfile {
            clinic_id: "klinik-bandar-utama".to_string(),
            name: "Klinik Bandar Utama".to_string(),
            address: "Bandar Utama, Petaling Jaya, Selangor".to_string(),
            phone: "+60-3-7725-0123".to_string(),
            email: Some("info@klinikbandarutama.com".to_string()),
            operating_hours: "Mon-Fri: 8:00AM-10:00PM, Sat-Sun: 8:00AM-6:00PM".to_string(),
            languages_supported: vec!["BM".into(), "EN".into(), "ZH".into()],
            services: vec![
                "General Consultation".into(),
                "Health Screening".into(),
                "Vaccination".into(),
                "Minor Surgery".into(),
            ],
            is_active: true,
        },
        ClinicProfile {
            clinic_id: "klinik-sri-hartamas".to_string(),
            name: "Klinik Sri Hartamas".to_string(),
            address: "Sri Hartamas, Kuala Lumpur".to_string(),
            phone: "+60-3-6201-9876".to_string(),
            email: Some("contact@klinikshartamas.com".to_string()),
            operating_hours: "Mon-Fri: 9:00AM-9:00PM, Sat: 9:00AM-5:00PM, Sun: Closed".to_string(),
            languages_supported: vec!["BM".into(), "EN".into(), "TA".into()],
            services: vec![
                "Family Medicine".into(),
                "Pediatrics".into(),
                "Women's Health".into(),
                "Travel Medicine".into(),
            ],
            is_active: true,
        },
        ClinicProfile {
            clinic_id: "pusat-kesihatan-setapak".to_string(),
            name: "Pusat Kesihatan Setapak".to_string(),
            address: "Setapak, Kuala Lumpur".to_string(),
            phone: "+60-3-4142-5678".to_string(),
            email: Some("info@pksetapak.gov.my".to_string()),
            operating_hours: "Mon-Sun: 8:00AM-12:00AM (24 hours emergency)".to_string(),
            languages_supported: vec!["BM".into(), "EN".into(), "ZH".into(), "TA".into()],
            services: vec![
                "Emergency Care".into(),
                "Maternal Care".into(),
                "Immunization".into(),
                "Chronic Disease Management".into(),
            ],
            is_active: true,
        },
    ]
}

/// Looks up one clinic profile by id.
pub fn find_clinic(clinic_id: &str) -> Option<ClinicProfile> {
    clinic_directory()
        .into_iter()
        .find(|c| c.clinic_id == clinic_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_ids_are_unique() {
        let clinics = clinic_directory();
        let mut ids: Vec<_> = clinics.iter().map(|c| c.clinic_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), clinics.len());
    }

    #[test]
    fn test_find_clinic() {
        assert!(find_clinic("klinik-bandar-utama").is_some());
        assert!(find_clinic("no-such-clinic").is_none());
    }

    #[test]
    fn test_directory_names_match_resolver() {
        for clinic in clinic_directory() {
            assert_eq!(
                crate::resolve_clinic_name(&clinic.clinic_id, None),
                clinic.name
            );
        }
    }
}

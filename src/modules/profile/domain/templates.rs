use serde::Serialize;

use super::entities::ProfileRecord;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    About,
    Services,
    Education,
    MedicalExperience,
    Experience,
    Internships,
    Certifications,
    Publications,
    Conferences,
    Achievements,
    Skills,
    Languages,
    Interests,
    Memberships,
    SocialLinks,
}

/// Placeholder personal info a template shows when no profile is loaded.
#[derive(Debug)]
pub struct TemplateDefaults {
    pub full_name: &'static str,
    pub professional_title: &'static str,
    pub phone_number: &'static str,
    pub professional_email: &'static str,
    pub location: &'static str,
    pub address: &'static str,
}

#[derive(Debug)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub default_specialty: &'static str,
    pub defaults: TemplateDefaults,
    pub sections: &'static [SectionId],
}

impl TemplateSpec {
    /// The template's default record: personal info only, every list absent.
    ///
    /// Built fresh from `'static` data so callers can never alter the
    /// template's constants.
    pub fn default_record(&self) -> ProfileRecord {
        let d = &self.defaults;
        ProfileRecord {
            full_name: Some(d.full_name.to_string()),
            professional_title: Some(d.professional_title.to_string()),
            phone_number: Some(d.phone_number.to_string()),
            professional_email: Some(d.professional_email.to_string()),
            location: Some(d.location.to_string()),
            address: Some(d.address.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub sections: Vec<SectionId>,
}

impl From<&TemplateSpec> for TemplateSummary {
    fn from(spec: &TemplateSpec) -> Self {
        Self {
            id: spec.id,
            display_name: spec.display_name,
            category: spec.category,
            sections: spec.sections.to_vec(),
        }
    }
}

const MEDICAL: &str = "Medical & Healthcare";

const fn medical_defaults(professional_title: &'static str) -> TemplateDefaults {
    TemplateDefaults {
        full_name: "Dr. [Your Name]",
        professional_title,
        phone_number: "[Phone Number]",
        professional_email: "[Email Address]",
        location: "[City, State]",
        address: "[Practice Address]",
    }
}

const CLINICAL_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Services,
    SectionId::Education,
    SectionId::MedicalExperience,
    SectionId::Experience,
    SectionId::Internships,
    SectionId::Certifications,
    SectionId::Publications,
    SectionId::Conferences,
    SectionId::Achievements,
    SectionId::Skills,
    SectionId::Languages,
    SectionId::Interests,
    SectionId::Memberships,
    SectionId::SocialLinks,
];

const PRACTICE_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Services,
    SectionId::Education,
    SectionId::MedicalExperience,
    SectionId::Certifications,
    SectionId::Achievements,
    SectionId::Languages,
    SectionId::SocialLinks,
];

const COUNSELLING_SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Services,
    SectionId::Education,
    SectionId::MedicalExperience,
    SectionId::Experience,
    SectionId::Certifications,
    SectionId::Publications,
    SectionId::Memberships,
    SectionId::Languages,
];

pub static TEMPLATES: &[TemplateSpec] = &[
    TemplateSpec {
        id: "doctor-general",
        display_name: "General Practitioner",
        category: MEDICAL,
        default_specialty: "General Medicine",
        defaults: medical_defaults("General Practitioner"),
        sections: PRACTICE_SECTIONS,
    },
    TemplateSpec {
        id: "cardiologist",
        display_name: "Cardiologist",
        category: MEDICAL,
        default_specialty: "Cardiology",
        defaults: medical_defaults("Cardiologist & Heart Specialist"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "gynecologist",
        display_name: "Gynecologist",
        category: MEDICAL,
        default_specialty: "Obstetrics & Gynecology",
        defaults: medical_defaults("Gynecologist & Women's Health Specialist"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "orthopedic-surgeon",
        display_name: "Orthopedic Surgeon",
        category: MEDICAL,
        default_specialty: "Orthopedic Surgery",
        defaults: medical_defaults("Orthopedic Surgeon & Bone Specialist"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "pediatrician",
        display_name: "Pediatrician",
        category: MEDICAL,
        default_specialty: "Pediatrics",
        defaults: medical_defaults("Pediatrician & Child Health Specialist"),
        sections: PRACTICE_SECTIONS,
    },
    TemplateSpec {
        id: "emergency-medicine",
        display_name: "Emergency Medicine",
        category: MEDICAL,
        default_specialty: "Emergency Medicine",
        defaults: medical_defaults("Emergency Medicine Physician"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "neurologist",
        display_name: "Neurologist",
        category: MEDICAL,
        default_specialty: "Neurology",
        defaults: medical_defaults("Neurologist & Brain Specialist"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "oncologist",
        display_name: "Oncologist",
        category: MEDICAL,
        default_specialty: "Oncology",
        defaults: medical_defaults("Oncologist & Cancer Specialist"),
        sections: CLINICAL_SECTIONS,
    },
    TemplateSpec {
        id: "dermatologist",
        display_name: "Dermatologist",
        category: MEDICAL,
        default_specialty: "Dermatology",
        defaults: medical_defaults("Dermatologist & Skin Care Specialist"),
        sections: PRACTICE_SECTIONS,
    },
    TemplateSpec {
        id: "psychologist",
        display_name: "Psychologist",
        category: MEDICAL,
        default_specialty: "Clinical Psychology",
        defaults: medical_defaults("Clinical Psychologist & Mental Health Specialist"),
        sections: COUNSELLING_SECTIONS,
    },
    TemplateSpec {
        id: "psychiatrist",
        display_name: "Psychiatrist",
        category: MEDICAL,
        default_specialty: "Psychiatry",
        defaults: medical_defaults("Psychiatrist & Mental Health Physician"),
        sections: COUNSELLING_SECTIONS,
    },
    TemplateSpec {
        id: "dentist",
        display_name: "Dentist",
        category: MEDICAL,
        default_specialty: "Dentistry",
        defaults: medical_defaults("Dentist & Oral Health Specialist"),
        sections: PRACTICE_SECTIONS,
    },
];

pub fn find(id: &str) -> Option<&'static TemplateSpec> {
    TEMPLATES.iter().find(|t| t.id.eq_ignore_ascii_case(id.trim()))
}

pub fn summaries() -> Vec<TemplateSummary> {
    TEMPLATES.iter().map(TemplateSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn template_ids_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn find_is_case_insensitive() {
        let spec = find("Cardiologist").expect("cardiologist template");
        assert_eq!(spec.id, "cardiologist");
        assert!(find("astrologer").is_none());
    }

    #[test]
    fn default_record_carries_only_personal_info() {
        let record = find("dentist").unwrap().default_record();

        assert_eq!(record.full_name.as_deref(), Some("Dr. [Your Name]"));
        assert_eq!(record.phone_number.as_deref(), Some("[Phone Number]"));
        assert_eq!(
            record.professional_title.as_deref(),
            Some("Dentist & Oral Health Specialist")
        );
        assert!(record.education.is_none());
        assert!(record.social_links.is_none());
        assert!(record.about.is_none());
    }

    #[test]
    fn default_record_is_rebuilt_each_call() {
        let spec = find("pediatrician").unwrap();
        let mut first = spec.default_record();
        first.full_name = Some("changed".to_string());

        assert_eq!(
            spec.default_record().full_name.as_deref(),
            Some("Dr. [Your Name]")
        );
    }

    #[test]
    fn every_template_opens_with_about() {
        for spec in TEMPLATES {
            assert_eq!(spec.sections.first(), Some(&SectionId::About), "{}", spec.id);
        }
    }
}

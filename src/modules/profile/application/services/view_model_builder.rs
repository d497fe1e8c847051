use crate::profile::domain::entities::{Certification, ProfileRecord};
use crate::profile::domain::field_map::ScalarField;
use crate::profile::domain::templates::TemplateSpec;
use crate::profile::domain::view_model::{PersonalInfo, ProfileStats, Specializations, ViewModel};

const FALLBACK_SPECIALTY: &str = "General Medicine";

/// Overlay `record` on `defaults`.
///
/// Scalars take the first non-empty of preferred key, alternate key, default.
/// Lists are taken verbatim from the record when present (an empty list
/// stays empty) and are otherwise empty; defaults never contribute list
/// content.
pub fn build_view_model(record: Option<&ProfileRecord>, defaults: &ProfileRecord) -> ViewModel {
    merge(record, defaults, FALLBACK_SPECIALTY)
}

/// `build_view_model` against a template's defaults, tagged with the
/// template id and its visible sections.
pub fn build_template_view(record: Option<&ProfileRecord>, template: &TemplateSpec) -> ViewModel {
    let defaults = template.default_record();
    let mut view = merge(record, &defaults, template.default_specialty);

    view.template_id = template.id.to_string();
    view.sections = template
        .sections
        .iter()
        .copied()
        .filter(|section| view.has_content(*section))
        .collect();
    view
}

fn merge(record: Option<&ProfileRecord>, defaults: &ProfileRecord, specialty: &str) -> ViewModel {
    let scalar = |field: ScalarField| field.resolve(record, defaults);

    let personal_info = PersonalInfo {
        full_name: scalar(ScalarField::FullName),
        professional_title: scalar(ScalarField::ProfessionalTitle),
        profile_photo: scalar(ScalarField::ProfilePhoto),
        phone_number: scalar(ScalarField::PhoneNumber),
        professional_email: scalar(ScalarField::ProfessionalEmail),
        location: scalar(ScalarField::Location),
        address: scalar(ScalarField::Address),
        website: scalar(ScalarField::Website),
    };

    let education = list(record, |r| &r.education);
    let experience = list(record, |r| &r.experience);
    let medical_experience = list(record, |r| &r.medical_experience);
    let certifications = list(record, |r| &r.certifications);
    let publications = list(record, |r| &r.publications);
    let achievements = list(record, |r| &r.achievements);
    let social_links = record
        .and_then(|r| r.social_links.clone())
        .unwrap_or_default();

    let stats = ProfileStats {
        experience_entries: if medical_experience.is_empty() {
            experience.len()
        } else {
            medical_experience.len()
        },
        certifications: certifications.len(),
        publications: publications.len(),
        achievements: achievements.len(),
    };

    ViewModel {
        template_id: String::new(),
        personal_info,
        about: scalar(ScalarField::About),
        specializations: derive_specializations(record, &certifications, specialty),
        education,
        experience,
        medical_experience,
        publications,
        conferences: list(record, |r| &r.conferences),
        internships: list(record, |r| &r.internships),
        achievements,
        skills: list(record, |r| &r.skills),
        languages: list(record, |r| &r.languages),
        interests: list(record, |r| &r.interests),
        professional_memberships: list(record, |r| &r.professional_memberships),
        active_links: social_links.active(),
        social_links,
        certifications,
        stats,
        sections: Vec::new(),
    }
}

fn list<T: Clone>(
    record: Option<&ProfileRecord>,
    field: impl Fn(&ProfileRecord) -> &Option<Vec<T>>,
) -> Vec<T> {
    record
        .and_then(|r| field(r).clone())
        .unwrap_or_default()
}

fn derive_specializations(
    record: Option<&ProfileRecord>,
    certifications: &[Certification],
    specialty: &str,
) -> Specializations {
    let names: Vec<String> = certifications
        .iter()
        .filter_map(|c| c.name.clone())
        .collect();
    let mentioning = |needles: &[&str]| -> Vec<String> {
        names
            .iter()
            .filter(|name| {
                let lower = name.to_lowercase();
                needles.iter().any(|n| lower.contains(n))
            })
            .cloned()
            .collect()
    };

    let primary = record
        .and_then(|r| ScalarField::ProfessionalTitle.read(r))
        .map(str::to_string)
        .or_else(|| mentioning(&["medicine", "medical", "doctor"]).into_iter().next())
        .unwrap_or_else(|| specialty.to_string());

    Specializations {
        primary,
        secondary: mentioning(&["specialist", "fellowship"]),
        board_certifications: mentioning(&["board"]),
    }
}

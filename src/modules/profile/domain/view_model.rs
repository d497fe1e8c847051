use serde::Serialize;

use super::entities::{
    Achievement, Certification, Conference, Education, Experience, Internship, MedicalExperience,
    Publication, SocialLink, SocialLinks,
};
use super::templates::SectionId;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub professional_title: Option<String>,
    pub profile_photo: Option<String>,
    pub phone_number: Option<String>,
    pub professional_email: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Specializations {
    pub primary: String,
    pub secondary: Vec<String>,
    pub board_certifications: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub experience_entries: usize,
    pub certifications: usize,
    pub publications: usize,
    pub achievements: usize,
}

/// Render-ready profile: fetched values overlaid on template defaults.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub template_id: String,
    pub personal_info: PersonalInfo,
    pub about: Option<String>,
    pub specializations: Specializations,

    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub medical_experience: Vec<MedicalExperience>,
    pub certifications: Vec<Certification>,
    pub publications: Vec<Publication>,
    pub conferences: Vec<Conference>,
    pub internships: Vec<Internship>,
    pub achievements: Vec<Achievement>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
    pub professional_memberships: Vec<String>,

    pub social_links: SocialLinks,
    pub active_links: Vec<SocialLink>,
    pub stats: ProfileStats,
    pub sections: Vec<SectionId>,
}

impl ViewModel {
    /// Whether a declared section has anything to show.
    pub fn has_content(&self, section: SectionId) -> bool {
        match section {
            SectionId::About => self.about.is_some(),
            // service blurbs are template copy, always rendered
            SectionId::Services => true,
            SectionId::Education => !self.education.is_empty(),
            SectionId::MedicalExperience => !self.medical_experience.is_empty(),
            SectionId::Experience => !self.experience.is_empty(),
            SectionId::Internships => !self.internships.is_empty(),
            SectionId::Certifications => !self.certifications.is_empty(),
            SectionId::Publications => !self.publications.is_empty(),
            SectionId::Conferences => !self.conferences.is_empty(),
            SectionId::Achievements => !self.achievements.is_empty(),
            SectionId::Skills => !self.skills.is_empty(),
            SectionId::Languages => !self.languages.is_empty(),
            SectionId::Interests => !self.interests.is_empty(),
            SectionId::Memberships => !self.professional_memberships.is_empty(),
            SectionId::SocialLinks => !self.active_links.is_empty(),
        }
    }
}

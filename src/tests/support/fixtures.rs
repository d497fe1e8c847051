use crate::profile::domain::entities::{
    Certification, Education, MedicalExperience, ProfileRecord, SocialLinks,
};

/// A filled-in cardiologist profile without phone number or address.
pub fn sample_record() -> ProfileRecord {
    ProfileRecord {
        username: Some("drhart".to_string()),
        full_name: Some("Dr. Amelia Hart".to_string()),
        professional_title: Some("Interventional Cardiologist".to_string()),
        professional_email: Some("amelia.hart@heartclinic.test".to_string()),
        location: Some("Boston, MA".to_string()),
        about: Some("Fifteen years of interventional cardiology.".to_string()),
        education: Some(vec![Education {
            degree: Some("MBBS".to_string()),
            university: Some("Harvard Medical School".to_string()),
            year_of_passing: Some("2008".to_string()),
            ..Default::default()
        }]),
        medical_experience: Some(vec![MedicalExperience {
            job_title: Some("Attending Cardiologist".to_string()),
            hospital_name: Some("Massachusetts General".to_string()),
            start_date: Some("2012-07".to_string()),
            ..Default::default()
        }]),
        certifications: Some(vec![Certification {
            name: Some("American Board of Internal Medicine - Cardiology".to_string()),
            authority: Some("ABIM".to_string()),
            ..Default::default()
        }]),
        languages: Some(vec!["English".to_string(), "Spanish".to_string()]),
        social_links: Some(SocialLinks {
            linkedin: Some("https://linkedin.test/ameliahart".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

use serde::{Deserialize, Serialize};

/// Profile document as served by the profile backend.
///
/// Every member is optional: the backend stores whatever the owner filled in,
/// and older documents use alternate names for a few scalars (`name` vs
/// `fullName`, `email` vs `professionalEmail`, ...). See `field_map` for the
/// preferred/alternate table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub username: Option<String>,
    pub selected_template: Option<String>,

    pub full_name: Option<String>,
    pub name: Option<String>,
    pub professional_title: Option<String>,
    pub title: Option<String>,
    pub profile_photo: Option<String>,
    pub phone_number: Option<String>,
    pub phone: Option<String>,
    pub professional_email: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub bio: Option<String>,
    pub position: Option<String>,
    pub dob: Option<String>,
    pub linked_in_or_website: Option<String>,

    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub medical_experience: Option<Vec<MedicalExperience>>,
    pub certifications: Option<Vec<Certification>>,
    pub publications: Option<Vec<Publication>>,
    pub conferences: Option<Vec<Conference>>,
    pub internships: Option<Vec<Internship>>,
    pub achievements: Option<Vec<Achievement>>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub professional_memberships: Option<Vec<String>>,

    pub social_links: Option<SocialLinks>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: Option<String>,
    pub university: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub year_of_passing: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
    pub honors: Option<String>,
    pub edu_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>, // None while the position is current
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalExperience {
    pub job_title: Option<String>,
    pub hospital_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub responsibilities: Option<String>,
    pub medical_exp_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: Option<String>,
    pub authority: Option<String>,
    pub issue_date: Option<String>,
    pub cert_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub publication_date: Option<String>,
    pub author: Option<String>,
    pub publication_url: Option<String>,
    pub description: Option<String>,
    pub publication_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Conference {
    pub name: Option<String>,
    pub role: Option<String>, // "Attended" or "Presented"
    pub date: Option<String>,
    pub conference_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    pub hospital_name: Option<String>,
    pub department: Option<String>,
    pub duration: Option<String>,
    pub issue_date: Option<String>,
    pub key_learnings: Option<String>,
    pub internship_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub title: Option<String>,
    pub associated_with: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub description: Option<String>,
    pub achievement_photos: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Twitter,
    Website,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLinks {
    /// Links that carry a non-empty URL, in display order.
    pub fn active(&self) -> Vec<SocialLink> {
        [
            (SocialPlatform::Linkedin, &self.linkedin),
            (SocialPlatform::Github, &self.github),
            (SocialPlatform::Twitter, &self.twitter),
            (SocialPlatform::Website, &self.website),
        ]
        .into_iter()
        .filter_map(|(platform, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| SocialLink {
                    platform,
                    url: u.to_string(),
                })
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_document_with_camel_case_keys() {
        let record: ProfileRecord = serde_json::from_value(json!({
            "fullName": "Dr. Jane Okafor",
            "professionalEmail": "jane@clinic.test",
            "medicalExperience": [
                { "jobTitle": "Resident", "hospitalName": "St. Mary" }
            ],
            "socialLinks": { "linkedin": "https://linkedin.test/jane" },
            "someFieldWeDoNotKnow": 42
        }))
        .unwrap();

        assert_eq!(record.full_name.as_deref(), Some("Dr. Jane Okafor"));
        assert_eq!(record.professional_email.as_deref(), Some("jane@clinic.test"));
        let exp = record.medical_experience.unwrap();
        assert_eq!(exp[0].job_title.as_deref(), Some("Resident"));
        assert!(exp[0].medical_exp_photos.is_none());
        assert!(record.education.is_none());
    }

    #[test]
    fn present_but_empty_list_stays_distinct_from_absent() {
        let record: ProfileRecord = serde_json::from_value(json!({ "education": [] })).unwrap();

        assert_eq!(record.education, Some(vec![]));
        assert_eq!(record.certifications, None);
    }

    #[test]
    fn null_photo_lists_decode_as_absent() {
        let record: ProfileRecord = serde_json::from_value(json!({
            "education": [{ "degree": "MBBS", "eduPhotos": null }],
            "certifications": [{ "name": "ACLS", "certPhotos": null }],
            "achievements": [{ "title": "Award", "achievementPhotos": ["a.png"] }]
        }))
        .unwrap();

        let education = record.education.unwrap();
        assert_eq!(education[0].degree.as_deref(), Some("MBBS"));
        assert_eq!(education[0].edu_photos, None);
        assert_eq!(record.certifications.unwrap()[0].cert_photos, None);
        assert_eq!(
            record.achievements.unwrap()[0].achievement_photos,
            Some(vec!["a.png".to_string()])
        );
    }

    #[test]
    fn active_links_skip_empty_entries_and_keep_order() {
        let links = SocialLinks {
            linkedin: None,
            github: Some(String::new()),
            twitter: Some("https://twitter.test/doc".to_string()),
            website: Some("https://clinic.test".to_string()),
        };

        let active = links.active();

        assert_eq!(active.len(), 2);
        assert_eq!(active[0].platform, SocialPlatform::Twitter);
        assert_eq!(active[1].url, "https://clinic.test");
    }
}

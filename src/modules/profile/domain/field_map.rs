use super::entities::ProfileRecord;

/// Scalar fields a template renders, each backed by a preferred key and
/// optionally an alternate key that older profile documents still use.
///
/// | field              | preferred           | alternate |
/// |--------------------|---------------------|-----------|
/// | FullName           | `fullName`          | `name`    |
/// | ProfessionalTitle  | `professionalTitle` | `title`   |
/// | ProfilePhoto       | `profilePhoto`      |           |
/// | PhoneNumber        | `phoneNumber`       | `phone`   |
/// | ProfessionalEmail  | `professionalEmail` | `email`   |
/// | Location           | `location`          |           |
/// | Address            | `address`           |           |
/// | About              | `about`             | `bio`     |
/// | Website            | `linkedInOrWebsite` |           |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    FullName,
    ProfessionalTitle,
    ProfilePhoto,
    PhoneNumber,
    ProfessionalEmail,
    Location,
    Address,
    About,
    Website,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateKey {
    pub preferred: &'static str,
    pub alternate: Option<&'static str>,
}

impl ScalarField {
    pub const ALL: [ScalarField; 9] = [
        ScalarField::FullName,
        ScalarField::ProfessionalTitle,
        ScalarField::ProfilePhoto,
        ScalarField::PhoneNumber,
        ScalarField::ProfessionalEmail,
        ScalarField::Location,
        ScalarField::Address,
        ScalarField::About,
        ScalarField::Website,
    ];

    pub fn keys(self) -> AlternateKey {
        let (preferred, alternate) = match self {
            ScalarField::FullName => ("fullName", Some("name")),
            ScalarField::ProfessionalTitle => ("professionalTitle", Some("title")),
            ScalarField::ProfilePhoto => ("profilePhoto", None),
            ScalarField::PhoneNumber => ("phoneNumber", Some("phone")),
            ScalarField::ProfessionalEmail => ("professionalEmail", Some("email")),
            ScalarField::Location => ("location", None),
            ScalarField::Address => ("address", None),
            ScalarField::About => ("about", Some("bio")),
            ScalarField::Website => ("linkedInOrWebsite", None),
        };
        AlternateKey {
            preferred,
            alternate,
        }
    }

    fn preferred(self, record: &ProfileRecord) -> Option<&str> {
        match self {
            ScalarField::FullName => record.full_name.as_deref(),
            ScalarField::ProfessionalTitle => record.professional_title.as_deref(),
            ScalarField::ProfilePhoto => record.profile_photo.as_deref(),
            ScalarField::PhoneNumber => record.phone_number.as_deref(),
            ScalarField::ProfessionalEmail => record.professional_email.as_deref(),
            ScalarField::Location => record.location.as_deref(),
            ScalarField::Address => record.address.as_deref(),
            ScalarField::About => record.about.as_deref(),
            ScalarField::Website => record.linked_in_or_website.as_deref(),
        }
    }

    fn alternate(self, record: &ProfileRecord) -> Option<&str> {
        match self {
            ScalarField::FullName => record.name.as_deref(),
            ScalarField::ProfessionalTitle => record.title.as_deref(),
            ScalarField::PhoneNumber => record.phone.as_deref(),
            ScalarField::ProfessionalEmail => record.email.as_deref(),
            ScalarField::About => record.bio.as_deref(),
            _ => None,
        }
    }

    /// First non-empty value of the preferred key, then the alternate key.
    pub fn read(self, record: &ProfileRecord) -> Option<&str> {
        non_empty(self.preferred(record)).or_else(|| non_empty(self.alternate(record)))
    }

    /// Fetched value when present, otherwise the template default.
    pub fn resolve(self, record: Option<&ProfileRecord>, defaults: &ProfileRecord) -> Option<String> {
        record
            .and_then(|r| self.read(r))
            .or_else(|| self.read(defaults))
            .map(str::to_string)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ProfileRecord {
        ProfileRecord {
            full_name: Some("Dr. [Your Name]".to_string()),
            phone_number: Some("[Phone Number]".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn alternate_key_used_when_preferred_absent() {
        let record = ProfileRecord {
            full_name: None,
            name: Some("A. Smith".to_string()),
            ..Default::default()
        };

        assert_eq!(
            ScalarField::FullName.resolve(Some(&record), &defaults()).as_deref(),
            Some("A. Smith")
        );
    }

    #[test]
    fn preferred_key_wins_over_alternate() {
        let record = ProfileRecord {
            professional_email: Some("work@clinic.test".to_string()),
            email: Some("home@mail.test".to_string()),
            ..Default::default()
        };

        assert_eq!(ScalarField::ProfessionalEmail.read(&record), Some("work@clinic.test"));
    }

    #[test]
    fn empty_preferred_value_falls_through_to_alternate() {
        let record = ProfileRecord {
            about: Some(String::new()),
            bio: Some("Twenty years in pediatrics.".to_string()),
            ..Default::default()
        };

        assert_eq!(ScalarField::About.read(&record), Some("Twenty years in pediatrics."));
    }

    #[test]
    fn whitespace_value_is_present_and_kept() {
        let record = ProfileRecord {
            full_name: Some(" ".to_string()),
            name: Some("A. Smith".to_string()),
            ..Default::default()
        };

        assert_eq!(
            ScalarField::FullName.resolve(Some(&record), &defaults()).as_deref(),
            Some(" ")
        );
    }

    #[test]
    fn default_used_when_record_missing_field() {
        let record = ProfileRecord::default();

        assert_eq!(
            ScalarField::PhoneNumber.resolve(Some(&record), &defaults()).as_deref(),
            Some("[Phone Number]")
        );
    }

    #[test]
    fn no_record_resolves_to_defaults() {
        assert_eq!(
            ScalarField::FullName.resolve(None, &defaults()).as_deref(),
            Some("Dr. [Your Name]")
        );
        assert_eq!(ScalarField::Address.resolve(None, &defaults()), None);
    }

    #[test]
    fn alternate_table_lists_known_pairs() {
        let pairs: Vec<_> = ScalarField::ALL
            .iter()
            .filter_map(|f| f.keys().alternate.map(|alt| (f.keys().preferred, alt)))
            .collect();

        assert!(pairs.contains(&("fullName", "name")));
        assert!(pairs.contains(&("professionalEmail", "email")));
        assert_eq!(ScalarField::Location.keys().alternate, None);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PROJECT_TYPE: &str = "Residential Building";

/// Registration details printed at the top of a certification report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfile {
    pub registration_number: String,
    pub owner_name: String,
    pub mobile_number: String,
    pub email_address: String,
    pub project_location: String,
    pub full_address: String,
    pub permission_authority: String,
    #[serde(default = "default_project_type")]
    pub project_type: String,
    pub number_of_floors: i64,
    /// Square metres.
    pub total_site_area: f64,
    /// Square metres.
    pub total_built_up_area: f64,
    /// Square metres.
    pub landscape_area: f64,
    pub two_wheeler_parking: i64,
}

fn default_project_type() -> String {
    DEFAULT_PROJECT_TYPE.to_string()
}

/// One failing form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for ProfileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("project profile is invalid: {}", summarize(.issues))]
pub struct ProjectProfileError {
    pub issues: Vec<ProfileIssue>,
}

fn summarize(issues: &[ProfileIssue]) -> String {
    issues
        .iter()
        .map(ProfileIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ProjectProfile {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), ProjectProfileError> {
        let mut issues = Vec::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                issues.push(ProfileIssue { field, message });
            }
        };

        check(
            is_present(&self.registration_number),
            "registrationNumber",
            "Registration number is required",
        );
        check(is_present(&self.owner_name), "ownerName", "Owner name is required");
        check(
            is_present(&self.mobile_number),
            "mobileNumber",
            "Mobile number is required",
        );
        check(
            looks_like_email(&self.email_address),
            "emailAddress",
            "Invalid email address",
        );
        check(
            is_present(&self.project_location),
            "projectLocation",
            "Project location is required",
        );
        check(
            is_present(&self.full_address),
            "fullAddress",
            "Full address is required",
        );
        check(
            is_present(&self.permission_authority),
            "permissionAuthority",
            "Permission authority is required",
        );
        check(
            is_present(&self.project_type),
            "projectType",
            "Project type is required",
        );
        check(
            self.number_of_floors >= 1,
            "numberOfFloors",
            "Number of floors must be at least 1",
        );
        check(
            self.total_site_area.is_finite() && self.total_site_area > 0.0,
            "totalSiteArea",
            "Total site area must be greater than 0",
        );
        check(
            self.total_built_up_area.is_finite() && self.total_built_up_area > 0.0,
            "totalBuiltUpArea",
            "Total built-up area must be greater than 0",
        );
        check(
            self.landscape_area.is_finite() && self.landscape_area >= 0.0,
            "landscapeArea",
            "Landscape area cannot be negative",
        );
        check(
            self.two_wheeler_parking >= 0,
            "twoWheelerParking",
            "Number cannot be negative",
        );

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ProjectProfileError { issues })
        }
    }

    /// Label/value pairs in report order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Registration Number", self.registration_number.clone()),
            ("Owner Name", self.owner_name.clone()),
            ("Mobile Number", self.mobile_number.clone()),
            ("Email Address", self.email_address.clone()),
            ("Project Type", self.project_type.clone()),
            ("Permission Authority", self.permission_authority.clone()),
            ("Project Location", self.project_location.clone()),
            ("Full Address", self.full_address.clone()),
            ("Number of Floors", self.number_of_floors.to_string()),
            ("Two Wheeler Parking", self.two_wheeler_parking.to_string()),
            ("Total Site Area", format!("{} sq. m", self.total_site_area)),
            (
                "Total Built-up Area",
                format!("{} sq. m", self.total_built_up_area),
            ),
            ("Landscape Area", format!("{} sq. m", self.landscape_area)),
        ]
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_profile() -> ProjectProfile {
        ProjectProfile {
            registration_number: "IGBC-NP-0042".to_string(),
            owner_name: "Asha Rao".to_string(),
            mobile_number: "+91 98450 00000".to_string(),
            email_address: "asha@example.in".to_string(),
            project_location: "Bengaluru".to_string(),
            full_address: "12 Lake View Road, Bengaluru".to_string(),
            permission_authority: "BBMP".to_string(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            number_of_floors: 3,
            total_site_area: 240.0,
            total_built_up_area: 410.5,
            landscape_area: 36.0,
            two_wheeler_parking: 2,
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert_eq!(sample_profile().validate(), Ok(()));
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut profile = sample_profile();
        profile.owner_name = "  ".to_string();
        profile.email_address = "not-an-email".to_string();
        profile.number_of_floors = 0;
        profile.total_site_area = 0.0;
        profile.landscape_area = -1.0;

        let error = profile.validate().expect_err("profile is invalid");
        let fields: Vec<_> = error.issues.iter().map(|issue| issue.field).collect();
        assert_eq!(
            fields,
            vec![
                "ownerName",
                "emailAddress",
                "numberOfFloors",
                "totalSiteArea",
                "landscapeArea"
            ]
        );
        assert!(error.to_string().contains("Owner name is required"));
    }

    #[test]
    fn deserializes_form_payload_with_default_project_type() {
        let profile: ProjectProfile = serde_json::from_value(json!({
            "registrationNumber": "R-1",
            "ownerName": "Owner",
            "mobileNumber": "1",
            "emailAddress": "owner@example.com",
            "projectLocation": "Pune",
            "fullAddress": "Street 1",
            "permissionAuthority": "PMC",
            "numberOfFloors": 2,
            "totalSiteArea": 100.0,
            "totalBuiltUpArea": 150.0,
            "landscapeArea": 0.0,
            "twoWheelerParking": 0
        }))
        .expect("payload parses");

        assert_eq!(profile.project_type, DEFAULT_PROJECT_TYPE);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn email_check_rejects_common_mistakes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@@b.co"));
    }
}

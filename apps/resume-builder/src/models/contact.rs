use reqwest::Url;

use crate::models::resume::{PersonalDetails, SchemaError};

/// Validated contact block printed under the name.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub github: Option<Url>,
    pub linkedin: Option<Url>,
}

impl ContactInfo {
    /// Builds contact info from the YAML personal details. Non-empty overrides win
    /// over the YAML values for the profile links.
    pub fn from_details(
        details: &PersonalDetails,
        github_override: Option<&str>,
        linkedin_override: Option<&str>,
    ) -> Result<Self, SchemaError> {
        let email = details.email.trim();
        if !is_plausible_email(email) {
            return Err(SchemaError::InvalidEmail(details.email.clone()));
        }

        let github = non_blank(github_override).or(details.github.as_deref());
        let linkedin = non_blank(linkedin_override).or(details.linkedin.as_deref());

        Ok(Self {
            name: details.name.trim().to_string(),
            email: email.to_string(),
            github: parse_profile_url("github", github)?,
            linkedin: parse_profile_url("linkedin", linkedin)?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_profile_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Url>, SchemaError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let invalid = || SchemaError::InvalidUrl {
        field,
        value: raw.to_string(),
    };
    let url = Url::parse(raw).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(Some(url)),
        _ => Err(invalid()),
    }
}

/// One `@`, a non-empty local part, and a dotted domain with no empty labels.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

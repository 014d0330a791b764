use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Level of government a constituent is writing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernmentLevel {
    Federal,
    Provincial,
}

impl GovernmentLevel {
    /// The civic-data service's `elected_office` code for this level.
    pub fn office_code(self) -> &'static str {
        match self {
            GovernmentLevel::Federal => "MP",
            GovernmentLevel::Provincial => "MPP",
        }
    }

    /// Title printed under the representative's name in a letter.
    pub fn role_title(self) -> &'static str {
        match self {
            GovernmentLevel::Federal => "Member of Parliament",
            GovernmentLevel::Provincial => "Member of Provincial Parliament",
        }
    }
}

impl FromStr for GovernmentLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Ok(GovernmentLevel::Federal),
            "provincial" => Ok(GovernmentLevel::Provincial),
            other => Err(format!(
                "level must be 'federal' or 'provincial', got '{other}'"
            )),
        }
    }
}

impl fmt::Display for GovernmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GovernmentLevel::Federal => f.write_str("federal"),
            GovernmentLevel::Provincial => f.write_str("provincial"),
        }
    }
}

/// Reads a list that the civic-data service may send as `null`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An office listed for a representative by the civic-data service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Office {
    #[serde(rename = "type", default)]
    pub office_type: String,
    pub postal: Option<String>,
    pub tel: Option<String>,
}

impl Office {
    pub fn has_postal(&self) -> bool {
        self.postal.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Raw representative record as returned by the civic-data service,
/// before deduplication and level filtering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepresentativeCandidate {
    pub name: String,
    #[serde(default)]
    pub elected_office: String,
    pub district_name: Option<String>,
    pub party_name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub offices: Vec<Office>,
}

/// The single representative returned for a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRepresentative {
    pub name: String,
    pub elected_office: String,
    pub district_name: Option<String>,
    pub party_name: Option<String>,
    pub email: Option<String>,
    pub office_postal: Option<String>,
    pub office_tel: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!(
            "Federal".parse::<GovernmentLevel>(),
            Ok(GovernmentLevel::Federal)
        );
        assert_eq!(
            " PROVINCIAL ".parse::<GovernmentLevel>(),
            Ok(GovernmentLevel::Provincial)
        );
        assert!("municipal".parse::<GovernmentLevel>().is_err());
    }

    #[test]
    fn test_level_codes_and_titles() {
        assert_eq!(GovernmentLevel::Federal.office_code(), "MP");
        assert_eq!(GovernmentLevel::Provincial.office_code(), "MPP");
        assert_eq!(GovernmentLevel::Federal.role_title(), "Member of Parliament");
        assert_eq!(
            GovernmentLevel::Provincial.role_title(),
            "Member of Provincial Parliament"
        );
    }

    #[test]
    fn test_candidate_tolerates_missing_offices_and_extra_fields() {
        let json = serde_json::json!({
            "name": "John Smith",
            "elected_office": "MP",
            "district_name": "Ottawa Centre",
            "url": "https://example.org",
            "extra": {"ignored": true}
        });
        let candidate: RepresentativeCandidate = serde_json::from_value(json).unwrap();
        assert_eq!(candidate.name, "John Smith");
        assert!(candidate.offices.is_empty());
        assert_eq!(candidate.party_name, None);
    }

    #[test]
    fn test_candidate_null_offices_is_empty() {
        let json = serde_json::json!({
            "name": "John Smith",
            "elected_office": "MP",
            "offices": null
        });
        let candidate: RepresentativeCandidate = serde_json::from_value(json).unwrap();
        assert!(candidate.offices.is_empty());
    }

    #[test]
    fn test_office_empty_postal_is_not_a_postal() {
        let office = Office {
            office_type: "constituency".into(),
            postal: Some(String::new()),
            tel: None,
        };
        assert!(!office.has_postal());
    }
}

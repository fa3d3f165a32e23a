use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Research project record (`projects.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub title: LocalizedText,
    pub period: LocalizedText,
    pub role: LocalizedText,
    #[serde(rename = "fundingAgency")]
    pub funding_agency: LocalizedText,
    #[serde(rename = "fundingAmount", default)]
    pub funding_amount: Option<LocalizedText>,
    /// Missing, `null` or unrecognized values become `Unknown`
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

fn nullable_status<'de, D>(deserializer: D) -> Result<ProjectStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ProjectStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text that is either a plain string or keyed by language (`en`, `ko`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// English text, falling back to the first available translation
    pub fn en(&self) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(map) => map
                .get("en")
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// Text for an explicit language key; plain strings have none
    pub fn lang(&self, key: &str) -> Option<&str> {
        match self {
            LocalizedText::Plain(_) => None,
            LocalizedText::Localized(map) => map
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty()),
        }
    }
}

use serde::{Deserialize, Deserializer};

/// Publication record (`journals.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub id: String,
    pub year: i32,
    pub title: String,
    /// Author names, optionally carrying `*`, `^` or `+` markers
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub journal: Option<String>,
    /// Venue name used by conference papers instead of `journal`
    #[serde(rename = "Conference Name", default)]
    pub conference_name: Option<String>,
    /// `submitted` / `preprint`, absent once published
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub volume: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pages: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

impl Publication {
    /// Venue shown in the citation: the journal, or the conference name
    pub fn venue(&self) -> &str {
        self.journal
            .as_deref()
            .or(self.conference_name.as_deref())
            .unwrap_or_default()
    }

    /// Status trimmed, with an empty string treated as absent
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// DOI trimmed, with an empty string treated as absent
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Accept a string or a number (volumes are sometimes written as `12`)
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(serde_json::Number),
    }

    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value
        .map(|v| match v {
            Loose::Text(s) => s.trim().to_string(),
            Loose::Number(n) => n.to_string(),
        })
        .filter(|s| !s.is_empty()))
}

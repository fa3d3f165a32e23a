use serde::Deserialize;

/// Professor profile (`professor.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct Professor {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Site-relative photo path, e.g. `/images/members/professor.jpeg`
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(rename = "Grants and Awards", default)]
    pub awards: Vec<String>,
    #[serde(rename = "Professional Activities/Memberships", default)]
    pub memberships: Vec<String>,
}

/// Experience record in either of the two accepted shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExperienceEntry {
    Structured(Experience),
    /// `"Position, Institution[, more], Period"`
    Legacy(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub period: String,
    #[serde(rename = "Department", default)]
    pub department: Option<String>,
}

/// Education record in either of the two accepted shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EducationEntry {
    Structured(Education),
    /// `"Degree, Field[, more], Year"`
    Legacy(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub thesis: Option<String>,
    #[serde(default)]
    pub advisor: Option<String>,
}

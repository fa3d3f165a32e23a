//! Profile records normalized to timeline rows.
//!
//! Experience and education accept a structured record or a legacy
//! comma-separated string. The structured record is the canonical shape;
//! the legacy split rules are:
//!
//! - experience: `"Position, Institution[, more], Period"` (3+ parts)
//! - education: `"Degree, Field[, more], Year"` (3+ parts)
//!
//! Strings with fewer parts become a title-only row.

use crate::document::{Affiliation, TimelineEntry};
use crate::models::{Education, EducationEntry, Experience, ExperienceEntry};
use crate::utils::{first_year, parse_date_range};

const SEPARATOR: &str = ", ";

/// Position, institution and raw period of an experience record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExperienceFields {
    pub position: String,
    pub institution: String,
    pub period: String,
}

impl ExperienceEntry {
    pub fn fields(&self) -> ExperienceFields {
        match self {
            ExperienceEntry::Structured(Experience {
                position,
                institution,
                period,
                ..
            }) => ExperienceFields {
                position: position.trim().to_string(),
                institution: institution.trim().to_string(),
                period: period.trim().to_string(),
            },
            ExperienceEntry::Legacy(line) => {
                let parts: Vec<&str> = line.split(SEPARATOR).collect();
                match parts.as_slice() {
                    [position, middle @ .., period] if !middle.is_empty() => ExperienceFields {
                        position: position.trim().to_string(),
                        institution: middle.join(SEPARATOR).trim().to_string(),
                        period: period.trim().to_string(),
                    },
                    _ => ExperienceFields {
                        position: line.trim().to_string(),
                        ..Default::default()
                    },
                }
            }
        }
    }
}

/// Timeline row for an experience record. A structured record's
/// department becomes the row description.
pub fn experience_entry(entry: &ExperienceEntry) -> TimelineEntry {
    let fields = entry.fields();
    let description = match entry {
        ExperienceEntry::Structured(Experience { department: Some(dept), .. }) => {
            non_empty(dept.trim().to_string())
        }
        _ => None,
    };
    TimelineEntry {
        date: parse_date_range(&fields.period),
        title: fields.position,
        subtitle: non_empty(fields.institution),
        description,
    }
}

/// Timeline row for an education record
pub fn education_entry(entry: &EducationEntry) -> TimelineEntry {
    match entry {
        EducationEntry::Structured(Education {
            degree,
            field,
            institution,
            period,
            thesis,
            advisor,
        }) => {
            let title = [degree, field, institution]
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(SEPARATOR);

            let thesis = thesis.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let advisor = advisor.as_deref().map(str::trim).filter(|s| !s.is_empty());
            let subtitle = match (thesis, advisor) {
                (Some(thesis), Some(advisor)) => Some(format!("{} ({})", thesis, advisor)),
                (Some(thesis), None) => Some(thesis.to_string()),
                (None, _) => None,
            };

            TimelineEntry {
                date: year_label(period),
                title,
                subtitle,
                description: None,
            }
        }
        EducationEntry::Legacy(line) => {
            let parts: Vec<&str> = line.split(SEPARATOR).collect();
            match parts.as_slice() {
                [degree, middle @ .., year] if !middle.is_empty() => TimelineEntry {
                    date: year_label(year),
                    title: degree.trim().to_string(),
                    subtitle: non_empty(middle.join(SEPARATOR).trim().to_string()),
                    description: None,
                },
                _ => TimelineEntry {
                    title: line.trim().to_string(),
                    ..Default::default()
                },
            }
        }
    }
}

/// Timeline row for an award line `"Award, Date, Institution"`.
///
/// The part containing a 4-digit year is the date; of the others, the first
/// is the award name and the rest the awarding institution. If every part
/// has a year, the first part is the name. Lines with fewer than two parts
/// are skipped.
pub fn award_entry(line: &str) -> Option<TimelineEntry> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    let [first, _, ..] = parts.as_slice() else {
        return None;
    };

    let mut date = "";
    let mut rest = Vec::new();
    for &part in &parts {
        if first_year(part).is_some() {
            date = part;
        } else {
            rest.push(part.trim());
        }
    }

    let name = rest.first().copied().unwrap_or_else(|| first.trim());
    let institution = rest.get(1..).map(|r| r.join(SEPARATOR)).unwrap_or_default();

    Some(TimelineEntry {
        date: year_label(date),
        title: name.to_string(),
        subtitle: non_empty(institution),
        description: None,
    })
}

/// Current directorship shown in the header.
///
/// First experience whose position mentions `Director` and whose period is
/// open-ended (`present`, any case). Legacy strings need at least three
/// parts: line one is the first part, line two the next two.
pub fn current_affiliation(experience: &[ExperienceEntry]) -> Option<Affiliation> {
    experience.iter().find_map(|entry| match entry {
        ExperienceEntry::Structured(exp) => {
            (exp.position.contains("Director") && mentions_present(&exp.period)).then(|| Affiliation {
                position: exp.position.trim().to_string(),
                organization: exp.institution.trim().to_string(),
            })
        }
        ExperienceEntry::Legacy(line) => {
            if !line.contains("Director") || !mentions_present(line) {
                return None;
            }
            let parts: Vec<&str> = line.split(SEPARATOR).collect();
            match parts.as_slice() {
                [position, division, institution, ..] => Some(Affiliation {
                    position: position.trim().to_string(),
                    organization: format!("{}{}{}", division.trim(), SEPARATOR, institution.trim()),
                }),
                _ => None,
            }
        }
    })
}

fn mentions_present(s: &str) -> bool {
    s.to_lowercase().contains("present")
}

fn year_label(s: &str) -> String {
    first_year(s).map(|y| y.to_string()).unwrap_or_default()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn experience(value: serde_json::Value) -> ExperienceEntry {
        serde_json::from_value(value).unwrap()
    }

    fn education(value: serde_json::Value) -> EducationEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_structured_and_legacy_experience_agree() {
        let structured = experience(json!({
            "position": "Principal Researcher",
            "institution": "Materials Division, KIMS",
            "period": "2011.8-2011.12"
        }));
        let legacy = experience(json!("Principal Researcher, Materials Division, KIMS, 2011.8-2011.12"));

        assert_eq!(structured.fields(), legacy.fields());

        let row = experience_entry(&legacy);
        assert_eq!(row.date, "2011.08 -\n2011.12");
        assert_eq!(row.title, "Principal Researcher");
        assert_eq!(row.subtitle.as_deref(), Some("Materials Division, KIMS"));
    }

    #[test]
    fn test_short_legacy_experience() {
        let row = experience_entry(&experience(json!("Visiting Scholar, MIT")));
        assert_eq!(row.title, "Visiting Scholar, MIT");
        assert_eq!(row.date, "");
        assert!(row.subtitle.is_none());
    }

    #[test]
    fn test_department_becomes_description() {
        let row = experience_entry(&experience(json!({
            "position": "Director",
            "institution": "KIMS",
            "period": "2023.3-Present",
            "Department": " AI Materials Division "
        })));
        assert_eq!(row.description.as_deref(), Some("AI Materials Division"));

        let blank = experience_entry(&experience(json!({
            "position": "Director",
            "institution": "KIMS",
            "period": "2023.3-Present",
            "Department": "  "
        })));
        assert!(blank.description.is_none());

        let legacy = experience_entry(&experience(json!("Director, AI Materials Division, KIMS, 2023.3-Present")));
        assert!(legacy.description.is_none());
    }

    #[test]
    fn test_structured_education() {
        let row = education_entry(&education(json!({
            "degree": "Ph.D.",
            "field": "Materials Science",
            "institution": "POSTECH",
            "period": "2008.3 - 2013.2",
            "thesis": "Texture evolution",
            "advisor": "Prof. Kim"
        })));
        assert_eq!(row.date, "2008");
        assert_eq!(row.title, "Ph.D., Materials Science, POSTECH");
        assert_eq!(row.subtitle.as_deref(), Some("Texture evolution (Prof. Kim)"));
    }

    #[test]
    fn test_structured_education_without_thesis() {
        let row = education_entry(&education(json!({
            "degree": "B.S.",
            "field": "",
            "institution": "SNU",
            "period": "2004",
            "advisor": "Prof. Kim"
        })));
        assert_eq!(row.title, "B.S., SNU");
        assert!(row.subtitle.is_none());
    }

    #[test]
    fn test_legacy_education() {
        let row = education_entry(&education(json!("Ph.D., Materials Science, POSTECH, 2013")));
        assert_eq!(row.date, "2013");
        assert_eq!(row.title, "Ph.D.");
        assert_eq!(row.subtitle.as_deref(), Some("Materials Science, POSTECH"));
    }

    #[test]
    fn test_award() {
        let row = award_entry("Best Paper Award, 2019.11, Korean Institute of Metals, Seoul").unwrap();
        assert_eq!(row.date, "2019");
        assert_eq!(row.title, "Best Paper Award");
        assert_eq!(row.subtitle.as_deref(), Some("Korean Institute of Metals, Seoul"));
    }

    #[test]
    fn test_award_without_date() {
        let row = award_entry("Fellowship, National Research Foundation").unwrap();
        assert_eq!(row.date, "");
        assert_eq!(row.title, "Fellowship");
        assert_eq!(row.subtitle.as_deref(), Some("National Research Foundation"));
    }

    #[test]
    fn test_single_part_award_is_skipped() {
        assert!(award_entry("Fellowship").is_none());
        assert!(award_entry("Fellowship 2019").is_none());
    }

    #[test]
    fn test_award_with_years_everywhere() {
        let row = award_entry("Award 2019, 2019.11").unwrap();
        assert_eq!(row.title, "Award 2019");
        assert_eq!(row.date, "2019");
        assert!(row.subtitle.is_none());
    }

    #[test]
    fn test_affiliation_structured() {
        let entries = vec![
            experience(json!({"position": "Director", "institution": "Old Lab", "period": "2015-2018"})),
            experience(json!({"position": "Senior Researcher", "institution": "KIMS", "period": "2018-Present"})),
            experience(json!({"position": "Director", "institution": "AIMAT Lab, KIMS", "period": "2023.3-present"})),
        ];
        let affiliation = current_affiliation(&entries).unwrap();
        assert_eq!(affiliation.position, "Director");
        assert_eq!(affiliation.organization, "AIMAT Lab, KIMS");
    }

    #[test]
    fn test_affiliation_legacy() {
        let entries = vec![experience(json!(
            "Director, AI Materials Division, KIMS, 2023.3-Present"
        ))];
        let affiliation = current_affiliation(&entries).unwrap();
        assert_eq!(affiliation.position, "Director");
        assert_eq!(affiliation.organization, "AI Materials Division, KIMS");
    }

    #[test]
    fn test_no_affiliation() {
        let entries = vec![experience(json!("Director, 2023-Present"))];
        assert!(current_affiliation(&entries).is_none());
        assert!(current_affiliation(&[]).is_none());
    }
}

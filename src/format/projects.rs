//! Research project lines.

use std::cmp::Reverse;

use tracing::warn;

use crate::document::{palette, Rgb8, RichText, Span};
use crate::models::{Project, ProjectStatus};
use crate::utils::{first_year, shorten_period};

/// Roles shown in the accent colour
const LEAD_ROLES: &[&str] = &["PI", "CO-PI"];

/// Colour for a project role: accent for PI / Co-PI, neutral otherwise
pub fn role_color(role: &str) -> Rgb8 {
    if LEAD_ROLES.contains(&role.trim().to_uppercase().as_str()) {
        palette::BLUE
    } else {
        palette::NEUTRAL
    }
}

/// Start year of a project period (0 when none)
pub fn start_year(project: &Project) -> i32 {
    first_year(project.period.en()).unwrap_or(0)
}

/// Ongoing and completed projects, newest start year first
#[derive(Debug, Default)]
pub struct ProjectLists<'a> {
    pub ongoing: Vec<&'a Project>,
    pub completed: Vec<&'a Project>,
}

impl<'a> ProjectLists<'a> {
    pub fn partition(projects: &'a [Project]) -> Self {
        let mut lists = ProjectLists::default();
        for project in projects {
            match project.status {
                ProjectStatus::Ongoing => lists.ongoing.push(project),
                ProjectStatus::Completed => lists.completed.push(project),
                ProjectStatus::Unknown => {
                    warn!(
                        "Skipping project {} with unrecognized status",
                        project.id.as_deref().unwrap_or(project.title.en())
                    );
                }
            }
        }
        lists.ongoing.sort_by_key(|p| Reverse(start_year(p)));
        lists.completed.sort_by_key(|p| Reverse(start_year(p)));
        lists
    }
}

/// `title (ko) | period | agency | role[ | amount]`
pub fn format_project_line(project: &Project) -> RichText {
    let mut text = RichText::new();

    text.push_str(project.title.en().trim());
    if let Some(korean) = project.title.lang("ko") {
        text.push_str(" ");
        text.push(
            Span::plain(format!("({})", korean))
                .hangul()
                .color(palette::LIGHT_GRAY),
        );
    }

    let period = shorten_period(project.period.en().trim());
    text.push_str(format!(
        " | {} | {} | ",
        period,
        project.funding_agency.en().trim()
    ));

    let role = project.role.en().trim();
    text.push(Span::plain(role).bold().color(role_color(role)));

    let amount = project
        .funding_amount
        .as_ref()
        .map(|a| a.en().trim())
        .filter(|a| !a.is_empty());
    if let Some(amount) = amount {
        text.push_str(" | ");
        text.push(Span::plain(amount).color(palette::BLUE));
    }

    text
}

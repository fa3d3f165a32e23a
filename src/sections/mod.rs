//! Story assembly: loaded data in, ordered blocks out.

pub mod header;
pub mod profile;
pub mod projects;
pub mod publications;

pub use header::*;
pub use profile::*;
pub use projects::*;
pub use publications::*;

use crate::config::Config;
use crate::document::Block;
use crate::loader::CvData;

/// Name emphasized in author lists
pub fn highlight_name<'a>(data: &'a CvData, config: &'a Config) -> &'a str {
    config
        .highlight_name
        .as_deref()
        .unwrap_or(data.professor.name.trim())
}

/// Every block of the CV in page order
pub fn build_story(data: &CvData, config: &Config) -> Vec<Block> {
    let highlight = highlight_name(data, config);
    let professor = &data.professor;

    let mut story = header_blocks(professor, config);
    story.extend(summary_blocks(professor));
    story.extend(experience_blocks(professor));
    story.extend(education_blocks(professor));
    story.extend(award_blocks(professor));
    story.extend(activity_blocks(professor));
    story.extend(publication_blocks(&data.publications, &data.impact_factors, highlight));
    story.extend(project_blocks(&data.projects));
    story
}

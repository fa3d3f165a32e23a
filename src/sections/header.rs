use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::document::{Block, HeaderBlock};
use crate::format::current_affiliation;
use crate::models::Professor;

pub const DOCUMENT_TITLE: &str = "CURRICULUM VITAE";

/// Title, header band and the rule underneath it
pub fn header_blocks(professor: &Professor, config: &Config) -> Vec<Block> {
    vec![
        Block::Title(DOCUMENT_TITLE.to_string()),
        Block::Spacer(12.0),
        Block::Header(HeaderBlock {
            name: professor.name.trim().to_string(),
            affiliation: current_affiliation(&professor.experience),
            phone: clean(professor.phone.as_deref()),
            email: clean(professor.email.as_deref()),
            photo: resolve_photo(professor, config),
        }),
        Block::Spacer(4.0),
        Block::Rule,
    ]
}

/// First photo candidate present on disk
pub fn resolve_photo(professor: &Professor, config: &Config) -> Option<PathBuf> {
    let candidates = config.photo_candidates(professor.image.as_deref());
    let found = candidates.iter().find(|path| path.is_file()).cloned();

    match &found {
        Some(path) => debug!("Using profile photo {}", path.display()),
        None => warn!(
            "No profile photo found (tried {}), leaving the slot blank",
            candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }

    found
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

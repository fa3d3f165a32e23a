use crate::document::{Block, ParagraphStyle, SectionIcon};
use crate::format::{award_entry, education_entry, experience_entry};
use crate::models::Professor;

/// Bio paragraph, omitted when empty
pub fn summary_blocks(professor: &Professor) -> Vec<Block> {
    match professor.bio.as_deref().map(str::trim) {
        Some(bio) if !bio.is_empty() => vec![Block::paragraph(bio, ParagraphStyle::Summary)],
        _ => Vec::new(),
    }
}

pub fn experience_blocks(professor: &Professor) -> Vec<Block> {
    let mut blocks = vec![
        Block::section("Professional Experience", SectionIcon::Diamond),
        Block::Spacer(8.0),
    ];
    blocks.extend(
        professor
            .experience
            .iter()
            .map(|entry| Block::Timeline(experience_entry(entry))),
    );
    blocks
}

pub fn education_blocks(professor: &Professor) -> Vec<Block> {
    let mut blocks = vec![
        Block::Spacer(6.0),
        Block::section("Education", SectionIcon::HollowDiamond),
        Block::Spacer(8.0),
    ];
    blocks.extend(
        professor
            .education
            .iter()
            .map(|entry| Block::Timeline(education_entry(entry))),
    );
    blocks
}

/// Grants and awards, omitted when the profile lists none
pub fn award_blocks(professor: &Professor) -> Vec<Block> {
    if professor.awards.is_empty() {
        return Vec::new();
    }

    let mut blocks = vec![
        Block::Spacer(6.0),
        Block::section("Grants and Awards", SectionIcon::Star),
        Block::Spacer(8.0),
    ];
    blocks.extend(
        professor
            .awards
            .iter()
            .filter_map(|line| award_entry(line))
            .map(Block::Timeline),
    );
    blocks
}

/// Professional activities and memberships as a bulleted list
pub fn activity_blocks(professor: &Professor) -> Vec<Block> {
    if professor.memberships.is_empty() {
        return Vec::new();
    }

    let mut blocks = vec![
        Block::Spacer(6.0),
        Block::section("Professional Activities", SectionIcon::Dot),
        Block::Spacer(8.0),
    ];
    blocks.extend(
        professor
            .memberships
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|activity| Block::paragraph(activity, ParagraphStyle::Bullet)),
    );
    blocks
}

use crate::document::{Block, ParagraphStyle, SectionIcon};
use crate::format::{format_project_line, ProjectLists};
use crate::models::Project;

use super::publications::subsection;

/// Research projects: ongoing first, then completed; empty groups are skipped
pub fn project_blocks(projects: &[Project]) -> Vec<Block> {
    let lists = ProjectLists::partition(projects);

    let mut blocks = vec![
        Block::Spacer(6.0),
        Block::section("Research Projects", SectionIcon::Diamond),
        Block::Spacer(8.0),
    ];

    if !lists.ongoing.is_empty() {
        blocks.push(subsection("Ongoing Projects", format!("({})", lists.ongoing.len())));
        blocks.extend(
            lists
                .ongoing
                .iter()
                .map(|p| Block::paragraph(format_project_line(p), ParagraphStyle::Project)),
        );
    }

    if !lists.completed.is_empty() {
        blocks.push(Block::Spacer(4.0));
        blocks.push(subsection("Completed Projects", format!("({})", lists.completed.len())));
        blocks.extend(
            lists
                .completed
                .iter()
                .map(|p| Block::paragraph(format_project_line(p), ParagraphStyle::Project)),
        );
    }

    blocks
}

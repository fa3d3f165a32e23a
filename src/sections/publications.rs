use tracing::info;

use crate::document::{Block, ParagraphStyle, RichText, SectionIcon, Span};
use crate::format::{format_published, format_submission, is_first_or_corresponding, PublicationLists};
use crate::models::{ImpactFactors, Publication};

pub const HIGHLIGHT_LEGEND: &str =
    "* Shaded entries indicate first author or corresponding author publications.";

/// Publications section: in-submission list, then published articles by year
pub fn publication_blocks(
    publications: &[Publication],
    impact_factors: &ImpactFactors,
    highlight: &str,
) -> Vec<Block> {
    let lists = PublicationLists::partition(publications);
    info!(
        "Rendering {} in-submission and {} published publications",
        lists.in_submission.len(),
        lists.published.len()
    );

    let mut blocks = vec![
        Block::Spacer(6.0),
        Block::section("Publications", SectionIcon::Square),
        Block::Spacer(4.0),
        Block::paragraph(HIGHLIGHT_LEGEND, ParagraphStyle::Note),
        Block::Spacer(6.0),
    ];

    if !lists.in_submission.is_empty() {
        blocks.push(subsection("In Submission", format!("({})", lists.in_submission.len())));
        for (i, publication) in lists.in_submission.iter().enumerate() {
            blocks.push(Block::Paragraph {
                text: format_submission(i + 1, publication, impact_factors, highlight),
                style: citation_style(publication, highlight),
            });
        }
        blocks.push(Block::Spacer(4.0));
    }

    blocks.push(subsection(
        "Journal Articles",
        format!("(Total: {})", lists.published.len()),
    ));

    let mut number = 1;
    for (year, group) in lists.published_by_year() {
        blocks.push(Block::Spacer(2.0));
        blocks.push(Block::paragraph(
            Span::plain(year.to_string()).bold(),
            ParagraphStyle::Note,
        ));
        for publication in group {
            blocks.push(Block::Paragraph {
                text: format_published(number, publication, impact_factors, highlight),
                style: citation_style(publication, highlight),
            });
            number += 1;
        }
    }

    blocks
}

/// Shaded style for first-author / corresponding-author entries
pub fn citation_style(publication: &Publication, highlight: &str) -> ParagraphStyle {
    if is_first_or_corresponding(&publication.authors, highlight) {
        ParagraphStyle::PublicationHighlight
    } else {
        ParagraphStyle::Publication
    }
}

/// Bold subsection title followed by a plain count
pub(crate) fn subsection(title: &str, count: String) -> Block {
    let mut text = RichText::new();
    text.push(Span::plain(title).bold());
    text.push_str(format!(" {}", count));
    Block::Subsection(text)
}

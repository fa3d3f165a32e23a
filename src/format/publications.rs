//! Publication ordering and citation lines.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::document::{palette, RichText, Span};
use crate::format::authors::format_authors;
use crate::models::{ImpactFactors, Publication};

/// Status text shown for every in-submission entry
pub const SUBMITTED_STATUS: &str = "Submitted";

/// Journal names that only restate the submission state
const PLACEHOLDER_JOURNALS: &[&str] = &["submitted", "ssrn", "arxiv"];

/// Which list a publication belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `submitted` or `preprint`
    InSubmission,
    /// No status
    Published,
    /// Any other status; not listed
    Excluded,
}

/// Classify a publication by its status
pub fn bucket(publication: &Publication) -> Bucket {
    match publication.status().map(str::to_lowercase).as_deref() {
        None => Bucket::Published,
        Some("submitted" | "preprint") => Bucket::InSubmission,
        Some(_) => Bucket::Excluded,
    }
}

/// First digit run of an identifier
static ID_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("id digits pattern"));

/// Sort key for the first digit run of an identifier.
///
/// Runs are compared by magnitude without parsing, so ids of any length
/// order correctly. An id without digits ranks as zero.
///
/// # Examples
/// ```
/// use cvgen::format::numeric_id;
///
/// assert!(numeric_id("journal-42") > numeric_id("journal-7"));
/// assert!(numeric_id("j100000000000000000000") > numeric_id("j5"));
/// assert_eq!(numeric_id("draft"), numeric_id("j000"));
/// ```
pub fn numeric_id(id: &str) -> (usize, &str) {
    let digits = ID_DIGITS
        .find(id)
        .map(|m| m.as_str().trim_start_matches('0'))
        .unwrap_or_default();
    (digits.len(), digits)
}

/// Stable sort: newest year first, then highest numeric id first
pub fn sort_publications(publications: &mut [&Publication]) {
    publications.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| numeric_id(&b.id).cmp(&numeric_id(&a.id)))
    });
}

/// Publications split into their display buckets, each already sorted
#[derive(Debug, Default)]
pub struct PublicationLists<'a> {
    pub in_submission: Vec<&'a Publication>,
    pub published: Vec<&'a Publication>,
}

impl<'a> PublicationLists<'a> {
    pub fn partition(publications: &'a [Publication]) -> Self {
        let mut lists = PublicationLists::default();

        for publication in publications {
            match bucket(publication) {
                Bucket::InSubmission => lists.in_submission.push(publication),
                Bucket::Published => lists.published.push(publication),
                Bucket::Excluded => warn!(
                    "Skipping publication {} with unrecognized status {:?}",
                    publication.id,
                    publication.status().unwrap_or_default()
                ),
            }
        }

        sort_publications(&mut lists.in_submission);
        sort_publications(&mut lists.published);
        lists
    }

    /// Published entries grouped by year, newest first
    pub fn published_by_year(&self) -> Vec<(i32, Vec<&'a Publication>)> {
        let mut groups: Vec<(i32, Vec<&'a Publication>)> = Vec::new();
        for publication in &self.published {
            match groups.last_mut() {
                Some((year, items)) if *year == publication.year => items.push(publication),
                _ => groups.push((publication.year, vec![publication])),
            }
        }
        groups
    }
}

/// Link label for a DOI
///
/// # Examples
/// ```
/// use cvgen::format::doi_label;
///
/// assert_eq!(doi_label("10.2139/ssrn.4567890"), "SSRN");
/// assert_eq!(doi_label("10.48550/arXiv.2401.00001"), "arXiv");
/// assert_eq!(doi_label("10.1016/j.actamat.2020.01.001"), "DOI");
/// ```
pub fn doi_label(doi: &str) -> &'static str {
    let lower = doi.to_lowercase();
    if lower.contains("ssrn") {
        "SSRN"
    } else if lower.contains("arxiv") {
        "arXiv"
    } else {
        "DOI"
    }
}

pub fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

/// `[LABEL]` span linking to the resolver
pub fn doi_link(doi: &str) -> Span {
    Span::plain(format!("[{}]", doi_label(doi)))
        .color(palette::BLUE)
        .link(doi_url(doi))
}

/// Italic journal name followed by its impact factor, if listed
pub fn journal_clause(journal: &str, impact_factors: &ImpactFactors) -> RichText {
    let mut text = RichText::new();
    text.push(Span::plain(journal).italic());
    if let Some(factor) = impact_factors.get(journal) {
        text.push(Span::plain(format!(" ({})", factor)).color(palette::BLUE));
    }
    text
}

/// Whether the journal of an in-submission entry only repeats its status
pub fn should_suppress_journal(journal: &str, status: &str) -> bool {
    let journal = journal.trim().to_lowercase();
    journal.is_empty()
        || journal == status.to_lowercase()
        || journal.contains("preprint")
        || PLACEHOLDER_JOURNALS.contains(&journal.as_str())
}

/// Numbered citation for an in-submission entry
pub fn format_submission(
    number: usize,
    publication: &Publication,
    impact_factors: &ImpactFactors,
    highlight: &str,
) -> RichText {
    let mut text = citation_head(number, publication, highlight);

    let journal = publication.venue();
    if !should_suppress_journal(journal, SUBMITTED_STATUS) {
        text.append(journal_clause(journal, impact_factors));
        text.push_str(", ");
    }
    text.push_str(format!("{}.", SUBMITTED_STATUS));

    push_doi(&mut text, publication);
    text
}

/// Numbered citation for a published entry
pub fn format_published(
    number: usize,
    publication: &Publication,
    impact_factors: &ImpactFactors,
    highlight: &str,
) -> RichText {
    let mut text = citation_head(number, publication, highlight);

    let journal = publication.venue().trim();
    if journal.is_empty() {
        // drop the trailing separator left by the title
        if let Some(last) = text.spans.last_mut() {
            last.text.truncate(last.text.trim_end_matches(", ").len());
        }
    } else {
        text.append(journal_clause(journal, impact_factors));
    }

    let mut details = String::new();
    for part in [&publication.volume, &publication.pages].into_iter().flatten() {
        details.push_str(", ");
        details.push_str(part);
    }
    details.push('.');
    text.push_str(details);

    push_doi(&mut text, publication);
    text
}

/// `N. authors, "title", `
fn citation_head(number: usize, publication: &Publication, highlight: &str) -> RichText {
    let mut text = RichText::new();
    text.push_str(format!("{}. ", number));

    let authors = format_authors(&publication.authors, highlight);
    if !authors.is_empty() {
        text.append(authors);
        text.push_str(", ");
    }

    text.push_str(format!("\"{}\", ", publication.title.trim()));
    text
}

fn push_doi(text: &mut RichText, publication: &Publication) {
    if let Some(doi) = publication.doi() {
        text.push_str(" ");
        text.push(doi_link(doi));
    }
}

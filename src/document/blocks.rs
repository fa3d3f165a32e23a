use std::path::PathBuf;

use super::text::RichText;

/// Glyph drawn inside the circle of a section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIcon {
    Diamond,
    HollowDiamond,
    Star,
    Dot,
    Square,
}

/// Paragraph styles used by the CV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Justified-looking body text for the bio
    Summary,
    /// Citation with a hanging indent
    Publication,
    /// Citation on a shaded background
    PublicationHighlight,
    /// One-line project entry
    Project,
    /// Bulleted activity line
    Bullet,
    /// Small grey text (year labels, legends)
    Note,
}

/// Current affiliation shown under the name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliation {
    pub position: String,
    pub organization: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBlock {
    pub name: String,
    pub affiliation: Option<Affiliation>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// First photo candidate that exists on disk
    pub photo: Option<PathBuf>,
}

/// Row of the experience / education / awards timelines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineEntry {
    /// May contain `\n` for two-line ranges
    pub date: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

/// One element of the story handed to the PDF backend
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Header(HeaderBlock),
    Rule,
    Section { title: String, icon: SectionIcon },
    Subsection(RichText),
    Timeline(TimelineEntry),
    Paragraph { text: RichText, style: ParagraphStyle },
    /// Vertical gap in points
    Spacer(f32),
}

impl Block {
    pub fn paragraph(text: impl Into<RichText>, style: ParagraphStyle) -> Self {
        Block::Paragraph {
            text: text.into(),
            style,
        }
    }

    pub fn section(title: impl Into<String>, icon: SectionIcon) -> Self {
        Block::Section {
            title: title.into(),
            icon,
        }
    }
}

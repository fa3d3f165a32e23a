//! A4 page layout on top of printpdf.
//!
//! The canvas keeps a cursor measured downwards from the top edge in points
//! and converts to PDF space (origin bottom-left, millimetres) only at the
//! printpdf call sites. A block that does not fit above the bottom margin
//! starts a new page.

use std::borrow::Cow;
use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use image::GenericImageView;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::utils::calculate_points_for_circle;
use printpdf::{
    Actions, Color, Image, ImageTransform, LinkAnnotation, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Pt, Rect, Rgb,
};
use tracing::{debug, warn};

use super::fonts::FontSet;
use super::layout::{wrap, Line, TextStyle, SUPERSCRIPT_SCALE};
use super::metrics::{text_width, FontFace};
use crate::document::palette::{self, Rgb8};
use crate::document::{Block, HeaderBlock, ParagraphStyle, RichText, SectionIcon, Span, TimelineEntry};
use crate::error::{CvError, Result};

const CM: f32 = 72.0 / 2.54;

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

const MARGIN_LEFT: f32 = 1.5 * CM;
const MARGIN_RIGHT: f32 = 1.5 * CM;
const MARGIN_TOP: f32 = 0.5 * CM;
const MARGIN_BOTTOM: f32 = 1.5 * CM;
const FRAME_WIDTH: f32 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

const LAYER_NAME: &str = "Layer 1";

const TITLE: TextStyle = TextStyle::new(22.0, 26.0, palette::NAVY).bold();
const TITLE_SPACE_AFTER: f32 = 6.0;

const RULE_THICKNESS: f32 = 2.0;
const RULE_SPACE_AFTER: f32 = 8.0;

const HEADER_WIDTH: f32 = 17.0 * CM;
const HEADER_PADDING: f32 = 15.0;
const HEADER_TEXT_WIDTH: f32 = 12.0 * CM;
const HEADER_ROW_GAP: f32 = 2.0;
const HEADER_NAME: TextStyle = TextStyle::new(18.0, 22.0, palette::WHITE);
const HEADER_AFFILIATION: TextStyle = TextStyle::new(9.0, 12.0, palette::HEADER_SUBTLE);
const HEADER_AFFILIATION_AFTER: f32 = 6.0;
const HEADER_CONTACT: TextStyle = TextStyle::new(10.0, 12.0, palette::WHITE);
const PHOTO_WIDTH: f32 = 2.5 * CM;
const PHOTO_HEIGHT: f32 = 3.2 * CM;
const PHOTO_DPI: f32 = 300.0;

const SECTION_HEIGHT: f32 = 1.2 * CM;
const SECTION_CIRCLE_X: f32 = 0.4 * CM;
const SECTION_CIRCLE_Y: f32 = 0.4 * CM;
const SECTION_CIRCLE_RADIUS: f32 = 0.35 * CM;
const SECTION_ICON_RADIUS: f32 = 0.18 * CM;
const SECTION_TITLE_X: f32 = 1.2 * CM;
const SECTION_TITLE_Y: f32 = 0.25 * CM;
const SECTION_TITLE_SIZE: f32 = 13.0;
/// Room kept below a section header so it never ends a page alone
const SECTION_KEEP_WITH_NEXT: f32 = 30.0;

const SUBSECTION: TextStyle = TextStyle::new(10.0, 12.0, palette::NAVY).bold();
const SUBSECTION_BEFORE: f32 = 8.0;
const SUBSECTION_AFTER: f32 = 4.0;

const TIMELINE_BULLET_WIDTH: f32 = 0.6 * CM;
const TIMELINE_DATE_WIDTH: f32 = 2.2 * CM;
const TIMELINE_CONTENT_WIDTH: f32 = 13.0 * CM;
const TIMELINE_PADDING_TOP: f32 = 2.0;
const TIMELINE_PADDING_BOTTOM: f32 = 6.0;
const TIMELINE_LINE_GAP: f32 = 1.0;
const TIMELINE_DIAMOND: f32 = 3.2;
const TIMELINE_DATE: TextStyle = TextStyle::new(10.0, 14.0, palette::ACCENT);
const TIMELINE_TITLE: TextStyle = TextStyle::new(10.0, 14.0, palette::BLACK).bold();
const TIMELINE_SUBTITLE: TextStyle = TextStyle::new(10.0, 13.0, palette::ACCENT).italic();
const TIMELINE_DESCRIPTION: TextStyle = TextStyle::new(9.0, 12.0, palette::LIGHT_GRAY);

const BULLET_RADIUS: f32 = 1.5;

/// Vertical metrics and indentation of a paragraph style
struct ParagraphLayout {
    text: TextStyle,
    space_before: f32,
    space_after: f32,
    first_indent: f32,
    rest_indent: f32,
    background: Option<Rgb8>,
    bullet: bool,
}

impl ParagraphLayout {
    fn of(style: ParagraphStyle) -> Self {
        let body = ParagraphLayout {
            text: TextStyle::new(9.0, 12.0, palette::BLACK),
            space_before: 2.0,
            space_after: 3.0,
            first_indent: 0.0,
            rest_indent: 0.0,
            background: None,
            bullet: false,
        };

        match style {
            ParagraphStyle::Summary => ParagraphLayout {
                text: TextStyle::new(10.0, 14.0, palette::BLACK),
                space_before: 10.0,
                space_after: 10.0,
                ..body
            },
            ParagraphStyle::Publication => ParagraphLayout {
                space_after: 4.0,
                rest_indent: 10.0,
                ..body
            },
            ParagraphStyle::PublicationHighlight => ParagraphLayout {
                space_after: 4.0,
                rest_indent: 10.0,
                background: Some(palette::HIGHLIGHT_BG),
                ..body
            },
            ParagraphStyle::Project => body,
            ParagraphStyle::Bullet => ParagraphLayout {
                space_before: 1.0,
                space_after: 2.0,
                first_indent: 10.0,
                rest_indent: 10.0,
                bullet: true,
                ..body
            },
            ParagraphStyle::Note => ParagraphLayout {
                text: TextStyle::new(8.0, 10.0, palette::LIGHT_GRAY),
                space_before: 0.0,
                space_after: 2.0,
                ..body
            },
        }
    }
}

/// Points to printpdf millimetres
fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Baseline position below the top of a line box
fn baseline_offset(style: &TextStyle) -> f32 {
    (style.leading - style.size) / 2.0 + style.size * 0.8
}

/// Lay out `story` on A4 pages and return the serialized PDF.
pub fn render_pdf(story: &[Block], title: &str, hangul_fonts: &[PathBuf]) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME);
    let fonts = FontSet::register(&doc, hangul_fonts)?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut canvas = Canvas {
        doc,
        layer,
        fonts,
        y: MARGIN_TOP,
        pages: 1,
    };
    for block in story {
        canvas.draw_block(block);
    }
    debug!("Laid out {} blocks on {} pages", story.len(), canvas.pages);

    canvas
        .doc
        .save_to_bytes()
        .map_err(|e| CvError::Pdf(format!("failed to serialize document: {}", e)))
}

struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: FontSet,
    /// Cursor distance from the top edge of the page
    y: f32,
    pages: usize,
}

impl Canvas {
    fn draw_block(&mut self, block: &Block) {
        match block {
            Block::Title(title) => self.draw_title(title),
            Block::Header(header) => self.draw_header(header),
            Block::Rule => self.draw_rule(),
            Block::Section { title, icon } => self.draw_section(title, *icon),
            Block::Subsection(text) => {
                self.y += SUBSECTION_BEFORE;
                self.draw_lines_flowing(text, &SUBSECTION, MARGIN_LEFT, FRAME_WIDTH, 0.0, 0.0, None);
                self.y += SUBSECTION_AFTER;
            }
            Block::Timeline(entry) => self.draw_timeline(entry),
            Block::Paragraph { text, style } => self.draw_paragraph(text, *style),
            Block::Spacer(height) => self.y += height,
        }
    }

    // --- page handling ---

    fn ensure_space(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - MARGIN_BOTTOM && self.y > MARGIN_TOP {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN_TOP;
        self.pages += 1;
    }

    // --- primitives; all coordinates are top-down points ---

    fn set_fill(&self, color: Rgb8) {
        let (r, g, b) = color.unit();
        self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn fill_polygon(&self, points: &[(f32, f32)], color: Rgb8) {
        let ring = points
            .iter()
            .map(|&(x, y)| (Point::new(mm(x), mm(PAGE_HEIGHT - y)), false))
            .collect();
        self.fill_ring(ring, color);
    }

    fn fill_ring(&self, ring: Vec<(Point, bool)>, color: Rgb8) {
        self.set_fill(color);
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn fill_rect(&self, x: f32, top: f32, width: f32, height: f32, color: Rgb8) {
        self.fill_polygon(
            &[
                (x, top),
                (x + width, top),
                (x + width, top + height),
                (x, top + height),
            ],
            color,
        );
    }

    fn fill_circle(&self, cx: f32, cy: f32, radius: f32, color: Rgb8) {
        let ring = calculate_points_for_circle(Pt(radius), Pt(cx), Pt(PAGE_HEIGHT - cy));
        self.fill_ring(ring, color);
    }

    fn fill_diamond(&self, cx: f32, cy: f32, half: f32, color: Rgb8) {
        self.fill_polygon(
            &[(cx, cy - half), (cx + half, cy), (cx, cy + half), (cx - half, cy)],
            color,
        );
    }

    fn text(&self, text: &str, face: FontFace, size: f32, x: f32, baseline: f32, color: Rgb8) {
        let text = self.drawable(text, face);
        if text.is_empty() {
            return;
        }
        self.set_fill(color);
        self.layer
            .use_text(text, size, mm(x), mm(PAGE_HEIGHT - baseline), self.fonts.get(face));
    }

    /// Without a Hangul font the fallback face only covers Latin-1
    fn drawable<'t>(&self, text: &'t str, face: FontFace) -> Cow<'t, str> {
        if face == FontFace::Hangul && !self.fonts.has_hangul() && !text.chars().all(|c| (c as u32) < 0x100) {
            Cow::Owned(text.chars().filter(|&c| (c as u32) < 0x100).collect())
        } else {
            Cow::Borrowed(text)
        }
    }

    fn link(&self, x: f32, top: f32, width: f32, height: f32, url: &str) {
        let rect = Rect::new(
            mm(x),
            mm(PAGE_HEIGHT - top - height),
            mm(x + width),
            mm(PAGE_HEIGHT - top),
        );
        self.layer.add_link_annotation(LinkAnnotation::new(
            rect,
            None,
            None,
            Actions::uri(url.to_string()),
            None,
        ));
    }

    // --- text ---

    /// Draw one wrapped line whose box starts at `top`.
    fn draw_line(&self, line: &Line<'_>, style: &TextStyle, x: f32, top: f32) {
        let baseline = top + baseline_offset(style);
        for (dx, piece) in &line.items {
            let rise = if piece.style.superscript {
                style.size * (1.0 - SUPERSCRIPT_SCALE)
            } else {
                0.0
            };
            let color = piece.style.color.unwrap_or(style.color);
            self.text(piece.text, piece.face, piece.size, x + dx, baseline - rise, color);

            if let Some(url) = &piece.style.link {
                self.link(x + dx, top, piece.width, style.leading, url);
            }
        }
    }

    /// Draw lines at a fixed position without page breaks; returns the height used.
    fn draw_lines_at(&self, text: &RichText, style: &TextStyle, x: f32, top: f32, width: f32) -> f32 {
        let lines = wrap(text, style, width, width);
        for (i, line) in lines.iter().enumerate() {
            self.draw_line(line, style, x, top + i as f32 * style.leading);
        }
        lines.len() as f32 * style.leading
    }

    /// Draw lines at the cursor, breaking pages between lines.
    #[allow(clippy::too_many_arguments)]
    fn draw_lines_flowing(
        &mut self,
        text: &RichText,
        style: &TextStyle,
        x: f32,
        width: f32,
        first_indent: f32,
        rest_indent: f32,
        background: Option<Rgb8>,
    ) {
        let lines = wrap(text, style, width - first_indent, width - rest_indent);
        for (i, line) in lines.iter().enumerate() {
            self.ensure_space(style.leading);
            if let Some(color) = background {
                self.fill_rect(x, self.y, width, style.leading, color);
            }
            let indent = if i == 0 { first_indent } else { rest_indent };
            self.draw_line(line, style, x + indent, self.y);
            self.y += style.leading;
        }
    }

    fn draw_paragraph(&mut self, text: &RichText, style: ParagraphStyle) {
        let layout = ParagraphLayout::of(style);
        self.y += layout.space_before;
        self.ensure_space(layout.text.leading);

        if layout.bullet {
            let cy = self.y + baseline_offset(&layout.text) - layout.text.size * 0.3;
            self.fill_circle(MARGIN_LEFT + 3.0, cy, BULLET_RADIUS, palette::NAVY);
        }

        self.draw_lines_flowing(
            text,
            &layout.text,
            MARGIN_LEFT,
            FRAME_WIDTH,
            layout.first_indent,
            layout.rest_indent,
            layout.background,
        );
        self.y += layout.space_after;
    }

    // --- blocks ---

    fn draw_title(&mut self, title: &str) {
        self.ensure_space(TITLE.leading);
        let face = FontFace::select(TITLE.bold, TITLE.italic);
        let width = text_width(title, face, TITLE.size);
        let x = MARGIN_LEFT + (FRAME_WIDTH - width) / 2.0;
        self.text(title, face, TITLE.size, x, self.y + baseline_offset(&TITLE), TITLE.color);
        self.y += TITLE.leading + TITLE_SPACE_AFTER;
    }

    fn draw_rule(&mut self) {
        self.ensure_space(RULE_THICKNESS);
        self.fill_rect(MARGIN_LEFT, self.y, FRAME_WIDTH, RULE_THICKNESS, palette::NAVY);
        self.y += RULE_THICKNESS + RULE_SPACE_AFTER;
    }

    fn draw_header(&mut self, header: &HeaderBlock) {
        let rows = header_rows(header);
        let text_height: f32 = rows
            .iter()
            .map(|(text, style, after)| {
                wrap(text, style, HEADER_TEXT_WIDTH, HEADER_TEXT_WIDTH).len() as f32 * style.leading + after
            })
            .sum();
        let content_height = if header.photo.is_some() {
            text_height.max(PHOTO_HEIGHT)
        } else {
            text_height
        };
        let band_height = content_height + 2.0 * HEADER_PADDING;

        self.ensure_space(band_height);
        let band_x = MARGIN_LEFT + (FRAME_WIDTH - HEADER_WIDTH) / 2.0;
        let band_top = self.y;
        self.fill_rect(band_x, band_top, HEADER_WIDTH, band_height, palette::NAVY);

        let text_x = band_x + HEADER_PADDING;
        let mut top = band_top + HEADER_PADDING + (content_height - text_height) / 2.0;
        for (text, style, after) in &rows {
            top += self.draw_lines_at(text, style, text_x, top, HEADER_TEXT_WIDTH) + after;
        }

        if let Some(photo) = &header.photo {
            let x = band_x + HEADER_WIDTH - HEADER_PADDING - PHOTO_WIDTH;
            let top = band_top + HEADER_PADDING + (content_height - PHOTO_HEIGHT) / 2.0;
            self.draw_photo(photo, x, top);
        }

        self.y += band_height;
    }

    fn draw_photo(&self, path: &Path, x: f32, top: f32) {
        let photo = match image::open(path) {
            Ok(photo) => photo,
            Err(e) => {
                warn!("Cannot decode profile photo {}: {}", path.display(), e);
                return;
            }
        };

        let (px_width, px_height) = photo.dimensions();
        if px_width == 0 || px_height == 0 {
            warn!("Profile photo {} is empty", path.display());
            return;
        }
        let natural_width = px_width as f32 * 72.0 / PHOTO_DPI;
        let natural_height = px_height as f32 * 72.0 / PHOTO_DPI;

        Image::from_dynamic_image(&photo).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(mm(x)),
                translate_y: Some(mm(PAGE_HEIGHT - top - PHOTO_HEIGHT)),
                scale_x: Some(PHOTO_WIDTH / natural_width),
                scale_y: Some(PHOTO_HEIGHT / natural_height),
                dpi: Some(PHOTO_DPI),
                ..Default::default()
            },
        );
    }

    fn draw_section(&mut self, title: &str, icon: SectionIcon) {
        self.ensure_space(SECTION_HEIGHT + SECTION_KEEP_WITH_NEXT);
        let bottom = self.y + SECTION_HEIGHT;

        let cx = MARGIN_LEFT + SECTION_CIRCLE_X;
        let cy = bottom - SECTION_CIRCLE_Y;
        self.fill_circle(cx, cy, SECTION_CIRCLE_RADIUS, palette::NAVY);
        self.draw_icon(icon, cx, cy);

        self.text(
            &title.to_uppercase(),
            FontFace::Bold,
            SECTION_TITLE_SIZE,
            MARGIN_LEFT + SECTION_TITLE_X,
            bottom - SECTION_TITLE_Y,
            palette::NAVY,
        );
        self.y = bottom;
    }

    fn draw_icon(&self, icon: SectionIcon, cx: f32, cy: f32) {
        let r = SECTION_ICON_RADIUS;
        match icon {
            SectionIcon::Diamond => self.fill_diamond(cx, cy, r, palette::WHITE),
            SectionIcon::HollowDiamond => {
                self.fill_diamond(cx, cy, r, palette::WHITE);
                self.fill_diamond(cx, cy, r * 0.5, palette::NAVY);
            }
            SectionIcon::Star => self.fill_polygon(&star_points(cx, cy, r, r * 0.45), palette::WHITE),
            SectionIcon::Dot => self.fill_circle(cx, cy, r * 0.7, palette::WHITE),
            SectionIcon::Square => {
                let half = r * 0.7;
                self.fill_rect(cx - half, cy - half, 2.0 * half, 2.0 * half, palette::WHITE);
            }
        }
    }

    fn draw_timeline(&mut self, entry: &TimelineEntry) {
        let date_x = MARGIN_LEFT + TIMELINE_BULLET_WIDTH;
        let content_x = date_x + TIMELINE_DATE_WIDTH;

        let date_lines: Vec<RichText> = entry.date.lines().map(RichText::from).collect();
        let mut content: Vec<(RichText, TextStyle)> = vec![(RichText::from(entry.title.as_str()), TIMELINE_TITLE)];
        if let Some(subtitle) = &entry.subtitle {
            content.push((RichText::from(subtitle.as_str()), TIMELINE_SUBTITLE));
        }
        if let Some(description) = &entry.description {
            content.push((RichText::from(description.as_str()), TIMELINE_DESCRIPTION));
        }

        let date_height: f32 = date_lines
            .iter()
            .map(|line| wrap(line, &TIMELINE_DATE, TIMELINE_DATE_WIDTH, TIMELINE_DATE_WIDTH).len() as f32)
            .sum::<f32>()
            * TIMELINE_DATE.leading;
        let content_height: f32 = content
            .iter()
            .map(|(text, style)| {
                wrap(text, style, TIMELINE_CONTENT_WIDTH, TIMELINE_CONTENT_WIDTH).len() as f32 * style.leading
                    + TIMELINE_LINE_GAP
            })
            .sum();
        let row_height =
            TIMELINE_PADDING_TOP + date_height.max(content_height) + TIMELINE_PADDING_BOTTOM;

        self.ensure_space(row_height);
        let top = self.y + TIMELINE_PADDING_TOP;

        let bullet_y = top + baseline_offset(&TIMELINE_TITLE) - TIMELINE_TITLE.size * 0.35;
        self.fill_diamond(MARGIN_LEFT + 0.15 * CM, bullet_y, TIMELINE_DIAMOND, palette::NAVY);

        let mut date_top = top;
        for line in &date_lines {
            date_top += self.draw_lines_at(line, &TIMELINE_DATE, date_x, date_top, TIMELINE_DATE_WIDTH);
        }

        let mut content_top = top;
        for (text, style) in &content {
            content_top +=
                self.draw_lines_at(text, style, content_x, content_top, TIMELINE_CONTENT_WIDTH) + TIMELINE_LINE_GAP;
        }

        self.y += row_height;
    }
}

/// Text rows of the header band with the gap after each
fn header_rows(header: &HeaderBlock) -> Vec<(RichText, TextStyle, f32)> {
    let mut rows = vec![(RichText::from(header.name.as_str()), HEADER_NAME, HEADER_ROW_GAP)];

    if let Some(affiliation) = &header.affiliation {
        for line in [&affiliation.position, &affiliation.organization] {
            if !line.is_empty() {
                rows.push((RichText::from(line.as_str()), HEADER_AFFILIATION, 0.0));
            }
        }
        if let Some(last) = rows.last_mut() {
            last.2 = HEADER_AFFILIATION_AFTER + HEADER_ROW_GAP;
        }
    }

    for (label, value) in [("Phone", &header.phone), ("E-mail", &header.email)] {
        if let Some(value) = value {
            let mut text = RichText::new();
            text.push(Span::plain(label).bold());
            text.push_str(format!("  {}", value));
            rows.push((text, HEADER_CONTACT, HEADER_ROW_GAP));
        }
    }

    rows
}

/// Five-pointed star, first point straight up
fn star_points(cx: f32, cy: f32, outer: f32, inner: f32) -> Vec<(f32, f32)> {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + i as f32 * PI / 5.0;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Affiliation;

    #[test]
    fn test_frame_geometry() {
        assert!((FRAME_WIDTH - 510.24).abs() < 0.1);
        assert!(HEADER_WIDTH <= FRAME_WIDTH);
        let columns = TIMELINE_BULLET_WIDTH + TIMELINE_DATE_WIDTH + TIMELINE_CONTENT_WIDTH;
        assert!(columns <= FRAME_WIDTH);
    }

    #[test]
    fn test_star_points() {
        let points = star_points(0.0, 0.0, 10.0, 4.0);
        assert_eq!(points.len(), 10);
        // top-down coordinates: the first point sits above the centre
        assert!(points[0].0.abs() < 1e-4);
        assert!((points[0].1 + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_header_rows_skip_missing_fields() {
        let header = HeaderBlock {
            name: "Ho Won Lee".to_string(),
            affiliation: Some(Affiliation {
                position: "Professor".to_string(),
                organization: "Dept. of Materials".to_string(),
            }),
            phone: None,
            email: Some("hwlee@example.edu".to_string()),
            photo: None,
        };
        let rows = header_rows(&header);
        let texts: Vec<String> = rows.iter().map(|(t, _, _)| t.plain_text()).collect();
        assert_eq!(
            texts,
            vec![
                "Ho Won Lee",
                "Professor",
                "Dept. of Materials",
                "E-mail  hwlee@example.edu"
            ]
        );
        assert_eq!(rows[2].2, HEADER_AFFILIATION_AFTER + HEADER_ROW_GAP);
    }

    #[test]
    fn test_render_minimal_story() {
        let story = vec![
            Block::Title("CURRICULUM VITAE".to_string()),
            Block::Rule,
            Block::section("Education", SectionIcon::Star),
            Block::Timeline(TimelineEntry {
                date: "2010 -\n2015".to_string(),
                title: "Ph.D. in Materials Science".to_string(),
                subtitle: Some("Seoul National University".to_string()),
                description: Some("Computational Materials Group".to_string()),
            }),
            Block::paragraph("Bulleted line", ParagraphStyle::Bullet),
        ];
        let bytes = render_pdf(&story, "CV", &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_story_breaks_pages() {
        let story: Vec<Block> = (0..200)
            .map(|i| Block::paragraph(format!("Entry number {}", i), ParagraphStyle::Summary))
            .collect();
        assert!(render_pdf(&story, "CV", &[]).is_ok());
    }
}

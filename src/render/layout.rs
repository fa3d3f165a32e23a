//! Greedy line breaking for rich text.
//!
//! Spans are cut into words at whitespace. Adjacent spans with no space
//! between them (`Lee` + superscript `*`) form one unbreakable word. A word
//! wider than the line is placed alone and overflows.

use crate::document::{Rgb8, RichText, Script, SpanStyle};

use super::metrics::{text_width, FontFace};

/// Superscript size relative to the paragraph size
pub const SUPERSCRIPT_SCALE: f32 = 0.65;

/// Base typography of a paragraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub color: Rgb8,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn new(size: f32, leading: f32, color: Rgb8) -> Self {
        TextStyle {
            size,
            leading,
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A run of text with one face and size
#[derive(Debug, Clone, PartialEq)]
pub struct Piece<'a> {
    pub text: &'a str,
    pub style: &'a SpanStyle,
    pub face: FontFace,
    pub size: f32,
    pub width: f32,
}

#[derive(Debug)]
enum Token<'a> {
    Space(f32),
    Word(Vec<Piece<'a>>),
}

/// One laid-out line: pieces with their x offset from the line start
#[derive(Debug, Default)]
pub struct Line<'a> {
    pub items: Vec<(f32, Piece<'a>)>,
    pub width: f32,
}

impl Line<'_> {
    pub fn text(&self) -> String {
        self.items.iter().map(|(_, p)| p.text).collect::<Vec<_>>().join(" ")
    }
}

fn face_for(style: &SpanStyle, base: &TextStyle) -> FontFace {
    if style.script == Script::Hangul {
        FontFace::Hangul
    } else {
        FontFace::select(base.bold || style.bold, base.italic || style.italic)
    }
}

fn tokenize<'a>(text: &'a RichText, base: &TextStyle) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token<'a>> = Vec::new();

    for span in &text.spans {
        let face = face_for(&span.style, base);
        let size = if span.style.superscript {
            base.size * SUPERSCRIPT_SCALE
        } else {
            base.size
        };

        let mut rest = span.text.as_str();
        while !rest.is_empty() {
            let starts_blank = rest.starts_with(char::is_whitespace);
            let end = rest
                .find(|c: char| c.is_whitespace() != starts_blank)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            rest = tail;

            let width = text_width(run, face, size);
            if starts_blank {
                tokens.push(Token::Space(width));
                continue;
            }

            let piece = Piece {
                text: run,
                style: &span.style,
                face,
                size,
                width,
            };
            match tokens.last_mut() {
                Some(Token::Word(pieces)) => pieces.push(piece),
                _ => tokens.push(Token::Word(vec![piece])),
            }
        }
    }

    tokens
}

/// Break `text` into lines no wider than `first_width` (first line) and
/// `rest_width` (following lines).
pub fn wrap<'a>(text: &'a RichText, base: &TextStyle, first_width: f32, rest_width: f32) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut pending_space = 0.0;

    for token in tokenize(text, base) {
        match token {
            Token::Space(width) => {
                if !current.items.is_empty() {
                    pending_space += width;
                }
            }
            Token::Word(pieces) => {
                let word_width: f32 = pieces.iter().map(|p| p.width).sum();
                let limit = if lines.is_empty() { first_width } else { rest_width };

                if !current.items.is_empty() && current.width + pending_space + word_width > limit {
                    lines.push(std::mem::take(&mut current));
                    pending_space = 0.0;
                }

                let mut x = current.width + pending_space;
                for piece in pieces {
                    let width = piece.width;
                    current.items.push((x, piece));
                    x += width;
                }
                current.width = x;
                pending_space = 0.0;
            }
        }
    }

    if !current.items.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{palette, Span};

    const BODY: TextStyle = TextStyle::new(10.0, 12.0, palette::BLACK);

    #[test]
    fn test_single_line() {
        let text = RichText::from("Grain growth in steel");
        let lines = wrap(&text, &BODY, 500.0, 500.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Grain growth in steel");
        let expected = text_width("Grain growth in steel", FontFace::Regular, 10.0);
        assert!((lines[0].width - expected).abs() < 1e-3);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let text = RichText::from("alpha beta gamma delta");
        // "gamma delta" is the wider pair, so both lines fit
        let limit = text_width("gamma delta", FontFace::Regular, 10.0) + 1.0;
        let lines = wrap(&text, &BODY, limit, limit);
        let texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["alpha beta", "gamma delta"]);
        assert_eq!(lines[1].items[0].0, 0.0);

        // narrower than "gamma delta": the last two words split
        let narrow = text_width("alpha beta", FontFace::Regular, 10.0) + 1.0;
        let texts: Vec<String> = wrap(&text, &BODY, narrow, narrow).iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn test_hanging_indent_widths() {
        let text = RichText::from("aaaa bbbb cccc");
        let word = text_width("aaaa", FontFace::Regular, 10.0);
        let space = text_width(" ", FontFace::Regular, 10.0);
        // first line fits two words, later lines only one
        let lines = wrap(&text, &BODY, 2.0 * word + space + 0.5, word + 0.5);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].items.len(), 2);
    }

    #[test]
    fn test_adjacent_spans_do_not_split() {
        let mut text = RichText::new();
        text.push(Span::plain("H.W. Lee").bold());
        text.push(Span::plain("*").superscript());
        text.push_str(", J. Doe");

        // room for "H.W. Lee" but not for the superscript glued to it
        let lee = text_width("H.W. Lee", FontFace::Bold, 10.0);
        let lines = wrap(&text, &BODY, lee + 0.5, 500.0);
        assert_eq!(lines[0].items.len(), 1);
        assert_eq!(lines[0].items[0].1.text, "H.W.");
        assert_eq!(lines[1].items[0].1.text, "Lee");
        assert_eq!(lines[1].items[1].1.text, "*");
        assert_eq!(lines[1].items[1].1.size, 10.0 * SUPERSCRIPT_SCALE);
    }

    #[test]
    fn test_faces() {
        let mut text = RichText::new();
        text.push(Span::plain("Journal").italic());
        text.push(Span::plain(" (합금)").hangul());
        let lines = wrap(&text, &BODY.bold(), 500.0, 500.0);
        let faces: Vec<FontFace> = lines[0].items.iter().map(|(_, p)| p.face).collect();
        assert_eq!(faces, vec![FontFace::BoldOblique, FontFace::Hangul]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(wrap(&RichText::new(), &BODY, 100.0, 100.0).is_empty());
        assert!(wrap(&RichText::from("   "), &BODY, 100.0, 100.0).is_empty());
    }

    #[test]
    fn test_overlong_word_stays_on_its_own_line() {
        let text = RichText::from("a supercalifragilistic b");
        let lines = wrap(&text, &BODY, 20.0, 20.0);
        let texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["a", "supercalifragilistic", "b"]);
    }
}

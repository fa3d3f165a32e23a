//! Styled inline text.
//!
//! Normalizers produce [`RichText`] instead of markup strings so the PDF
//! backend never has to parse anything: each [`Span`] carries its own
//! weight, slant, colour, link target and script.

use super::palette::Rgb8;

/// Which font family a span needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Latin,
    /// Needs a font with Hangul coverage
    Hangul,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub superscript: bool,
    /// `None` inherits the paragraph colour
    pub color: Option<Rgb8>,
    pub link: Option<String>,
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    pub fn superscript(mut self) -> Self {
        self.style.superscript = true;
        self
    }

    pub fn color(mut self, color: Rgb8) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.style.link = Some(url.into());
        self
    }

    pub fn hangul(mut self) -> Self {
        self.style.script = Script::Hangul;
        self
    }
}

/// A run of spans rendered as one paragraph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub spans: Vec<Span>,
}

impl RichText {
    pub fn new() -> Self {
        RichText::default()
    }

    pub fn push(&mut self, span: Span) -> &mut Self {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
        self
    }

    pub fn push_str(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Span::plain(text))
    }

    pub fn append(&mut self, other: RichText) -> &mut Self {
        for span in other.spans {
            self.push(span);
        }
        self
    }

    /// Text with all styling dropped
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans whose text satisfies `pred`
    pub fn find<'a>(&'a self, pred: impl Fn(&str) -> bool + 'a) -> impl Iterator<Item = &'a Span> + 'a {
        self.spans.iter().filter(move |s| pred(&s.text))
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        let mut rich = RichText::new();
        rich.push_str(text);
        rich
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        let mut rich = RichText::new();
        rich.push_str(text);
        rich
    }
}

impl From<Span> for RichText {
    fn from(span: Span) -> Self {
        let mut rich = RichText::new();
        rich.push(span);
        rich
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_empty_spans() {
        let mut text = RichText::new();
        text.push_str("").push(Span::plain("a").bold()).push_str("b");
        assert_eq!(text.spans.len(), 2);
        assert_eq!(text.plain_text(), "ab");
        assert!(text.spans[0].style.bold);
    }

    #[test]
    fn test_builder_flags() {
        let span = Span::plain("[DOI]").color(Rgb8(1, 2, 3)).link("https://doi.org/x").superscript().italic().hangul();
        assert!(span.style.superscript && span.style.italic);
        assert_eq!(span.style.link.as_deref(), Some("https://doi.org/x"));
        assert_eq!(span.style.script, Script::Hangul);
    }
}

use std::fs::File;
use std::path::PathBuf;

use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};
use tracing::debug;

use super::metrics::FontFace;
use crate::error::{CvError, Result};

/// Fonts registered with the document
pub struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    bold_oblique: IndirectFontRef,
    /// `None` when no Hangul-capable font loaded; Hangul then falls back to Regular
    hangul: Option<IndirectFontRef>,
}

impl FontSet {
    pub fn register(doc: &PdfDocumentReference, hangul_candidates: &[PathBuf]) -> Result<Self> {
        Ok(FontSet {
            regular: builtin(doc, BuiltinFont::Helvetica)?,
            bold: builtin(doc, BuiltinFont::HelveticaBold)?,
            oblique: builtin(doc, BuiltinFont::HelveticaOblique)?,
            bold_oblique: builtin(doc, BuiltinFont::HelveticaBoldOblique)?,
            hangul: load_hangul(doc, hangul_candidates),
        })
    }

    pub fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Oblique => &self.oblique,
            FontFace::BoldOblique => &self.bold_oblique,
            FontFace::Hangul => self.hangul.as_ref().unwrap_or(&self.regular),
        }
    }

    pub fn has_hangul(&self) -> bool {
        self.hangul.is_some()
    }
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| CvError::Pdf(format!("failed to register builtin font: {}", e)))
}

/// First candidate that exists and parses wins
fn load_hangul(doc: &PdfDocumentReference, candidates: &[PathBuf]) -> Option<IndirectFontRef> {
    for path in candidates.iter().filter(|p| p.is_file()) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Cannot open font {}: {}", path.display(), e);
                continue;
            }
        };
        match doc.add_external_font(file) {
            Ok(font) => {
                debug!("Using {} for Hangul text", path.display());
                return Some(font);
            }
            Err(e) => debug!("Cannot load font {}: {}", path.display(), e),
        }
    }

    debug!("No Hangul font available, falling back to Helvetica");
    None
}

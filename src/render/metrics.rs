//! Static glyph-width tables for the builtin Helvetica faces.
//!
//! Widths come from the Adobe core-font AFM files, in 1/1000 em, and cover
//! ASCII 0x20..=0x7E (index = char - 32). Oblique faces share the upright
//! widths. Anything outside the table falls back to an average width;
//! Hangul and other wide glyphs count as a full em.

/// Face a run of text is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
    Hangul,
}

impl FontFace {
    pub fn select(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontFace::Regular,
            (true, false) => FontFace::Bold,
            (false, true) => FontFace::Oblique,
            (true, true) => FontFace::BoldOblique,
        }
    }

    fn table(self) -> &'static [u16; 95] {
        match self {
            FontFace::Bold | FontFace::BoldOblique => &HELVETICA_BOLD,
            FontFace::Regular | FontFace::Oblique | FontFace::Hangul => &HELVETICA,
        }
    }
}

/// Fallback width for codepoints outside the table
const AVERAGE_WIDTH: u16 = 556;
const WIDE_WIDTH: u16 = 1000;

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n-z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A-M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a-m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n-z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

/// Width of one character in 1/1000 em
fn char_units(face: FontFace, c: char) -> u16 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        face.table()[code - 32]
    } else if is_wide(c) {
        WIDE_WIDTH
    } else {
        AVERAGE_WIDTH
    }
}

/// Hangul, CJK ideographs and full-width forms
fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}' |
        '\u{3000}'..='\u{303F}' |
        '\u{3130}'..='\u{318F}' |
        '\u{4E00}'..='\u{9FFF}' |
        '\u{AC00}'..='\u{D7AF}' |
        '\u{FF00}'..='\u{FFEF}'
    )
}

/// Rendered width of `text` in points
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(face, c) as u32).sum();
    units as f32 * size / 1000.0
}

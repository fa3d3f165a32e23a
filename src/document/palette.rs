/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Build from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Rgb8((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Components scaled to `0.0..=1.0`
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

pub const BLACK: Rgb8 = Rgb8::hex(0x000000);
pub const WHITE: Rgb8 = Rgb8::hex(0xffffff);
/// Section icons, header band, subsection titles
pub const NAVY: Rgb8 = Rgb8::hex(0x2d3748);
/// Date column and institution lines
pub const ACCENT: Rgb8 = Rgb8::hex(0x4a5568);
pub const LIGHT_GRAY: Rgb8 = Rgb8::hex(0x718096);
/// Impact factors, links, funding amounts, PI roles
pub const BLUE: Rgb8 = Rgb8::hex(0x2563eb);
/// Roles other than PI / Co-PI
pub const NEUTRAL: Rgb8 = Rgb8::hex(0x6b7280);
/// Affiliation lines on the header band
pub const HEADER_SUBTLE: Rgb8 = Rgb8::hex(0xe2e8f0);
/// Background of first-author / corresponding-author publications
pub const HIGHLIGHT_BG: Rgb8 = Rgb8::hex(0xf0f4f8);

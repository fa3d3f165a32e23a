pub mod blocks;
pub mod palette;
pub mod text;

pub use blocks::*;
pub use palette::Rgb8;
pub use text::*;

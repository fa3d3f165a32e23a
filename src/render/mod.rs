pub mod fonts;
pub mod layout;
pub mod metrics;
pub mod pdf;

pub use fonts::FontSet;
pub use layout::{wrap, Line, TextStyle};
pub use metrics::{text_width, FontFace};
pub use pdf::render_pdf;

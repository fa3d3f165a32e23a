use std::path::{Path, PathBuf};

use chrono::NaiveDate;

pub const PROFILE_FILE: &str = "professor.json";
pub const PUBLICATIONS_FILE: &str = "journals.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const IMPACT_FACTORS_FILE: &str = "IF.json";

/// Host fonts that can render the Korean project titles, tried in order.
const HANGUL_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
    "/Library/Fonts/NanumGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "C:/Windows/Fonts/malgun.ttf",
];

/// Where inputs are read from and where the PDF goes.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Root that the profile's site-relative `image` path resolves against
    pub public_dir: PathBuf,
    /// Photo used when the profile image cannot be found
    pub fallback_photo: PathBuf,
    pub hangul_fonts: Vec<PathBuf>,
    /// Name emphasized in author lists; defaults to the professor's name
    pub highlight_name: Option<String>,
    /// Suffix of the output file name; defaults to the professor's initial + surname
    pub file_tag: Option<String>,
}

impl Config {
    /// Derive every path from a single project root.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Config {
            data_dir: root.join("data"),
            output_dir: root.join("output"),
            public_dir: root.join("public"),
            fallback_photo: root.join("assets/images/members/professor.jpeg"),
            hangul_fonts: HANGUL_FONT_PATHS.iter().map(PathBuf::from).collect(),
            highlight_name: None,
            file_tag: None,
        }
    }

    /// `<output>/<YYYYMMDD>_CV_<tag>.pdf`
    pub fn output_path(&self, tag: &str, date: NaiveDate) -> PathBuf {
        self.output_dir
            .join(format!("{}_CV_{}.pdf", date.format("%Y%m%d"), tag))
    }

    /// Candidate photo locations, in lookup order
    pub fn photo_candidates(&self, image: Option<&str>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(image) = image.map(str::trim).filter(|s| !s.is_empty()) {
            candidates.push(self.public_dir.join(image.trim_start_matches('/')));
        }
        candidates.push(self.fallback_photo.clone());
        candidates
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_root(".")
    }
}

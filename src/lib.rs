pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod generator;
pub mod loader;
pub mod models;
pub mod render;
pub mod sections;
pub mod utils;

pub use config::Config;
pub use error::{CvError, Result};
pub use generator::{generate, generate_on};
pub use loader::CvData;
pub use models::{ImpactFactors, Professor, Project, Publication};
pub use sections::build_story;
pub use utils::{abbreviate_name, normalize_name, parse_date_range};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::{Config, IMPACT_FACTORS_FILE, PROFILE_FILE, PROJECTS_FILE, PUBLICATIONS_FILE};
use crate::error::{CvError, Result};
use crate::models::{ImpactFactors, Professor, Project, Publication};

/// Everything the CV is built from, loaded once per run.
#[derive(Debug, Clone)]
pub struct CvData {
    pub professor: Professor,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub impact_factors: ImpactFactors,
}

impl CvData {
    /// Read the four input documents from `config.data_dir`.
    pub fn load(config: &Config) -> Result<Self> {
        let dir = &config.data_dir;
        let data = CvData {
            professor: load_json(dir, PROFILE_FILE)?,
            publications: load_json(dir, PUBLICATIONS_FILE)?,
            projects: load_json(dir, PROJECTS_FILE)?,
            impact_factors: load_json(dir, IMPACT_FACTORS_FILE)?,
        };

        info!(
            "Loaded profile for {} ({} publications, {} projects, {} impact factors)",
            data.professor.name,
            data.publications.len(),
            data.projects.len(),
            data.impact_factors.len()
        );

        Ok(data)
    }
}

/// Load a JSON document from the data directory.
pub fn load_json<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<T> {
    let path = dir.join(filename);
    let raw = fs::read_to_string(&path).map_err(|source| CvError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CvError::Parse { path, source })
}

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::Config;
use crate::error::{CvError, Result};
use crate::loader::CvData;
use crate::render::render_pdf;
use crate::sections::{build_story, DOCUMENT_TITLE};
use crate::utils::file_tag;

/// Load the inputs, lay out the CV and write it, dated today.
pub fn generate(config: &Config) -> Result<PathBuf> {
    generate_on(config, Local::now().date_naive())
}

/// Same as [`generate`] with an explicit date for the file name.
pub fn generate_on(config: &Config, date: NaiveDate) -> Result<PathBuf> {
    let data = CvData::load(config)?;
    let story = build_story(&data, config);
    info!("Built story with {} blocks", story.len());

    let bytes = render_pdf(&story, DOCUMENT_TITLE, &config.hangul_fonts)?;

    let tag = config
        .file_tag
        .clone()
        .unwrap_or_else(|| file_tag(&data.professor.name));
    let path = config.output_path(&tag, date);

    fs::create_dir_all(&config.output_dir).map_err(|source| CvError::Write {
        path: config.output_dir.clone(),
        source,
    })?;
    fs::write(&path, &bytes).map_err(|source| CvError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

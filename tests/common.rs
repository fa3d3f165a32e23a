use std::fs;
use std::path::Path;

use cvgen::config::{Config, IMPACT_FACTORS_FILE, PROFILE_FILE, PROJECTS_FILE, PUBLICATIONS_FILE};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Project root in a temp dir, with `data/` populated
pub struct Fixture {
    pub root: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn write(&self, filename: &str, value: &Value) {
        write_json(&self.config.data_dir, filename, value);
    }
}

pub fn write_json(dir: &Path, filename: &str, value: &Value) {
    fs::create_dir_all(dir).expect("Failed to create data dir");
    let raw = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(dir.join(filename), raw).expect("Failed to write fixture");
}

/// Temp project with the default fixture documents
pub fn create_fixture() -> Fixture {
    let root = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::from_root(root.path());
    // keep host fonts out of test runs
    config.hangul_fonts.clear();

    let fixture = Fixture { root, config };
    fixture.write(PROFILE_FILE, &professor());
    fixture.write(PUBLICATIONS_FILE, &publications());
    fixture.write(PROJECTS_FILE, &projects());
    fixture.write(IMPACT_FACTORS_FILE, &impact_factors());
    fixture
}

pub fn professor() -> Value {
    json!({
        "name": "Ho Won Lee",
        "title": "Professor",
        "email": "hwlee@example.edu",
        "phone": "+82-2-000-0000",
        "image": "/images/members/professor.jpeg",
        "bio": "Research on computational materials design and alloy development.",
        "experience": [
            {
                "position": "Director",
                "institution": "Center for Alloy Design",
                "period": "2021.03 - Present",
                "Department": "Computational Materials Group"
            },
            "Assistant Professor, Dept. of Materials Science, Example University, 2015 - 2021"
        ],
        "education": [
            {
                "degree": "Ph.D.",
                "field": "Materials Science",
                "institution": "Example Institute of Technology",
                "period": "2010 - 2015",
                "thesis": "Phase-field modeling of grain growth",
                "advisor": "Prof. J. Kim"
            },
            "B.S., Metallurgical Engineering, 2010"
        ],
        "Grants and Awards": [
            "Young Scientist Award, 2020, Korean Institute of Metals",
            "Honorable mention"
        ],
        "Professional Activities/Memberships": [
            "Member, The Minerals, Metals & Materials Society"
        ]
    })
}

pub fn publications() -> Value {
    json!([
        {
            "id": "journal-3",
            "year": 2023,
            "title": "Precipitation kinetics in Al alloys",
            "authors": ["Jane Doe", "Ho Won Lee*"],
            "journal": "Acta Materialia",
            "volume": 250,
            "pages": "118-130",
            "doi": "10.1016/j.actamat.2023.01.001"
        },
        {
            "id": "journal-7",
            "year": 2023,
            "title": "Machine-learned interatomic potentials",
            "authors": ["Ho Won Lee", "Jane Doe"],
            "journal": "npj Computational Materials"
        },
        {
            "id": "journal-2",
            "year": 2021,
            "title": "Grain boundary segregation",
            "authors": ["Jane Doe", "John Roe"],
            "journal": "Scripta Materialia",
            "volume": "190",
            "pages": "1-5"
        },
        {
            "id": "journal-9",
            "year": 2024,
            "title": "Preprint on high-entropy alloys",
            "authors": ["Ho Won Lee*"],
            "journal": "Submitted",
            "status": "submitted",
            "doi": "10.2139/ssrn.4567890"
        },
        {
            "id": "journal-10",
            "year": 2024,
            "title": "Retracted study",
            "authors": ["John Roe"],
            "journal": "Materials Letters",
            "status": "retracted"
        }
    ])
}

pub fn projects() -> Value {
    json!([
        {
            "id": "p1",
            "title": { "en": "Alloy design platform" },
            "period": { "en": "2022.03 - 2026.02" },
            "role": { "en": "PI" },
            "fundingAgency": { "en": "National Research Foundation" },
            "fundingAmount": { "en": "500M KRW" },
            "status": "ongoing"
        },
        {
            "id": "p2",
            "title": "Steel processing",
            "period": "2016.01 - 2019.12",
            "role": "Participant",
            "fundingAgency": "Ministry of Industry",
            "status": "completed"
        }
    ])
}

pub fn impact_factors() -> Value {
    json!({
        "Acta Materialia": 9.4,
        "Scripta Materialia": "6.0"
    })
}

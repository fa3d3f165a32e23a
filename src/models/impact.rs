use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Journal name → impact factor (`IF.json`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ImpactFactors(HashMap<String, ImpactFactor>);

impl ImpactFactors {
    /// Exact-name lookup
    pub fn get(&self, journal: &str) -> Option<&ImpactFactor> {
        self.0.get(journal)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ImpactFactor)> for ImpactFactors {
    fn from_iter<I: IntoIterator<Item = (String, ImpactFactor)>>(iter: I) -> Self {
        ImpactFactors(iter.into_iter().collect())
    }
}

/// Impact factor as written in the table; numbers keep their JSON spelling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImpactFactor {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ImpactFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactFactor::Number(n) => write!(f, "{}", n),
            ImpactFactor::Text(s) => write!(f, "{}", s),
        }
    }
}

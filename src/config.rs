use crate::error::Result;
use crate::score::BASELINE_SCORE;
use crate::Species;
use serde::{Deserialize, Serialize};

/// Pairing engine configuration.
///
/// ```toml
/// baseline_score = 100
/// fallback_species = "DOG"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score of a pairing that triggers no warnings.
    pub baseline_score: i64,
    /// Species whose locus catalog is used for phenotype text when the
    /// requested species has none.
    pub fallback_species: Species,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline_score: BASELINE_SCORE,
            fallback_species: Species::Dog,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

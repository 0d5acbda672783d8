/// Errors raised at the engine's outer seams: loading records and parsing input.
///
/// The pairing calculation itself never fails; incomplete loci are omitted.
#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("dam genetics not found: {id}")]
    DamNotFound { id: String },

    #[error("sire genetics not found: {id}")]
    SireNotFound { id: String },

    #[error("name column `{column}` missing from csv header")]
    MissingNameColumn { column: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = PairingError> = std::result::Result<T, E>;

pub use crate::config::EngineConfig;
pub use crate::danger::Warning;
pub use crate::error::{PairingError, Result};
pub use crate::genotype::Genotype;
pub use crate::observable::{AnimalGenetics, GeneticsCsv, GeneticsCsvBuilder};
pub use crate::pairing::{calculate_pairing, LocusPrediction, PairingEngine, PairingResult};
pub use crate::punnett::{GenotypeCounts, PunnettSquare};
pub use crate::store::{GeneticsStore, MemoryStore};
pub use crate::tables::{DangerRule, LocusDef, Severity, SpeciesTables};
pub use crate::{Allele, Category, GeneticsRecord, LocusEntry, Species};

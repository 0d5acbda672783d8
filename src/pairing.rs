//! Pairing orchestration: every shared locus crossed, every danger rule
//! checked, one result.
use crate::config::EngineConfig;
use crate::danger::{self, Warning};
use crate::error::{PairingError, Result};
use crate::phenotype;
use crate::punnett::{self, GenotypeCounts};
use crate::score;
use crate::store::GeneticsStore;
use crate::tables::SpeciesTables;
use crate::{Category, GeneticsRecord, LocusEntry, Species};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Offspring prediction at one locus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocusPrediction {
    pub locus: String,
    /// Catalog name of the locus, else the dam's recorded name, else the code.
    pub locus_name: String,
    pub dam_genotype: String,
    pub sire_genotype: String,
    pub prediction: String,
    pub genotype_counts: GenotypeCounts,
}

/// Everything predicted for one dam × sire pairing.
///
/// Serializes as `{"coatColor": [...], ..., "warnings": [...], "score": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingResult {
    #[serde(flatten)]
    pub categories: BTreeMap<Category, Vec<LocusPrediction>>,
    pub warnings: Vec<Warning>,
    pub score: i64,
}

impl PairingResult {
    /// Predictions for a category; empty if the category was not compared.
    pub fn category(&self, category: Category) -> &[LocusPrediction] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn prediction(&self, category: Category, locus: &str) -> Option<&LocusPrediction> {
        self.category(category).iter().find(|p| p.locus == locus)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: EngineConfig,
}

impl PairingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Predicts the offspring of `dam` × `sire`.
    ///
    /// Categories are compared only when both records have them, and loci
    /// only when both parents have complete alleles. Danger rules run once
    /// over the full records.
    pub fn calculate_pairing(
        &self,
        dam: &GeneticsRecord,
        sire: &GeneticsRecord,
        species: &Species,
    ) -> PairingResult {
        let tables = SpeciesTables::resolve(species, &self.config.fallback_species);

        let mut categories: BTreeMap<Category, Vec<LocusPrediction>> = Category::REPORTED
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for category in Category::ALL.iter().copied() {
            let (dam_entries, sire_entries) = match (dam.category(category), sire.category(category)) {
                (Some(d), Some(s)) => (d, s),
                _ => continue,
            };
            let predictions = categories.entry(category).or_default();
            for code in locus_codes(dam_entries, sire_entries) {
                if let (Some(d), Some(s)) = (dam.entry(category, code), sire.entry(category, code)) {
                    predictions.extend(predict_locus(&tables, d, s));
                }
            }
        }

        let warnings = danger::evaluate(tables.dangers, dam, sire);
        let score = score::aggregate(self.config.baseline_score, &warnings);
        debug!(%species, warnings = warnings.len(), score, "pairing calculated");

        PairingResult {
            categories,
            warnings,
            score,
        }
    }

    /// Loads both parents from `store` and predicts their pairing.
    pub fn pair_animals<S>(
        &self,
        store: &S,
        dam_id: &str,
        sire_id: &str,
        species: &Species,
    ) -> Result<PairingResult>
    where
        S: GeneticsStore + ?Sized,
    {
        let dam = store
            .genetics(dam_id)?
            .ok_or_else(|| PairingError::DamNotFound { id: dam_id.into() })?;
        let sire = store
            .genetics(sire_id)?
            .ok_or_else(|| PairingError::SireNotFound { id: sire_id.into() })?;
        Ok(self.calculate_pairing(&dam, &sire, species))
    }
}

/// Predicts a pairing with the default configuration. `species` is parsed
/// case-insensitively.
pub fn calculate_pairing(dam: &GeneticsRecord, sire: &GeneticsRecord, species: &str) -> PairingResult {
    PairingEngine::default().calculate_pairing(dam, sire, &Species::parse(species))
}

/// Locus codes of either parent, dam's first, each once.
fn locus_codes<'a>(dam: &'a [LocusEntry], sire: &'a [LocusEntry]) -> Vec<&'a str> {
    let mut codes: Vec<&str> = Vec::new();
    for entry in dam.iter().chain(sire) {
        if !codes.contains(&entry.locus.as_str()) {
            codes.push(&entry.locus);
        }
    }
    codes
}

fn predict_locus(tables: &SpeciesTables, dam: &LocusEntry, sire: &LocusEntry) -> Option<LocusPrediction> {
    let (dam_genotype, sire_genotype) = match (dam.to_genotype(), sire.to_genotype()) {
        (Some(d), Some(s)) => (d, s),
        _ => {
            trace!(locus = %dam.locus, "skipping locus with incomplete alleles");
            return None;
        }
    };
    let def = tables.locus(&dam.locus);
    let locus_name = def
        .map(|def| def.name)
        .or(dam.locus_name.as_deref())
        .unwrap_or(dam.locus.as_str());
    let counts = punnett::cross(&dam_genotype, &sire_genotype);
    Some(LocusPrediction {
        locus: dam.locus.clone(),
        locus_name: locus_name.to_owned(),
        dam_genotype: dam_genotype.key(),
        sire_genotype: sire_genotype.key(),
        prediction: phenotype::describe(def, &counts),
        genotype_counts: counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::tables::Severity;

    fn coat(entries: &[(&str, &str, &str)]) -> GeneticsRecord {
        entries.iter().fold(GeneticsRecord::new(), |record, (locus, a, b)| {
            record.with_entry(Category::CoatColor, LocusEntry::new(locus, a, b))
        })
    }

    #[test]
    fn test_merle_carrier_by_clear() {
        let result = calculate_pairing(&coat(&[("M", "M", "m")]), &coat(&[("M", "m", "m")]), "DOG");
        let merle = result.prediction(Category::CoatColor, "M").unwrap();
        assert_eq!(merle.dam_genotype, "M/m");
        assert_eq!(merle.sire_genotype, "m/m");
        assert_eq!(merle.prediction, "50% Merle, 50% Non-merle");
        assert_eq!(merle.genotype_counts.get("M/m"), Some(50));
        assert!(result.warnings.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_loci_follow_dam_order_then_sire() {
        let dam = coat(&[("B", "B", "b"), ("E", "E", "e")]);
        let sire = coat(&[("D", "D", "d"), ("E", "e", "e"), ("B", "b", "b")]);
        let result = calculate_pairing(&dam, &sire, "dog");
        let loci: Vec<&str> = result
            .category(Category::CoatColor)
            .iter()
            .map(|p| p.locus.as_str())
            .collect();
        assert_eq!(loci, vec!["B", "E"]);
    }

    #[test]
    fn test_incomplete_locus_is_omitted() {
        let dam = coat(&[("E", "E", "e")])
            .with_entry(Category::CoatColor, LocusEntry::partial("B", Some("B"), None));
        let sire = coat(&[("E", "e", "e"), ("B", "b", "b")]);
        let result = calculate_pairing(&dam, &sire, "dog");
        assert!(result.prediction(Category::CoatColor, "B").is_none());
        assert!(result.prediction(Category::CoatColor, "E").is_some());
    }

    #[test]
    fn test_category_needs_both_parents() {
        let dam = coat(&[("E", "E", "e")])
            .with_entry(Category::Health, LocusEntry::new("DM", "N", "DM"));
        let sire = coat(&[("E", "E", "e")]);
        let result = calculate_pairing(&dam, &sire, "dog");
        assert!(!result.categories.contains_key(&Category::Health));
        assert!(result.categories.contains_key(&Category::CoatType));
        assert!(result.category(Category::CoatType).is_empty());
    }

    #[test]
    fn test_unknown_species_uses_dog_phenotypes_without_warnings() {
        let carrier = coat(&[("M", "M", "m")]);
        let result = calculate_pairing(&carrier, &carrier, "wolf");
        assert_eq!(
            result.prediction(Category::CoatColor, "M").unwrap().prediction,
            "25% Double merle, 50% Merle, 25% Non-merle"
        );
        assert!(result.warnings.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_species_without_locus_mapping_shows_raw_genotypes() {
        let dam = coat(&[("Q", "Q", "q")]);
        let result = calculate_pairing(&dam, &dam, "horse");
        let q = result.prediction(Category::CoatColor, "Q").unwrap();
        assert_eq!(q.prediction, "25% Q/Q, 50% Q/q, 25% q/q");
        assert_eq!(q.locus_name, "Q");
    }

    #[test]
    fn test_locus_name_prefers_catalog_then_record() {
        let dam = GeneticsRecord::new()
            .with_entry(Category::CoatColor, LocusEntry::new("E", "E", "e").with_name("Ext"))
            .with_entry(Category::CoatColor, LocusEntry::new("Q", "Q", "q").with_name("Quux"));
        let result = calculate_pairing(&dam, &dam, "dog");
        let extension = result.prediction(Category::CoatColor, "E").unwrap();
        assert_eq!(extension.locus_name, "Extension");
        assert_eq!(result.prediction(Category::CoatColor, "Q").unwrap().locus_name, "Quux");
    }

    #[test]
    fn test_configured_baseline_and_fallback() {
        let engine = PairingEngine::new(EngineConfig {
            baseline_score: 10,
            fallback_species: Species::Horse,
        });
        let carrier = coat(&[("O", "O", "n")]);
        let result = engine.calculate_pairing(&carrier, &carrier, &Species::parse("zebra"));
        assert_eq!(
            result.prediction(Category::CoatColor, "O").unwrap().prediction,
            "25% Lethal white foal (LWFS), 50% Frame overo, 25% Non-overo"
        );
        assert_eq!(result.score, 10);

        let result = engine.calculate_pairing(&carrier, &carrier, &Species::Horse);
        assert_eq!(result.warnings[0].severity, Severity::Lethal);
        assert_eq!(result.score, 10 - 100);
    }

    #[test]
    fn test_pair_animals_reports_missing_parent() {
        let mut store = MemoryStore::new();
        store.insert("dam", coat(&[("E", "E", "e")]));
        let engine = PairingEngine::default();
        assert!(matches!(
            engine.pair_animals(&store, "dam", "ghost", &Species::Dog),
            Err(PairingError::SireNotFound { ref id }) if id == "ghost"
        ));
        assert!(matches!(
            engine.pair_animals(&store, "ghost", "dam", &Species::Dog),
            Err(PairingError::DamNotFound { .. })
        ));
        assert!(engine.pair_animals(&store, "dam", "dam", &Species::Dog).is_ok());
    }

    #[test]
    fn test_result_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let carrier = coat(&[("M", "M", "m")]);
        let json: serde_json::Value = serde_json::from_str(&calculate_pairing(&carrier, &carrier, "dog").to_json()?)?;
        assert_eq!(json["coatColor"][0]["locus"], "M");
        assert_eq!(json["coatColor"][0]["locusName"], "Merle");
        assert_eq!(json["coatColor"][0]["damGenotype"], "M/m");
        assert_eq!(json["coatColor"][0]["genotypeCounts"]["M/m"], 50);
        assert_eq!(json["coatType"], serde_json::json!([]));
        assert_eq!(json["physicalTraits"], serde_json::json!([]));
        assert_eq!(json["warnings"][0]["severity"], "danger");
        assert_eq!(json["score"], 60);
        Ok(())
    }
}

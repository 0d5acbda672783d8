//! Genotype → phenotype text.
use crate::genotype::{lookup_either_order, Genotype};
use crate::punnett::GenotypeCounts;
use crate::tables::LocusDef;

/// Phenotype for `genotype` at `locus`.
///
/// Falls back to the genotype as written when the locus is not in the
/// catalog or the catalog has no entry for the genotype in either order.
pub fn phenotype(locus: Option<&LocusDef>, genotype: &Genotype) -> String {
    locus
        .and_then(|def| lookup_either_order(genotype, |key| def.phenotype(key)))
        .map(str::to_owned)
        .unwrap_or_else(|| genotype.key())
}

/// Human-readable prediction: `"{pct}% {phenotype}, ..."` in bucket order.
pub fn describe(locus: Option<&LocusDef>, counts: &GenotypeCounts) -> String {
    counts
        .iter()
        .map(|(genotype, percentage)| format!("{}% {}", percentage, phenotype(locus, genotype)))
        .collect::<Vec<_>>()
        .join(", ")
}

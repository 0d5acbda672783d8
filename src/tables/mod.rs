//! Static per-species rule tables.
//!
//! Two tables exist per species: a locus catalog (display name, trait
//! category and genotype → phenotype map per locus) and a list of danger
//! rules. Both are `static` slices and never change after start-up.
use crate::Species;
use tracing::debug;

pub mod dangers;
pub mod phenotypes;

pub use dangers::{DangerRule, Severity};
pub use phenotypes::LocusDef;

/// Rule tables resolved for one pairing.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesTables {
    pub loci: &'static [LocusDef],
    pub dangers: &'static [DangerRule],
}

impl SpeciesTables {
    /// Resolves the tables for `species`.
    ///
    /// A species without a locus catalog borrows the catalog of `fallback`
    /// for phenotype text. Danger rules never fall back: an unknown species
    /// has none.
    pub fn resolve(species: &Species, fallback: &Species) -> Self {
        let loci = match phenotypes::for_species(species) {
            Some(loci) => loci,
            None => {
                debug!(%species, %fallback, "no locus catalog for species, using fallback");
                phenotypes::for_species(fallback).unwrap_or(&[])
            }
        };
        Self {
            loci,
            dangers: dangers::for_species(species),
        }
    }

    /// Catalog entry for a locus code.
    pub fn locus(&self, code: &str) -> Option<&'static LocusDef> {
        self.loci.iter().find(|def| def.code == code)
    }
}

//! Breeding pair prediction for animal genetics.
//!
//! Given the genetics records of a dam and a sire, [`calculate_pairing`]
//! crosses every locus both animals have complete data for, resolves the
//! offspring genotypes to phenotype text through species rule tables, and
//! flags risky carrier×carrier pairings with an aggregate safety score.
//!
//! ```
//! use pairing_genomics::prelude::*;
//!
//! let dam = GeneticsRecord::new().with_entry(Category::CoatColor, LocusEntry::new("M", "M", "m"));
//! let sire = GeneticsRecord::new().with_entry(Category::CoatColor, LocusEntry::new("M", "m", "m"));
//!
//! let result = calculate_pairing(&dam, &sire, "dog");
//! assert_eq!(result.score, 100);
//! ```
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub mod prelude;

pub mod config;
pub mod danger;
pub mod error;
pub mod genotype;
pub mod observable;
pub mod pairing;
pub mod phenotype;
pub mod punnett;
pub mod score;
pub mod store;
pub mod tables;

pub use genotype::Genotype;
pub use pairing::{calculate_pairing, PairingEngine, PairingResult};

pub type Allele = String;

/// Species a pairing is evaluated for.
///
/// Parsing is case-insensitive. Names without rule tables are kept as
/// `Unknown` so the fallback is decided in one place (see
/// [`tables::SpeciesTables::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Dog,
    Horse,
    Cat,
    Rabbit,
    Goat,
    /// Upper-cased name of a species without rule tables.
    Unknown(String),
}

impl Species {
    pub fn parse(input: &str) -> Self {
        let name = input.trim().to_ascii_uppercase();
        match name.as_str() {
            "DOG" => Self::Dog,
            "HORSE" => Self::Horse,
            "CAT" => Self::Cat,
            "RABBIT" => Self::Rabbit,
            "GOAT" => Self::Goat,
            _ => Self::Unknown(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dog => "DOG",
            Self::Horse => "HORSE",
            Self::Cat => "CAT",
            Self::Rabbit => "RABBIT",
            Self::Goat => "GOAT",
            Self::Unknown(name) => name,
        }
    }
}

impl From<&str> for Species {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Species {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Species {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Trait category a locus is filed under in a genetics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CoatColor,
    CoatType,
    PhysicalTraits,
    Performance,
    Health,
    EyeColor,
    Temperament,
    OtherTraits,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::CoatColor,
        Category::CoatType,
        Category::PhysicalTraits,
        Category::Performance,
        Category::Health,
        Category::EyeColor,
        Category::Temperament,
        Category::OtherTraits,
    ];

    /// Categories every `PairingResult` reports, even when empty.
    pub const REPORTED: [Category; 3] = [
        Category::CoatColor,
        Category::CoatType,
        Category::PhysicalTraits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoatColor => "coatColor",
            Self::CoatType => "coatType",
            Self::PhysicalTraits => "physicalTraits",
            Self::Performance => "performance",
            Self::Health => "health",
            Self::EyeColor => "eyeColor",
            Self::Temperament => "temperament",
            Self::OtherTraits => "otherTraits",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == input.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One locus of one animal as stored upstream.
///
/// Only `locus`, `allele1` and `allele2` drive the calculation; `genotype`
/// is informational and recomputed from the alleles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocusEntry {
    pub locus: String,
    #[serde(default)]
    pub locus_name: Option<String>,
    #[serde(default)]
    pub allele1: Option<Allele>,
    #[serde(default)]
    pub allele2: Option<Allele>,
    #[serde(default)]
    pub genotype: Option<String>,
}

impl LocusEntry {
    /// A complete entry with both alleles present.
    pub fn new(locus: &str, allele1: &str, allele2: &str) -> Self {
        Self {
            locus: locus.into(),
            locus_name: None,
            allele1: Some(allele1.into()),
            allele2: Some(allele2.into()),
            genotype: Some(format!("{}{}{}", allele1, genotype::SEPARATOR, allele2)),
        }
    }

    /// An entry that may be missing one or both alleles.
    pub fn partial(locus: &str, allele1: Option<&str>, allele2: Option<&str>) -> Self {
        Self {
            locus: locus.into(),
            locus_name: None,
            allele1: allele1.map(Into::into),
            allele2: allele2.map(Into::into),
            genotype: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.locus_name = Some(name.into());
        self
    }

    /// The entry's genotype, or `None` if either allele is missing or empty.
    pub fn to_genotype(&self) -> Option<Genotype> {
        Genotype::from_alleles(self.allele1.as_deref(), self.allele2.as_deref())
    }

    /// Whether the entry's complete genotype holds `allele` in either
    /// position. An entry missing an allele carries nothing.
    pub fn carries(&self, allele: &str) -> bool {
        self.to_genotype().map_or(false, |g| g.carries(allele))
    }
}

/// An animal's genetics, keyed by trait category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneticsRecord {
    categories: BTreeMap<Category, Vec<LocusEntry>>,
}

impl GeneticsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, category: Category, entry: LocusEntry) -> &mut Self {
        self.categories.entry(category).or_default().push(entry);
        self
    }

    pub fn with_entry(mut self, category: Category, entry: LocusEntry) -> Self {
        self.push(category, entry);
        self
    }

    /// Entries of a category, `None` if the record has no such category.
    pub fn category(&self, category: Category) -> Option<&[LocusEntry]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// First entry for `locus` within `category`.
    pub fn entry(&self, category: Category, locus: &str) -> Option<&LocusEntry> {
        self.category(category)?.iter().find(|e| e.locus == locus)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

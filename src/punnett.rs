//! Mendelian cross of two parents at a single locus.
use crate::genotype::Genotype;
use ndarray::Array2;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Share of the offspring, in percent, that each genotype bucket holds.
pub type Percentage = u32;

/// The 2x2 grid of offspring genotypes: rows are dam gametes, columns
/// are sire gametes.
pub struct PunnettSquare {
    cells: Array2<Genotype>,
}

impl PunnettSquare {
    pub fn cross(dam: &Genotype, sire: &Genotype) -> Self {
        let dam_gametes = [dam.first(), dam.second()];
        let sire_gametes = [sire.first(), sire.second()];
        Self {
            cells: Array2::from_shape_fn((2, 2), |(i, j)| {
                Genotype::new(dam_gametes[i], sire_gametes[j])
            }),
        }
    }

    /// Collapses the grid into canonical genotype buckets.
    ///
    /// Cells are visited row-major (`d1/s1, d1/s2, d2/s1, d2/s2`) and a
    /// bucket keeps the position of its first cell.
    pub fn counts(&self) -> GenotypeCounts {
        let share = 100 / self.cells.len() as Percentage;
        let mut counts = GenotypeCounts::default();
        for offspring in self.cells.iter() {
            counts.add(offspring.canonical(), share);
        }
        counts
    }
}

/// Crosses two genotypes and returns the offspring distribution.
pub fn cross(dam: &Genotype, sire: &Genotype) -> GenotypeCounts {
    PunnettSquare::cross(dam, sire).counts()
}

/// Canonical genotype → percentage, in first-occurrence order.
///
/// Serializes as a JSON object keyed by the canonical genotype string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenotypeCounts {
    buckets: Vec<(Genotype, Percentage)>,
}

impl GenotypeCounts {
    fn add(&mut self, genotype: Genotype, share: Percentage) {
        match self.buckets.iter_mut().find(|(g, _)| *g == genotype) {
            Some((_, percentage)) => *percentage += share,
            None => self.buckets.push((genotype, share)),
        }
    }

    /// Percentage for a genotype key written in either allele order.
    pub fn get(&self, key: &str) -> Option<Percentage> {
        let genotype = Genotype::parse(key, crate::genotype::SEPARATOR)?;
        self.buckets
            .iter()
            .find(|(g, _)| *g == genotype)
            .map(|(_, percentage)| *percentage)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Genotype, Percentage)> {
        self.buckets.iter().map(|(g, percentage)| (g, *percentage))
    }

    pub fn keys(&self) -> Vec<String> {
        self.buckets.iter().map(|(g, _)| g.key()).collect()
    }

    pub fn total(&self) -> Percentage {
        self.buckets.iter().map(|(_, percentage)| percentage).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for GenotypeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (genotype, percentage) in &self.buckets {
            map.serialize_entry(&genotype.key(), percentage)?;
        }
        map.end()
    }
}

//! Where genetics records come from.
//!
//! The engine never fetches records itself; callers hand it records loaded
//! through a [`GeneticsStore`].
use crate::error::Result;
use crate::observable::AnimalGenetics;
use crate::GeneticsRecord;
use std::collections::BTreeMap;
use tracing::debug;

pub trait GeneticsStore {
    /// Genetics record of an animal, `None` if the animal has none.
    fn genetics(&self, animal_id: &str) -> Result<Option<GeneticsRecord>>;
}

/// In-process store keyed by animal id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, GeneticsRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, animal_id: &str, record: GeneticsRecord) -> Option<GeneticsRecord> {
        self.records.insert(animal_id.into(), record)
    }

    /// Stores every animal produced by `observable`, e.g. a
    /// [`crate::observable::GeneticsCsv`].
    pub fn observe<I>(&mut self, observable: I) -> Result<()>
    where
        I: Iterator<Item = Result<AnimalGenetics>>,
    {
        for animal in observable {
            let animal = animal?;
            debug!(animal = %animal.name, "storing genetics record");
            self.records.insert(animal.name, animal.record);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GeneticsStore for MemoryStore {
    fn genetics(&self, animal_id: &str) -> Result<Option<GeneticsRecord>> {
        Ok(self.records.get(animal_id).cloned())
    }
}

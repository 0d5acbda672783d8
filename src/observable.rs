use crate::error::{PairingError, Result};
use crate::tables::SpeciesTables;
use crate::{Category, GeneticsRecord, LocusEntry, Species};
use std::io::Read;
use tracing::trace;

/// One animal read from a genetics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalGenetics {
    pub name: String,
    pub record: GeneticsRecord,
}

#[derive(Clone)]
enum Field {
    Name,
    Locus(Category, String),
}

/// Produces `AnimalGenetics` from delimited data, one animal per row.
///
/// `GeneticsCsv` implements Iterator so it can be passed
/// directly to `MemoryStore::observe()`
pub struct GeneticsCsv {
    records: std::iter::Enumerate<csv::StringRecordsIntoIter<Box<dyn Read>>>,
    fields: Vec<Field>,
    separator: String,
}

impl GeneticsCsv {
    fn new(
        records: csv::StringRecordsIntoIter<Box<dyn Read>>,
        fields: Vec<Field>,
        separator: &str,
    ) -> Self {
        Self {
            records: records.enumerate(),
            fields,
            separator: separator.to_owned(),
        }
    }

    fn entry(&self, locus: &str, cell: &str) -> LocusEntry {
        let cell = cell.trim();
        let parts: Vec<&str> = cell.split(&self.separator).map(str::trim).collect();
        let allele = |i: usize| parts.get(i).copied().filter(|a| !a.is_empty());
        let mut entry = match parts.len() {
            1 | 2 => LocusEntry::partial(locus, allele(0), allele(1)),
            _ => LocusEntry::partial(locus, None, None),
        };
        if !cell.is_empty() {
            entry.genotype = Some(cell.to_owned());
        }
        entry
    }
}

impl Iterator for GeneticsCsv {
    type Item = Result<AnimalGenetics>;

    fn next(&mut self) -> Option<Result<AnimalGenetics>> {
        let (idx, row) = self.records.next()?;
        let row = match row {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };

        let mut name = idx.to_string();
        let mut record = GeneticsRecord::new();
        for (field, cell) in self.fields.iter().zip(row.iter()) {
            match field {
                Field::Name => name = cell.trim().to_owned(),
                Field::Locus(category, locus) => {
                    record.push(*category, self.entry(locus, cell));
                }
            }
        }
        Some(Ok(AnimalGenetics { name, record }))
    }
}

/// Builds a `GeneticsCsv` reader.
///
/// Every header other than the name column is a locus. A header written
/// `category:locus` (e.g. `health:DM`) files the locus explicitly;
/// otherwise the category comes from the species' locus catalog, and
/// loci the catalog does not know land in `otherTraits`.
pub struct GeneticsCsvBuilder {
    delimiter: u8,
    separator: String,
    name_field: Option<String>,
    species: Species,
    fallback_species: Species,
}

impl GeneticsCsvBuilder {
    /// Construct a new GeneticsCsv builder
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            separator: crate::genotype::SEPARATOR.to_owned(),
            name_field: None,
            species: Species::Dog,
            fallback_species: Species::Dog,
        }
    }

    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Separator between the two alleles of a cell, `/` by default.
    pub fn separator(&mut self, separator: &str) -> &mut Self {
        self.separator = separator.to_owned();
        self
    }

    /// Column holding the animal's id. Without one, rows are numbered.
    pub fn name_field(&mut self, name_field: &str) -> &mut Self {
        self.name_field = Some(name_field.to_owned());
        self
    }

    pub fn species(&mut self, species: Species) -> &mut Self {
        self.species = species;
        self
    }

    pub fn fallback_species(&mut self, species: Species) -> &mut Self {
        self.fallback_species = species;
        self
    }

    pub fn from_reader(&self, reader: Box<dyn Read>) -> Result<GeneticsCsv> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let tables = SpeciesTables::resolve(&self.species, &self.fallback_species);
        let fields: Vec<Field> = rdr
            .headers()?
            .iter()
            .map(|header| {
                let header = header.trim();
                if self.name_field.as_deref() == Some(header) {
                    return Field::Name;
                }
                if let Some((prefix, locus)) = header.split_once(':') {
                    if let Some(category) = Category::parse(prefix) {
                        return Field::Locus(category, locus.trim().to_owned());
                    }
                }
                let category = tables
                    .locus(header)
                    .map_or(Category::OtherTraits, |def| def.category);
                trace!(locus = header, %category, "csv column");
                Field::Locus(category, header.to_owned())
            })
            .collect();

        if let Some(name_field) = &self.name_field {
            if !fields.iter().any(|f| matches!(f, Field::Name)) {
                return Err(PairingError::MissingNameColumn {
                    column: name_field.clone(),
                });
            }
        }

        Ok(GeneticsCsv::new(rdr.into_records(), fields, &self.separator))
    }
}

impl Default for GeneticsCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
